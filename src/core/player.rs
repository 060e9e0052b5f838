//! Player roles and per-role data storage.
//!
//! ## Role
//!
//! The two fixed sides of a zero-sum search. `Max` seeks the highest
//! evaluation, `Min` the lowest. A role doubles as the mark a side leaves
//! on the board.
//!
//! ## RoleMap
//!
//! Two-entry storage indexed by `Role`, used for per-side tallies.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::state::Score;

/// One of the two sides of a zero-sum game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Seeks the highest evaluation.
    Max,
    /// Seeks the lowest evaluation.
    Min,
}

impl Role {
    /// Both roles, `Max` first.
    pub const ALL: [Role; 2] = [Role::Max, Role::Min];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    /// Storage index (0 for `Max`, 1 for `Min`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Role::Max => 0,
            Role::Min => 1,
        }
    }

    /// Sign applied to scores earned by this role.
    #[must_use]
    pub const fn sign(self) -> Score {
        match self {
            Role::Max => 1,
            Role::Min => -1,
        }
    }

    /// Board diagram glyph.
    ///
    /// ```
    /// use rust_minimax::core::Role;
    ///
    /// assert_eq!(Role::Max.glyph(), 'X');
    /// assert_eq!(Role::from_glyph('O'), Some(Role::Min));
    /// ```
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Role::Max => 'X',
            Role::Min => 'O',
        }
    }

    /// Parse a board diagram glyph.
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'X' | 'x' => Some(Role::Max),
            'O' | 'o' => Some(Role::Min),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Max => write!(f, "Max"),
            Role::Min => write!(f, "Min"),
        }
    }
}

/// Per-role data storage with O(1) access.
///
/// ```
/// use rust_minimax::core::{Role, RoleMap};
///
/// let mut material: RoleMap<u32> = RoleMap::with_value(0);
/// material[Role::Min] += 3;
/// assert_eq!(material[Role::Max], 0);
/// assert_eq!(material[Role::Min], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleMap<T> {
    data: [T; 2],
}

impl<T> RoleMap<T> {
    /// Create a RoleMap with values from a factory function.
    pub fn new(factory: impl Fn(Role) -> T) -> Self {
        Self {
            data: [factory(Role::Max), factory(Role::Min)],
        }
    }

    /// Create a RoleMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Role, &T) pairs, `Max` first.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Role> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: Role) -> &Self::Output {
        &self.data[role.index()]
    }
}

impl<T> IndexMut<Role> for RoleMap<T> {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        &mut self.data[role.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_opponent() {
        assert_eq!(Role::Max.opponent(), Role::Min);
        assert_eq!(Role::Min.opponent(), Role::Max);
        assert_eq!(Role::Max.opponent().opponent(), Role::Max);
    }

    #[test]
    fn test_role_sign_and_index() {
        assert_eq!(Role::Max.sign(), 1);
        assert_eq!(Role::Min.sign(), -1);
        assert_eq!(Role::Max.index(), 0);
        assert_eq!(Role::Min.index(), 1);
        assert_eq!(format!("{}", Role::Min), "Min");
    }

    #[test]
    fn test_role_glyphs() {
        for role in Role::ALL {
            assert_eq!(Role::from_glyph(role.glyph()), Some(role));
        }
        assert_eq!(Role::from_glyph('.'), None);
    }

    #[test]
    fn test_role_map_indexing() {
        let mut map: RoleMap<i32> = RoleMap::new(|r| r.sign() * 10);
        assert_eq!(map[Role::Max], 10);
        assert_eq!(map[Role::Min], -10);

        map[Role::Min] += 4;
        assert_eq!(map[Role::Min], -6);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Role::Max, &10), (Role::Min, &-6)]);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Max).unwrap();
        let role: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, Role::Max);
    }
}
