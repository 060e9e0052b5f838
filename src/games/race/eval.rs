//! Static evaluation for the capture race.
//!
//! Every term is accumulated per role and the result is the `Max` total
//! minus the `Min` total. A decided game returns `±WIN_SCORE`, which no
//! heuristic sum can reach.

use crate::core::{Cell, GameState, Role, RoleMap, Score};

use super::game::{RaceState, BOARD_SIZE};

/// Value of a decided game.
pub const WIN_SCORE: Score = 100_000;

/// Material value of one piece.
pub const PIECE: Score = 100;

/// Per row travelled from the home edge.
pub const ADVANCE: Score = 20;

/// Piece standing on one of the central columns.
pub const CENTRAL: Score = 15;

/// Per legal destination.
pub const MOBILITY: Score = 10;

/// Per allied piece diagonally behind.
pub const PROTECTION: Score = 25;

/// Piece whose left neighbour is allied.
pub const PAIR: Score = 30;

/// Per column holding at least one piece of the role.
pub const COLUMN_CONTROL: Score = 40;

/// Piece one row from its goal.
pub const NEAR_PROMOTION: Score = 800;

/// Per capture available.
pub const ATTACK: Score = 35;

/// Per missing piece below `DEFENSE_THRESHOLD` on the trailing side.
pub const DEFENSE: Score = 20;

/// Material below which the leader is rewarded for trading down.
const DEFENSE_THRESHOLD: usize = 4;

const CENTRAL_COLUMNS: std::ops::RangeInclusive<usize> = 2..=BOARD_SIZE - 3;

/// Score `state` from `Max`'s point of view.
pub fn evaluate(state: &RaceState) -> Score {
    if let Some(role) = state.winner() {
        return role.sign() * WIN_SCORE;
    }

    let board = state.board();
    let mut totals: RoleMap<Score> = RoleMap::with_value(0);
    let mut material: RoleMap<usize> = RoleMap::with_value(0);
    let mut columns: RoleMap<[bool; BOARD_SIZE]> = RoleMap::with_value([false; BOARD_SIZE]);

    for (cell, mark) in board.cells() {
        let Some(role) = mark else {
            continue;
        };

        material[role] += 1;
        columns[role][cell.col] = true;

        let home = RaceState::goal_row(role.opponent());
        let mut score = PIECE + ADVANCE * home.abs_diff(cell.row) as Score;

        if CENTRAL_COLUMNS.contains(&cell.col) {
            score += CENTRAL;
        }

        let destinations = state.destinations(cell);
        score += MOBILITY * destinations.len() as Score;
        score += ATTACK
            * destinations
                .iter()
                .filter(|&&to| board.get(to) == Some(role.opponent()))
                .count() as Score;

        score += PROTECTION * protectors(state, cell, role) as Score;

        if cell.col > 0 && board.get(Cell::new(cell.row, cell.col - 1)) == Some(role) {
            score += PAIR;
        }

        if RaceState::row_ahead(cell.row, role) == Some(RaceState::goal_row(role)) {
            score += NEAR_PROMOTION;
        }

        totals[role] += score;
    }

    for role in Role::ALL {
        totals[role] += COLUMN_CONTROL * columns[role].iter().filter(|&&held| held).count() as Score;
    }

    for role in Role::ALL {
        let trailing = material[role.opponent()];
        if material[role] > trailing && trailing < DEFENSE_THRESHOLD {
            totals[role] += DEFENSE * (DEFENSE_THRESHOLD - trailing) as Score;
        }
    }

    totals[Role::Max] - totals[Role::Min]
}

/// Allied pieces on the two cells diagonally behind `cell`.
fn protectors(state: &RaceState, cell: Cell, role: Role) -> usize {
    let Some(row) = RaceState::row_behind(cell.row, role) else {
        return 0;
    };

    [cell.col.checked_sub(1), Some(cell.col + 1)]
        .into_iter()
        .flatten()
        .map(|col| Cell::new(row, col))
        .filter(|&behind| state.board().contains(behind) && state.board().get(behind) == Some(role))
        .count()
}
