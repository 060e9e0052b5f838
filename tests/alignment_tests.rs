//! Alignment game integration tests: self-play, fixtures, search statistics.

use rust_minimax::core::{Cell, GameState, Role};
use rust_minimax::games::alignment::{AlignmentAction, AlignmentState};
use rust_minimax::search::{MinimaxSearch, RandomPlayer, ScoredAction, SearchConfig};

fn at(row: usize, col: usize) -> AlignmentAction {
    AlignmentAction::new(row, col)
}

fn parse(text: &str, to_move: Role) -> AlignmentState {
    AlignmentState::parse(text, 3, to_move).unwrap()
}

// =============================================================================
// Self-Play
// =============================================================================

#[test]
fn test_self_play_3x3_is_a_draw() {
    let mut state = AlignmentState::new(3, 3).unwrap();
    let mut search = MinimaxSearch::new(SearchConfig::new(5));
    let mut played = Vec::new();

    while let Some(mut action) = search.find_best_action(&mut state) {
        state.apply_action(&mut action);
        played.push(action);
    }

    assert!(state.is_terminal());
    assert_eq!(state.winner(), None);
    assert_eq!(state.evaluate(), 0);
    assert_eq!(
        played,
        vec![
            at(1, 1),
            at(2, 2),
            at(0, 1),
            at(2, 1),
            at(2, 0),
            at(0, 2),
            at(1, 2),
            at(1, 0),
            at(0, 0),
        ]
    );
}

#[test]
fn test_self_play_never_walks_into_a_loss() {
    let mut state = AlignmentState::new(3, 3).unwrap();
    let mut player = MinimaxSearch::new(SearchConfig::new(5));
    let mut oracle = MinimaxSearch::new(SearchConfig::new(9));

    while let Some(mut action) = player.find_best_action(&mut state) {
        state.apply_action(&mut action);
        if state.is_terminal() {
            break;
        }

        // Perfect play from here must still be a draw.
        let reply = oracle.find_best(&mut state).unwrap();
        assert_eq!(reply.value, 0, "forced result after {:?}", action);
    }

    assert_eq!(state.winner(), None);
}

#[test]
fn test_self_play_with_ordering_is_a_draw() {
    let mut state = AlignmentState::new(3, 3).unwrap();
    let mut search = MinimaxSearch::new(SearchConfig::new(5).with_move_ordering(true));

    while let Some(mut action) = search.find_best_action(&mut state) {
        state.apply_action(&mut action);
    }

    assert!(state.board().is_full());
    assert_eq!(state.winner(), None);
}

#[test]
fn test_full_search_never_loses_to_random_play() {
    for seed in 0..8 {
        for searcher in Role::ALL {
            let mut state = AlignmentState::new(3, 3).unwrap();
            let mut search = MinimaxSearch::new(SearchConfig::new(9));
            let mut random = RandomPlayer::new(seed);

            loop {
                let next = if state.to_move() == searcher {
                    search.find_best_action(&mut state)
                } else {
                    random.choose_action(&state)
                };
                let Some(mut action) = next else {
                    break;
                };
                state.apply_action(&mut action);
            }

            assert!(state.is_terminal());
            assert_ne!(
                state.winner(),
                Some(searcher.opponent()),
                "{} lost to random play with seed {}",
                searcher,
                seed
            );
        }
    }
}

// =============================================================================
// Fixtures
// =============================================================================

#[test]
fn test_min_run_scores_exactly_minus_win() {
    let state = parse("OOO\nXX.\nX.X", Role::Max);

    assert_eq!(state.winner(), Some(Role::Min));
    assert!(state.is_terminal());
    assert_eq!(state.evaluate(), -1000);
}

#[test]
fn test_search_on_terminal_state_returns_none() {
    let mut state = parse("OOO\nXX.\nX.X", Role::Max);
    let mut search = MinimaxSearch::new(SearchConfig::new(5));

    assert_eq!(search.find_best_action(&mut state), None);
    assert_eq!(search.stats().nodes_explored, 0);
}

#[test]
fn test_min_blocks_open_pair() {
    let mut state = parse("XX.\n.O.\n...", Role::Min);
    let mut search = MinimaxSearch::new(SearchConfig::new(2));

    let best = search.find_best(&mut state).unwrap();

    assert_eq!(best, ScoredAction { action: at(0, 2), value: 10 });
    assert_eq!(search.stats().nodes_explored, 21);
}

#[test]
fn test_max_completes_run() {
    let mut state = parse("XX.\nOO.\n...", Role::Max);
    let mut search = MinimaxSearch::new(SearchConfig::new(3));

    let best = search.find_best(&mut state).unwrap();

    assert_eq!(best, ScoredAction { action: at(0, 2), value: 1000 });
    assert_eq!(search.stats().nodes_explored, 33);
}

#[test]
fn test_min_forced_win_keeps_first_winning_action() {
    let mut state = parse("XX.\nOO.\n...", Role::Min);

    // Blocking on (0, 2) also wins by force and comes first in move order.
    let mut search = MinimaxSearch::new(SearchConfig::new(3));
    let best = search.find_best(&mut state).unwrap();
    assert_eq!(best, ScoredAction { action: at(0, 2), value: -1000 });
    assert_eq!(search.stats().nodes_explored, 36);

    let mut search = MinimaxSearch::new(SearchConfig::new(3).with_immediate_wins(true));
    let best = search.find_best(&mut state).unwrap();
    assert_eq!(best, ScoredAction { action: at(1, 2), value: -1000 });
    assert_eq!(search.stats().nodes_explored, 0);
}

#[test]
fn test_min_answers_centre_from_far_corner() {
    let mut state = AlignmentState::new(3, 3).unwrap();
    state.play(Cell::new(1, 1)).unwrap();

    let mut search = MinimaxSearch::new(SearchConfig::new(5));
    let best = search.find_best(&mut state).unwrap();

    // Every corner holds the draw; the bottom-right one is tried first.
    assert_eq!(best, ScoredAction { action: at(2, 2), value: 0 });
}

#[test]
fn test_ordering_changes_tie_break_not_value() {
    let mut state = parse("OXO\n.X.\nXO.", Role::Max);

    let mut plain = MinimaxSearch::new(SearchConfig::new(5));
    let mut ordered = MinimaxSearch::new(SearchConfig::new(5).with_move_ordering(true));
    let mut exhaustive = MinimaxSearch::new(SearchConfig::new(5).with_pruning(false));

    let a = plain.find_best(&mut state).unwrap();
    let b = ordered.find_best(&mut state).unwrap();
    let c = exhaustive.find_best(&mut state).unwrap();

    assert_eq!(a, ScoredAction { action: at(2, 2), value: 0 });
    assert_eq!(b, ScoredAction { action: at(1, 2), value: 0 });
    assert_eq!(c, a);

    assert_eq!(plain.stats().nodes_explored, 15);
    assert_eq!(ordered.stats().nodes_explored, 13);
}

// =============================================================================
// Statistics
// =============================================================================

#[test]
fn test_opening_move_statistics() {
    let mut state = AlignmentState::new(3, 3).unwrap();

    let mut pruned = MinimaxSearch::new(SearchConfig::new(5));
    let mut exhaustive = MinimaxSearch::new(SearchConfig::new(5).with_pruning(false));

    let a = pruned.find_best(&mut state).unwrap();
    let b = exhaustive.find_best(&mut state).unwrap();

    assert_eq!(a, ScoredAction { action: at(1, 1), value: 40 });
    assert_eq!(a, b);
    assert_eq!(pruned.stats().nodes_explored, 1079);
    assert_eq!(exhaustive.stats().nodes_explored, 18729);
    assert_eq!(pruned.stats().max_depth_reached, 5);
    assert_eq!(state, AlignmentState::new(3, 3).unwrap());
}

#[test]
fn test_shallow_searches_count_every_child() {
    let mut state = AlignmentState::new(3, 3).unwrap();

    let mut depth_one = MinimaxSearch::new(SearchConfig::new(1));
    assert_eq!(depth_one.find_best_action(&mut state), Some(at(1, 1)));
    assert_eq!(depth_one.stats().nodes_explored, 9);
    assert_eq!(depth_one.stats().max_depth_reached, 1);

    let mut depth_two = MinimaxSearch::new(SearchConfig::new(2));
    depth_two.find_best_action(&mut state);
    assert_eq!(depth_two.stats().nodes_explored, 25);
}

#[test]
fn test_larger_board_pruning_matches_exhaustive() {
    let mut state = AlignmentState::new(4, 3).unwrap();

    let mut pruned = MinimaxSearch::new(SearchConfig::new(3));
    let mut exhaustive = MinimaxSearch::new(SearchConfig::new(3).with_pruning(false));

    let a = pruned.find_best(&mut state).unwrap();
    let b = exhaustive.find_best(&mut state).unwrap();

    assert_eq!(a, ScoredAction { action: at(2, 2), value: 70 });
    assert_eq!(a, b);
    assert_eq!(pruned.stats().nodes_explored, 375);
    assert_eq!(exhaustive.stats().nodes_explored, 3616);
}

#[test]
fn test_collaborator_applies_returned_action() {
    let mut state = AlignmentState::new(3, 3).unwrap();
    let mut search = MinimaxSearch::new(SearchConfig::new(3));

    state.play(Cell::new(0, 0)).unwrap();
    let reply = search.find_best_action(&mut state).unwrap();
    state.play(reply.cell).unwrap();

    assert_eq!(state.board().get(Cell::new(0, 0)), Some(Role::Max));
    assert_eq!(state.board().get(reply.cell), Some(Role::Min));
    assert_eq!(state.to_move(), Role::Max);
}
