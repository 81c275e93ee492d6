use std::time::Duration;

use tablut_agent::shortcuts::{find_capturing_move, find_greedy_king_move};
use tablut_agent::tablut::{TablutMove, TablutSide, TablutState};
use tablut_agent::{Coord, Decision, DecisionEngine, EngineConfig, GameState, SearchNode};

const MUSCOVITE: TablutSide = TablutSide::Muscovite;
const SWEDE: TablutSide = TablutSide::Swede;

fn mv(from: (usize, usize), to: (usize, usize)) -> TablutMove {
    TablutMove::new(Coord::new(from.0, from.1), Coord::new(to.0, to.1))
}

fn instant_engine() -> DecisionEngine {
    DecisionEngine::new(EngineConfig::default().with_time_budget(Duration::ZERO))
}

#[test]
fn test_single_corner_move_is_played() {
    let state = TablutState::from_rows(
        &[
            ".KM......",
            ".M.......",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ],
        SWEDE,
    )
    .unwrap();
    assert_eq!(state.legal_moves(), vec![mv((0, 1), (0, 0))]);

    let mut engine = instant_engine();
    let chosen = engine.choose_move(&state, &SWEDE, &MUSCOVITE).unwrap();

    assert_eq!(chosen, mv((0, 1), (0, 0)));
    assert_eq!(engine.statistics().decision, Some(Decision::Win));
    assert_eq!(engine.statistics().rollouts, 0);
}

#[test]
fn test_win_takes_priority_over_capture() {
    let state = TablutState::from_rows(
        &[
            "..M......",
            "MS.......",
            ".....MK..",
            ".........",
            ".........",
            ".......M.",
            ".........",
            ".........",
            ".........",
        ],
        MUSCOVITE,
    )
    .unwrap();

    let mut root = SearchNode::root(state.clone());
    root.expand().unwrap();
    assert_eq!(
        find_capturing_move(&state, &root.children, &SWEDE),
        Some(mv((0, 2), (1, 2)))
    );

    let mut engine = instant_engine();
    let chosen = engine.choose_move(&state, &MUSCOVITE, &SWEDE).unwrap();

    assert_eq!(chosen, mv((5, 7), (2, 7)));
    assert_eq!(engine.statistics().decision, Some(Decision::Win));
}

#[test]
fn test_greedy_king_move_skips_unsafe_squares() {
    // Every king move except (5, 2) reopens the row for the Muscovite on
    // (5, 6), which would then capture the Swede on (5, 1).
    let state = TablutState::from_rows(
        &[
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            "MS.K..M..",
            ".........",
            ".........",
            ".........",
        ],
        SWEDE,
    )
    .unwrap();

    assert_eq!(
        find_greedy_king_move(&state, &SWEDE).unwrap(),
        Some(mv((5, 3), (5, 2)))
    );

    let mut engine = instant_engine();
    let chosen = engine.choose_move(&state, &SWEDE, &MUSCOVITE).unwrap();

    assert_eq!(chosen, mv((5, 3), (5, 2)));
    assert_eq!(engine.statistics().decision, Some(Decision::GreedyKing));
    assert_eq!(engine.statistics().rollouts, 0);
}

#[test]
fn test_greedy_king_move_prefers_closest_corner() {
    // Every reducing king move is safe. The upward run stops at (2, 2), so
    // the closest square is (8, 2), listed after several farther ones.
    let state = TablutState::from_rows(
        &[
            ".........",
            "..S......",
            ".........",
            ".........",
            "..K......",
            ".........",
            ".........",
            ".........",
            "......M..",
        ],
        SWEDE,
    )
    .unwrap();

    let king = state.king_coordinate();
    let current = state.distance_to_nearest_corner(king);
    let reducing = state
        .legal_moves_for_piece(king)
        .into_iter()
        .filter(|m| state.distance_to_nearest_corner(m.to) < current)
        .count();
    assert!(reducing > 1);

    assert_eq!(
        find_greedy_king_move(&state, &SWEDE).unwrap(),
        Some(mv((4, 2), (8, 2)))
    );

    let mut engine = instant_engine();
    let chosen = engine.choose_move(&state, &SWEDE, &MUSCOVITE).unwrap();

    assert_eq!(chosen, mv((4, 2), (8, 2)));
    assert_eq!(engine.statistics().decision, Some(Decision::GreedyKing));
}

#[test]
fn test_greedy_king_move_keeps_first_on_ties() {
    // (0, 4), (1, 3) and (1, 5) all end four squares from a corner.
    let state = TablutState::from_rows(
        &[
            ".........",
            "..S.K.S..",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            "....M....",
        ],
        SWEDE,
    )
    .unwrap();

    for to in [(0, 4), (1, 3), (1, 5)] {
        assert_eq!(state.distance_to_nearest_corner(Coord::new(to.0, to.1)), 4);
    }

    assert_eq!(
        find_greedy_king_move(&state, &SWEDE).unwrap(),
        Some(mv((1, 4), (0, 4)))
    );
}

#[test]
fn test_greedy_king_shortcut_can_be_disabled() {
    let state = TablutState::from_rows(
        &[
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            "MS.K..M..",
            ".........",
            ".........",
            ".........",
        ],
        SWEDE,
    )
    .unwrap();

    let config = EngineConfig::default()
        .with_time_budget(Duration::ZERO)
        .with_greedy_king_shortcut(false);
    let mut engine = DecisionEngine::new(config);
    let chosen = engine.choose_move(&state, &SWEDE, &MUSCOVITE).unwrap();

    assert_eq!(engine.statistics().decision, Some(Decision::Search));
    assert_eq!(chosen, state.legal_moves()[0]);
    assert_ne!(chosen, mv((5, 3), (5, 2)));
}

#[test]
fn test_unsafe_king_advance_falls_through_to_search() {
    let state = TablutState::from_rows(
        &[
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".MSK..M..",
            ".........",
            ".........",
            ".........",
        ],
        SWEDE,
    )
    .unwrap();

    let king = state.king_coordinate();
    let current = state.distance_to_nearest_corner(king);
    assert!(state
        .legal_moves_for_piece(king)
        .iter()
        .any(|m| state.distance_to_nearest_corner(m.to) < current));
    assert_eq!(find_greedy_king_move(&state, &SWEDE).unwrap(), None);

    let mut engine = instant_engine();
    let chosen = engine.choose_move(&state, &SWEDE, &MUSCOVITE).unwrap();

    assert_eq!(engine.statistics().decision, Some(Decision::Search));
    assert_eq!(chosen, state.legal_moves()[0]);
}

#[test]
fn test_greedy_shortcut_is_king_side_only() {
    let state = TablutState::new();
    assert_eq!(find_greedy_king_move(&state, &MUSCOVITE).unwrap(), None);
}

fn capture_position() -> TablutState {
    TablutState::from_rows(
        &[
            ".........",
            ".........",
            ".MS......",
            ".........",
            ".........",
            "...M.....",
            ".........",
            "......K..",
            ".........",
        ],
        MUSCOVITE,
    )
    .unwrap()
}

#[test]
fn test_capture_shortcut() {
    let state = capture_position();
    let mut engine = instant_engine();
    let chosen = engine.choose_move(&state, &MUSCOVITE, &SWEDE).unwrap();

    assert_eq!(chosen, mv((5, 3), (2, 3)));
    assert_eq!(engine.statistics().decision, Some(Decision::Capture));
    assert_eq!(engine.statistics().rollouts, 0);
}

#[test]
fn test_capture_shortcut_can_be_disabled() {
    let state = capture_position();
    let config = EngineConfig::default()
        .with_time_budget(Duration::ZERO)
        .with_capture_shortcut(false);
    let mut engine = DecisionEngine::new(config);
    let chosen = engine.choose_move(&state, &MUSCOVITE, &SWEDE).unwrap();

    assert_eq!(chosen, mv((2, 1), (1, 1)));
    assert_eq!(engine.statistics().decision, Some(Decision::Search));
}
