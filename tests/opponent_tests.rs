//! Computer opponent column selection.

use proptest::prelude::*;

use knucklebones::ai::{
    hard_breakdown, medium_scores, select_column, ColumnPolicy, GreedyColumn, RandomColumn,
    SelectionView, TacticalColumn,
};
use knucklebones::core::{Die, Difficulty, GameConfig, ScriptedDice, SeededDice, Side};
use knucklebones::grid::{Grid, COLUMNS};
use knucklebones::rules::{Rejection, TurnEngine};

fn die(face: u8) -> Die {
    Die::new(face).unwrap()
}

fn column_faces() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, 0..=3)
}

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (column_faces(), column_faces(), column_faces())
        .prop_map(|(a, b, c)| Grid::from_faces([a.as_slice(), b.as_slice(), c.as_slice()]))
}

// =============================================================================
// Medium
// =============================================================================

#[test]
fn test_medium_stacks_onto_matches() {
    let own = Grid::from_faces([&[2], &[4, 4], &[4]]);
    let enemy = Grid::new();
    let view = SelectionView::new(&own, &enemy, die(4));

    let scores: Vec<_> = medium_scores(&view).into_iter().collect();
    assert_eq!(scores, vec![(0, 0), (1, 20), (2, 10)]);
    assert_eq!(GreedyColumn.choose(&view, &mut ScriptedDice::new()), Some(1));
}

#[test]
fn test_medium_destruction_outweighs_single_stack() {
    // Stack: 10. Destroy one 3: 5 × 3 = 15.
    let own = Grid::from_faces([&[3], &[], &[]]);
    let enemy = Grid::from_faces([&[], &[3], &[]]);
    let view = SelectionView::new(&own, &enemy, die(3));

    assert_eq!(GreedyColumn.choose(&view, &mut ScriptedDice::new()), Some(1));
}

#[test]
fn test_medium_empty_board_picks_first_column() {
    let (own, enemy) = (Grid::new(), Grid::new());
    let view = SelectionView::new(&own, &enemy, die(6));
    assert_eq!(select_column(Difficulty::Medium, &view, &mut SeededDice::new(0)), Some(0));
}

proptest! {
    /// With an empty enemy grid, Medium prefers the column already holding
    /// the most copies of the value.
    #[test]
    fn prop_medium_prefers_most_matches(own in grid_strategy(), face in 1u8..=6) {
        prop_assume!(!own.is_full());
        let enemy = Grid::new();
        let value = die(face);
        let view = SelectionView::new(&own, &enemy, value);

        let choice = select_column(Difficulty::Medium, &view, &mut ScriptedDice::new()).unwrap();
        let chosen = own.column(choice).unwrap().count(value);

        for col in own.available_columns() {
            let count = own.column(col).unwrap().count(value);
            prop_assert!(count <= chosen);
            if count == chosen {
                prop_assert!(choice <= col);
            }
        }
    }

    /// Every policy returns an open column, and only `None` for a full grid.
    #[test]
    fn prop_choice_is_available(own in grid_strategy(), enemy in grid_strategy(), face in 1u8..=6, seed in any::<u64>()) {
        let view = SelectionView::new(&own, &enemy, die(face));
        let mut dice = SeededDice::new(seed);

        for difficulty in Difficulty::ALL {
            match select_column(difficulty, &view, &mut dice) {
                Some(col) => prop_assert!(own.is_column_available(col)),
                None => prop_assert!(own.is_full()),
            }
        }
    }

    /// Hard picks the first column with the highest total.
    #[test]
    fn prop_hard_picks_first_maximum(own in grid_strategy(), enemy in grid_strategy(), face in 1u8..=6) {
        prop_assume!(!own.is_full());
        let view = SelectionView::new(&own, &enemy, die(face));

        let terms = hard_breakdown(&view);
        let best = terms.iter().map(|(_, t)| t.total()).max().unwrap();
        let expected = terms.iter().find(|(_, t)| t.total() == best).map(|(c, _)| *c);

        prop_assert_eq!(TacticalColumn.choose(&view, &mut ScriptedDice::new()), expected);
    }
}

// =============================================================================
// Hard
// =============================================================================

#[test]
fn test_hard_closing_bonus_only_when_ahead() {
    // Own column 1 has two dice; finishing it is worth +10 only when leading.
    let own_ahead = Grid::from_faces([&[], &[6, 5], &[]]);
    let own_behind = Grid::from_faces([&[], &[1, 2], &[]]);
    let enemy = Grid::from_faces([&[4], &[], &[]]);

    let ahead = SelectionView::new(&own_ahead, &enemy, die(3));
    let behind = SelectionView::new(&own_behind, &enemy, die(3));

    // Ahead: col 0 = 5, col 1 = 5 + 10, col 2 = 5
    assert_eq!(TacticalColumn.choose(&ahead, &mut ScriptedDice::new()), Some(1));
    // Behind: all 5, tie goes to column 0
    assert_eq!(TacticalColumn.choose(&behind, &mut ScriptedDice::new()), Some(0));
}

#[test]
fn test_hard_breakdown_terms() {
    let own = Grid::from_faces([&[5], &[], &[1, 1]]);
    let enemy = Grid::from_faces([&[], &[5, 5, 2], &[]]);
    let view = SelectionView::new(&own, &enemy, die(5));

    let terms = hard_breakdown(&view);
    assert_eq!(terms.len(), COLUMNS);

    let (_, col0) = terms[0];
    assert_eq!((col0.stack, col0.destroy, col0.safety), (15, 0, 5));

    let (_, col1) = terms[1];
    // 3 × 2 × (5 × 2) = 60, big stack 20
    assert_eq!((col1.destroy, col1.big_stack, col1.safety), (60, 20, 0));
    assert_eq!(col1.total(), 80);

    assert_eq!(TacticalColumn.choose(&view, &mut ScriptedDice::new()), Some(1));
}

// =============================================================================
// Easy
// =============================================================================

#[test]
fn test_easy_covers_every_open_column() {
    let own = Grid::from_faces([&[1, 2, 3], &[], &[]]);
    let enemy = Grid::new();
    let view = SelectionView::new(&own, &enemy, die(2));
    let mut dice = SeededDice::new(17);

    let mut seen = [0u32; COLUMNS];
    for _ in 0..3000 {
        let col = RandomColumn.choose(&view, &mut dice).unwrap();
        seen[col] += 1;
    }

    assert_eq!(seen[0], 0);
    assert!(seen[1] > 1300 && seen[1] < 1700, "column 1 chosen {} times", seen[1]);
    assert!(seen[2] > 1300 && seen[2] < 1700, "column 2 chosen {} times", seen[2]);
}

// =============================================================================
// Engine integration
// =============================================================================

#[test]
fn test_opponent_turn_uses_configured_difficulty() {
    // Player places a 6 in column 2; opponent rolls 6 and Medium destroys it.
    let config = GameConfig::new()
        .without_coin_flip()
        .with_difficulty(Difficulty::Medium);
    let dice = ScriptedDice::new().with_faces(&[6, 6]);
    let mut engine = TurnEngine::with_dice(config, dice);

    engine.request_roll().unwrap();
    engine.place_pending(2).unwrap();

    let placement = engine.play_opponent_turn().unwrap();
    assert_eq!(placement.record.column, 2);
    assert_eq!(placement.record.destroyed, 1);
    assert!(engine.grid(Side::Player).is_empty());
}

#[test]
fn test_opponent_turn_reveals_roll_in_flight() {
    let config = GameConfig::new()
        .without_coin_flip()
        .with_first_side(Side::Opponent);
    let dice = ScriptedDice::new().with_faces(&[3]);
    let mut engine = TurnEngine::with_dice(config, dice);

    assert_eq!(engine.begin_roll().map(Die::value), Ok(3));
    let placement = engine.play_opponent_turn().unwrap();

    assert_eq!(placement.record.value.value(), 3);
    assert!(!engine.state().is_rolling());
}

#[test]
fn test_choose_column_needs_pending_die() {
    let mut engine = TurnEngine::seeded(GameConfig::new().without_coin_flip(), 1);
    assert_eq!(
        engine.choose_column_with(Difficulty::Hard),
        Err(Rejection::NoPendingRoll)
    );

    engine.request_roll().unwrap();
    let col = engine.choose_column_with(Difficulty::Hard).unwrap();
    assert!(col < COLUMNS);
    // Choosing does not place.
    assert!(engine.grid(Side::Player).is_empty());
    assert!(engine.pending().is_some());
}
