#![cfg(feature = "test-utils")]

use minefield::{Field, FlagState, Position};

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

#[test]
fn test_open_three_by_three_in_one_click() {
    let mut field = Field::new(3, 3, 0).unwrap();
    field.reveal(p(1, 1));

    assert_eq!(field.revealed_count(), 9);
    assert!(field.positions().all(|q| field.is_revealed(q)));
    assert!(field.is_complete());
    assert!(!field.exploded());
}

#[test]
fn test_one_by_two_single_safe_square() {
    let mut field = Field::with_mine_layout(1, 2, &[p(0, 0)]).unwrap();
    field.reveal(p(0, 1));

    assert_eq!(field.adjacent_mines(p(0, 1)), 1);
    assert!(!field.is_revealed(p(0, 0)));
    assert_eq!(field.revealed_count(), 1);
    assert!(field.is_complete());
}

#[test]
fn test_completion_ignores_flags() {
    let mut field = Field::with_mine_layout(1, 2, &[p(0, 0)]).unwrap();
    field.set_flag(p(0, 0), FlagState::Maybe);
    field.reveal(p(0, 1));
    assert!(field.is_complete());

    let mut unflagged = Field::with_mine_layout(1, 2, &[p(0, 0)]).unwrap();
    unflagged.reveal(p(0, 1));
    assert!(unflagged.is_complete());
}

#[test]
fn test_explosion_blocks_completion() {
    let mines = [p(2, 2)];
    let mut field = Field::with_mine_layout(5, 5, &mines).unwrap();
    field.reveal(p(2, 2));
    assert!(field.exploded());
    assert_eq!(field.revealed_count(), 1);

    for q in field.positions().collect::<Vec<_>>() {
        field.reveal(q);
    }
    assert!(field.exploded());
    assert!(!field.is_complete());
}

#[test]
fn test_double_flag_and_reveal_bookkeeping() {
    let mut field = Field::with_mine_layout(4, 4, &[p(3, 3)]).unwrap();
    field.set_flag(p(0, 3), FlagState::Flagged);
    field.set_flag(p(0, 3), FlagState::Flagged);
    assert_eq!(field.flagged_count(), 1);

    // Flagged squares are protected from a direct reveal.
    field.reveal(p(0, 3));
    assert!(!field.is_revealed(p(0, 3)));
    assert_eq!(field.flagged_count(), 1);

    // A cascade from (0, 0) still sweeps over it.
    field.reveal(p(0, 0));
    assert!(field.is_revealed(p(0, 3)));
    assert_eq!(field.get_flag(p(0, 3)), FlagState::None);

    // Only the auto-flagged mine is left carrying a flag after the win.
    assert!(field.is_won());
    assert_eq!(field.flagged_count(), 1);
    assert_eq!(field.get_flag(p(3, 3)), FlagState::Flagged);
}

#[test]
fn test_multi_release_on_concealed_or_flagged_target_changes_nothing() {
    let mines = [p(0, 0), p(3, 0)];
    let mut field = Field::with_mine_layout(4, 4, &mines).unwrap();
    field.set_autoflag(true);
    field.set_flag(p(1, 1), FlagState::Flagged);

    let snapshot = |f: &Field| {
        f.positions()
            .map(|q| (f.is_revealed(q), f.get_flag(q)))
            .collect::<Vec<_>>()
    };
    let before = snapshot(&field);

    field.multi_release(p(1, 1));
    field.multi_release(p(2, 2));
    assert_eq!(snapshot(&field), before);
    assert_eq!(field.flagged_count(), 1);
}

#[test]
fn test_chord_around_numbered_square() {
    let mines = [p(0, 0), p(2, 0)];
    let mut field = Field::with_mine_layout(3, 4, &mines).unwrap();
    field.reveal(p(1, 0));
    assert_eq!(field.adjacent_mines(p(1, 0)), 2);

    field.set_flag(p(0, 0), FlagState::Flagged);
    field.multi_release(p(1, 0));
    assert_eq!(field.revealed_count(), 1);

    field.set_flag(p(2, 0), FlagState::Flagged);
    field.multi_release(p(1, 0));
    assert_eq!(field.revealed_count(), 4);
    assert!(!field.exploded());
    assert!(!field.has_flag_warning(p(1, 0)));

    field.reveal(p(1, 3));
    assert!(field.is_won());
}
