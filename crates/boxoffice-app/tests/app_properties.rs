//! Property-based tests for App state machine.
//!
//! Tests verify that invariants hold under arbitrary input sequences.
//! This ensures behavioral correctness across all possible execution paths.

use boxoffice_app::{App, AppAction, AppEvent, InputPolicy, Phase, Prompt, RuntimeConfig};
use boxoffice_core::{Layout, Seat, SeatState};
use proptest::prelude::*;

/// Generate random input lines, biased toward menu numbers and small seats.
fn line_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        6 => (-1i64..=12).prop_map(|n| AppEvent::Line(n.to_string())),
        1 => Just(AppEvent::Line(String::new())),
        1 => "[a-z]{1,4}".prop_map(AppEvent::Line),
        1 => Just(AppEvent::Line("99999999999999999999".to_string())),
    ]
}

#[allow(clippy::unwrap_used)]
fn configured(rows: u32, seats: u32) -> App {
    App::new(&RuntimeConfig::default().with_layout(Layout::new(rows, seats).unwrap()))
}

/// Every action list ends in a prompt, a quit, or an abort.
fn ends_in_wait_or_exit(actions: &[AppAction]) -> bool {
    matches!(
        actions.last(),
        None | Some(AppAction::Prompt(_) | AppAction::Quit | AppAction::Abort(_))
    )
}

proptest! {
    #[test]
    fn prop_bookings_never_released(
        rows in 1u32..=10,
        seats in 1u32..=10,
        events in prop::collection::vec(line_strategy(), 0..120),
    ) {
        let mut app = configured(rows, seats);
        let _ = app.handle(AppEvent::Start);
        let mut booked: Vec<Seat> = Vec::new();

        for event in events {
            let _ = app.handle(event);
            let grid = app.grid().unwrap();

            for seat in &booked {
                prop_assert_eq!(grid.state(*seat), Some(SeatState::Booked));
            }
            booked = grid.booked_seats().collect();
            prop_assert_eq!(grid.layout(), Layout::new(rows, seats).unwrap());
        }
    }

    #[test]
    fn prop_every_reply_waits_or_exits(
        events in prop::collection::vec(line_strategy(), 0..80),
    ) {
        let mut app = App::new(&RuntimeConfig::default());
        let start = app.handle(AppEvent::Start);
        prop_assert!(ends_in_wait_or_exit(&start));

        for event in events {
            let actions = app.handle(event);
            if app.is_closed() {
                prop_assert!(actions.is_empty() || ends_in_wait_or_exit(&actions));
            } else {
                prop_assert!(matches!(actions.last(), Some(AppAction::Prompt(_))));
                prop_assert_eq!(
                    actions.last().cloned(),
                    app.phase().prompt().map(AppAction::Prompt)
                );
            }
        }
    }

    #[test]
    fn prop_income_within_total(
        events in prop::collection::vec(line_strategy(), 0..120),
    ) {
        let mut app = configured(9, 9);
        for event in events {
            let _ = app.handle(event);
            let stats = app.statistics().unwrap();
            prop_assert!(stats.current_income <= stats.total_income);
            prop_assert_eq!(stats.purchased, app.grid().unwrap().booked_count());
        }
    }

    #[test]
    fn prop_strict_input_aborts_on_first_bad_line(
        prefix in prop::collection::vec((0i64..=3).prop_map(|n| n.to_string()), 0..10),
    ) {
        let config = RuntimeConfig::default()
            .with_layout(Layout::new(4, 4).unwrap())
            .with_input_policy(InputPolicy::Abort);
        let mut app = App::new(&config);

        for line in prefix {
            let _ = app.handle(AppEvent::Line(line));
        }
        let was_closed = app.is_closed();
        let actions = app.handle(AppEvent::Line("seat".into()));

        if was_closed {
            prop_assert!(actions.is_empty());
        } else {
            prop_assert!(matches!(actions.as_slice(), [AppAction::Abort(_)]));
        }
        prop_assert_eq!(app.phase(), Phase::Closed);
    }
}

#[test]
fn retry_loop_continues_until_a_seat_is_booked() {
    let mut app = configured(2, 2);
    let _ = app.handle(AppEvent::Line("2".into()));

    for (row, seat) in [("10", "1"), ("3", "1"), ("1", "9")] {
        let _ = app.handle(AppEvent::Line(row.into()));
        let _ = app.handle(AppEvent::Line(seat.into()));
        assert_eq!(app.phase(), Phase::AwaitingRow);
    }

    let _ = app.handle(AppEvent::Line("2".into()));
    let actions = app.handle(AppEvent::Line("2".into()));
    assert_eq!(actions.first(), Some(&AppAction::ShowTicketPrice { price: 10 }));
    assert_eq!(actions.last(), Some(&AppAction::Prompt(Prompt::MenuOption)));
    assert_eq!(app.phase(), Phase::Menu);
}
