//! Fuzz target for the menu state machine
//!
//! Feeds arbitrary lines to the App, optionally with a preconfigured room.
//!
//! # Invariants
//!
//! - Handling NEVER panics
//! - An open session always answers with its current prompt
//! - Booked seats are never released

#![no_main]

use arbitrary::Arbitrary;
use boxoffice_app::{App, AppAction, AppEvent, RuntimeConfig};
use boxoffice_core::Layout;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Session {
    layout: Option<(u8, u8)>,
    lines: Vec<String>,
}

fuzz_target!(|session: Session| {
    let layout = session
        .layout
        .and_then(|(rows, seats)| Layout::new(u32::from(rows), u32::from(seats)).ok());
    let config = match layout {
        Some(layout) => RuntimeConfig::default().with_layout(layout),
        None => RuntimeConfig::default(),
    };

    let mut app = App::new(&config);
    let _ = app.handle(AppEvent::Start);
    let mut booked = 0;

    for line in session.lines {
        let actions = app.handle(AppEvent::Line(line));
        if !app.is_closed() {
            assert_eq!(actions.last().cloned(), app.phase().prompt().map(AppAction::Prompt));
        }

        let now = app.grid().map_or(0, |grid| grid.booked_count());
        assert!(now >= booked);
        booked = now;
    }
});
