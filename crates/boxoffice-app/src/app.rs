//! Application state machine.
//!
//! This module defines the [`App`] state machine, which drives the
//! interactive session completely decoupled from terminal I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Collects auditorium dimensions unless they were preconfigured.
//! - Owns the [`SeatGrid`] and lends it to the reservation operation.
//! - Dispatches menu selections and retries failed bookings.

use boxoffice_core::{
    Booking, Layout, PricingPolicy, SELECTION_CEILING, SeatGrid, Statistics, reserve,
};

use crate::{
    AppAction, AppEvent, InputError, InputPolicy, MenuChoice, Notice, Phase, Prompt, RuntimeConfig,
    parse_integer,
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Current position in the session.
    phase: Phase,
    /// Seat grid. `None` until dimensions are known.
    grid: Option<SeatGrid>,
    /// Ticket prices.
    pricing: PricingPolicy,
    /// Handling of non-numeric input.
    input_policy: InputPolicy,
    /// Most recent successful booking. `None` if nothing booked yet.
    last_booking: Option<Booking>,
}

impl App {
    /// Create a new App from the runtime configuration.
    pub fn new(config: &RuntimeConfig) -> Self {
        let (phase, grid) = match config.layout {
            Some(layout) => {
                warn_if_ceiling_limits(layout);
                (Phase::Menu, Some(SeatGrid::new(layout)))
            },
            None => (Phase::AwaitingRows, None),
        };

        Self {
            phase,
            grid,
            pricing: config.pricing,
            input_policy: config.input_policy,
            last_booking: None,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Start => match self.phase {
                Phase::Menu => menu(),
                phase => phase.prompt().map(AppAction::Prompt).into_iter().collect(),
            },
            AppEvent::EndOfInput => {
                if self.phase == Phase::Closed {
                    return vec![];
                }
                tracing::info!(phase = ?self.phase, "input exhausted");
                self.phase = Phase::Closed;
                vec![AppAction::Quit]
            },
            AppEvent::Line(line) => {
                if self.phase == Phase::Closed {
                    return vec![];
                }
                match parse_integer(&line) {
                    Ok(value) => self.handle_number(value),
                    Err(err) => self.handle_bad_input(err),
                }
            },
        }
    }

    fn handle_number(&mut self, value: i64) -> Vec<AppAction> {
        match self.phase {
            Phase::AwaitingRows => self.transition(Phase::AwaitingSeats { rows: value }),
            Phase::AwaitingSeats { rows } => self.configure(rows, value),
            Phase::Menu => self.select(value),
            Phase::AwaitingRow => self.transition(Phase::AwaitingSeat { row: value }),
            Phase::AwaitingSeat { row } => self.buy(row, value),
            Phase::Closed => vec![],
        }
    }

    fn handle_bad_input(&mut self, err: InputError) -> Vec<AppAction> {
        tracing::warn!(phase = ?self.phase, %err, "rejected input");
        match self.input_policy {
            InputPolicy::Reprompt => {
                let mut actions = vec![AppAction::Notify(Notice::NotANumber(err))];
                actions.extend(self.phase.prompt().map(AppAction::Prompt));
                actions
            },
            InputPolicy::Abort => {
                self.phase = Phase::Closed;
                vec![AppAction::Abort(err)]
            },
        }
    }

    /// Move to `phase` and ask for its input.
    fn transition(&mut self, phase: Phase) -> Vec<AppAction> {
        tracing::debug!(from = ?self.phase, to = ?phase, "phase transition");
        self.phase = phase;
        phase.prompt().map(AppAction::Prompt).into_iter().collect()
    }

    /// Build the seat grid once both dimensions are known.
    fn configure(&mut self, rows: i64, seats_per_row: i64) -> Vec<AppAction> {
        match Layout::from_input(rows, seats_per_row) {
            Ok(layout) => {
                tracing::info!(
                    rows = layout.rows(),
                    seats_per_row = layout.seats_per_row(),
                    "auditorium configured"
                );
                warn_if_ceiling_limits(layout);
                self.grid = Some(SeatGrid::new(layout));
                self.phase = Phase::Menu;
                menu()
            },
            Err(err) => {
                tracing::warn!(%err, "rejected auditorium dimensions");
                let mut actions = vec![AppAction::Notify(Notice::WrongInput)];
                actions.extend(self.transition(Phase::AwaitingRows));
                actions
            },
        }
    }

    /// Dispatch a menu selection.
    fn select(&mut self, value: i64) -> Vec<AppAction> {
        let Some(choice) = MenuChoice::from_number(value) else {
            tracing::warn!(option = value, "Unknown option");
            return menu();
        };

        tracing::debug!(?choice, "menu selection");
        match choice {
            MenuChoice::Exit => {
                self.phase = Phase::Closed;
                vec![AppAction::Quit]
            },
            MenuChoice::ShowSeats => with_menu(AppAction::ShowSeats),
            MenuChoice::BuyTicket => self.transition(Phase::AwaitingRow),
            MenuChoice::Statistics => with_menu(AppAction::ShowStatistics),
        }
    }

    /// Attempt a booking; on failure ask for a new row.
    fn buy(&mut self, row: i64, seat: i64) -> Vec<AppAction> {
        let Some(grid) = self.grid.as_mut() else {
            tracing::error!("booking attempted before the auditorium was configured");
            return self.transition(Phase::AwaitingRows);
        };

        match reserve(grid, &self.pricing, row, seat) {
            Ok(booking) => {
                self.last_booking = Some(booking);
                self.phase = Phase::Menu;
                let mut actions = vec![AppAction::ShowTicketPrice { price: booking.price }];
                actions.extend(menu());
                actions
            },
            Err(err) => {
                tracing::debug!(row, seat, %err, "reservation rejected");
                let mut actions = vec![AppAction::Notify(err.into())];
                actions.extend(self.transition(Phase::AwaitingRow));
                actions
            },
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the session has ended.
    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    /// Seat grid. `None` until the auditorium is configured.
    pub fn grid(&self) -> Option<&SeatGrid> {
        self.grid.as_ref()
    }

    /// Ticket prices in effect.
    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    /// Sales statistics. `None` until the auditorium is configured.
    pub fn statistics(&self) -> Option<Statistics> {
        self.grid.as_ref().map(|grid| Statistics::collect(grid, &self.pricing))
    }

    /// Most recent successful booking. `None` if nothing booked yet.
    pub fn last_booking(&self) -> Option<Booking> {
        self.last_booking
    }
}

/// Show the menu and ask for a selection.
fn menu() -> Vec<AppAction> {
    vec![AppAction::ShowMenu, AppAction::Prompt(Prompt::MenuOption)]
}

/// Run `action`, then show the menu again.
fn with_menu(action: AppAction) -> Vec<AppAction> {
    let mut actions = vec![action];
    actions.extend(menu());
    actions
}

fn warn_if_ceiling_limits(layout: Layout) {
    let ceiling = SELECTION_CEILING as u32;
    if layout.rows() > ceiling || layout.seats_per_row() > ceiling {
        tracing::warn!(
            rows = layout.rows(),
            seats_per_row = layout.seats_per_row(),
            ceiling,
            "rows or seats numbered above the selection ceiling cannot be booked"
        );
    }
}
