//! Text rendering
//!
//! Rendering functions that convert App state into terminal lines. All
//! functions are pure (no I/O); the runtime hands the result to the driver.

use boxoffice_core::{SeatGrid, Statistics};

use crate::{App, AppAction, Notice, Prompt};

/// Text for an action, or `None` if the action produces no output.
///
/// The returned text may span several lines and carries no trailing newline.
pub fn action(app: &App, action: &AppAction) -> Option<String> {
    match action {
        AppAction::Prompt(prompt) => Some(self::prompt(*prompt).to_string()),
        AppAction::ShowMenu => Some(menu().to_string()),
        AppAction::ShowSeats => app.grid().map(seat_chart),
        AppAction::ShowStatistics => app.statistics().map(|stats| statistics(&stats)),
        AppAction::ShowTicketPrice { price } => Some(ticket_price(*price)),
        AppAction::Notify(notice) => Some(self::notice(notice)),
        AppAction::Abort(_) | AppAction::Quit => None,
    }
}

/// Question asked for a prompt.
pub fn prompt(prompt: Prompt) -> &'static str {
    match prompt {
        Prompt::Rows => "Enter the number of rows:",
        Prompt::SeatsPerRow => "Enter the number of seats in each row:",
        Prompt::MenuOption => "Select an option:",
        Prompt::Row => "Enter a row number:",
        Prompt::SeatInRow => "Enter a seat number in that row:",
    }
}

/// Main menu, preceded by a blank line.
pub fn menu() -> &'static str {
    "\n1. Show the seats\n2. Buy a ticket\n3. Statistics\n0. Exit"
}

/// Seating chart: a title, a header of seat numbers, then one line per row.
pub fn seat_chart(grid: &SeatGrid) -> String {
    let seats = grid.layout().seats_per_row();
    let header = (1..=seats).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");

    let mut lines = vec!["Cinema:".to_string(), format!("  {header}")];
    lines.extend(grid.rows().zip(1u32..).map(|(cells, row)| {
        let symbols: String =
            cells.iter().flat_map(|state| [' ', state.symbol()]).collect();
        format!("{row}{symbols}")
    }));
    lines.join("\n")
}

/// Statistics report.
pub fn statistics(stats: &Statistics) -> String {
    format!(
        "Number of purchased tickets: {}\nPercentage: {:.2}%\nCurrent income: ${}\nTotal income: ${}",
        stats.purchased, stats.percentage, stats.current_income, stats.total_income
    )
}

/// Price line shown after a successful booking.
pub fn ticket_price(price: u32) -> String {
    format!("Ticket price: ${price}")
}

/// Message for rejected input.
pub fn notice(notice: &Notice) -> String {
    match notice {
        Notice::WrongInput => "Wrong input!".to_string(),
        Notice::AlreadyPurchased => "That ticket has already been purchased!".to_string(),
        Notice::NotANumber(err) => format!("Invalid input: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use boxoffice_core::{Layout, PricingPolicy, reserve};

    use super::*;
    use crate::{InputError, RuntimeConfig};

    #[test]
    fn seat_chart_marks_booked_seats() {
        let mut grid = SeatGrid::new(Layout::new(3, 4).unwrap());
        reserve(&mut grid, &PricingPolicy::default(), 2, 3).unwrap();

        assert_eq!(seat_chart(&grid), "Cinema:\n  1 2 3 4\n1 S S S S\n2 S S B S\n3 S S S S");
    }

    #[test]
    fn seat_chart_single_seat() {
        let grid = SeatGrid::new(Layout::new(1, 1).unwrap());
        assert_eq!(seat_chart(&grid), "Cinema:\n  1\n1 S");
    }

    #[test]
    fn statistics_two_decimal_percentage() {
        let stats =
            Statistics { purchased: 1, percentage: 100.0 / 3.0, current_income: 10, total_income: 30 };

        insta::assert_snapshot!(statistics(&stats), @r"
Number of purchased tickets: 1
Percentage: 33.33%
Current income: $10
Total income: $30
");
    }

    #[test]
    fn notices() {
        assert_eq!(notice(&Notice::WrongInput), "Wrong input!");
        assert_eq!(notice(&Notice::AlreadyPurchased), "That ticket has already been purchased!");
        assert_eq!(
            notice(&Notice::NotANumber(InputError::NotANumber { input: "x".into() })),
            "Invalid input: \"x\" is not a whole number"
        );
    }

    #[test]
    fn quit_and_abort_render_nothing() {
        let app = App::new(&RuntimeConfig::default());
        assert_eq!(action(&app, &AppAction::Quit), None);
        assert_eq!(action(&app, &AppAction::Abort(InputError::Empty)), None);
    }

    #[test]
    fn seats_before_setup_render_nothing() {
        let app = App::new(&RuntimeConfig::default());
        assert_eq!(action(&app, &AppAction::ShowSeats), None);
        assert_eq!(action(&app, &AppAction::ShowStatistics), None);
    }

    #[test]
    fn menu_starts_with_blank_line() {
        assert!(menu().starts_with('\n'));
        assert_eq!(menu().lines().count(), 5);
    }
}
