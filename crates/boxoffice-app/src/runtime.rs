//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: menu state machine
//! - [`Driver`]: platform-specific line I/O
//! - [`render`](crate::render): text for each action

use thiserror::Error;

use crate::{App, AppAction, AppEvent, Driver, InputError, RuntimeConfig, render};

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError<E>
where
    E: std::error::Error + 'static,
{
    /// I/O error from the driver.
    #[error("driver error: {0}")]
    Driver(#[source] E),

    /// Input that could not be parsed, under [`crate::InputPolicy::Abort`].
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
}

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
    started: bool,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and configuration.
    pub fn new(driver: D, config: &RuntimeConfig) -> Self {
        Self { driver, app: App::new(config), started: false }
    }

    /// Run the session until the user exits or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails, or if input cannot be parsed
    /// and the configuration asks to abort.
    pub fn run(&mut self) -> Result<(), RuntimeError<D::Error>> {
        let result = self.drive();
        self.driver.stop();
        tracing::info!(phase = ?self.app.phase(), "session ended");
        result
    }

    fn drive(&mut self) -> Result<(), RuntimeError<D::Error>> {
        if self.start()? {
            return Ok(());
        }

        while !self.step()? {}
        Ok(())
    }

    /// Show the first prompt (or the menu, if preconfigured).
    ///
    /// Returns `true` if the application should quit. Calling this more than
    /// once has no effect.
    pub fn start(&mut self) -> Result<bool, RuntimeError<D::Error>> {
        if self.started {
            return Ok(self.app.is_closed());
        }
        self.started = true;

        tracing::info!(phase = ?self.app.phase(), "session started");
        let actions = self.app.handle(AppEvent::Start);
        self.process_actions(actions)
    }

    /// Read one line of input and process it.
    ///
    /// Returns `true` if the application should quit.
    pub fn step(&mut self) -> Result<bool, RuntimeError<D::Error>> {
        if self.start()? {
            return Ok(true);
        }

        let event = match self.driver.read_line().map_err(RuntimeError::Driver)? {
            Some(line) => AppEvent::Line(line),
            None => AppEvent::EndOfInput,
        };

        let actions = self.app.handle(event);
        self.process_actions(actions)
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, RuntimeError<D::Error>> {
        for action in actions {
            match action {
                AppAction::Quit => return Ok(true),
                AppAction::Abort(err) => return Err(err.into()),
                action => {
                    if let Some(text) = render::action(&self.app, &action) {
                        self.driver.write_line(&text).map_err(RuntimeError::Driver)?;
                    }
                },
            }
        }
        Ok(self.app.is_closed())
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Consume the runtime and return the driver.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
