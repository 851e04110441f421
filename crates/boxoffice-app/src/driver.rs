//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! line-oriented input and output, while the generic [`crate::Runtime`]
//! handles all orchestration.

/// Abstracts line-oriented I/O for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs against a terminal and in tests.
///
/// # Implementations
///
/// - **Terminal**: buffered stdin/stdout
/// - **Scripted**: queued lines and a captured transcript
pub trait Driver {
    /// Platform-specific error type.
    type Error: std::error::Error + 'static;

    /// Read the next line of input, without its line terminator.
    ///
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, Self::Error>;

    /// Write `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the output sink rejects the write.
    fn write_line(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Release resources at the end of a session.
    fn stop(&mut self) {}
}
