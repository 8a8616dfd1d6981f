use std::fmt;

/// Failure modes of the sweep engine.
///
/// The sweep is otherwise infallible: degenerate input (overlaps, shared
/// endpoints, vertical curves, tangencies) is handled as ordinary cases, not
/// errors. The variants below are the only ways a caller-supplied oracle or
/// a pathological input can cause the sweep to give up instead of silently
/// producing a wrong answer.
#[derive(Debug)]
pub enum SweepError {
    /// The event queue grew past the configured bound (see
    /// [`crate::sweeper::SweepConfig::max_events`]) without the sweep
    /// finishing.
    ///
    /// This is the only way a caller can bound the memory/time a hostile or
    /// accidentally-quadratic input can force the sweep to spend; it is not
    /// raised by well-formed input under the default configuration.
    TooManyEvents { limit: usize },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::TooManyEvents { limit } => {
                write!(f, "event queue exceeded configured limit of {limit} events")
            }
        }
    }
}

impl std::error::Error for SweepError {}

pub type SweepResult<T> = Result<T, SweepError>;
