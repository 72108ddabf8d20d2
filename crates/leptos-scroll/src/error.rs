//! Scroll engine errors

use thiserror::Error;

pub type ScrollResult<T> = Result<T, ScrollError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrollError {
    /// Trigger expression could not be parsed, e.g. `"top sideways"`
    #[error("invalid trigger `{0}`")]
    InvalidTrigger(String),
    /// No element matched the selector or id
    #[error("no element matches `{0}`")]
    MissingTarget(String),
    /// `window` or `document` is not reachable (non-browser host)
    #[error("DOM is not available")]
    DomUnavailable,
    /// The runtime was stopped or never started
    #[error("scroll runtime is stopped")]
    Stopped,
    /// Called re-entrantly from inside a frame callback
    #[error("scroll runtime is busy")]
    Busy,
}
