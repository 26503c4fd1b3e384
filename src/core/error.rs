//! Error types.
//!
//! - `InvalidMoveError`: untyped input that is not one of the three moves
//! - `StoreError`: the persistence mechanism failed (recovered by callers)
//! - `GameError`: an input arrived in a round phase that does not accept it

use thiserror::Error;

/// A value outside the three-move enumeration reached the resolver.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid move {input:?}: expected rock, paper or scissors")]
pub struct InvalidMoveError {
    /// The rejected input, as given.
    pub input: String,
}

impl InvalidMoveError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Failure of the key-value mechanism behind a session slot.
///
/// These are environment conditions, not program errors. `SessionStore`
/// logs them and carries on.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// `limit` is `None` where the host does not report its quota.
    #[error("storage quota exceeded (needed={needed}{})", limit_suffix(.limit))]
    QuotaExceeded { needed: usize, limit: Option<usize> },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    /// Classify a browser storage exception by its DOM name.
    ///
    /// Quota failures carry different names across engines; anything
    /// else means storage is denied or broken.
    pub fn from_storage_exception(name: &str, message: &str, needed: usize) -> Self {
        match name {
            "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED" => {
                StoreError::QuotaExceeded {
                    needed,
                    limit: None,
                }
            }
            _ => StoreError::Unavailable(format!("{name}: {message}")),
        }
    }
}

fn limit_suffix(limit: &Option<usize>) -> String {
    limit.map(|l| format!(", limit={l}")).unwrap_or_default()
}

/// An input the round state machine does not accept in its current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a move was already submitted and is waiting to be revealed")]
    RevealPending,

    #[error("no move is waiting to be revealed")]
    NothingToReveal,
}
