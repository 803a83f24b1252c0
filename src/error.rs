//! Error types for card validation.

use thiserror::Error;

/// Errors reported when validating a card before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card name is empty or only whitespace.
    #[error("card name is empty")]
    EmptyName,
    /// The image asset identifier is empty.
    #[error("card image reference is empty")]
    EmptyImage,
}
