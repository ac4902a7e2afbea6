//! Operational errors.
//!
//! Failed checks are never reported through this type; they are recorded as
//! [`ValidationError`](crate::ValidationError) values on the validator. The
//! variants here cover the few API calls that can be misused outright.

use thiserror::Error;

/// Errors returned by fallible configuration calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A locale code was empty or not shaped like `lang` / `lang-REGION`.
    #[error("invalid locale code: '{0}'")]
    InvalidLocale(String),

    /// A well-formed locale code has no templates in the catalog.
    #[error("unknown locale: '{0}'")]
    UnknownLocale(String),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
