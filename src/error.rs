use alloc::string::String;

use thiserror::Error;

use crate::Value;

/// Errors raised by [`Value::partition`].
///
/// The statically typed entry points never produce these: their predicate is
/// callable by construction, and a fallible predicate's own error type is
/// passed through unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartitionError {
    /// The callback is not a function. Raised before any index is visited.
    #[error("{callback} is not a function")]
    InvalidCallback { callback: String },

    /// The receiver is `undefined` or `null`.
    #[error("cannot convert {value} to object")]
    NotObjectCoercible { value: String },

    /// The callback threw; the thrown value is carried unaltered.
    #[error("uncaught {0}")]
    Thrown(Value),
}
