/// Errors returned by variable construction, encoding, and decoding.
///
/// The variants fall into three classes: configuration errors raised when a
/// variable is constructed with an invalid domain, shape errors raised when a
/// caller passes a sequence of the wrong length, and domain errors raised
/// when a value lies outside the range the variable's [`bounds`] promise.
/// Domain errors should never occur if the optimizer respects the bounds it
/// was configured with, so their appearance indicates a contract violation
/// worth surfacing rather than masking.
///
/// [`bounds`]: crate::Variable::bounds
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the lower bound is greater than the upper bound, or a
    /// bound is not finite.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high}) and finite")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a quantum is not positive, exceeds the variable's span,
    /// or leaves less than one quantum between the quantized endpoints.
    #[error("invalid quantum: {quantum} does not fit the span {span}")]
    InvalidQuantum {
        /// The requested quantum.
        quantum: f64,
        /// The span `upper - lower` the quantum must fit into.
        span: f64,
    },

    /// Returned when categorical or grid values are empty.
    #[error("categorical or grid values cannot be empty")]
    EmptyValues,

    /// Returned when categorical or grid values contain a duplicate.
    #[error("duplicate categorical or grid value: {0}")]
    DuplicateValue(String),

    /// Returned when a value being encoded is not one of the variable's
    /// categories or grid values.
    #[error("unknown categorical or grid value: {0}")]
    UnknownValue(String),

    /// Returned when an encoded sequence has the wrong number of slots.
    #[error("encoded length mismatch: expected {expected} slots, got {got}")]
    EncodedLen {
        /// The expected number of encoded slots.
        expected: usize,
        /// The actual number of encoded slots.
        got: usize,
    },

    /// Returned when a decoded sequence has the wrong number of values.
    #[error("decoded length mismatch: expected {expected} values, got {got}")]
    DecodedLen {
        /// The expected number of decoded values.
        expected: usize,
        /// The actual number of decoded values.
        got: usize,
    },

    /// Returned when an encoded slot lies outside the variable's bounds.
    #[error("encoded value {value} is outside the bounds [{low}, {high}]")]
    EncodedOutOfBounds {
        /// The offending encoded value.
        value: f64,
        /// The lower bound of the slot.
        low: f64,
        /// The upper bound of the slot.
        high: f64,
    },

    /// Returned when a decoded value lies outside the variable's domain.
    #[error("decoded value {value} is outside the domain [{lower}, {upper}]")]
    DecodedOutOfDomain {
        /// The offending decoded value.
        value: f64,
        /// The lower end of the domain.
        lower: f64,
        /// The upper end of the domain.
        upper: f64,
    },

    /// Returned when a decoded value has a different type than the variable
    /// produces.
    #[error("decoded value type mismatch: expected {expected}, got {got}")]
    DecodedType {
        /// The value type the variable decodes to.
        expected: &'static str,
        /// The value that was passed instead.
        got: String,
    },

    /// Returned when a value being encoded is not a multiple of the quantum.
    #[error("value {value} is not a multiple of the quantum {quantum}")]
    NotOnGrid {
        /// The offending value.
        value: f64,
        /// The variable's quantum.
        quantum: f64,
    },

    /// Returned when an internal invariant is violated.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

/// A `Result` alias using this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
