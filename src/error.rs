use thiserror::Error;

/// Errors raised by the sorting core and its command-line front end.
///
/// `TypeMismatch` and `OutOfRange` are both precondition violations of the
/// type-restricted sorts: the wrong element kind, or a bucket sort value
/// outside `[0.0, 1.0)`. Either is raised before any element is moved.
#[derive(Error, Debug)]
pub enum SortError {
    #[error("{algorithm} sort requires {expected}, got {found}")]
    TypeMismatch {
        algorithm: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("bucket sort requires values in [0.0, 1.0), got {value}")]
    OutOfRange { value: f64 },

    #[error("value range {min}..={max} is too wide for counting sort")]
    RangeTooLarge { min: i64, max: i64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot compare {left:?} with {right:?}")]
    Incomparable { left: String, right: String },

    #[error("Unknown algorithm: {name}\nAvailable: {available}")]
    UnknownAlgorithm { name: String, available: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type SortResult<T> = Result<T, SortError>;
