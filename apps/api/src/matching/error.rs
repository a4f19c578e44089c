use thiserror::Error;

/// The only way a ranking call can fail: the inputs are not the expected shape.
/// Missing or mistyped optional fields never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
