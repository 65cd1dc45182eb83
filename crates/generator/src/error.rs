//! Generation error types.

/// Error type for classifier generation.
///
/// Allows proper error propagation using `?` for both logical errors
/// (bad input tables) and formatting errors (write failures into the
/// output buffer).
#[derive(Debug)]
pub enum GenError {
    /// Two names in one association set are equal after case folding.
    ///
    /// The dispatch tree assumes an injective name-to-value mapping; a
    /// duplicate would emit an unreachable guard, so it is rejected at
    /// generation time.
    DuplicateName(String),
    /// A formatting error when writing generated text
    Format(std::fmt::Error),
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenError::DuplicateName(name) => {
                write!(f, "duplicate name after case folding: {:?}", name)
            }
            GenError::Format(e) => write!(f, "generation error: {}", e),
        }
    }
}

impl std::error::Error for GenError {}

impl From<std::fmt::Error> for GenError {
    fn from(e: std::fmt::Error) -> Self {
        GenError::Format(e)
    }
}
