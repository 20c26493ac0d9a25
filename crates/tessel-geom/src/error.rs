use std::fmt;

/// Error produced while generating or indexing shape geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A generation parameter is outside its valid domain.
    ///
    /// Values are rejected, never clamped.
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// A shape name has no registered generator or constant.
    UnknownShapeKind(String),

    /// The vertex count does not fit the 16-bit index range.
    TooManyVertices { count: usize, max: usize },
}

impl GeometryError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{name}`: {reason}")
            }
            Self::UnknownShapeKind(name) => write!(f, "unknown shape kind `{name}`"),
            Self::TooManyVertices { count, max } => {
                write!(f, "{count} vertices exceed the index limit of {max}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_parameter() {
        let err = GeometryError::invalid("radius", "must be positive, got 0");
        assert_eq!(err.to_string(), "invalid parameter `radius`: must be positive, got 0");
    }

    #[test]
    fn display_unknown_kind() {
        let err = GeometryError::UnknownShapeKind("hexagon".into());
        assert_eq!(err.to_string(), "unknown shape kind `hexagon`");
    }
}
