//! Crate-level error types.

use std::fmt;

/// Errors produced by the triaxis crate.
#[derive(Debug)]
pub enum TriaxisError {
    /// A view transition was requested for a preset name that is not
    /// registered.
    UnknownPreset(String),
    /// A numeric input fell outside its documented range.
    InvalidRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
        /// Inclusive lower bound.
        min: f32,
        /// Inclusive upper bound.
        max: f32,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TriaxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset(name) => {
                write!(f, "unknown view preset: {name:?}")
            }
            Self::InvalidRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{name} = {value} is outside [{min}, {max}]"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TriaxisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TriaxisError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_preset() {
        let err = TriaxisError::UnknownPreset("Bottom View".into());
        assert_eq!(err.to_string(), "unknown view preset: \"Bottom View\"");
    }

    #[test]
    fn display_reports_range() {
        let err = TriaxisError::InvalidRange {
            name: "auto_rotate_speed",
            value: 9.0,
            min: 0.5,
            max: 5.0,
        };
        assert_eq!(
            err.to_string(),
            "auto_rotate_speed = 9 is outside [0.5, 5]"
        );
    }

    #[test]
    fn io_error_is_the_source() {
        use std::error::Error;
        let err = TriaxisError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
        assert!(TriaxisError::OptionsParse("bad".into()).source().is_none());
    }
}
