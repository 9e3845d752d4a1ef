//! Crate-level error types.

use std::fmt;

use crate::node::NodeId;

/// Errors produced by the forge-motion crate.
#[derive(Debug)]
pub enum MotionError {
    /// A node id was referenced that was never registered.
    UnknownNode(NodeId),
    /// A node id was registered twice.
    DuplicateNode(NodeId),
    /// A visibility threshold outside `[0, 1]` (or NaN) was supplied.
    InvalidThreshold(f32),
    /// The optional timing driver could not be initialized.
    DriverUnavailable(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An option parsed but holds a value the engine cannot run with.
    InvalidOption(String),
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "unknown node {id}"),
            Self::DuplicateNode(id) => {
                write!(f, "node {id} is already registered")
            }
            Self::InvalidThreshold(t) => {
                write!(f, "visibility threshold {t} is outside [0, 1]")
            }
            Self::DriverUnavailable(msg) => {
                write!(f, "timing driver unavailable: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
        }
    }
}

impl std::error::Error for MotionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MotionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Failure inside a single animation routine.
///
/// Never escapes the dispatcher: the node is forced to its end state and
/// the error is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutineError {
    /// The node lacks a parameter the routine needs (e.g. counter target).
    MissingParameter(&'static str),
    /// A parameter is present but unusable.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
    /// The node's visual surface changed underneath the routine.
    Interrupted(String),
}

impl fmt::Display for RoutineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter(name) => {
                write!(f, "missing parameter `{name}`")
            }
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{name}`: {reason}")
            }
            Self::Interrupted(msg) => write!(f, "interrupted: {msg}"),
        }
    }
}

impl std::error::Error for RoutineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = MotionError::UnknownNode(NodeId(7));
        assert_eq!(e.to_string(), "unknown node #7");
        let e = MotionError::InvalidThreshold(1.5);
        assert_eq!(e.to_string(), "visibility threshold 1.5 is outside [0, 1]");
        let e = MotionError::InvalidOption("scroll.lerp 0 is outside [0.01, 1]".to_owned());
        assert_eq!(e.to_string(), "invalid option: scroll.lerp 0 is outside [0.01, 1]");
        let r = RoutineError::MissingParameter("target");
        assert_eq!(r.to_string(), "missing parameter `target`");
    }

    #[test]
    fn io_error_has_source() {
        use std::error::Error;
        let e: MotionError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(e.source().is_some());
    }
}
