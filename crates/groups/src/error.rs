use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// Update/pause target is not in the current group snapshot, usually
    /// because the group changed after the identifier was computed.
    RuleNotFound(String),
    IndexOutOfBounds { index: i64, len: usize },
    UnknownOperation(String),
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RuleNotFound(id) => write!(f, "no rule matching identifier found: {id}"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "swap index {index} out of bounds for {len} rules")
            }
            Self::UnknownOperation(tag) => write!(f, "unknown operation: {tag}"),
        }
    }
}

impl std::error::Error for GroupError {}
