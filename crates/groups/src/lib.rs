mod engine;
mod error;
mod matcher;
mod operation;

pub use engine::{apply, apply_value, apply_with};
pub use error::GroupError;
pub use matcher::matches_rule;
pub use operation::{Operation, Swap};
