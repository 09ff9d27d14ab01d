pub mod group;
pub mod query;
pub mod rule;

pub use group::RuleGroup;
pub use query::{QueryResultRule, RuleKind};
pub use rule::{AlertingFileRule, ManagedRule, RecordingFileRule, Rule};
