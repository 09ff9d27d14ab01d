use serde::{Deserialize, Serialize};

use rulekit_common::Rule;
use rulekit_identifier::RuleIdentifier;

use crate::error::GroupError;

/// One pairwise transposition of the rules array. Indices are `i64`
/// because operations arrive from an untrusted JSON layer where negative
/// values are representable; validation happens in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    pub first: i64,
    pub second: i64,
}

/// An edit to apply to a rule group. The serde form is tagged with `op`
/// so edits can ride as JSON from the dispatch layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    AddRule {
        rule: Rule,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        group_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interval: Option<String>,
    },
    UpdateRule {
        identifier: RuleIdentifier,
        rule: Rule,
    },
    DeleteRule {
        identifier: RuleIdentifier,
    },
    PauseRule {
        uid: String,
        pause: bool,
    },
    ReorderRules {
        swaps: Vec<Swap>,
    },
    RenameGroup {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interval: Option<String>,
    },
    MoveGroup {
        namespace: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        interval: Option<String>,
    },
    UpdateGroupInterval {
        interval: String,
    },
}

impl Operation {
    /// Dispatch entry point for untyped edits. An unrecognized or
    /// malformed `op` tag is a hard error, never a silent pass-through.
    pub fn from_value(value: serde_json::Value) -> Result<Self, GroupError> {
        let tag = value
            .get("op")
            .and_then(|t| t.as_str())
            .unwrap_or("<missing>")
            .to_string();
        serde_json::from_value(value).map_err(|_| GroupError::UnknownOperation(tag))
    }
}
