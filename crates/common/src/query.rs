use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Alerting,
    Recording,
}

/// A rule as returned by the read-only query endpoint. Same content as a
/// file rule, different field names, no stable id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResultRule {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub query: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}
