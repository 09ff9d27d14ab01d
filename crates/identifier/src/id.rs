use rulekit_common::{QueryResultRule, Rule};

use crate::content::{alerting_hash, hash_query_rule, recording_hash, HashSettings};

/// Source name under which managed rules live. File and query-result
/// identifiers carry the name of their own rule source instead.
pub const MANAGED_SOURCE_NAME: &str = "managed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentId {
    pub source_name: String,
    pub namespace: String,
    pub group_name: String,
    pub rule_name: String,
    pub content_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResultId {
    pub source_name: String,
    pub namespace: String,
    pub group_name: String,
    pub rule_name: String,
    pub query_hash: String,
}

/// A single serializable name for a rule, whatever backend it lives in.
/// The shape is decided once, at construction or parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleIdentifier {
    Managed { uid: String },
    Content(ContentId),
    QueryResult(QueryResultId),
}

impl RuleIdentifier {
    pub fn managed(uid: impl Into<String>) -> Self {
        Self::Managed { uid: uid.into() }
    }

    /// Identifier for a rule in its rule-file representation. Managed
    /// rules short-circuit to their uid; everything else gets a content
    /// hash.
    pub fn from_file_rule(
        source_name: &str,
        namespace: &str,
        group_name: &str,
        rule: &Rule,
        settings: HashSettings,
    ) -> Self {
        match rule {
            Rule::Managed(r) => Self::managed(r.uid.clone()),
            Rule::AlertingFile(r) => Self::Content(ContentId {
                source_name: source_name.to_string(),
                namespace: namespace.to_string(),
                group_name: group_name.to_string(),
                rule_name: r.alert.clone(),
                content_hash: alerting_hash(&r.alert, &r.expr, &r.annotations, &r.labels, settings),
            }),
            Rule::RecordingFile(r) => Self::Content(ContentId {
                source_name: source_name.to_string(),
                namespace: namespace.to_string(),
                group_name: group_name.to_string(),
                rule_name: r.record.clone(),
                content_hash: recording_hash(&r.record, &r.expr, &r.labels),
            }),
        }
    }

    /// Identifier for a rule as seen in the read-only query listing.
    pub fn from_query_rule(
        source_name: &str,
        namespace: &str,
        group_name: &str,
        rule: &QueryResultRule,
        settings: HashSettings,
    ) -> Self {
        Self::QueryResult(QueryResultId {
            source_name: source_name.to_string(),
            namespace: namespace.to_string(),
            group_name: group_name.to_string(),
            rule_name: rule.name.clone(),
            query_hash: hash_query_rule(rule, settings),
        })
    }

    /// The content/query hash, when this identifier carries one.
    pub fn rule_hash(&self) -> Option<&str> {
        match self {
            Self::Managed { .. } => None,
            Self::Content(c) => Some(&c.content_hash),
            Self::QueryResult(q) => Some(&q.query_hash),
        }
    }

    pub fn uid(&self) -> Option<&str> {
        match self {
            Self::Managed { uid } => Some(uid),
            _ => None,
        }
    }
}

/// Strict, same-variant equality: managed by uid, the other two by every
/// field. A `Content` and a `QueryResult` identifier never compare equal
/// here; see [`denotes_same_rule`].
pub fn equal(a: &RuleIdentifier, b: &RuleIdentifier) -> bool {
    match (a, b) {
        (RuleIdentifier::Managed { uid: x }, RuleIdentifier::Managed { uid: y }) => x == y,
        (RuleIdentifier::Content(x), RuleIdentifier::Content(y)) => x == y,
        (RuleIdentifier::QueryResult(x), RuleIdentifier::QueryResult(y)) => x == y,
        _ => false,
    }
}

/// Cross-representation comparison: extends [`equal`] so identifiers built
/// from the file form and the query-result form of one rule compare equal,
/// with the two hash fields treated as interchangeable. The hasher
/// guarantees both representations of matching content fingerprint
/// identically, which is what makes this sound.
pub fn denotes_same_rule(a: &RuleIdentifier, b: &RuleIdentifier) -> bool {
    if equal(a, b) {
        return true;
    }
    match (a, b) {
        (RuleIdentifier::Content(c), RuleIdentifier::QueryResult(q))
        | (RuleIdentifier::QueryResult(q), RuleIdentifier::Content(c)) => {
            c.source_name == q.source_name
                && c.namespace == q.namespace
                && c.group_name == q.group_name
                && c.rule_name == q.rule_name
                && c.content_hash == q.query_hash
        }
        _ => false,
    }
}
