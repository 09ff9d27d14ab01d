use serde_json::Value;
use std::collections::HashMap;

use rulekit_common::{QueryResultRule, Rule, RuleKind};

use crate::fingerprint::fingerprint_string;

/// Controls which fields take part in a rule's content identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashSettings {
    /// When set, the query text of alerting rules is left out of the
    /// identity tuple: name + labels + annotations only. Recording rules
    /// always keep their query.
    pub ignore_query: bool,
}

/// Order-independent serialized form of a label/annotation map: a JSON
/// array of `[key, value]` pairs sorted by key.
pub fn canonical_map(map: &HashMap<String, String>) -> String {
    let mut entries: Vec<(&str, &str)> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    let pairs: Vec<Value> = entries
        .into_iter()
        .map(|(k, v)| Value::Array(vec![k.into(), v.into()]))
        .collect();
    Value::Array(pairs).to_string()
}

/// Both rule representations feed the same tuple, so a file rule and its
/// query-result counterpart fingerprint identically when the content
/// matches.
fn alerting_tuple(
    name: &str,
    query: &str,
    annotations: &HashMap<String, String>,
    labels: &HashMap<String, String>,
    settings: HashSettings,
) -> String {
    let mut parts: Vec<Value> = vec![name.into()];
    if !settings.ignore_query {
        parts.push(query.into());
    }
    parts.push(canonical_map(annotations).into());
    parts.push(canonical_map(labels).into());
    Value::Array(parts).to_string()
}

fn recording_tuple(name: &str, query: &str, labels: &HashMap<String, String>) -> String {
    let parts: Vec<Value> = vec![name.into(), query.into(), canonical_map(labels).into()];
    Value::Array(parts).to_string()
}

pub(crate) fn alerting_hash(
    name: &str,
    query: &str,
    annotations: &HashMap<String, String>,
    labels: &HashMap<String, String>,
    settings: HashSettings,
) -> String {
    fingerprint_string(&alerting_tuple(name, query, annotations, labels, settings))
}

pub(crate) fn recording_hash(name: &str, query: &str, labels: &HashMap<String, String>) -> String {
    fingerprint_string(&recording_tuple(name, query, labels))
}

/// Content fingerprint of a rule-file rule. Managed rules are never
/// hashed; their identity is the server-issued uid.
pub fn hash_file_rule(rule: &Rule, settings: HashSettings) -> Option<String> {
    match rule {
        Rule::Managed(_) => None,
        Rule::AlertingFile(r) => Some(alerting_hash(
            &r.alert,
            &r.expr,
            &r.annotations,
            &r.labels,
            settings,
        )),
        Rule::RecordingFile(r) => Some(recording_hash(&r.record, &r.expr, &r.labels)),
    }
}

/// Content fingerprint of a query-result rule, over the same tuple as the
/// file representation.
pub fn hash_query_rule(rule: &QueryResultRule, settings: HashSettings) -> String {
    match rule.kind {
        RuleKind::Alerting => alerting_hash(
            &rule.name,
            &rule.query,
            &rule.annotations,
            &rule.labels,
            settings,
        ),
        RuleKind::Recording => recording_hash(&rule.name, &rule.query, &rule.labels),
    }
}
