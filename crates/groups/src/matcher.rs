use rulekit_common::Rule;
use rulekit_identifier::{hash_file_rule, HashSettings, RuleIdentifier};

/// Does `identifier` name this rule? Managed identifiers match managed
/// rules by uid. Content and query-result identifiers both match file
/// rules by comparing their hash against the freshly hashed rule content;
/// the cross-representation hash agreement is what lets a query-result
/// identifier find its file-backed rule.
pub fn matches_rule(identifier: &RuleIdentifier, rule: &Rule, settings: HashSettings) -> bool {
    match identifier {
        RuleIdentifier::Managed { uid } => rule.uid() == Some(uid.as_str()),
        RuleIdentifier::Content(c) => {
            hash_file_rule(rule, settings).as_deref() == Some(c.content_hash.as_str())
        }
        RuleIdentifier::QueryResult(q) => {
            hash_file_rule(rule, settings).as_deref() == Some(q.query_hash.as_str())
        }
    }
}
