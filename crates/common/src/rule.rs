use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedRule {
    pub uid: String,
    pub title: String,
    pub condition: String,
    #[serde(default)]
    pub is_paused: bool,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertingFileRule {
    pub alert: String,
    pub expr: String,
    #[serde(rename = "for", default, skip_serializing_if = "Option::is_none")]
    pub for_: Option<String>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingFileRule {
    pub record: String,
    pub expr: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

/// The wire form carries no explicit tag; the shape is decided by which
/// identity field is present (`uid`, then `alert`, then `record`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rule {
    Managed(ManagedRule),
    AlertingFile(AlertingFileRule),
    RecordingFile(RecordingFileRule),
}

impl Rule {
    pub fn uid(&self) -> Option<&str> {
        match self {
            Self::Managed(r) => Some(&r.uid),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Managed(r) => &r.title,
            Self::AlertingFile(r) => &r.alert,
            Self::RecordingFile(r) => &r.record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn managed_shape_from_uid_field() {
        let rule: Rule = serde_json::from_str(
            r#"{"uid":"abc123","title":"High CPU","condition":"C","is_paused":false}"#,
        )
        .unwrap();
        assert!(matches!(rule, Rule::Managed(_)));
        assert_eq!(rule.uid(), Some("abc123"));
    }

    #[test]
    fn alerting_shape_from_alert_field() {
        let rule: Rule = serde_json::from_str(
            r#"{"alert":"cpu-over-90","expr":"cpu > 90","labels":{"type":"cpu"}}"#,
        )
        .unwrap();
        assert!(matches!(rule, Rule::AlertingFile(_)));
        assert_eq!(rule.name(), "cpu-over-90");
    }

    #[test]
    fn recording_shape_from_record_field() {
        let rule: Rule =
            serde_json::from_str(r#"{"record":"cpu:avg","expr":"avg(cpu)"}"#).unwrap();
        assert!(matches!(rule, Rule::RecordingFile(_)));
        assert_eq!(rule.uid(), None);
    }

    #[test]
    fn for_field_round_trips_under_its_wire_name() {
        let rule = Rule::AlertingFile(AlertingFileRule {
            alert: "a".into(),
            expr: "x > 1".into(),
            for_: Some("5m".into()),
            labels: HashMap::new(),
            annotations: HashMap::new(),
        });
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains(r#""for":"5m""#));
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }
}
