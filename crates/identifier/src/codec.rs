use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MalformedIdentifier;
use crate::escape::{escape_field, unescape_field};
use crate::id::{ContentId, QueryResultId, RuleIdentifier};

pub const CONTENT_DISCRIMINATOR: &str = "cid";
pub const QUERY_RESULT_DISCRIMINATOR: &str = "qid";

/// Transport form of an identifier. Managed rules serialize to their bare
/// uid; the other shapes to six `$`-joined escaped fields led by a
/// discriminator token. Percent-encoding for URL embedding is the
/// caller's job.
pub fn stringify(id: &RuleIdentifier) -> String {
    match id {
        RuleIdentifier::Managed { uid } => uid.clone(),
        RuleIdentifier::Content(c) => join_fields(&[
            CONTENT_DISCRIMINATOR,
            &c.source_name,
            &c.namespace,
            &c.group_name,
            &c.rule_name,
            &c.content_hash,
        ]),
        RuleIdentifier::QueryResult(q) => join_fields(&[
            QUERY_RESULT_DISCRIMINATOR,
            &q.source_name,
            &q.namespace,
            &q.group_name,
            &q.rule_name,
            &q.query_hash,
        ]),
    }
}

fn join_fields(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join("$")
}

/// Parse a transport string back into a typed identifier. `from_url`
/// percent-decodes the whole string first, for call sites that hold a raw
/// URL segment rather than an already-decoded value. A string without `$`
/// is always a managed identifier.
pub fn parse(value: &str, from_url: bool) -> Result<RuleIdentifier, MalformedIdentifier> {
    if value.is_empty() {
        return Err(MalformedIdentifier::Empty);
    }
    let source = if from_url {
        urlencoding::decode(value)
            .map_err(|_| MalformedIdentifier::BadPercentEncoding)?
            .into_owned()
    } else {
        value.to_string()
    };

    let parts: Vec<&str> = source.split('$').collect();
    if parts.len() == 1 {
        // Managed uids are never escaped on the way out, so none of the
        // field unescaping applies here.
        return Ok(RuleIdentifier::managed(parts[0]));
    }

    let fields: Vec<String> = parts.into_iter().map(unescape_field).collect();
    let [token, source_name, namespace, group_name, rule_name, hash] =
        match <[String; 6]>::try_from(fields) {
            Ok(fields) => fields,
            Err(fields) => return Err(MalformedIdentifier::FieldCount(fields.len())),
        };

    match token.as_str() {
        CONTENT_DISCRIMINATOR => Ok(RuleIdentifier::Content(ContentId {
            source_name,
            namespace,
            group_name,
            rule_name,
            content_hash: hash,
        })),
        QUERY_RESULT_DISCRIMINATOR => Ok(RuleIdentifier::QueryResult(QueryResultId {
            source_name,
            namespace,
            group_name,
            rule_name,
            query_hash: hash,
        })),
        _ => Err(MalformedIdentifier::UnknownDiscriminator(token)),
    }
}

/// Non-failing variant for call sites that treat an unparsable string as
/// "no identifier".
pub fn try_parse(value: &str, from_url: bool) -> Option<RuleIdentifier> {
    parse(value, from_url).ok()
}

impl fmt::Display for RuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}

impl FromStr for RuleIdentifier {
    type Err = MalformedIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, false)
    }
}

// On the wire an identifier is always its transport string, never a
// struct. Edits arriving as JSON carry identifiers in the same form they
// ride in URLs.
impl Serialize for RuleIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&stringify(self))
    }
}

impl<'de> Deserialize<'de> for RuleIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse(&value, false).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_id(namespace: &str, group: &str, rule: &str) -> RuleIdentifier {
        RuleIdentifier::Content(ContentId {
            source_name: "mimir".into(),
            namespace: namespace.into(),
            group_name: group.into(),
            rule_name: rule.into(),
            content_hash: "96354".into(),
        })
    }

    #[test]
    fn managed_round_trip_is_the_bare_uid() {
        let id = RuleIdentifier::managed("abc123");
        assert_eq!(stringify(&id), "abc123");
        assert_eq!(parse("abc123", false).unwrap(), id);
    }

    #[test]
    fn content_round_trip() {
        let id = content_id("infra", "cpu-alerts", "cpu-over-90");
        let text = stringify(&id);
        assert_eq!(text, "cid$mimir$infra$cpu-alerts$cpu-over-90$96354");
        assert_eq!(parse(&text, false).unwrap(), id);
    }

    #[test]
    fn query_result_round_trip() {
        let id = RuleIdentifier::QueryResult(QueryResultId {
            source_name: "mimir".into(),
            namespace: "infra".into(),
            group_name: "cpu-alerts".into(),
            rule_name: "cpu-over-90".into(),
            query_hash: "-12345".into(),
        });
        let text = stringify(&id);
        assert!(text.starts_with("qid$"));
        assert_eq!(parse(&text, false).unwrap(), id);
    }

    #[test]
    fn separators_in_fields_round_trip() {
        let id = content_id("team/infra", "native \\ group", "disk / usage $ high");
        let text = stringify(&id);
        assert!(!text.contains('/'));
        assert!(!text.contains('\\'));
        assert_eq!(parse(&text, false).unwrap(), id);
    }

    #[test]
    fn url_encoded_form_parses_with_from_url() {
        let id = content_id("team/infra", "group", "rule");
        let encoded = urlencoding::encode(&stringify(&id)).into_owned();
        assert_eq!(parse(&encoded, true).unwrap(), id);
    }

    #[test]
    fn eager_percent_decode_of_slash_is_harmless() {
        // A proxy decoding %2F early cannot invent a field boundary: the
        // slash in a field travels as U+001F, never as %2F.
        let id = content_id("team/infra", "group", "rule");
        let encoded = urlencoding::encode(&stringify(&id)).into_owned();
        let half_decoded = encoded.replace("%2F", "/");
        assert_eq!(parse(&half_decoded, true).unwrap(), id);
    }

    #[test]
    fn literal_percent_2f_in_a_field_reads_as_slash() {
        let parsed = parse("cid$mimir$team%2Finfra$group$rule$1", false).unwrap();
        match parsed {
            RuleIdentifier::Content(c) => assert_eq!(c.namespace, "team/infra"),
            other => panic!("expected content identifier, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_malformed() {
        assert_eq!(parse("", false), Err(MalformedIdentifier::Empty));
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        assert_eq!(
            parse("cid$mimir$ns$group", false),
            Err(MalformedIdentifier::FieldCount(4))
        );
        assert_eq!(
            parse("cid$a$b$c$d$e$f", false),
            Err(MalformedIdentifier::FieldCount(7))
        );
    }

    #[test]
    fn unknown_discriminator_is_malformed_not_a_fallback() {
        assert_eq!(
            parse("xyz$mimir$ns$group$rule$1", false),
            Err(MalformedIdentifier::UnknownDiscriminator("xyz".into()))
        );
    }

    #[test]
    fn try_parse_swallows_malformed_input() {
        assert!(try_parse("cid$too$few", false).is_none());
        assert!(try_parse("abc123", false).is_some());
    }

    #[test]
    fn display_and_from_str_mirror_the_codec() {
        let id = content_id("ns", "group", "rule");
        let text = id.to_string();
        assert_eq!(text.parse::<RuleIdentifier>().unwrap(), id);
    }

    #[test]
    fn serde_uses_the_transport_string() {
        let id = RuleIdentifier::managed("abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc123""#);
        let back: RuleIdentifier = serde_json::from_str(r#""cid$mimir$ns$g$r$7""#).unwrap();
        let expected = RuleIdentifier::Content(ContentId {
            source_name: "mimir".into(),
            namespace: "ns".into(),
            group_name: "g".into(),
            rule_name: "r".into(),
            content_hash: "7".into(),
        });
        assert_eq!(back, expected);
    }
}
