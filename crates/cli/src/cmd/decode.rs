use anyhow::Result;
use serde_json::json;

use rulekit_identifier::{parse, RuleIdentifier, MANAGED_SOURCE_NAME};

use crate::output::{print_info, print_json, OutputMode};

#[derive(clap::Args)]
pub struct DecodeArgs {
    #[arg(help = "Identifier transport string")]
    identifier: String,
    #[arg(long, help = "Percent-decode the input first (raw URL segment)")]
    from_url: bool,
}

fn describe(id: &RuleIdentifier) -> serde_json::Value {
    match id {
        RuleIdentifier::Managed { uid } => json!({
            "kind": "managed",
            "source_name": MANAGED_SOURCE_NAME,
            "uid": uid,
        }),
        RuleIdentifier::Content(c) => json!({
            "kind": "content",
            "source_name": c.source_name,
            "namespace": c.namespace,
            "group_name": c.group_name,
            "rule_name": c.rule_name,
            "content_hash": c.content_hash,
        }),
        RuleIdentifier::QueryResult(q) => json!({
            "kind": "query_result",
            "source_name": q.source_name,
            "namespace": q.namespace,
            "group_name": q.group_name,
            "rule_name": q.rule_name,
            "query_hash": q.query_hash,
        }),
    }
}

pub fn execute(args: DecodeArgs, mode: OutputMode) -> Result<()> {
    let id = parse(&args.identifier, args.from_url)?;
    let fields = describe(&id);

    match mode {
        OutputMode::Json => print_json(&fields),
        OutputMode::Human => {
            if let Some(map) = fields.as_object() {
                for (key, value) in map {
                    print_info(key, value.as_str().unwrap_or_default());
                }
            }
            Ok(())
        }
    }
}
