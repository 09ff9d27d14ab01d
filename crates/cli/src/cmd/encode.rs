use anyhow::Result;

use rulekit_common::{QueryResultRule, Rule};
use rulekit_identifier::{stringify, HashSettings, RuleIdentifier};

use super::helpers;
use crate::output::{print_json, OutputMode};

#[derive(clap::Args)]
pub struct EncodeArgs {
    #[arg(long, help = "JSON file path or inline JSON for the rule")]
    data: String,
    #[arg(long, help = "Rule source name")]
    source: String,
    #[arg(long, help = "Namespace the rule group lives in")]
    namespace: String,
    #[arg(long, help = "Rule group name")]
    group: String,
    #[arg(long, help = "Treat the input as a query-result rule")]
    query_result: bool,
    #[arg(long, help = "Exclude the query text from rule identity")]
    ignore_query: bool,
    #[arg(long, help = "Percent-encode the result for URL embedding")]
    url: bool,
}

pub fn execute(args: EncodeArgs, mode: OutputMode) -> Result<()> {
    let raw = helpers::read_json_input(&args.data)?;
    let settings = HashSettings {
        ignore_query: args.ignore_query,
    };

    let id = if args.query_result {
        let rule: QueryResultRule = serde_json::from_str(&raw)?;
        RuleIdentifier::from_query_rule(&args.source, &args.namespace, &args.group, &rule, settings)
    } else {
        let rule: Rule = serde_json::from_str(&raw)?;
        RuleIdentifier::from_file_rule(&args.source, &args.namespace, &args.group, &rule, settings)
    };

    let mut text = stringify(&id);
    if args.url {
        text = urlencoding::encode(&text).into_owned();
    }

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({ "identifier": text })),
        OutputMode::Human => {
            println!("{text}");
            Ok(())
        }
    }
}
