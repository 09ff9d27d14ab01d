use anyhow::{bail, Result};

use rulekit_common::{QueryResultRule, Rule};
use rulekit_identifier::{hash_file_rule, hash_query_rule, HashSettings};

use super::helpers;
use crate::output::{print_json, OutputMode};

#[derive(clap::Args)]
pub struct HashArgs {
    #[arg(long, help = "JSON file path or inline JSON for the rule")]
    data: String,
    #[arg(long, help = "Treat the input as a query-result rule")]
    query_result: bool,
    #[arg(long, help = "Exclude the query text from rule identity")]
    ignore_query: bool,
}

pub fn execute(args: HashArgs, mode: OutputMode) -> Result<()> {
    let raw = helpers::read_json_input(&args.data)?;
    let settings = HashSettings {
        ignore_query: args.ignore_query,
    };

    let hash = if args.query_result {
        let rule: QueryResultRule = serde_json::from_str(&raw)?;
        hash_query_rule(&rule, settings)
    } else {
        let rule: Rule = serde_json::from_str(&raw)?;
        match hash_file_rule(&rule, settings) {
            Some(hash) => hash,
            None => bail!("managed rules are not hashed; their identity is the uid"),
        }
    };

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({ "hash": hash })),
        OutputMode::Human => {
            println!("{hash}");
            Ok(())
        }
    }
}
