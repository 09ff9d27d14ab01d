use anyhow::{Context, Result};

use rulekit_common::RuleGroup;
use rulekit_groups::apply_value;
use rulekit_identifier::HashSettings;

use super::helpers;
use crate::output::{print_json, print_success, OutputMode};

#[derive(clap::Args)]
pub struct ApplyArgs {
    #[arg(long, help = "JSON file path or inline JSON for the rule group")]
    group: String,
    #[arg(long, help = "JSON file path or inline JSON array of operations")]
    ops: String,
    #[arg(long, help = "Exclude the query text from rule identity")]
    ignore_query: bool,
}

pub fn execute(args: ApplyArgs, mode: OutputMode) -> Result<()> {
    let group: RuleGroup = serde_json::from_str(&helpers::read_json_input(&args.group)?)
        .context("parsing rule group")?;
    let ops: Vec<serde_json::Value> = serde_json::from_str(&helpers::read_json_input(&args.ops)?)
        .context("parsing operations")?;
    let settings = HashSettings {
        ignore_query: args.ignore_query,
    };

    let count = ops.len();
    let mut current = group;
    for (index, op) in ops.into_iter().enumerate() {
        current = apply_value(&current, op, settings)
            .with_context(|| format!("operation {index} failed"))?;
    }

    match mode {
        OutputMode::Json => print_json(&current),
        OutputMode::Human => {
            print_success(&format!(
                "applied {count} operation(s); group \"{}\" now has {} rule(s)",
                current.name,
                current.rules.len()
            ));
            print_json(&current)
        }
    }
}
