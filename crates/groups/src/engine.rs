use rulekit_common::{Rule, RuleGroup};
use rulekit_identifier::HashSettings;
use tracing::debug;

use crate::error::GroupError;
use crate::matcher::matches_rule;
use crate::operation::{Operation, Swap};

/// Apply one edit to a group, yielding a new group. The input is never
/// touched: on failure the caller's snapshot is exactly what it was.
pub fn apply(group: &RuleGroup, op: &Operation) -> Result<RuleGroup, GroupError> {
    apply_with(group, op, HashSettings::default())
}

/// [`apply`] with explicit hash settings, for deployments that exclude the
/// query text from rule identity.
pub fn apply_with(
    group: &RuleGroup,
    op: &Operation,
    settings: HashSettings,
) -> Result<RuleGroup, GroupError> {
    match op {
        Operation::AddRule {
            rule,
            group_name,
            interval,
        } => {
            let mut next = group.clone();
            next.rules.push(rule.clone());
            if let Some(name) = group_name {
                next.name = name.clone();
            }
            if let Some(interval) = interval {
                next.interval = Some(interval.clone());
            }
            debug!(group = %next.name, rules = next.rules.len(), "appended rule");
            Ok(next)
        }

        Operation::UpdateRule { identifier, rule } => {
            let mut next = group.clone();
            let index = next
                .rules
                .iter()
                .position(|r| matches_rule(identifier, r, settings))
                .ok_or_else(|| GroupError::RuleNotFound(identifier.to_string()))?;
            next.rules[index] = rule.clone();
            debug!(group = %next.name, index, "replaced rule");
            Ok(next)
        }

        Operation::DeleteRule { identifier } => {
            let mut next = group.clone();
            // Absent target is fine: deleting twice must not fail.
            if let Some(index) = next
                .rules
                .iter()
                .position(|r| matches_rule(identifier, r, settings))
            {
                next.rules.remove(index);
                debug!(group = %next.name, index, "removed rule");
            }
            Ok(next)
        }

        Operation::PauseRule { uid, pause } => {
            let mut next = group.clone();
            let rule = next
                .rules
                .iter_mut()
                .find_map(|r| match r {
                    Rule::Managed(m) if m.uid == *uid => Some(m),
                    _ => None,
                })
                .ok_or_else(|| GroupError::RuleNotFound(uid.clone()))?;
            rule.is_paused = *pause;
            debug!(group = %next.name, uid = %uid, pause, "set pause flag");
            Ok(next)
        }

        Operation::ReorderRules { swaps } => Ok(RuleGroup {
            rules: reorder(&group.rules, swaps)?,
            ..group.clone()
        }),

        Operation::RenameGroup { name, interval } => {
            let mut next = group.clone();
            next.name = name.clone();
            if let Some(interval) = interval {
                next.interval = Some(interval.clone());
            }
            Ok(next)
        }

        Operation::MoveGroup {
            namespace,
            name,
            interval,
        } => {
            // Groups carry no namespace; relocating the group under the
            // new namespace is the caller's job. The group edit itself is
            // a rename.
            debug!(namespace = %namespace, name = %name, "group move requested");
            let mut next = group.clone();
            next.name = name.clone();
            if let Some(interval) = interval {
                next.interval = Some(interval.clone());
            }
            Ok(next)
        }

        Operation::UpdateGroupInterval { interval } => {
            let mut next = group.clone();
            next.interval = Some(interval.clone());
            Ok(next)
        }
    }
}

/// Dispatch an untyped JSON edit: parse the operation, then apply it.
pub fn apply_value(
    group: &RuleGroup,
    value: serde_json::Value,
    settings: HashSettings,
) -> Result<RuleGroup, GroupError> {
    let op = Operation::from_value(value)?;
    apply_with(group, &op, settings)
}

/// Sequential composition of transpositions over an owned copy: each swap
/// is applied in the given order, so `[(0,1),(2,1)]` and `[(2,1),(0,1)]`
/// are different permutations. All indices are validated before the first
/// swap; a reorder either fully applies or not at all.
fn reorder(rules: &[Rule], swaps: &[Swap]) -> Result<Vec<Rule>, GroupError> {
    let len = rules.len();
    for swap in swaps {
        for index in [swap.first, swap.second] {
            if index < 0 || index as usize >= len {
                return Err(GroupError::IndexOutOfBounds { index, len });
            }
        }
    }
    let mut next = rules.to_vec();
    for swap in swaps {
        next.swap(swap.first as usize, swap.second as usize);
    }
    Ok(next)
}
