//! Dispatch-tree construction.
//!
//! Turns an [`AssociationSet`] into the typed tree a renderer emits:
//! sort, group by packed prefix, then per group either a direct leaf
//! (single name shorter than 4 bytes) or an ordered chain of
//! length-guarded checks.
//!
//! Cost model of the emitted classifier: one integer compare routes on
//! the first (up to) 4 bytes; names of length 5-8 pay a second integer
//! compare over the tail; only names longer than 8 bytes pay a real
//! memory compare, and only after an exact length match has narrowed the
//! candidates. Unmatched input falls to the default after at most the
//! routing compare plus the largest same-prefix chain.

use crate::assoc::{Association, AssociationSet};
use crate::error::GenError;
use crate::group::group_entries;
use crate::ir::{
    CaseBody, DispatchTree, EnumDef, FinderDef, GuardedCheck, RoutingCase, SelectorDef, TailCheck,
};
use crate::key::{fold_byte, pack};

/// Build a finder definition for a set.
pub fn build_finder(
    set: &AssociationSet,
    base_name: &str,
    return_type: &str,
) -> Result<FinderDef, GenError> {
    let sorted = set.sorted_entries()?;
    let fold = set.case.folds();
    let mut cases = Vec::new();
    for group in group_entries(&sorted, fold) {
        let first = &group.entries[0];
        let body = if first.name.len() < 4 {
            // Short names never share a key (their high lanes are zero),
            // so the group is a singleton and the key alone decides.
            CaseBody::Leaf {
                value: first.value.clone(),
            }
        } else {
            CaseBody::Chain {
                checks: group.entries.iter().map(|e| guarded_check(e, fold)).collect(),
            }
        };
        cases.push(RoutingCase {
            key: group.key,
            key_bytes: folded_prefix(&first.name, fold),
            body,
        });
    }
    Ok(FinderDef {
        base_name: base_name.to_string(),
        return_type: return_type.to_string(),
        default_value: set.default_value.clone(),
        case: set.case,
        tree: DispatchTree { cases },
    })
}

fn guarded_check(entry: &Association, fold: bool) -> GuardedCheck {
    let name = entry.name.as_bytes();
    let tail = match name.len() {
        4 => TailCheck::None,
        5..=8 => {
            let bytes: Vec<u8> = if fold {
                name[4..].iter().map(|&b| fold_byte(b)).collect()
            } else {
                name[4..].to_vec()
            };
            TailCheck::Packed {
                key: pack(&bytes, false),
                bytes,
            }
        }
        _ => TailCheck::Memcmp {
            suffix: entry.name[4..].to_string(),
        },
    };
    GuardedCheck {
        len: name.len(),
        tail,
        value: entry.value.clone(),
    }
}

fn folded_prefix(name: &str, fold: bool) -> Vec<u8> {
    let end = name.len().min(4);
    let prefix = &name.as_bytes()[..end];
    if fold {
        prefix.iter().map(|&b| fold_byte(b)).collect()
    } else {
        prefix.to_vec()
    }
}

/// Build the enumeration for a set: sorted values, sentinel last.
pub fn build_enum(set: &AssociationSet, name: &str) -> Result<EnumDef, GenError> {
    let sorted = set.sorted_entries()?;
    Ok(EnumDef {
        name: name.to_string(),
        members: sorted.into_iter().map(|e| e.value).collect(),
        sentinel: set.default_value.clone(),
    })
}

/// Build a membership selector over the set's values for the named
/// subset. Subset names absent from the set are ignored, the same way
/// the tables treat them as stale.
pub fn build_selector(
    set: &AssociationSet,
    subset: &str,
    base_name: &str,
    arg_type: &str,
) -> Result<SelectorDef, GenError> {
    let sorted = set.sorted_entries()?;
    let wanted: Vec<&str> = subset.split_whitespace().collect();
    Ok(SelectorDef {
        base_name: base_name.to_string(),
        arg_type: arg_type.to_string(),
        members: sorted
            .into_iter()
            .filter(|e| wanted.contains(&e.name.as_str()))
            .map(|e| e.value)
            .collect(),
    })
}
