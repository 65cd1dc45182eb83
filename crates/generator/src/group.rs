//! Grouping of sorted entries by packed prefix key.

use crate::assoc::Association;
use crate::key::pack_prefix;

/// Consecutive sorted entries sharing one packed 4-byte-prefix key.
///
/// Because the sort order and the key are computed from the same folded
/// bytes, entries with an identical prefix are always adjacent, so one
/// linear pass suffices. A name shorter than 4 bytes can never share a
/// key with a longer name (its high lanes are zero and names contain no
/// NUL bytes), so short names always land in singleton groups.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchGroup {
    pub key: u32,
    pub entries: Vec<Association>,
}

/// Partition sorted entries into dispatch groups, preserving order.
pub fn group_entries(sorted: &[Association], fold: bool) -> Vec<DispatchGroup> {
    let mut groups: Vec<DispatchGroup> = Vec::new();
    for entry in sorted {
        let key = pack_prefix(entry.name.as_bytes(), fold);
        if let Some(group) = groups.last_mut() {
            if group.key == key {
                group.entries.push(entry.clone());
                continue;
            }
        }
        groups.push(DispatchGroup {
            key,
            entries: vec![entry.clone()],
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assoc::{AssociationSet, Case};
    use crate::key::pack;

    #[test]
    fn test_same_prefix_entries_share_a_group() {
        let set = AssociationSet::from_pairs(
            [
                ("br", "Tag_Br"),
                ("body", "Tag_Body"),
                ("base", "Tag_Base"),
                ("basefont", "Tag_Basefont"),
            ],
            "Tag_NotFound",
            Case::Insensitive,
        );
        let sorted = set.sorted_entries().unwrap();
        let groups = group_entries(&sorted, true);

        // base/basefont share the "base" prefix; body and br stand alone
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key, pack(b"base", true));
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[0].entries[0].name, "base");
        assert_eq!(groups[0].entries[1].name, "basefont");
        assert_eq!(groups[1].key, pack(b"body", true));
        assert_eq!(groups[2].key, pack(b"br", true));
    }

    #[test]
    fn test_group_keys_are_distinct() {
        let set = AssociationSet::from_names(
            "a abbr acronym area b base basefont blockquote body br",
            "Tag",
            "Tag_NotFound",
            Case::Insensitive,
        );
        let sorted = set.sorted_entries().unwrap();
        let groups = group_entries(&sorted, true);
        for pair in groups.windows(2) {
            assert_ne!(pair[0].key, pair[1].key);
        }
    }
}
