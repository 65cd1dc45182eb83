//! Input data model: name-to-value association sets.
//!
//! An association set is the whole input of one generator invocation: an
//! ordered list of `(name, value)` pairs, a default value returned by the
//! generated finder when nothing matches, and a case-sensitivity mode.
//! Sets are built once from static domain tables, consumed by one emitter
//! call, and discarded.

use crate::error::GenError;
use crate::key::fold_byte;

/// Case handling for one association set.
///
/// Folding is ASCII-range only and must be applied consistently to
/// sorting, grouping, and key packing, or same-prefix entries could be
/// separated in the sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// Names match byte-for-byte.
    Sensitive,
    /// Names match after ASCII lowercase folding.
    Insensitive,
}

impl Case {
    /// Whether lookups fold input bytes before comparing.
    pub fn folds(self) -> bool {
        self == Case::Insensitive
    }
}

/// One `(name, value)` pair.
///
/// The name is the lookup key: ASCII, no embedded NUL (caller contract,
/// not checked). The value is an opaque target-language expression
/// emitted verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
    pub name: String,
    pub value: String,
}

/// An ordered association list plus default value and case mode.
#[derive(Debug, Clone)]
pub struct AssociationSet {
    pub entries: Vec<Association>,
    /// Emitted when no entry matches; must be distinct from every value.
    pub default_value: String,
    pub case: Case,
}

impl AssociationSet {
    /// Build a set from `(name, value)` pairs.
    pub fn from_pairs<N, V>(
        pairs: impl IntoIterator<Item = (N, V)>,
        default_value: impl Into<String>,
        case: Case,
    ) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        AssociationSet {
            entries: pairs
                .into_iter()
                .map(|(name, value)| Association {
                    name: name.into(),
                    value: value.into(),
                })
                .collect(),
            default_value: default_value.into(),
            case,
        }
    }

    /// Build a set of names whose values are derived symbol identifiers,
    /// e.g. names split on whitespace with prefix `"Tag"` become
    /// `Tag_Br`, `Tag_Body`, ...
    pub fn from_names(
        names: &str,
        prefix: &str,
        default_value: impl Into<String>,
        case: Case,
    ) -> Self {
        Self::from_pairs(
            names
                .split_whitespace()
                .map(|name| (name, symbol_name(name, prefix))),
            default_value,
            case,
        )
    }

    /// Entries sorted lexicographically by (folded) name bytes.
    ///
    /// Rejects names that are equal after folding: the dispatch tree
    /// assumes an injective mapping and a duplicate would generate an
    /// unreachable guard.
    pub fn sorted_entries(&self) -> Result<Vec<Association>, GenError> {
        let mut entries = self.entries.clone();
        let fold = self.case.folds();
        entries.sort_by(|a, b| folded(&a.name, fold).cmp(&folded(&b.name, fold)));
        for pair in entries.windows(2) {
            if folded(&pair[0].name, fold) == folded(&pair[1].name, fold) {
                return Err(GenError::DuplicateName(pair[1].name.clone()));
            }
        }
        Ok(entries)
    }
}

fn folded(name: &str, fold: bool) -> Vec<u8> {
    if fold {
        name.bytes().map(fold_byte).collect()
    } else {
        name.as_bytes().to_vec()
    }
}

/// Derive a symbol identifier from a name: split on `-` and `:`,
/// capitalize each part, join with underscores under the given prefix.
/// `symbol_name("mbp:pagebreak", "Tag")` is `"Tag_Mbp_Pagebreak"`.
pub fn symbol_name(name: &str, prefix: &str) -> String {
    let mut out = String::from(prefix);
    for part in name.split(['-', ':']) {
        out.push('_');
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(|c| c.to_lowercase()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_name() {
        assert_eq!(symbol_name("br", "Tag"), "Tag_Br");
        assert_eq!(symbol_name("h1", "Tag"), "Tag_H1");
        assert_eq!(symbol_name("mbp:pagebreak", "Tag"), "Tag_Mbp_Pagebreak");
        assert_eq!(symbol_name("xmlns:dc", "Attr"), "Attr_Xmlns_Dc");
        assert_eq!(symbol_name("BGCOLOR", "Attr"), "Attr_Bgcolor");
    }

    #[test]
    fn test_sorted_entries_folds() {
        let set = AssociationSet::from_pairs(
            [("Beta", "B"), ("alpha", "A")],
            "NotFound",
            Case::Insensitive,
        );
        let sorted = set.sorted_entries().unwrap();
        assert_eq!(sorted[0].name, "alpha");
        assert_eq!(sorted[1].name, "Beta");
    }

    #[test]
    fn test_case_sensitive_sort_is_bytewise() {
        // Uppercase sorts before lowercase when not folding
        let set = AssociationSet::from_pairs(
            [("aelig", "a"), ("AElig", "A")],
            "NotFound",
            Case::Sensitive,
        );
        let sorted = set.sorted_entries().unwrap();
        assert_eq!(sorted[0].name, "AElig");
        assert_eq!(sorted[1].name, "aelig");
    }

    #[test]
    fn test_duplicate_after_folding_rejected() {
        let set = AssociationSet::from_pairs(
            [("body", "Tag_Body"), ("BODY", "Tag_Body2")],
            "Tag_NotFound",
            Case::Insensitive,
        );
        assert!(matches!(
            set.sorted_entries(),
            Err(GenError::DuplicateName(_))
        ));

        // The same two names are distinct in a case-sensitive set
        let set = AssociationSet::from_pairs(
            [("body", "Tag_Body"), ("BODY", "Tag_Body2")],
            "Tag_NotFound",
            Case::Sensitive,
        );
        assert!(set.sorted_entries().is_ok());
    }

    #[test]
    fn test_from_names() {
        let set =
            AssociationSet::from_names("br body base", "Tag", "Tag_NotFound", Case::Insensitive);
        assert_eq!(set.entries.len(), 3);
        assert_eq!(set.entries[0].value, "Tag_Br");
        assert_eq!(set.entries[1].value, "Tag_Body");
    }
}
