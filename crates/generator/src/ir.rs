//! Typed intermediate tree for generated classifiers.
//!
//! The dispatch builder produces these nodes; a renderer turns them into
//! target-language text. Keeping the tree explicit (ordered guard lists
//! with an explicit default, rather than case fall-through) decouples the
//! algorithm from output syntax.

use crate::assoc::Case;

/// A complete finder routine: route on a packed key, then run the
/// matching case's checks, falling back to `default_value`.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderDef {
    /// Language-neutral base name, e.g. `"HtmlTag"`. Renderers apply
    /// their own naming convention (`FindHtmlTag`, `find_html_tag`).
    pub base_name: String,
    /// Target-language return type text, emitted verbatim.
    pub return_type: String,
    pub default_value: String,
    pub case: Case,
    pub tree: DispatchTree,
}

/// The routing level: one case per distinct packed prefix key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchTree {
    pub cases: Vec<RoutingCase>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutingCase {
    pub key: u32,
    /// The (folded) bytes the key was packed from, for readable labels.
    pub key_bytes: Vec<u8>,
    pub body: CaseBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaseBody {
    /// A single name shorter than 4 bytes; the routing key alone is
    /// already unambiguous.
    Leaf { value: String },
    /// Names of length >= 4 sharing a 4-byte prefix: guards evaluated
    /// top-to-bottom, then the outer default.
    Chain { checks: Vec<GuardedCheck> },
}

/// One guard in a chain: an exact length match plus a tail check over
/// the bytes past the shared prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardedCheck {
    /// Exact byte length of the full name.
    pub len: usize,
    pub tail: TailCheck,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TailCheck {
    /// Length 4: the prefix key covered the whole name.
    None,
    /// Lengths 5-8: one more packed-key compare over bytes 4..len.
    Packed { key: u32, bytes: Vec<u8> },
    /// Lengths > 8: bounded substring compare of the remainder.
    Memcmp { suffix: String },
}

/// A contiguous enumeration of the sorted symbolic values plus the
/// sentinel, which is always last and therefore distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    pub name: String,
    pub members: Vec<String>,
    pub sentinel: String,
}

/// A boolean membership test over the enumeration: one case label per
/// subset member, default false.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorDef {
    /// Language-neutral base name, e.g. `"SelfclosingTag"`. Renderers
    /// apply their own convention (`IsSelfclosingTag`, `is_selfclosing_tag`).
    pub base_name: String,
    /// Target-language type of the argument, emitted verbatim.
    pub arg_type: String,
    pub members: Vec<String>,
}
