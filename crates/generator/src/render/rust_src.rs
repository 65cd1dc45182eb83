//! Rust renderer.
//!
//! Same dispatch tree, emitted as a `match` on the packed key. Enum-typed
//! finders get a `use Type::*;` so case arms can name variants the same
//! way the C output does; other return types emit their values verbatim.

use super::Renderer;
use crate::error::GenError;
use crate::ir::{CaseBody, EnumDef, FinderDef, SelectorDef, TailCheck};
use std::fmt::Write as _;

const HELPERS: &str = "\
#[inline]
fn lookup_key(s: &[u8]) -> u32 {
    let mut key = 0u32;
    let mut i = 0;
    while i < s.len() && i < 4 {
        key |= (s[i] as u32) << (8 * i);
        i += 1;
    }
    key
}

#[inline]
fn lookup_key_fold(s: &[u8]) -> u32 {
    let mut key = 0u32;
    let mut i = 0;
    while i < s.len() && i < 4 {
        key |= (s[i].to_ascii_lowercase() as u32) << (8 * i);
        i += 1;
    }
    key
}
";

pub struct RustRenderer;

/// `"HtmlEntityRune"` becomes `"html_entity_rune"`.
fn snake_case(name: &str) -> String {
    let mut out = String::new();
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Whether a return type is one of our generated enums, whose values are
/// variant names rather than literals.
fn is_enum_type(return_type: &str) -> bool {
    return_type.chars().next().is_some_and(|c| c.is_uppercase())
}

impl Renderer for RustRenderer {
    fn prelude(&self) -> String {
        HELPERS.to_string()
    }

    fn render_finder(&self, finder: &FinderDef) -> Result<String, GenError> {
        let key_fn = if finder.case.folds() {
            "lookup_key_fold"
        } else {
            "lookup_key"
        };
        let mut out = String::new();
        writeln!(
            out,
            "pub fn find_{}(name: &[u8]) -> {} {{",
            snake_case(&finder.base_name),
            finder.return_type
        )?;
        if is_enum_type(&finder.return_type) {
            writeln!(out, "    use {}::*;", finder.return_type)?;
        }
        writeln!(out, "    match {}(name) {{", key_fn)?;
        for case in &finder.tree.cases {
            let label = String::from_utf8_lossy(&case.key_bytes).into_owned();
            match &case.body {
                CaseBody::Leaf { value } => {
                    writeln!(
                        out,
                        "        0x{:08x} => {}, // \"{}\"",
                        case.key, value, label
                    )?;
                }
                CaseBody::Chain { checks } => {
                    writeln!(out, "        0x{:08x} => {{ // \"{}\"", case.key, label)?;
                    for check in checks {
                        match &check.tail {
                            TailCheck::None => {
                                writeln!(out, "            if name.len() == 4 {{")?;
                            }
                            TailCheck::Packed { key, .. } => {
                                writeln!(
                                    out,
                                    "            if name.len() == {} && {}(&name[4..]) == 0x{:08x} {{",
                                    check.len, key_fn, key
                                )?;
                            }
                            TailCheck::Memcmp { suffix } => {
                                if finder.case.folds() {
                                    writeln!(
                                        out,
                                        "            if name.len() == {} && name[4..].eq_ignore_ascii_case(b\"{}\") {{",
                                        check.len, suffix
                                    )?;
                                } else {
                                    writeln!(
                                        out,
                                        "            if name.len() == {} && &name[4..] == b\"{}\" {{",
                                        check.len, suffix
                                    )?;
                                }
                            }
                        }
                        writeln!(out, "                return {};", check.value)?;
                        writeln!(out, "            }}")?;
                    }
                    writeln!(out, "            {}", finder.default_value)?;
                    writeln!(out, "        }}")?;
                }
            }
        }
        writeln!(out, "        _ => {},", finder.default_value)?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        Ok(out)
    }

    fn render_enum(&self, def: &EnumDef) -> Result<String, GenError> {
        let mut out = String::new();
        writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq)]")?;
        writeln!(out, "#[allow(non_camel_case_types)]")?;
        writeln!(out, "pub enum {} {{", def.name)?;
        for member in def.members.iter().chain(std::iter::once(&def.sentinel)) {
            writeln!(out, "    {},", member)?;
        }
        writeln!(out, "}}")?;
        Ok(out)
    }

    fn render_selector(&self, selector: &SelectorDef) -> Result<String, GenError> {
        let mut out = String::new();
        if selector.members.is_empty() {
            writeln!(
                out,
                "pub fn is_{}(_item: {}) -> bool {{",
                snake_case(&selector.base_name),
                selector.arg_type
            )?;
            writeln!(out, "    false")?;
        } else {
            writeln!(
                out,
                "pub fn is_{}(item: {}) -> bool {{",
                snake_case(&selector.base_name),
                selector.arg_type
            )?;
            writeln!(out, "    use {}::*;", selector.arg_type)?;
            writeln!(out, "    matches!(item, {})", selector.members.join(" | "))?;
        }
        writeln!(out, "}}")?;
        Ok(out)
    }
}
