//! C renderer.
//!
//! Emits the classic switch-on-packed-key shape: a block of `CS*`/`STR*`
//! macros, then one `Find*` function per set. Case labels spell the key
//! out as character constants so the generated file stays reviewable.

use super::Renderer;
use crate::error::GenError;
use crate::ir::{CaseBody, EnumDef, FinderDef, SelectorDef, TailCheck};
use std::fmt::Write as _;

const DEFINES: &str = "\
#define CS1(c1)             (c1)
#define CS2(c1, c2)         (CS1(c1) | (c2 << 8))
#define CS3(c1, c2, c3)     (CS2(c1, c2) | (c3 << 16))
#define CS4(c1, c2, c3, c4) (CS3(c1, c2, c3) | (c4 << 24))

#define STR1(s) ((s)[0])
#define STR2(s) (STR1(s) | ((s)[1] << 8))
#define STR3(s) (STR2(s) | ((s)[2] << 16))
#define STR4(s) (STR3(s) | ((s)[3] << 24))

#define STR1i(s) (tolower((s)[0]))
#define STR2i(s) (STR1i(s) | (tolower((s)[1]) << 8))
#define STR3i(s) (STR2i(s) | (tolower((s)[2]) << 16))
#define STR4i(s) (STR3i(s) | (tolower((s)[3]) << 24))
";

pub struct CRenderer;

/// `"br"` becomes `'b','r'`.
fn split_chars(bytes: &[u8]) -> String {
    let quoted: Vec<String> = bytes.iter().map(|&b| format!("'{}'", b as char)).collect();
    quoted.join(",")
}

/// `CS2('b','r')`, or a bare `0` for the empty name.
fn case_label(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        "0".to_string()
    } else {
        format!("CS{}({})", bytes.len(), split_chars(bytes))
    }
}

impl Renderer for CRenderer {
    fn prelude(&self) -> String {
        DEFINES.to_string()
    }

    fn render_finder(&self, finder: &FinderDef) -> Result<String, GenError> {
        // "i" selects the folding STR*i macros and EqNI
        let i = if finder.case.folds() { "i" } else { "" };
        let mut body = String::new();
        for case in &finder.tree.cases {
            match &case.body {
                CaseBody::Leaf { value } => {
                    writeln!(
                        body,
                        "\tcase {}: return {};",
                        case_label(&case.key_bytes),
                        value
                    )?;
                }
                CaseBody::Chain { checks } => {
                    writeln!(body, "\tcase {}:", case_label(&case.key_bytes))?;
                    for check in checks {
                        match &check.tail {
                            TailCheck::None => {
                                writeln!(body, "\t\tif (4 == len) return {};", check.value)?;
                            }
                            TailCheck::Packed { bytes, .. } => {
                                writeln!(
                                    body,
                                    "\t\tif ({} == len && {} == STR{}{}(name + 4)) return {};",
                                    check.len,
                                    case_label(bytes),
                                    bytes.len(),
                                    i,
                                    check.value
                                )?;
                            }
                            TailCheck::Memcmp { suffix } => {
                                writeln!(
                                    body,
                                    "\t\tif ({} == len && str::EqN{}(name + 4, \"{}\", {})) return {};",
                                    check.len,
                                    i.to_uppercase(),
                                    suffix,
                                    suffix.len(),
                                    check.value
                                )?;
                            }
                        }
                    }
                    writeln!(body, "\t\treturn {};", finder.default_value)?;
                }
            }
        }

        let mut out = String::new();
        writeln!(
            out,
            "{} Find{}(const char *name, size_t len)",
            finder.return_type, finder.base_name
        )?;
        writeln!(out, "{{")?;
        writeln!(
            out,
            "\tuint32_t key = 0 == len ? 0 : 1 == len ? STR1{i}(name) :"
        )?;
        writeln!(
            out,
            "\t               2 == len ? STR2{i}(name) : 3 == len ? STR3{i}(name) : STR4{i}(name);"
        )?;
        writeln!(out, "\tswitch (key) {{")?;
        out.push_str(&body);
        writeln!(out, "\tdefault: return {};", finder.default_value)?;
        writeln!(out, "\t}}")?;
        writeln!(out, "}}")?;
        Ok(out)
    }

    fn render_enum(&self, def: &EnumDef) -> Result<String, GenError> {
        let mut members = def.members.clone();
        members.push(def.sentinel.clone());
        // five members per line, sentinel last
        let lines: Vec<String> = members.chunks(5).map(|chunk| chunk.join(", ")).collect();
        let mut out = String::new();
        writeln!(out, "enum {} {{", def.name)?;
        writeln!(out, "\t{}", lines.join(",\n\t"))?;
        writeln!(out, "}};")?;
        Ok(out)
    }

    fn render_selector(&self, selector: &SelectorDef) -> Result<String, GenError> {
        let cases: Vec<String> = selector
            .members
            .iter()
            .map(|value| format!("case {}:", value))
            .collect();
        let lines: Vec<String> = cases.chunks(4).map(|chunk| chunk.join(" ")).collect();
        let mut out = String::new();
        writeln!(
            out,
            "bool Is{}({} item)",
            selector.base_name, selector.arg_type
        )?;
        writeln!(out, "{{")?;
        writeln!(out, "\tswitch (item) {{")?;
        writeln!(out, "\t{}", lines.join("\n\t"))?;
        writeln!(out, "\t\treturn true;")?;
        writeln!(out, "\tdefault:")?;
        writeln!(out, "\t\treturn false;")?;
        writeln!(out, "\t}}")?;
        writeln!(out, "}}")?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assoc::{AssociationSet, Case};
    use crate::dispatch::{build_enum, build_finder, build_selector};

    fn tag_set() -> AssociationSet {
        AssociationSet::from_names(
            "br body base basefont blockquote",
            "Tag",
            "Tag_NotFound",
            Case::Insensitive,
        )
    }

    #[test]
    fn test_finder_shape() {
        let finder = build_finder(&tag_set(), "HtmlTag", "HtmlTag").unwrap();
        let text = CRenderer.render_finder(&finder).unwrap();

        assert!(text.contains("HtmlTag FindHtmlTag(const char *name, size_t len)"));
        assert!(text.contains("2 == len ? STR2i(name) : 3 == len ? STR3i(name) : STR4i(name);"));
        assert!(text.contains("\tcase CS2('b','r'): return Tag_Br;"));
        assert!(text.contains("\tcase CS4('b','a','s','e'):"));
        assert!(text.contains("\t\tif (4 == len) return Tag_Base;"));
        assert!(
            text.contains("\t\tif (8 == len && CS4('f','o','n','t') == STR4i(name + 4)) return Tag_Basefont;")
        );
        assert!(
            text.contains("\t\tif (10 == len && str::EqNI(name + 4, \"kquote\", 6)) return Tag_Blockquote;")
        );
        assert!(text.contains("\tdefault: return Tag_NotFound;"));
    }

    #[test]
    fn test_case_sensitive_finder_uses_unfolded_macros() {
        let set = AssociationSet::from_pairs(
            [("AElig", "198"), ("aelig", "230")],
            "(uint32_t)-1",
            Case::Sensitive,
        );
        let finder = build_finder(&set, "HtmlEntityRune", "uint32_t").unwrap();
        let text = CRenderer.render_finder(&finder).unwrap();

        assert!(text.contains("uint32_t FindHtmlEntityRune"));
        assert!(text.contains("STR4(name)"));
        assert!(!text.contains("STR4i(name)"));
        assert!(text.contains("case CS4('A','E','l','i'):"));
        assert!(text.contains("if (5 == len && CS1('g') == STR1(name + 4)) return 198;"));
    }

    #[test]
    fn test_enum_five_per_line_sentinel_last() {
        let set = AssociationSet::from_names(
            "a b i p s u br td th tr",
            "Tag",
            "Tag_NotFound",
            Case::Insensitive,
        );
        let def = build_enum(&set, "HtmlTag").unwrap();
        let text = CRenderer.render_enum(&def).unwrap();

        assert!(text.starts_with("enum HtmlTag {\n"));
        assert!(text.contains("\tTag_A, Tag_B, Tag_Br, Tag_I, Tag_P,\n"));
        assert!(text.ends_with("\tTag_S, Tag_Td, Tag_Th, Tag_Tr, Tag_U,\n\tTag_NotFound\n};\n"));
    }

    #[test]
    fn test_selector_shape() {
        let def = build_selector(&tag_set(), "br base", "SelfclosingTag", "HtmlTag").unwrap();
        let text = CRenderer.render_selector(&def).unwrap();

        assert!(text.contains("bool IsSelfclosingTag(HtmlTag item)"));
        assert!(text.contains("\tcase Tag_Base: case Tag_Br:\n"));
        assert!(text.contains("\t\treturn true;"));
        assert!(text.contains("\tdefault:\n\t\treturn false;"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let finder = build_finder(&tag_set(), "HtmlTag", "HtmlTag").unwrap();
        let a = CRenderer.render_finder(&finder).unwrap();
        let b = CRenderer
            .render_finder(&build_finder(&tag_set(), "HtmlTag", "HtmlTag").unwrap())
            .unwrap();
        assert_eq!(a, b);
    }
}
