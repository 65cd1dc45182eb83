//! Fast string-lookup code generator.
//!
//! Compiles small, closed, known-in-advance string sets (HTML tag names,
//! attribute names, alignment keywords, entity names, CSS color names)
//! into classifier source code with no runtime hashing, no allocation,
//! and no per-character loops beyond a short fixed prefix compare.
//!
//! The generated finder packs up to 4 input bytes into one 32-bit key
//! and multiplexes on it; names sharing a 4-byte prefix are told apart
//! by an explicit length check plus at most one more packed compare (or,
//! past 8 bytes, one bounded substring compare). Everything is built
//! from an [`AssociationSet`] through a typed dispatch tree and rendered
//! by a swappable [`render::Renderer`]:
//!
//! ```rust
//! use lookupgen::{AssociationSet, Case, build_finder, render::{CRenderer, Renderer}};
//!
//! let set = AssociationSet::from_names("br body base", "Tag", "Tag_NotFound", Case::Insensitive);
//! let finder = build_finder(&set, "HtmlTag", "HtmlTag").unwrap();
//! let code = CRenderer.render_finder(&finder).unwrap();
//! assert!(code.contains("case CS2('b','r'): return Tag_Br;"));
//! ```

pub mod assoc;
pub mod dispatch;
pub mod error;
pub mod group;
pub mod ir;
pub mod key;
pub mod render;
pub mod tables;

pub use assoc::{Association, AssociationSet, Case, symbol_name};
pub use dispatch::{build_enum, build_finder, build_selector};
pub use error::GenError;
pub use ir::{DispatchTree, EnumDef, FinderDef, SelectorDef};
pub use key::{fold_byte, pack, pack_prefix};

use render::{CRenderer, RustRenderer};
use std::fs;
use std::path::Path;

/// Output language for the bundled markup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    C,
    Rust,
}

/// Generate the complete classifier source for the bundled tables.
pub fn generate_source(lang: Lang) -> Result<String, String> {
    let result = match lang {
        Lang::C => tables::generate_c(&CRenderer),
        Lang::Rust => tables::generate_rust(&RustRenderer),
    };
    result.map_err(|e| e.to_string())
}

/// Generate the classifier source and write it to a file.
pub fn generate_to_file(output: &Path, lang: Lang) -> Result<(), String> {
    let text = generate_source(lang)?;
    fs::write(output, text).map_err(|e| format!("Failed to write {}: {}", output.display(), e))
}
