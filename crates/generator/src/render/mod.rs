//! Text renderers for the dispatch tree.
//!
//! The tree is language-neutral; a renderer owns all output syntax. Same
//! definition in, byte-identical text out.

mod c;
mod rust_src;

pub use c::CRenderer;
pub use rust_src::RustRenderer;

use crate::error::GenError;
use crate::ir::{EnumDef, FinderDef, SelectorDef};

pub trait Renderer {
    /// Support definitions the generated routines rely on (key macros or
    /// helper functions). Emitted once per output file.
    fn prelude(&self) -> String;

    fn render_finder(&self, finder: &FinderDef) -> Result<String, GenError>;

    fn render_enum(&self, def: &EnumDef) -> Result<String, GenError>;

    fn render_selector(&self, selector: &SelectorDef) -> Result<String, GenError>;
}
