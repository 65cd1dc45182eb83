//! Static domain tables and whole-file assembly.
//!
//! The tag and attribute lists were collected by instrumenting an ebook
//! formatter over a corpus of mobi files; the entity table follows
//! http://en.wikipedia.org/wiki/List_of_XML_and_HTML_character_entity_references
//! (plus `apos`, the one XML entity that is not also an HTML entity);
//! the color table follows https://developer.mozilla.org/en/CSS/color_value.

use crate::assoc::{AssociationSet, Case};
use crate::dispatch::{build_enum, build_finder, build_selector};
use crate::error::GenError;
use crate::render::Renderer;

pub const HTML_TAGS: &str = "a abbr acronym area audio b base basefont blockquote body br \
    center code col dd div dl dt em font frame guide h1 h2 h3 h4 h5 head hr html i img input \
    lh li link mbp:pagebreak meta object ol p pagebreak param pre reference s small span strike \
    strong style sub sup table td th title tr tt u ul video";

pub const HTML_ATTRS: &str = "size href color filepos border valign rowspan colspan link vlink \
    style face value bgcolor class id mediarecindex controls recindex title lang clear xmlns \
    xmlns:dc width align height";

pub const ALIGN_ATTRS: &str = "left right center justify";

// these tags must all also appear in HTML_TAGS (else they're ignored)
pub const SELF_CLOSING_TAGS: &str =
    "area base basefont br col frame hr img input link meta param pagebreak mbp:pagebreak";

pub const INLINE_TAGS: &str = "a abbr acronym b br em font i img s small span strike strong sub sup u";

/// HTML 4 named entities plus `apos`, mapped to Unicode code points.
#[rustfmt::skip]
pub const HTML_ENTITIES: &[(&str, u32)] = &[
    // markup
    ("quot", 34), ("amp", 38), ("apos", 39), ("lt", 60), ("gt", 62),
    // Latin-1
    ("nbsp", 160), ("iexcl", 161), ("cent", 162), ("pound", 163), ("curren", 164),
    ("yen", 165), ("brvbar", 166), ("sect", 167), ("uml", 168), ("copy", 169),
    ("ordf", 170), ("laquo", 171), ("not", 172), ("shy", 173), ("reg", 174),
    ("macr", 175), ("deg", 176), ("plusmn", 177), ("sup2", 178), ("sup3", 179),
    ("acute", 180), ("micro", 181), ("para", 182), ("middot", 183), ("cedil", 184),
    ("sup1", 185), ("ordm", 186), ("raquo", 187), ("frac14", 188), ("frac12", 189),
    ("frac34", 190), ("iquest", 191), ("Agrave", 192), ("Aacute", 193), ("Acirc", 194),
    ("Atilde", 195), ("Auml", 196), ("Aring", 197), ("AElig", 198), ("Ccedil", 199),
    ("Egrave", 200), ("Eacute", 201), ("Ecirc", 202), ("Euml", 203), ("Igrave", 204),
    ("Iacute", 205), ("Icirc", 206), ("Iuml", 207), ("ETH", 208), ("Ntilde", 209),
    ("Ograve", 210), ("Oacute", 211), ("Ocirc", 212), ("Otilde", 213), ("Ouml", 214),
    ("times", 215), ("Oslash", 216), ("Ugrave", 217), ("Uacute", 218), ("Ucirc", 219),
    ("Uuml", 220), ("Yacute", 221), ("THORN", 222), ("szlig", 223), ("agrave", 224),
    ("aacute", 225), ("acirc", 226), ("atilde", 227), ("auml", 228), ("aring", 229),
    ("aelig", 230), ("ccedil", 231), ("egrave", 232), ("eacute", 233), ("ecirc", 234),
    ("euml", 235), ("igrave", 236), ("iacute", 237), ("icirc", 238), ("iuml", 239),
    ("eth", 240), ("ntilde", 241), ("ograve", 242), ("oacute", 243), ("ocirc", 244),
    ("otilde", 245), ("ouml", 246), ("divide", 247), ("oslash", 248), ("ugrave", 249),
    ("uacute", 250), ("ucirc", 251), ("uuml", 252), ("yacute", 253), ("thorn", 254),
    ("yuml", 255),
    // Latin extended and spacing modifiers
    ("OElig", 338), ("oelig", 339), ("Scaron", 352), ("scaron", 353), ("Yuml", 376),
    ("fnof", 402), ("circ", 710), ("tilde", 732),
    // Greek
    ("Alpha", 913), ("Beta", 914), ("Gamma", 915), ("Delta", 916), ("Epsilon", 917),
    ("Zeta", 918), ("Eta", 919), ("Theta", 920), ("Iota", 921), ("Kappa", 922),
    ("Lambda", 923), ("Mu", 924), ("Nu", 925), ("Xi", 926), ("Omicron", 927),
    ("Pi", 928), ("Rho", 929), ("Sigma", 931), ("Tau", 932), ("Upsilon", 933),
    ("Phi", 934), ("Chi", 935), ("Psi", 936), ("Omega", 937), ("alpha", 945),
    ("beta", 946), ("gamma", 947), ("delta", 948), ("epsilon", 949), ("zeta", 950),
    ("eta", 951), ("theta", 952), ("iota", 953), ("kappa", 954), ("lambda", 955),
    ("mu", 956), ("nu", 957), ("xi", 958), ("omicron", 959), ("pi", 960),
    ("rho", 961), ("sigmaf", 962), ("sigma", 963), ("tau", 964), ("upsilon", 965),
    ("phi", 966), ("chi", 967), ("psi", 968), ("omega", 969), ("thetasym", 977),
    ("upsih", 978), ("piv", 982),
    // punctuation and spaces
    ("ensp", 8194), ("emsp", 8195), ("thinsp", 8201), ("zwnj", 8204), ("zwj", 8205),
    ("lrm", 8206), ("rlm", 8207), ("ndash", 8211), ("mdash", 8212), ("lsquo", 8216),
    ("rsquo", 8217), ("sbquo", 8218), ("ldquo", 8220), ("rdquo", 8221), ("bdquo", 8222),
    ("dagger", 8224), ("Dagger", 8225), ("bull", 8226), ("hellip", 8230), ("permil", 8240),
    ("prime", 8242), ("Prime", 8243), ("lsaquo", 8249), ("rsaquo", 8250), ("oline", 8254),
    ("frasl", 8260), ("euro", 8364),
    // letterlike
    ("weierp", 8472), ("image", 8465), ("real", 8476), ("trade", 8482), ("alefsym", 8501),
    // arrows
    ("larr", 8592), ("uarr", 8593), ("rarr", 8594), ("darr", 8595), ("harr", 8596),
    ("crarr", 8629), ("lArr", 8656), ("uArr", 8657), ("rArr", 8658), ("dArr", 8659),
    ("hArr", 8660),
    // mathematical operators
    ("forall", 8704), ("part", 8706), ("exist", 8707), ("empty", 8709), ("nabla", 8711),
    ("isin", 8712), ("notin", 8713), ("ni", 8715), ("prod", 8719), ("sum", 8721),
    ("minus", 8722), ("lowast", 8727), ("radic", 8730), ("prop", 8733), ("infin", 8734),
    ("ang", 8736), ("and", 8743), ("or", 8744), ("cap", 8745), ("cup", 8746),
    ("int", 8747), ("there4", 8756), ("sim", 8764), ("cong", 8773), ("asymp", 8776),
    ("ne", 8800), ("equiv", 8801), ("le", 8804), ("ge", 8805), ("sub", 8834),
    ("sup", 8835), ("nsub", 8836), ("sube", 8838), ("supe", 8839), ("oplus", 8853),
    ("otimes", 8855), ("perp", 8869), ("sdot", 8901),
    // technical
    ("lceil", 8968), ("rceil", 8969), ("lfloor", 8970), ("rfloor", 8971),
    ("lang", 9001), ("rang", 9002),
    // geometric shapes and suits
    ("loz", 9674), ("spades", 9824), ("clubs", 9827), ("hearts", 9829), ("diams", 9830),
];

/// CSS color names and their r,g,b channels.
// TODO: add more colors
#[rustfmt::skip]
pub const CSS_COLORS: &[(&str, &str)] = &[
    ("black",  "  0,  0,  0"),
    ("white",  "255,255,255"),
    ("gray",   "128,128,128"),
    ("red",    "255,  0,  0"),
    ("green",  "  0,128,  0"),
    ("blue",   "  0,  0,255"),
    ("yellow", "255,255,  0"),
];

const ENTITIES_COMMENT: &str = "\
// map of entity names to their Unicode runes, based on
// http://en.wikipedia.org/wiki/List_of_XML_and_HTML_character_entity_references
";

pub fn tag_set() -> AssociationSet {
    AssociationSet::from_names(HTML_TAGS, "Tag", "Tag_NotFound", Case::Insensitive)
}

pub fn attr_set() -> AssociationSet {
    AssociationSet::from_names(HTML_ATTRS, "Attr", "Attr_NotFound", Case::Insensitive)
}

pub fn align_set() -> AssociationSet {
    AssociationSet::from_names(ALIGN_ATTRS, "Align", "Align_NotFound", Case::Insensitive)
}

/// Entity names are case-sensitive: `AElig` and `aelig` are distinct
/// entries with distinct runes.
pub fn entity_set() -> AssociationSet {
    AssociationSet::from_pairs(
        HTML_ENTITIES.iter().map(|&(name, rune)| (name, rune.to_string())),
        "-1",
        Case::Sensitive,
    )
}

/// Fallback is the transparent color.
pub fn color_set() -> AssociationSet {
    AssociationSet::from_pairs(
        CSS_COLORS
            .iter()
            .map(|&(name, rgb)| (name, format!("MKRGB({})", rgb))),
        "MKRGBA(0,0,0,0)",
        Case::Insensitive,
    )
}

/// Assemble the complete C output: macro prelude, the five finders, the
/// tag subset selectors, and the three enumerations.
pub fn generate_c(renderer: &dyn Renderer) -> Result<String, GenError> {
    let tags = tag_set();
    let attrs = attr_set();
    let aligns = align_set();

    let mut parts = vec![renderer.prelude()];
    parts.push(renderer.render_finder(&build_finder(&tags, "HtmlTag", "HtmlTag")?)?);
    parts.push(renderer.render_selector(&build_selector(
        &tags,
        SELF_CLOSING_TAGS,
        "SelfclosingTag",
        "HtmlTag",
    )?)?);
    parts.push(renderer.render_selector(&build_selector(
        &tags,
        INLINE_TAGS,
        "InlineTag",
        "HtmlTag",
    )?)?);
    parts.push(renderer.render_finder(&build_finder(&attrs, "HtmlAttr", "HtmlAttr")?)?);
    parts.push(renderer.render_finder(&build_finder(&aligns, "AlignAttr", "AlignAttr")?)?);

    let mut entities = ENTITIES_COMMENT.to_string();
    entities.push_str(&renderer.render_finder(&build_finder(
        &entity_set(),
        "HtmlEntityRune",
        "uint32_t",
    )?)?);
    parts.push(entities);

    parts.push(renderer.render_finder(&build_finder(&color_set(), "ARGB", "ARGB")?)?);

    parts.push(renderer.render_enum(&build_enum(&tags, "HtmlTag")?)?);
    parts.push(renderer.render_enum(&build_enum(&attrs, "HtmlAttr")?)?);
    parts.push(renderer.render_enum(&build_enum(&aligns, "AlignAttr")?)?);

    Ok(parts.join("\n"))
}

/// Assemble the Rust output. Covers the enum-valued domains (tags,
/// attributes, alignments) whose symbols are plain identifiers, plus the
/// entity runes as `u32` literals; the color table stays C-only since
/// its values are `MKRGB` expressions.
pub fn generate_rust(renderer: &dyn Renderer) -> Result<String, GenError> {
    let tags = tag_set();
    let attrs = attr_set();
    let aligns = align_set();
    let entities = AssociationSet::from_pairs(
        HTML_ENTITIES.iter().map(|&(name, rune)| (name, rune.to_string())),
        "u32::MAX",
        Case::Sensitive,
    );

    let mut parts = vec![renderer.prelude()];
    parts.push(renderer.render_enum(&build_enum(&tags, "HtmlTag")?)?);
    parts.push(renderer.render_enum(&build_enum(&attrs, "HtmlAttr")?)?);
    parts.push(renderer.render_enum(&build_enum(&aligns, "AlignAttr")?)?);
    parts.push(renderer.render_finder(&build_finder(&tags, "HtmlTag", "HtmlTag")?)?);
    parts.push(renderer.render_selector(&build_selector(
        &tags,
        SELF_CLOSING_TAGS,
        "SelfclosingTag",
        "HtmlTag",
    )?)?);
    parts.push(renderer.render_selector(&build_selector(
        &tags,
        INLINE_TAGS,
        "InlineTag",
        "HtmlTag",
    )?)?);
    parts.push(renderer.render_finder(&build_finder(&attrs, "HtmlAttr", "HtmlAttr")?)?);
    parts.push(renderer.render_finder(&build_finder(&aligns, "AlignAttr", "AlignAttr")?)?);
    parts.push(renderer.render_finder(&build_finder(&entities, "HtmlEntityRune", "u32")?)?);

    Ok(parts.join("\n"))
}
