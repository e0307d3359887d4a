//! Static syntax database.
//!
//! Each entry names a file type, the filename patterns that select it, its keywords and its
//! comment delimiters. Keywords ending in `|` belong to the secondary class (types, mostly)
//! and are painted differently from the primary control-flow keywords.

use bitflags::bitflags;

bitflags! {
    /// Optional highlighting passes enabled for a file type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SyntaxFlags: u8 {
        const HIGHLIGHT_NUMBERS = 1 << 0;
        const HIGHLIGHT_STRINGS = 1 << 1;
    }
}

/// Keyword classes recognised by the highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordClass {
    Primary,
    Secondary,
}

/// Trailing marker flagging a secondary keyword in the tables below.
const SECONDARY_MARKER: u8 = b'|';

/// One entry of the syntax database.
#[derive(Debug)]
pub struct SyntaxRules {
    /// Name shown in the status bar.
    pub file_type: &'static str,
    /// Patterns starting with `.` match as filename suffixes, others as substrings.
    pub file_match: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub single_line_comment: Option<&'static str>,
    /// Block comment `(open, close)` delimiters.
    pub block_comment: Option<(&'static str, &'static str)>,
    pub flags: SyntaxFlags,
}

impl SyntaxRules {
    /// Whether `filename` selects this entry.
    pub fn matches_filename(&self, filename: &str) -> bool {
        self.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                filename.ends_with(pattern)
            } else {
                filename.contains(pattern)
            }
        })
    }

    /// Keywords as byte strings with the class marker stripped.
    pub fn keywords(&self) -> impl Iterator<Item = (&'static [u8], KeywordClass)> + '_ {
        self.keywords.iter().map(|keyword| {
            let bytes = keyword.as_bytes();
            match bytes.split_last() {
                Some((&SECONDARY_MARKER, word)) => (word, KeywordClass::Secondary),
                _ => (bytes, KeywordClass::Primary),
            }
        })
    }

    pub fn highlights_numbers(&self) -> bool {
        self.flags.contains(SyntaxFlags::HIGHLIGHT_NUMBERS)
    }

    pub fn highlights_strings(&self) -> bool {
        self.flags.contains(SyntaxFlags::HIGHLIGHT_STRINGS)
    }
}

const C_EXTENSIONS: &[&str] = &[".c", ".h", ".cpp"];
const C_KEYWORDS: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
    "typedef", "static", "enum", "class", "case", "int|", "long|", "double|", "float|", "char|",
    "unsigned|", "signed|", "void|",
];

const RUST_EXTENSIONS: &[&str] = &[".rs"];
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "type",
    "unsafe", "use", "where", "while", "i8|", "i16|", "i32|", "i64|", "i128|", "isize|", "u8|",
    "u16|", "u32|", "u64|", "u128|", "usize|", "f32|", "f64|", "bool|", "char|", "str|",
    "String|", "Vec|", "Option|", "Result|", "Box|",
];

/// The syntax database, consulted in order; the first matching entry wins.
pub static SYNTAX_DB: &[SyntaxRules] = &[
    SyntaxRules {
        file_type: "c",
        file_match: C_EXTENSIONS,
        keywords: C_KEYWORDS,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: SyntaxFlags::HIGHLIGHT_NUMBERS.union(SyntaxFlags::HIGHLIGHT_STRINGS),
    },
    SyntaxRules {
        file_type: "rust",
        file_match: RUST_EXTENSIONS,
        keywords: RUST_KEYWORDS,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: SyntaxFlags::HIGHLIGHT_NUMBERS.union(SyntaxFlags::HIGHLIGHT_STRINGS),
    },
];

/// Pick the syntax entry for `filename`, if any.
pub fn select_for(filename: &str) -> Option<&'static SyntaxRules> {
    SYNTAX_DB
        .iter()
        .find(|rules| rules.matches_filename(filename))
}
