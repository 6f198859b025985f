//! Syntax highlighting for the code editor.
//!
//! A small pattern-based tokenizer covering the languages in the picker.
//! `Auto` colours as JavaScript; `Other` only picks out strings, numbers and
//! comments.

use explainer_core::Language;
use iced::advanced::text::highlighter::{Format, Highlighter};
use iced::{Color, Font};
use std::ops::Range;

/// Settings for the highlighter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HighlightSettings {
    pub language: Language,
}

/// Token classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Type,
    Function,
    String,
    Number,
    Comment,
    Constant,
    Annotation,
    Operator,
    Punctuation,
    Default,
}

impl TokenKind {
    pub fn color(self, dark: bool) -> Color {
        if dark {
            match self {
                Self::Keyword => Color::from_rgb(0.78, 0.47, 0.87),
                Self::Type => Color::from_rgb(0.90, 0.75, 0.48),
                Self::Function => Color::from_rgb(0.38, 0.69, 0.94),
                Self::String => Color::from_rgb(0.60, 0.76, 0.47),
                Self::Number | Self::Constant => Color::from_rgb(0.82, 0.60, 0.40),
                Self::Comment => Color::from_rgb(0.50, 0.55, 0.55),
                Self::Annotation => Color::from_rgb(0.90, 0.80, 0.55),
                Self::Operator => Color::from_rgb(0.34, 0.71, 0.76),
                Self::Punctuation => Color::from_rgb(0.67, 0.70, 0.75),
                Self::Default => Color::from_rgb(0.67, 0.70, 0.75),
            }
        } else {
            match self {
                Self::Keyword => Color::from_rgb(0.55, 0.20, 0.60),
                Self::Type => Color::from_rgb(0.60, 0.45, 0.10),
                Self::Function => Color::from_rgb(0.15, 0.35, 0.70),
                Self::String => Color::from_rgb(0.25, 0.55, 0.20),
                Self::Number | Self::Constant => Color::from_rgb(0.70, 0.35, 0.15),
                Self::Comment => Color::from_rgb(0.50, 0.50, 0.50),
                Self::Annotation => Color::from_rgb(0.55, 0.45, 0.15),
                Self::Operator => Color::from_rgb(0.10, 0.45, 0.50),
                Self::Punctuation => Color::from_rgb(0.30, 0.30, 0.30),
                Self::Default => Color::from_rgb(0.10, 0.10, 0.12),
            }
        }
    }
}

/// Format for highlighted text.
#[derive(Debug, Clone, Copy)]
pub struct HighlightFormat {
    pub kind: TokenKind,
}

impl HighlightFormat {
    pub fn to_format(&self, theme: &iced::Theme) -> Format<Font> {
        let bg = theme.palette().background;
        let dark = bg.r + bg.g + bg.b < 1.5;
        Format {
            color: Some(self.kind.color(dark)),
            font: None,
        }
    }
}

/// A classified byte range of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub range: Range<usize>,
    pub kind: TokenKind,
}

// ============================================================================
// Language tables
// ============================================================================

struct LangConfig {
    keywords: &'static [&'static str],
    types: &'static [&'static str],
    constants: &'static [&'static str],
    line_comment: &'static str,
    block_comment: Option<(&'static str, &'static str)>,
    hash_comments: bool,
    backtick_strings: bool,
    triple_quote_strings: bool,
    annotations: bool,
    preprocessor: bool,
}

impl Default for LangConfig {
    fn default() -> Self {
        Self {
            keywords: &[],
            types: &[],
            constants: &[],
            line_comment: "//",
            block_comment: Some(("/*", "*/")),
            hash_comments: false,
            backtick_strings: false,
            triple_quote_strings: false,
            annotations: false,
            preprocessor: false,
        }
    }
}

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "export", "extends",
    "finally", "for", "from", "function", "if", "import", "in", "instanceof",
    "let", "new", "of", "return", "static", "super", "switch", "this", "throw",
    "try", "typeof", "var", "void", "while", "with", "yield",
];

const JS_TYPES: &[&str] = &[
    "Array", "Boolean", "Date", "Error", "Function", "JSON", "Map", "Math",
    "Number", "Object", "Promise", "RegExp", "Set", "String", "Symbol",
    "console", "window", "document",
];

const JS_CONSTANTS: &[&str] = &["true", "false", "null", "undefined", "NaN", "Infinity"];

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
    "raise", "return", "try", "while", "with", "yield",
];

const PYTHON_TYPES: &[&str] = &[
    "int", "float", "str", "bool", "list", "dict", "tuple", "set", "bytes",
    "object", "type", "print", "len", "range", "enumerate", "zip", "map",
    "filter", "open", "super", "self",
];

const PYTHON_CONSTANTS: &[&str] = &["True", "False", "None"];

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "break", "case", "catch", "class", "continue",
    "default", "do", "else", "enum", "extends", "final", "finally", "for",
    "if", "implements", "import", "instanceof", "interface", "native", "new",
    "package", "private", "protected", "public", "return", "static", "super",
    "switch", "synchronized", "this", "throw", "throws", "try", "var",
    "volatile", "while",
];

const JAVA_TYPES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short",
    "void", "String", "Object", "Integer", "List", "Map", "System",
];

const NULL_BOOL_CONSTANTS: &[&str] = &["true", "false", "null"];

const CPP_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "catch", "class", "const", "constexpr",
    "continue", "default", "delete", "do", "else", "enum", "explicit",
    "extern", "for", "friend", "goto", "if", "inline", "namespace", "new",
    "noexcept", "operator", "private", "protected", "public", "return",
    "sizeof", "static", "struct", "switch", "template", "this", "throw",
    "try", "typedef", "typename", "union", "using", "virtual", "volatile",
    "while",
];

const CPP_TYPES: &[&str] = &[
    "bool", "char", "double", "float", "int", "long", "short", "signed",
    "unsigned", "void", "size_t", "string", "vector", "map", "std", "cout",
    "cin", "endl",
];

const CPP_CONSTANTS: &[&str] = &["true", "false", "nullptr", "NULL"];

fn lang_config(language: Language) -> LangConfig {
    match language {
        Language::Auto | Language::JavaScript => LangConfig {
            keywords: JS_KEYWORDS,
            types: JS_TYPES,
            constants: JS_CONSTANTS,
            backtick_strings: true,
            ..Default::default()
        },
        Language::Python => LangConfig {
            keywords: PYTHON_KEYWORDS,
            types: PYTHON_TYPES,
            constants: PYTHON_CONSTANTS,
            line_comment: "",
            block_comment: None,
            hash_comments: true,
            triple_quote_strings: true,
            annotations: true,
            ..Default::default()
        },
        Language::Java => LangConfig {
            keywords: JAVA_KEYWORDS,
            types: JAVA_TYPES,
            constants: NULL_BOOL_CONSTANTS,
            annotations: true,
            ..Default::default()
        },
        Language::Cpp => LangConfig {
            keywords: CPP_KEYWORDS,
            types: CPP_TYPES,
            constants: CPP_CONSTANTS,
            preprocessor: true,
            ..Default::default()
        },
        Language::Other => LangConfig::default(),
    }
}

// ============================================================================
// Tokenizer
// ============================================================================

/// Multi-line construct open at a line boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineState {
    in_block_comment: bool,
    open_triple: Option<u8>,
}

/// Splits lines into spans, carrying block comment and docstring state
/// from one line to the next.
pub struct LineTokenizer {
    config: LangConfig,
    in_block_comment: bool,
    /// Open triple-quote delimiter, if inside one
    open_triple: Option<u8>,
    spans: Vec<Span>,
}

impl LineTokenizer {
    pub fn new(language: Language) -> Self {
        Self {
            config: lang_config(language),
            in_block_comment: false,
            open_triple: None,
            spans: Vec::new(),
        }
    }

    pub fn state(&self) -> LineState {
        LineState {
            in_block_comment: self.in_block_comment,
            open_triple: self.open_triple,
        }
    }

    /// Resumes from a state taken with `state`.
    pub fn restore(&mut self, state: LineState) {
        self.in_block_comment = state.in_block_comment;
        self.open_triple = state.open_triple;
    }

    /// Tokenizes one line. Spans are contiguous and cover the line.
    pub fn tokenize(&mut self, line: &str) -> &[Span] {
        self.spans.clear();
        self.scan(line);
        &self.spans
    }

    fn push(&mut self, range: Range<usize>, kind: TokenKind) {
        if !range.is_empty() {
            self.spans.push(Span { range, kind });
        }
    }

    fn scan(&mut self, line: &str) {
        let bytes = line.as_bytes();
        let len = bytes.len();
        let mut i = 0;

        if self.in_block_comment {
            let Some((_, end)) = self.config.block_comment else {
                self.in_block_comment = false;
                return self.scan(line);
            };
            match line.find(end) {
                Some(pos) => {
                    i = pos + end.len();
                    self.push(0..i, TokenKind::Comment);
                    self.in_block_comment = false;
                }
                None => return self.push(0..len, TokenKind::Comment),
            }
        }

        if let Some(delim) = self.open_triple {
            match find_triple(line, i, delim) {
                Some(end) => {
                    self.push(i..end, TokenKind::String);
                    self.open_triple = None;
                    i = end;
                }
                None => return self.push(i..len, TokenKind::String),
            }
        }

        while i < len {
            let rest = &line[i..];
            let b = bytes[i];

            if b.is_ascii_whitespace() {
                let start = i;
                while i < len && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                self.push(start..i, TokenKind::Default);
                continue;
            }

            if !self.config.line_comment.is_empty() && rest.starts_with(self.config.line_comment) {
                return self.push(i..len, TokenKind::Comment);
            }

            if b == b'#' {
                if self.config.hash_comments {
                    return self.push(i..len, TokenKind::Comment);
                }
                // #include, #define, ...
                if self.config.preprocessor && line[..i].trim().is_empty() {
                    let start = i;
                    i += 1;
                    while i < len && bytes[i].is_ascii_alphabetic() {
                        i += 1;
                    }
                    self.push(start..i, TokenKind::Annotation);
                    continue;
                }
            }

            if let Some((open, close)) = self.config.block_comment {
                if rest.starts_with(open) {
                    let start = i;
                    i += open.len();
                    match line[i..].find(close) {
                        Some(pos) => {
                            i += pos + close.len();
                            self.push(start..i, TokenKind::Comment);
                            continue;
                        }
                        None => {
                            self.in_block_comment = true;
                            return self.push(start..len, TokenKind::Comment);
                        }
                    }
                }
            }

            if self.config.annotations && b == b'@' {
                let start = i;
                i += 1;
                while i < len && is_ident_byte(bytes[i]) {
                    i += 1;
                }
                self.push(start..i, TokenKind::Annotation);
                continue;
            }

            if self.config.triple_quote_strings
                && (rest.starts_with("\"\"\"") || rest.starts_with("'''"))
            {
                let start = i;
                match find_triple(line, i + 3, b) {
                    Some(end) => {
                        i = end;
                        self.push(start..i, TokenKind::String);
                        continue;
                    }
                    None => {
                        self.open_triple = Some(b);
                        return self.push(start..len, TokenKind::String);
                    }
                }
            }

            if b == b'"' || b == b'\'' || (b == b'`' && self.config.backtick_strings) {
                let start = i;
                i = skip_quoted(bytes, i, b);
                self.push(start..i, TokenKind::String);
                continue;
            }

            if b.is_ascii_digit() || (b == b'.' && i + 1 < len && bytes[i + 1].is_ascii_digit()) {
                let start = i;
                if rest.starts_with("0x") || rest.starts_with("0X") {
                    i += 2;
                }
                while i < len && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'.' || bytes[i] == b'_') {
                    i += 1;
                }
                self.push(start..i, TokenKind::Number);
                continue;
            }

            if is_ident_start(b) {
                let start = i;
                while i < len && is_ident_byte(bytes[i]) {
                    i += 1;
                }
                let word = &line[start..i];
                let kind = self.classify(word, bytes.get(i).copied());
                self.push(start..i, kind);
                continue;
            }

            if matches!(b, b'=' | b'!' | b'<' | b'>' | b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|' | b'^' | b'~' | b'?') {
                let start = i;
                i += 1;
                while i < len && i - start < 3 && matches!(bytes[i], b'=' | b'>' | b'<' | b'&' | b'|') {
                    i += 1;
                }
                self.push(start..i, TokenKind::Operator);
                continue;
            }

            if matches!(b, b'(' | b')' | b'{' | b'}' | b'[' | b']' | b';' | b',' | b'.' | b':') {
                self.push(i..i + 1, TokenKind::Punctuation);
                i += 1;
                continue;
            }

            // Anything else, one whole character at a time
            let step = rest.chars().next().map(char::len_utf8).unwrap_or(1);
            self.push(i..i + step, TokenKind::Default);
            i += step;
        }
    }

    fn classify(&self, word: &str, next: Option<u8>) -> TokenKind {
        if self.config.constants.contains(&word) {
            TokenKind::Constant
        } else if self.config.keywords.contains(&word) {
            TokenKind::Keyword
        } else if self.config.types.contains(&word) {
            TokenKind::Type
        } else if next == Some(b'(') {
            TokenKind::Function
        } else if word.len() > 1 && word.bytes().all(|c| c.is_ascii_uppercase() || c == b'_') {
            TokenKind::Constant
        } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            TokenKind::Type
        } else {
            TokenKind::Default
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Index just past the closing quote, or the line end if unterminated.
fn skip_quoted(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Index just past the next `delim` triple at or after `from`.
fn find_triple(line: &str, from: usize, delim: u8) -> Option<usize> {
    let triple = [delim; 3];
    let triple = std::str::from_utf8(&triple).ok()?;
    line.get(from..)?.find(triple).map(|pos| from + pos + 3)
}

// ============================================================================
// iced integration
// ============================================================================

/// Syntax highlighter for the text editor.
pub struct EditorHighlighter {
    language: Language,
    tokenizer: LineTokenizer,
    current_line: usize,
    /// State at the start of each highlighted line
    line_states: Vec<LineState>,
}

impl Highlighter for EditorHighlighter {
    type Settings = HighlightSettings;
    type Highlight = HighlightFormat;
    type Iterator<'a> = std::vec::IntoIter<(Range<usize>, HighlightFormat)> where Self: 'a;

    fn new(settings: &Self::Settings) -> Self {
        Self {
            language: settings.language,
            tokenizer: LineTokenizer::new(settings.language),
            current_line: 0,
            line_states: Vec::new(),
        }
    }

    fn update(&mut self, new_settings: &Self::Settings) {
        if self.language != new_settings.language {
            self.language = new_settings.language;
            self.tokenizer = LineTokenizer::new(new_settings.language);
            self.current_line = 0;
            self.line_states.clear();
        }
    }

    fn change_line(&mut self, line: usize) {
        if line < self.current_line {
            let state = self.line_states.get(line).copied().unwrap_or_default();
            self.tokenizer.restore(state);
            self.line_states.truncate(line);
            self.current_line = line;
        }
    }

    fn highlight_line(&mut self, line: &str) -> Self::Iterator<'_> {
        self.line_states.truncate(self.current_line);
        self.line_states.push(self.tokenizer.state());
        self.current_line += 1;
        self.tokenizer
            .tokenize(line)
            .iter()
            .map(|span| (span.range.clone(), HighlightFormat { kind: span.kind }))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn current_line(&self) -> usize {
        self.current_line
    }
}
