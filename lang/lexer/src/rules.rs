use crate::{RuleError, Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{collections::VecDeque, fmt::Debug};

pub const TYPES: &[&str] = &[
    "Integer",
    "Real",
    "Boolean",
    "NaturalNum",
    "List",
    "Map",
    "TabularCPD",
    "Categorical",
    "Distribution",
    "Gaussian",
];

pub const KEYWORDS: &[&str] = &[
    "extern", "import", "fixed", "distinct", "random", "origin", "param", "type", "forall",
    "exists", "obs", "query", "if", "then", "else",
];

/// Longer lexemes precede their prefixes.
pub const OPERATORS: &[&str] = &[
    "->", "==", "!=", "<=", ">=", "=", "~", ":", "+", "-", "*", "/", "[", "]", "{", "}", "!",
    "<", ">", "&", "|", "#", "^", ".",
];

pub const CONSTANTS: &[&str] = &["true", "false", "null"];

pub const DELIMITERS: &[&str] = &[",", ";", "(", ")"];

/// Prefixes the operator rule leaves to the comment rules.
const COMMENT_OPENERS: &[&str] = &["//", "/*"];

const IDENTIFIER: &str = r"[A-Za-z_]\w*";

/// The kinds a rule assigns to its match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emit {
    /// the whole match is one token
    One(TokenKind),
    /// one token per capture group, in group order
    Groups(&'static [TokenKind]),
}

enum Matcher {
    /// anchored at the cursor
    Pattern(Regex),
    /// returns the length of the match, 0 for none
    Scan(fn(&str) -> usize),
    /// an identifier directly followed by `open`
    Head { word: Regex, open: char },
}

impl Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            | Matcher::Pattern(regex) => write!(f, "Pattern({:?})", regex.as_str()),
            | Matcher::Scan(_) => write!(f, "Scan"),
            | Matcher::Head { open, .. } => write!(f, "Head({open:?})"),
        }
    }
}

#[derive(Debug)]
pub struct Rule {
    name: &'static str,
    matcher: Matcher,
    emit: Emit,
    unless: &'static [&'static str],
}

impl Rule {
    pub fn pattern(name: &'static str, pattern: &str, emit: Emit) -> Result<Rule, RuleError> {
        let regex = Regex::new(&format!("^(?:{pattern})"))
            .map_err(|source| RuleError::Pattern { name, source })?;
        if let Emit::Groups(kinds) = emit {
            let found = regex.captures_len() - 1;
            if found != kinds.len() {
                return Err(RuleError::GroupCount { name, found, expected: kinds.len() });
            }
        }
        Ok(Rule { name, matcher: Matcher::Pattern(regex), emit, unless: &[] })
    }
    pub fn scanner(name: &'static str, scan: fn(&str) -> usize, kind: TokenKind) -> Rule {
        Rule { name, matcher: Matcher::Scan(scan), emit: Emit::One(kind), unless: &[] }
    }
    /// An identifier immediately followed by `open`, emitted as two tokens
    /// of `kinds`. The identifier is measured through the [`ScanContext`], so
    /// retrying at later offsets of the same word does not read it again.
    pub fn head(
        name: &'static str, open: char, kinds: &'static [TokenKind],
    ) -> Result<Rule, RuleError> {
        if kinds.len() != 2 {
            return Err(RuleError::GroupCount { name, found: 2, expected: kinds.len() });
        }
        let word = Regex::new(&format!("^(?:{IDENTIFIER})"))
            .map_err(|source| RuleError::Pattern { name, source })?;
        let matcher = Matcher::Head { word, open };
        Ok(Rule { name, matcher, emit: Emit::Groups(kinds), unless: &[] })
    }
    /// Skip this rule whenever the input at the cursor starts with one of `prefixes`.
    pub fn unless(self, prefixes: &'static [&'static str]) -> Rule {
        Rule { unless: prefixes, ..self }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn emits(&self) -> Emit {
        self.emit
    }

    /// Try the rule at byte offset `at`. On a match, push the tokens covering
    /// it onto `out` and return the offset where the match ends. Nothing is
    /// pushed when the rule fails or would match the empty string.
    ///
    /// `ctx` must belong to a scan of this same `source`.
    pub fn apply<'src>(
        &self, source: &'src str, at: usize, ctx: &mut ScanContext,
        out: &mut VecDeque<Token<'src>>,
    ) -> Option<usize> {
        let rest = &source[at..];
        if self.unless.iter().any(|prefix| rest.starts_with(prefix)) {
            return None;
        }
        match (&self.matcher, self.emit) {
            | (Matcher::Scan(scan), Emit::One(kind)) => {
                let len = scan(rest);
                (len > 0).then(|| {
                    out.push_back(Token::new(kind, source, at, at + len));
                    at + len
                })
            }
            | (Matcher::Pattern(regex), Emit::One(kind)) => {
                let m = regex.find(rest).filter(|m| m.end() > 0)?;
                out.push_back(Token::new(kind, source, at, at + m.end()));
                Some(at + m.end())
            }
            | (Matcher::Pattern(regex), Emit::Groups(kinds)) => {
                let caps = regex.captures(rest)?;
                let end = at + caps.get(0)?.end();
                if end == at {
                    return None;
                }
                // each group's token starts where the previous one ended,
                // so the pieces always tile the whole match
                let mut pos = at;
                for (i, &kind) in kinds.iter().enumerate() {
                    let Some(group) = caps.get(i + 1) else { continue };
                    let group_end = at + group.end();
                    if group_end > pos {
                        out.push_back(Token::new(kind, source, pos, group_end));
                        pos = group_end;
                    }
                }
                if pos < end {
                    let kind = kinds.last().copied().unwrap_or(TokenKind::Error);
                    out.push_back(Token::new(kind, source, pos, end));
                }
                Some(end)
            }
            | (Matcher::Head { word, open }, Emit::Groups(kinds)) => {
                let &[name_kind, open_kind] = kinds else { return None };
                let end = ctx.word_end(word, source, at)?;
                if !source[end..].starts_with(*open) {
                    return None;
                }
                let close = end + open.len_utf8();
                out.push_back(Token::new(name_kind, source, at, end));
                out.push_back(Token::new(open_kind, source, end, close));
                Some(close)
            }
            | (Matcher::Scan(_), Emit::Groups(_)) | (Matcher::Head { .. }, Emit::One(_)) => None,
        }
    }
}

/// State shared by the rules during one scan of one source.
///
/// It remembers the extent of the last word measured. Rules such as
/// `type-name` stop inside a word, and every later offset of that word is
/// tried again, and those tries reuse the known end.
#[derive(Clone, Debug, Default)]
pub struct ScanContext {
    /// `start..end` of the last measured identifier
    word: Option<(usize, usize)>,
    measured: usize,
}

impl ScanContext {
    pub fn new() -> Self {
        Self::default()
    }
    /// Total bytes read while measuring words.
    pub fn measured(&self) -> usize {
        self.measured
    }

    /// End of the identifier starting at `at`, if one does.
    fn word_end(&mut self, word: &Regex, source: &str, at: usize) -> Option<usize> {
        let rest = &source[at..];
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
            return None;
        }
        // every byte of a measured word is a word character, so an
        // identifier starting inside it ends where the word ends
        match self.word {
            | Some((start, end)) if start <= at && at < end => Some(end),
            | _ => {
                let end = at + word.find(rest)?.end();
                self.measured += end - at;
                self.word = Some((at, end));
                Some(end)
            }
        }
    }
}

/// Rules in priority order; the first one matching at the cursor wins.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

static STANDARD: Lazy<RuleTable> =
    Lazy::new(|| RuleTable::blog().expect("built-in lexer rules are valid"));

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleTable { rules }
    }

    /// The shared table for BLOG source.
    pub fn standard() -> &'static RuleTable {
        &STANDARD
    }

    /// Build the BLOG rule table. Several rules overlap (every keyword is
    /// also an identifier), so the order below is part of the lexical grammar.
    pub fn blog() -> Result<Self, RuleError> {
        use TokenKind::*;
        let rules = vec![
            Rule::head("function-head", '(', &[FunctionName, Punctuation])?,
            // no trailing word boundary: `Listing` lexes as `List` + `ing`
            Rule::pattern("type-name", &alternation(TYPES), Emit::One(TypeName))?,
            Rule::pattern(
                "keyword",
                &format!(r"(?:{})\b", alternation(KEYWORDS)),
                Emit::One(Keyword),
            )?,
            Rule::pattern("operator", &alternation(OPERATORS), Emit::One(Operator))?
                .unless(COMMENT_OPENERS),
            Rule::pattern(
                "constant",
                &format!(r"(?:{})\b", alternation(CONSTANTS)),
                Emit::One(KeywordConstant),
            )?,
            Rule::pattern("identifier", IDENTIFIER, Emit::One(Identifier))?,
            Rule::scanner("string", scan_string, StringLiteral),
            Rule::pattern("punctuation", &alternation(DELIMITERS), Emit::One(Punctuation))?,
            Rule::pattern("float", r"[0-9]+\.[0-9]+", Emit::One(FloatLiteral))?,
            Rule::pattern("integer", r"[0-9]+", Emit::One(IntegerLiteral))?,
            Rule::scanner("line-comment", scan_line_comment, LineComment),
            Rule::scanner("block-comment", scan_block_comment, BlockComment),
            Rule::scanner("whitespace", scan_whitespace, Whitespace),
        ];
        Ok(RuleTable::new(rules))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }
    pub fn len(&self) -> usize {
        self.rules.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;
    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

fn alternation(words: &[&str]) -> String {
    words.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|")
}

/// A double-quoted string. A backslash escapes the next character. Without
/// a closing quote the literal stops before the first unescaped newline, or
/// at the end of input.
pub fn scan_string(rest: &str) -> usize {
    if !rest.starts_with('"') {
        return 0;
    }
    let mut chars = rest.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            | '\\' => {
                chars.next();
            }
            | '"' => return i + 1,
            | '\n' => return i,
            | _ => {}
        }
    }
    rest.len()
}

/// `//` up to and including the next newline, or to the end of input.
pub fn scan_line_comment(rest: &str) -> usize {
    if !rest.starts_with("//") {
        return 0;
    }
    rest.find('\n').map_or(rest.len(), |i| i + 1)
}

/// `/*` up to the nearest `*/`, or to the end of input. Does not nest.
pub fn scan_block_comment(rest: &str) -> usize {
    if !rest.starts_with("/*") {
        return 0;
    }
    rest[2..].find("*/").map_or(rest.len(), |i| 2 + i + 2)
}

pub fn scan_whitespace(rest: &str) -> usize {
    rest.char_indices().find(|&(_, c)| !c.is_whitespace()).map_or(rest.len(), |(i, _)| i)
}
