use blog_lexer::{TokenKind, TokenStream};
use blog_utils::span::FileInfo;
use colored::{Color, Colorize};

pub fn kind_color(kind: TokenKind) -> Color {
    match kind {
        | TokenKind::Identifier => Color::White,
        | TokenKind::FunctionName => Color::Cyan,
        | TokenKind::TypeName => Color::Green,
        | TokenKind::Keyword | TokenKind::KeywordConstant => Color::Magenta,
        | TokenKind::Operator | TokenKind::Punctuation => Color::Yellow,
        | TokenKind::StringLiteral | TokenKind::IntegerLiteral | TokenKind::FloatLiteral => {
            Color::Blue
        }
        | TokenKind::LineComment | TokenKind::BlockComment | TokenKind::Whitespace => {
            Color::BrightBlack
        }
        | TokenKind::Error => Color::Red,
    }
}

/// One line per token: position, kind, quoted text.
pub fn render_tokens(stream: &TokenStream, info: &FileInfo, show_trivia: bool) -> String {
    let mut out = String::new();
    for tok in stream.iter().filter(|tok| show_trivia || !tok.kind.is_trivia()) {
        let pos = info.position(tok.start).to_string();
        // pad before coloring so escape codes don't count toward the width
        let kind = format!("{:<16}", tok.kind);
        out.push_str(&format!("{pos:<8}{}{:?}\n", kind.color(kind_color(tok.kind)), tok.text));
    }
    out
}

/// `path:line:column: unrecognized character 'c'` for every error token.
pub fn diagnostics(stream: &TokenStream, info: &FileInfo) -> Vec<String> {
    stream.errors().iter().map(|err| err.located(info)).collect()
}
