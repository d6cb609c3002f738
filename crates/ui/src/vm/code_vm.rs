use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder the player has to fill in.
pub const PLACEHOLDER: &str = "???";

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\?\?\?|</?[a-z][a-z0-9]*|[a-z-]+:|".+?"|'.+?'|/\*.*?\*/|//.*"#)
        .unwrap_or_else(|err| panic!("code token pattern is invalid: {err}"))
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Placeholder,
    Tag,
    Property,
    String,
    Comment,
}

impl TokenKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            TokenKind::Plain => "tok",
            TokenKind::Placeholder => "tok tok--blank",
            TokenKind::Tag => "tok tok--tag",
            TokenKind::Property => "tok tok--prop",
            TokenKind::String => "tok tok--string",
            TokenKind::Comment => "tok tok--comment",
        }
    }

    fn classify(token: &str) -> Self {
        if token == PLACEHOLDER {
            TokenKind::Placeholder
        } else if token.starts_with('<') {
            TokenKind::Tag
        } else if token.starts_with("/*") || token.starts_with("//") {
            TokenKind::Comment
        } else if token.ends_with(':') {
            TokenKind::Property
        } else if token.starts_with('"') || token.starts_with('\'') {
            TokenKind::String
        } else {
            TokenKind::Plain
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeToken {
    pub kind: TokenKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeLineVm {
    pub number: usize,
    pub tokens: Vec<CodeToken>,
}

/// Split one line into highlighted tokens. Concatenating the token texts gives the line back.
#[must_use]
pub fn highlight_line(line: &str) -> Vec<CodeToken> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    for found in TOKEN.find_iter(line) {
        if found.start() > cursor {
            tokens.push(CodeToken {
                kind: TokenKind::Plain,
                text: line[cursor..found.start()].to_string(),
            });
        }
        tokens.push(CodeToken {
            kind: TokenKind::classify(found.as_str()),
            text: found.as_str().to_string(),
        });
        cursor = found.end();
    }
    if cursor < line.len() {
        tokens.push(CodeToken {
            kind: TokenKind::Plain,
            text: line[cursor..].to_string(),
        });
    }
    tokens
}

/// Numbered, highlighted lines of a snippet.
#[must_use]
pub fn code_lines(snippet: &str) -> Vec<CodeLineVm> {
    snippet
        .split('\n')
        .enumerate()
        .map(|(idx, line)| CodeLineVm {
            number: idx + 1,
            tokens: highlight_line(line),
        })
        .collect()
}
