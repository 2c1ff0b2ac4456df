// Query tokens for lexical analysis

/// Kinds of tokens the query grammar is built from
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Identifier(String),
    Number(String),
    String(String),

    // Comparators
    Equal,
    NotEqual,
    Less,
    Greater,
    Contains,

    // Combinators
    And,
    Or,
    Not,

    // Special
    Eof,
}

impl TokenKind {
    /// Check if the token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Contains | TokenKind::And | TokenKind::Or | TokenKind::Not
        )
    }

    /// Convert a string to a keyword token if it matches
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s.to_lowercase().as_str() {
            "contains" => Some(TokenKind::Contains),
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "not" => Some(TokenKind::Not),
            _ => None,
        }
    }

    /// Human-readable token description for error messages
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Identifier(name) => format!("identifier '{}'", name),
            TokenKind::Number(text) => format!("number {}", text),
            TokenKind::String(text) => format!("string \"{}\"", text),
            TokenKind::Equal => "'=='".to_string(),
            TokenKind::NotEqual => "'!='".to_string(),
            TokenKind::Less => "'<'".to_string(),
            TokenKind::Greater => "'>'".to_string(),
            TokenKind::Contains => "'contains'".to_string(),
            TokenKind::And => "'and'".to_string(),
            TokenKind::Or => "'or'".to_string(),
            TokenKind::Not => "'not'".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// A token together with its character offset in the query
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }
}
