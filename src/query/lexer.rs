// Query lexer - tokenizes query strings

use super::error::{QueryError, QueryResult};
use super::token::{Token, TokenKind};

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let input: Vec<char> = input.chars().collect();
        let current_char = input.first().copied();
        Lexer {
            input,
            position: 0,
            current_char,
        }
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> QueryResult<Token> {
        self.skip_whitespace();

        let start = self.position;
        let ch = match self.current_char {
            Some(ch) => ch,
            None => return Ok(Token::new(TokenKind::Eof, start)),
        };

        let kind = match ch {
            '=' => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    TokenKind::Equal
                } else {
                    return Err(QueryError::lexical(start, "expected '==' after '='"));
                }
            }
            '!' => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    TokenKind::NotEqual
                } else {
                    return Err(QueryError::lexical(start, "expected '!=' after '!'"));
                }
            }
            '<' => {
                self.advance();
                TokenKind::Less
            }
            '>' => {
                self.advance();
                TokenKind::Greater
            }
            '"' => self.read_string()?,
            '-' => {
                if self.peek().map_or(false, |c| c.is_ascii_digit()) {
                    self.read_number()
                } else {
                    return Err(QueryError::lexical(start, "expected digits after '-'"));
                }
            }
            c if c.is_ascii_digit() => self.read_number(),
            c if c.is_alphabetic() || c == '_' => self.read_identifier(),
            c => {
                return Err(QueryError::lexical(
                    start,
                    format!("unrecognized character '{}'", c),
                ));
            }
        };

        Ok(Token::new(kind, start))
    }

    /// Advance to the next character
    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    /// Peek at the next character without advancing
    fn peek(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    /// Skip whitespace characters
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read an identifier or keyword
    fn read_identifier(&mut self) -> TokenKind {
        let mut identifier = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        TokenKind::keyword_from_str(&identifier).unwrap_or(TokenKind::Identifier(identifier))
    }

    /// Read a string literal (no escape processing beyond the closing quote)
    fn read_string(&mut self) -> QueryResult<TokenKind> {
        let start = self.position;
        self.advance(); // Skip opening quote
        let mut string = String::new();

        loop {
            match self.current_char {
                Some('"') => {
                    self.advance(); // Skip closing quote
                    return Ok(TokenKind::String(string));
                }
                Some(ch) => {
                    string.push(ch);
                    self.advance();
                }
                None => {
                    return Err(QueryError::lexical(start, "unterminated string literal"));
                }
            }
        }
    }

    /// Read a number (integer or decimal, optional leading '-')
    fn read_number(&mut self) -> TokenKind {
        let mut number = String::new();
        let mut has_dot = false;

        if self.current_char == Some('-') {
            number.push('-');
            self.advance();
        }

        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.' && !has_dot && self.peek().map_or(false, |c| c.is_ascii_digit()) {
                has_dot = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        TokenKind::Number(number)
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> QueryResult<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_basic_tokens() {
        assert_eq!(
            kinds("age > 30"),
            vec![
                TokenKind::Identifier("age".to_string()),
                TokenKind::Greater,
                TokenKind::Number("30".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comparators() {
        assert_eq!(
            kinds("== != < > contains"),
            vec![
                TokenKind::Equal,
                TokenKind::NotEqual,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Contains,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("and or not AND"),
            vec![
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Not,
                TokenKind::And,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(
            kinds(r#""hello world" "John""#),
            vec![
                TokenKind::String("hello world".to_string()),
                TokenKind::String("John".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("123 456.789 0.5 -42 -1.5"),
            vec![
                TokenKind::Number("123".to_string()),
                TokenKind::Number("456.789".to_string()),
                TokenKind::Number("0.5".to_string()),
                TokenKind::Number("-42".to_string()),
                TokenKind::Number("-1.5".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            kinds("name _private field_2"),
            vec![
                TokenKind::Identifier("name".to_string()),
                TokenKind::Identifier("_private".to_string()),
                TokenKind::Identifier("field_2".to_string()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = Lexer::new("age > 30").tokenize().unwrap();
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].position, 4);
        assert_eq!(tokens[2].position, 6);
        assert_eq!(tokens[3].position, 8); // Eof
    }

    #[test]
    fn test_unterminated_string() {
        let err = Lexer::new(r#"name == "John"#).tokenize().unwrap_err();
        assert_eq!(err, QueryError::lexical(8, "unterminated string literal"));
    }

    #[test]
    fn test_bare_equals_and_bang() {
        assert!(matches!(
            Lexer::new("age = 30").tokenize(),
            Err(QueryError::Lexical { position: 4, .. })
        ));
        assert!(matches!(
            Lexer::new("age ! 30").tokenize(),
            Err(QueryError::Lexical { position: 4, .. })
        ));
    }

    #[test]
    fn test_unrecognized_character() {
        assert!(matches!(
            Lexer::new("age # 30").tokenize(),
            Err(QueryError::Lexical { position: 4, .. })
        ));
    }

    #[test]
    fn test_lexing_is_restartable() {
        let first = Lexer::new("age > 30").tokenize().unwrap();
        let second = Lexer::new("age > 30").tokenize().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_query() {
        assert_eq!(
            kinds(r#"title contains "Pattern" and year > 2000"#),
            vec![
                TokenKind::Identifier("title".to_string()),
                TokenKind::Contains,
                TokenKind::String("Pattern".to_string()),
                TokenKind::And,
                TokenKind::Identifier("year".to_string()),
                TokenKind::Greater,
                TokenKind::Number("2000".to_string()),
                TokenKind::Eof,
            ]
        );
    }
}
