use super::{Error, LineNumber};
use std::collections::HashMap;
use std::convert::TryFrom;
use std::rc::Rc;

thread_local!(
    static KEYWORDS: HashMap<&'static str, TokenKind> = TokenKind::RESERVED
        .iter()
        .map(|kind| (kind.keyword().unwrap_or_default(), *kind))
        .collect();
);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    String,
    Number,
    Print,
    Goto,
    Let,
    Rem,
    Cls,
    List,
    Input,
    Identifier,
    Equal,
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
    Comma,
    Semicolon,
    Eof,
}

impl TokenKind {
    pub const RESERVED: [TokenKind; 7] = [
        TokenKind::Print,
        TokenKind::Goto,
        TokenKind::Let,
        TokenKind::Rem,
        TokenKind::Cls,
        TokenKind::List,
        TokenKind::Input,
    ];

    pub fn from_keyword(s: &str) -> Option<TokenKind> {
        KEYWORDS.with(|kw| kw.get(s).copied())
    }

    pub fn keyword(&self) -> Option<&'static str> {
        use TokenKind::*;
        match self {
            Print => Some("PRINT"),
            Goto => Some("GOTO"),
            Let => Some("LET"),
            Rem => Some("REM"),
            Cls => Some("CLS"),
            List => Some("LIST"),
            Input => Some("INPUT"),
            _ => None,
        }
    }

    pub fn from_char(ch: char) -> Option<TokenKind> {
        use TokenKind::*;
        match ch {
            '(' => Some(LeftParen),
            ')' => Some(RightParen),
            '=' => Some(Equal),
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Star),
            '/' => Some(Slash),
            ',' => Some(Comma),
            ';' => Some(Semicolon),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    String(Rc<str>),
    Number(f64),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: LineNumber,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: &str, line: LineNumber) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            literal: None,
            line,
        }
    }

    pub fn with_literal(self, literal: Literal) -> Token {
        Token {
            literal: Some(literal),
            ..self
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        let msg = "INVALID LINE NUMBER";
        if let Some(Literal::Number(_)) = token.literal {
            if token.lexeme.chars().all(|c| c.is_ascii_digit()) {
                return match token.lexeme.parse::<LineNumber>() {
                    Ok(0) => Err(error!(SyntaxError; msg)),
                    Ok(line) => Ok(line),
                    Err(_) => Err(error!(Overflow; msg)),
                };
            }
        }
        Err(error!(SyntaxError; msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keyword() {
        assert_eq!(TokenKind::from_keyword("REM"), Some(TokenKind::Rem));
        assert_eq!(TokenKind::from_keyword("INPUT"), Some(TokenKind::Input));
        assert_eq!(TokenKind::from_keyword("PICKLES"), None);
    }

    #[test]
    fn test_line_number_from_token() {
        let token = Token::new(TokenKind::Number, "100", 10).with_literal(Literal::Number(100.0));
        assert_eq!(LineNumber::try_from(&token), Ok(100));
        let token = Token::new(TokenKind::Number, "1.5", 10).with_literal(Literal::Number(1.5));
        assert!(LineNumber::try_from(&token).is_err());
        let token =
            Token::new(TokenKind::Number, "70000", 10).with_literal(Literal::Number(70000.0));
        assert_eq!(LineNumber::try_from(&token), Ok(70000));
        let token = Token::new(TokenKind::Number, "0", 10).with_literal(Literal::Number(0.0));
        assert_eq!(
            LineNumber::try_from(&token).map_err(|e| e.to_string()),
            Err("SYNTAX ERROR; INVALID LINE NUMBER".to_string())
        );
        let token = Token::new(TokenKind::Number, "99999999999", 10)
            .with_literal(Literal::Number(99999999999.0));
        assert_eq!(
            LineNumber::try_from(&token).map_err(|e| e.to_string()),
            Err("OVERFLOW; INVALID LINE NUMBER".to_string())
        );
    }
}
