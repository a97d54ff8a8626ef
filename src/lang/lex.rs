use super::{token::*, Error, LineNumber};
use log::warn;

type Result<T> = std::result::Result<T, Error>;

/// Scan one line of program text, without its line number.
/// The stream always ends with an `Eof` token.
pub fn lex(line: LineNumber, s: &str) -> Result<Vec<Token>> {
    BasicLexer::lex(line, s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_basic_alphanumeric(c: char) -> bool {
    is_basic_alphabetic(c) || is_basic_digit(c)
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: LineNumber,
}

impl<'a> BasicLexer<'a> {
    fn lex(line: LineNumber, s: &str) -> Result<Vec<Token>> {
        let mut lexer = BasicLexer {
            chars: s.chars().peekable(),
            line,
        };
        let mut tokens = vec![];
        while let Some(mut token) = lexer.next_token()? {
            if token.is(TokenKind::Rem) {
                let text = lexer.remark_text();
                token = token.with_literal(Literal::String(text.into()));
            }
            tokens.push(token);
        }
        tokens.push(Token::new(TokenKind::Eof, "", line));
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            let pk = match self.chars.peek() {
                Some(pk) => *pk,
                None => return Ok(None),
            };
            if is_basic_whitespace(pk) {
                self.chars.next();
                continue;
            }
            if is_basic_digit(pk) {
                return Ok(Some(self.number()));
            }
            if is_basic_alphabetic(pk) {
                return Ok(Some(self.alphabetic()));
            }
            if pk == '"' {
                return self.string().map(Some);
            }
            self.chars.next();
            if let Some(kind) = TokenKind::from_char(pk) {
                return Ok(Some(Token::new(kind, &pk.to_string(), self.line)));
            }
            warn!("[Line {}] Unexpected character: {:?}", self.line, pk);
        }
    }

    /// Everything after REM belongs to the remark and is never tokenized.
    fn remark_text(&mut self) -> String {
        let text: String = self.chars.by_ref().collect();
        text.trim().to_string()
    }

    fn number(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&ch) = self.chars.peek() {
            if !is_basic_digit(ch) {
                break;
            }
            s.push(ch);
            self.chars.next();
        }
        if let Some('.') = self.chars.peek() {
            let mut lookahead = self.chars.clone();
            lookahead.next();
            if lookahead.peek().map_or(false, |c| is_basic_digit(*c)) {
                s.push('.');
                self.chars.next();
                while let Some(&ch) = self.chars.peek() {
                    if !is_basic_digit(ch) {
                        break;
                    }
                    s.push(ch);
                    self.chars.next();
                }
            }
        }
        let value = s.parse::<f64>().unwrap_or_default();
        Token::new(TokenKind::Number, &s, self.line).with_literal(Literal::Number(value))
    }

    fn string(&mut self) -> Result<Token> {
        let mut s = String::new();
        self.chars.next();
        loop {
            match self.chars.next() {
                Some('"') => break,
                Some(ch) => s.push(ch),
                None => {
                    return Err(error!(SyntaxError, self.line; "UNTERMINATED STRING"));
                }
            }
        }
        let lexeme = format!("\"{}\"", s);
        Ok(Token::new(TokenKind::String, &lexeme, self.line).with_literal(Literal::String(s.into())))
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&ch) = self.chars.peek() {
            if !is_basic_alphanumeric(ch) {
                break;
            }
            s.push(ch);
            self.chars.next();
        }
        if let Some('$') = self.chars.peek() {
            s.push('$');
            self.chars.next();
        }
        let upper = s.to_ascii_uppercase();
        let kind = TokenKind::from_keyword(&upper).unwrap_or(TokenKind::Identifier);
        Token::new(kind, &s, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        lex(10, s).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_whitespace_is_skipped() {
        use TokenKind::*;
        assert_eq!(kinds(" \tPRINT\r\n"), vec![Print, Eof]);
        assert_eq!(kinds(""), vec![Eof]);
    }

    #[test]
    fn test_remark_keeps_raw_text() {
        let tokens = lex(10, "REM it's \"odd\" % stuff ").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(
            tokens[0].literal,
            Some(Literal::String("it's \"odd\" % stuff".into()))
        );
    }
}
