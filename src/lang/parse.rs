use super::{ast::*, token::*, Error, LineNumber};
use crate::mach::Val;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Parse the tokens of one program line into its single statement.
/// Errors are tagged with `line_number`.
pub fn parse(line_number: LineNumber, tokens: &[Token]) -> Result<Statement> {
    match Parser::parse(tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Statement> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
        };
        let statement = parse.statement()?;
        match parse.next() {
            None | Some(Token { kind: TokenKind::Eof, .. }) => Ok(statement),
            Some(_) => Err(error!(SyntaxError)),
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        self.token_stream.next()
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.token_stream.next();
        }
        self.peeked
    }

    fn peek_kind(&mut self) -> TokenKind {
        self.peek().map_or(TokenKind::Eof, |t| t.kind)
    }

    fn statement(&mut self) -> Result<Statement> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        };
        use TokenKind::*;
        match token.kind {
            Identifier => Statement::r#let(self),
            Print | Goto | Let | Rem | Cls | Input => {
                self.next();
                Statement::for_word(self, token)
            }
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        self.term()
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Subtract,
                _ => return Ok(lhs),
            };
            self.next();
            let rhs = self.factor()?;
            lhs = Expression::binary(lhs, op, rhs);
        }
    }

    fn factor(&mut self) -> Result<Expression> {
        let mut lhs = self.primary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinaryOp::Multiply,
                TokenKind::Slash => BinaryOp::Divide,
                _ => return Ok(lhs),
            };
            self.next();
            let rhs = self.primary()?;
            lhs = Expression::binary(lhs, op, rhs);
        }
    }

    fn primary(&mut self) -> Result<Expression> {
        let token = match self.next() {
            Some(token) => token,
            None => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        };
        match (&token.kind, &token.literal) {
            (TokenKind::LeftParen, _) => {
                let expr = self.expression()?;
                self.expect(TokenKind::RightParen)?;
                Ok(Expression::Grouping(Box::new(expr)))
            }
            (TokenKind::Identifier, _) => Ok(Expression::Variable(Variable::new(&token.lexeme))),
            (TokenKind::String, Some(Literal::String(s))) => {
                Ok(Expression::Literal(Val::String(s.clone())))
            }
            (TokenKind::Number, Some(Literal::Number(n))) => {
                Ok(Expression::Literal(Val::Number(*n)))
            }
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn variable(&mut self) -> Result<Variable> {
        match self.next() {
            Some(token) if token.is(TokenKind::Identifier) => Ok(Variable::new(&token.lexeme)),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        if let Some(t) = self.next() {
            if t.is(kind) {
                return Ok(());
            }
        }
        use TokenKind::*;
        Err(error!(SyntaxError;
            match kind {
                String | Number => "EXPECTED LITERAL",
                Print | Goto | Let | Rem | Cls | List | Input => "EXPECTED RESERVED WORD",
                Identifier => "EXPECTED IDENTIFIER",
                Equal => "EXPECTED EQUALS SIGN",
                Plus | Minus | Star | Slash => "EXPECTED OPERATOR",
                LeftParen => "EXPECTED LEFT PARENTHESIS",
                RightParen => "EXPECTED RIGHT PARENTHESIS",
                Comma | Semicolon => "EXPECTED SEPARATOR",
                Eof => "UNEXPECTED TOKEN",
            }
        ))
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Token) -> Result<Statement> {
        use TokenKind::*;
        match word.kind {
            Cls => Ok(Statement::Cls),
            Goto => Self::r#goto(parse),
            Input => Self::r#input(parse),
            Let => Self::r#let(parse),
            Print => Self::r#print(parse),
            Rem => Self::r#rem(word),
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#goto(parse: &mut Parser) -> Result<Statement> {
        match parse.next() {
            Some(token) => Ok(Statement::Goto(LineNumber::try_from(token)?)),
            None => Err(error!(SyntaxError; "INVALID LINE NUMBER")),
        }
    }

    fn r#input(parse: &mut Parser) -> Result<Statement> {
        let checkpoint = (parse.token_stream.clone(), parse.peeked);
        if let Ok(var) = parse.variable() {
            if parse.peek_kind() == TokenKind::Eof {
                return Ok(Statement::Input(None, var));
            }
        }
        // Not a bare target, so the identifier starts the prompt expression.
        parse.token_stream = checkpoint.0;
        parse.peeked = checkpoint.1;
        let prompt = parse.expression()?;
        Self::input_after_prompt(parse, prompt)
    }

    fn input_after_prompt(parse: &mut Parser, prompt: Expression) -> Result<Statement> {
        match parse.next() {
            Some(t) if t.is(TokenKind::Comma) || t.is(TokenKind::Semicolon) => {}
            _ => return Err(error!(SyntaxError; "EXPECTED SEPARATOR")),
        }
        let var = parse.variable()?;
        Ok(Statement::Input(Some(prompt), var))
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let var = parse.variable()?;
        parse.expect(TokenKind::Equal)?;
        let expr = parse.expression()?;
        Ok(Statement::Let(var, expr))
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        Ok(Statement::Print(parse.expression()?))
    }

    fn r#rem(word: &Token) -> Result<Statement> {
        let comment = match &word.literal {
            Some(Literal::String(s)) => s.clone(),
            _ => "".into(),
        };
        Ok(Statement::Rem(comment))
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex::*;
    use super::*;

    fn parse_str(s: &str) -> Result<Statement> {
        parse(10, &lex(10, s)?)
    }

    #[test]
    fn test_input_with_identifier_prompt() {
        let answer = Statement::Input(
            Some(Expression::binary(
                Expression::Variable(Variable::new("P$")),
                BinaryOp::Add,
                Expression::Literal(Val::String("?".into())),
            )),
            Variable::new("A"),
        );
        assert_eq!(parse_str(r#"input p$ + "?"; a"#), Ok(answer));
        let answer = Statement::Input(Some(Expression::Variable(Variable::new("P$"))), Variable::new("A"));
        assert_eq!(parse_str("INPUT P$, A"), Ok(answer));
    }

    #[test]
    fn test_input_precedence_after_identifier() {
        let answer = Statement::Input(
            Some(Expression::binary(
                Expression::Variable(Variable::new("X")),
                BinaryOp::Add,
                Expression::binary(
                    Expression::Literal(Val::Number(2.0)),
                    BinaryOp::Multiply,
                    Expression::Literal(Val::Number(3.0)),
                ),
            )),
            Variable::new("Y"),
        );
        assert_eq!(parse_str("INPUT X + 2 * 3; Y"), Ok(answer));
    }
}
