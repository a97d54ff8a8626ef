use basic::lang::{ast::*, lex, parse, Error};
use basic::mach::Val;

fn parse_str(s: &str) -> Result<Statement, Error> {
    parse(10, &lex(10, s)?)
}

fn num(n: f64) -> Expression {
    Expression::Literal(Val::Number(n))
}

fn var(name: &str) -> Expression {
    Expression::Variable(Variable::new(name))
}

#[test]
fn test_precedence() {
    let answer = Statement::Print(Expression::binary(
        num(2.0),
        BinaryOp::Add,
        Expression::binary(num(3.0), BinaryOp::Multiply, num(4.0)),
    ));
    assert_eq!(parse_str("PRINT 2 + 3 * 4"), Ok(answer));
}

#[test]
fn test_left_associative() {
    let answer = Statement::Print(Expression::binary(
        Expression::binary(num(10.0), BinaryOp::Subtract, num(2.0)),
        BinaryOp::Subtract,
        num(3.0),
    ));
    assert_eq!(parse_str("PRINT 10 - 2 - 3"), Ok(answer));
    let answer = Statement::Print(Expression::binary(
        Expression::binary(num(8.0), BinaryOp::Divide, num(4.0)),
        BinaryOp::Divide,
        num(2.0),
    ));
    assert_eq!(parse_str("PRINT 8 / 4 / 2"), Ok(answer));
}

#[test]
fn test_grouping() {
    let answer = Statement::Print(Expression::binary(
        Expression::Grouping(Box::new(Expression::binary(
            num(2.0),
            BinaryOp::Add,
            num(3.0),
        ))),
        BinaryOp::Multiply,
        num(4.0),
    ));
    assert_eq!(parse_str("PRINT (2 + 3) * 4"), Ok(answer));
}

#[test]
fn test_implicit_let() {
    let answer = Statement::Let(Variable::new("A"), num(5.0));
    assert_eq!(parse_str("a = 5"), Ok(answer.clone()));
    assert_eq!(parse_str("LET A = 5"), Ok(answer));
}

#[test]
fn test_let_string() {
    let answer = Statement::Let(
        Variable::new("N$"),
        Expression::binary(var("N$"), BinaryOp::Add, Expression::Literal(Val::String("!".into()))),
    );
    assert_eq!(parse_str(r#"N$ = N$ + "!""#), Ok(answer));
}

#[test]
fn test_goto() {
    assert_eq!(parse_str("GOTO 100"), Ok(Statement::Goto(100)));
    assert!(parse_str("GOTO 10.5").is_err());
    assert!(parse_str("GOTO").is_err());
    assert!(parse_str("GOTO A").is_err());
}

#[test]
fn test_input_forms() {
    assert_eq!(
        parse_str("INPUT A"),
        Ok(Statement::Input(None, Variable::new("A")))
    );
    let prompt = Expression::Literal(Val::String("NAME".into()));
    assert_eq!(
        parse_str(r#"INPUT "NAME"; N$"#),
        Ok(Statement::Input(Some(prompt.clone()), Variable::new("N$")))
    );
    assert_eq!(
        parse_str(r#"INPUT "NAME", N$"#),
        Ok(Statement::Input(Some(prompt), Variable::new("N$")))
    );
    assert!(parse_str(r#"INPUT "NAME" N$"#).is_err());
}

#[test]
fn test_rem_and_cls() {
    assert_eq!(parse_str("REM hello there"), Ok(Statement::Rem("hello there".into())));
    assert_eq!(parse_str("REM"), Ok(Statement::Rem("".into())));
    assert_eq!(parse_str("CLS"), Ok(Statement::Cls));
}

#[test]
fn test_trailing_tokens() {
    let error = parse_str(r#"PRINT "A" "B""#).unwrap_err();
    assert_eq!(error.to_string(), "SYNTAX ERROR IN 10");
}

#[test]
fn test_missing_parts() {
    let error = parse_str("PRINT (1").unwrap_err();
    assert_eq!(error.to_string(), "SYNTAX ERROR IN 10; EXPECTED RIGHT PARENTHESIS");
    let error = parse_str("LET A 1").unwrap_err();
    assert_eq!(error.to_string(), "SYNTAX ERROR IN 10; EXPECTED EQUALS SIGN");
    let error = parse_str("PRINT").unwrap_err();
    assert_eq!(error.to_string(), "SYNTAX ERROR IN 10; EXPECTED EXPRESSION");
}

#[test]
fn test_commands_are_not_statements() {
    assert!(parse_str("LIST").is_err());
    assert!(parse_str("").is_err());
    assert!(parse_str("5 + 5").is_err());
}

#[test]
fn test_display_round_trip() {
    let statement = parse_str(r#"input "AGE"; a"#).unwrap();
    assert_eq!(statement.to_string(), r#"INPUT "AGE"; A"#);
    let statement = parse_str("let x = (1 + 2) * y").unwrap();
    assert_eq!(statement.to_string(), "LET X = (1 + 2) * Y");
}
