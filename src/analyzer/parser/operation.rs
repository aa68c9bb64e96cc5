use std::iter::Peekable;

use crate::{
    analyzer::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            utils::{peek_operator, skip_connectors},
        },
    },
    ast::Expr,
    error::SyntaxError,
};

/// Parses an operation: a term optionally followed by infix operators.
///
/// The right-hand side of an infix operator is itself a full operation, so
/// chains associate to the right: `5 suma 3 resta 2` parses as
/// `(+ 5 (- 3 2))`. Connectors may appear on either side of the operator.
///
/// Any operator, root included, builds a binary node in infix position:
/// `9 raiz 3` is `(√ 9 3)`.
///
/// Grammar: `operation := term (connector* operator connector* operation)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a term.
///
/// # Returns
/// The operation tree.
///
/// # Errors
/// Propagates term errors.
pub fn parse_operation<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)> + Clone
{
    let mut left = parse_term(tokens)?;

    loop {
        skip_connectors(tokens);
        let Some(op) = peek_operator(tokens) else {
            break;
        };
        tokens.next();
        skip_connectors(tokens);

        let right = parse_operation(tokens)?;
        left = Expr::BinaryOp { op,
                                left: Box::new(left),
                                right: Box::new(right) };
    }

    Ok(left)
}

/// Parses a term: a number, an identifier, or an operator in prefix form.
///
/// A prefix operator is followed by as many operations as its arity
/// requires, with optional connectors before each one:
///
/// ```text
///     suma 5 y 3        -> (+ 5 3)
///     raiz de 9         -> (√ 9)
///     eleva x a 2       -> (^ x 2)
/// ```
///
/// Grammar:
/// ```text
///     term := number | identifier
///           | operator connector* operation                          (arity 1)
///           | operator connector* operation connector* operation     (arity 2)
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned where a term must start.
///
/// # Returns
/// A leaf or an operator node.
///
/// # Errors
/// - `ExpectedTerm` if the next token cannot start a term.
/// - `UnexpectedEndOfInput` if the input ends where a term is required.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)> + Clone
{
    let (position, token) = tokens.next().ok_or(SyntaxError::UnexpectedEndOfInput)?;

    match token.kind {
        TokenKind::Number => Ok(Expr::Number { value: token.normalized.clone(),
                                               text:  token.original.clone(), }),
        TokenKind::Identifier => Ok(Expr::Identifier { name: token.normalized.clone() }),
        kind => {
            let Some(op) = kind.operator() else {
                return Err(SyntaxError::ExpectedTerm { position,
                                                       found: token.original.clone() });
            };

            skip_connectors(tokens);
            let first = Box::new(parse_operation(tokens)?);
            if op.arity() == 1 {
                return Ok(Expr::UnaryOp { op,
                                          operand: first });
            }

            skip_connectors(tokens);
            let second = Box::new(parse_operation(tokens)?);
            Ok(Expr::BinaryOp { op,
                                left: first,
                                right: second })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::lexer::tokenize;

    fn parse(source: &str) -> ParseResult<Expr> {
        let tokens = tokenize(source).tokens;
        parse_operation(&mut tokens.iter().enumerate().peekable())
    }

    #[test]
    fn connectors_are_skipped_around_operands() {
        assert_eq!(parse("eleva x a 2").map(|e| e.to_string()), Ok("(^ x 2)".to_string()));
        assert_eq!(parse("divide 8 luego entre 2").map(|e| e.to_string()), Ok("(/ 8 2)".to_string()));
    }

    #[test]
    fn prefix_root_is_unary() {
        let tree = parse("raiz de veinte y cinco").unwrap();
        assert_eq!(tree.to_string(), "(√ 25)");
        assert!(matches!(tree, Expr::UnaryOp { .. }));
    }

    #[test]
    fn infix_root_is_binary() {
        let tree = parse("9 raiz 3").unwrap();
        assert_eq!(tree.to_string(), "(√ 9 3)");
    }

    #[test]
    fn nested_prefix_operand() {
        assert_eq!(parse("raiz de suma 7 y 2").map(|e| e.to_string()), Ok("(√ (+ 7 2))".to_string()));
    }

    #[test]
    fn connector_cannot_start_a_term() {
        assert_eq!(parse("de 5"),
                   Err(SyntaxError::ExpectedTerm { position: 0,
                                                   found:    "de".to_string(), }));
        assert_eq!(parse("resta 5"), Err(SyntaxError::UnexpectedEndOfInput));
    }
}
