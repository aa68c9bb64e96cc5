use std::iter::Peekable;

use crate::{
    analyzer::{
        lexer::{Token, TokenKind},
        parser::operation::parse_operation,
    },
    ast::Expr,
    error::SyntaxError,
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Outcome of the syntactic pass: one tree per statement, or the first
/// syntax error.
pub type SyntacticResult = ParseResult<Vec<Expr>>;

/// Parses a whole sentence into one tree per statement.
///
/// Statements are separated by commas and the sentence must be consumed
/// completely. A trailing comma is accepted; an empty sentence yields no
/// statements.
///
/// Grammar: `program := statement ("," statement)*`
///
/// # Parameters
/// - `tokens`: Token iterator yielding `(index, token)` pairs.
///
/// # Returns
/// The statement trees in input order.
///
/// # Errors
/// - `ExpectedSeparator` if a statement is followed by anything other than a
///   comma or the end of input.
/// - Propagates the first error of any statement; nothing after it is parsed.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = (usize, &'a Token)> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);

        match tokens.next() {
            None => break,
            Some((_, token)) if token.kind == TokenKind::Comma => {},
            Some((position, token)) => {
                return Err(SyntaxError::ExpectedSeparator { position,
                                                            found: token.original.clone() });
            },
        }
    }

    Ok(statements)
}

/// Parses a single statement.
///
/// A statement is either an assignment or a bare operation. An identifier
/// directly followed by `=` always starts an assignment; this is the only
/// place the parser looks more than one token ahead.
///
/// Grammar: `statement := assignment | operation`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// The statement tree.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)> + Clone
{
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    parse_operation(tokens)
}

/// Parses an assignment of the form `<identifier> = <operation>`.
///
/// If the next two tokens are not an identifier and `=`, nothing is consumed
/// and `Ok(None)` is returned.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a possible identifier.
///
/// # Returns
/// - `Ok(Some(Expr::Assignment))` if an assignment was parsed,
/// - `Ok(None)` if no assignment starts here.
///
/// # Errors
/// Propagates errors from the assigned operation.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Expr>>
    where I: Iterator<Item = (usize, &'a Token)> + Clone
{
    let mut lookahead = tokens.clone();
    let Some((_, target)) = lookahead.next_if(|(_, t)| t.kind == TokenKind::Identifier) else {
        return Ok(None);
    };
    if lookahead.next_if(|(_, t)| t.kind == TokenKind::OperatorAssign).is_none() {
        return Ok(None);
    }

    *tokens = lookahead;
    let value = parse_operation(tokens)?;

    Ok(Some(Expr::Assignment { target: target.original.clone(),
                               value:  Box::new(value), }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::lexer::tokenize;

    fn parse(source: &str) -> ParseResult<Vec<String>> {
        let tokens = tokenize(source).tokens;
        parse_program(&mut tokens.iter().enumerate().peekable())
            .map(|trees| trees.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn assignment_needs_a_value() {
        assert_eq!(parse("x ="), Err(SyntaxError::UnexpectedEndOfInput));
        assert_eq!(parse("x =, y = 1"),
                   Err(SyntaxError::ExpectedTerm { position: 2,
                                                   found:    ",".to_string(), }));
    }

    #[test]
    fn keyword_named_variables_are_assigned_and_read() {
        assert_eq!(parse("y = 2, z = y, raiz de y"),
                   Ok(vec!["y = 2".to_string(), "z = y".to_string(), "(√ y)".to_string()]));
    }

    #[test]
    fn trailing_comma_ends_the_program() {
        assert_eq!(parse("suma 1 y 2,"), Ok(vec!["(+ 1 2)".to_string()]));
    }
}
