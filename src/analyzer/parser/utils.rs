use std::iter::Peekable;

use crate::{analyzer::lexer::Token, ast::Operator};

/// Consumes any run of connector words.
///
/// Connectors (`y`, `luego`, `a`, `con`, `de`, `entre`) only make a sentence
/// read naturally; the grammar allows any number of them between the parts
/// of an operation and discards them.
///
/// # Parameters
/// - `tokens`: Token iterator yielding `(index, token)` pairs.
pub(in crate::analyzer::parser) fn skip_connectors<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = (usize, &'a Token)>
{
    while tokens.next_if(|(_, token)| token.kind.is_connector()).is_some() {}
}

/// Returns the operator of the next token without consuming it.
pub(in crate::analyzer::parser) fn peek_operator<'a, I>(tokens: &mut Peekable<I>) -> Option<Operator>
    where I: Iterator<Item = (usize, &'a Token)>
{
    tokens.peek().and_then(|(_, token)| token.operator())
}
