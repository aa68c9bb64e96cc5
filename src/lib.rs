//! # aritmetica-natural
//!
//! aritmetica-natural turns short Spanish sentences describing arithmetic
//! ("suma 5 y 3", "eleva x a 2", "y = raiz de nueve") into expression trees.
//! Each sentence goes through three independent checks: lexical, syntactic
//! and semantic. Trees are never evaluated.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::analyzer::{
    lexer::{LexicalResult, Token, tokenize},
    parser::core::{SyntacticResult, parse_program},
    semantic::{
        environment::VariableEnvironment,
        validator::{SemanticResult, validate},
    },
};

/// Orchestrates the three analysis stages.
///
/// This module holds the lexer, the number-word normalizer, the parser and the
/// semantic validator. Data flows strictly forward: text to tokens, then
/// tokens to trees and, independently, tokens to diagnostics.
///
/// # Responsibilities
/// - Tokenizes sentences and normalizes spoken numbers.
/// - Parses token sequences into expression trees.
/// - Validates arity and variable definitions.
pub mod analyzer;
/// Defines the structure of parsed sentences.
///
/// This module declares the [`ast::Operator`] enumeration, with each
/// operator's canonical symbol and arity, and the [`ast::Expr`] tree built by
/// the parser.
///
/// # Responsibilities
/// - Defines the closed operator set.
/// - Defines leaves, unary and binary operations, and assignments.
/// - Serializes trees as parenthesized prefix expressions.
pub mod ast;
/// Provides the error types of the syntactic and semantic stages.
///
/// The lexical stage has no errors: unrecognized text is part of its result.
/// The parser raises at most one [`error::SyntaxError`]; the validator
/// collects any number of [`error::SemanticDiagnostic`]s.
pub mod error;

/// Tokenizes a sentence.
///
/// Never fails; text that matches no category is listed in
/// [`LexicalResult::unrecognized`].
///
/// # Examples
/// ```
/// use aritmetica_natural::{analyze_lexical, analyzer::lexer::TokenKind};
///
/// let result = analyze_lexical("suma cinco y 3");
/// let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::OperatorAdd,
///                 TokenKind::Number,
///                 TokenKind::SequenceConnector,
///                 TokenKind::Number]);
/// assert_eq!(result.tokens[1].normalized, "5");
/// assert!(result.unrecognized.is_empty());
/// ```
#[must_use]
pub fn analyze_lexical(text: &str) -> LexicalResult {
    tokenize(text)
}

/// Parses a token sequence into one expression tree per statement.
///
/// # Errors
/// Returns the first [`error::SyntaxError`] found; no partial trees are
/// returned.
///
/// # Examples
/// ```
/// use aritmetica_natural::{analyze_lexical, analyze_syntax};
///
/// let lexical = analyze_lexical("x = raiz de 9, 5 suma 3 resta 2");
/// let trees = analyze_syntax(&lexical.tokens).unwrap();
/// assert_eq!(trees[0].to_string(), "x = (√ 9)");
/// assert_eq!(trees[1].to_string(), "(+ 5 (- 3 2))");
///
/// let lexical = analyze_lexical("suma 5");
/// assert!(analyze_syntax(&lexical.tokens).is_err());
/// ```
pub fn analyze_syntax(tokens: &[Token]) -> SyntacticResult {
    parse_program(&mut tokens.iter().enumerate().peekable())
}

/// Checks operator arity and variable use over a token sequence.
///
/// Assignments found in `tokens` are added to `environment`, so passing the
/// same environment to several calls makes earlier definitions visible to
/// later sentences.
///
/// # Examples
/// ```
/// use aritmetica_natural::{
///     analyze_lexical, analyze_semantics, analyzer::semantic::environment::VariableEnvironment,
/// };
///
/// let mut environment = VariableEnvironment::new();
/// let first = analyze_lexical("total = x");
/// let result = analyze_semantics(&first.tokens, &mut environment);
/// assert!(!result.is_valid());
/// assert!(environment.is_defined("total"));
///
/// let second = analyze_lexical("suma total y 1");
/// assert!(analyze_semantics(&second.tokens, &mut environment).is_valid());
/// ```
pub fn analyze_semantics(tokens: &[Token], environment: &mut VariableEnvironment) -> SemanticResult {
    validate(tokens, environment)
}

/// Runs the lexical and syntactic stages on a sentence.
#[must_use]
pub fn analyze(text: &str) -> (LexicalResult, SyntacticResult) {
    let lexical = analyze_lexical(text);
    let syntactic = analyze_syntax(&lexical.tokens);
    (lexical, syntactic)
}

/// The result of all three stages for one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Tokens, identifiers and unrecognized text.
    pub lexical:   LexicalResult,
    /// Statement trees or the syntax error.
    pub syntactic: SyntacticResult,
    /// Semantic diagnostics.
    pub semantic:  SemanticResult,
}

impl Analysis {
    /// Returns `true` when the sentence parsed and raised no semantic
    /// diagnostic.
    ///
    /// Unrecognized text does not make an analysis invalid by itself; it is
    /// reported in [`Analysis::lexical`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.syntactic.is_ok() && self.semantic.is_valid()
    }
}

/// Runs all three stages on a sentence.
///
/// The parser and the validator both work from the lexer's tokens and do not
/// depend on each other.
///
/// # Examples
/// ```
/// use aritmetica_natural::{analyze_full, analyzer::semantic::environment::VariableEnvironment};
///
/// let mut environment = VariableEnvironment::new();
/// let analysis = analyze_full("total = multiplica 4 con 2, divide total entre 2", &mut environment);
/// assert!(analysis.is_valid());
/// assert_eq!(environment.names(), vec!["total"]);
/// ```
pub fn analyze_full(text: &str, environment: &mut VariableEnvironment) -> Analysis {
    let (lexical, syntactic) = analyze(text);
    let semantic = analyze_semantics(&lexical.tokens, environment);
    Analysis { lexical,
               syntactic,
               semantic }
}
