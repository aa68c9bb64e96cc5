/// The lexer turns a sentence into tokens.
///
/// The lexer scans the raw text against the fixed Spanish vocabulary and
/// produces a sequence of tokens, each with its category, canonical value and
/// original text. It is the first stage of the analysis.
///
/// # Responsibilities
/// - Recognizes operator words, number words, connectors, identifiers, commas
///   and `=`, case-insensitively.
/// - Normalizes numbers to digit strings and operators to symbols.
/// - Reports unrecognized text as data instead of failing.
pub mod lexer;
/// Spoken number normalization.
///
/// Maps Spanish number words from zero to one hundred, including compound
/// `decena y unidad` forms, to digit strings.
pub mod numbers;
/// The parser builds expression trees from tokens.
///
/// The parser consumes the token sequence by recursive descent and produces
/// one tree per comma-separated statement, accepting both prefix and infix
/// operator placement.
///
/// # Responsibilities
/// - Builds [`crate::ast::Expr`] trees, including assignments.
/// - Skips connector words wherever the grammar allows them.
/// - Stops at the first grammar violation with a categorized error.
pub mod parser;
/// The semantic validator checks arity and variable use.
///
/// A separate forward scan over the same tokens the parser sees. It never
/// consults the parse trees, so a sentence can pass one check and fail the
/// other.
///
/// # Responsibilities
/// - Counts operands against operator arity per comma-separated segment.
/// - Reports variables used before an assignment defines them.
/// - Records assignments in the caller's [`semantic::environment::VariableEnvironment`].
pub mod semantic;
