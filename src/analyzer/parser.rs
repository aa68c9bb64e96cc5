/// Program and statement parsing.
///
/// Entry point of the parser: splits the token sequence into comma-separated
/// statements and recognizes assignments.
pub mod core;
/// Operation and term parsing.
///
/// Implements the recursive rules shared by infix (`5 suma 3`) and prefix
/// (`suma 5 y 3`) notation.
pub mod operation;
/// Helpers shared by the parsing rules.
///
/// Connector skipping and operator lookahead.
pub mod utils;
