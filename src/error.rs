/// Syntax errors.
///
/// Defines the single fatal error the parser can raise, together with its
/// fixed category and the remediation hint shown to the user.
pub mod syntax_error;
/// Semantic diagnostics.
///
/// Contains the non-fatal findings of the semantic validator: undefined
/// variables, operand count problems and misplaced tokens.
pub mod semantic_error;

pub use semantic_error::SemanticDiagnostic;
pub use syntax_error::{ErrorCategory, SyntaxError};
