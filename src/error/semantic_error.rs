use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// A single problem found by the semantic validator.
///
/// Diagnostics never stop the scan; the validator collects all of them.
pub enum SemanticDiagnostic {
    /// A variable was used before any assignment defined it.
    #[error("Error semántico: La variable '{name}' no ha sido definida.")]
    UndefinedVariable {
        /// Name of the variable.
        name: String,
    },
    /// An operand appeared after every pending operator was satisfied.
    #[error("Error semántico: Operando inesperado '{text}'.")]
    UnexpectedOperand {
        /// Original text of the operand.
        text: String,
    },
    /// A segment ended while operators still waited for operands.
    #[error("Error semántico: El operador '{operator}' espera más operandos.")]
    MissingOperands {
        /// Original text of the most recently seen operator.
        operator: String,
    },
    /// An assignment had nothing after `=`.
    #[error("Error semántico: Falta una expresión después de la asignación a '{name}'.")]
    MissingExpression {
        /// Name of the assigned variable.
        name: String,
    },
    /// A token that cannot appear inside an expression, such as a second `=`.
    #[error("Error semántico: Token inesperado '{text}'.")]
    UnexpectedToken {
        /// Original text of the token.
        text: String,
    },
}
