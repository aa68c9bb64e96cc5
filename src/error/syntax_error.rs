use thiserror::Error;

/// Fixed classification attached to every syntax error.
///
/// The parser reports a single category today; the type exists so callers
/// can match on it instead of comparing display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The token sequence does not follow the sentence grammar.
    Syntax,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax => f.write_str("Error de sintaxis"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents the first grammar violation found in a sentence.
///
/// Parsing stops at the first error, so an analysis carries at most one of
/// these. Positions are token indices into the lexical result.
pub enum SyntaxError {
    /// A number, identifier or operator was expected where a term starts.
    #[error("Se esperaba un número, identificador u operador en la posición {position} (se encontró '{found}')")]
    ExpectedTerm {
        /// Index of the token where the term was expected.
        position: usize,
        /// Original text of the offending token.
        found:    String,
    },
    /// The input ended where a term was expected.
    #[error("Se esperaba un número, identificador u operador al final de la entrada")]
    UnexpectedEndOfInput,
    /// A statement was followed by something other than a comma or the end
    /// of the input.
    #[error("Se esperaba una coma o fin de entrada en la posición {position} (se encontró '{found}')")]
    ExpectedSeparator {
        /// Index of the token following the statement.
        position: usize,
        /// Original text of that token.
        found:    String,
    },
}

impl SyntaxError {
    /// Category of the error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ExpectedTerm { .. }
            | Self::UnexpectedEndOfInput
            | Self::ExpectedSeparator { .. } => ErrorCategory::Syntax,
        }
    }

    /// Canned remediation hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::ExpectedTerm { .. } | Self::UnexpectedEndOfInput => {
                "Verifica que la expresión esté correctamente formada"
            },
            Self::ExpectedSeparator { .. } => "Asegúrate de separar las instrucciones con comas",
        }
    }

    /// Token index the error points at, or `None` when the input ended
    /// early.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::ExpectedTerm { position, .. } | Self::ExpectedSeparator { position, .. } => {
                Some(*position)
            },
            Self::UnexpectedEndOfInput => None,
        }
    }
}
