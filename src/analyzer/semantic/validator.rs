use crate::{
    analyzer::{
        lexer::{Token, TokenKind},
        semantic::environment::VariableEnvironment,
    },
    error::SemanticDiagnostic,
};

/// Outcome of the semantic pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticResult {
    /// Every problem found, in scan order.
    pub diagnostics: Vec<SemanticDiagnostic>,
}

impl SemanticResult {
    /// Returns `true` when no diagnostic was raised.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The diagnostics as user-facing messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

/// Where an arity-checked segment ended and how much it contained.
struct Segment {
    /// Index of the first token after the segment.
    next:  usize,
    /// Operands and operators seen in the segment.
    terms: usize,
}

/// Validates a token sequence, collecting diagnostics.
///
/// Tokens are scanned left to right, independently of the parser:
///
/// - `identifier =` defines the identifier once the segment after `=` has
///   been checked, so `x = x` still reports `x` as undefined;
/// - an operator at statement level starts a checked segment;
/// - any other identifier must already be defined;
/// - everything else is skipped.
///
/// A segment runs to the next comma. Each operator adds its arity to a
/// counter and, once an operator has been seen, each operand takes one away.
/// Operands beyond what the operators asked for are reported, and so are
/// operators still waiting for operands when the segment ends.
///
/// The count is flat: a nested operator does not stand in for an operand of
/// the one before it, so `raiz de suma 7 y 2` reports `suma` as missing an
/// operand even though it parses. Operands written before the first operator
/// of a segment are not counted either, so the infix form `5 suma 3` reports
/// the operator as missing an operand.
///
/// The scan never stops early; the result is valid iff no diagnostic was
/// raised.
///
/// # Parameters
/// - `tokens`: The full token sequence of a sentence.
/// - `environment`: Definitions visible to the sentence. Assignments found
///   here are added to it.
///
/// # Returns
/// The collected diagnostics.
pub fn validate(tokens: &[Token], environment: &mut VariableEnvironment) -> SemanticResult {
    let mut diagnostics = Vec::new();
    let mut i = 0;

    while let Some(token) = tokens.get(i) {
        let assigns = tokens.get(i + 1)
                            .is_some_and(|next| next.kind == TokenKind::OperatorAssign);

        if token.kind == TokenKind::Identifier && assigns {
            let name = token.normalized.clone();
            let segment = check_segment(tokens, i + 2, environment, &mut diagnostics);
            if segment.terms == 0 {
                diagnostics.push(SemanticDiagnostic::MissingExpression { name: name.clone() });
            }
            environment.define(name, i);
            i = segment.next;
        } else if token.kind == TokenKind::Identifier {
            if !environment.is_defined(&token.normalized) {
                let name = token.normalized.clone();
                diagnostics.push(SemanticDiagnostic::UndefinedVariable { name });
            }
            i += 1;
        } else if token.operator().is_some() {
            i = check_segment(tokens, i, environment, &mut diagnostics).next;
        } else {
            i += 1;
        }
    }

    SemanticResult { diagnostics }
}

/// Checks one expression segment starting at `start`.
///
/// The segment ends after a comma, at the end of input, or right after the
/// first token that breaks it (an extra operand or a stray `=`).
fn check_segment(tokens: &[Token],
                 start: usize,
                 environment: &VariableEnvironment,
                 diagnostics: &mut Vec<SemanticDiagnostic>)
                 -> Segment {
    let reported_before = diagnostics.len();
    let mut needed = 0usize;
    let mut last_operator: Option<&Token> = None;
    let mut terms = 0;
    let mut i = start;

    while let Some(token) = tokens.get(i) {
        i += 1;

        if let Some(op) = token.operator() {
            terms += 1;
            needed += op.arity();
            last_operator = Some(token);
            continue;
        }

        match token.kind {
            kind if kind.is_operand() => {
                terms += 1;
                if token.kind == TokenKind::Identifier && !environment.is_defined(&token.normalized) {
                    let name = token.normalized.clone();
                    diagnostics.push(SemanticDiagnostic::UndefinedVariable { name });
                }
                if last_operator.is_some() {
                    if needed == 0 {
                        let text = token.original.clone();
                        diagnostics.push(SemanticDiagnostic::UnexpectedOperand { text });
                        break;
                    }
                    needed -= 1;
                }
            },
            TokenKind::Comma => break,
            TokenKind::OperatorAssign => {
                diagnostics.push(SemanticDiagnostic::UnexpectedToken { text: token.original.clone() });
                break;
            },
            _ => {},
        }
    }

    if needed > 0
       && diagnostics.len() == reported_before
       && let Some(operator) = last_operator
    {
        diagnostics.push(SemanticDiagnostic::MissingOperands { operator: operator.original.clone() });
    }

    Segment { next: i, terms }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::lexer::tokenize;

    fn check(source: &str, environment: &mut VariableEnvironment) -> SemanticResult {
        validate(&tokenize(source).tokens, environment)
    }

    #[test]
    fn prefix_operations_balance() {
        let mut env = VariableEnvironment::new();
        assert!(check("suma 5 y 3", &mut env).is_valid());
        assert!(check("raiz de 9", &mut env).is_valid());
        assert!(check("x = eleva 2 a 3", &mut env).is_valid());
    }

    #[test]
    fn nested_operators_add_their_full_arity() {
        let mut env = VariableEnvironment::new();
        for (source, operator) in [("raiz de suma 7 y 2", "suma"),
                                   ("suma raiz de 4 y 3", "raiz"),
                                   ("suma suma 1 y 2 y 3", "suma")]
        {
            assert_eq!(check(source, &mut env).diagnostics,
                       vec![SemanticDiagnostic::MissingOperands { operator: operator.to_string() }],
                       "{source}");
        }
    }

    #[test]
    fn infix_operands_before_the_operator_are_not_counted() {
        let mut env = VariableEnvironment::new();
        let result = check("5 suma 3", &mut env);
        assert_eq!(result.diagnostics,
                   vec![SemanticDiagnostic::MissingOperands { operator: "suma".to_string() }]);
    }

    #[test]
    fn missing_operand_names_the_last_operator() {
        let mut env = VariableEnvironment::new();
        let result = check("x = suma 5", &mut env);
        assert_eq!(result.diagnostics,
                   vec![SemanticDiagnostic::MissingOperands { operator: "suma".to_string() }]);
    }

    #[test]
    fn extra_operand_is_reported_once() {
        let mut env = VariableEnvironment::new();
        let result = check("suma 5 y 3 y 4", &mut env);
        assert_eq!(result.diagnostics,
                   vec![SemanticDiagnostic::UnexpectedOperand { text: "4".to_string() }]);
    }

    #[test]
    fn self_reference_is_undefined() {
        let mut env = VariableEnvironment::new();
        let result = check("x = suma x y 1", &mut env);
        assert_eq!(result.diagnostics,
                   vec![SemanticDiagnostic::UndefinedVariable { name: "x".to_string() }]);
        assert!(env.is_defined("x"));
    }

    #[test]
    fn definitions_flow_forward_only() {
        let mut env = VariableEnvironment::new();
        let result = check("suma z y 1, z = 4, resta z y 1", &mut env);
        assert_eq!(result.diagnostics,
                   vec![SemanticDiagnostic::UndefinedVariable { name: "z".to_string() }]);
        assert_eq!(env.definition("z"), Some(5));
    }

    #[test]
    fn empty_assignment_is_missing_an_expression() {
        let mut env = VariableEnvironment::new();
        let result = check("x =, y = 2", &mut env);
        assert_eq!(result.diagnostics,
                   vec![SemanticDiagnostic::MissingExpression { name: "x".to_string() }]);
        assert_eq!(env.names(), vec!["x", "y"]);
    }

    #[test]
    fn assignment_at_end_of_input_is_missing_an_expression() {
        let mut env = VariableEnvironment::new();
        let result = check("x =", &mut env);
        assert_eq!(result.messages(),
                   vec!["Error semántico: Falta una expresión después de la asignación a 'x'."]);
        assert!(env.is_defined("x"));
    }

    #[test]
    fn keyword_named_variable_can_be_read_back() {
        let mut env = VariableEnvironment::new();
        assert!(check("y = 2", &mut env).is_valid());
        assert!(check("z = y, suma 1 con y", &mut env).is_valid());
        assert_eq!(env.names(), vec!["y", "z"]);
    }

    #[test]
    fn stray_assignment_ends_the_segment() {
        let mut env = VariableEnvironment::new();
        let result = check("x = suma 1 = 2", &mut env);
        assert_eq!(result.diagnostics,
                   vec![SemanticDiagnostic::UnexpectedToken { text: "=".to_string() }]);
    }

    #[test]
    fn diagnostics_accumulate() {
        let mut env = VariableEnvironment::new();
        let result = check("a1 = b1, suma 2, c1", &mut env);
        assert_eq!(result.messages(),
                   vec!["Error semántico: La variable 'b1' no ha sido definida.",
                        "Error semántico: El operador 'suma' espera más operandos.",
                        "Error semántico: La variable 'c1' no ha sido definida."]);
        assert!(!result.is_valid());
    }
}
