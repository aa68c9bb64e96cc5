use std::fmt;

/// An arithmetic operator recognized in a sentence.
///
/// The set is closed: every operator word the lexer accepts maps to exactly
/// one of these variants, and the variant alone decides the canonical symbol
/// and the number of operands. Nothing downstream re-derives either from
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `suma`, `anade`, `mas`, `añade`, `más`
    Add,
    /// `resta`, `quita`, `menos`
    Subtract,
    /// `multiplica`, `por`
    Multiply,
    /// `divide`
    Divide,
    /// `eleva`, `potencia`
    Power,
    /// `raiz`, `raíz`
    Root,
}

impl Operator {
    /// Canonical symbol used in serialized trees and as the token's
    /// normalized value.
    ///
    /// # Example
    /// ```
    /// use aritmetica_natural::ast::Operator;
    ///
    /// assert_eq!(Operator::Power.symbol(), "^");
    /// assert_eq!(Operator::Root.symbol(), "√");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Root => "√",
        }
    }

    /// Number of operands the operator takes in prefix form.
    ///
    /// Root extraction is the only unary operator.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Root => 1,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An expression tree built from one statement of a sentence.
///
/// Trees are never evaluated; they are the structured form handed to the
/// embedding application. `Display` serializes a tree as a fully
/// parenthesized prefix expression, e.g. `(+ 5 (- 3 2))`, or as
/// `target = value` for assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// Digit string after number-word normalization (`"23"`).
        value: String,
        /// Text as written in the sentence (`"veinte y tres"`).
        text:  String,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name exactly as written.
        name: String,
    },
    /// An operator applied to a single operand (root extraction).
    UnaryOp {
        /// The operator; always of arity 1.
        op:      Operator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An operator applied to two operands.
    ///
    /// Prefix forms only build this for arity-2 operators. Infix forms build
    /// it for any operator, so `9 raiz 3` yields a binary root.
    BinaryOp {
        /// The operator.
        op:    Operator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `identifier = value`.
    ///
    /// The target is a bare identifier by construction; the parser only
    /// builds this variant from an identifier token followed by `=`.
    Assignment {
        /// Name of the assigned variable.
        target: String,
        /// The assigned expression. Never itself an assignment.
        value:  Box<Self>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => f.write_str(value),
            Self::Identifier { name } => f.write_str(name),
            Self::UnaryOp { op, operand } => write!(f, "({op} {operand})"),
            Self::BinaryOp { op, left, right } => write!(f, "({op} {left} {right})"),
            Self::Assignment { target, value } => write!(f, "{target} = {value}"),
        }
    }
}
