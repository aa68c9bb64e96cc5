use std::ops::Range;

use logos::Logos;

use crate::{
    analyzer::numbers::{COMPOUND_CONNECTOR, normalize_number, number_value},
    ast::Operator,
};

/// The lexical category of a token.
///
/// Variants double as the `logos` patterns that recognize them. Keyword
/// patterns outrank the generic identifier pattern, and the longest match
/// wins, so `resta` is an operator while `restante` is an identifier. The
/// one-letter connectors `y` and `a` carry an explicit priority to beat it.
/// Patterns are written in lowercase; [`tokenize`] feeds the lexer a
/// lowercased copy of the input.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// Digits or a Spanish number word, such as `42`, `siete` or `dieciséis`.
    #[regex(r"[0-9]+")]
    #[regex(r"cero|uno|dos|tres|cuatro|cinco|seis|siete|ocho|nueve|diez")]
    #[regex(r"once|doce|trece|catorce|quince|dieciséis|dieciseis|diecisiete|dieciocho|diecinueve")]
    #[regex(r"veinte|veintiuno|veintidós|veintidos|veintitrés|veintitres|veinticuatro|veinticinco")]
    #[regex(r"veintiséis|veintiseis|veintisiete|veintiocho|veintinueve")]
    #[regex(r"treinta|cuarenta|cincuenta|sesenta|setenta|ochenta|noventa|cien")]
    Number,
    /// Variable names such as `x` or `total_1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `suma`, `añade`, `mas`
    #[regex(r"suma|anade|añade|mas|más")]
    OperatorAdd,
    /// `resta`, `quita`, `menos`
    #[regex(r"resta|quita|menos")]
    OperatorSubtract,
    /// `multiplica`, `por`
    #[regex(r"multiplica|por")]
    OperatorMultiply,
    /// `divide`
    #[token("divide")]
    OperatorDivide,
    /// `eleva`, `potencia`
    #[regex(r"eleva|potencia")]
    OperatorPower,
    /// `raiz`
    #[regex(r"raiz|raíz")]
    OperatorRoot,
    /// `y`, `luego`
    #[regex(r"y|luego", priority = 5)]
    SequenceConnector,
    /// `a`, `con`, `de`, `entre`
    #[regex(r"a|con|de|entre", priority = 5)]
    PrepositionConnector,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    OperatorAssign,
}

impl TokenKind {
    /// Maps an operator category to its [`Operator`].
    ///
    /// Returns `None` for every non-operator category, including
    /// [`TokenKind::OperatorAssign`], which is structural rather than
    /// arithmetic.
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::OperatorAdd => Some(Operator::Add),
            Self::OperatorSubtract => Some(Operator::Subtract),
            Self::OperatorMultiply => Some(Operator::Multiply),
            Self::OperatorDivide => Some(Operator::Divide),
            Self::OperatorPower => Some(Operator::Power),
            Self::OperatorRoot => Some(Operator::Root),
            _ => None,
        }
    }

    /// Returns `true` for the filler words that carry no meaning.
    #[must_use]
    pub const fn is_connector(self) -> bool {
        matches!(self, Self::SequenceConnector | Self::PrepositionConnector)
    }

    /// Returns `true` for numbers and identifiers.
    #[must_use]
    pub const fn is_operand(self) -> bool {
        matches!(self, Self::Number | Self::Identifier)
    }
}

/// A recognized piece of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lexical category.
    pub kind:       TokenKind,
    /// Canonical value: the operator symbol, the digit string of a number,
    /// the identifier as written, or the lowercase connector keyword.
    pub normalized: String,
    /// The text exactly as it appeared in the input.
    pub original:   String,
    /// Byte range of [`Token::original`] in the input.
    pub span:       Range<usize>,
}

impl Token {
    fn new(kind: TokenKind, source: &str, span: Range<usize>) -> Self {
        let original = source[span.clone()].to_string();
        let normalized = match kind {
            TokenKind::Number => normalize_number(&original),
            TokenKind::Identifier => original.clone(),
            TokenKind::SequenceConnector => "y".to_string(),
            TokenKind::PrepositionConnector => "con".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::OperatorAssign => "=".to_string(),
            operator => operator.operator()
                                .map_or_else(|| original.clone(), |op| op.symbol().to_string()),
        };
        Self { kind,
               normalized,
               original,
               span }
    }

    /// The arithmetic operator this token stands for, if any.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.kind.operator()
    }
}

/// Input text that no lexical category matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unrecognized {
    /// The text, trimmed of surrounding whitespace.
    pub text: String,
    /// Byte range of [`Unrecognized::text`] in the input.
    pub span: Range<usize>,
}

/// Everything the lexer learned about a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalResult {
    /// Recognized tokens in input order.
    pub tokens:       Vec<Token>,
    /// Original text of every identifier token, in order, duplicates kept.
    pub identifiers:  Vec<String>,
    /// The analysed input.
    pub source:       String,
    /// Non-whitespace stretches of input that matched no category.
    pub unrecognized: Vec<Unrecognized>,
}

impl LexicalResult {
    /// Returns `true` if every non-whitespace character was recognized.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unrecognized.is_empty()
    }

    /// The unrecognized stretches as plain strings.
    #[must_use]
    pub fn unrecognized_texts(&self) -> Vec<&str> {
        self.unrecognized.iter().map(|u| u.text.as_str()).collect()
    }

    /// Rebuilds the input from recognized and unrecognized spans, in input
    /// order, separated by single spaces.
    ///
    /// The result equals the input up to whitespace, and lexing it again
    /// yields the same tokens.
    #[must_use]
    pub fn reconstruct(&self) -> String {
        let mut pieces: Vec<(usize, &str)> =
            self.tokens
                .iter()
                .map(|t| (t.span.start, t.original.as_str()))
                .chain(self.unrecognized.iter().map(|u| (u.span.start, u.text.as_str())))
                .collect();
        pieces.sort_by_key(|(start, _)| *start);
        pieces.into_iter().map(|(_, text)| text).collect::<Vec<_>>().join(" ")
    }
}

/// Tokenizes a sentence.
///
/// Scanning never fails. Text between two matches (or after the last one)
/// that is not pure whitespace is recorded in
/// [`LexicalResult::unrecognized`] and scanning continues after it.
///
/// Two passes run after scanning:
/// - a ten word, the connector `y` and a unit word (`treinta y dos`) are
///   merged into one number token;
/// - a keyword written where only a variable can stand is read as an
///   identifier, so `y = 5, z = y` assigns to and then reads a variable
///   named `y`.
///
/// # Parameters
/// - `source`: The raw sentence.
///
/// # Returns
/// The tokens, identifiers and unrecognized text of the sentence.
#[must_use]
pub fn tokenize(source: &str) -> LexicalResult {
    let shadow = lowercase_in_place(source);
    let mut lexer = TokenKind::lexer(&shadow);

    let mut tokens = Vec::new();
    let mut unrecognized = Vec::new();
    let mut last_end = 0;

    while let Some(result) = lexer.next() {
        let Ok(kind) = result else {
            continue;
        };
        let span = lexer.span();
        record_unrecognized(source, last_end..span.start, &mut unrecognized);
        last_end = span.end;
        tokens.push(Token::new(kind, source, span));
    }
    record_unrecognized(source, last_end..source.len(), &mut unrecognized);

    let mut tokens = merge_compound_numbers(tokens, source);
    promote_keyword_operands(&mut tokens);

    let identifiers = tokens.iter()
                            .filter(|t| t.kind == TokenKind::Identifier)
                            .map(|t| t.original.clone())
                            .collect();

    LexicalResult { tokens,
                    identifiers,
                    source: source.to_string(),
                    unrecognized }
}

/// Lowercases `source` without moving any byte offset.
///
/// Characters whose lowercase form has a different UTF-8 length are kept as
/// they are.
fn lowercase_in_place(source: &str) -> String {
    source.chars()
          .map(|c| {
              let mut lower = c.to_lowercase();
              match (lower.next(), lower.next()) {
                  (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
                  _ => c,
              }
          })
          .collect()
}

fn record_unrecognized(source: &str, gap: Range<usize>, out: &mut Vec<Unrecognized>) {
    let text = &source[gap.clone()];
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }
    let start = gap.start + (text.len() - text.trim_start().len());
    out.push(Unrecognized { text: trimmed.to_string(),
                            span: start..start + trimmed.len() });
}

/// Merges `<decena> y <unidad>` triples into a single number token.
fn merge_compound_numbers(tokens: Vec<Token>, source: &str) -> Vec<Token> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        if token.kind == TokenKind::Number {
            let mut lookahead = iter.clone();
            if let (Some(connector), Some(units)) = (lookahead.next(), lookahead.next())
               && connector.kind == TokenKind::SequenceConnector
               && connector.original.to_lowercase() == "y"
               && units.kind == TokenKind::Number
            {
                let joined = format!("{}{COMPOUND_CONNECTOR}{}",
                                     token.original.to_lowercase(),
                                     units.original.to_lowercase());
                if let Some(value) = number_value(&joined) {
                    let span = token.span.start..units.span.end;
                    merged.push(Token { kind:       TokenKind::Number,
                                        normalized: value.to_string(),
                                        original:   source[span.clone()].to_string(),
                                        span });
                    iter = lookahead;
                    continue;
                }
            }
        }
        merged.push(token);
    }

    merged
}

/// Reclassifies keyword words that can only be variable names.
///
/// A connector or operator followed by `=`, `,` or the end of input cannot
/// play its keyword role, and neither can a connector right after `=`. Such
/// words are read as identifiers when they are spelled like one. Elsewhere a
/// keyword keeps its category, so `suma y con 1` still reads `y` as a
/// connector.
fn promote_keyword_operands(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        let kind = tokens[i].kind;
        let keyword = kind.is_connector() || kind.operator().is_some();
        if !keyword || !is_identifier_text(&tokens[i].original) {
            continue;
        }

        let closes = tokens.get(i + 1)
                           .is_none_or(|next| matches!(next.kind, TokenKind::OperatorAssign | TokenKind::Comma));
        let after_assign = i > 0 && tokens[i - 1].kind == TokenKind::OperatorAssign;

        if closes || (after_assign && kind.is_connector()) {
            let target = &mut tokens[i];
            target.kind = TokenKind::Identifier;
            target.normalized = target.original.clone();
        }
    }
}

fn is_identifier_text(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next()
         .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_beat_identifiers() {
        assert_eq!(kinds("resta restante"), vec![TokenKind::OperatorSubtract, TokenKind::Identifier]);
        assert_eq!(kinds("a ab de dedo"),
                   vec![TokenKind::PrepositionConnector,
                        TokenKind::Identifier,
                        TokenKind::PrepositionConnector,
                        TokenKind::Identifier]);
    }

    #[test]
    fn operator_synonyms_share_a_symbol() {
        let result = tokenize("suma Añade MAS más");
        assert!(result.tokens.iter().all(|t| t.kind == TokenKind::OperatorAdd));
        assert!(result.tokens.iter().all(|t| t.normalized == "+"));
        assert_eq!(result.tokens[1].original, "Añade");
        assert_eq!(result.tokens[2].original, "MAS");
    }

    #[test]
    fn number_words_are_normalized() {
        let result = tokenize("Siete dieciséis 42 cien");
        let values: Vec<&str> = result.tokens.iter().map(|t| t.normalized.as_str()).collect();
        assert_eq!(values, vec!["7", "16", "42", "100"]);
        assert_eq!(result.tokens[0].original, "Siete");
    }

    #[test]
    fn compound_numbers_merge() {
        let result = tokenize("suma Treinta  y dos con uno");
        assert_eq!(result.tokens.len(), 4);
        assert_eq!(result.tokens[1].normalized, "32");
        assert_eq!(result.tokens[1].original, "Treinta  y dos");
        assert_eq!(result.tokens[3].normalized, "1");
    }

    #[test]
    fn digits_and_small_words_do_not_merge() {
        assert_eq!(kinds("5 y 3").len(), 3);
        assert_eq!(kinds("cinco y tres").len(), 3);
        assert_eq!(kinds("veinte luego tres").len(), 3);
        assert_eq!(kinds("veinte y diez").len(), 3);
    }

    #[test]
    fn unrecognized_text_is_reported_and_skipped() {
        let result = tokenize("suma 5 ¿? y 3 #");
        assert_eq!(result.unrecognized_texts(), vec!["¿?", "#"]);
        assert_eq!(result.tokens.len(), 4);
        assert!(!result.is_clean());
    }

    #[test]
    fn identifiers_keep_duplicates() {
        let result = tokenize("x = suma x y Total");
        assert_eq!(result.identifiers, vec!["x", "x", "Total"]);
    }

    #[test]
    fn keyword_before_assignment_becomes_identifier() {
        let result = tokenize("y = suma 5 y 3");
        assert_eq!(result.tokens[0].kind, TokenKind::Identifier);
        assert_eq!(result.tokens[0].normalized, "y");
        assert_eq!(result.tokens[4].kind, TokenKind::SequenceConnector);
        assert_eq!(result.identifiers, vec!["y"]);
    }

    #[test]
    fn one_letter_connectors_beat_identifiers() {
        assert_eq!(kinds("ya y a ab 1"),
                   vec![TokenKind::Identifier,
                        TokenKind::SequenceConnector,
                        TokenKind::PrepositionConnector,
                        TokenKind::Identifier,
                        TokenKind::Number]);
        assert_eq!(kinds("Y luego A 1"),
                   vec![TokenKind::SequenceConnector,
                        TokenKind::SequenceConnector,
                        TokenKind::PrepositionConnector,
                        TokenKind::Number]);
    }

    #[test]
    fn keyword_in_operand_only_position_becomes_identifier() {
        let result = tokenize("z = y, suma 1 con y, x = de");
        let promoted: Vec<usize> = result.tokens
                                         .iter()
                                         .enumerate()
                                         .filter(|(_, t)| t.kind == TokenKind::Identifier)
                                         .map(|(i, _)| i)
                                         .collect();
        assert_eq!(promoted, vec![0, 2, 7, 9, 11]);
        assert_eq!(result.identifiers, vec!["z", "y", "y", "x", "de"]);
    }

    #[test]
    fn keyword_followed_by_an_operand_stays_a_keyword() {
        assert_eq!(kinds("suma y con 1"),
                   vec![TokenKind::OperatorAdd,
                        TokenKind::SequenceConnector,
                        TokenKind::PrepositionConnector,
                        TokenKind::Number]);
        assert_eq!(kinds("x = suma 1 y 2")[2], TokenKind::OperatorAdd);
        assert_eq!(kinds("raíz"), vec![TokenKind::OperatorRoot]);
    }

    #[test]
    fn reconstruct_preserves_order() {
        let result = tokenize("  suma   5 @ y\ttres ");
        assert_eq!(result.reconstruct(), "suma 5 @ y tres");
    }
}
