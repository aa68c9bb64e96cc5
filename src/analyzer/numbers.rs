/// Connector separating tens and units in compound number words.
pub const COMPOUND_CONNECTOR: &str = " y ";

/// Spanish number words with a single-word spelling, including accented and
/// unaccented variants.
const NUMBER_WORDS: &[(&str, u32)] = &[("cero", 0),
                                       ("uno", 1),
                                       ("dos", 2),
                                       ("tres", 3),
                                       ("cuatro", 4),
                                       ("cinco", 5),
                                       ("seis", 6),
                                       ("siete", 7),
                                       ("ocho", 8),
                                       ("nueve", 9),
                                       ("diez", 10),
                                       ("once", 11),
                                       ("doce", 12),
                                       ("trece", 13),
                                       ("catorce", 14),
                                       ("quince", 15),
                                       ("dieciséis", 16),
                                       ("dieciseis", 16),
                                       ("diecisiete", 17),
                                       ("dieciocho", 18),
                                       ("diecinueve", 19),
                                       ("veinte", 20),
                                       ("veintiuno", 21),
                                       ("veintidós", 22),
                                       ("veintidos", 22),
                                       ("veintitrés", 23),
                                       ("veintitres", 23),
                                       ("veinticuatro", 24),
                                       ("veinticinco", 25),
                                       ("veintiséis", 26),
                                       ("veintiseis", 26),
                                       ("veintisiete", 27),
                                       ("veintiocho", 28),
                                       ("veintinueve", 29),
                                       ("treinta", 30),
                                       ("cuarenta", 40),
                                       ("cincuenta", 50),
                                       ("sesenta", 60),
                                       ("setenta", 70),
                                       ("ochenta", 80),
                                       ("noventa", 90),
                                       ("cien", 100)];

/// Looks up a single number word.
///
/// # Parameters
/// - `word`: Lowercased, trimmed word.
///
/// # Returns
/// The value of the word, or `None` if it is not a number word.
#[must_use]
pub fn word_value(word: &str) -> Option<u32> {
    NUMBER_WORDS.iter()
                .find(|(candidate, _)| *candidate == word)
                .map(|(_, value)| *value)
}

/// Returns `true` if `word` names an exact ten that can open a compound
/// number (`veinte` .. `noventa`).
#[must_use]
pub fn is_tens_word(word: &str) -> bool {
    word_value(word).is_some_and(|value| (20..=90).contains(&value) && value % 10 == 0)
}

/// Returns `true` if `word` names a unit that can close a compound number
/// (`uno` .. `nueve`).
#[must_use]
pub fn is_units_word(word: &str) -> bool {
    word_value(word).is_some_and(|value| (1..=9).contains(&value))
}

/// Resolves a number word or a `<decena> y <unidad>` pair to its value.
///
/// Single words go through the fixed table. Compound forms are split on the
/// literal `" y "` connector and only resolve when the left half is an exact
/// ten from 20 to 90 and the right half a unit from 1 to 9.
///
/// # Parameters
/// - `text`: Lowercased, trimmed text.
///
/// # Returns
/// The numeric value, or `None` if the text is not a recognized number.
#[must_use]
pub fn number_value(text: &str) -> Option<u32> {
    if let Some(value) = word_value(text) {
        return Some(value);
    }
    let (tens, units) = text.split_once(COMPOUND_CONNECTOR)?;
    if is_tens_word(tens) && is_units_word(units) {
        Some(word_value(tens)? + word_value(units)?)
    } else {
        None
    }
}

/// Normalizes a spoken Spanish number to its digit string.
///
/// The input is trimmed and lowercased before lookup. Unrecognized input is
/// returned unchanged (as given, not lowercased) so the caller can flag it;
/// this function never fails.
///
/// # Parameters
/// - `text`: A number word, a compound pair such as `"treinta y dos"`, or any
///   other text.
///
/// # Returns
/// The digit string of the number, or `text` itself.
///
/// # Example
/// ```
/// use aritmetica_natural::analyzer::numbers::normalize_number;
///
/// assert_eq!(normalize_number("Dieciséis"), "16");
/// assert_eq!(normalize_number("noventa y nueve"), "99");
/// assert_eq!(normalize_number("42"), "42");
/// assert_eq!(normalize_number("mil"), "mil");
/// ```
#[must_use]
pub fn normalize_number(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    number_value(&lowered).map_or_else(|| text.to_string(), |value| value.to_string())
}
