/// Variable definitions seen so far.
///
/// The caller owns the environment and passes it to every analysis that
/// should share definitions.
pub mod environment;
/// The forward scan over the token sequence.
///
/// Checks operator arity and definition-before-use without looking at the
/// parse trees.
pub mod validator;
