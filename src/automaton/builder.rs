//! Builder pattern for creating Automaton instances.

use super::Automaton;
use crate::alphabet::Symbol;

/// Error type for builder validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    /// No pattern was provided
    #[error("Pattern is required. Use .pattern() to set it.")]
    MissingPattern,
}

/// Builder for constructing an [`Automaton`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use fuzztrie::automaton::{AutomatonBuilder, ByteAutomaton};
///
/// let dfa: ByteAutomaton = AutomatonBuilder::new()
///     .pattern("hello")
///     .max_distance(1)
///     .build()
///     .unwrap();
/// assert!(dfa.matches("hell"));
/// ```
pub struct AutomatonBuilder<C: Symbol = u8> {
    pattern: Option<Vec<C>>,
    max_distance: usize,
}

impl<C: Symbol> AutomatonBuilder<C> {
    /// Create a new builder. The distance bound defaults to 2.
    pub fn new() -> Self {
        AutomatonBuilder {
            pattern: None,
            max_distance: 2,
        }
    }

    /// Set the pattern from a string.
    pub fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(C::from_str(pattern));
        self
    }

    /// Set the pattern from an explicit unit slice.
    pub fn units(mut self, pattern: &[C]) -> Self {
        self.pattern = Some(pattern.to_vec());
        self
    }

    /// Set the maximum edit distance.
    pub fn max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Compile the automaton, validating that a pattern was supplied.
    pub fn build(self) -> Result<Automaton<C>, BuilderError> {
        let pattern = self.pattern.ok_or(BuilderError::MissingPattern)?;
        Ok(Automaton::from_units(&pattern, self.max_distance))
    }
}

impl<C: Symbol> Default for AutomatonBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
