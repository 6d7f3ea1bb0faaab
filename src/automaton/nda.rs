//! Nondeterministic Levenshtein automaton.
//!
//! The nondeterministic form is a `(pattern_len + 1) × (max_distance + 1)`
//! grid of transition lists. It is built from the pattern, handed to the
//! determinisation pass, and discarded; nothing outside this crate ever
//! sees it.

use crate::alphabet::Symbol;
use smallvec::SmallVec;

/// Identifier of a grid cell, `pattern_index * (max_distance + 1) + num_edits`.
pub(crate) type NdaStateId = u32;

/// A single nondeterministic transition.
///
/// Targets are grid-cell identifiers rather than `(index, edits)` pairs so
/// the determinisation pass can treat states as plain integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NdaTransition<C> {
    /// Consume the next query unit if it equals the label.
    Match(C, NdaStateId),
    /// Consume the next query unit, whatever it is.
    Any(NdaStateId),
    /// Move without consuming a query unit.
    Epsilon(NdaStateId),
    /// The cell is accepting.
    Accept,
}

/// The nondeterministic automaton for a `(pattern, max_distance)` pair.
///
/// Cell `(i, j)` means: a query prefix has been consumed that aligns with
/// `pattern[..i]` using `j` edits. Transition lists are deduplicated, so
/// repeated inserts of the same edge are no-ops.
pub(crate) struct Nda<C> {
    transitions: Vec<SmallVec<[NdaTransition<C>; 4]>>,
    /// Grid row width, `max_distance + 1`.
    width: usize,
}

impl<C: Symbol> Nda<C> {
    /// Build the automaton grid for `pattern` with at most `max_distance` edits.
    pub(crate) fn new(pattern: &[C], max_distance: usize) -> Self {
        let width = max_distance + 1;
        let mut nda = Nda {
            transitions: vec![SmallVec::new(); (pattern.len() + 1) * width],
            width,
        };

        for (i, &unit) in pattern.iter().enumerate() {
            for j in 0..width {
                // Correct unit: consume a pattern unit without an edit.
                nda.insert(i, j, NdaTransition::Match(unit, nda.id(i + 1, j)));

                if j < max_distance {
                    // Substitution: wrong unit stands in for pattern[i].
                    nda.insert(i, j, NdaTransition::Any(nda.id(i + 1, j + 1)));
                    // Insertion into the query: swallow a stray query unit.
                    nda.insert(i, j, NdaTransition::Any(nda.id(i, j + 1)));
                    // Deletion from the query: skip pattern[i] unread.
                    nda.insert(i, j, NdaTransition::Epsilon(nda.id(i + 1, j + 1)));
                }
            }
        }

        // Last row: the whole pattern is consumed.
        let last = pattern.len();
        for j in 0..width {
            if j < max_distance {
                // Trailing query units are insertions.
                nda.insert(last, j, NdaTransition::Any(nda.id(last, j + 1)));
            }
            nda.insert(last, j, NdaTransition::Accept);
        }

        nda
    }

    #[inline]
    fn id(&self, pattern_index: usize, num_edits: usize) -> NdaStateId {
        (pattern_index * self.width + num_edits) as NdaStateId
    }

    /// Insert a transition at cell `(i, j)`, skipping duplicates.
    fn insert(&mut self, pattern_index: usize, num_edits: usize, transition: NdaTransition<C>) {
        let cell = &mut self.transitions[pattern_index * self.width + num_edits];
        if !cell.contains(&transition) {
            cell.push(transition);
        }
    }

    /// Identifier of the start cell `(0, 0)`.
    #[inline]
    pub(crate) fn start(&self) -> NdaStateId {
        0
    }

    /// Transitions out of a cell.
    #[inline]
    pub(crate) fn transitions(&self, state: NdaStateId) -> &[NdaTransition<C>] {
        &self.transitions[state as usize]
    }

    /// Whether a cell carries an accept entry.
    pub(crate) fn is_accepting(&self, state: NdaStateId) -> bool {
        self.transitions[state as usize]
            .iter()
            .any(|t| matches!(t, NdaTransition::Accept))
    }
}
