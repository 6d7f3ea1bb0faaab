//! # fuzztrie
//!
//! Fuzzy string matching built on Levenshtein automata.
//!
//! Given a pattern and a maximum edit distance, the library compiles a
//! deterministic automaton that accepts exactly the strings within that
//! distance of the pattern. A companion persistent trie index maps many
//! keys to values and retrieves everything within the distance bound by
//! walking the trie and the automaton together, without scanning the
//! whole key set.
//!
//! ## Example
//!
//! ```rust
//! use fuzztrie::prelude::*;
//!
//! let dfa = ByteAutomaton::from_pattern("hello", 1);
//! assert!(dfa.matches("hell"));
//! assert!(!dfa.matches("hall"));
//!
//! let index: ByteIndex<&str> = ByteIndex::new()
//!     .add("hello", "world")
//!     .add("hall", "vestibule");
//!
//! let mut found = index.retrieve_list("hell", 1);
//! found.sort_unstable();
//! assert_eq!(found, vec!["vestibule", "world"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod automaton;
pub mod distance;
pub mod index;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::alphabet::Symbol;
    pub use crate::automaton::{
        Automaton, AutomatonBuilder, BuilderError, ByteAutomaton, CharAutomaton,
    };
    pub use crate::distance::levenshtein_distance;
    pub use crate::index::{ByteIndex, CharIndex, FuzzyIndex};
}
