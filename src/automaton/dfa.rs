//! Determinisation of the nondeterministic automaton.
//!
//! Classic subset construction, with one twist for large alphabets: each
//! deterministic state keeps explicit edges only for the units that appear
//! as match labels in its underlying position set, plus a single
//! `otherwise` edge covering every other unit. Without it, wildcard
//! behaviour would need one edge per unit in the alphabet — ruinous for
//! code points. At lookup time an explicit edge shadows `otherwise`.

use super::nda::{Nda, NdaStateId, NdaTransition};
use crate::alphabet::Symbol;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

/// Identifier of a deterministic state. The start state is always `0`.
pub(crate) type DfaStateId = u32;

/// One deterministic state.
#[derive(Debug, Clone)]
struct DfaState<C> {
    /// Explicit edges, unique and sorted by label.
    edges: SmallVec<[(C, DfaStateId); 4]>,
    /// Default edge taken when no explicit label matches.
    otherwise: Option<DfaStateId>,
    /// Whether the underlying position set contains an accept entry.
    is_final: bool,
}

/// A compiled deterministic Levenshtein automaton.
///
/// Immutable after construction. Each state corresponds to an ε-closed set
/// of grid cells of the nondeterministic automaton; the set → id map lives
/// only for the duration of [`Dfa::compile`].
#[derive(Debug, Clone)]
pub(crate) struct Dfa<C> {
    states: Vec<DfaState<C>>,
}

/// A canonical (sorted, deduplicated) set of nondeterministic states.
type StateSet = Vec<NdaStateId>;

impl<C: Symbol> Dfa<C> {
    /// Run subset construction over the nondeterministic grid.
    ///
    /// Terminates because the reachable ε-closed sets are finite and each
    /// is interned exactly once; the worklist visits every deterministic
    /// state exactly once.
    pub(crate) fn compile(nda: &Nda<C>) -> Self {
        let mut dfa = Dfa { states: Vec::new() };
        let mut ids: FxHashMap<StateSet, DfaStateId> = FxHashMap::default();
        let mut worklist: VecDeque<(DfaStateId, StateSet)> = VecDeque::new();

        let start = saturate(nda, vec![nda.start()]);
        intern(nda, &mut dfa, &mut ids, &mut worklist, start);

        while let Some((id, set)) = worklist.pop_front() {
            for label in char_set(nda, &set) {
                let target = step_on_unit(nda, &set, label);
                if target.is_empty() {
                    continue;
                }
                let target_id = intern(nda, &mut dfa, &mut ids, &mut worklist, target);
                dfa.states[id as usize].edges.push((label, target_id));
            }

            let fallback = step_on_any(nda, &set);
            if !fallback.is_empty() {
                let target_id = intern(nda, &mut dfa, &mut ids, &mut worklist, fallback);
                dfa.states[id as usize].otherwise = Some(target_id);
            }
        }

        dfa
    }

    /// The start state.
    #[inline]
    pub(crate) fn start(&self) -> DfaStateId {
        0
    }

    /// Follow one query unit: an explicit edge if the label matches,
    /// otherwise the default edge, otherwise blocked.
    #[inline]
    pub(crate) fn step(&self, state: DfaStateId, unit: C) -> Option<DfaStateId> {
        let state = &self.states[state as usize];
        state
            .edges
            .iter()
            .find(|(label, _)| *label == unit)
            .map(|&(_, next)| next)
            .or(state.otherwise)
    }

    /// Whether a state accepts.
    #[inline]
    pub(crate) fn is_final(&self, state: DfaStateId) -> bool {
        self.states[state as usize].is_final
    }

    /// Run the automaton over a full query.
    pub(crate) fn accepts<I: IntoIterator<Item = C>>(&self, query: I) -> bool {
        let mut state = self.start();
        for unit in query {
            match self.step(state, unit) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_final(state)
    }

    /// Number of deterministic states.
    pub(crate) fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Write a human-readable edge listing to `sink`.
    ///
    /// The format is for debugging only and may change.
    pub(crate) fn debug_print<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        for (id, state) in self.states.iter().enumerate() {
            let marker = if state.is_final { " (final)" } else { "" };
            writeln!(sink, "state {id}{marker}:")?;
            for (label, next) in &state.edges {
                writeln!(sink, "  {label:?} -> {next}")?;
            }
            if let Some(next) = state.otherwise {
                writeln!(sink, "  * -> {next}")?;
            }
        }
        Ok(())
    }
}

/// Intern a state set: allocate a fresh deterministic state on first
/// sight and queue it for expansion.
fn intern<C: Symbol>(
    nda: &Nda<C>,
    dfa: &mut Dfa<C>,
    ids: &mut FxHashMap<StateSet, DfaStateId>,
    worklist: &mut VecDeque<(DfaStateId, StateSet)>,
    set: StateSet,
) -> DfaStateId {
    if let Some(&id) = ids.get(&set) {
        return id;
    }

    let id = dfa.states.len() as DfaStateId;
    dfa.states.push(DfaState {
        edges: SmallVec::new(),
        otherwise: None,
        is_final: set.iter().any(|&s| nda.is_accepting(s)),
    });
    ids.insert(set.clone(), id);
    worklist.push_back((id, set));
    id
}

/// ε-closure: the least fixpoint of `seeds` under epsilon transitions,
/// canonicalised. FIFO worklist; terminates because epsilon edges strictly
/// advance through the finite grid.
fn saturate<C: Symbol>(nda: &Nda<C>, seeds: Vec<NdaStateId>) -> StateSet {
    let mut closure = seeds;
    let mut queue: VecDeque<NdaStateId> = closure.iter().copied().collect();

    while let Some(state) = queue.pop_front() {
        for transition in nda.transitions(state) {
            if let NdaTransition::Epsilon(next) = *transition {
                if !closure.contains(&next) {
                    closure.push(next);
                    queue.push_back(next);
                }
            }
        }
    }

    closure.sort_unstable();
    closure.dedup();
    closure
}

/// Distinct match labels on transitions out of any state in the set,
/// in unit order.
fn char_set<C: Symbol>(nda: &Nda<C>, set: &StateSet) -> SmallVec<[C; 8]> {
    let mut labels: SmallVec<[C; 8]> = SmallVec::new();
    for &state in set {
        for transition in nda.transitions(state) {
            if let NdaTransition::Match(label, _) = *transition {
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
        }
    }
    labels.sort_unstable();
    labels
}

/// `δ(S, c)`: destinations of matching `Match` edges plus all `Any`
/// edges, ε-closed.
fn step_on_unit<C: Symbol>(nda: &Nda<C>, set: &StateSet, unit: C) -> StateSet {
    let mut seeds = Vec::new();
    for &state in set {
        for transition in nda.transitions(state) {
            match *transition {
                NdaTransition::Match(label, next) if label == unit => seeds.push(next),
                NdaTransition::Any(next) => seeds.push(next),
                _ => {}
            }
        }
    }
    saturate(nda, seeds)
}

/// `δ(S, *)`: destinations of `Any` edges only, ε-closed. This becomes
/// the `otherwise` edge; explicit edges shadow it.
fn step_on_any<C: Symbol>(nda: &Nda<C>, set: &StateSet) -> StateSet {
    let mut seeds = Vec::new();
    for &state in set {
        for transition in nda.transitions(state) {
            if let NdaTransition::Any(next) = *transition {
                seeds.push(next);
            }
        }
    }
    saturate(nda, seeds)
}
