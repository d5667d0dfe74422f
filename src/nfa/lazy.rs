use std::collections::HashMap;

use crate::automaton::{Automaton, IndexSet};

/// Subset simulation that determinizes on the fly: each
/// `(state set, byte) -> state set` step is computed on first use and
/// memoized under the canonicalized set.
pub(crate) struct Matcher<'a> {
    automaton: &'a Automaton,
    cache: HashMap<IndexSet, HashMap<u8, IndexSet>>,
}

impl<'a> Matcher<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Matcher {
            automaton,
            cache: HashMap::new(),
        }
    }

    pub fn execute(&mut self, input: &[u8]) -> bool {
        let mut start = IndexSet::new();
        start.insert(self.automaton.initial);
        let mut current = self.automaton.epsilon_closure(&start);

        if self.accepts(&current) {
            return true;
        }
        for &byte in input {
            current = self.step(current, byte);
            if current.is_empty() {
                return false;
            }
            if self.accepts(&current) {
                return true;
            }
        }
        false
    }

    fn accepts(&self, index: &IndexSet) -> bool {
        index.iter().any(|&id| self.automaton.is_accepting(id))
    }

    fn step(&mut self, index: IndexSet, byte: u8) -> IndexSet {
        if let Some(next) = self.cache.get(&index).and_then(|steps| steps.get(&byte)) {
            return next.clone();
        }

        let mut targets = IndexSet::new();
        for &id in index.iter() {
            for edge in self.automaton.states[id].edges.iter() {
                if !edge.transition.is_epsilon() && edge.transition.matches(byte) {
                    targets.insert(edge.target);
                }
            }
        }
        let next = self.automaton.epsilon_closure(&targets);

        self.cache.entry(index).or_default().insert(byte, next.clone());
        next
    }
}
