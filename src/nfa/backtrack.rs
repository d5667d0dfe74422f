use std::collections::HashSet;

use crate::automaton::{Automaton, StateId, Transition};

/// Depth-first simulation of the raw state graph. Transitions are tried in
/// list order; epsilon edges advance without consuming. Worst case is
/// exponential in the pattern, so this strategy is the debugging baseline,
/// not the default.
pub(crate) struct Matcher<'a> {
    automaton: &'a Automaton,
    visited: HashSet<(usize, StateId)>,
}

impl<'a> Matcher<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Matcher {
            automaton,
            visited: HashSet::new(),
        }
    }

    pub fn execute(&mut self, input: &[u8]) -> bool {
        self.execute_(input, 0, self.automaton.initial)
    }

    fn execute_(&mut self, input: &[u8], sp: usize, id: StateId) -> bool {
        if self.automaton.is_accepting(id) {
            return true;
        }
        // a (position, state) pair that failed once cannot succeed later;
        // this also breaks epsilon cycles from nested repetitions
        if !self.visited.insert((sp, id)) {
            return false;
        }

        for edge in self.automaton.states[id].edges.iter() {
            let matched = match edge.transition {
                Transition::Epsilon => self.execute_(input, sp, edge.target),
                transition => {
                    sp < input.len()
                        && transition.matches(input[sp])
                        && self.execute_(input, sp + 1, edge.target)
                }
            };
            if matched {
                return true;
            }
        }

        false
    }
}
