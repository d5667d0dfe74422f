use crate::automaton::Automaton;

/// Linear walk of a determinized automaton: scan the current state's
/// transitions for the first one matching the next byte, accept as soon as
/// an accepting state is entered, give up on the first dead byte.
pub(crate) struct Matcher<'a> {
    automaton: &'a Automaton,
}

impl<'a> Matcher<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Matcher { automaton }
    }

    pub fn execute(&self, input: &[u8]) -> bool {
        let mut state = self.automaton.initial;
        if self.automaton.is_accepting(state) {
            return true;
        }

        for &byte in input {
            let next = self.automaton.states[state]
                .edges
                .iter()
                .find(|edge| edge.transition.matches(byte));

            match next {
                Some(edge) => {
                    if self.automaton.is_accepting(edge.target) {
                        return true;
                    }
                    state = edge.target;
                }
                None => return false,
            }
        }

        false
    }
}
