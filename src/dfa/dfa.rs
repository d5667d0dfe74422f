use crate::automaton::Automaton;
use crate::error::Error;
use crate::nfa::Nfa;

use super::{builder::Builder, matcher::Matcher};

pub struct Dfa {
    pub(crate) automaton: Automaton,
}

impl Dfa {
    pub fn new(pattern: &str) -> Result<Dfa, Error> {
        let nfa = Nfa::new(pattern)?;

        Ok(Dfa::from_nfa(&nfa))
    }

    pub fn from_nfa(nfa: &Nfa) -> Dfa {
        Dfa {
            automaton: Builder::build(&nfa.automaton),
        }
    }

    pub fn is_match(&self, str: &str) -> bool {
        let matcher = Matcher::new(&self.automaton);
        matcher.execute(str.as_bytes())
    }
}
