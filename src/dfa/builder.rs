use std::collections::{HashMap, VecDeque};

use crate::alphabet::Alphabet;
use crate::automaton::{Automaton, IndexSet, StateId, Transition};

/// Classic subset construction. NFA state sets are canonicalized as sorted
/// index sets and mapped to fresh labels; the per-set byte alphabet is
/// partitioned into disjoint atoms so that each atom leads to exactly one
/// successor set. Atom iteration is ordered, which makes the output
/// identical across runs.
pub(crate) struct Builder<'a> {
    nfa: &'a Automaton,
    dfa: Automaton,
    indexmap: HashMap<IndexSet, StateId>,
}

impl<'a> Builder<'a> {
    pub fn build(nfa: &'a Automaton) -> Automaton {
        let mut builder = Builder {
            nfa,
            dfa: Automaton::new(),
            indexmap: HashMap::new(),
        };

        builder.build_();
        builder.dfa
    }

    fn build_(&mut self) {
        let mut q = VecDeque::new();
        {
            let mut start = IndexSet::new();
            start.insert(self.nfa.initial);
            let start = self.nfa.epsilon_closure(&start);
            self.label(start.clone());
            q.push_back(start);
        }

        while let Some(index) = q.pop_front() {
            let source = self.indexmap[&index];

            let mut alphabet = Alphabet::None;
            for &id in index.iter() {
                for edge in self.nfa.states[id].edges.iter() {
                    if !edge.transition.is_epsilon() {
                        alphabet = alphabet.overlay(Alphabet::from_transition(&edge.transition));
                    }
                }
            }

            let mut moves: Vec<(u8, u8, StateId)> = Vec::new();
            for atom in alphabet.partition() {
                let mut targets = IndexSet::new();
                for &id in index.iter() {
                    for edge in self.nfa.states[id].edges.iter() {
                        if !edge.transition.is_epsilon() && atom.matches(&edge.transition) {
                            targets.insert(edge.target);
                        }
                    }
                }
                if targets.is_empty() {
                    unreachable!("partition atom matches no transition");
                }

                let targets = self.nfa.epsilon_closure(&targets);
                let target = match self.indexmap.get(&targets) {
                    Some(&id) => id,
                    None => {
                        let id = self.label(targets.clone());
                        q.push_back(targets);
                        id
                    }
                };

                let (lo, hi) = atom.bounds();
                moves.push((lo, hi, target));
            }

            for (lo, hi, target) in merge_consecutive(moves) {
                self.dfa.append_edge(source, transition_for(lo, hi), target);
            }
        }
    }

    fn label(&mut self, index: IndexSet) -> StateId {
        let id = self.dfa.add_state();
        if index.iter().any(|&i| self.nfa.is_accepting(i)) {
            self.dfa.accepting.insert(id);
        }
        self.indexmap.insert(index, id);
        id
    }
}

/// Adjacent atoms reaching the same state collapse into one table entry.
fn merge_consecutive(moves: Vec<(u8, u8, StateId)>) -> Vec<(u8, u8, StateId)> {
    let mut merged: Vec<(u8, u8, StateId)> = Vec::new();
    for (lo, hi, target) in moves {
        if let Some(last) = merged.last_mut() {
            if last.2 == target && last.1 as u16 + 1 == lo as u16 {
                last.1 = hi;
                continue;
            }
        }
        merged.push((lo, hi, target));
    }
    merged
}

/// Pick the cheapest transition for a byte interval. A range reaching 0xFF
/// whose low bound has only leading bits set is exactly `byte & lo == lo`,
/// so it lowers to a mask check; anything else would also admit bytes
/// outside the interval and stays a range.
fn transition_for(lo: u8, hi: u8) -> Transition {
    if lo == 0x00 && hi == 0xFF {
        Transition::Any
    } else if lo == hi {
        Transition::Character(lo)
    } else if hi == 0xFF && (lo.wrapping_sub(1) | lo) == 0xFF {
        Transition::Mask(lo)
    } else {
        Transition::Range(lo, hi)
    }
}
