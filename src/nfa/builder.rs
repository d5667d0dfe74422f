use std::collections::VecDeque;

use super::encoder::Encoder;
use crate::automaton::{Automaton, StateId, Transition};
use crate::error::Error;
use crate::parser::ast::{Ast, AstKind, Quantifier};
use crate::unicode;

/// Translates an AST into an automaton with one initial and one accepting
/// state. Construction runs over an explicit work list of
/// `(node, entry, exit)` obligations rather than recursing, so deeply nested
/// patterns and large bounded repeats cannot exhaust the call stack.
pub(crate) struct Builder<'a> {
    automaton: Automaton,
    work: VecDeque<(&'a Ast, StateId, StateId)>,
}

impl<'a> Builder<'a> {
    pub fn build(ast: &'a Ast) -> Result<Automaton, Error> {
        let mut automaton = Automaton::new();
        let entry = automaton.add_state();
        let exit = automaton.add_state();
        automaton.initial = entry;
        automaton.accepting.insert(exit);

        let mut builder = Builder {
            automaton,
            work: VecDeque::new(),
        };
        builder.work.push_back((ast, entry, exit));

        while let Some((ast, entry, exit)) = builder.work.pop_front() {
            builder.emit(ast, entry, exit)?;
        }

        Ok(builder.automaton)
    }

    fn emit(&mut self, ast: &'a Ast, entry: StateId, exit: StateId) -> Result<(), Error> {
        match &ast.kind {
            AstKind::Pattern | AstKind::Group => {
                for child in ast.children.iter() {
                    self.work.push_back((child, entry, exit));
                }
            }
            AstKind::Expression => match ast.children.as_slice() {
                [] => self.automaton.append_edge(entry, Transition::Epsilon, exit),
                [item] => self.work.push_back((item, entry, exit)),
                items => {
                    let mut source = entry;
                    for item in &items[..items.len() - 1] {
                        let next = self.automaton.add_state();
                        self.work.push_back((item, source, next));
                        source = next;
                    }
                    self.work.push_back((items.last().unwrap(), source, exit));
                }
            },
            AstKind::Quantified(quantifier) => {
                self.emit_quantified(*quantifier, &ast.children[0], entry, exit);
            }
            AstKind::MatchAny => {
                Encoder::new(&mut self.automaton).connect_any(entry, exit);
            }
            AstKind::MatchCharacter(c) => {
                Encoder::new(&mut self.automaton).connect_value(entry, exit, *c as u32);
            }
            AstKind::MatchRange(a, b) => {
                Encoder::new(&mut self.automaton).connect_range(entry, exit, *a as u32, *b as u32);
            }
            AstKind::MatchSet { inverted } => {
                if *inverted {
                    return Err(Error::Unsupported("negated character set"));
                }
                for child in ast.children.iter() {
                    self.work.push_back((child, entry, exit));
                }
            }
            AstKind::MatchClass(kind) => {
                let ranges = unicode::class_ranges(*kind)?;
                self.connect_ranges(entry, exit, &ranges);
            }
            AstKind::PosixClass(kind) => {
                let ranges = unicode::posix_ranges(*kind)?;
                self.connect_ranges(entry, exit, &ranges);
            }
            AstKind::MatchProperty(name) => {
                let ranges = unicode::property_ranges(name)?;
                self.connect_ranges(entry, exit, &ranges);
            }
            AstKind::None => {
                self.automaton.append_edge(entry, Transition::Epsilon, exit);
            }
        }
        Ok(())
    }

    /// Greediness is a matter of edge order: consuming fragments are
    /// prepended by the encoder, fall-back epsilons are appended here.
    fn emit_quantified(
        &mut self,
        quantifier: Quantifier,
        item: &'a Ast,
        entry: StateId,
        exit: StateId,
    ) {
        match quantifier {
            Quantifier::Optional => {
                self.work.push_back((item, entry, exit));
                self.automaton.append_edge(entry, Transition::Epsilon, exit);
            }
            Quantifier::Star => {
                self.work.push_back((item, entry, entry));
                self.automaton.append_edge(entry, Transition::Epsilon, exit);
            }
            Quantifier::Plus => {
                self.work.push_back((item, entry, exit));
                self.automaton.append_edge(exit, Transition::Epsilon, entry);
            }
            Quantifier::Repeat(0, None) => {
                self.emit_quantified(Quantifier::Star, item, entry, exit);
            }
            Quantifier::Repeat(min, None) => {
                let states = self.chain(entry, exit, min as usize - 1);
                for pair in states.windows(2) {
                    self.work.push_back((item, pair[0], pair[1]));
                }
                // unbounded tail: loop the last copy
                let previous = states[min as usize - 1];
                self.automaton.append_edge(exit, Transition::Epsilon, previous);
            }
            Quantifier::Repeat(_, Some(0)) => {
                self.automaton.append_edge(entry, Transition::Epsilon, exit);
            }
            Quantifier::Repeat(min, Some(max)) => {
                let states = self.chain(entry, exit, max as usize - 1);
                for pair in states.windows(2) {
                    self.work.push_back((item, pair[0], pair[1]));
                }
                // optional tail: bail out after each copy past the minimum
                for i in min as usize..max as usize {
                    self.automaton.append_edge(states[i], Transition::Epsilon, exit);
                }
            }
        }
    }

    /// `entry`, `count` fresh intermediate states, then `exit`.
    fn chain(&mut self, entry: StateId, exit: StateId, count: usize) -> Vec<StateId> {
        let mut states = Vec::with_capacity(count + 2);
        states.push(entry);
        for _ in 0..count {
            let id = self.automaton.add_state();
            states.push(id);
        }
        states.push(exit);
        states
    }

    fn connect_ranges(&mut self, entry: StateId, exit: StateId, ranges: &[(u32, u32)]) {
        let mut encoder = Encoder::new(&mut self.automaton);
        for &(lo, hi) in ranges {
            if lo == hi {
                encoder.connect_value(entry, exit, lo);
            } else {
                encoder.connect_range(entry, exit, lo, hi);
            }
        }
    }
}
