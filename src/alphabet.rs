//! Byte-alphabet sets used while determinizing.
//!
//! `overlay` accumulates the alphabets of every outgoing transition of an
//! NFA state set; `partition` then cuts the result into pairwise-disjoint
//! atoms, each of which is either contained in or disjoint from every
//! contributing transition. The boundary-interval representation here is
//! also the natural extension point for set complementation later on.

use crate::automaton::Transition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Alphabet {
    None,
    Any,
    Value(u8),
    Range(u8, u8),
    Multiple(Vec<Alphabet>),
}

impl Alphabet {
    pub fn from_transition(transition: &Transition) -> Alphabet {
        match *transition {
            Transition::Any => Alphabet::Any,
            Transition::Character(value) => Alphabet::Value(value),
            Transition::Range(lo, hi) => Alphabet::Range(lo, hi),
            Transition::Epsilon => Alphabet::None,
            Transition::Mask(_) => unreachable!("mask transition in an nfa"),
        }
    }

    /// Union of two alphabets. The result may be coarser than an exact
    /// union; `partition` restores precision.
    pub fn overlay(self, other: Alphabet) -> Alphabet {
        match (self, other) {
            (Alphabet::None, other) => other,
            (this, Alphabet::None) => this,
            (Alphabet::Multiple(mut these), Alphabet::Multiple(others)) => {
                these.extend(others);
                Alphabet::Multiple(these)
            }
            (Alphabet::Multiple(mut these), other) => {
                these.push(other);
                Alphabet::Multiple(these)
            }
            (this, Alphabet::Multiple(others)) => {
                let mut these = vec![this];
                these.extend(others);
                Alphabet::Multiple(these)
            }
            (this, other) => Alphabet::Multiple(vec![this, other]),
        }
    }

    /// Cut this alphabet into sorted, pairwise-disjoint atoms. Every atom is
    /// a subset of each contributing interval it overlaps, so an atom never
    /// straddles a transition boundary.
    pub fn partition(&self) -> Vec<Alphabet> {
        let mut intervals = Vec::new();
        self.intervals(&mut intervals);
        if intervals.is_empty() {
            return vec![];
        }

        // Elementary segments between consecutive interval boundaries.
        let mut bounds = std::collections::BTreeSet::new();
        for &(lo, hi) in intervals.iter() {
            bounds.insert(lo as u16);
            bounds.insert(hi as u16 + 1);
        }
        let bounds: Vec<u16> = bounds.into_iter().collect();

        let mut atoms = Vec::new();
        for pair in bounds.windows(2) {
            let lo = pair[0];
            let hi = pair[1] - 1;
            let covered = intervals
                .iter()
                .any(|&(a, b)| a as u16 <= lo && hi <= b as u16);
            if !covered {
                continue;
            }

            let (lo, hi) = (lo as u8, hi as u8);
            if lo == 0 && hi == 0xFF {
                atoms.push(Alphabet::Any);
            } else if lo == hi {
                atoms.push(Alphabet::Value(lo));
            } else {
                atoms.push(Alphabet::Range(lo, hi));
            }
        }
        atoms
    }

    /// Does this atom's byte set fall inside the transition's byte set?
    /// Partitioning guarantees subset-or-disjoint, so containment of the
    /// atom's bounds is a complete check.
    pub fn matches(&self, transition: &Transition) -> bool {
        let (lo, hi) = self.bounds();
        match *transition {
            Transition::Any => true,
            Transition::Character(value) => lo == value && hi == value,
            Transition::Range(from, to) => from <= lo && hi <= to,
            Transition::Epsilon => false,
            Transition::Mask(_) => unreachable!("mask transition in an nfa"),
        }
    }

    /// Bounds of an atomic alphabet.
    pub fn bounds(&self) -> (u8, u8) {
        match *self {
            Alphabet::Any => (0x00, 0xFF),
            Alphabet::Value(value) => (value, value),
            Alphabet::Range(lo, hi) => (lo, hi),
            Alphabet::None | Alphabet::Multiple(_) => {
                unreachable!("bounds of a non-atomic alphabet")
            }
        }
    }

    fn intervals(&self, out: &mut Vec<(u8, u8)>) {
        match self {
            Alphabet::None => {}
            Alphabet::Any => out.push((0x00, 0xFF)),
            Alphabet::Value(value) => out.push((*value, *value)),
            Alphabet::Range(lo, hi) => out.push((*lo, *hi)),
            Alphabet::Multiple(items) => {
                for item in items.iter() {
                    item.intervals(out);
                }
            }
        }
    }
}
