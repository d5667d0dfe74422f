use super::inst::Inst;
use crate::automaton::{Automaton, Transition};

/// Lowers each state of a determinized automaton to a straight block:
/// accepting states become a bare `Success`; every other state guards
/// against end of input, tries its transitions in table order as
/// conditional jumps, and falls through to `Failure`. The first pass sizes
/// the blocks so the second can emit resolved addresses.
pub struct Compiler {}

impl Compiler {
    pub fn compile(automaton: &Automaton) -> Vec<Inst> {
        debug_assert_eq!(automaton.initial, 0, "program entry is the first block");

        let mut offsets = Vec::with_capacity(automaton.states.len());
        let mut pc = 0;
        for (id, state) in automaton.states.iter().enumerate() {
            offsets.push(pc);
            if automaton.is_accepting(id) {
                pc += 1;
            } else {
                pc += state.edges.len() + 2;
            }
        }

        let mut insts = Vec::with_capacity(pc);
        for (id, state) in automaton.states.iter().enumerate() {
            if automaton.is_accepting(id) {
                insts.push(Inst::Success);
                continue;
            }

            insts.push(Inst::FailLength);
            for edge in state.edges.iter() {
                let addr = offsets[edge.target];
                let inst = match edge.transition {
                    Transition::Any => Inst::Jump(addr),
                    Transition::Character(value) => Inst::JumpByte(value, addr),
                    Transition::Mask(mask) => Inst::JumpMask(mask, addr),
                    Transition::Range(lo, hi) => Inst::JumpRange(lo, hi, addr),
                    Transition::Epsilon => unreachable!("epsilon transition in a dfa"),
                };
                insts.push(inst);
            }
            insts.push(Inst::Failure);
        }

        insts
    }
}
