use super::{compile::Compiler, exec::Executer, inst::Inst};
use crate::dfa::Dfa;
use crate::error::Error;

pub struct Vm {
    insts: Vec<Inst>,
}

impl Vm {
    pub fn new(pattern: &str) -> Result<Vm, Error> {
        let dfa = Dfa::new(pattern)?;

        Ok(Vm::from_dfa(&dfa))
    }

    pub fn from_dfa(dfa: &Dfa) -> Vm {
        Vm {
            insts: Compiler::compile(&dfa.automaton),
        }
    }

    pub fn is_match(&self, str: &str) -> bool {
        let mut exec = Executer::new(&self.insts);
        exec.execute(str.as_bytes())
    }

    #[cfg(test)]
    pub(crate) fn insts(&self) -> &[Inst] {
        &self.insts
    }
}
