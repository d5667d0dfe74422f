//! Regular expressions compiled to byte-level finite automata.
//!
//! A pattern is parsed to an AST, lowered by Thompson construction into an
//! NFA whose transitions consume single bytes of the UTF-8 encoding, then
//! determinized by subset construction. The resulting automaton is executed
//! directly, simulated lazily, or compiled further into a linear bytecode
//! program.
//!
//! ```text
//! pattern ──> Ast ──> Nfa ──> Dfa ──> Vm
//! ```

mod alphabet;
mod automaton;
mod dfa;
mod error;
mod nfa;
mod parser;
mod regex;
mod unicode;
mod vm;

pub use dfa::Dfa;
pub use error::Error;
pub use nfa::Nfa;
pub use regex::Regex;
pub use vm::Vm;
