use crate::automaton::Automaton;
use crate::error::Error;
use crate::parser::ast::{Ast, AstKind, Quantifier};
use crate::parser::Parser;

use super::{backtrack, builder::Builder, lazy};

pub struct Nfa {
    pub(crate) automaton: Automaton,
}

impl Nfa {
    pub fn new(pattern: &str) -> Result<Nfa, Error> {
        let ast = Parser::parse(pattern)?;
        let automaton = Builder::build(&unanchored(ast))?;

        Ok(Nfa { automaton })
    }

    /// Backtracking simulation of the state graph.
    pub fn is_match(&self, str: &str) -> bool {
        let mut matcher = backtrack::Matcher::new(&self.automaton);
        matcher.execute(str.as_bytes())
    }

    /// Subset simulation with memoized transitions.
    pub fn is_match_lazy(&self, str: &str) -> bool {
        let mut matcher = lazy::Matcher::new(&self.automaton);
        matcher.execute(str.as_bytes())
    }
}

/// A match may start at any offset, so the compiled graph carries an
/// any-byte loop ahead of the pattern itself. Once anchors exist this must
/// become conditional on their absence.
fn unanchored(ast: Ast) -> Ast {
    let prefix = Ast {
        kind: AstKind::Quantified(Quantifier::Star),
        children: vec![Ast::leaf(AstKind::MatchAny)],
    };
    Ast {
        kind: AstKind::Expression,
        children: vec![prefix, ast],
    }
}
