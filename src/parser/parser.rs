use std::iter::Peekable;
use std::vec::IntoIter;

use super::ast::*;
use crate::error::Error;

const META_CHARS: [char; 16] = [
    '|', // union
    '*', // star
    '+', // plus
    '?', // option
    ',', // repeat range separator
    '-', // set range separator
    '^', // set inversion / anchor
    '$', // anchor
    '.', // any match
    '{', '}', // repeat brackets
    '(', ')', // group brackets
    '[', ']', // set brackets
    '\\', // escape
];

pub struct Parser {
    stream: Peekable<IntoIter<char>>,
}

impl Parser {
    pub fn parse(pattern: &str) -> Result<Ast, Error> {
        let mut parser = Parser {
            stream: pattern
                .chars()
                .collect::<Vec<char>>()
                .into_iter()
                .peekable(),
        };

        let ast = parser.parse_root()?;
        match parser.stream.next() {
            Some(c) => Err(Error::Parse(format!("unexpected character '{}'", c))),
            None => Ok(ast),
        }
    }

    fn parse_root(&mut self) -> Result<Ast, Error> {
        let children = self.parse_alternatives()?;
        Ok(Ast {
            kind: AstKind::Pattern,
            children,
        })
    }

    fn parse_alternatives(&mut self) -> Result<Vec<Ast>, Error> {
        let first = self.parse_concat()?;
        if first.kind == AstKind::None {
            return Ok(vec![first]);
        }

        let mut alternatives = vec![first];
        while self.stream.next_if_eq(&'|').is_some() {
            let rhs = self.parse_concat()?;
            if rhs.kind == AstKind::None {
                return Err(Error::Parse(
                    "missing right term of the union operator".to_owned(),
                ));
            }
            alternatives.push(rhs);
        }
        Ok(alternatives)
    }

    fn parse_concat(&mut self) -> Result<Ast, Error> {
        let mut children = Vec::new();
        loop {
            let ast = self.parse_quantified()?;

            match ast.kind {
                AstKind::None => break,
                _ => {
                    children.push(ast);
                }
            }
        }

        match children.len() {
            0 => Ok(Ast::none()),
            1 => Ok(children.pop().unwrap()),
            _ => Ok(Ast {
                kind: AstKind::Expression,
                children,
            }),
        }
    }

    fn parse_quantified(&mut self) -> Result<Ast, Error> {
        let ast = self.parse_element()?;
        if ast.kind == AstKind::None {
            return Ok(ast);
        }

        let quantifier = match self.stream.peek() {
            Some('*') => {
                self.stream.next();
                Quantifier::Star
            }
            Some('+') => {
                self.stream.next();
                Quantifier::Plus
            }
            Some('?') => {
                self.stream.next();
                Quantifier::Optional
            }
            Some('{') => self.parse_repeat()?,
            _ => {
                return Ok(ast);
            }
        };

        if self.stream.next_if_eq(&'?').is_some() {
            return Err(Error::Unsupported("non-greedy quantifier"));
        }

        Ok(Ast {
            kind: AstKind::Quantified(quantifier),
            children: vec![ast],
        })
    }

    fn parse_repeat(&mut self) -> Result<Quantifier, Error> {
        self.stream.next(); // consume '{'

        let min = self
            .parse_number()
            .ok_or_else(|| Error::Parse("repeat count is empty".to_owned()))?;

        if self.stream.next_if_eq(&'}').is_some() {
            return Ok(Quantifier::Repeat(min, Some(min)));
        }

        if self.stream.next_if_eq(&',').is_none() {
            return match self.stream.next() {
                Some(c) => Err(Error::Parse(format!("repeat operator want ',', get '{}'", c))),
                None => Err(Error::Parse("repeat operator want ',', get EoL".to_owned())),
            };
        }

        let max = self.parse_number();
        if let Some(max) = max {
            if min > max {
                return Err(Error::Parse(format!("out of repeat order {{{},{}}}", min, max)));
            }
        }

        match self.stream.next() {
            Some('}') => Ok(Quantifier::Repeat(min, max)),
            Some(c) => Err(Error::Parse(format!(
                "unmatched opening curly brackets, get '{}'",
                c
            ))),
            None => Err(Error::Parse(
                "unmatched opening curly brackets, get EoL".to_owned(),
            )),
        }
    }

    fn parse_element(&mut self) -> Result<Ast, Error> {
        match self.stream.peek() {
            Some('(') => self.parse_group(),
            Some('[') => self.parse_set(),
            Some('.') => {
                self.stream.next();
                Ok(Ast::leaf(AstKind::MatchAny))
            }
            Some('^') | Some('$') => Err(Error::Unsupported("anchor")),
            _ => self.parse_char(),
        }
    }

    fn parse_group(&mut self) -> Result<Ast, Error> {
        self.stream.next(); // consume '('

        let children = self.parse_alternatives()?;
        match self.stream.next() {
            Some(')') => Ok(Ast {
                kind: AstKind::Group,
                children,
            }),
            Some(c) => Err(Error::Parse(format!(
                "unmatched opening parentheses, get '{}'",
                c
            ))),
            None => Err(Error::Parse(
                "unmatched opening parentheses, get EoL".to_owned(),
            )),
        }
    }

    fn parse_set(&mut self) -> Result<Ast, Error> {
        self.stream.next(); // consume '['

        let inverted = self.stream.next_if_eq(&'^').is_some();

        let mut children = Vec::new();
        loop {
            let item = self.parse_set_item()?;
            match item.kind {
                AstKind::None => break,
                _ => {
                    children.push(item);
                }
            }
        }
        if children.is_empty() {
            return Err(Error::Parse("set items are empty".to_owned()));
        }

        match self.stream.next() {
            Some(']') => Ok(Ast {
                kind: AstKind::MatchSet { inverted },
                children,
            }),
            Some(c) => Err(Error::Parse(format!(
                "unmatched opening brackets, get '{}'",
                c
            ))),
            None => Err(Error::Parse(
                "unmatched opening brackets, get EoL".to_owned(),
            )),
        }
    }

    fn parse_set_item(&mut self) -> Result<Ast, Error> {
        if let Some('[') = self.stream.peek() {
            return self.parse_posix_class();
        }

        let ast = self.parse_char()?;
        if ast.kind == AstKind::None {
            return Ok(ast);
        }

        match self.stream.peek() {
            Some('-') => {
                self.stream.next();

                let rhs = self.parse_char()?;
                if rhs.kind == AstKind::None {
                    return Err(Error::Parse("missing range end character".to_owned()));
                }

                match (&ast.kind, &rhs.kind) {
                    (&AstKind::MatchCharacter(a), &AstKind::MatchCharacter(b)) => {
                        if a > b {
                            return Err(Error::Parse(format!("out of range order [{}-{}]", a, b)));
                        }
                        Ok(Ast::leaf(AstKind::MatchRange(a, b)))
                    }
                    _ => Err(Error::Parse(
                        "character class is not allowed as a range endpoint".to_owned(),
                    )),
                }
            }
            _ => Ok(ast),
        }
    }

    fn parse_posix_class(&mut self) -> Result<Ast, Error> {
        self.stream.next(); // consume '['

        if self.stream.next_if_eq(&':').is_none() {
            return Err(Error::Parse("nested set is not supported".to_owned()));
        }

        let mut name = String::new();
        while let Some(c) = self.stream.next_if(|c| *c != ':') {
            name.push(c);
        }
        if self.stream.next_if_eq(&':').is_none() || self.stream.next_if_eq(&']').is_none() {
            return Err(Error::Parse(format!("malformed POSIX bracket [:{}", name)));
        }

        if name.starts_with('^') {
            return Err(Error::Unsupported("negated POSIX class"));
        }

        match PosixKind::from_name(&name) {
            Some(kind) => Ok(Ast::leaf(AstKind::PosixClass(kind))),
            None => Err(Error::Parse(format!("unknown POSIX class [:{}:]", name))),
        }
    }

    fn parse_char(&mut self) -> Result<Ast, Error> {
        match self.stream.peek() {
            Some('\\') => self.parse_metachar(),
            Some(c) if !META_CHARS.contains(c) => {
                let c = self.stream.next().unwrap();
                Ok(Ast::leaf(AstKind::MatchCharacter(c)))
            }
            _ => Ok(Ast::none()),
        }
    }

    fn parse_metachar(&mut self) -> Result<Ast, Error> {
        self.stream.next(); // consume '\\'

        match self.stream.next() {
            Some('d') => Ok(Ast::leaf(AstKind::MatchClass(ClassKind::Digit))),
            Some('h') => Ok(Ast::leaf(AstKind::MatchClass(ClassKind::Hex))),
            Some('s') => Ok(Ast::leaf(AstKind::MatchClass(ClassKind::Space))),
            Some('w') => Ok(Ast::leaf(AstKind::MatchClass(ClassKind::Word))),
            Some('p') => self.parse_property(),
            Some('D') | Some('H') | Some('S') | Some('W') => {
                Err(Error::Unsupported("negated character class"))
            }
            Some('P') => Err(Error::Unsupported("negated unicode property")),
            Some('t') => Ok(Ast::leaf(AstKind::MatchCharacter('\t'))),
            Some('n') => Ok(Ast::leaf(AstKind::MatchCharacter('\n'))),
            Some('r') => Ok(Ast::leaf(AstKind::MatchCharacter('\r'))),
            Some('f') => Ok(Ast::leaf(AstKind::MatchCharacter('\x0C'))),
            Some('v') => Ok(Ast::leaf(AstKind::MatchCharacter('\x0B'))),
            Some('0') => Ok(Ast::leaf(AstKind::MatchCharacter('\0'))),
            Some(c) if META_CHARS.contains(&c) => Ok(Ast::leaf(AstKind::MatchCharacter(c))),
            Some(c) => Err(Error::Parse(format!("unsupport escape sequence: \\{}", c))),
            None => Err(Error::Parse("escape sequence is empty".to_owned())),
        }
    }

    fn parse_property(&mut self) -> Result<Ast, Error> {
        if self.stream.next_if_eq(&'{').is_none() {
            return Err(Error::Parse("unicode property want '{'".to_owned()));
        }

        let mut name = String::new();
        while let Some(c) = self.stream.next_if(|c| *c != '}') {
            name.push(c);
        }
        if self.stream.next_if_eq(&'}').is_none() {
            return Err(Error::Parse(
                "unmatched opening curly brackets, get EoL".to_owned(),
            ));
        }
        if name.is_empty() {
            return Err(Error::Parse("unicode property name is empty".to_owned()));
        }

        Ok(Ast::leaf(AstKind::MatchProperty(name)))
    }

    fn parse_number(&mut self) -> Option<u32> {
        let mut num = String::new();
        while let Some(c) = self.stream.next_if(|c| c.is_ascii_digit()) {
            num.push(c);
        }
        num.parse().ok()
    }
}
