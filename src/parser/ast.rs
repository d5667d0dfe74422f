#[derive(Debug, PartialEq)]
pub struct Ast {
    pub kind: AstKind,
    pub children: Vec<Ast>,
}

impl Ast {
    pub fn leaf(kind: AstKind) -> Ast {
        Ast {
            kind,
            children: vec![],
        }
    }

    pub fn none() -> Ast {
        Ast::leaf(AstKind::None)
    }
}

#[derive(Debug, PartialEq)]
pub enum AstKind {
    Pattern,                     // root alternation
    Group,                       // '(' ... ')'
    Expression,                  // concatenation
    Quantified(Quantifier),      // one child, the quantified item
    MatchAny,                    // '.'
    MatchCharacter(char),        // a
    MatchRange(char, char),      // a - z
    MatchSet { inverted: bool }, // '[' ... ']'
    MatchClass(ClassKind),       // \d \h \s \w
    PosixClass(PosixKind),       // [:alpha:]
    MatchProperty(String),       // \p{...}
    None,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Quantifier {
    Optional,                 // '?'
    Star,                     // '*'
    Plus,                     // '+'
    Repeat(u32, Option<u32>), // {n} {n,} {n,m}; None is unbounded
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ClassKind {
    Digit,
    Hex,
    Space,
    Word,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PosixKind {
    Alnum,
    Alpha,
    Ascii,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Word,
    Xdigit,
}

impl PosixKind {
    pub fn from_name(name: &str) -> Option<PosixKind> {
        match name {
            "alnum" => Some(PosixKind::Alnum),
            "alpha" => Some(PosixKind::Alpha),
            "ascii" => Some(PosixKind::Ascii),
            "blank" => Some(PosixKind::Blank),
            "cntrl" => Some(PosixKind::Cntrl),
            "digit" => Some(PosixKind::Digit),
            "graph" => Some(PosixKind::Graph),
            "lower" => Some(PosixKind::Lower),
            "print" => Some(PosixKind::Print),
            "punct" => Some(PosixKind::Punct),
            "space" => Some(PosixKind::Space),
            "upper" => Some(PosixKind::Upper),
            "word" => Some(PosixKind::Word),
            "xdigit" => Some(PosixKind::Xdigit),
            _ => None,
        }
    }
}
