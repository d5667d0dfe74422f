use super::ast::*;
use super::*;

use crate::error::Error;

fn run(pattern: &str) -> Result<Ast, Error> {
    Parser::parse(pattern)
}

fn make_top(children: Vec<Ast>) -> Ast {
    Ast {
        kind: AstKind::Pattern,
        children,
    }
}

fn make1(kind: AstKind) -> Ast {
    Ast {
        kind,
        children: vec![],
    }
}

fn make2(kind: AstKind, children: Vec<Ast>) -> Ast {
    Ast { kind, children }
}

#[cfg(test)]
mod basic_match {
    use super::*;

    #[test]
    fn match_char() {
        let src = "abc";
        let expect = Ok(make_top(vec![make2(
            AstKind::Expression,
            vec![
                make1(AstKind::MatchCharacter('a')),
                make1(AstKind::MatchCharacter('b')),
                make1(AstKind::MatchCharacter('c')),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn match_metachar() {
        let src = r"a\+c";
        let expect = Ok(make_top(vec![make2(
            AstKind::Expression,
            vec![
                make1(AstKind::MatchCharacter('a')),
                make1(AstKind::MatchCharacter('+')),
                make1(AstKind::MatchCharacter('c')),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn match_control_escape() {
        let src = r"\t\n";
        let expect = Ok(make_top(vec![make2(
            AstKind::Expression,
            vec![
                make1(AstKind::MatchCharacter('\t')),
                make1(AstKind::MatchCharacter('\n')),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn match_any() {
        let src = "a.c";
        let expect = Ok(make_top(vec![make2(
            AstKind::Expression,
            vec![
                make1(AstKind::MatchCharacter('a')),
                make1(AstKind::MatchAny),
                make1(AstKind::MatchCharacter('c')),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn match_empty() {
        let src = "";
        let expect = Ok(make_top(vec![make1(AstKind::None)]));

        assert_eq!(run(src), expect);
    }
}

#[cfg(test)]
mod alternation {
    use super::*;

    #[test]
    fn union() {
        let src = "a|b|c";
        let expect = Ok(make_top(vec![
            make1(AstKind::MatchCharacter('a')),
            make1(AstKind::MatchCharacter('b')),
            make1(AstKind::MatchCharacter('c')),
        ]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn group() {
        let src = "a(bc|d)";
        let expect = Ok(make_top(vec![make2(
            AstKind::Expression,
            vec![
                make1(AstKind::MatchCharacter('a')),
                make2(
                    AstKind::Group,
                    vec![
                        make2(
                            AstKind::Expression,
                            vec![
                                make1(AstKind::MatchCharacter('b')),
                                make1(AstKind::MatchCharacter('c')),
                            ],
                        ),
                        make1(AstKind::MatchCharacter('d')),
                    ],
                ),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn missing_right_term() {
        let src = "a|";
        assert_eq!(
            run(src),
            Err(Error::Parse(
                "missing right term of the union operator".to_owned()
            ))
        );
    }
}

#[cfg(test)]
mod quantifier {
    use super::*;

    #[test]
    fn star_plus_option() {
        let src = "a*b+c?";
        let expect = Ok(make_top(vec![make2(
            AstKind::Expression,
            vec![
                make2(
                    AstKind::Quantified(Quantifier::Star),
                    vec![make1(AstKind::MatchCharacter('a'))],
                ),
                make2(
                    AstKind::Quantified(Quantifier::Plus),
                    vec![make1(AstKind::MatchCharacter('b'))],
                ),
                make2(
                    AstKind::Quantified(Quantifier::Optional),
                    vec![make1(AstKind::MatchCharacter('c'))],
                ),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn repeat_count() {
        let src = "a{3}";
        let expect = Ok(make_top(vec![make2(
            AstKind::Quantified(Quantifier::Repeat(3, Some(3))),
            vec![make1(AstKind::MatchCharacter('a'))],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn repeat_min() {
        let src = "a{2,}";
        let expect = Ok(make_top(vec![make2(
            AstKind::Quantified(Quantifier::Repeat(2, None)),
            vec![make1(AstKind::MatchCharacter('a'))],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn repeat_range() {
        let src = "a{2,4}";
        let expect = Ok(make_top(vec![make2(
            AstKind::Quantified(Quantifier::Repeat(2, Some(4))),
            vec![make1(AstKind::MatchCharacter('a'))],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn repeat_out_of_order() {
        let src = "a{3,1}";
        assert_eq!(
            run(src),
            Err(Error::Parse("out of repeat order {3,1}".to_owned()))
        );
    }

    #[test]
    fn non_greedy_is_unsupported() {
        assert_eq!(
            run("a*?"),
            Err(Error::Unsupported("non-greedy quantifier"))
        );
        assert_eq!(
            run("a{2,4}?"),
            Err(Error::Unsupported("non-greedy quantifier"))
        );
    }
}

#[cfg(test)]
mod set {
    use super::*;

    #[test]
    fn include_set() {
        let src = "[abc]";
        let expect = Ok(make_top(vec![make2(
            AstKind::MatchSet { inverted: false },
            vec![
                make1(AstKind::MatchCharacter('a')),
                make1(AstKind::MatchCharacter('b')),
                make1(AstKind::MatchCharacter('c')),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn range_set() {
        let src = "[a-z0-9_]";
        let expect = Ok(make_top(vec![make2(
            AstKind::MatchSet { inverted: false },
            vec![
                make1(AstKind::MatchRange('a', 'z')),
                make1(AstKind::MatchRange('0', '9')),
                make1(AstKind::MatchCharacter('_')),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn exclude_set() {
        let src = "[^ab]";
        let expect = Ok(make_top(vec![make2(
            AstKind::MatchSet { inverted: true },
            vec![
                make1(AstKind::MatchCharacter('a')),
                make1(AstKind::MatchCharacter('b')),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn class_in_set() {
        let src = r"[\d_]";
        let expect = Ok(make_top(vec![make2(
            AstKind::MatchSet { inverted: false },
            vec![
                make1(AstKind::MatchClass(ClassKind::Digit)),
                make1(AstKind::MatchCharacter('_')),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn out_of_range_order() {
        let src = "[z-a]";
        assert_eq!(
            run(src),
            Err(Error::Parse("out of range order [z-a]".to_owned()))
        );
    }

    #[test]
    fn empty_set() {
        let src = "[]";
        assert_eq!(run(src), Err(Error::Parse("set items are empty".to_owned())));
    }

    #[test]
    fn class_as_range_endpoint() {
        let src = r"[\d-x]";
        assert_eq!(
            run(src),
            Err(Error::Parse(
                "character class is not allowed as a range endpoint".to_owned()
            ))
        );
    }
}

#[cfg(test)]
mod class {
    use super::*;

    #[test]
    fn shorthand_classes() {
        let src = r"\d\h\s\w";
        let expect = Ok(make_top(vec![make2(
            AstKind::Expression,
            vec![
                make1(AstKind::MatchClass(ClassKind::Digit)),
                make1(AstKind::MatchClass(ClassKind::Hex)),
                make1(AstKind::MatchClass(ClassKind::Space)),
                make1(AstKind::MatchClass(ClassKind::Word)),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn posix_class() {
        let src = "[[:digit:][:alpha:]]";
        let expect = Ok(make_top(vec![make2(
            AstKind::MatchSet { inverted: false },
            vec![
                make1(AstKind::PosixClass(PosixKind::Digit)),
                make1(AstKind::PosixClass(PosixKind::Alpha)),
            ],
        )]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn unknown_posix_class() {
        let src = "[[:bogus:]]";
        assert_eq!(
            run(src),
            Err(Error::Parse("unknown POSIX class [:bogus:]".to_owned()))
        );
    }

    #[test]
    fn unicode_property() {
        let src = r"\p{Greek}";
        let expect = Ok(make_top(vec![make1(AstKind::MatchProperty(
            "Greek".to_owned(),
        ))]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn unicode_property_key_value() {
        let src = r"\p{sc=Hiragana}";
        let expect = Ok(make_top(vec![make1(AstKind::MatchProperty(
            "sc=Hiragana".to_owned(),
        ))]));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn negated_class_is_unsupported() {
        assert_eq!(run(r"\D"), Err(Error::Unsupported("negated character class")));
        assert_eq!(
            run(r"\P{Greek}"),
            Err(Error::Unsupported("negated unicode property"))
        );
    }
}

#[cfg(test)]
mod error {
    use super::*;

    #[test]
    fn anchors_are_unsupported() {
        assert_eq!(run("^abc"), Err(Error::Unsupported("anchor")));
        assert_eq!(run("abc$"), Err(Error::Unsupported("anchor")));
    }

    #[test]
    fn unmatched_parentheses() {
        assert_eq!(
            run("(ab"),
            Err(Error::Parse("unmatched opening parentheses, get EoL".to_owned()))
        );
    }

    #[test]
    fn unmatched_brackets() {
        assert_eq!(
            run("[ab"),
            Err(Error::Parse("unmatched opening brackets, get EoL".to_owned()))
        );
    }

    #[test]
    fn dangling_quantifier() {
        assert_eq!(
            run("*a"),
            Err(Error::Parse("unexpected character '*'".to_owned()))
        );
    }

    #[test]
    fn bad_escape() {
        assert_eq!(
            run(r"\q"),
            Err(Error::Parse(r"unsupport escape sequence: \q".to_owned()))
        );
    }
}
