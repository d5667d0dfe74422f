use crate::dfa::Dfa;
use crate::error::Error;

/// A compiled pattern using the default backend (full determinization).
/// Matching is unanchored: the pattern may match anywhere in the input.
pub struct Regex {
    dfa: Dfa,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        Ok(Regex {
            dfa: Dfa::new(pattern)?,
        })
    }

    pub fn is_match(&self, str: &str) -> bool {
        self.dfa.is_match(str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfa::Dfa;
    use crate::nfa::Nfa;
    use crate::vm::Vm;

    /// Every strategy must agree on every (pattern, input) pair.
    fn assert_all(pattern: &str, input: &str, expect: bool) {
        let nfa = Nfa::new(pattern).unwrap();
        let dfa = Dfa::from_nfa(&nfa);
        let vm = Vm::from_dfa(&dfa);

        assert_eq!(nfa.is_match(input), expect, "backtrack {} on {:?}", pattern, input);
        assert_eq!(nfa.is_match_lazy(input), expect, "lazy {} on {:?}", pattern, input);
        assert_eq!(dfa.is_match(input), expect, "dfa {} on {:?}", pattern, input);
        assert_eq!(vm.is_match(input), expect, "vm {} on {:?}", pattern, input);
    }

    #[test]
    fn literal_substring() {
        assert_all("abc", "xxx abc yyy", true);
        assert_all("abc", "ab", false);
    }

    #[test]
    fn counted_repeat() {
        assert_all("a{3}", "baaaa", true);
        assert_all("a{3}", "aa", false);
    }

    #[test]
    fn posix_ascii() {
        assert_all("[[:ascii:]]", "hello", true);
        assert_all("[[:ascii:]]", "héllo", true);
        assert_all("[[:ascii:]]", "", false);
    }

    #[test]
    fn digit_run() {
        assert_all(r"\d+", "abc123", true);
        assert_all(r"\d+", "abc", false);
    }

    #[test]
    fn two_byte_codepoint() {
        assert_all("α", "\u{3B1}", true);
        assert_all("α", "a", false);
    }

    #[test]
    fn quantifier_semantics() {
        assert_all("a?", "", true);
        assert_all("a?", "a", true);
        assert_all("a?", "banana", true);

        assert_all("a*", "", true);
        assert_all("a*", "bbb", true);

        assert_all("a+", "", false);
        assert_all("a+", "bab", true);
        assert_all("a+", "bbb", false);

        assert_all("a{2,4}", "aa", true);
        assert_all("a{2,4}", "aaa", true);
        assert_all("a{2,4}", "aaaa", true);
        assert_all("a{2,4}", "a", false);

        assert_all("a{2,}", "baaab", true);
        assert_all("a{2,}", "bab", false);
    }

    #[test]
    fn pathological_pattern_agrees() {
        let pattern = format!("{}{}", "a?".repeat(30), "a".repeat(30));
        let input = "a".repeat(30);

        assert_all(&pattern, &input, true);
    }

    #[test]
    fn front_end_uses_dfa() {
        let regex = Regex::new("he(llo|y)").unwrap();
        assert_eq!(regex.is_match("say hello"), true);
        assert_eq!(regex.is_match("say hey"), true);
        assert_eq!(regex.is_match("goodbye"), false);
    }

    #[test]
    fn compile_errors_surface() {
        assert!(Regex::new("(ab").is_err());
        assert!(Regex::new("[^x]").is_err());
        assert!(Regex::new(r"\p{bogus}").is_err());
    }

    #[test]
    fn mixed_script_sweep() {
        let cases = [
            (r"\p{Greek}\d", "αβ3x", true),
            (r"\p{Greek}\d", "αβx", false),
            ("[[:alpha:]]+!", "héllo!", true),
            ("[[:alpha:]]+!", "123!", false),
            ("(ab|αβ)+", "xαβαβy", true),
            ("(ab|αβ)+", "xαy", false),
            (".", "😀", true),
            (".", "", false),
        ];
        for (pattern, input, expect) in cases {
            assert_all(pattern, input, expect);
        }
    }
}
