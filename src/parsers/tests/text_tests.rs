use crate::parsers::text;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_symbols_example() {
        let stripped = text::strip_symbols("Cat-astrophe 123! hits town\u{2014}hard.");
        assert_eq!(stripped, "Cat astrophe 123  hits town hard ");
        assert_eq!(text::filter_alphabetic(&stripped), "Cat astrophe hits town hard");
    }

    #[test]
    fn test_split_hyphenated() {
        assert_eq!(text::split_hyphenated("well-known"), "well known");
        assert_eq!(text::split_hyphenated("a-b-c"), "a b c");

        // Hyphens not flanked by letters on both sides are left alone
        assert_eq!(text::split_hyphenated("-start end-"), "-start end-");
        assert_eq!(text::split_hyphenated("9-5"), "9-5");
        assert_eq!(text::split_hyphenated("x--y"), "x--y");
    }

    #[test]
    fn test_strip_symbols_keeps_word_characters() {
        assert_eq!(text::strip_symbols("snake_case 42"), "snake_case 42");
        assert_eq!(text::strip_symbols("x--y"), "x  y");
        assert_eq!(text::strip_symbols("\"quoted\", (paren)"), " quoted    paren ");
    }

    #[test]
    fn test_filter_alphabetic_drops_mixed_tokens() {
        assert_eq!(text::filter_alphabetic("abc123 def_ghi jkl"), "jkl");
        assert_eq!(text::filter_alphabetic("123 456"), "");
        assert_eq!(text::filter_alphabetic("  spaced   out  "), "spaced out");
    }

    #[test]
    fn test_filter_alphabetic_drops_non_ascii_words() {
        assert_eq!(text::filter_alphabetic("café au lait"), "au lait");
        assert_eq!(text::filter_alphabetic("naïve reader"), "reader");
    }

    #[test]
    fn test_marks_and_joiners_split_words() {
        // Decomposed accent: the combining mark is a symbol, not part of the word
        let stripped = text::strip_symbols("cafe\u{301} ok");
        assert_eq!(stripped, "cafe  ok");
        assert_eq!(text::filter_alphabetic(&stripped), "cafe ok");

        let stripped = text::strip_symbols("alpha\u{200d}beta ok");
        assert_eq!(stripped, "alpha beta ok");
        assert_eq!(text::filter_alphabetic(&stripped), "alpha beta ok");

        let stripped = text::strip_symbols("foo\u{203f}bar ok");
        assert_eq!(stripped, "foo bar ok");
        assert_eq!(text::filter_alphabetic(&stripped), "foo bar ok");
    }

    #[test]
    fn test_filter_alphabetic_unstripped_marks() {
        assert_eq!(text::filter_alphabetic("cafe\u{301} ok"), "cafe ok");
        assert_eq!(text::filter_alphabetic("alpha\u{200d}beta"), "alpha beta");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(text::strip_symbols(""), "");
        assert_eq!(text::filter_alphabetic(""), "");
    }

    #[test]
    fn test_second_pass_is_noop() {
        let samples = [
            "Cat-astrophe 123! hits town\u{2014}hard.",
            "It's a well-known fact: 3 out of 4 people...",
            "plain words only",
            "",
        ];

        for sample in samples {
            let once = text::filter_alphabetic(&text::strip_symbols(sample));
            let twice = text::filter_alphabetic(&text::strip_symbols(&once));
            assert_eq!(once, twice, "second pass changed {:?}", sample);
        }
    }
}
