use regex::Regex;
use std::sync::LazyLock;

/// Anything that is neither a word character (letter, number or `_`) nor whitespace.
///
/// Combining marks, joiners and connector punctuation other than `_` count as
/// symbols here, unlike the regex `\w` class.
static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("symbol pattern is valid"));

/// A maximal run of word characters
static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"));

/// Replaces punctuation and symbols with spaces.
///
/// A hyphen between two ASCII letters becomes a space first, so compounds
/// split into separate words. Every other character that is neither a word
/// character (alphanumeric or `_`) nor whitespace is replaced by a space.
pub fn strip_symbols(text: &str) -> String {
    let split = split_hyphenated(text);
    SYMBOL.replace_all(&split, " ").into_owned()
}

/// Keeps only the words made purely of ASCII letters, joined by single spaces.
///
/// Words glued to digits, underscores or non-ASCII letters are dropped whole.
pub fn filter_alphabetic(text: &str) -> String {
    WORD_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|word| word.bytes().all(|b| b.is_ascii_alphabetic()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces each hyphen that sits between two ASCII letters with a space
pub fn split_hyphenated(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let between_letters = c == '-'
            && i > 0
            && chars[i - 1].is_ascii_alphabetic()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_alphabetic());

        out.push(if between_letters { ' ' } else { c });
    }

    out
}
