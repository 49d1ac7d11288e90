//! Character-level helpers for the Hangul object-dot grammar.
//!
//! Nothing here knows about commands or bindings; these functions only
//! pick runs of characters out of a segment the parser already split.
//
//  Lexical items (informal):
//
//      EntityHead ::= [가-힣]+ [0-9]*     (first run found in the segment)
//      ActionCall ::= [가-힣]+ '(' QUOTE .*? QUOTE ')'
//      QUOTE      ::= '"' | '\''
//
//  Both helpers use search semantics: text before or after the match is
//  ignored, mirroring how a novice's stray characters are tolerated.

use std::iter::Peekable;
use std::str::Chars;

/// Hangul syllable block, U+AC00 to U+D7A3.
pub fn is_hangul(c: char) -> bool {
    ('가'..='힣').contains(&c)
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

fn consume_while<F: Fn(char) -> bool>(chars: &mut Peekable<Chars<'_>>, pred: F, buf: &mut String) {
    while let Some(&c) = chars.peek() {
        if pred(c) {
            buf.push(c);
            chars.next();
        } else {
            break;
        }
    }
}

/// Finds the first Hangul run in `s` plus the digit run immediately
/// after it. Returns `None` when the segment contains no Hangul at all.
pub fn entity_head(s: &str) -> Option<(String, Option<String>)> {
    let mut chars = s.chars().peekable();

    while let Some(&c) = chars.peek() {
        if is_hangul(c) {
            break;
        }
        chars.next();
    }

    let mut name = String::new();
    consume_while(&mut chars, is_hangul, &mut name);
    if name.is_empty() {
        return None;
    }

    let mut digits = String::new();
    consume_while(&mut chars, |c| c.is_ascii_digit(), &mut digits);

    let id = if digits.is_empty() { None } else { Some(digits) };
    Some((name, id))
}

/// Matches `동작("텍스트")` anywhere in `s`: a Hangul run directly
/// followed by a parenthesised, quoted string. The quote may be single
/// or double and the two quotes need not match each other; the shortest
/// text ending in a quote-then-`)` wins. The argument is taken verbatim,
/// no escapes, and may be empty.
pub fn action_call(s: &str) -> Option<(String, String)> {
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if !is_hangul(chars[i]) {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && is_hangul(chars[i]) {
            i += 1;
        }

        if i + 1 < chars.len() && chars[i] == '(' && is_quote(chars[i + 1]) {
            let mut j = i + 2;
            while j + 1 < chars.len() {
                if is_quote(chars[j]) && chars[j + 1] == ')' {
                    let action = chars[start..i].iter().collect();
                    let argument = chars[i + 2..j].iter().collect();
                    return Some((action, argument));
                }
                j += 1;
            }
        }
        // this run was not a call; keep searching after it
    }

    None
}
