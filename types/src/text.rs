//! Small pure text helpers.

use std::borrow::Cow;
use std::iter::Peekable;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ESC: char = '\x1b';
const BEL: char = '\x07';
const C1_CSI: char = '\u{9b}';
const C1_OSC: char = '\u{9d}';

fn is_disallowed(c: char) -> bool {
    c.is_control() && c != '\n'
}

/// Strip escape sequences and control characters (except `\n`) from text
/// loaded from content files before it reaches the terminal.
///
/// CSI, OSC, DCS, PM and APC sequences are removed with their payloads, in
/// both the `ESC`-prefixed and the single-byte C1 forms.
///
/// Returns `Cow::Borrowed` when nothing needs removing.
#[must_use]
pub fn sanitize_display_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_disallowed) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ESC => skip_escape_sequence(&mut chars),
            C1_CSI => skip_csi_params(&mut chars),
            C1_OSC => skip_osc_sequence(&mut chars),
            '\t' => result.push(' '),
            c if !is_disallowed(c) => result.push(c),
            _ => {}
        }
    }
    Cow::Owned(result)
}

/// Skip the sequence introduced by an `ESC` that was just consumed.
fn skip_escape_sequence<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    let Some(&next) = chars.peek() else {
        return;
    };
    match next {
        '[' => {
            chars.next();
            skip_csi_params(chars);
        }
        ']' => {
            chars.next();
            skip_osc_sequence(chars);
        }
        'P' | '^' | '_' => {
            chars.next();
            skip_until_st(chars);
        }
        // Charset and line attribute selection carry one argument byte.
        '(' | ')' | '*' | '+' | '#' | ' ' => {
            chars.next();
            chars.next();
        }
        '7' | '8' | 'c' | 'D' | 'E' | 'H' | 'M' | 'N' | 'O' | 'Z' | '=' | '>' | '<' => {
            chars.next();
        }
        _ => {}
    }
}

/// Parameter and intermediate bytes (0x20..=0x3F), then one final byte
/// (0x40..=0x7E).
fn skip_csi_params<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    while let Some(&c) = chars.peek() {
        if ('\x40'..='\x7e').contains(&c) {
            chars.next();
            return;
        } else if ('\x20'..='\x3f').contains(&c) {
            chars.next();
        } else {
            return;
        }
    }
}

/// OSC payload runs until BEL or ST (`ESC \`).
fn skip_osc_sequence<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    while let Some(c) = chars.next() {
        if c == BEL {
            return;
        }
        if c == ESC && chars.peek() == Some(&'\\') {
            chars.next();
            return;
        }
    }
}

fn skip_until_st<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    while let Some(c) = chars.next() {
        if c == ESC && chars.peek() == Some(&'\\') {
            chars.next();
            return;
        }
    }
}

/// Truncate `raw` to at most `max_width` terminal columns, ending in `…`
/// when anything was cut.
#[must_use]
pub fn truncate_to_width(raw: &str, max_width: usize) -> String {
    let raw = raw.trim();
    if raw.width() <= max_width {
        return raw.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in raw.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_borrowed() {
        assert!(matches!(
            sanitize_display_text("Daniel Dennett — Consciousness Explained"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn strips_csi_sequences() {
        assert_eq!(sanitize_display_text("Hello\x1b[2JWorld"), "HelloWorld");
        assert_eq!(sanitize_display_text("red\x1b[31m text"), "red text");
    }

    #[test]
    fn strips_osc_hyperlinks_with_their_payload() {
        assert_eq!(
            sanitize_display_text("Title\x1b]8;;https://evil.example\x07Click\x1b]8;;\x07"),
            "TitleClick"
        );
        assert_eq!(
            sanitize_display_text("a\x1b]0;window title\x1b\\b"),
            "ab"
        );
    }

    #[test]
    fn strips_c1_sequences() {
        assert_eq!(sanitize_display_text("x\u{9b}31my"), "xy");
        assert_eq!(sanitize_display_text("x\u{9d}52;c;ZXZpbA==\x07y"), "xy");
    }

    #[test]
    fn strips_dcs_and_charset_selection() {
        assert_eq!(sanitize_display_text("a\x1bPq#0;1\x1b\\b"), "ab");
        assert_eq!(sanitize_display_text("a\x1b(Bb"), "ab");
    }

    #[test]
    fn keeps_newlines_and_expands_tabs() {
        assert_eq!(sanitize_display_text("a\tb\nc\x07"), "a b\nc");
    }

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("Mysterianism", 20), "Mysterianism");
    }

    #[test]
    fn truncate_adds_ellipsis_within_budget() {
        let result = truncate_to_width("Integrated Information Theory", 10);
        assert_eq!(result, "Integrate…");
        assert!(result.width() <= 10);
    }

    #[test]
    fn truncate_counts_wide_chars() {
        let result = truncate_to_width("意識の問題について", 5);
        assert!(result.width() <= 5);
        assert!(result.ends_with('…'));
    }

    #[test]
    fn truncate_zero_width_is_empty() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}
