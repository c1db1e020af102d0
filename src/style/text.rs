//! Pure string styling functions
//!
//! None of these functions fail or touch the terminal; they only wrap the
//! input in a prefix/suffix pair or pad it.

use super::codes::{AQUA, BLUE, BRIGHT, DIM, GREEN, RED, StyleCode, WHITE};

fn wrap(prefix: StyleCode, text: &str, reset: StyleCode) -> String {
    let mut out = String::with_capacity(prefix.len() + text.len() + reset.len());
    out.push_str(prefix);
    out.push_str(text);
    out.push_str(reset);
    out
}

/// Wraps `text` to display as green text
pub fn green(text: &str) -> String {
    wrap(GREEN, text, WHITE)
}

/// Wraps `text` to display as blue text
pub fn blue(text: &str) -> String {
    wrap(BLUE, text, WHITE)
}

/// Wraps `text` to display as red text
pub fn red(text: &str) -> String {
    wrap(RED, text, WHITE)
}

/// Wraps `text` to display as aqua text (used for spinner glyphs)
pub fn aqua(text: &str) -> String {
    wrap(AQUA, text, WHITE)
}

/// Wraps `text` to appear dimmed
///
/// Dim is closed with the reset-all code, not the white reset the color
/// styles share.
pub fn dim(text: &str) -> String {
    wrap(DIM, text, BRIGHT)
}

/// Pads `text` with trailing spaces up to `width` characters
///
/// Width counts `char`s, not terminal columns. Text already at or beyond
/// `width` is returned unchanged.
pub fn pad_end(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + (width - len));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_green_adds_green_codes() {
        assert_eq!(green("test"), "\x1b[32mtest\x1b[37m");
    }

    #[test]
    fn test_blue_adds_blue_codes() {
        assert_eq!(blue("test"), "\x1b[34mtest\x1b[37m");
    }

    #[test]
    fn test_red_adds_red_codes() {
        assert_eq!(red("test"), "\x1b[31mtest\x1b[37m");
    }

    #[test]
    fn test_aqua_adds_aqua_codes() {
        assert_eq!(aqua("⠋"), "\x1b[36m⠋\x1b[37m");
    }

    #[test]
    fn test_dim_uses_reset_all() {
        assert_eq!(dim("x"), "\x1b[2mx\x1b[0m");
    }

    #[test]
    fn test_styles_accept_empty_string() {
        assert_eq!(green(""), format!("{GREEN}{WHITE}"));
        assert_eq!(dim(""), format!("{DIM}{BRIGHT}"));
    }

    #[test]
    fn test_styles_preserve_inner_text() {
        let inputs = ["", "plain", "with space", "日本語", "🦀", "\x1b[1mnested"];
        for input in inputs {
            assert_eq!(green(input), format!("{GREEN}{input}{WHITE}"));
            assert_eq!(blue(input), format!("{BLUE}{input}{WHITE}"));
            assert_eq!(red(input), format!("{RED}{input}{WHITE}"));
            assert_eq!(dim(input), format!("{DIM}{input}{BRIGHT}"));
        }
    }

    #[test]
    fn test_pad_end_pads_to_width() {
        assert_eq!(pad_end("test", 8), "test    ");
    }

    #[test]
    fn test_pad_end_exact_width_unchanged() {
        assert_eq!(pad_end("test", 4), "test");
    }

    #[test]
    fn test_pad_end_longer_text_unchanged() {
        assert_eq!(pad_end("longer text", 3), "longer text");
        assert_eq!(pad_end("abc", 0), "abc");
    }

    #[test]
    fn test_pad_end_counts_chars_not_bytes() {
        let padded = pad_end("日本", 5);
        assert_eq!(padded.chars().count(), 5);
        assert_eq!(padded, "日本   ");
    }

    #[test]
    fn test_pad_end_length_and_prefix() {
        for width in 0..12 {
            let padded = pad_end("abcde", width);
            assert!(padded.starts_with("abcde"));
            assert_eq!(padded.chars().count(), width.max(5));
        }
    }
}
