//! ANSI control sequences
//!
//! Every sequence starts with the Control Sequence Introducer (`ESC [`).
//! Colors use Select Graphic Rendition (`ESC [ <n> m`), cursor visibility
//! uses DEC private mode 25.

/// A single ANSI control sequence.
pub type StyleCode = &'static str;

/// Control Sequence Introducer
pub const CSI: StyleCode = "\x1b[";

pub const HIDE_CURSOR: StyleCode = "\x1b[?25l";
pub const SHOW_CURSOR: StyleCode = "\x1b[?25h";

pub const GREEN: StyleCode = "\x1b[32m";
pub const BLUE: StyleCode = "\x1b[34m";
pub const AQUA: StyleCode = "\x1b[36m";
pub const RED: StyleCode = "\x1b[31m";

/// Shared reset for the color styles.
pub const WHITE: StyleCode = "\x1b[37m";

pub const DIM: StyleCode = "\x1b[2m";

/// Resets every attribute; closes [`DIM`].
pub const BRIGHT: StyleCode = "\x1b[0m";

/// Erase the viewport, erase the scrollback, move the cursor home.
pub const CLEAR_SCREEN: StyleCode = "\x1b[2J\x1b[3J\x1b[H";

/// Returns the cursor to column 0 without advancing a line.
pub const CARRIAGE_RETURN: &str = "\r";
