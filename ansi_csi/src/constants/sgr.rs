// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) parameter values.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>

// Reset.

pub const SGR_RESET: u8 = 0;

// Text attributes.

pub const SGR_BOLD: u8 = 1;
pub const SGR_FAINT: u8 = 2;
pub const SGR_ITALIC: u8 = 3;
pub const SGR_UNDERLINE: u8 = 4;
pub const SGR_SLOW_BLINK: u8 = 5;
/// Not widely supported.
pub const SGR_RAPID_BLINK: u8 = 6;
pub const SGR_INVERT: u8 = 7;
pub const SGR_CONCEAL: u8 = 8;
pub const SGR_STRIKE: u8 = 9;
pub const SGR_DOUBLE_UNDERLINE: u8 = 21;
pub const SGR_OVERLINE: u8 = 53;

// Text attribute undo codes. Bold and faint share one "normal intensity" code.

pub const SGR_NORMAL_INTENSITY: u8 = 22;
pub const SGR_NOT_ITALIC: u8 = 23;
pub const SGR_NOT_UNDERLINED: u8 = 24;
pub const SGR_NOT_BLINKING: u8 = 25;
pub const SGR_NOT_INVERTED: u8 = 27;
pub const SGR_REVEAL: u8 = 28;
pub const SGR_NOT_STRUCK: u8 = 29;
pub const SGR_NOT_OVERLINED: u8 = 55;

// Standard foreground colors (30-37), bright foreground colors (90-97).

pub const SGR_FG_BLACK: u8 = 30;
pub const SGR_FG_RED: u8 = 31;
pub const SGR_FG_GREEN: u8 = 32;
pub const SGR_FG_YELLOW: u8 = 33;
pub const SGR_FG_BLUE: u8 = 34;
pub const SGR_FG_MAGENTA: u8 = 35;
pub const SGR_FG_CYAN: u8 = 36;
pub const SGR_FG_WHITE: u8 = 37;
pub const SGR_FG_DEFAULT: u8 = 39;

pub const SGR_FG_BRIGHT_BLACK: u8 = 90;
pub const SGR_FG_BRIGHT_RED: u8 = 91;
pub const SGR_FG_BRIGHT_GREEN: u8 = 92;
pub const SGR_FG_BRIGHT_YELLOW: u8 = 93;
pub const SGR_FG_BRIGHT_BLUE: u8 = 94;
pub const SGR_FG_BRIGHT_MAGENTA: u8 = 95;
pub const SGR_FG_BRIGHT_CYAN: u8 = 96;
pub const SGR_FG_BRIGHT_WHITE: u8 = 97;

// Standard background colors (40-47), bright background colors (100-107).

pub const SGR_BG_BLACK: u8 = 40;
pub const SGR_BG_RED: u8 = 41;
pub const SGR_BG_GREEN: u8 = 42;
pub const SGR_BG_YELLOW: u8 = 43;
pub const SGR_BG_BLUE: u8 = 44;
pub const SGR_BG_MAGENTA: u8 = 45;
pub const SGR_BG_CYAN: u8 = 46;
pub const SGR_BG_WHITE: u8 = 47;
pub const SGR_BG_DEFAULT: u8 = 49;

pub const SGR_BG_BRIGHT_BLACK: u8 = 100;
pub const SGR_BG_BRIGHT_RED: u8 = 101;
pub const SGR_BG_BRIGHT_GREEN: u8 = 102;
pub const SGR_BG_BRIGHT_YELLOW: u8 = 103;
pub const SGR_BG_BRIGHT_BLUE: u8 = 104;
pub const SGR_BG_BRIGHT_MAGENTA: u8 = 105;
pub const SGR_BG_BRIGHT_CYAN: u8 = 106;
pub const SGR_BG_BRIGHT_WHITE: u8 = 107;

// Underline color.

pub const SGR_UNDERLINE_DEFAULT: u8 = 59;

// Extended color mode selectors. The first picks the target, the second picks
// between an ANSI 256 palette index and a 24-bit RGB triple:
// - `38;5;n` / `48;5;n` / `58;5;n`
// - `38;2;r;g;b` / `48;2;r;g;b` / `58;2;r;g;b`

pub const SGR_FG_EXTENDED: u8 = 38;
pub const SGR_BG_EXTENDED: u8 = 48;
pub const SGR_UNDERLINE_EXTENDED: u8 = 58;

pub const SGR_COLOR_MODE_ANSI256: u8 = 5;
pub const SGR_COLOR_MODE_RGB: u8 = 2;
