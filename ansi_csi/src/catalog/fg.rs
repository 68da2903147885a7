// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Foreground color.
//!
//! More info: <https://www.ditig.com/256-colors-cheat-sheet>

use super::{extended_ansi256, extended_rgb, sgr};
use crate::{SGR_FG_BLACK, SGR_FG_BLUE, SGR_FG_BRIGHT_BLACK, SGR_FG_CYAN, SGR_FG_DEFAULT,
            SGR_FG_EXTENDED, SGR_FG_GREEN, SGR_FG_MAGENTA, SGR_FG_RED, SGR_FG_WHITE,
            SGR_FG_YELLOW, Sgr, SgrAnsi256, SgrRgb};

/// Restores the terminal's default foreground color.
pub const DEFAULT: Sgr = sgr(SGR_FG_DEFAULT);

pub const BLACK: Sgr = sgr(SGR_FG_BLACK);
pub const RED: Sgr = sgr(SGR_FG_RED);
pub const GREEN: Sgr = sgr(SGR_FG_GREEN);
pub const YELLOW: Sgr = sgr(SGR_FG_YELLOW);
pub const BLUE: Sgr = sgr(SGR_FG_BLUE);
pub const MAGENTA: Sgr = sgr(SGR_FG_MAGENTA);
pub const CYAN: Sgr = sgr(SGR_FG_CYAN);
pub const WHITE: Sgr = sgr(SGR_FG_WHITE);

/// Same as [`bright::BLACK`].
pub const GRAY: Sgr = sgr(SGR_FG_BRIGHT_BLACK);

/// ANSI 256 palette color, `ESC [ 38 ; 5 ; index m`.
#[must_use]
pub const fn set(index: u8) -> SgrAnsi256 { extended_ansi256(SGR_FG_EXTENDED, index) }

/// 24-bit color, `ESC [ 38 ; 2 ; r ; g ; b m`.
#[must_use]
pub const fn rgb(red: u8, green: u8, blue: u8) -> SgrRgb {
    extended_rgb(SGR_FG_EXTENDED, red, green, blue)
}

/// Bright versions of the colors.
pub mod bright {
    use super::sgr;
    use crate::{SGR_FG_BRIGHT_BLACK, SGR_FG_BRIGHT_BLUE, SGR_FG_BRIGHT_CYAN,
                SGR_FG_BRIGHT_GREEN, SGR_FG_BRIGHT_MAGENTA, SGR_FG_BRIGHT_RED,
                SGR_FG_BRIGHT_WHITE, SGR_FG_BRIGHT_YELLOW, Sgr};

    pub const BLACK: Sgr = sgr(SGR_FG_BRIGHT_BLACK);
    pub const RED: Sgr = sgr(SGR_FG_BRIGHT_RED);
    pub const GREEN: Sgr = sgr(SGR_FG_BRIGHT_GREEN);
    pub const YELLOW: Sgr = sgr(SGR_FG_BRIGHT_YELLOW);
    pub const BLUE: Sgr = sgr(SGR_FG_BRIGHT_BLUE);
    pub const MAGENTA: Sgr = sgr(SGR_FG_BRIGHT_MAGENTA);
    pub const CYAN: Sgr = sgr(SGR_FG_BRIGHT_CYAN);
    pub const WHITE: Sgr = sgr(SGR_FG_BRIGHT_WHITE);
}
