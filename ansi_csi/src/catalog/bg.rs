// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Background color.
//!
//! More info: <https://www.ditig.com/256-colors-cheat-sheet>

use super::{extended_ansi256, extended_rgb, sgr};
use crate::{SGR_BG_BLACK, SGR_BG_BLUE, SGR_BG_BRIGHT_BLACK, SGR_BG_CYAN, SGR_BG_DEFAULT,
            SGR_BG_EXTENDED, SGR_BG_GREEN, SGR_BG_MAGENTA, SGR_BG_RED, SGR_BG_WHITE,
            SGR_BG_YELLOW, Sgr, SgrAnsi256, SgrRgb};

/// Restores the terminal's default background color.
pub const DEFAULT: Sgr = sgr(SGR_BG_DEFAULT);

pub const BLACK: Sgr = sgr(SGR_BG_BLACK);
pub const RED: Sgr = sgr(SGR_BG_RED);
pub const GREEN: Sgr = sgr(SGR_BG_GREEN);
pub const YELLOW: Sgr = sgr(SGR_BG_YELLOW);
pub const BLUE: Sgr = sgr(SGR_BG_BLUE);
pub const MAGENTA: Sgr = sgr(SGR_BG_MAGENTA);
pub const CYAN: Sgr = sgr(SGR_BG_CYAN);
pub const WHITE: Sgr = sgr(SGR_BG_WHITE);

/// Same as [`bright::BLACK`].
pub const GRAY: Sgr = sgr(SGR_BG_BRIGHT_BLACK);

/// ANSI 256 palette color, `ESC [ 48 ; 5 ; index m`.
#[must_use]
pub const fn set(index: u8) -> SgrAnsi256 { extended_ansi256(SGR_BG_EXTENDED, index) }

/// 24-bit color, `ESC [ 48 ; 2 ; r ; g ; b m`.
#[must_use]
pub const fn rgb(red: u8, green: u8, blue: u8) -> SgrRgb {
    extended_rgb(SGR_BG_EXTENDED, red, green, blue)
}

/// Bright versions of the colors.
pub mod bright {
    use super::sgr;
    use crate::{SGR_BG_BRIGHT_BLACK, SGR_BG_BRIGHT_BLUE, SGR_BG_BRIGHT_CYAN,
                SGR_BG_BRIGHT_GREEN, SGR_BG_BRIGHT_MAGENTA, SGR_BG_BRIGHT_RED,
                SGR_BG_BRIGHT_WHITE, SGR_BG_BRIGHT_YELLOW, Sgr};

    pub const BLACK: Sgr = sgr(SGR_BG_BRIGHT_BLACK);
    pub const RED: Sgr = sgr(SGR_BG_BRIGHT_RED);
    pub const GREEN: Sgr = sgr(SGR_BG_BRIGHT_GREEN);
    pub const YELLOW: Sgr = sgr(SGR_BG_BRIGHT_YELLOW);
    pub const BLUE: Sgr = sgr(SGR_BG_BRIGHT_BLUE);
    pub const MAGENTA: Sgr = sgr(SGR_BG_BRIGHT_MAGENTA);
    pub const CYAN: Sgr = sgr(SGR_BG_BRIGHT_CYAN);
    pub const WHITE: Sgr = sgr(SGR_BG_BRIGHT_WHITE);
}
