// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Underline color. Only changes the color of the line itself; turn the line on w/
//! [`crate::text::UNDERLINE`].

use super::{extended_ansi256, extended_rgb, sgr};
use crate::{SGR_UNDERLINE_DEFAULT, SGR_UNDERLINE_EXTENDED, Sgr, SgrAnsi256, SgrRgb};

/// Restores the default underline color (same as the foreground).
pub const DEFAULT: Sgr = sgr(SGR_UNDERLINE_DEFAULT);

/// ANSI 256 palette color, `ESC [ 58 ; 5 ; index m`.
#[must_use]
pub const fn set(index: u8) -> SgrAnsi256 {
    extended_ansi256(SGR_UNDERLINE_EXTENDED, index)
}

/// 24-bit color, `ESC [ 58 ; 2 ; r ; g ; b m`.
#[must_use]
pub const fn rgb(red: u8, green: u8, blue: u8) -> SgrRgb {
    extended_rgb(SGR_UNDERLINE_EXTENDED, red, green, blue)
}
