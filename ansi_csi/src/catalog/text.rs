// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text styles. Undo codes live in [`un`].

use super::sgr;
use crate::{SGR_BOLD, SGR_CONCEAL, SGR_DOUBLE_UNDERLINE, SGR_FAINT, SGR_INVERT,
            SGR_ITALIC, SGR_NOT_INVERTED, SGR_OVERLINE, SGR_RAPID_BLINK, SGR_REVEAL,
            SGR_SLOW_BLINK, SGR_STRIKE, SGR_UNDERLINE, Sgr};

/// Bold or increased intensity.
pub const BOLD: Sgr = sgr(SGR_BOLD);

/// Faint, decreased intensity, or dim.
pub const FAINT: Sgr = sgr(SGR_FAINT);

pub const ITALIC: Sgr = sgr(SGR_ITALIC);

pub const UNDERLINE: Sgr = sgr(SGR_UNDERLINE);

pub const DOUBLE_UNDERLINE: Sgr = sgr(SGR_DOUBLE_UNDERLINE);

/// Blink less than 150 times a minute.
pub const BLINK: Sgr = sgr(SGR_SLOW_BLINK);

/// Blink 150 or more times a minute. Not widely supported.
pub const BLINK_FAST: Sgr = sgr(SGR_RAPID_BLINK);

/// Swap foreground and background colors.
pub const INVERT: Sgr = sgr(SGR_INVERT);

/// Swap foreground and background colors back. Same as [`un::INVERT`].
pub const REVERT: Sgr = sgr(SGR_NOT_INVERTED);

/// Hidden text.
pub const CONCEAL: Sgr = sgr(SGR_CONCEAL);

/// Visible text again. Same as [`un::CONCEAL`].
pub const REVEAL: Sgr = sgr(SGR_REVEAL);

pub const STRIKE: Sgr = sgr(SGR_STRIKE);

pub const OVERLINE: Sgr = sgr(SGR_OVERLINE);

/// Undoing text styles.
pub mod un {
    use super::sgr;
    use crate::{SGR_NORMAL_INTENSITY, SGR_NOT_BLINKING, SGR_NOT_INVERTED, SGR_NOT_ITALIC,
                SGR_NOT_OVERLINED, SGR_NOT_STRUCK, SGR_NOT_UNDERLINED, SGR_REVEAL, Sgr};

    /// Normal intensity, undoes both bold and faint.
    pub const BOLD: Sgr = sgr(SGR_NORMAL_INTENSITY);

    /// Normal intensity, undoes both bold and faint.
    pub const FAINT: Sgr = sgr(SGR_NORMAL_INTENSITY);

    pub const ITALIC: Sgr = sgr(SGR_NOT_ITALIC);

    /// Undoes both single and double underline.
    pub const UNDERLINE: Sgr = sgr(SGR_NOT_UNDERLINED);

    /// Undoes both single and double underline.
    pub const DOUBLE_UNDERLINE: Sgr = sgr(SGR_NOT_UNDERLINED);

    /// Stops both slow and fast blinking.
    pub const BLINK: Sgr = sgr(SGR_NOT_BLINKING);

    pub const INVERT: Sgr = sgr(SGR_NOT_INVERTED);

    pub const CONCEAL: Sgr = sgr(SGR_REVEAL);

    pub const STRIKE: Sgr = sgr(SGR_NOT_STRUCK);

    pub const OVERLINE: Sgr = sgr(SGR_NOT_OVERLINED);
}
