// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Erase in display (ED, `ESC [ n J`) and erase in line (EL, `ESC [ n K`).
//!
//! The extent is an enum per control function, so illegal values are unrepresentable:
//! eg: scrollback can only be passed to [`all()`], since a line has no scrollback.
//! Erasing never moves the caret.

use strum_macros::{EnumCount, EnumIter};

use crate::{Csi, ED_ERASE_DISPLAY, EL_ERASE_LINE};

/// How much of the screen [`all()`] erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum EraseDisplayMode {
    /// From the caret (inclusive) to the end of the screen (ED 0).
    FromCaret = 0,

    /// From the start of the screen to the caret, inclusive (ED 1).
    ToCaret = 1,

    /// Entire screen (ED 2), like the `clear` command.
    #[default]
    Whole = 2,

    /// Entire screen and the scrollback buffer (ED 3). This is an xterm extension.
    WholeAndScrollback = 3,
}

impl EraseDisplayMode {
    #[must_use]
    pub const fn as_u8(self) -> u8 { self as u8 }
}

/// How much of the current line [`line()`] erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum EraseLineMode {
    /// From the caret (inclusive) to the end of the line (EL 0).
    FromCaret = 0,

    /// From the start of the line to the caret, inclusive (EL 1).
    ToCaret = 1,

    /// Entire line (EL 2).
    #[default]
    Whole = 2,
}

impl EraseLineMode {
    #[must_use]
    pub const fn as_u8(self) -> u8 { self as u8 }
}

/// ED. Use [`EraseDisplayMode::default()`] to clear the whole screen.
#[must_use]
pub const fn all(mode: EraseDisplayMode) -> Csi<1> {
    Csi::new([mode.as_u8()], ED_ERASE_DISPLAY)
}

/// EL.
#[must_use]
pub const fn line(mode: EraseLineMode) -> Csi<1> { Csi::new([mode.as_u8()], EL_ERASE_LINE) }
