// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Whole page scrolling. New lines scrolled in are blank; the caret doesn't move.
//!
//! Pass `1` to scroll a single line, there is no default count.

use crate::{Csi, SD_SCROLL_DOWN, SU_SCROLL_UP};

/// SU, content moves up by `lines`.
#[must_use]
pub const fn up(lines: u8) -> Csi<1> { Csi::new([lines], SU_SCROLL_UP) }

/// SD, content moves down by `lines`.
#[must_use]
pub const fn down(lines: u8) -> Csi<1> { Csi::new([lines], SD_SCROLL_DOWN) }
