// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI sequencing constants: introducer, separator, and terminators.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#CSI_(Control_Sequence_Introducer)_sequences>
//! - <https://vt100.net/docs/vt100-ug/chapter3.html>

/// Control Sequence Introducer: `ESC [`.
pub const CSI_START: &str = "\x1b[";

/// Separates two numeric parameters inside one sequence.
pub const CSI_PARAM_SEPARATOR: char = ';';

/// Cursor Up (CUU) - `ESC [ n A`
pub const CUU_CURSOR_UP: char = 'A';

/// Cursor Down (CUD) - `ESC [ n B`
pub const CUD_CURSOR_DOWN: char = 'B';

/// Cursor Forward (CUF) - `ESC [ n C`
pub const CUF_CURSOR_FORWARD: char = 'C';

/// Cursor Backward (CUB) - `ESC [ n D`
pub const CUB_CURSOR_BACKWARD: char = 'D';

/// Cursor Next Line (CNL) - `ESC [ n E`
pub const CNL_CURSOR_NEXT_LINE: char = 'E';

/// Cursor Previous Line (CPL) - `ESC [ n F`
pub const CPL_CURSOR_PREV_LINE: char = 'F';

/// Cursor Horizontal Absolute (CHA) - `ESC [ n G`
pub const CHA_CURSOR_COLUMN: char = 'G';

/// Cursor Position (CUP) - `ESC [ row ; col H`
pub const CUP_CURSOR_POSITION: char = 'H';

/// Horizontal Vertical Position (HVP) - `ESC [ row ; col f`
pub const HVP_CURSOR_POSITION: char = 'f';

/// Erase in Display (ED) - `ESC [ n J`
pub const ED_ERASE_DISPLAY: char = 'J';

/// Erase in Line (EL) - `ESC [ n K`
pub const EL_ERASE_LINE: char = 'K';

/// Scroll Up (SU) - `ESC [ n S`
pub const SU_SCROLL_UP: char = 'S';

/// Scroll Down (SD) - `ESC [ n T`
pub const SD_SCROLL_DOWN: char = 'T';

/// Select Graphic Rendition (SGR) - `ESC [ n m`
pub const SGR_SET_GRAPHICS: char = 'm';

/// Device Status Report (DSR) - `ESC [ n n`
pub const DSR_DEVICE_STATUS: char = 'n';

/// Save Current Cursor Position (SCP) - `ESC [ s`
pub const SCP_SAVE_CURSOR: char = 's';

/// Restore Saved Cursor Position (RCP) - `ESC [ u`
pub const RCP_RESTORE_CURSOR: char = 'u';

/// DSR parameter asking the terminal to report the cursor position as
/// `ESC [ row ; col R` on its input stream.
pub const DSR_CURSOR_POSITION_REQUEST: u8 = 6;
