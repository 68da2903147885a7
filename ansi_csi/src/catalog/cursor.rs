// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caret movement. Rows and columns are 1 based; `0` is passed through as is and most
//! terminals treat it as `1`.
//!
//! `move` is a keyword, so the absolute moves are [`move_to()`] and
//! [`move_to_column()`].
//!
//! Counts have no default. Pass `1` for a single step, eg: `up(1)`; the terminal reads
//! an omitted count as `1` too, but every factory here always writes the number.

use crate::{CHA_CURSOR_COLUMN, CNL_CURSOR_NEXT_LINE, CPL_CURSOR_PREV_LINE,
            CUB_CURSOR_BACKWARD, CUD_CURSOR_DOWN, CUF_CURSOR_FORWARD,
            CUP_CURSOR_POSITION, CUU_CURSOR_UP, Csi, DSR_CURSOR_POSITION_REQUEST,
            DSR_DEVICE_STATUS, HVP_CURSOR_POSITION, RCP_RESTORE_CURSOR,
            SCP_SAVE_CURSOR};

/// CUU, `ESC [ n A`.
#[must_use]
pub const fn up(lines: u8) -> Csi<1> { Csi::new([lines], CUU_CURSOR_UP) }

/// CUD, `ESC [ n B`.
#[must_use]
pub const fn down(lines: u8) -> Csi<1> { Csi::new([lines], CUD_CURSOR_DOWN) }

/// CUF, `ESC [ n C`.
#[must_use]
pub const fn forward(columns: u8) -> Csi<1> { Csi::new([columns], CUF_CURSOR_FORWARD) }

/// CUB, `ESC [ n D`.
#[must_use]
pub const fn back(columns: u8) -> Csi<1> { Csi::new([columns], CUB_CURSOR_BACKWARD) }

/// CNL, start of the line `lines` down.
#[must_use]
pub const fn next_line(lines: u8) -> Csi<1> { Csi::new([lines], CNL_CURSOR_NEXT_LINE) }

/// CPL, start of the line `lines` up.
#[must_use]
pub const fn prev_line(lines: u8) -> Csi<1> { Csi::new([lines], CPL_CURSOR_PREV_LINE) }

/// CHA, absolute column on the current row.
#[must_use]
pub const fn move_to_column(col: u8) -> Csi<1> { Csi::new([col], CHA_CURSOR_COLUMN) }

/// CUP, `ESC [ row ; col H`.
#[must_use]
pub const fn move_to(row: u8, col: u8) -> Csi<2> { Csi::new([row, col], CUP_CURSOR_POSITION) }

/// HVP, `ESC [ row ; col f`. Same effect as [`move_to()`] on every modern terminal.
#[must_use]
pub const fn position(row: u8, col: u8) -> Csi<2> {
    Csi::new([row, col], HVP_CURSOR_POSITION)
}

/// CUP w/ no parameters, top left corner.
#[must_use]
pub const fn home() -> Csi<0> { Csi::bare(CUP_CURSOR_POSITION) }

/// SCP.
#[must_use]
pub const fn save() -> Csi<0> { Csi::bare(SCP_SAVE_CURSOR) }

/// RCP, back to the position stored by [`save()`].
#[must_use]
pub const fn restore() -> Csi<0> { Csi::bare(RCP_RESTORE_CURSOR) }

/// DSR `6n`. The terminal answers on its input stream w/ `ESC [ row ; col R`; reading
/// that answer is up to the caller.
#[must_use]
pub const fn report_position() -> Csi<1> {
    Csi::new([DSR_CURSOR_POSITION_REQUEST], DSR_DEVICE_STATUS)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::WriteToBuf;

    #[test_case(up(5), "\x1b[5A" ; "up")]
    #[test_case(up(0), "\x1b[0A" ; "up zero")]
    #[test_case(up(255), "\x1b[255A" ; "up max")]
    #[test_case(down(2), "\x1b[2B" ; "down")]
    #[test_case(forward(12), "\x1b[12C" ; "forward")]
    #[test_case(back(1), "\x1b[1D" ; "back")]
    #[test_case(next_line(3), "\x1b[3E" ; "next line")]
    #[test_case(prev_line(4), "\x1b[4F" ; "prev line")]
    #[test_case(move_to_column(40), "\x1b[40G" ; "column")]
    #[test_case(report_position(), "\x1b[6n" ; "report position")]
    fn test_single_param(seq: Csi<1>, expected: &str) {
        assert_eq!(seq.render(), expected);
    }

    #[test]
    fn test_move_to() {
        assert_eq!(move_to(3, 7).render(), "\x1b[3;7H");
        assert_eq!(position(3, 7).render(), "\x1b[3;7f");
    }

    #[test_case(home(), "\x1b[H" ; "home")]
    #[test_case(save(), "\x1b[s" ; "save")]
    #[test_case(restore(), "\x1b[u" ; "restore")]
    fn test_bare(seq: Csi<0>, expected: &str) {
        assert_eq!(seq.render(), expected);
    }

    #[test_case(up(1), "\x1b[1A" ; "up")]
    #[test_case(down(1), "\x1b[1B" ; "down")]
    #[test_case(forward(1), "\x1b[1C" ; "forward")]
    #[test_case(back(1), "\x1b[1D" ; "back")]
    #[test_case(next_line(1), "\x1b[1E" ; "next line")]
    #[test_case(prev_line(1), "\x1b[1F" ; "prev line")]
    fn test_single_step(seq: Csi<1>, expected: &str) {
        assert_eq!(seq.render(), expected);
    }

    #[test]
    fn test_home_is_not_move_to_one_one() {
        assert_ne!(home().render(), move_to(1, 1).render());
    }
}
