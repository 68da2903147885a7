// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequences as `&'static str` built at compile time, for places that want text
//! rather than a value, eg: `concat!` with a message, or a `const` table of prompts.
//!
//! This is a second path to the same bytes that [`crate::WriteToBuf`] produces. Nothing
//! is checked here: a macro takes whatever literals it is given, and the arity comes
//! from the macro's pattern alone.
//!
//! ```rust
//! use r3bl_ansi_csi::{cup, fg, fg_rgb, literal, WriteToBuf};
//!
//! const BANNER: &str = concat!(fg_rgb!(175, 215, 135), "hello", "\x1b[0m");
//! assert!(BANNER.starts_with(fg::rgb(175, 215, 135).render().as_str()));
//! assert_eq!(cup!(3, 7), "\x1b[3;7H");
//! assert_eq!(literal::FG_RED, "\x1b[31m");
//! ```

use const_format::formatcp;

use crate::{CSI_START, DSR_CURSOR_POSITION_REQUEST, DSR_DEVICE_STATUS,
            CUP_CURSOR_POSITION, RCP_RESTORE_CURSOR, SCP_SAVE_CURSOR, SGR_BG_BLACK,
            SGR_BG_BLUE, SGR_BG_BRIGHT_BLACK, SGR_BG_BRIGHT_BLUE, SGR_BG_BRIGHT_CYAN,
            SGR_BG_BRIGHT_GREEN, SGR_BG_BRIGHT_MAGENTA, SGR_BG_BRIGHT_RED,
            SGR_BG_BRIGHT_WHITE, SGR_BG_BRIGHT_YELLOW, SGR_BG_CYAN, SGR_BG_DEFAULT,
            SGR_BG_GREEN, SGR_BG_MAGENTA, SGR_BG_RED, SGR_BG_WHITE, SGR_BG_YELLOW,
            SGR_BOLD, SGR_CONCEAL, SGR_DOUBLE_UNDERLINE, SGR_FAINT, SGR_FG_BLACK,
            SGR_FG_BLUE, SGR_FG_BRIGHT_BLACK, SGR_FG_BRIGHT_BLUE, SGR_FG_BRIGHT_CYAN,
            SGR_FG_BRIGHT_GREEN, SGR_FG_BRIGHT_MAGENTA, SGR_FG_BRIGHT_RED,
            SGR_FG_BRIGHT_WHITE, SGR_FG_BRIGHT_YELLOW, SGR_FG_CYAN, SGR_FG_DEFAULT,
            SGR_FG_GREEN, SGR_FG_MAGENTA, SGR_FG_RED, SGR_FG_WHITE, SGR_FG_YELLOW,
            SGR_INVERT, SGR_ITALIC, SGR_NORMAL_INTENSITY, SGR_NOT_BLINKING,
            SGR_NOT_INVERTED, SGR_NOT_ITALIC, SGR_NOT_OVERLINED, SGR_NOT_STRUCK,
            SGR_NOT_UNDERLINED, SGR_OVERLINE, SGR_RAPID_BLINK, SGR_RESET, SGR_REVEAL,
            SGR_SET_GRAPHICS, SGR_SLOW_BLINK, SGR_STRIKE, SGR_UNDERLINE,
            SGR_UNDERLINE_DEFAULT};

/// `ESC [ p0 ; p1 ; ... t` from literal parameters and a literal terminator. The other
/// macros in this module are shorthands for this one.
#[macro_export]
macro_rules! csi_literal {
    ($terminator:literal) => {
        ::core::concat!("\x1b[", $terminator)
    };
    ($terminator:literal; $first:literal $(, $rest:literal)*) => {
        ::core::concat!("\x1b[", $first $(, ";", $rest)*, $terminator)
    };
}

// ╭┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄╮
// │ cursor, erase, scroll │
// ╯                       ╰┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄

/// Cursor up.
#[macro_export]
macro_rules! cuu { ($n:literal) => { $crate::csi_literal!("A"; $n) }; }

/// Cursor down.
#[macro_export]
macro_rules! cud { ($n:literal) => { $crate::csi_literal!("B"; $n) }; }

/// Cursor forward.
#[macro_export]
macro_rules! cuf { ($n:literal) => { $crate::csi_literal!("C"; $n) }; }

/// Cursor back.
#[macro_export]
macro_rules! cub { ($n:literal) => { $crate::csi_literal!("D"; $n) }; }

/// Cursor to the start of the next line.
#[macro_export]
macro_rules! cnl { ($n:literal) => { $crate::csi_literal!("E"; $n) }; }

/// Cursor to the start of the previous line.
#[macro_export]
macro_rules! cpl { ($n:literal) => { $crate::csi_literal!("F"; $n) }; }

/// Cursor to an absolute column.
#[macro_export]
macro_rules! cha { ($col:literal) => { $crate::csi_literal!("G"; $col) }; }

/// Cursor position. With no arguments this is home.
#[macro_export]
macro_rules! cup {
    () => { $crate::csi_literal!("H") };
    ($row:literal, $col:literal) => { $crate::csi_literal!("H"; $row, $col) };
}

/// Horizontal vertical position.
#[macro_export]
macro_rules! hvp {
    ($row:literal, $col:literal) => { $crate::csi_literal!("f"; $row, $col) };
}

/// Erase in display, `0..=3`.
#[macro_export]
macro_rules! ed { ($mode:literal) => { $crate::csi_literal!("J"; $mode) }; }

/// Erase in line, `0..=2`.
#[macro_export]
macro_rules! el { ($mode:literal) => { $crate::csi_literal!("K"; $mode) }; }

/// Scroll up.
#[macro_export]
macro_rules! su { ($n:literal) => { $crate::csi_literal!("S"; $n) }; }

/// Scroll down.
#[macro_export]
macro_rules! sd { ($n:literal) => { $crate::csi_literal!("T"; $n) }; }

// ╭┄┄┄┄┄┄┄┄┄┄┄┄┄╮
// │ SGR & color │
// ╯             ╰┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄

/// Select graphic rendition, one or more codes.
#[macro_export]
macro_rules! sgr {
    ($($code:literal),+ $(,)?) => { $crate::csi_literal!("m"; $($code),+) };
}

#[macro_export]
macro_rules! fg_set { ($index:literal) => { $crate::sgr!(38, 5, $index) }; }

#[macro_export]
macro_rules! fg_rgb {
    ($r:literal, $g:literal, $b:literal) => { $crate::sgr!(38, 2, $r, $g, $b) };
}

#[macro_export]
macro_rules! bg_set { ($index:literal) => { $crate::sgr!(48, 5, $index) }; }

#[macro_export]
macro_rules! bg_rgb {
    ($r:literal, $g:literal, $b:literal) => { $crate::sgr!(48, 2, $r, $g, $b) };
}

#[macro_export]
macro_rules! underline_set { ($index:literal) => { $crate::sgr!(58, 5, $index) }; }

#[macro_export]
macro_rules! underline_rgb {
    ($r:literal, $g:literal, $b:literal) => { $crate::sgr!(58, 2, $r, $g, $b) };
}

// ╭┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄╮
// │ literal constants │
// ╯                   ╰┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄

macro_rules! sgr_literals {
    ($($name:ident => $code:expr),* $(,)?) => {
        $(
            pub const $name: &str = formatcp!(
                "{csi}{code}{term}",
                csi = CSI_START,
                code = $code,
                term = SGR_SET_GRAPHICS
            );
        )*
    };
}

#[rustfmt::skip]
sgr_literals! {
    RESET                  => SGR_RESET,

    BOLD                   => SGR_BOLD,
    FAINT                  => SGR_FAINT,
    ITALIC                 => SGR_ITALIC,
    UNDERLINE              => SGR_UNDERLINE,
    DOUBLE_UNDERLINE       => SGR_DOUBLE_UNDERLINE,
    BLINK                  => SGR_SLOW_BLINK,
    BLINK_FAST             => SGR_RAPID_BLINK,
    INVERT                 => SGR_INVERT,
    REVERT                 => SGR_NOT_INVERTED,
    CONCEAL                => SGR_CONCEAL,
    REVEAL                 => SGR_REVEAL,
    STRIKE                 => SGR_STRIKE,
    OVERLINE               => SGR_OVERLINE,

    UN_BOLD                => SGR_NORMAL_INTENSITY,
    UN_FAINT               => SGR_NORMAL_INTENSITY,
    UN_ITALIC              => SGR_NOT_ITALIC,
    UN_UNDERLINE           => SGR_NOT_UNDERLINED,
    UN_DOUBLE_UNDERLINE    => SGR_NOT_UNDERLINED,
    UN_BLINK               => SGR_NOT_BLINKING,
    UN_INVERT              => SGR_NOT_INVERTED,
    UN_CONCEAL             => SGR_REVEAL,
    UN_STRIKE              => SGR_NOT_STRUCK,
    UN_OVERLINE            => SGR_NOT_OVERLINED,

    FG_DEFAULT             => SGR_FG_DEFAULT,
    FG_BLACK               => SGR_FG_BLACK,
    FG_RED                 => SGR_FG_RED,
    FG_GREEN               => SGR_FG_GREEN,
    FG_YELLOW              => SGR_FG_YELLOW,
    FG_BLUE                => SGR_FG_BLUE,
    FG_MAGENTA             => SGR_FG_MAGENTA,
    FG_CYAN                => SGR_FG_CYAN,
    FG_WHITE               => SGR_FG_WHITE,
    FG_GRAY                => SGR_FG_BRIGHT_BLACK,
    FG_BRIGHT_BLACK        => SGR_FG_BRIGHT_BLACK,
    FG_BRIGHT_RED          => SGR_FG_BRIGHT_RED,
    FG_BRIGHT_GREEN        => SGR_FG_BRIGHT_GREEN,
    FG_BRIGHT_YELLOW       => SGR_FG_BRIGHT_YELLOW,
    FG_BRIGHT_BLUE         => SGR_FG_BRIGHT_BLUE,
    FG_BRIGHT_MAGENTA      => SGR_FG_BRIGHT_MAGENTA,
    FG_BRIGHT_CYAN         => SGR_FG_BRIGHT_CYAN,
    FG_BRIGHT_WHITE        => SGR_FG_BRIGHT_WHITE,

    BG_DEFAULT             => SGR_BG_DEFAULT,
    BG_BLACK               => SGR_BG_BLACK,
    BG_RED                 => SGR_BG_RED,
    BG_GREEN               => SGR_BG_GREEN,
    BG_YELLOW              => SGR_BG_YELLOW,
    BG_BLUE                => SGR_BG_BLUE,
    BG_MAGENTA             => SGR_BG_MAGENTA,
    BG_CYAN                => SGR_BG_CYAN,
    BG_WHITE               => SGR_BG_WHITE,
    BG_GRAY                => SGR_BG_BRIGHT_BLACK,
    BG_BRIGHT_BLACK        => SGR_BG_BRIGHT_BLACK,
    BG_BRIGHT_RED          => SGR_BG_BRIGHT_RED,
    BG_BRIGHT_GREEN        => SGR_BG_BRIGHT_GREEN,
    BG_BRIGHT_YELLOW       => SGR_BG_BRIGHT_YELLOW,
    BG_BRIGHT_BLUE         => SGR_BG_BRIGHT_BLUE,
    BG_BRIGHT_MAGENTA      => SGR_BG_BRIGHT_MAGENTA,
    BG_BRIGHT_CYAN         => SGR_BG_BRIGHT_CYAN,
    BG_BRIGHT_WHITE        => SGR_BG_BRIGHT_WHITE,

    UNDERLINE_DEFAULT      => SGR_UNDERLINE_DEFAULT,
}

/// Cursor home, `ESC [ H`.
pub const HOME: &str = formatcp!("{csi}{term}", csi = CSI_START, term = CUP_CURSOR_POSITION);

/// Device status report, asks the terminal for the caret position.
pub const DSR: &str = formatcp!(
    "{csi}{code}{term}",
    csi = CSI_START,
    code = DSR_CURSOR_POSITION_REQUEST,
    term = DSR_DEVICE_STATUS
);

/// Save cursor position.
pub const SCP: &str = formatcp!("{csi}{term}", csi = CSI_START, term = SCP_SAVE_CURSOR);

/// Restore cursor position.
pub const RCP: &str = formatcp!("{csi}{term}", csi = CSI_START, term = RCP_RESTORE_CURSOR);
