// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named CSI sequences, grouped by what they control.
//!
//! | Module          | Contents                                                         |
//! | :-------------- | :--------------------------------------------------------------- |
//! | [`text`]        | Bold, italic, blink, ... and their undo codes in [`text::un`]    |
//! | [`fg`]          | Foreground colors, 8-bit [`fg::set()`] and 24-bit [`fg::rgb()`]  |
//! | [`bg`]          | Background colors, same shape as [`fg`]                          |
//! | [`underline`]   | Underline color                                                  |
//! | [`cursor`]      | Relative & absolute moves, save/restore, position report         |
//! | [`erase`]       | Erase in display & in line                                       |
//! | [`scroll`]      | Page scroll up & down                                            |
//!
//! Argument free entries are `const` items, so they are plain data w/ a `'static`
//! lifetime that any thread can read. Parameterized entries are `const fn` factories
//! whose return type fixes the arity of the control function.
//!
//! Every argument free entry is also listed by name in [`FIXED_ENTRIES`], which backs
//! [`lookup()`] for callers that pick a style from eg: a config file.

use crate::{AnyCsi, CatalogError, CommonResult, Csi, SGR_COLOR_MODE_ANSI256,
            SGR_COLOR_MODE_RGB, SGR_RESET, SGR_SET_GRAPHICS, Sgr, SgrAnsi256, SgrRgb};

pub mod bg;
pub mod cursor;
pub mod erase;
pub mod fg;
pub mod scroll;
pub mod text;
pub mod underline;

/// Reset or normal. All attributes become turned off.
pub const RESET: Sgr = sgr(SGR_RESET);

/// Any single parameter SGR, eg: `sgr(1)` is bold.
#[must_use]
pub const fn sgr(code: u8) -> Sgr { Csi::new([code], SGR_SET_GRAPHICS) }

/// `selector;5;index`, where the selector picks foreground, background, or underline.
pub(crate) const fn extended_ansi256(selector: u8, index: u8) -> SgrAnsi256 {
    Csi::new([selector, SGR_COLOR_MODE_ANSI256, index], SGR_SET_GRAPHICS)
}

/// `selector;2;r;g;b`, where the selector picks foreground, background, or underline.
pub(crate) const fn extended_rgb(selector: u8, red: u8, green: u8, blue: u8) -> SgrRgb {
    Csi::new(
        [selector, SGR_COLOR_MODE_RGB, red, green, blue],
        SGR_SET_GRAPHICS,
    )
}

/// One argument free catalog entry, named by its module path in lower case.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub value: AnyCsi,
}

macro_rules! entries {
    ($($name:literal => $variant:ident($value:expr)),* $(,)?) => {
        &[$(CatalogEntry { name: $name, value: AnyCsi::$variant($value) }),*]
    };
}

/// Every argument free entry of the catalog. Some entries share a value, eg: `fg::gray`
/// and `fg::bright::black`.
#[rustfmt::skip]
pub static FIXED_ENTRIES: &[CatalogEntry] = entries![
    "reset"                   => One(RESET),

    "text::bold"              => One(text::BOLD),
    "text::faint"             => One(text::FAINT),
    "text::italic"            => One(text::ITALIC),
    "text::underline"         => One(text::UNDERLINE),
    "text::double_underline"  => One(text::DOUBLE_UNDERLINE),
    "text::blink"             => One(text::BLINK),
    "text::blink_fast"        => One(text::BLINK_FAST),
    "text::invert"            => One(text::INVERT),
    "text::revert"            => One(text::REVERT),
    "text::conceal"           => One(text::CONCEAL),
    "text::reveal"            => One(text::REVEAL),
    "text::strike"            => One(text::STRIKE),
    "text::overline"          => One(text::OVERLINE),

    "text::un::bold"             => One(text::un::BOLD),
    "text::un::faint"            => One(text::un::FAINT),
    "text::un::italic"           => One(text::un::ITALIC),
    "text::un::underline"        => One(text::un::UNDERLINE),
    "text::un::double_underline" => One(text::un::DOUBLE_UNDERLINE),
    "text::un::blink"            => One(text::un::BLINK),
    "text::un::invert"           => One(text::un::INVERT),
    "text::un::conceal"          => One(text::un::CONCEAL),
    "text::un::strike"           => One(text::un::STRIKE),
    "text::un::overline"         => One(text::un::OVERLINE),

    "fg::default"             => One(fg::DEFAULT),
    "fg::black"               => One(fg::BLACK),
    "fg::red"                 => One(fg::RED),
    "fg::green"               => One(fg::GREEN),
    "fg::yellow"              => One(fg::YELLOW),
    "fg::blue"                => One(fg::BLUE),
    "fg::magenta"             => One(fg::MAGENTA),
    "fg::cyan"                => One(fg::CYAN),
    "fg::white"               => One(fg::WHITE),
    "fg::gray"                => One(fg::GRAY),
    "fg::bright::black"       => One(fg::bright::BLACK),
    "fg::bright::red"         => One(fg::bright::RED),
    "fg::bright::green"       => One(fg::bright::GREEN),
    "fg::bright::yellow"      => One(fg::bright::YELLOW),
    "fg::bright::blue"        => One(fg::bright::BLUE),
    "fg::bright::magenta"     => One(fg::bright::MAGENTA),
    "fg::bright::cyan"        => One(fg::bright::CYAN),
    "fg::bright::white"       => One(fg::bright::WHITE),

    "bg::default"             => One(bg::DEFAULT),
    "bg::black"               => One(bg::BLACK),
    "bg::red"                 => One(bg::RED),
    "bg::green"               => One(bg::GREEN),
    "bg::yellow"              => One(bg::YELLOW),
    "bg::blue"                => One(bg::BLUE),
    "bg::magenta"             => One(bg::MAGENTA),
    "bg::cyan"                => One(bg::CYAN),
    "bg::white"               => One(bg::WHITE),
    "bg::gray"                => One(bg::GRAY),
    "bg::bright::black"       => One(bg::bright::BLACK),
    "bg::bright::red"         => One(bg::bright::RED),
    "bg::bright::green"       => One(bg::bright::GREEN),
    "bg::bright::yellow"      => One(bg::bright::YELLOW),
    "bg::bright::blue"        => One(bg::bright::BLUE),
    "bg::bright::magenta"     => One(bg::bright::MAGENTA),
    "bg::bright::cyan"        => One(bg::bright::CYAN),
    "bg::bright::white"       => One(bg::bright::WHITE),

    "underline::default"      => One(underline::DEFAULT),

    "cursor::home"            => Bare(cursor::home()),
    "cursor::save"            => Bare(cursor::save()),
    "cursor::restore"         => Bare(cursor::restore()),
    "cursor::report_position" => One(cursor::report_position()),
];

/// Find an argument free entry by its lower case module path, eg: `"fg::bright::red"`.
#[must_use]
pub fn lookup(name: &str) -> Option<AnyCsi> {
    FIXED_ENTRIES
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.value)
}

/// Same as [`lookup()`], but an unknown name is an error.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownEntry`] (as a [`miette::Report`]) if nothing in
/// [`FIXED_ENTRIES`] has that name.
pub fn try_lookup(name: &str) -> CommonResult<AnyCsi> {
    match lookup(name) {
        Some(value) => Ok(value),
        None => Err(CatalogError::UnknownEntry {
            name: name.to_string(),
        }
        .into()),
    }
}
