// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

//! # `r3bl_ansi_csi`
//!
//! Byte exact ANSI / VT100 CSI (Control Sequence Introducer) escape sequences for
//! terminal output: caret movement, erasing, scrolling, text styles, and foreground,
//! background, & underline colors. This crate only encodes. It never reads from the
//! terminal, tracks the caret, or detects what the terminal supports.
//!
//! ## The value type
//!
//! Every sequence is a [`Csi<N>`]: `N` byte parameters plus a terminator character.
//! The arity is part of the type, so `cursor::move_to()` returns a `Csi<2>`, and the
//! compiler rejects a caller that tries to build one w/ three numbers.
//!
//! ```text
//! ESC '[' [ param0 (';' paramN)* ] terminator
//! ```
//!
//! ## The catalog
//!
//! Argument free sequences are constants, parameterized ones are `const fn` factories.
//!
//! ```rust
//! use r3bl_ansi_csi::{RESET, WriteToBuf, bg, cursor, erase, fg, text};
//!
//! assert_eq!(fg::RED.render(), "\x1b[31m");
//! assert_eq!(bg::WHITE.render(), "\x1b[47m");
//! assert_eq!(RESET.render(), "\x1b[0m");
//! assert_eq!(cursor::home().render(), "\x1b[H");
//! assert_eq!(cursor::up(5).render(), "\x1b[5A");
//! assert_eq!(cursor::move_to(3, 7).render(), "\x1b[3;7H");
//! assert_eq!(fg::rgb(1, 2, 3).render(), "\x1b[38;2;1;2;3m");
//! assert_eq!(erase::all(erase::EraseDisplayMode::Whole).render(), "\x1b[2J");
//!
//! // Composition is concatenation.
//! let mut acc = String::new();
//! text::BOLD.write_to_buf(&mut acc);
//! fg::RED.write_to_buf(&mut acc);
//! assert_eq!(acc, "\x1b[1m\x1b[31m");
//! ```
//!
//! ## Output
//!
//! Rendering is explicit. [`WriteToBuf`] appends to a [`String`] or a stack allocated
//! [`InlineString`], or writes straight to any [`std::io::Write`] sink. Styled text w/
//! a trailing reset is [`CsiStyledText`], and the line ending & flush behavior of its
//! writes is set w/ [`WriteOptions`].
//!
//! ## Other ways in
//!
//! - [`lookup()`] finds an argument free entry by name, eg: `"fg::bright::red"`.
//! - [`Csi::try_from_params()`] builds a sequence whose shape is only known at runtime,
//!   and reports a bad shape as a [`CsiShapeError`].
//! - [`literal`] has the same sequences as `&'static str`, built at compile time.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod catalog;
pub mod literal;
mod any_csi;
mod constants;
mod csi;
mod error;
mod serialize;
mod styled_text;
mod write_options;

#[cfg(test)]
mod test_fixtures;

// Re-export.
pub use any_csi::*;
pub use catalog::{CatalogEntry, FIXED_ENTRIES, RESET, bg, cursor, erase, fg, lookup,
                  scroll, sgr, text, try_lookup, underline};
pub use constants::*;
pub use csi::*;
pub use error::*;
pub use serialize::*;
pub use styled_text::*;
pub use write_options::*;
