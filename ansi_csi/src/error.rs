// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types. Rendering itself can't fail; the only failure domain is building a
//! [`crate::Csi`] from values whose shape is only known at runtime, and looking up a
//! catalog entry by name.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
/// Works hand in hand w/ [`CsiShapeError`] and [`CatalogError`], both of which convert
/// into a [`miette::Report`] via `?`.
pub type CommonResult<T> = miette::Result<T>;

/// Errors from [`crate::Csi::try_from_params()`] and [`crate::Csi::try_from_wide()`].
///
/// | Variant               | Cause                                             |
/// | :-------------------- | :------------------------------------------------ |
/// | [`ArityMismatch`]     | Parameter count differs from the sequence's arity |
/// | [`ParamOutOfRange`]   | A widened parameter doesn't fit in a byte         |
///
/// [`ArityMismatch`]: Self::ArityMismatch
/// [`ParamOutOfRange`]: Self::ParamOutOfRange
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum CsiShapeError {
    #[error("CSI sequence '{terminator}' takes {expected} parameter(s), got {actual}")]
    #[diagnostic(
        code(r3bl_ansi_csi::shape::arity_mismatch),
        help("Each control function has a fixed parameter count, eg: 'H' takes 2")
    )]
    ArityMismatch {
        expected: usize,
        actual: usize,
        terminator: char,
    },

    #[error(
        "Parameter {index} of CSI sequence '{terminator}' is {value}, \
         which does not fit in a byte"
    )]
    #[diagnostic(
        code(r3bl_ansi_csi::shape::param_out_of_range),
        help("CSI parameters are limited to 0..=255")
    )]
    ParamOutOfRange {
        index: usize,
        value: u16,
        terminator: char,
    },
}

/// Errors from [`crate::catalog::try_lookup()`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum CatalogError {
    #[error("No catalog entry named '{name}'")]
    #[diagnostic(
        code(r3bl_ansi_csi::catalog::unknown_entry),
        help("Names are module paths in lower case, eg: 'fg::bright::red' or 'reset'")
    )]
    UnknownEntry { name: String },
}
