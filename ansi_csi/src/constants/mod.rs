// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Centralized CSI escape sequence constants.
//!
//! Both rendering paths ([`crate::Csi`] values and the [`crate::literal`] strings) are
//! built from these, so the two can never drift apart.
//!
//! ## Organization
//!
//! - **csi**: the introducer, the parameter separator, and one terminator per control
//!   function
//! - **sgr**: SGR parameter values for text attributes, colors, and the extended color
//!   mode selectors

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod csi;
mod sgr;

// Public re-exports (flat API) for convenience.
pub use csi::*;
pub use sgr::*;
