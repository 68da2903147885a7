// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{AnyCsi, BufTextStorage, PushStr, RESET, WriteOptions, WriteToBuf};

/// Some text and the sequences to emit in front of it. It has three fields:
/// - `text` - the text to print.
/// - `sequences` - the [`AnyCsi`] values written before the text, in order. They are
///   owned in a stack allocated buffer, which spills to the heap if it gets larger than
///   [`sizing::MAX_STYLED_TEXT_SEQUENCES`].
/// - `reset_after` - whether [`RESET`] is written after the text, so the style doesn't
///   leak into whatever is printed next. On by default.
///
/// Nothing is checked for conflicts: `fg::RED` followed by `fg::BLUE` is written as is,
/// and the terminal applies the last one.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_csi::{CsiStyledText, WriteToBuf, bg, fg, text};
///
/// let warning = CsiStyledText::new("careful")
///     .with(text::BOLD)
///     .with(fg::rgb(255, 175, 0))
///     .with(bg::set(236));
/// assert_eq!(
///     warning.render(),
///     "\x1b[1m\x1b[38;2;255;175;0m\x1b[48;5;236mcareful\x1b[0m"
/// );
///
/// let plain = CsiStyledText::new("no reset").with(text::ITALIC).without_reset();
/// assert_eq!(plain.to_string(), "\x1b[3mno reset");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsiStyledText<'a> {
    pub text: &'a str,
    pub sequences: sizing::InlineVecSequences,
    pub reset_after: bool,
}

pub mod sizing {
    use super::{AnyCsi, SmallVec};

    /// Bold, italic, a foreground, a background, and an underline color still leave
    /// room to spare.
    pub const MAX_STYLED_TEXT_SEQUENCES: usize = 8;
    pub type InlineVecSequences = SmallVec<[AnyCsi; MAX_STYLED_TEXT_SEQUENCES]>;

    // PERF: If you make this number too large, eg: more than 128, it is copied around on
    // the stack more than it is worth.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 64;
}

/// Shorthand for [`CsiStyledText::new()`] followed by one [`CsiStyledText::with()`].
#[must_use]
pub fn styled(text: &str, sequence: impl Into<AnyCsi>) -> CsiStyledText<'_> {
    CsiStyledText::new(text).with(sequence)
}

mod csi_styled_text_impl {
    use super::{AnyCsi, BufTextStorage, CsiStyledText, SmallString, Write, WriteOptions,
                io, sizing};
    use crate::WriteToBuf;

    impl<'a> CsiStyledText<'a> {
        #[must_use]
        pub fn new(text: &'a str) -> Self {
            Self {
                text,
                sequences: sizing::InlineVecSequences::new(),
                reset_after: true,
            }
        }

        /// Append a sequence, written after the ones already added.
        #[must_use]
        pub fn with(mut self, sequence: impl Into<AnyCsi>) -> Self {
            self.sequences.push(sequence.into());
            self
        }

        #[must_use]
        pub fn without_reset(mut self) -> Self {
            self.reset_after = false;
            self
        }

        pub fn println(&self) {
            println!("{self}");
        }

        pub fn print(&self) {
            print!("{self}");
        }

        /// This is different than the [`std::fmt::Display`] trait implementation, because
        /// it doesn't allocate a new [String], but instead allocates an inline buffer on
        /// the stack. If this buffer gets larger than
        /// [`sizing::DEFAULT_STRING_STORAGE_SIZE`], it will spill to the heap.
        #[must_use]
        pub fn to_small_str(&self) -> SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            let mut acc = SmallString::new();
            self.write_to_buf(&mut acc);
            acc
        }

        /// Render, append the line ending (if any), and write it all to `sink` in a
        /// single call. Flushes afterwards if asked to.
        ///
        /// # Errors
        ///
        /// Only the sink can fail; its [`io::Error`] is returned unchanged.
        pub fn write_to_with(
            &self,
            sink: &mut impl Write,
            options: impl Into<WriteOptions>,
        ) -> io::Result<()> {
            let options = options.into();

            let mut acc = BufTextStorage::new();
            self.write_to_buf(&mut acc);
            if let Some(line_ending) = options.line_ending {
                acc.push_str(line_ending.as_str());
            }

            sink.write_all(acc.as_bytes())?;
            if options.flush {
                sink.flush()?;
            }

            tracing::trace!(
                bytes = acc.len(),
                sequences = self.sequences.len(),
                ?options,
                "wrote styled text"
            );
            Ok(())
        }
    }
}

impl WriteToBuf for CsiStyledText<'_> {
    fn write_to_buf(&self, acc: &mut impl PushStr) {
        for sequence in &self.sequences {
            sequence.write_to_buf(acc);
        }
        acc.push_str(self.text);
        if self.reset_after {
            RESET.write_to_buf(acc);
        }
    }
}

mod display_trait_impl {
    use std::fmt::{Display, Formatter, Result};

    use super::CsiStyledText;
    use crate::RESET;

    impl Display for CsiStyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            for sequence in &self.sequences {
                write!(f, "{sequence}")?;
            }
            f.write_str(self.text)?;
            if self.reset_after {
                write!(f, "{RESET}")?;
            }
            Ok(())
        }
    }
}
