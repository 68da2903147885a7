// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rendering [`Csi`] values into their canonical text form.
//!
//! ```text
//! ESC '[' [ param0 (';' paramN)* ] terminator
//! ```
//!
//! Each parameter is written in decimal w/ no leading zeros. A [`Csi<0>`] is the
//! introducer followed directly by the terminator. Several sequences rendered back to
//! back are simply concatenated; each one keeps its own introducer and terminator.
//!
//! ## Performance
//!
//! Numbers are converted using a lookup table for all possible `u8` values instead of
//! going through the formatting machinery, since SGR and cursor sequences are emitted
//! for every styled segment of every frame. Output goes into anything implementing
//! [`PushStr`]: a heap [`String`] via [`WriteToBuf::render()`], or a stack allocated
//! [`InlineString`] via [`WriteToBuf::render_small()`], which fits every sequence in the
//! catalog w/out spilling to the heap.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::{fmt::{Display, Formatter, Result},
          io::{self, Write}};

use smallstr::SmallString;

use crate::{CSI_PARAM_SEPARATOR, CSI_START, Csi};

/// Heap backed buffer for rendered output.
pub type BufTextStorage = String;

/// The longest catalog sequence is `ESC [ 38;2;255;255;255 m`, 19 bytes. Any five
/// parameter sequence fits, at most `ESC [ 255;255;255;255;255 m`, 22 bytes.
pub const INLINE_STRING_CAPACITY: usize = 24;

/// Stack backed buffer for rendered output. Spills to the heap past
/// [`INLINE_STRING_CAPACITY`] bytes.
pub type InlineString = SmallString<[u8; INLINE_STRING_CAPACITY]>;

/// Lookup table for u8 to string conversion to avoid runtime formatting overhead.
/// Pre-computed at compile time for all possible u8 values (0-255).
const U8_STRINGS: [&str; 256] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
    "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29",
    "30", "31", "32", "33", "34", "35", "36", "37", "38", "39", "40", "41", "42", "43",
    "44", "45", "46", "47", "48", "49", "50", "51", "52", "53", "54", "55", "56", "57",
    "58", "59", "60", "61", "62", "63", "64", "65", "66", "67", "68", "69", "70", "71",
    "72", "73", "74", "75", "76", "77", "78", "79", "80", "81", "82", "83", "84", "85",
    "86", "87", "88", "89", "90", "91", "92", "93", "94", "95", "96", "97", "98", "99",
    "100", "101", "102", "103", "104", "105", "106", "107", "108", "109", "110", "111",
    "112", "113", "114", "115", "116", "117", "118", "119", "120", "121", "122", "123",
    "124", "125", "126", "127", "128", "129", "130", "131", "132", "133", "134", "135",
    "136", "137", "138", "139", "140", "141", "142", "143", "144", "145", "146", "147",
    "148", "149", "150", "151", "152", "153", "154", "155", "156", "157", "158", "159",
    "160", "161", "162", "163", "164", "165", "166", "167", "168", "169", "170", "171",
    "172", "173", "174", "175", "176", "177", "178", "179", "180", "181", "182", "183",
    "184", "185", "186", "187", "188", "189", "190", "191", "192", "193", "194", "195",
    "196", "197", "198", "199", "200", "201", "202", "203", "204", "205", "206", "207",
    "208", "209", "210", "211", "212", "213", "214", "215", "216", "217", "218", "219",
    "220", "221", "222", "223", "224", "225", "226", "227", "228", "229", "230", "231",
    "232", "233", "234", "235", "236", "237", "238", "239", "240", "241", "242", "243",
    "244", "245", "246", "247", "248", "249", "250", "251", "252", "253", "254", "255",
];

/// Append only text buffer. Appending to memory has no failure mode, so unlike
/// [`std::fmt::Write`] nothing here returns a [`Result`].
pub trait PushStr {
    fn push_str(&mut self, text: &str);
    fn push(&mut self, ch: char);
}

impl PushStr for String {
    fn push_str(&mut self, text: &str) { String::push_str(self, text); }
    fn push(&mut self, ch: char) { String::push(self, ch); }
}

impl<A: smallvec::Array<Item = u8>> PushStr for SmallString<A> {
    fn push_str(&mut self, text: &str) { SmallString::push_str(self, text); }
    fn push(&mut self, ch: char) { SmallString::push(self, ch); }
}

/// The serialization algorithm, shared by every arity.
pub fn write_csi(acc: &mut impl PushStr, params: &[u8], terminator: char) {
    acc.push_str(CSI_START);
    if let Some((first, rest)) = params.split_first() {
        acc.push_str(U8_STRINGS[usize::from(*first)]);
        for param in rest {
            acc.push(CSI_PARAM_SEPARATOR);
            acc.push_str(U8_STRINGS[usize::from(*param)]);
        }
    }
    acc.push(terminator);
}

/// Explicit rendering for anything that turns into escape sequences. Nothing here is
/// implicit: a caller decides when a value becomes text, and where that text goes.
pub trait WriteToBuf {
    /// Append the rendered form to `acc`.
    fn write_to_buf(&self, acc: &mut impl PushStr);

    #[must_use]
    fn render(&self) -> BufTextStorage {
        let mut acc = BufTextStorage::new();
        self.write_to_buf(&mut acc);
        acc
    }

    #[must_use]
    fn render_small(&self) -> InlineString {
        let mut acc = InlineString::new();
        self.write_to_buf(&mut acc);
        acc
    }

    /// Render and hand the bytes to `sink` in a single write.
    ///
    /// # Errors
    ///
    /// Only the sink can fail; its [`io::Error`] is returned unchanged.
    fn write_to(&self, sink: &mut impl Write) -> io::Result<()> {
        let rendered = self.render_small();
        sink.write_all(rendered.as_bytes())?;
        tracing::trace!(bytes = rendered.len(), "wrote CSI sequence");
        Ok(())
    }
}

impl<const N: usize> WriteToBuf for Csi<N> {
    fn write_to_buf(&self, acc: &mut impl PushStr) {
        write_csi(acc, self.params(), self.terminator());
    }
}

impl<const N: usize> Display for Csi<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.render_small()) }
}

/// Render several sequences back to back and write them to `sink` in one go.
///
/// # Errors
///
/// Only the sink can fail; its [`io::Error`] is returned unchanged.
pub fn write_all_to<T: WriteToBuf>(sink: &mut impl Write, items: &[T]) -> io::Result<()> {
    let mut acc = BufTextStorage::new();
    for item in items {
        item.write_to_buf(&mut acc);
    }
    sink.write_all(acc.as_bytes())?;
    tracing::trace!(
        sequences = items.len(),
        bytes = acc.len(),
        "wrote CSI sequences"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::test_fixtures::StdoutMock;

    #[test_case(Csi::bare('H'), "\x1b[H" ; "bare")]
    #[test_case(Csi::bare('s'), "\x1b[s" ; "bare save")]
    fn test_render_arity_0(seq: Csi<0>, expected: &str) {
        assert_eq!(seq.render(), expected);
    }

    #[test_case(0, "\x1b[0A" ; "zero")]
    #[test_case(5, "\x1b[5A" ; "five")]
    #[test_case(10, "\x1b[10A" ; "ten")]
    #[test_case(100, "\x1b[100A" ; "one hundred")]
    #[test_case(255, "\x1b[255A" ; "max byte")]
    fn test_render_arity_1_no_leading_zeros(n: u8, expected: &str) {
        assert_eq!(Csi::new([n], 'A').render(), expected);
    }

    #[test]
    fn test_render_keeps_param_order() {
        assert_eq!(Csi::new([3, 7], 'H').render(), "\x1b[3;7H");
        assert_eq!(Csi::new([7, 3], 'H').render(), "\x1b[7;3H");
    }

    #[test]
    fn test_render_arity_5() {
        let seq = Csi::new([38, 2, 255, 0, 9], 'm');
        assert_eq!(seq.render(), "\x1b[38;2;255;0;9m");
    }

    #[test]
    fn test_render_no_dedup() {
        assert_eq!(Csi::new([1, 1, 1], 'm').render(), "\x1b[1;1;1m");
    }

    #[test]
    fn test_u8_lookup_table_matches_decimal() {
        for value in 0..=u8::MAX {
            assert_eq!(U8_STRINGS[usize::from(value)], value.to_string());
        }
    }

    #[test]
    fn test_render_small_matches_render_and_stays_inline() {
        let seq = Csi::new([255, 2, 255, 255, 255], 'm');
        let small = seq.render_small();
        assert_eq!(small.as_str(), seq.render());
        assert_eq!(small.len(), 20);
        assert!(!small.spilled());
    }

    #[test]
    fn test_longest_sequences_stay_inline() {
        let catalog_max = crate::fg::rgb(255, 255, 255).render_small();
        assert_eq!(catalog_max.as_str(), "\x1b[38;2;255;255;255m");
        assert_eq!(catalog_max.len(), 19);
        assert!(!catalog_max.spilled());

        let any_max = Csi::new([255; 5], 'm').render_small();
        assert_eq!(any_max.len(), 22);
        assert!(!any_max.spilled());
    }

    #[test]
    fn test_display_matches_render() {
        let seq = Csi::new([48, 5, 200], 'm');
        assert_eq!(format!("{seq}"), seq.render());
    }

    #[test]
    fn test_render_is_idempotent() {
        let seq = Csi::new([1, 2], 'f');
        assert_eq!(seq.render(), seq.render());
    }

    #[test]
    fn test_write_to_buf_appends() {
        let mut acc = BufTextStorage::from("before");
        Csi::new([1], 'm').write_to_buf(&mut acc);
        Csi::new([31], 'm').write_to_buf(&mut acc);
        assert_eq!(acc, "before\x1b[1m\x1b[31m");
    }

    #[test]
    fn test_write_to_sink() {
        let mut sink = StdoutMock::new();
        Csi::new([2], 'J').write_to(&mut sink).unwrap();
        Csi::bare('H').write_to(&mut sink).unwrap();
        assert_eq!(sink.get_copy_of_buffer_as_string(), "\x1b[2J\x1b[H");
    }

    #[test]
    fn test_write_all_to_sink() {
        let mut sink = StdoutMock::new();
        write_all_to(&mut sink, &[Csi::new([1], 'm'), Csi::new([31], 'm')]).unwrap();
        assert_eq!(sink.get_copy_of_buffer_as_string(), "\x1b[1m\x1b[31m");
        assert_eq!(sink.write_count(), 1);
    }

    #[test]
    fn test_write_to_passes_sink_error_through() {
        let mut sink = StdoutMock::new_failing();
        let error = Csi::new([1], 'm').write_to(&mut sink).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
