// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Csi, PushStr, WriteToBuf, write_csi};

/// A [`Csi`] of any supported arity, so sequences of different shapes can be stored in
/// one list (eg: a bold [`Csi<1>`] followed by an RGB [`Csi<5>`]) and rendered in order.
///
/// ```rust
/// use r3bl_ansi_csi::{AnyCsi, WriteToBuf, fg, text};
///
/// let prefix: [AnyCsi; 2] = [text::BOLD.into(), fg::rgb(1, 2, 3).into()];
/// let rendered: String = prefix.iter().map(WriteToBuf::render).collect();
/// assert_eq!(rendered, "\x1b[1m\x1b[38;2;1;2;3m");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnyCsi {
    Bare(Csi<0>),
    One(Csi<1>),
    Two(Csi<2>),
    Three(Csi<3>),
    Four(Csi<4>),
    Five(Csi<5>),
}

impl AnyCsi {
    #[must_use]
    pub const fn params(&self) -> &[u8] {
        match self {
            AnyCsi::Bare(it) => it.params(),
            AnyCsi::One(it) => it.params(),
            AnyCsi::Two(it) => it.params(),
            AnyCsi::Three(it) => it.params(),
            AnyCsi::Four(it) => it.params(),
            AnyCsi::Five(it) => it.params(),
        }
    }

    #[must_use]
    pub const fn terminator(&self) -> char {
        match self {
            AnyCsi::Bare(it) => it.terminator(),
            AnyCsi::One(it) => it.terminator(),
            AnyCsi::Two(it) => it.terminator(),
            AnyCsi::Three(it) => it.terminator(),
            AnyCsi::Four(it) => it.terminator(),
            AnyCsi::Five(it) => it.terminator(),
        }
    }

    #[must_use]
    pub const fn arity(&self) -> usize { self.params().len() }
}

impl WriteToBuf for AnyCsi {
    fn write_to_buf(&self, acc: &mut impl PushStr) {
        write_csi(acc, self.params(), self.terminator());
    }
}

mod display_trait_impl {
    use std::fmt::{Display, Formatter, Result};

    use super::AnyCsi;
    use crate::WriteToBuf;

    impl Display for AnyCsi {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.render_small()) }
    }
}

mod convert_from_csi {
    use super::AnyCsi;
    use crate::Csi;

    macro_rules! impl_from_csi {
        ($($arity:literal => $variant:ident),* $(,)?) => {
            $(
                impl From<Csi<$arity>> for AnyCsi {
                    fn from(value: Csi<$arity>) -> Self { AnyCsi::$variant(value) }
                }
            )*
        };
    }

    impl_from_csi! {
        0 => Bare,
        1 => One,
        2 => Two,
        3 => Three,
        4 => Four,
        5 => Five,
    }
}
