// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The fixed arity CSI value type. See [`Csi`] for details.

use crate::CsiShapeError;

/// One CSI (Control Sequence Introducer) escape sequence: `N` byte parameters and the
/// terminator character that selects the control function.
///
/// The arity `N` is part of the type, so a factory like [`crate::cursor::move_to()`]
/// promises `Csi<2>` and a caller can't hand it three numbers. [`Csi<0>`] is the
/// degenerate shape: it has no parameter list at all and renders as `ESC [` followed
/// directly by the terminator.
///
/// Parameter values are not range checked beyond the byte width. Whether a `0` cursor
/// count makes sense is left to the terminal.
///
/// # Example
///
/// ```rust
/// use r3bl_ansi_csi::{Csi, WriteToBuf};
///
/// let cursor_up_five = Csi::new([5], 'A');
/// assert_eq!(cursor_up_five.render(), "\x1b[5A");
///
/// let home = Csi::bare('H');
/// assert_eq!(home.render(), "\x1b[H");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Csi<const N: usize> {
    params: [u8; N],
    terminator: char,
}

/// Single parameter SGR, eg: `ESC [ 31 m`.
pub type Sgr = Csi<1>;

/// SGR w/ an ANSI 256 palette index, eg: `ESC [ 38 ; 5 ; 150 m`.
pub type SgrAnsi256 = Csi<3>;

/// SGR w/ a 24-bit color, eg: `ESC [ 38 ; 2 ; 175 ; 215 ; 135 m`.
pub type SgrRgb = Csi<5>;

impl<const N: usize> Csi<N> {
    pub const ARITY: usize = N;

    #[must_use]
    pub const fn new(params: [u8; N], terminator: char) -> Self {
        Self { params, terminator }
    }

    #[must_use]
    pub const fn params(&self) -> &[u8; N] { &self.params }

    #[must_use]
    pub const fn terminator(&self) -> char { self.terminator }

    #[must_use]
    pub const fn arity(&self) -> usize { N }

    /// Build a sequence from a parameter list whose length is only known at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`CsiShapeError::ArityMismatch`] if `params.len() != N`.
    pub fn try_from_params(params: &[u8], terminator: char) -> Result<Self, CsiShapeError> {
        match <[u8; N]>::try_from(params) {
            Ok(params) => Ok(Self::new(params, terminator)),
            Err(_) => Err(reject(CsiShapeError::ArityMismatch {
                expected: N,
                actual: params.len(),
                terminator,
            })),
        }
    }

    /// Same as [`Self::try_from_params()`] but accepts wider values, eg: a row number
    /// held in a `u16`.
    ///
    /// # Errors
    ///
    /// - [`CsiShapeError::ArityMismatch`] if `params.len() != N`.
    /// - [`CsiShapeError::ParamOutOfRange`] for the first value that doesn't fit in a
    ///   byte.
    pub fn try_from_wide(params: &[u16], terminator: char) -> Result<Self, CsiShapeError> {
        if params.len() != N {
            return Err(reject(CsiShapeError::ArityMismatch {
                expected: N,
                actual: params.len(),
                terminator,
            }));
        }

        let mut narrowed = [0_u8; N];
        for (index, (slot, &value)) in narrowed.iter_mut().zip(params).enumerate() {
            *slot = u8::try_from(value).map_err(|_| {
                reject(CsiShapeError::ParamOutOfRange {
                    index,
                    value,
                    terminator,
                })
            })?;
        }

        Ok(Self::new(narrowed, terminator))
    }
}

impl Csi<0> {
    /// The zero parameter form, eg: `ESC [ s` (save cursor).
    #[must_use]
    pub const fn bare(terminator: char) -> Self {
        Self {
            params: [],
            terminator,
        }
    }
}

impl<const N: usize> TryFrom<(&[u8], char)> for Csi<N> {
    type Error = CsiShapeError;

    fn try_from((params, terminator): (&[u8], char)) -> Result<Self, Self::Error> {
        Self::try_from_params(params, terminator)
    }
}

fn reject(error: CsiShapeError) -> CsiShapeError {
    tracing::debug!(?error, "rejected CSI construction");
    error
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_accessors() {
        let seq = Csi::new([3, 7], 'H');
        assert_eq!(seq.params(), &[3, 7]);
        assert_eq!(seq.terminator(), 'H');
        assert_eq!(seq.arity(), 2);
        assert_eq!(Csi::<2>::ARITY, 2);
    }

    #[test]
    fn test_bare_has_no_params() {
        let seq = Csi::bare('s');
        assert_eq!(seq.arity(), 0);
        assert!(seq.params().is_empty());
        assert_eq!(seq.terminator(), 's');
    }

    #[test]
    fn test_values_are_copied_not_shared() {
        let original = Csi::new([1], 'm');
        let copy = original;
        assert_eq!(original, copy);
    }

    #[test]
    fn test_try_from_params_ok() {
        let seq = Csi::<3>::try_from_params(&[38, 5, 200], 'm').unwrap();
        assert_eq!(seq, Csi::new([38, 5, 200], 'm'));
    }

    #[test]
    fn test_try_from_params_arity_mismatch() {
        let result = Csi::<2>::try_from_params(&[1, 2, 3], 'H');
        assert_eq!(
            result,
            Err(CsiShapeError::ArityMismatch {
                expected: 2,
                actual: 3,
                terminator: 'H',
            })
        );
    }

    #[test]
    fn test_try_from_params_bare() {
        assert_eq!(Csi::<0>::try_from_params(&[], 'u'), Ok(Csi::bare('u')));
        assert!(Csi::<0>::try_from_params(&[1], 'u').is_err());
    }

    #[test]
    fn test_try_from_wide_ok() {
        let seq = Csi::<2>::try_from_wide(&[0, 255], 'H').unwrap();
        assert_eq!(seq.params(), &[0, 255]);
    }

    #[test]
    fn test_try_from_wide_out_of_range() {
        let result = Csi::<2>::try_from_wide(&[10, 256], 'H');
        assert_eq!(
            result,
            Err(CsiShapeError::ParamOutOfRange {
                index: 1,
                value: 256,
                terminator: 'H',
            })
        );
    }

    #[test]
    fn test_try_from_wide_checks_arity_before_range() {
        let result = Csi::<1>::try_from_wide(&[999, 999], 'A');
        assert!(matches!(
            result,
            Err(CsiShapeError::ArityMismatch {
                expected: 1,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_try_from_tuple() {
        let params: &[u8] = &[5];
        let seq: Csi<1> = (params, 'A').try_into().unwrap();
        assert_eq!(seq, Csi::new([5], 'A'));

        let empty: &[u8] = &[];
        let result: Result<Csi<1>, CsiShapeError> = (empty, 'A').try_into();
        assert!(result.is_err());
    }
}
