use crate::word::Word;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A bounded bit position within an N-bit word, including two sentinels.
///
/// For a word of width N the stored value `m` means:
///
/// - `m` in `[0, N)`: a bit position, 0 being the least significant bit;
/// - `m == -1`: [`PRE_BEGIN`], one before the first position;
/// - `m == N`: [`end`], one past the last position.
///
/// The sentinels let the scanning operations report "no such bit" without an
/// `Option`, and give reverse/forward scans a natural starting point. The
/// arithmetic operators do not clamp; callers must keep the value inside
/// `[-1, N]` except through [`next_bit_in`] and [`prev_bit_in`], which land on
/// the sentinels by construction.
///
/// Stored as an `i16` because the end sentinel of a 128-bit word is 128, one
/// past `i8::MAX`.
///
/// # Examples
/// ```
/// use word_bitset::BitIndex;
///
/// let mut i = BitIndex::PRE_BEGIN;
/// i.next_bit_in(0b0100_0110u8);
/// assert_eq!(i, BitIndex::new(1));
/// i.next_bit_in(0b0100_0110u8);
/// assert_eq!(i, BitIndex::new(2));
/// ```
///
/// [`PRE_BEGIN`]: BitIndex::PRE_BEGIN
/// [`end`]: BitIndex::end
/// [`next_bit_in`]: BitIndex::next_bit_in
/// [`prev_bit_in`]: BitIndex::prev_bit_in
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BitIndex(i16);

impl BitIndex {
    /// One before the first bit position.
    pub const PRE_BEGIN: BitIndex = BitIndex(-1);

    /// The first bit position (the least significant bit).
    pub const BEGIN: BitIndex = BitIndex(0);

    /// One past the last bit position of a `T`-wide word.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitIndex;
    ///
    /// assert_eq!(BitIndex::end::<u8>().get(), 8);
    /// assert_eq!(BitIndex::end::<u128>().get(), 128);
    /// ```
    pub const fn end<T: Word>() -> BitIndex {
        BitIndex(T::BITS as i16)
    }

    /// Creates an index holding `pos`.
    ///
    /// `pos` must lie in `[-1, N]` for the word width it will be used with;
    /// this is not checked.
    pub const fn new(pos: i16) -> BitIndex {
        BitIndex(pos)
    }

    /// Returns the stored position (or sentinel value).
    pub const fn get(self) -> i16 {
        self.0
    }

    /// Returns `true` iff [`prev_bit_in`] may be called, i.e. the position is
    /// greater than zero.
    ///
    /// [`prev_bit_in`]: BitIndex::prev_bit_in
    pub const fn may_retreat(self) -> bool {
        self.0 > 0
    }

    /// Advances to the smallest position greater than the current one at
    /// which `mask` has a set bit, or to [`end`] if there is none.
    ///
    /// Starting from [`PRE_BEGIN`] scans from position 0 inclusive. Must not
    /// be called when the index equals [`end`]; doing so yields a
    /// deterministic but meaningless value (no check is performed).
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitIndex;
    ///
    /// let mut i = BitIndex::new(2);
    /// i.next_bit_in(0b0100_0110u8);
    /// assert_eq!(i.get(), 6);
    /// i.next_bit_in(0b0100_0110u8);
    /// assert_eq!(i, BitIndex::end::<u8>());
    /// ```
    ///
    /// [`PRE_BEGIN`]: BitIndex::PRE_BEGIN
    /// [`end`]: BitIndex::end
    pub fn next_bit_in<T: Word>(&mut self, mask: T) {
        let end = T::BITS as i16;
        self.0 += 1;
        if self.0 != end {
            // The shift amount is in [0, N) whenever the precondition holds.
            let shifted = mask.wrapping_shr(self.0 as u32);
            if shifted == T::ZERO {
                self.0 = end;
            } else {
                self.0 += shifted.count_trailing_zeros() as i16;
            }
        }
    }

    /// Retreats to the largest position smaller than the current one at
    /// which `mask` has a set bit, or to [`PRE_BEGIN`] if there is none.
    ///
    /// Starting from [`end`] scans from position N-1 inclusive. Must not be
    /// called unless [`may_retreat`] returns `true`; violating that yields a
    /// deterministic but meaningless value (no check is performed).
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitIndex;
    ///
    /// let mut i = BitIndex::new(5);
    /// i.prev_bit_in(0b0110_0010u8);
    /// assert_eq!(i.get(), 1);
    /// i.prev_bit_in(0b0110_0010u8);
    /// assert_eq!(i, BitIndex::PRE_BEGIN);
    /// ```
    ///
    /// [`PRE_BEGIN`]: BitIndex::PRE_BEGIN
    /// [`end`]: BitIndex::end
    /// [`may_retreat`]: BitIndex::may_retreat
    pub fn prev_bit_in<T: Word>(&mut self, mask: T) {
        let end = T::BITS as i16;
        // Drops the bit at the current position and everything above it.
        let shifted = mask.wrapping_shl((end - self.0) as u32);
        if shifted == T::ZERO {
            self.0 = -1;
        } else {
            self.0 -= shifted.count_leading_zeros() as i16 + 1;
        }
    }
}

impl Add<i16> for BitIndex {
    type Output = BitIndex;

    fn add(self, offset: i16) -> BitIndex {
        BitIndex(self.0 + offset)
    }
}

impl AddAssign<i16> for BitIndex {
    fn add_assign(&mut self, offset: i16) {
        self.0 += offset;
    }
}

impl Sub<i16> for BitIndex {
    type Output = BitIndex;

    fn sub(self, offset: i16) -> BitIndex {
        BitIndex(self.0 - offset)
    }
}

impl SubAssign<i16> for BitIndex {
    fn sub_assign(&mut self, offset: i16) {
        self.0 -= offset;
    }
}
