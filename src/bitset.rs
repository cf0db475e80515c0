use crate::index::BitIndex;
use crate::word::Word;
use alloc::string::String;
use core::fmt::{self, Debug, Display, Formatter, Write as _};
use core::iter::{FromIterator, FusedIterator};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl,
    ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

/// A fixed-width set of boolean flags backed by a single unsigned word.
///
/// `T` selects the width: a `BitSet<u8>` holds 8 flags, a `BitSet<u128>`
/// holds 128. Every bit of the word is meaningful. The type is a plain value:
/// copied by value, compared and ordered as the underlying unsigned integer,
/// no heap, no interior mutability.
///
/// Single bits are addressed through [`BitIndex`]; whole groups of bits
/// through raw masks or other `BitSet`s of the same width. The set-algebra
/// operators `|`, `&`, `^` and `!` are all available, as are `<<` and `>>`
/// with native shift semantics.
///
/// # Examples
/// ```
/// use word_bitset::{BitIndex, BitSet};
///
/// let mut set = BitSet::<u8>::empty();
/// set.set(BitIndex::new(1));
/// set.set_mask(0b0100_0100);
/// assert_eq!(set.count(), 3);
/// assert_eq!(set.lssbi().get(), 1);
/// assert_eq!(set.mssbi().get(), 6);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitSet<T: Word> {
    bits: T,
}

impl<T: Word> BitSet<T> {
    /// Creates a set with no bits set.
    ///
    /// Usable in `const` contexts:
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// const NONE: BitSet<u32> = BitSet::empty();
    /// assert!(NONE.none());
    /// ```
    pub const fn empty() -> Self {
        Self { bits: T::ZERO }
    }

    /// Creates a set with all bits set.
    pub const fn full() -> Self {
        Self { bits: T::MAX }
    }

    /// Creates a set from a raw mask.
    ///
    /// Intended for interop and for building compile-time constants; general
    /// bit-set logic should go through [`BitIndex`] or other `BitSet`s.
    pub const fn from_bits(bits: T) -> Self {
        Self { bits }
    }

    /// Creates a set with exactly the bit at `i` set.
    ///
    /// `i` must be a valid position, not a sentinel.
    pub fn from_index(i: BitIndex) -> Self {
        Self { bits: Self::index_to_mask(i) }
    }

    /// Returns the underlying word.
    pub const fn bits(self) -> T {
        self.bits
    }

    /// Converts a valid bit position to a mask with exactly that bit set.
    ///
    /// Compiles to a single shift; undefined for sentinel values.
    #[inline(always)]
    pub fn index_to_mask(i: BitIndex) -> T {
        T::ONE.wrapping_shl(i.get() as u32)
    }

    /// Converts a mask to the position of its least significant set bit.
    ///
    /// Compiles to a single bit-scan; the mask must be non-zero.
    #[inline(always)]
    pub fn mask_to_index(mask: T) -> BitIndex {
        BitIndex::new(mask.count_trailing_zeros() as i16)
    }

    /// Clears all bits.
    pub fn clear(&mut self) {
        self.bits = T::ZERO;
    }

    /// Sets all bits.
    pub fn fill(&mut self) {
        self.bits = T::MAX;
    }

    /// Sets the bit at `i`.
    pub fn set(&mut self, i: BitIndex) {
        self.bits |= Self::index_to_mask(i);
    }

    /// Clears the bit at `i`.
    pub fn reset(&mut self, i: BitIndex) {
        self.bits &= !Self::index_to_mask(i);
    }

    /// Toggles the bit at `i`.
    pub fn flip(&mut self, i: BitIndex) {
        self.bits ^= Self::index_to_mask(i);
    }

    /// Sets every bit that is set in `mask`.
    pub fn set_mask(&mut self, mask: T) {
        self.bits |= mask;
    }

    /// Clears every bit that is set in `mask`.
    pub fn reset_mask(&mut self, mask: T) {
        self.bits &= !mask;
    }

    /// Toggles every bit that is set in `mask`.
    pub fn flip_mask(&mut self, mask: T) {
        self.bits ^= mask;
    }

    /// Sets every bit that is set in `other`.
    pub fn insert(&mut self, other: Self) {
        self.bits |= other.bits;
    }

    /// Clears every bit that is set in `other`.
    pub fn remove(&mut self, other: Self) {
        self.bits &= !other.bits;
    }

    /// Toggles every bit that is set in `other`.
    pub fn toggle(&mut self, other: Self) {
        self.bits ^= other.bits;
    }

    /// Returns `true` iff all bits are set.
    pub fn all(self) -> bool {
        self.bits == T::MAX
    }

    /// Returns `true` iff at least one bit is set.
    pub fn any(self) -> bool {
        self.bits != T::ZERO
    }

    /// Returns `true` iff no bit is set.
    pub fn none(self) -> bool {
        self.bits == T::ZERO
    }

    /// Returns `true` iff exactly one bit is set.
    pub fn is_single_bit(self) -> bool {
        self.bits.is_power_of_two()
    }

    /// Returns the number of bits the set can hold.
    pub const fn size(self) -> u32 {
        T::BITS
    }

    /// Returns the number of set bits.
    pub fn count(self) -> u32 {
        self.bits.population_count()
    }

    /// Returns a set holding only the least significant set bit, or the
    /// empty set if no bit is set.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let set = BitSet::<u8>::from_bits(0b0100_0110);
    /// assert_eq!(set.lssb().bits(), 0b0000_0010);
    /// ```
    pub fn lssb(self) -> Self {
        Self { bits: self.bits & self.bits.wrapping_neg() }
    }

    /// Returns a set holding only the most significant set bit, or the
    /// empty set if no bit is set.
    pub fn mssb(self) -> Self {
        if self.none() {
            Self::empty()
        } else {
            Self { bits: T::ONE.wrapping_shl(self.bits.floor_log2()) }
        }
    }

    /// Returns the position of the least significant set bit, or
    /// [`BitIndex::end`] for the empty set.
    pub fn lssbi(self) -> BitIndex {
        if self.none() {
            BitIndex::end::<T>()
        } else {
            BitIndex::new(self.bits.count_trailing_zeros() as i16)
        }
    }

    /// Returns the position of the most significant set bit, or
    /// [`BitIndex::PRE_BEGIN`] for the empty set.
    pub fn mssbi(self) -> BitIndex {
        if self.none() {
            BitIndex::PRE_BEGIN
        } else {
            BitIndex::new(self.bits.floor_log2() as i16)
        }
    }

    /// Returns `true` iff the bit at `i` is set.
    pub fn test(self, i: BitIndex) -> bool {
        (self.bits & Self::index_to_mask(i)) != T::ZERO
    }

    /// Returns `true` iff any bit of `mask` is set in this set.
    pub fn test_mask(self, mask: T) -> bool {
        (self.bits & mask) != T::ZERO
    }

    /// Returns `true` iff the two sets have at least one set bit in common.
    pub fn intersects(self, other: Self) -> bool {
        (self.bits & other.bits) != T::ZERO
    }

    /// Adds one to the underlying word, wrapping at the word boundary.
    ///
    /// Together with [`decrement`] and the `+`/`-` operators this treats the
    /// set as an integer counter, which some algorithms use to enumerate
    /// adjacent bit patterns. It is not part of the set algebra.
    ///
    /// [`decrement`]: BitSet::decrement
    pub fn increment(&mut self) {
        self.bits = self.bits.wrapping_add(T::ONE);
    }

    /// Subtracts one from the underlying word, wrapping at the word boundary.
    pub fn decrement(&mut self) {
        self.bits = self.bits.wrapping_sub(T::ONE);
    }

    /// Renders the set as a string of length N, most significant bit first,
    /// using `zero` and `one` for unset and set bits.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let set = BitSet::<u8>::from_bits(0b0100_0110);
    /// assert_eq!(set.to_string_with('.', 'x'), ".x...xx.");
    /// ```
    pub fn to_string_with(self, zero: char, one: char) -> String {
        let mut result = String::with_capacity(T::BITS as usize);
        let mut bit = BitIndex::end::<T>();
        while bit != BitIndex::BEGIN {
            bit -= 1;
            result.push(if self.test(bit) { one } else { zero });
        }
        result
    }

    /// Returns an iterator over the set bits, least significant first.
    ///
    /// Each item is a single-bit `BitSet`, not a position. The iterator works
    /// on a snapshot of the word, so mutating the source afterwards does not
    /// affect it; calling `iter` again restarts from the full current state.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let set = BitSet::<u8>::from_bits(0b0100_0110);
    /// let bits: Vec<u8> = set.iter().map(|b| b.bits()).collect();
    /// assert_eq!(bits, [0x02, 0x04, 0x40]);
    /// ```
    pub fn iter(self) -> SetBits<T> {
        SetBits { remaining: self.bits }
    }
}

impl<T: Word> Default for BitSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Collects bit positions into a set; sentinel values must not appear.
impl<T: Word> FromIterator<BitIndex> for BitSet<T> {
    fn from_iter<I: IntoIterator<Item = BitIndex>>(iter: I) -> Self {
        let mut set = Self::empty();
        for i in iter {
            set.set(i);
        }
        set
    }
}

impl<T: Word> IntoIterator for BitSet<T> {
    type Item = BitSet<T>;
    type IntoIter = SetBits<T>;

    fn into_iter(self) -> SetBits<T> {
        self.iter()
    }
}

impl<T: Word> IntoIterator for &BitSet<T> {
    type Item = BitSet<T>;
    type IntoIter = SetBits<T>;

    fn into_iter(self) -> SetBits<T> {
        self.iter()
    }
}

impl<T: Word> BitOr for BitSet<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.bits | rhs.bits)
    }
}

impl<T: Word> BitOrAssign for BitSet<T> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl<T: Word> BitAnd for BitSet<T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits(self.bits & rhs.bits)
    }
}

impl<T: Word> BitAndAssign for BitSet<T> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl<T: Word> BitXor for BitSet<T> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::from_bits(self.bits ^ rhs.bits)
    }
}

impl<T: Word> BitXorAssign for BitSet<T> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.bits ^= rhs.bits;
    }
}

impl<T: Word> Not for BitSet<T> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_bits(!self.bits)
    }
}

/// Logical left shift with native semantics; shifting by `n >= N` is a
/// caller error and is not validated.
impl<T: Word> Shl<u32> for BitSet<T> {
    type Output = Self;

    fn shl(self, n: u32) -> Self {
        Self::from_bits(self.bits << n)
    }
}

impl<T: Word> ShlAssign<u32> for BitSet<T> {
    fn shl_assign(&mut self, n: u32) {
        self.bits <<= n;
    }
}

/// Logical right shift with native semantics; shifting by `n >= N` is a
/// caller error and is not validated.
impl<T: Word> Shr<u32> for BitSet<T> {
    type Output = Self;

    fn shr(self, n: u32) -> Self {
        Self::from_bits(self.bits >> n)
    }
}

impl<T: Word> ShrAssign<u32> for BitSet<T> {
    fn shr_assign(&mut self, n: u32) {
        self.bits >>= n;
    }
}

/// Adds a raw count to the underlying word, wrapping. Part of the integer
/// escape hatch, not of the set algebra.
impl<T: Word> Add<T> for BitSet<T> {
    type Output = Self;

    fn add(self, n: T) -> Self {
        Self::from_bits(self.bits.wrapping_add(n))
    }
}

impl<T: Word> AddAssign<T> for BitSet<T> {
    fn add_assign(&mut self, n: T) {
        self.bits = self.bits.wrapping_add(n);
    }
}

/// Subtracts a raw count from the underlying word, wrapping. Part of the
/// integer escape hatch, not of the set algebra.
impl<T: Word> Sub<T> for BitSet<T> {
    type Output = Self;

    fn sub(self, n: T) -> Self {
        Self::from_bits(self.bits.wrapping_sub(n))
    }
}

impl<T: Word> SubAssign<T> for BitSet<T> {
    fn sub_assign(&mut self, n: T) {
        self.bits = self.bits.wrapping_sub(n);
    }
}

impl<T: Word> Display for BitSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut bit = BitIndex::end::<T>();
        while bit != BitIndex::BEGIN {
            bit -= 1;
            f.write_char(if self.test(bit) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl<T: Word> Debug for BitSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("BitSet(0b")?;
        Display::fmt(self, f)?;
        f.write_str(")")
    }
}

/// Iterator over the set bits of a [`BitSet`], least significant first.
///
/// Yields single-bit `BitSet` values, produced by repeatedly isolating and
/// clearing the lowest set bit of a snapshot of the source word. Two
/// iterators compare equal iff their remaining masks are equal; an exhausted
/// iterator equals any other exhausted iterator of the same width.
///
/// Returned by [`BitSet::iter()`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SetBits<T: Word> {
    remaining: T,
}

impl<T: Word> Iterator for SetBits<T> {
    type Item = BitSet<T>;

    fn next(&mut self) -> Option<BitSet<T>> {
        if self.remaining == T::ZERO {
            return None;
        }
        let lowest = self.remaining & self.remaining.wrapping_neg();
        self.remaining &= self.remaining.wrapping_sub(T::ONE);
        Some(BitSet::from_bits(lowest))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.population_count() as usize;
        (count, Some(count))
    }

    fn count(self) -> usize {
        self.remaining.population_count() as usize
    }
}

impl<T: Word> ExactSizeIterator for SetBits<T> {}

impl<T: Word> FusedIterator for SetBits<T> {}
