use core::fmt::{Binary, Debug, Display};
use core::hash::Hash;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned machine word usable as [`BitSet`] storage.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `u128` and sealed against
/// further implementations, so a `BitSet<T>` is always backed by exactly one
/// native unsigned integer. Signed types are rejected at compile time:
///
/// ```compile_fail
/// use word_bitset::BitSet;
///
/// let set = BitSet::<i32>::empty(); // i32 does not implement Word
/// ```
///
/// The methods are thin wrappers over the corresponding inherent integer
/// methods; they exist so generic code can reach the hardware bit-scan
/// instructions without naming a concrete width.
///
/// [`BitSet`]: crate::BitSet
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + Binary
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
    + Shl<u32, Output = Self>
    + ShlAssign<u32>
    + Shr<u32, Output = Self>
    + ShrAssign<u32>
{
    /// The width of the word in bits.
    const BITS: u32;
    /// The word with no bits set.
    const ZERO: Self;
    /// The word with only bit 0 set.
    const ONE: Self;
    /// The word with all bits set.
    const MAX: Self;

    /// Returns the number of zero bits below the least significant set bit.
    ///
    /// Returns `BITS` when `self` is zero; callers that use the result as a
    /// bit position must guarantee a non-zero argument.
    fn count_trailing_zeros(self) -> u32;

    /// Returns the number of zero bits above the most significant set bit.
    ///
    /// Returns `BITS` when `self` is zero; callers that use the result as a
    /// bit position must guarantee a non-zero argument.
    fn count_leading_zeros(self) -> u32;

    /// Returns the number of set bits (zero for a zero word).
    fn population_count(self) -> u32;

    /// Two's complement negation, wrapping around at the word boundary.
    fn wrapping_neg(self) -> Self;

    /// Addition modulo 2^`BITS`.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction modulo 2^`BITS`.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Left shift by `n % BITS` positions.
    fn wrapping_shl(self, n: u32) -> Self;

    /// Right shift by `n % BITS` positions.
    fn wrapping_shr(self, n: u32) -> Self;

    /// Returns `true` iff exactly one bit is set (zero is not a power of two).
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Word;
    ///
    /// assert!(64u8.is_power_of_two());
    /// assert!(!0u8.is_power_of_two());
    /// assert!(!0b0110u8.is_power_of_two());
    /// ```
    fn is_power_of_two(self) -> bool {
        self != Self::ZERO && (self & self.wrapping_sub(Self::ONE)) == Self::ZERO
    }

    /// Returns the position of the most significant set bit.
    ///
    /// `self` must be non-zero; every caller in this crate branches on the
    /// empty word before calling this.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Word;
    ///
    /// assert_eq!(0b0100_0110u8.floor_log2(), 6);
    /// assert_eq!(1u128.floor_log2(), 0);
    /// ```
    fn floor_log2(self) -> u32 {
        Self::BITS - 1 - self.count_leading_zeros()
    }
}

macro_rules! impl_word {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;

                fn count_trailing_zeros(self) -> u32 {
                    self.trailing_zeros()
                }

                fn count_leading_zeros(self) -> u32 {
                    self.leading_zeros()
                }

                fn population_count(self) -> u32 {
                    self.count_ones()
                }

                fn wrapping_neg(self) -> Self {
                    self.wrapping_neg()
                }

                fn wrapping_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                fn wrapping_shl(self, n: u32) -> Self {
                    self.wrapping_shl(n)
                }

                fn wrapping_shr(self, n: u32) -> Self {
                    self.wrapping_shr(n)
                }
            }
        )+
    };
}

impl_word!(u8, u16, u32, u64, u128);
