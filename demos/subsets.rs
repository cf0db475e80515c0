use word_bitset::BitSet;

fn main() {
    // Every subset of a mask can be enumerated by repeatedly subtracting one
    // from the current subset and intersecting with the universe. The
    // subtraction is the integer escape hatch on BitSet, the intersection is
    // plain set algebra.
    let universe = BitSet::<u8>::from_bits(0b0110_1001);
    let mut subset = universe;
    loop {
        println!("{subset}");
        if subset.none() {
            break;
        }
        subset = (subset - 1) & universe;
    }
}
