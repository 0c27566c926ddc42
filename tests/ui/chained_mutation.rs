use grow_bitset::BitSet;

fn main() {
    let mut bs = BitSet::new();
    bs.set(1).set(70).flip(2).clear(1).set_range(100, 104);
    assert_eq!(bs.to_string(), "{2, 70, 100, 101, 102, 103}");
    assert_eq!(bs.size(), 128);
    assert_eq!(bs.len(), 104);

    let words = bs.as_words().to_vec();
    bs.set(300);
    assert_eq!(words.len(), 2);
    assert_eq!(bs.as_words().len(), 5);
}
