use grow_bitset::BitSet;

fn main() {
    let a: BitSet = [1, 2, 3, 64].into_iter().collect();
    let b: BitSet = [2, 3, 4].into_iter().collect();

    assert_eq!((&a & &b).to_string(), "{2, 3, 64}");
    assert_eq!((&a | &b).to_string(), "{1, 2, 3, 4, 64}");
    assert_eq!((&a ^ &b).to_string(), "{1, 4, 64}");
    assert_eq!((&a - &b).to_string(), "{1, 64}");
    assert!(a.intersects(&b));

    let mut c = a.clone();
    c.and(&b).or(&BitSet::value_of(&[1 << 10]));
    assert_eq!(c.to_string(), "{2, 3, 10, 64}");
}
