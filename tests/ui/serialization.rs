use grow_bitset::{BitSet, BitSetError, Config};

fn main() -> Result<(), BitSetError> {
    let mut bs = BitSet::with_config(Config::default().initial_bits(100))?;
    bs.set(3).set(99);

    let bytes = bs.to_bytes();
    assert_eq!(bytes.len(), 16);
    assert_eq!(BitSet::from_bytes(&bytes), bs);
    assert_eq!(BitSet::value_of(&bs.to_words()), bs);

    assert_eq!(bs.next_set_bit(4)?, Some(99));
    assert_eq!(bs.previous_set_bit(98)?, Some(3));
    assert!(bs.next_set_bit(-1).is_err());
    Ok(())
}
