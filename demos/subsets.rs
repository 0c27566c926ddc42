use grow_bitset::BitSet;

fn subsets(idx: isize, picked: &mut BitSet, items: &[&str]) {
    if idx as usize == items.len() {
        let names: Vec<&str> = picked.iter_ones().map(|i| items[i]).collect();
        println!("{picked} {names:?}");
        return;
    }
    if !picked.get(idx) {
        picked.set(idx);
        subsets(idx + 1, picked, items);
        picked.clear(idx);
    }
    subsets(idx + 1, picked, items)
}

fn main() {
    let items = ["red", "green", "blue", "alpha"];
    let mut picked = BitSet::new();
    subsets(0, &mut picked, &items);
}
