use char_trie::{ChildList, LinearChildren, MapChildren, SortedChildren, Trie};
use quickcheck::{quickcheck, Arbitrary, Gen};
use std::collections::HashSet;

/// A key over a tiny alphabet so generated keys share prefixes often.
#[derive(Clone, Debug)]
struct SmallKey(String);

impl Arbitrary for SmallKey {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 5 + 1;
        let key = (0..len)
            .map(|_| *g.choose(&['a', 'b', 'c', '\u{e9}']).unwrap())
            .collect();
        SmallKey(key)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chars: Vec<char> = self.0.chars().collect();
        Box::new(
            (1..chars.len())
                .rev()
                .map(move |n| SmallKey(chars[..n].iter().collect())),
        )
    }
}

#[derive(Clone, Debug)]
enum Op {
    Add(SmallKey),
    Remove(SmallKey),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Add(SmallKey::arbitrary(g))
        } else {
            Op::Remove(SmallKey::arbitrary(g))
        }
    }
}

// Every non-empty prefix of every stored key has exactly one node, plus the root.
fn expected_nodes(model: &HashSet<String>) -> usize {
    let mut prefixes = HashSet::new();
    for key in model {
        let mut prefix = String::new();
        for c in key.chars() {
            prefix.push(c);
            prefixes.insert(prefix.clone());
        }
    }
    prefixes.len() + 1
}

fn matches_model<C: ChildList>(ops: Vec<Op>) -> bool {
    let mut trie: Trie<String, C> = Trie::new();
    let mut model: HashSet<String> = HashSet::new();

    for op in ops {
        let agreed = match op {
            Op::Add(SmallKey(key)) => {
                let expected = model.insert(key.clone());
                trie.add(key) == Ok(expected)
            }
            Op::Remove(SmallKey(key)) => {
                let expected = model.remove(&key);
                trie.remove(&key) == Ok(expected)
            }
        };
        if !agreed || trie.len() != model.len() {
            return false;
        }
    }

    let stored: HashSet<String> = trie.keys().cloned().collect();
    stored == model
        && trie.keys().count() == trie.len()
        && trie.node_count() == expected_nodes(&model)
        && model.iter().all(|key| trie.contains(key) == Ok(true))
}

quickcheck! {
    fn prop_linear_matches_model(ops: Vec<Op>) -> bool {
        matches_model::<LinearChildren>(ops)
    }

    fn prop_sorted_matches_model(ops: Vec<Op>) -> bool {
        matches_model::<SortedChildren>(ops)
    }

    fn prop_map_matches_model(ops: Vec<Op>) -> bool {
        matches_model::<MapChildren>(ops)
    }

    fn prop_add_then_contains(key: SmallKey, others: Vec<SmallKey>) -> bool {
        let mut trie = Trie::<String>::from_keys(others.into_iter().map(|k| k.0)).unwrap();
        trie.add(key.0.clone()).unwrap();
        trie.contains(&key.0) == Ok(true)
    }

    fn prop_add_remove_restores_shape(key: SmallKey, others: Vec<SmallKey>) -> bool {
        let mut trie = Trie::<String>::from_keys(others.iter().map(|k| k.0.clone())).unwrap();
        if trie.contains(&key.0) == Ok(true) {
            return true;
        }
        let before = trie.render();
        let nodes = trie.node_count();

        trie.add(key.0.clone()).unwrap();
        trie.remove(&key.0).unwrap();

        trie.contains(&key.0) == Ok(false) && trie.node_count() == nodes && trie.render() == before
    }

    fn prop_duplicate_add_is_noop(keys: Vec<SmallKey>) -> bool {
        let mut trie = Trie::<String>::from_keys(keys.iter().map(|k| k.0.clone())).unwrap();
        let len = trie.len();
        let nodes = trie.node_count();

        keys.into_iter().all(|k| trie.add(k.0) == Ok(false))
            && trie.len() == len
            && trie.node_count() == nodes
    }
}
