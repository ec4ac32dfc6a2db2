use std::hash::{BuildHasher, Hash};

use indexed_min_heap::IndexedMinHeap;
use rand::prelude::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const STRING_SIZE: usize = 100;

/// Distinct keys `0..n` in random order
#[allow(dead_code)]
pub(crate) fn gen_unique_usizes(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut res: Vec<usize> = (0..n).collect();
    res.shuffle(&mut rng);
    res
}

#[allow(dead_code)]
pub(crate) fn gen_random_priorities(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = rand::distributions::Uniform::new(0.0f64, 1_000_000.0f64);
    let mut res = Vec::with_capacity(n);
    for _ in 0..n {
        res.push(rng.sample(dist))
    }
    res
}

#[allow(dead_code)]
pub(crate) fn get_unique_random_strings(n: usize, seed: u64) -> Vec<String> {
    use std::collections::HashSet;

    let alphabet: Vec<char> = (0u8..0x7f)
        .filter(|x| x.is_ascii_alphanumeric())
        .map(|x| x as char)
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut res = HashSet::with_capacity(n);
    while res.len() < n {
        let s: String = alphabet[..]
            .choose_multiple(&mut rng, STRING_SIZE)
            .collect();
        res.insert(s);
    }
    let mut res: Vec<String> = res.into_iter().collect();
    // HashSet order is random between runs
    res.sort_unstable();
    res.shuffle(&mut rng);
    res
}

#[allow(dead_code)]
pub(crate) fn choose_some<T>(vals: &[T], num: usize, seed: u64) -> Vec<T>
where
    T: Clone,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    vals.choose_multiple(&mut rng, num).cloned().collect()
}

/// Fills queue from paired keys and priorities.
/// Keys must be unique.
#[allow(dead_code)]
pub(crate) fn build_queue<K, S>(
    keys: &[K],
    priorities: &[f64],
    mut queue: IndexedMinHeap<K, f64, S>,
) -> IndexedMinHeap<K, f64, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    queue.reserve(keys.len());
    for (k, &p) in keys.iter().zip(priorities.iter()) {
        queue
            .insert(k.clone(), p)
            .expect("Benchmark keys must be unique");
    }
    queue
}

/// Splits the data in to parts:
/// 1. random shuffled first output for filling queue
/// 2. `number_for_insert` minimal items sorted in descending order,
///    so every insert sifts up to the root
/// ## Panics
/// If number_for_insert bigger than data.len()
#[allow(dead_code)]
pub(crate) fn generate_worst_insert_data(
    mut data: Vec<f64>,
    number_for_insert: usize,
    seed: u64,
) -> (Vec<f64>, Vec<f64>) {
    if number_for_insert > data.len() {
        panic!(
            "number_for_insert {} MUST be less or equal data length {}",
            number_for_insert,
            data.len()
        );
    }
    data.sort_unstable_by(|a, b| b.partial_cmp(a).expect("Generated priorities are ordered"));
    let remain_length = data.len() - number_for_insert;
    let for_inserts = data[remain_length..].to_vec();
    data.truncate(remain_length);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    data.shuffle(&mut rng);
    (data, for_inserts)
}
