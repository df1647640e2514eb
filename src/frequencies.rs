use std::collections::HashMap;
use std::hash::Hash;

use crate::tree::SymbolFrequency;


/// Relative frequencies of upper-case English letters, the space and common punctuation.
const ENGLISH: [(char, f64); 35] = [
    (' ', 0.18),
    ('E', 0.11),
    ('T', 0.09),
    ('A', 0.08),
    ('O', 0.07),
    ('I', 0.07),
    ('N', 0.06),
    ('S', 0.06),
    ('H', 0.06),
    ('R', 0.06),
    ('D', 0.04),
    ('L', 0.04),
    ('U', 0.03),
    ('C', 0.03),
    ('M', 0.03),
    ('W', 0.03),
    ('F', 0.02),
    ('G', 0.02),
    ('Y', 0.02),
    ('P', 0.02),
    ('B', 0.015),
    ('V', 0.01),
    ('K', 0.01),
    ('X', 0.005),
    ('Q', 0.002),
    ('J', 0.002),
    ('Z', 0.001),
    (',', 0.015),
    ('.', 0.015),
    ('!', 0.005),
    ('?', 0.005),
    (':', 0.002),
    (';', 0.002),
    ('\'', 0.005),
    ('"', 0.002),
];


pub fn english_frequencies() -> Vec<SymbolFrequency<char>> {
    ENGLISH.iter()
        .map(|&(symbol, weight)| SymbolFrequency::new(symbol, weight))
        .collect()
}


/// Counts how many times each distinct value occurs in `data`.
///
/// The result is sorted by descending count. Values with the same count keep the order of their
/// first occurrence, so the same data always yields the same alphabet.
pub fn value_frequencies<T>(data: impl IntoIterator<Item = T>) -> Vec<SymbolFrequency<T>>
where
    T: Eq + Hash + Clone
{

    let mut frequencies: HashMap<T, (usize, usize)> = HashMap::new();

    for (i, value) in data.into_iter().enumerate() {

        frequencies.entry(value)
            .and_modify(|(count, _)| *count += 1)
            .or_insert((1, i));
    }

    let mut frequencies: Vec<(T, (usize, usize))> = frequencies.drain().collect();

    sort_frequencies(&mut frequencies);

    frequencies.into_iter()
        .map(|(value, (count, _))| SymbolFrequency::new(value, count as f64))
        .collect()
}


fn sort_frequencies<T>(frequencies: &mut [(T, (usize, usize))]) {
    frequencies.sort_by(|(_, (a_count, a_first)), (_, (b_count, b_first))| {
        b_count.cmp(a_count).then(a_first.cmp(b_first))
    })
}
