// Frequency counter with first-seen tie-breaking.
//
// Keywords are ranked by descending count. Equal counts keep the order in
// which each distinct keyword first appeared in the input, so the output
// never depends on hash iteration order.

use std::cmp::Reverse;
use std::collections::HashMap;

/// Occurrence counter that remembers insertion order.
#[derive(Debug, Default)]
pub struct KeywordCounter {
    /// (keyword, count) in first-seen order
    entries: Vec<(String, usize)>,
    /// keyword -> position in `entries`
    index: HashMap<String, usize>,
}

impl KeywordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, keyword: String) {
        match self.index.get(&keyword) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(keyword.clone(), self.entries.len());
                self.entries.push((keyword, 1));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, keyword: &str) -> usize {
        self.index
            .get(keyword)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// The `k` most frequent keywords with their counts.
    ///
    /// Sort key is `(-count, first_seen)`, which is unique per entry, so
    /// selecting the top `k` first and then ordering them gives the same
    /// result as a full stable sort.
    pub fn most_common(self, k: usize) -> Vec<(String, usize)> {
        if k == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<(usize, String, usize)> = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(first_seen, (word, count))| (first_seen, word, count))
            .collect();

        let key = |e: &(usize, String, usize)| (Reverse(e.2), e.0);

        if k < ranked.len() {
            ranked.select_nth_unstable_by_key(k - 1, key);
            ranked.truncate(k);
        }
        ranked.sort_unstable_by_key(key);

        ranked
            .into_iter()
            .map(|(_, word, count)| (word, count))
            .collect()
    }
}
