use crate::wordlist::trie::trie::ImmutableTrie;
use crate::wordlist::trie::trienode::ImmutableTrieNode;

impl<'a> ImmutableTrie<'a> {
    /// Number of dictionary words `word` splits into, left to right, taking
    /// the first split that works. `Some(1)` means the whole word is itself
    /// in the dictionary; only `Some(n)` with `n > 1` makes it a compound.
    /// The word itself does not have to be in the dictionary to segment.
    pub fn segment(&self, word: &str) -> Option<usize> {
        if word.is_empty() {
            return None;
        }
        self.segment_range(word, 0, word.len() - 1)
    }

    pub fn segment_range(&self, word: &str, start: usize, end: usize) -> Option<usize> {
        assert!(end < word.len(), "range end {} is outside {:?}", end, word);
        self.root.get().and_then(|root| root.segment(word, start, end))
    }
}

impl<'a> ImmutableTrieNode<'a> {
    pub(crate) fn segment(&self, word: &str, start: usize, end: usize) -> Option<usize> {
        let mut memo = vec![None; word.len()];
        self.segment_memo(word.as_bytes(), start, end, &mut memo)
    }

    /// Sub-ranges share a tail, so results are cached per start position
    /// (the end never moves within a top-level call).
    fn segment_memo(&self, word: &[u8], start: usize, end: usize,
                    memo: &mut [Option<Option<usize>>]) -> Option<usize> {
        if start > end {
            return None;
        }
        if let Some(cached) = memo[start] {
            return cached;
        }
        let result = self.split_at_first_break(word, start, end, memo);
        memo[start] = Some(result);
        result
    }

    fn split_at_first_break(&self, word: &[u8], start: usize, end: usize,
                            memo: &mut [Option<Option<usize>>]) -> Option<usize> {
        let mut min_break = start;
        while let Some(brk) = self.find_break(word, start, end, min_break) {
            if brk == end {
                // the remaining range is one dictionary word
                return Some(1);
            }
            if let Some(rest) = self.segment_memo(word, brk + 1, end, memo) {
                return Some(1 + rest);
            }
            // no segmentation after this break; retry with the next one
            min_break = brk + 1;
        }
        None
    }
}
