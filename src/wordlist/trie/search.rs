use crate::wordlist::trie::trie::ImmutableTrie;
use crate::wordlist::trie::trienode::ImmutableTrieNode;

impl<'a> ImmutableTrie<'a> {
    pub fn contains(&self, word: &str) -> bool {
        self.get_node(word, self.root.get())
            .map(|x| x.is_terminal).unwrap_or(false)
    }

    /// Walk the edges for `word[start..=end]` and report the first position
    /// at or after `min_break` where a dictionary word ends. A missing edge
    /// fails the whole range; if the range is consumed without an early hit,
    /// succeeds iff the node at `end` is terminal.
    pub fn find_break(&self, word: &str, start: usize, end: usize, min_break: usize)
                      -> Option<usize> {
        assert!(end < word.len(), "range end {} is outside {:?}", end, word);
        self.root.get()
            .and_then(|root| root.find_break(word.as_bytes(), start, end, min_break))
    }

    fn get_node<'f>(&self, word: &str, node: Option<&'f ImmutableTrieNode<'f>>)
                    -> Option<&'f ImmutableTrieNode<'f>> {
        if word.is_empty() {
            return node;
        }
        if node.is_none() {
            return None;
        }
        let fst = word.chars().nth(0).unwrap();
        return self.get_node(&word[1..],
                             node.unwrap().get_child(fst));
    }
}

impl<'a> ImmutableTrieNode<'a> {
    pub(crate) fn find_break(&self, word: &[u8], start: usize, end: usize, min_break: usize)
                             -> Option<usize> {
        let mut node = self;
        for i in start..=end {
            node = node.get_child(word[i] as char)?;
            if i >= min_break && node.is_terminal {
                return Some(i);
            }
        }
        if node.is_terminal { Some(end) } else { None }
    }
}
