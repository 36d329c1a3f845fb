use std::cell::Cell;
use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trienode::ImmutableTrieNode;

/// Build-phase dictionary. Words stream in through `add`, then `build`
/// freezes the tree into an [`ImmutableTrie`] for querying. The dictionary is
/// built once; `add` after `build` asserts.
pub struct Trie<'a> {
    pub(crate) root: TrieNode<'a>,
    arena: Arena<TrieNode<'a>>,
    pub built: Cell<bool>,
}

pub struct ImmutableTrie<'a> {
    pub(crate) root: Cell<Option<&'a ImmutableTrieNode<'a>>>,
    arena: Arena<ImmutableTrieNode<'a>>,
}

impl<'a> ImmutableTrie<'a> {
    pub fn new() -> ImmutableTrie<'a> {
        ImmutableTrie {
            root: Cell::new(None),
            arena: Arena::new(),
        }
    }
}

impl Trie<'_> {
    pub fn new() -> Self {
        Trie {
            root: Default::default(),
            built: Cell::new(false),
            arena: Arena::new(),
        }
    }
}

impl<'a> Trie<'a> {
    /// Insert one word. Precondition: lowercase a-z only; anything else
    /// panics with a description of the offending character. Re-inserting a
    /// word is a no-op.
    pub fn add(&'a self, word: &str) {
        assert!(!self.built.get());
        let mut current = &self.root;
        for c in word.chars() {
            current = current
                .get_or_create_child(c, &self.arena)
                .get()
                .unwrap()
        }
        current.is_terminal.set(true);
    }

    pub fn add_all<'f, I>(&'a self, items: I)
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().for_each(|x| { self.add(x); });
    }

    /// Freeze into the query-phase trie. `immutable` owns the converted
    /// nodes; this `Trie` is only good for dropping afterwards.
    pub fn build<'f>(&self, immutable: &'f ImmutableTrie<'f>) {
        self.built.set(true);
        let root = ImmutableTrieNode::from_mutable(&self.root, &immutable.arena);
        immutable.root.set(Some(root));
    }
}

impl<'a> Debug for Trie<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            l.entry(x);
            x.children.iter().for_each(|c| c.get().map(|c| stack.push(c)).unwrap_or(()));
        }
        l.finish()
    }
}
