use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

use crate::alphabet::{get_idx, ALPHABET};
use crate::wordlist::trie::node::TrieNode;

/// Query-phase trie node. Same shape as the build-phase node with the `Cell`s
/// stripped, which makes it `Sync` and shareable across scan threads.
pub(crate) struct ImmutableTrieNode<'a> {
    pub(crate) children: [Option<&'a ImmutableTrieNode<'a>>; ALPHABET.len()],
    pub(crate) letter: char,
    pub(crate) is_terminal: bool,
    pub(crate) depth: usize,
}

impl<'a> ImmutableTrieNode<'a> {
    pub(crate) fn from_mutable<'b>(mnode: &TrieNode,
                                   arena: &'b Arena<ImmutableTrieNode<'b>>)
                                   -> &'b ImmutableTrieNode<'b> {
        let mut children: [Option<&ImmutableTrieNode>; ALPHABET.len()] = Default::default();

        mnode.children.iter().zip(children.iter_mut())
            .for_each(|(old, new)|
                *new = old.get().map(|x| Self::from_mutable(x, arena))
            );

        arena.alloc(ImmutableTrieNode {
            children,
            letter: mnode.letter,
            is_terminal: mnode.is_terminal.get(),
            depth: mnode.depth,
        })
    }

    pub(crate) fn get_child(&self, c: char) -> Option<&'a ImmutableTrieNode<'a>> {
        self.children[get_idx(c)]
    }
}

impl Debug for ImmutableTrieNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImmutableTrieNode")
            .field("letter", &self.letter)
            .field("depth", &self.depth)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.iter()
                .filter(|x| x.is_some())
                .map(|x| x.as_ref().unwrap().letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
