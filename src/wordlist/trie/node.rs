use std::cell::Cell;
use std::fmt::{Debug, Formatter};

use typed_arena::Arena;

use crate::alphabet::{get_idx, ALPHABET};

/// Build-phase trie node. Children are arena references behind `Cell`s so the
/// tree can grow through a shared borrow while words stream in.
#[derive(Default)]
pub(crate) struct TrieNode<'a> {
    pub(crate) children: [Cell<Option<&'a TrieNode<'a>>>; ALPHABET.len()],
    pub(crate) letter: char,
    pub(crate) is_terminal: Cell<bool>,
    pub(crate) depth: usize,
}

impl<'a> TrieNode<'a> {
    pub(crate) fn get_child(&self, c: char) -> Option<&'a TrieNode<'a>> {
        self.children[get_idx(c)].get()
    }

    fn create_child(&self, c: char, arena: &'a Arena<TrieNode<'a>>) {
        self.children[get_idx(c)].set(
            Some(
                arena.alloc(TrieNode {
                    children: Default::default(),
                    letter: c,
                    is_terminal: Cell::new(false),
                    depth: self.depth + 1,
                })));
    }

    pub(crate) fn get_or_create_child<'f>(&'f self, c: char,
                                          arena: &'a Arena<TrieNode<'a>>)
                                          -> &'f Cell<Option<&'a TrieNode<'a>>> {
        if self.get_child(c).is_none() {
            self.create_child(c, arena);
        }
        &self.children[get_idx(c)]
    }
}

impl Debug for TrieNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("depth", &self.depth)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.iter()
                .filter(|x| x.get().is_some())
                .map(|x| x.get().unwrap().letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
