pub mod trie;
pub mod search;
pub mod segment;

mod node;
pub(crate) mod trienode;
