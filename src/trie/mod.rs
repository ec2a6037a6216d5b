mod insert;
pub mod node;
mod tree;

pub use node::Node;
pub use tree::Trie;
