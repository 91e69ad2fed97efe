//! Structural elements module

mod member;
mod node;

pub use member::Member;
pub use node::Node;
