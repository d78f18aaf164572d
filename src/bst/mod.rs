//! Binary search tree without any rebalancing. Its height depends entirely on insertion order.

mod node;
mod set;
pub mod tree;

pub use self::node::Node;
pub use self::set::BstSet;
