//! Value model shared between the host adapter and toolkit bindings.

mod props;
mod value;
mod vnode;

pub use props::Props;
pub use value::{Handler, ObjectRef, PropValue};
pub use vnode::VNode;

/// Reserved prop key holding a node's ordered children. Never a settable property.
pub const CHILDREN_KEY: &str = "children";
