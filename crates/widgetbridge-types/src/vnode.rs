use crate::{CHILDREN_KEY, PropValue, Props};
use smartstring::alias::String as SmartString;

/// Declarative description of one widget for a single render pass
#[derive(Debug, Clone)]
pub struct VNode {
    tag: SmartString,
    props: Props,
}

impl VNode {
    pub fn new(tag: impl Into<SmartString>) -> Self {
        Self {
            tag: tag.into(),
            props: Props::new(),
        }
    }

    pub fn with_props(tag: impl Into<SmartString>, props: Props) -> Self {
        Self {
            tag: tag.into(),
            props,
        }
    }

    pub fn prop(mut self, key: impl Into<SmartString>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Append one child after any existing children
    pub fn child(self, node: VNode) -> Self {
        self.children(std::iter::once(node))
    }

    /// Append children after any existing children
    pub fn children(mut self, nodes: impl IntoIterator<Item = VNode>) -> Self {
        let mut all = self.props.children().to_vec();
        all.extend(nodes);
        self.props.insert(CHILDREN_KEY, all);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn child_nodes(&self) -> &[VNode] {
        self.props.children()
    }
}
