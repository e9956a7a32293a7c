//! Capabilities the adapter consumes from a native toolkit binding.

use crate::instance::Instance;
use smartstring::alias::String as SmartString;
use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;
use widgetbridge_types::{Handler, PropValue, Props};

/// Opaque subscription token issued by [`Widget::connect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalToken(u64);

impl SignalToken {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A native, toolkit-owned widget.
///
/// Methods take `&self`: like a GObject handle, the widget manages its own
/// interior mutability. A setter may emit signals synchronously, and the
/// handlers it runs may read or mutate the same widget, so implementations
/// must not hold a borrow of their state while invoking handlers.
pub trait Widget: 'static {
    /// Assign a property. `PropValue::Null` means "cleared".
    fn set_property(&self, key: &str, value: PropValue);

    /// Subscribe `handler` to `signal`, returning the token needed to undo it
    fn connect(&self, signal: &str, handler: Handler) -> SignalToken;

    fn disconnect(&self, token: SignalToken);

    /// Make the widget visible. Widgets without the capability ignore it.
    fn show(&self) {}

    /// Container capability, `None` for widgets that cannot hold children
    fn as_container(&self) -> Option<&dyn Container> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// Ability to hold and release child widgets.
///
/// No borrow of the parent is held while these run, so an implementation may
/// freely reach the child's widget through [`Instance::widget`].
pub trait Container {
    fn add(&self, child: &Instance);

    fn remove(&self, child: &Instance);

    /// Insert `child` ahead of `before`. Containers without ordering append.
    fn insert_before(&self, child: &Instance, _before: &Instance) {
        self.add(child);
    }
}

/// A constructible widget type
pub trait WidgetClass {
    fn type_name(&self) -> &str;

    /// Build a widget from its initial plain props
    fn construct(&self, props: Props) -> Box<dyn Widget>;

    /// Whether `event` names a signal on this type
    fn has_signal(&self, event: &str) -> bool;
}

/// Immutable tag -> widget class table
#[derive(Clone, Default)]
pub struct ComponentTable {
    classes: HashMap<SmartString, Rc<dyn WidgetClass>>,
}

impl ComponentTable {
    pub fn builder() -> ComponentTableBuilder {
        ComponentTableBuilder::default()
    }

    pub fn get(&self, tag: &str) -> Option<&Rc<dyn WidgetClass>> {
        self.classes.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.classes.contains_key(tag)
    }

    /// Registered tags, sorted
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.classes.keys().map(|t| t.as_str()).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl std::fmt::Debug for ComponentTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentTable")
            .field("tags", &self.tags())
            .finish()
    }
}

#[derive(Default)]
pub struct ComponentTableBuilder {
    classes: HashMap<SmartString, Rc<dyn WidgetClass>>,
}

impl ComponentTableBuilder {
    /// Map `tag` to `class`. A later registration for the same tag wins.
    pub fn register(mut self, tag: impl Into<SmartString>, class: Rc<dyn WidgetClass>) -> Self {
        self.classes.insert(tag.into(), class);
        self
    }

    pub fn build(self) -> ComponentTable {
        ComponentTable {
            classes: self.classes,
        }
    }
}
