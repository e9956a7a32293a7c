use crate::toolkit::{SignalToken, Widget, WidgetClass};
use smallvec::SmallVec;
use smartstring::alias::String as SmartString;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Connected signals of one instance: event name -> live subscription token.
///
/// Holds exactly the events whose handler prop is currently set and
/// recognized. Only the adapter mutates it.
#[derive(Debug, Default)]
pub struct SignalRegistry {
    entries: SmallVec<[(SmartString, SignalToken); 4]>,
}

impl SignalRegistry {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    pub fn get(&self, event: &str) -> Option<SignalToken> {
        self.entries
            .iter()
            .find(|(e, _)| e.as_str() == event)
            .map(|(_, t)| *t)
    }

    pub fn contains(&self, event: &str) -> bool {
        self.get(event).is_some()
    }

    pub fn events(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(e, _)| e.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record `token` for `event`, returning the token it replaces
    pub(crate) fn insert(&mut self, event: &str, token: SignalToken) -> Option<SignalToken> {
        match self.entries.iter_mut().find(|(e, _)| e.as_str() == event) {
            Some((_, slot)) => Some(std::mem::replace(slot, token)),
            None => {
                self.entries.push((event.into(), token));
                None
            }
        }
    }

    pub(crate) fn remove(&mut self, event: &str) -> Option<SignalToken> {
        let index = self.entries.iter().position(|(e, _)| e.as_str() == event)?;
        Some(self.entries.remove(index).1)
    }
}

struct InstanceInner {
    tag: SmartString,
    class: Rc<dyn WidgetClass>,
    widget: Box<dyn Widget>,
    signals: RefCell<SignalRegistry>,
}

/// Native handle backing one virtual node.
///
/// Clones share the same widget and signal registry.
#[derive(Clone)]
pub struct Instance {
    inner: Rc<InstanceInner>,
}

impl Instance {
    pub(crate) fn new(tag: &str, class: Rc<dyn WidgetClass>, widget: Box<dyn Widget>) -> Self {
        Self {
            inner: Rc::new(InstanceInner {
                tag: tag.into(),
                class,
                widget,
                signals: RefCell::new(SignalRegistry::new()),
            }),
        }
    }

    /// Tag the instance was created from
    pub fn tag(&self) -> &str {
        &self.inner.tag
    }

    pub fn type_name(&self) -> &str {
        self.inner.class.type_name()
    }

    pub fn class(&self) -> &Rc<dyn WidgetClass> {
        &self.inner.class
    }

    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The native widget. Never borrowed by the adapter across toolkit calls,
    /// so signal handlers may reach it at any time.
    pub fn widget(&self) -> &dyn Widget {
        &*self.inner.widget
    }

    /// Run `f` on the concrete widget if it is a `T`
    pub fn downcast_widget<T: Widget, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.widget().as_any().downcast_ref::<T>().map(f)
    }

    pub fn signals(&self) -> Ref<'_, SignalRegistry> {
        self.inner.signals.borrow()
    }

    pub(crate) fn signals_mut(&self) -> RefMut<'_, SignalRegistry> {
        self.inner.signals.borrow_mut()
    }

    /// Snapshot of the connected event names
    pub fn connected_signals(&self) -> Vec<SmartString> {
        self.signals().events().map(SmartString::from).collect()
    }

    pub fn signal_token(&self, event: &str) -> Option<SignalToken> {
        self.signals().get(event)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("tag", &self.tag())
            .field("type", &self.type_name())
            .field("signals", &*self.signals())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_insert_replaces() {
        let mut registry = SignalRegistry::new();

        assert_eq!(registry.insert("clicked", SignalToken::new(1)), None);
        assert_eq!(
            registry.insert("clicked", SignalToken::new(2)),
            Some(SignalToken::new(1))
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("clicked"), Some(SignalToken::new(2)));
    }

    #[test]
    fn test_registry_remove() {
        let mut registry = SignalRegistry::new();
        registry.insert("clicked", SignalToken::new(1));
        registry.insert("toggled", SignalToken::new(2));

        assert_eq!(registry.remove("clicked"), Some(SignalToken::new(1)));
        assert_eq!(registry.remove("clicked"), None);
        assert!(!registry.contains("clicked"));
        assert_eq!(registry.events().collect::<Vec<_>>(), vec!["toggled"]);
    }
}
