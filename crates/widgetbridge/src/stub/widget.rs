use super::{Journal, StubCall, WidgetId};
use crate::instance::Instance;
use crate::toolkit::{Container, SignalToken, Widget, WidgetClass};
use smartstring::alias::String as SmartString;
use std::any::Any;
use std::cell::RefCell;
use widgetbridge_types::{Handler, PropValue, Props};

/// Widget type of the stub toolkit
pub struct StubClass {
    type_name: SmartString,
    signals: Vec<SmartString>,
    notifies: Vec<(SmartString, SmartString)>,
    container: bool,
    journal: Journal,
}

impl StubClass {
    pub fn new(type_name: impl Into<SmartString>, journal: &Journal) -> Self {
        Self {
            type_name: type_name.into(),
            signals: Vec::new(),
            notifies: Vec::new(),
            container: false,
            journal: journal.clone(),
        }
    }

    /// Declare the signals this type emits
    pub fn signals(mut self, names: &[&str]) -> Self {
        self.signals.extend(names.iter().map(|n| SmartString::from(*n)));
        self
    }

    /// Emit `signal` synchronously, with the new value as its argument,
    /// whenever `property` is set (as GTK does for `active` -> `toggled`)
    pub fn notify(mut self, property: &str, signal: &str) -> Self {
        self.notifies.push((property.into(), signal.into()));
        self
    }

    /// Give instances the container capability
    pub fn container(mut self) -> Self {
        self.container = true;
        self
    }
}

impl WidgetClass for StubClass {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn construct(&self, props: Props) -> Box<dyn Widget> {
        let id = self.journal.next_widget();
        self.journal.record(StubCall::Construct {
            widget: id,
            type_name: self.type_name.clone(),
        });
        Box::new(StubWidget {
            id,
            type_name: self.type_name.clone(),
            journal: self.journal.clone(),
            initial: props.clone(),
            container: self.container,
            notifies: self.notifies.clone(),
            state: RefCell::new(StubState {
                properties: props,
                ..StubState::default()
            }),
        })
    }

    fn has_signal(&self, event: &str) -> bool {
        self.signals.iter().any(|s| s.as_str() == event)
    }
}

#[derive(Default)]
struct StubState {
    properties: Props,
    shown: u32,
    children: Vec<Instance>,
    handlers: Vec<(SignalToken, SmartString, Handler)>,
}

/// In-memory widget recording its state and every call made on it.
///
/// State sits behind a `RefCell` that is never held while handlers run.
pub struct StubWidget {
    id: WidgetId,
    type_name: SmartString,
    journal: Journal,
    initial: Props,
    container: bool,
    notifies: Vec<(SmartString, SmartString)>,
    state: RefCell<StubState>,
}

impl StubWidget {
    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Props the constructor received
    pub fn initial_props(&self) -> &Props {
        &self.initial
    }

    /// Current value of a property; `Some(PropValue::Null)` once cleared
    pub fn property(&self, key: &str) -> Option<PropValue> {
        self.state.borrow().properties.get(key).cloned()
    }

    pub fn properties(&self) -> Props {
        self.state.borrow().properties.clone()
    }

    pub fn shown_count(&self) -> u32 {
        self.state.borrow().shown
    }

    pub fn is_visible(&self) -> bool {
        self.shown_count() > 0
    }

    pub fn children(&self) -> Vec<Instance> {
        self.state.borrow().children.clone()
    }

    /// Live subscriptions for `signal`
    pub fn subscription_count(&self, signal: &str) -> usize {
        self.state
            .borrow()
            .handlers
            .iter()
            .filter(|(_, s, _)| s.as_str() == signal)
            .count()
    }

    pub fn handlers_for(&self, signal: &str) -> Vec<Handler> {
        self.state
            .borrow()
            .handlers
            .iter()
            .filter(|(_, s, _)| s.as_str() == signal)
            .map(|(_, _, h)| h.clone())
            .collect()
    }

    /// Run every live handler of `signal`; returns how many ran
    pub fn fire(&self, signal: &str, args: &[PropValue]) -> usize {
        let handlers = self.handlers_for(signal);
        for handler in &handlers {
            handler.call(args);
        }
        handlers.len()
    }
}

fn stub_id(instance: &Instance) -> Option<WidgetId> {
    instance.downcast_widget::<StubWidget, _>(StubWidget::id)
}

impl Widget for StubWidget {
    fn set_property(&self, key: &str, value: PropValue) {
        self.journal.record(StubCall::Set {
            widget: self.id,
            key: key.into(),
            value: value.clone(),
        });
        self.state.borrow_mut().properties.insert(key, value.clone());

        let notify = self
            .notifies
            .iter()
            .find(|(p, _)| p.as_str() == key)
            .map(|(_, signal)| signal.clone());
        if let Some(signal) = notify {
            self.fire(&signal, &[value]);
        }
    }

    fn connect(&self, signal: &str, handler: Handler) -> SignalToken {
        let token = self.journal.next_token();
        self.journal.record(StubCall::Connect {
            widget: self.id,
            signal: signal.into(),
            token,
        });
        self.state
            .borrow_mut()
            .handlers
            .push((token, signal.into(), handler));
        token
    }

    fn disconnect(&self, token: SignalToken) {
        self.journal.record(StubCall::Disconnect {
            widget: self.id,
            token,
        });
        self.state.borrow_mut().handlers.retain(|(t, _, _)| *t != token);
    }

    fn show(&self) {
        self.state.borrow_mut().shown += 1;
        self.journal.record(StubCall::Show { widget: self.id });
    }

    fn as_container(&self) -> Option<&dyn Container> {
        if self.container {
            Some(self as &dyn Container)
        } else {
            None
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Container for StubWidget {
    fn add(&self, child: &Instance) {
        self.journal.record(StubCall::Add {
            parent: self.id,
            child: stub_id(child),
        });
        self.state.borrow_mut().children.push(child.clone());
    }

    fn remove(&self, child: &Instance) {
        self.journal.record(StubCall::Remove {
            parent: self.id,
            child: stub_id(child),
        });
        self.state.borrow_mut().children.retain(|c| !c.ptr_eq(child));
    }

    fn insert_before(&self, child: &Instance, before: &Instance) {
        self.journal.record(StubCall::InsertBefore {
            parent: self.id,
            child: stub_id(child),
            before: stub_id(before),
        });
        let mut state = self.state.borrow_mut();
        state.children.retain(|c| !c.ptr_eq(child));
        match state.children.iter().position(|c| c.ptr_eq(before)) {
            Some(index) => state.children.insert(index, child.clone()),
            None => state.children.push(child.clone()),
        }
    }
}

/// Fire `signal` on a stub-backed instance, as the toolkit would.
/// Returns how many handlers ran.
pub fn emit(instance: &Instance, signal: &str, args: &[PropValue]) -> usize {
    instance
        .downcast_widget::<StubWidget, _>(|w| w.fire(signal, args))
        .unwrap_or(0)
}
