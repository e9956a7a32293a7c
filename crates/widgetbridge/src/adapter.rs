use crate::config::HostConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::diff::{UpdatePayload, diff_props};
use crate::error::{HostError, Result};
use crate::event::{self, PropClass};
use crate::instance::Instance;
use crate::toolkit::ComponentTable;
use smallvec::SmallVec;
use smartstring::alias::String as SmartString;
use tracing::trace;
use widgetbridge_types::{Handler, ObjectRef, PropValue, Props};

/// Host side of the reconciler: turns virtual nodes into native instances and
/// keeps them in sync. Works on one node per call and never walks the tree.
pub struct HostAdapter<S: DiagnosticSink = TracingSink> {
    table: ComponentTable,
    sink: S,
    config: HostConfig,
}

impl HostAdapter<TracingSink> {
    /// Adapter reporting notices through `tracing`
    pub fn with_tracing(table: ComponentTable) -> Self {
        Self::new(table, TracingSink)
    }
}

impl<S: DiagnosticSink> HostAdapter<S> {
    pub fn new(table: ComponentTable, sink: S) -> Self {
        Self::with_config(table, sink, HostConfig::default())
    }

    pub fn with_config(table: ComponentTable, sink: S, config: HostConfig) -> Self {
        Self {
            table,
            sink,
            config,
        }
    }

    pub fn table(&self) -> &ComponentTable {
        &self.table
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Build the native instance for `tag`.
    ///
    /// The constructor only sees plain props, plus `application` when `tag` is
    /// the window tag. Handler props are connected after construction when
    /// the widget type knows the signal, and dropped with a notice otherwise.
    pub fn create_instance(
        &self,
        tag: &str,
        props: &Props,
        application: Option<&ObjectRef>,
    ) -> Result<Instance> {
        if self.config.is_text(tag) {
            return Err(self.text_error());
        }
        let class = self
            .table
            .get(tag)
            .cloned()
            .ok_or_else(|| HostError::UnknownComponent { tag: tag.into() })?;

        let mut initial = Props::new();
        let mut handlers: SmallVec<[(SmartString, &PropValue); 4]> = SmallVec::new();
        for (key, value) in props.iter() {
            match event::classify(key) {
                PropClass::Children => {}
                PropClass::Handler(name) => handlers.push((name, value)),
                PropClass::Plain => {
                    initial.insert(key, value.clone());
                }
            }
        }

        if self.config.is_window(tag) {
            let app = application.ok_or_else(|| HostError::MissingApplication { tag: tag.into() })?;
            initial.insert(self.config.application_key(), app.clone());
        }

        let widget = class.construct(initial);
        let instance = Instance::new(tag, class, widget);

        for (name, value) in handlers {
            match value {
                PropValue::Handler(handler) => self.connect_handler(&instance, &name, handler.clone()),
                PropValue::Null => {}
                other => self.sink.notice(&format!(
                    "{}: {} expects a handler, got {}",
                    tag,
                    event::handler_key(&name),
                    other.type_name()
                )),
            }
        }

        trace!(tag, signals = instance.signals().len(), "created instance");
        Ok(instance)
    }

    /// Bare text is never projected onto a widget
    pub fn create_text_instance(&self, text: &str) -> Result<Instance> {
        trace!(len = text.len(), "rejected text instance");
        Err(self.text_error())
    }

    /// Text is always wrapped by a label widget, never set as content
    pub fn should_set_text_content(&self, _tag: &str, _props: &Props) -> bool {
        false
    }

    /// No instance needs a commit-mount pass
    pub fn finalize_initial_children(&self, _instance: &Instance, _tag: &str, _props: &Props) -> bool {
        false
    }

    pub fn public_instance(&self, instance: &Instance) -> Instance {
        instance.clone()
    }

    pub fn append_initial_child(&self, parent: &Instance, child: &Instance) {
        self.attach(parent, child);
    }

    pub fn append_child(&self, parent: &Instance, child: &Instance) {
        self.attach(parent, child);
    }

    pub fn append_child_to_container(&self, container: &Instance, child: &Instance) {
        self.attach(container, child);
    }

    /// Show `child` and place it ahead of `before` in a container parent
    pub fn insert_before(&self, parent: &Instance, child: &Instance, before: &Instance) {
        child.widget().show();
        let inserted = match parent.widget().as_container() {
            Some(container) => {
                container.insert_before(child, before);
                true
            }
            None => false,
        };
        trace!(parent = parent.tag(), child = child.tag(), inserted, "insert before");
    }

    pub fn remove_child(&self, parent: &Instance, child: &Instance) {
        self.detach(parent, child);
    }

    pub fn remove_child_from_container(&self, container: &Instance, child: &Instance) {
        self.detach(container, child);
    }

    /// Diff old and new props of one node. The instance and tag are not consulted.
    pub fn prepare_update(
        &self,
        _instance: Option<&Instance>,
        _tag: &str,
        old: &Props,
        new: &Props,
    ) -> Option<UpdatePayload> {
        diff_props(old, new)
    }

    /// Apply a payload from [`HostAdapter::prepare_update`] in place
    pub fn commit_update(&self, instance: &Instance, payload: &UpdatePayload) {
        for (key, value) in payload.set() {
            match event::classify(key) {
                PropClass::Handler(name) => match value {
                    PropValue::Handler(handler) => {
                        self.connect_handler(instance, &name, handler.clone())
                    }
                    other => {
                        if !other.is_null() {
                            self.sink.notice(&format!(
                                "{}: {} expects a handler, got {}",
                                instance.tag(),
                                key,
                                other.type_name()
                            ));
                        }
                        self.disconnect_handler(instance, &name);
                    }
                },
                PropClass::Children => {}
                PropClass::Plain => {
                    instance.widget().set_property(key, value.clone());
                }
            }
        }

        for key in payload.unset() {
            match event::classify(key) {
                PropClass::Handler(name) => self.disconnect_handler(instance, &name),
                PropClass::Children => {}
                PropClass::Plain => {
                    instance.widget().set_property(key, PropValue::Null);
                }
            }
        }

        trace!(
            tag = instance.tag(),
            set = payload.set().len(),
            unset = payload.unset().len(),
            "committed update"
        );
    }

    fn attach(&self, parent: &Instance, child: &Instance) {
        child.widget().show();
        let added = match parent.widget().as_container() {
            Some(container) => {
                container.add(child);
                true
            }
            None => false,
        };
        trace!(parent = parent.tag(), child = child.tag(), added, "attach child");
    }

    fn detach(&self, parent: &Instance, child: &Instance) {
        let removed = match parent.widget().as_container() {
            Some(container) => {
                container.remove(child);
                true
            }
            None => false,
        };
        trace!(parent = parent.tag(), child = child.tag(), removed, "detach child");
    }

    /// Connect `handler` to `name`, replacing any live subscription first
    fn connect_handler(&self, instance: &Instance, name: &str, handler: Handler) {
        if !instance.class().has_signal(name) {
            self.sink.notice(&format!(
                "{} has no signal '{}', ignoring {}",
                instance.type_name(),
                name,
                event::handler_key(name)
            ));
            return;
        }

        // No registry borrow is held across toolkit calls.
        let previous = instance.signal_token(name);
        if let Some(old) = previous {
            instance.widget().disconnect(old);
        }
        let token = instance.widget().connect(name, handler);
        instance.signals_mut().insert(name, token);
    }

    fn disconnect_handler(&self, instance: &Instance, name: &str) {
        let token = instance.signals_mut().remove(name);
        if let Some(token) = token {
            instance.widget().disconnect(token);
        }
    }

    fn text_error(&self) -> HostError {
        HostError::UnsupportedTextInstance {
            label_tag: self.config.text_label().into(),
        }
    }
}
