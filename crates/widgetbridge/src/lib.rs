//! Host adapter projecting a declarative virtual widget tree onto an
//! imperative native toolkit.
//!
//! A reconciler walks the virtual tree and calls into [`HostAdapter`] one node
//! at a time: create an instance, attach or detach children, diff props and
//! commit the result. Signal subscriptions made for `on*` handler props are
//! tracked per instance so they can be replaced or torn down exactly.

pub mod adapter;
pub mod config;
pub mod diagnostics;
pub mod diff;
pub mod error;
pub mod event;
pub mod instance;
pub mod stub;
pub mod toolkit;

pub use adapter::HostAdapter;
pub use config::HostConfig;
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use diff::{UpdatePayload, diff_props};
pub use error::{HostError, Result};
pub use instance::{Instance, SignalRegistry};
pub use toolkit::{ComponentTable, ComponentTableBuilder, Container, SignalToken, Widget, WidgetClass};

// Re-export the value model so bindings need only one dependency
pub use widgetbridge_types::{CHILDREN_KEY, Handler, ObjectRef, PropValue, Props, VNode};
