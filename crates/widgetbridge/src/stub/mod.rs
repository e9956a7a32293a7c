//! Headless in-memory toolkit.
//!
//! Every call the adapter makes is appended to a shared [`Journal`], so tests
//! and demos can check exactly what reached the "native" side.

mod gtk;
mod widget;

pub use gtk::gtk_table;
pub use widget::{StubClass, StubWidget, emit};

use crate::toolkit::SignalToken;
use smartstring::alias::String as SmartString;
use std::cell::RefCell;
use std::rc::Rc;
use widgetbridge_types::PropValue;

/// Identifier the stub assigns to each constructed widget
pub type WidgetId = u32;

/// A toolkit call observed by the stub
#[derive(Debug, Clone, PartialEq)]
pub enum StubCall {
    Construct {
        widget: WidgetId,
        type_name: SmartString,
    },
    Set {
        widget: WidgetId,
        key: SmartString,
        value: PropValue,
    },
    Connect {
        widget: WidgetId,
        signal: SmartString,
        token: SignalToken,
    },
    Disconnect {
        widget: WidgetId,
        token: SignalToken,
    },
    Show {
        widget: WidgetId,
    },
    Add {
        parent: WidgetId,
        child: Option<WidgetId>,
    },
    Remove {
        parent: WidgetId,
        child: Option<WidgetId>,
    },
    InsertBefore {
        parent: WidgetId,
        child: Option<WidgetId>,
        before: Option<WidgetId>,
    },
}

#[derive(Debug, Default)]
struct JournalState {
    calls: Vec<StubCall>,
    next_widget: WidgetId,
    next_token: u64,
}

/// Shared, ordered log of stub toolkit calls
#[derive(Debug, Clone, Default)]
pub struct Journal {
    state: Rc<RefCell<JournalState>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every call recorded so far
    pub fn calls(&self) -> Vec<StubCall> {
        self.state.borrow().calls.clone()
    }

    /// Drain the recorded calls
    pub fn take(&self) -> Vec<StubCall> {
        std::mem::take(&mut self.state.borrow_mut().calls)
    }

    pub fn clear(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn len(&self) -> usize {
        self.state.borrow().calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().calls.is_empty()
    }

    /// Number of recorded calls matching `pred`
    pub fn count(&self, pred: impl Fn(&StubCall) -> bool) -> usize {
        self.state.borrow().calls.iter().filter(|c| pred(c)).count()
    }

    pub(crate) fn record(&self, call: StubCall) {
        self.state.borrow_mut().calls.push(call);
    }

    pub(crate) fn next_widget(&self) -> WidgetId {
        let mut state = self.state.borrow_mut();
        let id = state.next_widget;
        state.next_widget += 1;
        id
    }

    pub(crate) fn next_token(&self) -> SignalToken {
        let mut state = self.state.borrow_mut();
        state.next_token += 1;
        SignalToken::new(state.next_token)
    }
}
