//! Naming convention linking handler props to native signals:
//! a prop `onClicked` subscribes to the signal `clicked`.

use smartstring::alias::String as SmartString;
use widgetbridge_types::CHILDREN_KEY;

const HANDLER_PREFIX: &str = "on";

/// How the adapter treats a prop key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropClass {
    /// The reserved children entry, never applied to a widget
    Children,
    /// Event handler for the named signal
    Handler(SmartString),
    /// Passed through to the widget verbatim
    Plain,
}

pub fn classify(key: &str) -> PropClass {
    if key == CHILDREN_KEY {
        return PropClass::Children;
    }
    match event_name(key) {
        Some(event) => PropClass::Handler(event),
        None => PropClass::Plain,
    }
}

/// `"on"` followed by an uppercase ASCII letter
pub fn is_handler_key(key: &str) -> bool {
    key.strip_prefix(HANDLER_PREFIX)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Signal name for a handler key: `onStateSet` -> `stateSet`
pub fn event_name(key: &str) -> Option<SmartString> {
    if !is_handler_key(key) {
        return None;
    }
    let rest = &key[HANDLER_PREFIX.len()..];
    let mut chars = rest.chars();
    let first = chars.next()?;

    let mut name = SmartString::new();
    name.push(first.to_ascii_lowercase());
    name.push_str(chars.as_str());
    Some(name)
}

/// Handler key for a signal name: `clicked` -> `onClicked`
pub fn handler_key(event: &str) -> SmartString {
    let mut key = SmartString::from(HANDLER_PREFIX);
    let mut chars = event.chars();
    if let Some(first) = chars.next() {
        key.push(first.to_ascii_uppercase());
        key.push_str(chars.as_str());
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name() {
        assert_eq!(event_name("onClicked").as_deref(), Some("clicked"));
        assert_eq!(event_name("onStateSet").as_deref(), Some("stateSet"));
        assert_eq!(event_name("onX").as_deref(), Some("x"));
    }

    #[test]
    fn test_non_handler_keys() {
        assert_eq!(event_name("on"), None);
        assert_eq!(event_name("online"), None);
        assert_eq!(event_name("label"), None);
        assert_eq!(event_name("On"), None);
        assert_eq!(event_name("on_clicked"), None);
        assert_eq!(event_name(""), None);
    }

    #[test]
    fn test_handler_key_round_trip() {
        assert_eq!(handler_key("clicked").as_str(), "onClicked");
        assert_eq!(handler_key("stateSet").as_str(), "onStateSet");
        assert_eq!(
            event_name(&handler_key("valueChanged")).as_deref(),
            Some("valueChanged")
        );
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("children"), PropClass::Children);
        assert_eq!(classify("onToggled"), PropClass::Handler("toggled".into()));
        assert_eq!(classify("active"), PropClass::Plain);
        assert_eq!(classify("online"), PropClass::Plain);
    }
}
