use smallvec::SmallVec;
use smartstring::alias::String as SmartString;
use widgetbridge_types::{CHILDREN_KEY, PropValue, Props};

/// Minimal mutation moving an instance from its old props to its new ones.
///
/// `set` and `unset` never share a key and never contain the children key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePayload {
    set: SmallVec<[(SmartString, PropValue); 4]>,
    unset: SmallVec<[SmartString; 4]>,
}

impl UpdatePayload {
    pub fn set(&self) -> &[(SmartString, PropValue)] {
        &self.set
    }

    pub fn unset(&self) -> &[SmartString] {
        &self.unset
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.unset.is_empty()
    }
}

/// Compare two prop maps of the same node. `None` means nothing to commit.
pub fn diff_props(old: &Props, new: &Props) -> Option<UpdatePayload> {
    let mut payload = UpdatePayload::default();

    for (key, value) in new.iter().filter(|(k, _)| *k != CHILDREN_KEY) {
        if old.get(key) != Some(value) {
            payload.set.push((key.into(), value.clone()));
        }
    }

    for key in old.keys().filter(|k| *k != CHILDREN_KEY) {
        if !new.contains_key(key) {
            payload.unset.push(key.into());
        }
    }

    if payload.is_empty() { None } else { Some(payload) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgetbridge_types::{Handler, VNode};

    fn set_keys(payload: &UpdatePayload) -> Vec<&str> {
        payload.set().iter().map(|(k, _)| k.as_str()).collect()
    }

    fn unset_keys(payload: &UpdatePayload) -> Vec<&str> {
        payload.unset().iter().map(|k| k.as_str()).collect()
    }

    #[test]
    fn test_equal_props_yield_none() {
        let old = Props::new().with("props", 1);
        let new = Props::new().with("props", 1);
        assert_eq!(diff_props(&old, &new), None);
    }

    #[test]
    fn test_children_only_difference_yields_none() {
        let old = Props::new()
            .with("props", 1)
            .with(CHILDREN_KEY, vec![VNode::new("GtkLabel")]);
        let new = Props::new()
            .with("props", 1)
            .with(CHILDREN_KEY, vec![VNode::new("GtkButton")]);
        assert_eq!(diff_props(&old, &new), None);
    }

    #[test]
    fn test_children_added_or_removed_yields_none() {
        let old = Props::new().with("a", 1);
        let new = Props::new()
            .with("a", 1)
            .with(CHILDREN_KEY, vec![VNode::new("GtkLabel")]);
        assert_eq!(diff_props(&old, &new), None);
        assert_eq!(diff_props(&new, &old), None);
    }

    #[test]
    fn test_changed_value_is_set() {
        let old = Props::new()
            .with("prop", 1)
            .with(CHILDREN_KEY, vec![VNode::new("GtkLabel")]);
        let new = Props::new()
            .with("prop", 2)
            .with(CHILDREN_KEY, vec![VNode::new("GtkButton")]);

        let payload = diff_props(&old, &new).unwrap();
        assert_eq!(payload.set(), &[(SmartString::from("prop"), PropValue::Int(2))]);
        assert!(payload.unset().is_empty());
    }

    #[test]
    fn test_removed_key_is_unset() {
        let old = Props::new().with("prop1", 1).with("prop2", 1);
        let new = Props::new().with("prop1", 1);

        let payload = diff_props(&old, &new).unwrap();
        assert!(payload.set().is_empty());
        assert_eq!(unset_keys(&payload), vec!["prop2"]);
    }

    #[test]
    fn test_added_key_is_set() {
        let old = Props::new();
        let new = Props::new().with("label", "Go");

        let payload = diff_props(&old, &new).unwrap();
        assert_eq!(set_keys(&payload), vec!["label"]);
    }

    #[test]
    fn test_order_follows_each_map() {
        let old = Props::new().with("z", 1).with("keep", 0).with("y", 1);
        let new = Props::new().with("b", 2).with("keep", 0).with("a", 2);

        let payload = diff_props(&old, &new).unwrap();
        assert_eq!(set_keys(&payload), vec!["b", "a"]);
        assert_eq!(unset_keys(&payload), vec!["z", "y"]);
    }

    #[test]
    fn test_set_and_unset_are_disjoint() {
        let old = Props::new().with("a", 1).with("b", 1);
        let new = Props::new().with("a", 2).with("c", 1);

        let payload = diff_props(&old, &new).unwrap();
        for key in payload.unset() {
            assert!(payload.set().iter().all(|(k, _)| k != key));
        }
        assert_eq!(set_keys(&payload), vec!["a", "c"]);
        assert_eq!(unset_keys(&payload), vec!["b"]);
    }

    #[test]
    fn test_handlers_compare_by_identity() {
        let handler = Handler::new(|_| {});
        let old = Props::new().with("onClicked", handler.clone());
        let same = Props::new().with("onClicked", handler);
        let fresh = Props::new().with("onClicked", Handler::new(|_| {}));

        assert_eq!(diff_props(&old, &same), None);
        assert_eq!(set_keys(&diff_props(&old, &fresh).unwrap()), vec!["onClicked"]);
    }

    #[test]
    fn test_null_value_is_not_absence() {
        let old = Props::new().with("label", PropValue::Null);
        let new = Props::new();

        let payload = diff_props(&old, &new).unwrap();
        assert_eq!(unset_keys(&payload), vec!["label"]);
    }
}
