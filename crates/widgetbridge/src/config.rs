use smartstring::alias::String as SmartString;

pub const DEFAULT_WINDOW_TAG: &str = "GtkWindow";
pub const DEFAULT_APPLICATION_PROP: &str = "application";
pub const DEFAULT_TEXT_TAG: &str = "#text";
pub const DEFAULT_TEXT_LABEL_TAG: &str = "GtkLabel";

/// Tag conventions the adapter applies on top of the component table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    window_tag: SmartString,
    application_prop: SmartString,
    text_tag: SmartString,
    text_label_tag: SmartString,
}

impl HostConfig {
    pub fn new() -> Self {
        Self {
            window_tag: DEFAULT_WINDOW_TAG.into(),
            application_prop: DEFAULT_APPLICATION_PROP.into(),
            text_tag: DEFAULT_TEXT_TAG.into(),
            text_label_tag: DEFAULT_TEXT_LABEL_TAG.into(),
        }
    }

    /// Tag whose instances receive the owning application as a prop
    pub fn window_tag(mut self, tag: impl Into<SmartString>) -> Self {
        self.window_tag = tag.into();
        self
    }

    pub fn application_prop(mut self, key: impl Into<SmartString>) -> Self {
        self.application_prop = key.into();
        self
    }

    /// Reserved tag for bare text; never resolved against the component table
    pub fn text_tag(mut self, tag: impl Into<SmartString>) -> Self {
        self.text_tag = tag.into();
        self
    }

    /// Label widget suggested when text is rejected
    pub fn text_label_tag(mut self, tag: impl Into<SmartString>) -> Self {
        self.text_label_tag = tag.into();
        self
    }

    pub fn is_window(&self, tag: &str) -> bool {
        self.window_tag.as_str() == tag
    }

    pub fn is_text(&self, tag: &str) -> bool {
        self.text_tag.as_str() == tag
    }

    pub fn window(&self) -> &str {
        &self.window_tag
    }

    pub fn application_key(&self) -> &str {
        &self.application_prop
    }

    pub fn text(&self) -> &str {
        &self.text_tag
    }

    pub fn text_label(&self) -> &str {
        &self.text_label_tag
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::new()
    }
}
