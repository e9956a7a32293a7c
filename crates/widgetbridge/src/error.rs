use smartstring::alias::String as SmartString;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Unknown component: {tag}")]
    UnknownComponent { tag: SmartString },

    #[error("Widgetbridge does not support text instances. Use {label_tag} to display text")]
    UnsupportedTextInstance { label_tag: SmartString },

    #[error("{tag} requires an owning application reference")]
    MissingApplication { tag: SmartString },
}

pub type Result<T> = std::result::Result<T, HostError>;
