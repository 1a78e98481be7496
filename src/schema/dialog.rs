use serde::{Deserialize, Serialize};

/// Authoring-side definition of a whole dialog file: an ordered list of
/// conversations, as read from RON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogDef {
    #[serde(default)]
    pub conversations: Vec<ConversationDef>,
}

/// A named, ordered sequence of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationDef {
    pub id: String,
    #[serde(default)]
    pub entries: Vec<EntryDef>,
}

/// Authoring-side definition of one conversation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntryDef {
    Line {
        actor: String,
        text: String,
    },
    Option {
        text: String,
        target: String,
        #[serde(default)]
        persistent: bool,
    },
    Redirect(String),
    Event(String),
}

impl ConversationDef {
    pub fn new(id: &str, entries: Vec<EntryDef>) -> Self {
        Self {
            id: id.to_string(),
            entries,
        }
    }
}

impl EntryDef {
    pub fn line(actor: &str, text: &str) -> Self {
        Self::Line {
            actor: actor.to_string(),
            text: text.to_string(),
        }
    }

    /// A one-shot option: suppressed for the rest of the session once chosen.
    pub fn option(text: &str, target: &str) -> Self {
        Self::Option {
            text: text.to_string(),
            target: target.to_string(),
            persistent: false,
        }
    }

    pub fn persistent_option(text: &str, target: &str) -> Self {
        Self::Option {
            text: text.to_string(),
            target: target.to_string(),
            persistent: true,
        }
    }

    pub fn redirect(target: &str) -> Self {
        Self::Redirect(target.to_string())
    }

    pub fn event(payload: &str) -> Self {
        Self::Event(payload.to_string())
    }
}
