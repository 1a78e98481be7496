/// Dialog store adapter: the read-only query surface the engine walks,
/// plus an in-memory store loadable from RON.

use rustc_hash::FxHashMap;
use std::path::Path;
use thiserror::Error;

use crate::schema::dialog::{ConversationDef, DialogDef, EntryDef};
use crate::schema::entry::{DialogOption, Entry};
use crate::schema::handle::{ConversationHandle, OptionHandle};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Read-only access to one loaded collection of conversations.
///
/// Content behind a store is assumed to be already validated; the engine
/// only walks it.
pub trait DialogStore {
    /// Number of conversations in this store.
    fn conversation_count(&self) -> usize;

    /// Identifier of the conversation at `index`, in store order.
    fn conversation_id(&self, index: usize) -> Option<&str>;

    /// Look up a conversation by identifier within this store.
    fn find_conversation(&self, id: &str) -> Option<ConversationHandle>;

    /// Number of entries in a conversation. Unknown handles have none.
    fn entry_count(&self, conversation: ConversationHandle) -> usize;

    /// The entry at `index` in a conversation.
    fn entry(&self, conversation: ConversationHandle, index: usize) -> Option<Entry<'_>>;
}

/// A dialog store that owns its conversations in memory.
///
/// Identifiers are matched exactly; if one file defines the same
/// identifier twice, the first definition wins.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    conversations: Vec<ConversationDef>,
    index: FxHashMap<String, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_def(def: DialogDef) -> Self {
        let mut store = Self::new();
        for conversation in def.conversations {
            store.insert(conversation);
        }
        store
    }

    /// Parse a store from a RON string.
    pub fn parse_ron(input: &str) -> Result<Self, StoreError> {
        let def: DialogDef = ron::from_str(input)?;
        Ok(Self::from_def(def))
    }

    /// Load a store from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Append a conversation.
    pub fn insert(&mut self, conversation: ConversationDef) {
        let position = self.conversations.len();
        self.index.entry(conversation.id.clone()).or_insert(position);
        self.conversations.push(conversation);
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    fn conversation(&self, handle: ConversationHandle) -> Option<&ConversationDef> {
        usize::try_from(handle.0)
            .ok()
            .and_then(|i| self.conversations.get(i))
    }
}

/// Option handles pack the conversation position in the high half and the
/// entry position in the low half, so they stay stable and unique for the
/// lifetime of the store.
fn option_handle(conversation: ConversationHandle, index: usize) -> OptionHandle {
    OptionHandle((conversation.0 << 32) | (index as u64 & 0xFFFF_FFFF))
}

impl DialogStore for MemoryStore {
    fn conversation_count(&self) -> usize {
        self.conversations.len()
    }

    fn conversation_id(&self, index: usize) -> Option<&str> {
        self.conversations.get(index).map(|c| c.id.as_str())
    }

    fn find_conversation(&self, id: &str) -> Option<ConversationHandle> {
        self.index.get(id).map(|&position| ConversationHandle(position as u64))
    }

    fn entry_count(&self, conversation: ConversationHandle) -> usize {
        self.conversation(conversation).map_or(0, |c| c.entries.len())
    }

    fn entry(&self, conversation: ConversationHandle, index: usize) -> Option<Entry<'_>> {
        let def = self.conversation(conversation)?.entries.get(index)?;
        let entry = match def {
            EntryDef::Line { actor, text } => Entry::Line { actor, text },
            EntryDef::Option {
                text,
                target,
                persistent,
            } => Entry::Option(DialogOption {
                handle: option_handle(conversation, index),
                text,
                target,
                persistent: *persistent,
            }),
            EntryDef::Redirect(target) => Entry::Redirect { target },
            EntryDef::Event(payload) => Entry::Event { payload },
        };
        Some(entry)
    }
}
