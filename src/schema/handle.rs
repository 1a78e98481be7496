use serde::{Deserialize, Serialize};

/// Position of a dialog store in the engine's load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceIndex(pub usize);

/// Opaque handle to a conversation inside one dialog store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationHandle(pub u64);

/// Opaque, stable handle to an option entry inside one dialog store.
///
/// Only meaningful together with the `SourceIndex` of the store that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionHandle(pub u64);

/// A conversation located by identifier: which store, and which
/// conversation inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationRef {
    pub source: SourceIndex,
    pub conversation: ConversationHandle,
}
