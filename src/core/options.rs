/// Option collector: builds the menu for a decision point and remembers
/// which one-shot options have been used up.

use rustc_hash::FxHashSet;

use crate::schema::entry::DialogOption;
use crate::schema::handle::{OptionHandle, SourceIndex};

/// One choice in the menu currently shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferedOption<'s> {
    pub source: SourceIndex,
    pub handle: OptionHandle,
    pub text: &'s str,
    pub target: &'s str,
    pub persistent: bool,
}

/// A one-shot option that has been chosen and must never be offered again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsumedOption {
    pub source: SourceIndex,
    pub handle: OptionHandle,
}

/// Offered menu plus the session-long record of consumed options.
///
/// The consumed record is never pruned: it outlives individual
/// conversations and is only dropped with the engine.
#[derive(Debug, Clone, Default)]
pub struct OptionCollector<'s> {
    offered: Vec<OfferedOption<'s>>,
    consumed: Vec<ConsumedOption>,
    consumed_lookup: FxHashSet<ConsumedOption>,
}

impl<'s> OptionCollector<'s> {
    pub fn new() -> Self {
        Self {
            offered: Vec::new(),
            consumed: Vec::new(),
            consumed_lookup: FxHashSet::default(),
        }
    }

    /// Consider one option entry for the menu being built. Options are kept
    /// in the order they are offered. Returns whether the option was added.
    pub fn offer(&mut self, source: SourceIndex, option: &DialogOption<'s>) -> bool {
        if !option.persistent && self.is_consumed(source, option.handle) {
            return false;
        }
        self.offered.push(OfferedOption {
            source,
            handle: option.handle,
            text: option.text,
            target: option.target,
            persistent: option.persistent,
        });
        true
    }

    /// Record a chosen option. Persistent options are never recorded.
    pub fn consume(&mut self, option: &OfferedOption<'s>) {
        if option.persistent {
            return;
        }
        let consumed = ConsumedOption {
            source: option.source,
            handle: option.handle,
        };
        if self.consumed_lookup.insert(consumed) {
            self.consumed.push(consumed);
        }
    }

    pub fn is_consumed(&self, source: SourceIndex, handle: OptionHandle) -> bool {
        self.consumed_lookup.contains(&ConsumedOption { source, handle })
    }

    pub fn offered(&self) -> &[OfferedOption<'s>] {
        &self.offered
    }

    pub fn get(&self, index: usize) -> Option<&OfferedOption<'s>> {
        self.offered.get(index)
    }

    pub fn len(&self) -> usize {
        self.offered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offered.is_empty()
    }

    /// Drop the current menu. Consumed options are kept.
    pub fn clear_offered(&mut self) {
        self.offered.clear();
    }

    /// Consumed options, in the order they were chosen.
    pub fn consumed(&self) -> &[ConsumedOption] {
        &self.consumed
    }
}
