/// The playback state machine: store lookup → entry dispatch → caller-visible pause.
///
/// Wires together the conversation stack, the option collector, and the
/// redirect resolver. The engine is driven one step at a time by the host
/// game loop through `execute` and `select_option`.

use log::{debug, error, info, warn};
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::core::config::{ConfigError, EngineConfig};
use crate::core::options::{ConsumedOption, OfferedOption, OptionCollector};
use crate::core::redirect::{self, RedirectOutcome};
use crate::core::stack::{ConversationStack, StackFrame};
use crate::core::store::DialogStore;
use crate::schema::entry::Entry;
use crate::schema::handle::{ConversationRef, OptionHandle, SourceIndex};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("conversation not found: {0}")]
    ConversationNotFound(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Where the engine is between calls.
///
/// `RunConversation` and `ExecutingOptions` are transient: `execute`
/// always moves past them except right after an event (see `execute`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
    /// Idle, no conversation active.
    #[default]
    Ready,
    /// About to dispatch the entry at the top frame's cursor.
    RunConversation,
    /// A line is the current output.
    DisplayingSpeech,
    /// A menu is the current output; waiting for `select_option`.
    DisplayingOptions,
    /// A selection was made but not applied yet.
    ExecutingOptions,
    /// An event is the current output.
    SendingEvent,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ready => "READY",
            Self::RunConversation => "RUN_CONVERSATION",
            Self::DisplayingSpeech => "DISPLAYING_SPEECH",
            Self::DisplayingOptions => "DISPLAYING_OPTIONS",
            Self::ExecutingOptions => "EXECUTING_OPTIONS",
            Self::SendingEvent => "SENDING_EVENT",
        };
        f.write_str(name)
    }
}

/// The dialog playback engine. Built via `DialogEngine::new()` or
/// `DialogEngine::builder()`.
///
/// Stores are borrowed, not owned: they must outlive the engine.
pub struct DialogEngine<'s> {
    sources: Vec<&'s dyn DialogStore>,
    config: EngineConfig,
    state: PlaybackState,
    stack: ConversationStack,
    options: OptionCollector<'s>,
    pending_selection: Option<usize>,
}

/// Builder for constructing a `DialogEngine`.
pub struct DialogEngineBuilder<'s> {
    stores: Vec<&'s dyn DialogStore>,
    config_path: Option<String>,
    /// Directly provided config (takes precedence over `config_path`).
    config: Option<EngineConfig>,
}

impl<'s> Default for DialogEngine<'s> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s> DialogEngine<'s> {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            sources: Vec::new(),
            config,
            state: PlaybackState::Ready,
            stack: ConversationStack::new(),
            options: OptionCollector::new(),
            pending_selection: None,
        }
    }

    pub fn builder() -> DialogEngineBuilder<'s> {
        DialogEngineBuilder {
            stores: Vec::new(),
            config_path: None,
            config: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Append a store. Later stores shadow same-named conversations of
    /// earlier ones.
    pub fn add_store(&mut self, store: &'s dyn DialogStore) -> SourceIndex {
        self.sources.push(store);
        let index = SourceIndex(self.sources.len() - 1);
        debug!(
            "added dialog store {} with {} conversations",
            index.0,
            store.conversation_count()
        );
        index
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Total number of conversations across all stores.
    pub fn conversation_count(&self) -> usize {
        self.sources.iter().map(|s| s.conversation_count()).sum()
    }

    /// Identifier of a conversation by flat index: stores in load order,
    /// conversations in store order.
    pub fn conversation_id(&self, index: usize) -> Option<&'s str> {
        let mut remaining = index;
        for &store in &self.sources {
            let count = store.conversation_count();
            if remaining < count {
                return store.conversation_id(remaining);
            }
            remaining -= count;
        }
        None
    }

    /// All conversation identifiers in flat order, shadowed ones included.
    pub fn conversation_ids(&self) -> impl Iterator<Item = &'s str> + '_ {
        self.sources.iter().flat_map(|&store| {
            (0..store.conversation_count()).filter_map(move |i| store.conversation_id(i))
        })
    }

    /// Locate a conversation, searching the most recently added store first.
    pub fn find_conversation(&self, id: &str) -> Option<ConversationRef> {
        find_in_sources(&self.sources, id)
    }

    /// Begin playback of `id`. Nothing is dispatched until the next `execute`.
    ///
    /// # Panics
    ///
    /// Panics if the engine is not `Ready`. A conversation in progress must
    /// be ended through an exit redirect first.
    pub fn start_conversation(&mut self, id: &str) -> Result<(), EngineError> {
        assert!(
            self.state == PlaybackState::Ready,
            "start_conversation(\"{}\") called while {}",
            id,
            self.state
        );

        self.stack.clear();
        self.options.clear_offered();
        self.pending_selection = None;

        match self.find_conversation(id) {
            Some(conversation) => {
                self.stack.push(StackFrame::start(conversation));
                info!(
                    "starting conversation '{}' from store {}",
                    id, conversation.source.0
                );
                self.set_state(PlaybackState::RunConversation);
                Ok(())
            }
            None => {
                self.set_state(PlaybackState::Ready);
                Err(EngineError::ConversationNotFound(id.to_string()))
            }
        }
    }

    /// Advance playback by one caller-visible step.
    ///
    /// Speech and applied selections dispatch the next entry right away.
    /// An event only advances its cursor: the following entry is dispatched
    /// by the next call, leaving the host a turn to react to the event.
    /// Inert while `Ready` or while a menu awaits a selection.
    pub fn execute(&mut self) {
        match self.state {
            PlaybackState::Ready | PlaybackState::DisplayingOptions => {}
            PlaybackState::RunConversation => {
                self.assert_active();
                self.run_conversation();
            }
            PlaybackState::DisplayingSpeech => {
                self.assert_active();
                self.stack.advance_top();
                self.run_conversation();
            }
            PlaybackState::SendingEvent => {
                self.assert_active();
                self.stack.advance_top();
                self.set_state(PlaybackState::RunConversation);
            }
            PlaybackState::ExecutingOptions => {
                self.assert_active();
                self.apply_selection();
                if self.state == PlaybackState::RunConversation {
                    self.run_conversation();
                }
            }
        }
    }

    /// Choose option `index` of the current menu; applied by the next
    /// `execute`.
    ///
    /// Outside `DisplayingOptions`, or with an index past the end of the
    /// menu, the call is ignored and nothing changes. The return value
    /// reports whether the selection was accepted.
    pub fn select_option(&mut self, index: usize) -> bool {
        if self.state != PlaybackState::DisplayingOptions || index >= self.options.len() {
            warn!(
                "ignoring option {} while {} with {} offered",
                index,
                self.state,
                self.options.len()
            );
            return false;
        }
        self.pending_selection = Some(index);
        self.set_state(PlaybackState::ExecutingOptions);
        true
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == PlaybackState::Ready
    }

    /// Actor of the current line, or `""` unless displaying speech.
    pub fn speech_actor(&self) -> &'s str {
        match self.current_output(PlaybackState::DisplayingSpeech) {
            Some(Entry::Line { actor, .. }) => actor,
            _ => "",
        }
    }

    /// Text of the current line, or `""` unless displaying speech.
    pub fn speech_text(&self) -> &'s str {
        match self.current_output(PlaybackState::DisplayingSpeech) {
            Some(Entry::Line { text, .. }) => text,
            _ => "",
        }
    }

    /// Payload of the current event, or `""` unless sending an event.
    pub fn event_payload(&self) -> &'s str {
        match self.current_output(PlaybackState::SendingEvent) {
            Some(Entry::Event { payload }) => payload,
            _ => "",
        }
    }

    /// The current menu, in authoring order. Empty unless displaying options.
    pub fn offered_options(&self) -> &[OfferedOption<'s>] {
        if self.state == PlaybackState::DisplayingOptions {
            self.options.offered()
        } else {
            &[]
        }
    }

    pub fn option_count(&self) -> usize {
        self.offered_options().len()
    }

    pub fn option_text(&self, index: usize) -> Option<&'s str> {
        self.offered_options().get(index).map(|o| o.text)
    }

    /// One-shot options chosen so far this session, oldest first.
    pub fn consumed_options(&self) -> &[ConsumedOption] {
        self.options.consumed()
    }

    pub fn is_consumed(&self, source: SourceIndex, handle: OptionHandle) -> bool {
        self.options.is_consumed(source, handle)
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn current_frame(&self) -> Option<&StackFrame> {
        self.stack.top()
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            debug!("state {} -> {}", self.state, state);
        }
        self.state = state;
    }

    fn assert_active(&self) {
        assert!(
            !self.stack.is_empty(),
            "execute called while {} with an empty conversation stack",
            self.state
        );
    }

    fn store(&self, source: SourceIndex) -> &'s dyn DialogStore {
        self.sources[source.0]
    }

    fn current_output(&self, expected: PlaybackState) -> Option<Entry<'s>> {
        if self.state != expected {
            return None;
        }
        let frame = self.stack.top()?;
        self.store(frame.source).entry(frame.conversation, frame.cursor)
    }

    /// Dispatch entries until the machine reaches a caller-visible state.
    fn run_conversation(&mut self) {
        self.set_state(PlaybackState::RunConversation);

        let max_steps = self.config.max_dispatch_steps.max(1);
        let mut steps = 0;
        while self.state == PlaybackState::RunConversation {
            if steps == max_steps {
                error!(
                    "dispatched {} entries without pausing; yielding at depth {}",
                    steps,
                    self.stack.depth()
                );
                return;
            }
            steps += 1;
            self.dispatch();
        }
    }

    fn dispatch(&mut self) {
        let Some(frame) = self.stack.top().copied() else {
            panic!("dispatch with an empty conversation stack");
        };
        let store = self.store(frame.source);

        if frame.cursor >= store.entry_count(frame.conversation) {
            debug!("fell off the end of the conversation at depth {}", self.stack.depth());
            self.finish();
            return;
        }

        match store.entry(frame.conversation, frame.cursor) {
            Some(Entry::Line { .. }) => self.set_state(PlaybackState::DisplayingSpeech),
            Some(Entry::Option(_)) => self.collect_options(store, frame),
            Some(Entry::Redirect { target }) => self.redirect(target),
            Some(Entry::Event { .. }) => self.set_state(PlaybackState::SendingEvent),
            None => {
                warn!(
                    "store {} reported entry {} but returned none",
                    frame.source.0, frame.cursor
                );
                self.finish();
            }
        }
    }

    /// Gather the run of option entries starting at the frame's cursor.
    /// The cursor ends up just past the run whether or not anything
    /// survived; an empty menu keeps the machine running.
    fn collect_options(&mut self, store: &'s dyn DialogStore, frame: StackFrame) {
        self.options.clear_offered();

        let mut cursor = frame.cursor;
        while let Some(Entry::Option(option)) = store.entry(frame.conversation, cursor) {
            self.options.offer(frame.source, &option);
            cursor += 1;
        }
        self.stack.set_top_cursor(cursor);

        if self.options.is_empty() {
            debug!("all options in entries {}..{} consumed", frame.cursor, cursor);
        } else {
            self.set_state(PlaybackState::DisplayingOptions);
        }
    }

    fn apply_selection(&mut self) {
        let chosen = self
            .pending_selection
            .take()
            .and_then(|index| self.options.get(index).copied());
        let Some(chosen) = chosen else {
            warn!("no valid pending selection among {} options", self.options.len());
            if !self.options.is_empty() {
                self.set_state(PlaybackState::DisplayingOptions);
            }
            return;
        };

        debug!("selected option '{}' -> '{}'", chosen.text, chosen.target);
        self.options.consume(&chosen);
        self.options.clear_offered();
        self.redirect(chosen.target);
    }

    fn redirect(&mut self, target: &str) {
        let sources = &self.sources;
        let outcome = redirect::resolve(target, &mut self.stack, &self.config, |id| {
            find_in_sources(sources, id)
        });

        match outcome {
            RedirectOutcome::Continue => self.set_state(PlaybackState::RunConversation),
            RedirectOutcome::Finished => self.finish(),
            RedirectOutcome::NotFound => {
                warn!(
                    "redirect target '{}' not found; ending playback with {} frames left",
                    target,
                    self.stack.depth()
                );
                self.options.clear_offered();
                self.pending_selection = None;
                self.set_state(PlaybackState::Ready);
            }
        }
    }

    /// End playback entirely, however deep the stack is.
    fn finish(&mut self) {
        self.stack.clear();
        self.options.clear_offered();
        self.pending_selection = None;
        self.set_state(PlaybackState::Ready);
        info!("conversation finished");
    }
}

fn find_in_sources(sources: &[&dyn DialogStore], id: &str) -> Option<ConversationRef> {
    sources
        .iter()
        .enumerate()
        .rev()
        .find_map(|(index, store)| {
            store.find_conversation(id).map(|conversation| ConversationRef {
                source: SourceIndex(index),
                conversation,
            })
        })
}

impl<'s> DialogEngineBuilder<'s> {
    /// Add a store; stores are loaded in call order.
    pub fn store(mut self, store: &'s dyn DialogStore) -> Self {
        self.stores.push(store);
        self
    }

    /// Read the engine config from a RON file at build time.
    pub fn config_file(mut self, path: &str) -> Self {
        self.config_path = Some(path.to_string());
        self
    }

    /// Provide the config directly.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<DialogEngine<'s>, EngineError> {
        let config = match (self.config, self.config_path) {
            (Some(config), _) => config,
            (None, Some(path)) => EngineConfig::load_from_ron(Path::new(&path))?,
            (None, None) => EngineConfig::default(),
        };
        config.validate()?;

        let mut engine = DialogEngine::with_config(config);
        for store in self.stores {
            engine.add_store(store);
        }
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MissingRedirect;
    use crate::core::store::MemoryStore;
    use crate::schema::dialog::{ConversationDef, DialogDef, EntryDef};

    fn store_of(conversations: Vec<ConversationDef>) -> MemoryStore {
        MemoryStore::from_def(DialogDef { conversations })
    }

    /// "a" offers a trip to "b" or an exit; "b" says hello and returns.
    fn scenario_store(first_persistent: bool) -> MemoryStore {
        let to_b = if first_persistent {
            EntryDef::persistent_option("Visit b", "b")
        } else {
            EntryDef::option("Visit b", "b")
        };
        store_of(vec![
            ConversationDef::new("a", vec![to_b, EntryDef::option("Leave", "EXIT")]),
            ConversationDef::new(
                "b",
                vec![EntryDef::line("Innkeeper", "hello"), EntryDef::redirect("RETURN")],
            ),
        ])
    }

    fn engine_with(store: &MemoryStore) -> DialogEngine<'_> {
        let mut engine = DialogEngine::new();
        engine.add_store(store);
        engine
    }

    #[test]
    fn execute_while_ready_is_inert() {
        let mut engine = DialogEngine::new();
        engine.execute();
        assert_eq!(engine.state(), PlaybackState::Ready);
        assert_eq!(engine.stack_depth(), 0);
    }

    #[test]
    fn start_does_not_dispatch() {
        let store = scenario_store(false);
        let mut engine = engine_with(&store);
        engine.start_conversation("a").unwrap();
        assert_eq!(engine.state(), PlaybackState::RunConversation);
        assert_eq!(engine.option_count(), 0);
        assert_eq!(engine.current_frame().unwrap().cursor, 0);
    }

    #[test]
    fn start_unknown_conversation_fails() {
        let store = scenario_store(false);
        let mut engine = engine_with(&store);
        let err = engine.start_conversation("nowhere").unwrap_err();
        assert!(matches!(err, EngineError::ConversationNotFound(ref id) if id == "nowhere"));
        assert!(engine.is_ready());
        assert_eq!(engine.stack_depth(), 0);
    }

    #[test]
    #[should_panic(expected = "start_conversation")]
    fn start_while_playing_panics() {
        let store = scenario_store(false);
        let mut engine = engine_with(&store);
        engine.start_conversation("a").unwrap();
        let _ = engine.start_conversation("b");
    }

    #[test]
    fn scenario_one_shot_option_is_suppressed_after_return() {
        let store = scenario_store(false);
        let mut engine = engine_with(&store);
        engine.start_conversation("a").unwrap();
        engine.execute();
        assert_eq!(engine.state(), PlaybackState::DisplayingOptions);
        assert_eq!(engine.option_count(), 2);
        assert_eq!(engine.current_frame().unwrap().cursor, 2);

        assert!(engine.select_option(0));
        assert_eq!(engine.state(), PlaybackState::ExecutingOptions);
        engine.execute();
        assert_eq!(engine.state(), PlaybackState::DisplayingSpeech);
        assert_eq!(engine.speech_actor(), "Innkeeper");
        assert_eq!(engine.speech_text(), "hello");
        assert_eq!(engine.stack_depth(), 2);

        engine.execute();
        assert_eq!(engine.state(), PlaybackState::DisplayingOptions);
        assert_eq!(engine.stack_depth(), 1);
        assert_eq!(engine.option_count(), 1);
        assert_eq!(engine.option_text(0), Some("Leave"));
    }

    #[test]
    fn scenario_persistent_option_is_offered_again() {
        let store = scenario_store(true);
        let mut engine = engine_with(&store);
        engine.start_conversation("a").unwrap();
        engine.execute();

        for _ in 0..3 {
            assert_eq!(engine.option_count(), 2);
            assert_eq!(engine.option_text(0), Some("Visit b"));
            engine.select_option(0);
            engine.execute();
            assert_eq!(engine.speech_text(), "hello");
            engine.execute();
        }
        assert!(engine.consumed_options().is_empty());
    }

    #[test]
    fn exit_option_ends_playback() {
        let store = scenario_store(false);
        let mut engine = engine_with(&store);
        engine.start_conversation("a").unwrap();
        engine.execute();
        engine.select_option(1);
        engine.execute();
        assert!(engine.is_ready());
        assert_eq!(engine.stack_depth(), 0);
        assert_eq!(engine.option_count(), 0);
        assert_eq!(engine.consumed_options().len(), 1);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let store = scenario_store(false);
        let mut engine = engine_with(&store);
        engine.start_conversation("a").unwrap();
        engine.execute();
        assert!(!engine.select_option(2));
        assert_eq!(engine.state(), PlaybackState::DisplayingOptions);
        assert_eq!(engine.option_count(), 2);
    }

    #[test]
    fn selection_outside_menu_is_ignored() {
        let store = scenario_store(false);
        let mut engine = engine_with(&store);
        assert!(!engine.select_option(0));
        assert!(engine.is_ready());
    }

    #[test]
    fn execute_while_menu_shown_is_inert() {
        let store = scenario_store(false);
        let mut engine = engine_with(&store);
        engine.start_conversation("a").unwrap();
        engine.execute();
        engine.execute();
        assert_eq!(engine.state(), PlaybackState::DisplayingOptions);
        assert_eq!(engine.option_count(), 2);
    }

    #[test]
    fn event_defers_dispatch_by_one_call() {
        let store = store_of(vec![ConversationDef::new(
            "e",
            vec![EntryDef::event("door_open"), EntryDef::line("Guard", "Who goes there?")],
        )]);
        let mut engine = engine_with(&store);
        engine.start_conversation("e").unwrap();
        engine.execute();
        assert_eq!(engine.state(), PlaybackState::SendingEvent);
        assert_eq!(engine.event_payload(), "door_open");
        assert_eq!(engine.speech_text(), "");

        engine.execute();
        assert_eq!(engine.state(), PlaybackState::RunConversation);
        assert_eq!(engine.event_payload(), "");
        assert_eq!(engine.current_frame().unwrap().cursor, 1);

        engine.execute();
        assert_eq!(engine.state(), PlaybackState::DisplayingSpeech);
        assert_eq!(engine.speech_text(), "Who goes there?");
    }

    #[test]
    fn empty_option_run_falls_through_in_same_call() {
        let store = store_of(vec![
            ConversationDef::new(
                "hub",
                vec![
                    EntryDef::option("Only once", "aside"),
                    EntryDef::line("Narrator", "Nothing left to ask."),
                ],
            ),
            ConversationDef::new("aside", vec![EntryDef::redirect("RETURN")]),
        ]);
        let mut engine = engine_with(&store);
        engine.start_conversation("hub").unwrap();
        engine.execute();
        engine.select_option(0);
        engine.execute();

        // "aside" returned straight away; the only option is now consumed.
        assert_eq!(engine.state(), PlaybackState::DisplayingSpeech);
        assert_eq!(engine.speech_text(), "Nothing left to ask.");
        assert_eq!(engine.current_frame().unwrap().cursor, 1);
    }

    #[test]
    fn missing_redirect_clears_stack_by_default() {
        let store = store_of(vec![ConversationDef::new(
            "a",
            vec![EntryDef::redirect("nowhere")],
        )]);
        let mut engine = engine_with(&store);
        engine.start_conversation("a").unwrap();
        engine.execute();
        assert!(engine.is_ready());
        assert_eq!(engine.stack_depth(), 0);
    }

    #[test]
    fn missing_redirect_can_keep_stack() {
        let store = store_of(vec![ConversationDef::new(
            "a",
            vec![EntryDef::redirect("nowhere")],
        )]);
        let mut engine = DialogEngine::builder()
            .config(EngineConfig {
                missing_redirect: MissingRedirect::KeepStack,
                ..EngineConfig::default()
            })
            .store(&store)
            .build()
            .unwrap();
        engine.start_conversation("a").unwrap();
        engine.execute();
        assert!(engine.is_ready());
        assert_eq!(engine.stack_depth(), 1);

        // A fresh start discards the stale frame.
        engine.start_conversation("a").unwrap();
        assert_eq!(engine.stack_depth(), 1);
    }

    #[test]
    fn redirect_cycle_yields_after_step_limit() {
        let store = store_of(vec![ConversationDef::new(
            "loop",
            vec![EntryDef::redirect("loop")],
        )]);
        let mut engine = DialogEngine::with_config(EngineConfig {
            max_dispatch_steps: 8,
            ..EngineConfig::default()
        });
        engine.add_store(&store);
        engine.start_conversation("loop").unwrap();
        engine.execute();
        assert_eq!(engine.state(), PlaybackState::RunConversation);
        assert_eq!(engine.stack_depth(), 9);
    }

    #[test]
    fn zero_step_limit_still_dispatches() {
        let store = scenario_store(false);
        let mut engine = DialogEngine::with_config(EngineConfig {
            max_dispatch_steps: 0,
            ..EngineConfig::default()
        });
        engine.add_store(&store);
        engine.start_conversation("b").unwrap();
        engine.execute();
        assert_eq!(engine.state(), PlaybackState::DisplayingSpeech);
        assert_eq!(engine.speech_text(), "hello");
    }

    #[test]
    fn builder_rejects_zero_step_limit() {
        let result = DialogEngine::builder()
            .config(EngineConfig {
                max_dispatch_steps: 0,
                ..EngineConfig::default()
            })
            .build();
        assert!(matches!(
            result,
            Err(EngineError::Config(ConfigError::Invalid(_)))
        ));
    }

    #[test]
    fn invalid_pending_selection_returns_to_menu() {
        let store = scenario_store(false);
        let mut engine = engine_with(&store);
        engine.start_conversation("a").unwrap();
        engine.execute();
        assert!(engine.select_option(1));
        engine.pending_selection = Some(7);

        engine.execute();
        assert_eq!(engine.state(), PlaybackState::DisplayingOptions);
        assert_eq!(engine.option_count(), 2);
        assert!(engine.consumed_options().is_empty());

        // The menu is usable again.
        assert!(engine.select_option(1));
        engine.execute();
        assert!(engine.is_ready());
    }

    #[test]
    fn conversation_listing_is_flat_over_stores() {
        let first = scenario_store(false);
        let second = store_of(vec![ConversationDef::new("c", vec![])]);
        let engine = DialogEngine::builder()
            .store(&first)
            .store(&second)
            .build()
            .unwrap();
        assert_eq!(engine.source_count(), 2);
        assert_eq!(engine.conversation_count(), 3);
        assert_eq!(engine.conversation_id(2), Some("c"));
        assert_eq!(engine.conversation_id(3), None);
        let ids: Vec<&str> = engine.conversation_ids().collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn state_names() {
        assert_eq!(PlaybackState::Ready.to_string(), "READY");
        assert_eq!(
            PlaybackState::DisplayingOptions.to_string(),
            "DISPLAYING_OPTIONS"
        );
    }
}
