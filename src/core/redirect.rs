/// Redirect resolver: turns a jump target into a stack mutation.

use log::debug;

use crate::core::config::{EngineConfig, MissingRedirect};
use crate::core::stack::{ConversationStack, StackFrame};
use crate::schema::handle::ConversationRef;

/// A parsed redirect target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget<'a> {
    /// Go back to the calling conversation.
    Return,
    /// End playback entirely.
    Exit,
    /// Enter the named conversation.
    Conversation(&'a str),
}

impl<'a> RedirectTarget<'a> {
    /// Classify a target string. Reserved words are matched ignoring
    /// ASCII case; anything else is a conversation identifier.
    pub fn parse(target: &'a str, config: &EngineConfig) -> Self {
        if target.eq_ignore_ascii_case(&config.return_keyword) {
            Self::Return
        } else if target.eq_ignore_ascii_case(&config.exit_keyword) {
            Self::Exit
        } else {
            Self::Conversation(target)
        }
    }
}

/// What the engine should do after a redirect has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// The stack has a new top; keep dispatching.
    Continue,
    /// Playback ended; the stack is empty.
    Finished,
    /// The named conversation does not exist. Playback ended; whether the
    /// stack was cleared depends on `EngineConfig::missing_redirect`.
    NotFound,
}

/// Apply `target` to `stack`.
///
/// Returning from the outermost frame is the same as exiting. Returning
/// from a nested frame restarts the caller's conversation from its first
/// entry. A conversation target is pushed on top of the current stack.
pub fn resolve<F>(
    target: &str,
    stack: &mut ConversationStack,
    config: &EngineConfig,
    lookup: F,
) -> RedirectOutcome
where
    F: FnOnce(&str) -> Option<ConversationRef>,
{
    match RedirectTarget::parse(target, config) {
        RedirectTarget::Return if stack.depth() > 1 => {
            stack.pop();
            stack.set_top_cursor(0);
            debug!("redirect: returned to caller, depth {}", stack.depth());
            RedirectOutcome::Continue
        }
        RedirectTarget::Return | RedirectTarget::Exit => {
            stack.clear();
            debug!("redirect: exit");
            RedirectOutcome::Finished
        }
        RedirectTarget::Conversation(id) => match lookup(id) {
            Some(conversation) => {
                stack.push(StackFrame::start(conversation));
                debug!("redirect: entered '{}', depth {}", id, stack.depth());
                RedirectOutcome::Continue
            }
            None => {
                if config.missing_redirect == MissingRedirect::ClearStack {
                    stack.clear();
                }
                RedirectOutcome::NotFound
            }
        },
    }
}
