use std::fmt;

use super::handle::OptionHandle;

/// The kind tag of a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Line,
    Option,
    Redirect,
    Event,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "line",
            Self::Option => "option",
            Self::Redirect => "redirect",
            Self::Event => "event",
        };
        f.write_str(name)
    }
}

/// One step of a conversation, borrowed from the dialog store that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    /// A spoken line.
    Line { actor: &'a str, text: &'a str },
    /// One choice of a decision point. Consecutive options form one menu.
    Option(DialogOption<'a>),
    /// Jump to another conversation, or one of the reserved words.
    Redirect { target: &'a str },
    /// A payload handed to the host game.
    Event { payload: &'a str },
}

impl<'a> Entry<'a> {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Line { .. } => EntryKind::Line,
            Self::Option(_) => EntryKind::Option,
            Self::Redirect { .. } => EntryKind::Redirect,
            Self::Event { .. } => EntryKind::Event,
        }
    }

    /// The option payload, if this entry is an option.
    pub fn as_option(&self) -> Option<&DialogOption<'a>> {
        match self {
            Self::Option(option) => Some(option),
            _ => None,
        }
    }
}

/// An option entry as exposed by a dialog store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogOption<'a> {
    /// Equality key used to remember consumed one-shot options.
    pub handle: OptionHandle,
    /// Menu text shown to the player.
    pub text: &'a str,
    /// Redirect target followed when the option is chosen.
    pub target: &'a str,
    /// Persistent options can be chosen any number of times.
    pub persistent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_kind_matches_variant() {
        let line = Entry::Line {
            actor: "Innkeeper",
            text: "Welcome.",
        };
        assert_eq!(line.kind(), EntryKind::Line);
        assert!(line.as_option().is_none());

        let option = Entry::Option(DialogOption {
            handle: OptionHandle(3),
            text: "Leave",
            target: "EXIT",
            persistent: true,
        });
        assert_eq!(option.kind(), EntryKind::Option);
        assert_eq!(option.as_option().map(|o| o.handle), Some(OptionHandle(3)));

        assert_eq!(Entry::Redirect { target: "b" }.kind(), EntryKind::Redirect);
        assert_eq!(Entry::Event { payload: "door" }.kind(), EntryKind::Event);
    }

    #[test]
    fn entry_kind_display() {
        assert_eq!(EntryKind::Redirect.to_string(), "redirect");
    }
}
