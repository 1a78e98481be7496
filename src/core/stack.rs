/// Conversation stack: nested conversations and return-to-caller.

use crate::schema::handle::{ConversationHandle, ConversationRef, SourceIndex};

/// Where execution is within one conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackFrame {
    pub source: SourceIndex,
    pub conversation: ConversationHandle,
    /// Index of the next entry to execute.
    pub cursor: usize,
}

impl StackFrame {
    /// A frame at the first entry of `conversation`.
    pub fn start(conversation: ConversationRef) -> Self {
        Self {
            source: conversation.source,
            conversation: conversation.conversation,
            cursor: 0,
        }
    }
}

/// Ordered call stack of frames. The top frame is where execution
/// currently is; an empty stack means nothing is playing.
#[derive(Debug, Clone, Default)]
pub struct ConversationStack {
    frames: Vec<StackFrame>,
}

impl ConversationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: StackFrame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<StackFrame> {
        self.frames.pop()
    }

    pub fn top(&self) -> Option<&StackFrame> {
        self.frames.last()
    }

    /// Replace the top frame with a copy whose cursor is `cursor`.
    /// Returns false on an empty stack.
    pub fn set_top_cursor(&mut self, cursor: usize) -> bool {
        match self.frames.pop() {
            Some(frame) => {
                self.frames.push(StackFrame { cursor, ..frame });
                true
            }
            None => false,
        }
    }

    /// Move the top frame's cursor one entry forward.
    pub fn advance_top(&mut self) -> bool {
        match self.top() {
            Some(frame) => {
                let next = frame.cursor + 1;
                self.set_top_cursor(next)
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames from bottom (outermost) to top.
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }
}
