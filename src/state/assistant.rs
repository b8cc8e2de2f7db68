//! Assistant widget state: panel visibility and the message transcript.

use uuid::Uuid;

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

/// Milliseconds between dropping the open state and hiding the panel,
/// leaving room for the closing transition.
pub const HIDE_DELAY_MS: u32 = 240;

/// Milliseconds between a user submission and the assistant's reply.
pub const ANSWER_DELAY_MS: u32 = 260;

/// Milliseconds per revealed character of an assistant reply.
pub const TYPING_TICK_MS: u32 = 18;

/// Message author.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One transcript bubble.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
}

/// In-progress character-by-character reveal of an assistant reply.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingReveal {
    message_id: Uuid,
    target: String,
    shown: usize,
}

/// State for the assistant widget.
///
/// `open` is the visual state (drives the `open` class); `hidden` is the
/// `hidden` attribute. Closing drops `open` immediately and hides only
/// after the close delay, unless the panel was reopened meanwhile.
#[derive(Clone, Debug, PartialEq)]
pub struct AssistantState {
    pub open: bool,
    pub hidden: bool,
    pub messages: Vec<ChatMessage>,
    pub reveal: Option<TypingReveal>,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self {
            open: false,
            hidden: true,
            messages: Vec::new(),
            reveal: None,
        }
    }
}

impl AssistantState {
    /// Open the panel: unhide and apply the open state.
    pub fn open_panel(&mut self) {
        self.hidden = false;
        self.open = true;
    }

    /// Begin closing: the open state drops now, hiding happens after the
    /// close delay via [`AssistantState::finish_close`].
    pub fn begin_close(&mut self) {
        self.open = false;
    }

    /// Complete a close started earlier. A reopen during the delay wins.
    pub fn finish_close(&mut self) {
        if !self.open {
            self.hidden = true;
        }
    }

    /// Append a user bubble with the literal submitted text.
    pub fn push_user(&mut self, text: &str) {
        self.messages.push(ChatMessage {
            id: Uuid::new_v4(),
            role: Role::User,
            text: text.to_owned(),
        });
    }

    /// Append an empty assistant bubble and start revealing `text` into it.
    ///
    /// Any reveal still in progress is snapped to its full text first, so a
    /// quick follow-up question never leaves a half-typed reply behind.
    pub fn start_reply(&mut self, text: &str) {
        self.complete_reveal();
        let id = Uuid::new_v4();
        self.messages.push(ChatMessage {
            id,
            role: Role::Assistant,
            text: String::new(),
        });
        self.reveal = Some(TypingReveal {
            message_id: id,
            target: text.to_owned(),
            shown: 0,
        });
    }

    /// Reveal one more character of the in-progress reply.
    ///
    /// Returns `true` while more characters remain after this step.
    pub fn advance_reveal(&mut self) -> bool {
        let Some(reveal) = self.reveal.as_mut() else {
            return false;
        };
        reveal.shown += 1;
        let prefix: String = reveal.target.chars().take(reveal.shown).collect();
        let done = reveal.shown >= reveal.target.chars().count();
        let message_id = reveal.message_id;
        if let Some(msg) = self.messages.iter_mut().rev().find(|m| m.id == message_id) {
            msg.text = prefix;
        }
        if done {
            self.reveal = None;
        }
        !done
    }

    fn complete_reveal(&mut self) {
        if let Some(reveal) = self.reveal.take() {
            if let Some(msg) = self.messages.iter_mut().rev().find(|m| m.id == reveal.message_id) {
                msg.text = reveal.target;
            }
        }
    }
}
