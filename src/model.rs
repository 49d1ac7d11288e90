//! Shared data types for the Hangul chat-scripting pipeline.

use serde::Serialize;

// the fixed vocabulary of the script language
pub const CHAT_ROOM: &str = "채팅방";
pub const CHAT_LIST: &str = "채팅목록";
pub const EVENT_CLICK: &str = "클릭";
pub const ACTION_SEND: &str = "전송";

/// Action tokens that all mean "open this chat room".
pub const SELECT_ACTIONS: &[&str] = &["열기", "보여주기", "선택", "표시"];

/// One parsed `객체.동작` statement, e.g. `채팅방1.전송("안녕")`.
///
/// A `Command` is structurally valid even when nothing downstream
/// recognises its action; deciding what a command *means* is the
/// converter's job, not the parser's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    /// Entity name, e.g. "채팅방". Never empty.
    pub entity: String,
    /// Digits directly after the entity name. Absent when the name has
    /// no trailing digits.
    pub id: Option<String>,
    /// The verb after the dot, e.g. "열기" or "전송".
    pub action: String,
    /// Quoted text inside the parentheses. `Some("")` is a present,
    /// empty argument and is distinct from `None`.
    pub argument: Option<String>,
}

/// Left-hand side of a binding line: `객체[번호].이벤트`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSource {
    pub entity: String,
    pub id: Option<String>,
    /// Event token, e.g. "클릭". Events never carry arguments.
    pub event: String,
}

/// `채팅목록1.클릭 = 채팅방1.열기`: when `event` fires on `source`,
/// perform `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventBinding {
    pub source: EventSource,
    pub target: Command,
}

/// Everything one run of the parser produced. Each list keeps the line
/// order of its own category; the two categories are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub commands: Vec<Command>,
    pub bindings: Vec<EventBinding>,
}

impl ParseResult {
    /// True when the script yielded nothing executable, the single
    /// "nothing to run" condition the pipeline surfaces.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.bindings.is_empty()
    }
}
