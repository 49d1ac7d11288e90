//! Headless stand-in for the chat preview pane: three seeded rooms and
//! the state changes the executable actions perform on them.
//!
//! Strictly a consumer. Nothing here feeds back into parsing or
//! scoring.

use time::OffsetDateTime;

use crate::exec::ExecutableAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub content: String,
    /// Korean clock label, e.g. "오전 10:30".
    pub timestamp: String,
    /// True for messages the script author sent.
    pub mine: bool,
    pub sender: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChatRoom {
    pub id: String,
    pub name: String,
    pub messages: Vec<Message>,
}

/// The whole preview state for one run.
#[derive(Debug, Clone)]
pub struct ChatSim {
    pub rooms: Vec<ChatRoom>,
    /// Room opened by the last select action, if any.
    pub selected: Option<String>,
}

impl ChatSim {
    /// The three rooms every session starts with, each with a bit of
    /// prior conversation so the preview is not empty.
    pub fn seeded() -> Self {
        let seed = |id: &str, name: &str, content: &str| ChatRoom {
            id: id.into(),
            name: name.into(),
            messages: vec![Message {
                content: content.into(),
                timestamp: "오전 7:28".into(),
                mine: false,
                sender: Some(name.into()),
            }],
        };

        Self {
            rooms: vec![
                seed("1", "기헌", "야 너 어제 수학쌤이 내준 숙제 했어??"),
                seed("2", "현우", "야 롤 할래?"),
                seed("3", "우리 가족", "저녁에 뭐 먹을래?"),
            ],
            selected: None,
        }
    }

    /// Applies one run's actions in order. Selecting opens the room;
    /// sending appends an outgoing message stamped with `now`. Actions
    /// naming a room that does not exist do nothing.
    pub fn apply(&mut self, actions: &[ExecutableAction], now: OffsetDateTime) {
        for action in actions {
            match action {
                ExecutableAction::SelectChatRoom { room_id } => {
                    if self.rooms.iter().any(|r| r.id == *room_id) {
                        self.selected = Some(room_id.clone());
                    }
                }
                ExecutableAction::SendMessage { room_id, message } => {
                    if let Some(room) = self.rooms.iter_mut().find(|r| r.id == *room_id) {
                        room.messages.push(Message {
                            content: message.clone(),
                            timestamp: format_timestamp(now),
                            mine: true,
                            sender: None,
                        });
                    }
                }
            }
        }
    }

    pub fn room(&self, id: &str) -> Option<&ChatRoom> {
        self.rooms.iter().find(|r| r.id == id)
    }
}

/// "오전 10:30" / "오후 3:45" style clock label. Midnight is 오전 12,
/// noon is 오후 12.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let hour = at.hour();
    let minute = at.minute();

    let period = if hour < 12 { "오전" } else { "오후" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    format!("{period} {display_hour}:{minute:02}")
}
