//! Lowers parsed commands into the closed set of actions the simulated
//! chat app can actually perform.

use crate::model::{self, Command};
use serde::Serialize;

/// Everything the preview knows how to do. New behaviour means a new
/// variant here, so match sites stay exhaustive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ExecutableAction {
    SelectChatRoom { room_id: String },
    SendMessage { room_id: String, message: String },
}

/// Keeps the commands the whitelist recognises and drops the rest, in
/// order. An exploratory or half-wrong command simply does less; it is
/// never an error.
pub fn convert(commands: &[Command]) -> Vec<ExecutableAction> {
    commands.iter().filter_map(convert_one).collect()
}

fn convert_one(cmd: &Command) -> Option<ExecutableAction> {
    if cmd.entity != model::CHAT_ROOM {
        return None;
    }
    let room_id = cmd.id.clone()?;

    if model::SELECT_ACTIONS.contains(&cmd.action.as_str()) {
        return Some(ExecutableAction::SelectChatRoom { room_id });
    }

    if cmd.action == model::ACTION_SEND {
        // an empty message still counts as a message
        let message = cmd.argument.clone()?;
        return Some(ExecutableAction::SendMessage { room_id, message });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(entity: &str, id: Option<&str>, action: &str, argument: Option<&str>) -> Command {
        Command {
            entity: entity.into(),
            id: id.map(Into::into),
            action: action.into(),
            argument: argument.map(Into::into),
        }
    }

    #[test]
    fn test_convert_whitelist() {
        let test_cases = vec![
            (
                cmd("채팅방", Some("1"), "열기", None),
                Some(ExecutableAction::SelectChatRoom {
                    room_id: "1".into(),
                }),
            ),
            (
                cmd("채팅방", Some("2"), "보여주기", None),
                Some(ExecutableAction::SelectChatRoom {
                    room_id: "2".into(),
                }),
            ),
            (
                cmd("채팅방", Some("3"), "선택", None),
                Some(ExecutableAction::SelectChatRoom {
                    room_id: "3".into(),
                }),
            ),
            (
                cmd("채팅방", Some("1"), "표시", None),
                Some(ExecutableAction::SelectChatRoom {
                    room_id: "1".into(),
                }),
            ),
            (
                cmd("채팅방", Some("2"), "전송", Some("안녕")),
                Some(ExecutableAction::SendMessage {
                    room_id: "2".into(),
                    message: "안녕".into(),
                }),
            ),
            // empty message converts; it is present, just blank
            (
                cmd("채팅방", Some("1"), "전송", Some("")),
                Some(ExecutableAction::SendMessage {
                    room_id: "1".into(),
                    message: String::new(),
                }),
            ),
            // dropped: no id
            (cmd("채팅방", None, "열기", None), None),
            // dropped: send without an argument
            (cmd("채팅방", Some("1"), "전송", None), None),
            // dropped: wrong entity
            (cmd("채팅목록", Some("1"), "열기", None), None),
            // dropped: unknown action
            (cmd("채팅방", Some("1"), "삭제", None), None),
        ];

        for (input, expected) in test_cases {
            assert_eq!(convert_one(&input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_convert_keeps_order_and_drops_silently() {
        let commands = vec![
            cmd("채팅방", Some("1"), "열기", None),
            cmd("채팅방", Some("1"), "삭제", None),
            cmd("채팅방", Some("1"), "전송", Some("hi")),
        ];

        let actions = convert(&commands);
        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[0], ExecutableAction::SelectChatRoom { .. }));
        assert!(matches!(actions[1], ExecutableAction::SendMessage { .. }));
    }
}
