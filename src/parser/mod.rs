//! Parser for the Hangul object-dot notation.
//!
//! A script is a newline-separated list of statements. A line with an
//! `=` declares an event binding; any other line is a plain command:
//!
//! ```text
//! 채팅방1.열기
//! 채팅방2.전송("안녕하세요")
//! 채팅목록1.클릭=채팅방1.열기
//! ```
//!
//! Every parse attempt is a partial function: a line that fits no rule
//! returns `None` and contributes nothing. A half-written line must
//! never abort a novice's run.

pub mod scan;

use crate::model::{Command, EventBinding, EventSource, ParseResult};

/// Parses a whole script. Pure function of the input text.
pub fn parse_script(code: &str) -> ParseResult {
    let mut result = ParseResult::default();

    for line in code.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // a line with `=` is only ever a binding, even when its right
        // side would also parse as a standalone command
        if line.contains('=') {
            if let Some(binding) = parse_binding(line) {
                result.bindings.push(binding);
            }
        } else if let Some(cmd) = parse_expression(line) {
            result.commands.push(cmd);
        }
    }

    result
}

/// Parses one plain statement such as `채팅방1.열기` or
/// `채팅방1.전송("안녕")`.
pub fn parse_expression(expr: &str) -> Option<Command> {
    let (object_part, action_part) = expr.split_once('.')?;
    let (entity, id) = scan::entity_head(object_part.trim())?;

    let action_part = action_part.trim();
    let (action, argument) = match scan::action_call(action_part) {
        Some((action, arg)) => (action, Some(arg)),
        None => (action_part.to_string(), None),
    };

    Some(Command {
        entity,
        id,
        action,
        argument,
    })
}

/// Parses one binding line such as `채팅목록1.클릭=채팅방1.열기`.
/// Splits on the first `=`; the left side names the event, the right
/// side is a full expression. Events never carry arguments.
pub fn parse_binding(line: &str) -> Option<EventBinding> {
    let (lhs, rhs) = line.split_once('=')?;

    let (object_part, event_part) = lhs.split_once('.')?;
    let (entity, id) = scan::entity_head(object_part.trim())?;
    let event = event_part.trim().to_string();

    let target = parse_expression(rhs.trim())?;

    Some(EventBinding {
        source: EventSource { entity, id, event },
        target,
    })
}
