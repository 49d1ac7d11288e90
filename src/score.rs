//! Learning-objective bookkeeping: which checkpoints a run satisfied
//! and how much score it earned.
//!
//! The evaluator is a pure function of the parse result and the set of
//! cases already completed. Callers own the running state and thread it
//! through each evaluation.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{self, ParseResult};

/// The six fixed checkpoints: wire a click on chat-list item N to
/// opening room N, and send a message in room N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveCase {
    Click1,
    Click2,
    Click3,
    Send1,
    Send2,
    Send3,
}

impl ObjectiveCase {
    fn click(room_id: &str) -> Option<Self> {
        match room_id {
            "1" => Some(Self::Click1),
            "2" => Some(Self::Click2),
            "3" => Some(Self::Click3),
            _ => None,
        }
    }

    fn send(room_id: &str) -> Option<Self> {
        match room_id {
            "1" => Some(Self::Send1),
            "2" => Some(Self::Send2),
            "3" => Some(Self::Send3),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Click1 => "click1",
            Self::Click2 => "click2",
            Self::Click3 => "click3",
            Self::Send1 => "send1",
            Self::Send2 => "send2",
            Self::Send3 => "send3",
        }
    }
}

/// Cases completed so far in this sitting. Grows, never shrinks.
pub type CompletionSet = BTreeSet<ObjectiveCase>;

/// What one evaluation changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The input set plus everything newly satisfied.
    pub completed: CompletionSet,
    /// Cases added by this run, in detection order.
    pub newly_satisfied: Vec<ObjectiveCase>,
    pub score_delta: u32,
}

/// Scores one parse result against the already-completed set.
///
/// Click cases come from bindings, send cases from raw commands; the
/// two groups are detected independently. A case already in the set is
/// never re-awarded, so running the same script twice scores zero the
/// second time.
pub fn evaluate(parsed: &ParseResult, completed: &CompletionSet) -> Evaluation {
    let mut updated = completed.clone();
    let mut newly = Vec::new();

    for binding in &parsed.bindings {
        let source = &binding.source;
        let target = &binding.target;

        if source.entity != model::CHAT_LIST || source.event != model::EVENT_CLICK {
            continue;
        }
        if target.entity != model::CHAT_ROOM
            || !model::SELECT_ACTIONS.contains(&target.action.as_str())
        {
            continue;
        }
        let (Some(source_id), Some(target_id)) = (&source.id, &target.id) else {
            continue;
        };
        if source_id != target_id {
            continue;
        }

        let Some(case) = ObjectiveCase::click(source_id) else {
            continue;
        };
        if updated.insert(case) {
            newly.push(case);
        }
    }

    for cmd in &parsed.commands {
        if cmd.entity != model::CHAT_ROOM || cmd.action != model::ACTION_SEND {
            continue;
        }
        // any present argument counts, even the empty string
        if cmd.argument.is_none() {
            continue;
        }

        let Some(case) = cmd.id.as_deref().and_then(ObjectiveCase::send) else {
            continue;
        };
        if updated.insert(case) {
            newly.push(case);
        }
    }

    Evaluation {
        score_delta: score_delta(newly.len()),
        completed: updated,
        newly_satisfied: newly,
    }
}

/// Tiered bonus on the newly-satisfied count of a single run. Exactly 6
/// and exactly 3 are batch bonuses; everything else is linear.
fn score_delta(newly_satisfied: usize) -> u32 {
    match newly_satisfied {
        0 => 0,
        6 => 100,
        3 => 40,
        n => 10 * n as u32,
    }
}

/// Caller-owned running state for one sitting. Rebuilt empty at session
/// start; the core never retains it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub completed: CompletionSet,
    pub score: u32,
}

impl Session {
    pub fn apply(&mut self, eval: &Evaluation) {
        self.completed = eval.completed.clone();
        self.score += eval.score_delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_script;

    #[test]
    fn test_score_delta_tiers() {
        let test_cases = vec![
            (0, 0),
            (1, 10),
            (2, 20),
            (3, 40),
            (4, 40),
            (5, 50),
            (6, 100),
        ];

        for (count, expected) in test_cases {
            assert_eq!(score_delta(count), expected, "count: {count}");
        }
    }

    #[test]
    fn test_click_case_requires_matching_ids() {
        let parsed = parse_script("채팅목록1.클릭=채팅방2.열기");
        let eval = evaluate(&parsed, &CompletionSet::new());
        assert!(eval.newly_satisfied.is_empty());
        assert_eq!(eval.score_delta, 0);
    }

    #[test]
    fn test_click_case_accepts_every_select_synonym() {
        for action in model::SELECT_ACTIONS {
            let code = format!("채팅목록1.클릭=채팅방1.{action}");
            let eval = evaluate(&parse_script(&code), &CompletionSet::new());
            assert_eq!(
                eval.newly_satisfied,
                vec![ObjectiveCase::Click1],
                "action: {action}"
            );
        }
    }

    #[test]
    fn test_wrong_event_or_entity_is_ignored() {
        let test_cases = vec![
            "채팅목록1.입력=채팅방1.열기",   // wrong event
            "채팅방1.클릭=채팅방1.열기",     // wrong source entity
            "채팅목록1.클릭=채팅목록1.열기", // wrong target entity
            "채팅목록4.클릭=채팅방4.열기",   // no case for room 4
            "채팅방4.전송(\"안녕\")",        // no case for room 4
        ];

        for code in test_cases {
            let eval = evaluate(&parse_script(code), &CompletionSet::new());
            assert!(eval.newly_satisfied.is_empty(), "code: {code}");
        }
    }

    #[test]
    fn test_send_without_argument_does_not_count() {
        let parsed = parse_script("채팅방1.전송");
        let eval = evaluate(&parsed, &CompletionSet::new());
        assert!(eval.newly_satisfied.is_empty());
    }

    #[test]
    fn test_duplicate_lines_count_once() {
        let parsed = parse_script("채팅방1.전송(\"a\")\n채팅방1.전송(\"b\")");
        let eval = evaluate(&parsed, &CompletionSet::new());
        assert_eq!(eval.newly_satisfied, vec![ObjectiveCase::Send1]);
        assert_eq!(eval.score_delta, 10);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let parsed = parse_script("채팅목록1.클릭=채팅방1.열기\n채팅방2.전송(\"안녕\")");

        let first = evaluate(&parsed, &CompletionSet::new());
        assert_eq!(first.newly_satisfied.len(), 2);
        assert_eq!(first.score_delta, 20);

        let second = evaluate(&parsed, &first.completed);
        assert_eq!(second.score_delta, 0);
        assert!(second.newly_satisfied.is_empty());
        assert_eq!(second.completed, first.completed);
    }

    #[test]
    fn test_session_accumulates() {
        let mut session = Session::default();

        let first = evaluate(&parse_script("채팅방1.전송(\"a\")"), &session.completed);
        session.apply(&first);
        assert_eq!(session.score, 10);

        let second = evaluate(&parse_script("채팅방2.전송(\"b\")"), &session.completed);
        session.apply(&second);
        assert_eq!(session.score, 20);
        assert_eq!(session.completed.len(), 2);
    }
}
