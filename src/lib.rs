pub mod cli;
pub mod exec;
pub mod history;
pub mod model;
pub mod parser;
pub mod score;
pub mod sim;

use anyhow::Context;
use clap::Parser;
use time::OffsetDateTime;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Parse ──────────────────────────────────────────────────────
    let code = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    let parsed = parser::parse_script(&code);

    if parsed.is_empty() {
        println!("실행할 명령어가 없습니다!");
        return Ok(());
    }

    // 2. ── Convert & apply to the preview state ───────────────────────
    let actions = exec::convert(&parsed.commands);
    let now = OffsetDateTime::now_utc();

    let mut preview = sim::ChatSim::seeded();
    preview.apply(&actions, now);

    // 3. ── Score ──────────────────────────────────────────────────────
    let mut session = score::Session::default();
    let evaluation = score::evaluate(&parsed, &session.completed);
    session.apply(&evaluation);

    if args.dump_json {
        let dump = serde_json::json!({
            "commands": parsed.commands,
            "bindings": parsed.bindings,
            "actions": actions,
            "newly_satisfied": evaluation.newly_satisfied,
            "score_delta": evaluation.score_delta,
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        report(&parsed, &actions, &evaluation, &session);
    }

    // 4. ── Append run history ─────────────────────────────────────────
    if let Some(path) = &args.history {
        history::History::open(path)
            .append(&code, now.unix_timestamp())
            .with_context(|| "Appending run history")?;
    }

    Ok(())
}

fn report(
    parsed: &model::ParseResult,
    actions: &[exec::ExecutableAction],
    evaluation: &score::Evaluation,
    session: &score::Session,
) {
    println!(
        "parsed {} commands, {} bindings",
        parsed.commands.len(),
        parsed.bindings.len()
    );

    for action in actions {
        match action {
            exec::ExecutableAction::SelectChatRoom { room_id } => {
                println!("select chat room {room_id}");
            }
            exec::ExecutableAction::SendMessage { room_id, message } => {
                println!("send to room {room_id}: {message:?}");
            }
        }
    }

    if evaluation.newly_satisfied.is_empty() {
        println!("no new objectives");
    } else {
        let keys: Vec<_> = evaluation
            .newly_satisfied
            .iter()
            .map(|c| c.key())
            .collect();
        println!("objectives satisfied: {}", keys.join(", "));
    }
    println!("score +{} (total {})", evaluation.score_delta, session.score);
}
