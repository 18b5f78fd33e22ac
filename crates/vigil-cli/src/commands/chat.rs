//! Interactive chat with the console assistant.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::timeout;

use vigil_application::{ConversationEvent, ConversationSession, SubmitOutcome};
use vigil_core::config::ConsoleConfig;
use vigil_core::message::{ChartPayload, Message, MessagePayload, MessageRole, TablePayload};

/// Upper bound on waiting for one scheduled reply; well past any sane
/// configured delay.
const REPLY_WAIT: Duration = Duration::from_secs(30);

/// Runs the chat REPL until EOF or an exit command.
pub async fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let session = ConversationSession::new(&config.assistant);
    tracing::info!(session_id = %session.id(), "chat session started");

    println!("VIGIL console assistant. Ask about vulnerabilities, risk trends,");
    println!("compliance scores, or audit activity. Type 'exit' to leave.");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut rendered = 0usize;

    loop {
        print_prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        let mut rx = session.subscribe();
        if session.submit(&line).await == SubmitOutcome::Ignored {
            continue;
        }

        // Wait for the assistant reply scheduled for this input.
        let waited = timeout(REPLY_WAIT, async {
            loop {
                match rx.recv().await {
                    Ok(ConversationEvent::MessageAppended {
                        role: MessageRole::Assistant,
                        ..
                    }) => break,
                    Ok(_) => continue,
                    Err(_) => break,
                }
            }
        })
        .await;
        if waited.is_err() {
            tracing::warn!("no reply within {REPLY_WAIT:?}");
        }

        let messages = session.messages().await;
        for message in &messages[rendered..] {
            render_message(message);
        }
        rendered = messages.len();
    }

    session.close();
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<ConsoleConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ConsoleConfig::from_toml_str(&text).context("parsing config")
        }
        None => Ok(ConsoleConfig::default()),
    }
}

fn print_prompt() {
    use std::io::Write;
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn render_message(message: &Message) {
    let speaker = match message.role {
        MessageRole::User => "you",
        MessageRole::Assistant => "vigil",
        MessageRole::System => "system",
    };
    println!("[{speaker}] {}", message.text);
    match &message.payload {
        Some(MessagePayload::Table(table)) => render_table(table),
        Some(MessagePayload::Chart(chart)) => render_chart(chart),
        None => {}
    }
}

fn render_table(table: &TablePayload) {
    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            table
                .rows
                .iter()
                .map(|row| row.get(i).map_or(0, |cell| cell.len()))
                .chain(std::iter::once(column.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = table
        .columns
        .iter()
        .zip(widths.iter().copied())
        .map(|(column, width)| format!("{column:width$}"))
        .collect();
    println!("  {}", header.join("  "));

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| format!("{cell:width$}"))
            .collect();
        println!("  {}", cells.join("  "));
    }
}

fn render_chart(chart: &ChartPayload) {
    let max = chart
        .points
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);
    println!("  {}", chart.series);
    for point in &chart.points {
        let bar_len = ((point.value / max) * 40.0).round() as usize;
        println!("  {:>4} {:>6.1} {}", point.label, point.value, "#".repeat(bar_len));
    }
}
