//! Interactive chat loop.
//!
//! Free text goes to the diagnostic engine; lines starting with `/` are
//! commands.

use crate::display::Printer;
use crate::session::ChatSession;
use crate::display::USER_PREFIX;
use crate::thinking::Thinking;
use anyhow::{Context, Result};
use garage_shared::presets::{quick_question, QUICK_QUESTIONS};
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const HELP_TEXT: &str = "Commandes : /quick, /quick N, /history, /reset, /help, /quit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Empty,
    Utterance(String),
    ListQuick,
    Quick(usize),
    History,
    Reset,
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_input(line: &str) -> ReplInput {
    let line = line.trim();
    if line.is_empty() {
        return ReplInput::Empty;
    }
    let Some(command) = line.strip_prefix('/') else {
        return ReplInput::Utterance(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();

    match (name.as_str(), arg) {
        ("quit" | "exit" | "q", _) => ReplInput::Quit,
        ("quick", None) => ReplInput::ListQuick,
        ("quick", Some(n)) => match n.parse::<usize>() {
            Ok(n) if quick_question(n).is_some() => ReplInput::Quick(n),
            _ => ReplInput::Invalid(format!(
                "Numéro de question invalide : {} (1 à {})",
                n,
                QUICK_QUESTIONS.len()
            )),
        },
        ("history", _) => ReplInput::History,
        ("reset", _) => ReplInput::Reset,
        ("help", _) => ReplInput::Help,
        _ => ReplInput::Invalid(format!("Commande inconnue : /{}", name)),
    }
}

/// Line showing which quick question was sent.
///
/// On a terminal the user already sees their `/quick N` line, so nothing is
/// echoed; piped input gets the question spelled out.
pub fn quick_echo(question: &str, stdin_is_tty: bool) -> Option<String> {
    if stdin_is_tty {
        None
    } else {
        Some(format!("{}  {}", USER_PREFIX, question))
    }
}

/// Run the chat loop until /quit or end of input
pub async fn run(mut session: ChatSession, printer: Printer, ascii: bool) -> Result<()> {
    for message in session.history().await {
        printer.print_message(&message);
    }
    printer.notice(HELP_TEXT);
    println!();

    let stdin_is_tty = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}  ", USER_PREFIX);
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            println!();
            break;
        };

        match parse_input(&line) {
            ReplInput::Empty => continue,
            ReplInput::Quit => break,
            ReplInput::Help => printer.notice(HELP_TEXT),
            ReplInput::ListQuick => printer.print_quick_questions(),
            ReplInput::History => printer.print_history(&session.history().await),
            ReplInput::Reset => {
                session.restart().await;
                if let Some(welcome) = session.history().await.first() {
                    printer.print_message(welcome);
                }
            }
            ReplInput::Invalid(reason) => printer.warning(&reason),
            ReplInput::Quick(n) => {
                if let Some(question) = quick_question(n) {
                    if let Some(echo) = quick_echo(question, stdin_is_tty) {
                        println!("{}", echo);
                    }
                    exchange(&mut session, &printer, question, ascii).await;
                }
            }
            ReplInput::Utterance(text) => exchange(&mut session, &printer, &text, ascii).await,
        }
    }

    debug!("chat loop finished");
    session.close();
    Ok(())
}

async fn exchange(session: &mut ChatSession, printer: &Printer, utterance: &str, ascii: bool) {
    if let Err(e) = session.submit(utterance).await {
        printer.warning(&e.to_string());
        return;
    }

    let thinking = Thinking::start("Analyse en cours...", ascii);
    let reply = session.wait_reply().await;
    let elapsed = thinking.finish().await;

    match reply {
        Some(message) => printer.print_reply(&message, elapsed),
        None => printer.warning("La réponse a été annulée"),
    }
}
