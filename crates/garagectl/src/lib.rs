//! Garagiste command-line front end.
//!
//! Wires configuration, the shared diagnostic engine and the terminal
//! surfaces together. Exposed as a library for integration tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod errors;
pub mod logging;
pub mod repl;
pub mod session;
pub mod thinking;

use anyhow::Result;
use cli::{Cli, Commands};
use config::GarageConfig;
use display::Printer;
use garage_shared::DiagnosticEngine;
use session::ChatSession;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{debug, info};

/// Effective configuration after applying command-line overrides
pub fn resolve_config(cli: &Cli) -> Result<GarageConfig> {
    let mut config = match &cli.config {
        Some(path) => GarageConfig::load_from(path)?,
        None => GarageConfig::load()?,
    };

    if let Some(path) = &cli.kb {
        config.knowledge.path = Some(path.clone());
    }
    if cli.ascii {
        config.set_emoji_mode("off")?;
    }
    if let Some(mode) = &cli.color {
        config.set_color_mode(mode)?;
    }
    Ok(config)
}

/// Execute the parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let command = cli.resolved_command();
    debug!(?command, "dispatching");

    // Validating a file never needs the configured knowledge base
    if let Commands::Kb { file: Some(path) } = &command {
        return commands::validate_kb_file(path);
    }

    let is_tty = std::io::stdout().is_terminal();

    let kb = config.knowledge_base()?;
    info!(
        categories = kb.len(),
        problems = kb.problem_count(),
        "knowledge base loaded"
    );

    let style = config.render_style(is_tty);
    let engine = DiagnosticEngine::new(kb, style);
    let printer = Printer::new(config.use_color(is_tty));
    let ascii = style == garage_shared::RenderStyle::ascii();

    match command {
        Commands::Ask { utterance, json } => {
            commands::ask(&engine, &printer, &utterance.join(" "), json)
        }
        Commands::Quick => {
            commands::quick(&printer);
            Ok(())
        }
        Commands::Kb { .. } => {
            print!("{}", commands::kb_listing(engine.knowledge()));
            Ok(())
        }
        Commands::Chat => {
            let delay = config.chat.thinking_delay();
            let session = ChatSession::start(Arc::new(engine), delay);
            repl::run(session, printer, ascii).await
        }
    }
}
