//! One-shot subcommands: ask, quick, kb

use crate::display::Printer;
use anyhow::{Context, Result};
use garage_shared::{Diagnosis, DiagnosticEngine, KnowledgeBase, Match, ResponsePayload};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// JSON document printed by `ask --json`
#[derive(Debug, Serialize)]
pub struct AskOutput<'a> {
    pub matches: &'a [Match],
    pub payload: &'a ResponsePayload,
    pub text: String,
}

impl<'a> AskOutput<'a> {
    pub fn new(diagnosis: &'a Diagnosis, text: String) -> Self {
        Self {
            matches: &diagnosis.matches,
            payload: &diagnosis.payload,
            text,
        }
    }
}

/// Diagnose one utterance and print the reply
pub fn ask(engine: &DiagnosticEngine, printer: &Printer, utterance: &str, json: bool) -> Result<()> {
    let diagnosis = engine.diagnose(utterance);
    let text = engine.render(&diagnosis.payload);

    if json {
        let output = AskOutput::new(&diagnosis, text);
        let rendered =
            serde_json::to_string_pretty(&output).context("Failed to serialize diagnosis")?;
        println!("{}", rendered);
    } else {
        println!("{}", printer.format_text(&text));
    }
    Ok(())
}

pub fn quick(printer: &Printer) {
    println!("Questions rapides :");
    printer.print_quick_questions();
}

/// Load and check a knowledge file, printing a one-line summary
pub fn validate_kb_file(path: &Path) -> Result<()> {
    let kb = KnowledgeBase::load(path)
        .with_context(|| format!("Invalid knowledge base {}", path.display()))?;
    info!(path = %path.display(), "knowledge base validated");
    println!(
        "{}: {} categories, {} problems",
        path.display(),
        kb.len(),
        kb.problem_count()
    );
    Ok(())
}

/// Category and problem listing, one line each
pub fn kb_listing(kb: &KnowledgeBase) -> String {
    let mut out = String::new();
    for category in kb.categories() {
        out.push_str(&format!(
            "{} ({})\n",
            category.id,
            category.keywords.join(", ")
        ));
        for problem in &category.problems {
            let flag = if problem.is_critical() { " [critical]" } else { "" };
            out.push_str(&format!(
                "  {}{} - {} symptoms\n",
                problem.id,
                flag,
                problem.symptoms.len()
            ));
        }
    }
    out
}
