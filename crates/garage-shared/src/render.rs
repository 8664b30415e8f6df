//! Text formatter for response payloads.
//!
//! Produces the chat text convention: sections separated by blank lines, one
//! list item per line, and `**...**` around emphasized spans. The engine only
//! produces the markup; display surfaces decide how to show it
//! (see [`emphasis_spans`]).

use crate::responder::{Advice, ResponsePayload};

/// Emphasis delimiter
pub const BOLD: &str = "**";

/// Asked when nothing in the knowledge base matched
pub const CLARIFY_TEXT: &str = "Je n'ai pas réussi à identifier précisément le problème. \
Pouvez-vous me donner plus de détails ?\n\n\
- Quel type de symptôme constatez-vous (bruit, vibration, odeur, fumée) ?\n\
- Dans quelles conditions apparaît-il (au démarrage, en roulant, au freinage) ?\n\
- Un voyant est-il allumé au tableau de bord ?\n\
- Depuis quand le problème est-il apparu ?";

/// Appended to advice on safety related problems
pub const URGENT_TEXT: &str = "Ce problème touche à votre sécurité : \
consultez un professionnel sans attendre avant de reprendre la route.";

pub const CAUSES_HEADER: &str = "Causes possibles :";
pub const SOLUTIONS_HEADER: &str = "Actions recommandées :";
pub const RELATED_LABEL: &str = "Sujet connexe :";

/// Line markers used by the formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub cause_marker: &'static str,
    pub solution_marker: &'static str,
    pub urgent_marker: &'static str,
    pub related_marker: &'static str,
}

impl RenderStyle {
    pub const fn emoji() -> Self {
        Self {
            cause_marker: "🔍",
            solution_marker: "🔧",
            urgent_marker: "⚠️",
            related_marker: "💡",
        }
    }

    pub const fn ascii() -> Self {
        Self {
            cause_marker: "-",
            solution_marker: ">",
            urgent_marker: "[!]",
            related_marker: "[i]",
        }
    }

    pub fn from_emojis(enabled: bool) -> Self {
        if enabled {
            Self::emoji()
        } else {
            Self::ascii()
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::emoji()
    }
}

/// Render a payload to chat text
pub fn render_text(payload: &ResponsePayload, style: &RenderStyle) -> String {
    match payload {
        ResponsePayload::Clarify => CLARIFY_TEXT.to_string(),
        ResponsePayload::Advice(advice) => render_advice(advice, style),
    }
}

fn render_advice(advice: &Advice, style: &RenderStyle) -> String {
    let mut sections = vec![
        advice.explanation.clone(),
        list_section(CAUSES_HEADER, style.cause_marker, &advice.causes),
        list_section(SOLUTIONS_HEADER, style.solution_marker, &advice.solutions),
    ];

    if advice.urgent {
        sections.push(format!("{} {}{}{}", style.urgent_marker, BOLD, URGENT_TEXT, BOLD));
    }

    if let Some(related) = &advice.related {
        sections.push(format!(
            "{} {}{}{} {}",
            style.related_marker, BOLD, RELATED_LABEL, BOLD, related
        ));
    }

    sections.join("\n\n")
}

fn list_section(header: &str, marker: &str, items: &[String]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(format!("{}{}{}", BOLD, header, BOLD));
    lines.extend(items.iter().map(|item| format!("{} {}", marker, item)));
    lines.join("\n")
}

/// Split a line into `(emphasized, text)` spans on the `**` delimiter.
///
/// An unmatched trailing delimiter leaves the rest of the line emphasized.
/// Empty spans are dropped.
pub fn emphasis_spans(line: &str) -> Vec<(bool, &str)> {
    line.split(BOLD)
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| (i % 2 == 1, part))
        .collect()
}

/// Remove emphasis markup, keeping the text
pub fn strip_markup(text: &str) -> String {
    text.replace(BOLD, "")
}
