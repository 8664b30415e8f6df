//! Response composition.
//!
//! Turns ranked matches into a data-shaped payload. Text formatting lives in
//! [`crate::render`] so the payload stays independent of any display surface.

use crate::knowledge::KnowledgeBase;
use crate::matcher::Match;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Advice built from the primary match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub category_id: String,
    pub problem_id: String,
    pub explanation: String,
    pub causes: Vec<String>,
    pub solutions: Vec<String>,
    /// Safety related: append the urgent consultation sentence
    pub urgent: bool,
    /// Explanation of the secondary match, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
}

/// What the engine answers for one utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponsePayload {
    /// Nothing matched: ask the user for more detail
    Clarify,
    Advice(Advice),
}

impl ResponsePayload {
    pub fn is_clarify(&self) -> bool {
        matches!(self, Self::Clarify)
    }

    pub fn advice(&self) -> Option<&Advice> {
        match self {
            Self::Advice(advice) => Some(advice),
            Self::Clarify => None,
        }
    }
}

/// Compose a payload from ranked matches
pub fn compose(matches: &[Match], kb: &KnowledgeBase) -> ResponsePayload {
    let Some(primary) = matches.first() else {
        return ResponsePayload::Clarify;
    };

    let Some(problem) = kb.problem(&primary.category_id, &primary.problem_id) else {
        warn!(
            category = %primary.category_id,
            problem = %primary.problem_id,
            "primary match not found in knowledge base"
        );
        return ResponsePayload::Clarify;
    };

    let related = matches.get(1).and_then(|secondary| {
        let problem = kb.problem(&secondary.category_id, &secondary.problem_id);
        if problem.is_none() {
            warn!(
                category = %secondary.category_id,
                problem = %secondary.problem_id,
                "secondary match not found in knowledge base, teaser dropped"
            );
        }
        problem.map(|p| p.explanation.clone())
    });

    ResponsePayload::Advice(Advice {
        category_id: primary.category_id.clone(),
        problem_id: primary.problem_id.clone(),
        explanation: problem.explanation.clone(),
        causes: problem.causes.clone(),
        solutions: problem.solutions.clone(),
        urgent: problem.is_critical(),
        related,
    })
}

// Tests are in tests/responder_tests.rs
