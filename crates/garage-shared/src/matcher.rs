//! Free-text matcher over the knowledge base.
//!
//! Matching is plain substring containment on the lowercased utterance:
//! no tokenization, no accent folding. Categories are scanned in knowledge
//! base order as a fold over an explicit accumulator ([`Scan`]).
//!
//! Fallback rule: when a category triggers but none of its symptoms hit,
//! all its problems are added at [`Relevance::Fallback`], but only if the
//! accumulated list is still empty at that point. A category scanned after
//! an earlier hit therefore contributes nothing on keyword alone. This
//! ordering sensitivity is kept as observed behavior.

use crate::knowledge::{Category, KnowledgeBase, ProblemDefinition};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum number of matches returned per utterance
pub const MAX_MATCHES: usize = 2;

/// Fixed relevance tiers, serialized as their numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f32", try_from = "f32")]
pub enum Relevance {
    /// Category keyword only, no symptom recognized (0.5)
    Fallback,
    /// Reserved tier, never produced (1)
    Reserved,
    /// A symptom phrase of the problem was found (2)
    Symptom,
}

impl Relevance {
    pub fn score(self) -> f32 {
        match self {
            Self::Symptom => 2.0,
            Self::Reserved => 1.0,
            Self::Fallback => 0.5,
        }
    }
}

impl From<Relevance> for f32 {
    fn from(relevance: Relevance) -> Self {
        relevance.score()
    }
}

impl TryFrom<f32> for Relevance {
    type Error = String;

    fn try_from(score: f32) -> Result<Self, Self::Error> {
        if score == 2.0 {
            Ok(Self::Symptom)
        } else if score == 1.0 {
            Ok(Self::Reserved)
        } else if score == 0.5 {
            Ok(Self::Fallback)
        } else {
            Err(format!("Invalid relevance score: {}", score))
        }
    }
}

impl std::fmt::Display for Relevance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.score())
    }
}

/// A candidate problem for one utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub category_id: String,
    pub problem_id: String,
    pub relevance: Relevance,
}

impl Match {
    pub fn new(category: &Category, problem: &ProblemDefinition, relevance: Relevance) -> Self {
        Self {
            category_id: category.id.clone(),
            problem_id: problem.id.clone(),
            relevance,
        }
    }
}

/// Accumulator threaded through the category scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    matches: Vec<Match>,
}

impl Scan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Matches in discovery order
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Stable sort by relevance (highest first), then truncate
    pub fn into_ranked(self) -> Vec<Match> {
        let mut matches = self.matches;
        matches.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        matches.truncate(MAX_MATCHES);
        matches
    }
}

/// Lowercase the utterance. Nothing else is normalized.
pub fn normalize(utterance: &str) -> String {
    utterance.to_lowercase()
}

/// Rank at most [`MAX_MATCHES`] problems for an utterance
pub fn match_utterance(utterance: &str, kb: &KnowledgeBase) -> Vec<Match> {
    let normalized = normalize(utterance);

    let scan = kb
        .categories()
        .iter()
        .fold(Scan::new(), |scan, category| scan_category(category, &normalized, scan));

    debug!(candidates = scan.len(), "scan complete");
    scan.into_ranked()
}

/// One step of the scan: fold a single category into the accumulator
pub fn scan_category(category: &Category, normalized: &str, mut scan: Scan) -> Scan {
    if !category.is_triggered_by(normalized) {
        return scan;
    }

    let mut hits = 0;
    for problem in &category.problems {
        if problem.matches(normalized) {
            scan.matches.push(Match::new(category, problem, Relevance::Symptom));
            hits += 1;
        }
    }

    // Global emptiness, not per category
    let fallback = scan.is_empty();
    if fallback {
        scan.matches.extend(
            category
                .problems
                .iter()
                .map(|p| Match::new(category, p, Relevance::Fallback)),
        );
    }

    debug!(category = %category.id, hits, fallback, "category triggered");
    scan
}
