//! Vehicle problem knowledge base.
//!
//! A knowledge base is an ordered list of categories. Each category carries
//! trigger keywords and an ordered set of problem definitions. Enumeration
//! order matters: the matcher scans categories and problems in exactly the
//! order they are stored here.
//!
//! Invariants are checked once, when the knowledge base is built. After that
//! it is immutable and can be shared freely between sessions.

pub mod pack;

use crate::error::KnowledgeError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub use pack::{PackCategory, PackProblem, BUILTIN_PACK};

/// How serious a problem is for the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Normal,
    /// Safety related: advice carries the urgent consultation sentence
    Critical,
}

/// A single diagnosable problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDefinition {
    /// Identifier, unique within its category
    pub id: String,
    /// Lowercase phrases that identify this problem when found in an utterance
    pub symptoms: Vec<String>,
    /// One sentence describing the problem class
    pub explanation: String,
    /// Likely causes, each displayable on its own
    pub causes: Vec<String>,
    /// Recommended actions, first step first
    pub solutions: Vec<String>,
    #[serde(default)]
    pub severity: Severity,
}

impl ProblemDefinition {
    /// True if any symptom phrase occurs in the normalized utterance
    pub fn matches(&self, normalized: &str) -> bool {
        self.symptoms.iter().any(|s| normalized.contains(s.as_str()))
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

/// A group of related problems sharing trigger keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    /// Lowercase trigger words or phrases
    pub keywords: Vec<String>,
    #[serde(default)]
    pub problems: Vec<ProblemDefinition>,
}

impl Category {
    /// True if any keyword occurs in the normalized utterance
    pub fn is_triggered_by(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }

    pub fn problem(&self, problem_id: &str) -> Option<&ProblemDefinition> {
        self.problems.iter().find(|p| p.id == problem_id)
    }
}

/// On-disk shape of a knowledge file
#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    categories: Vec<Category>,
}

/// Validated, read-only catalog of categories and problems
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeBase {
    categories: Vec<Category>,
}

impl KnowledgeBase {
    /// Build a knowledge base, checking every invariant
    pub fn new(categories: Vec<Category>) -> Result<Self, KnowledgeError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// The knowledge base compiled into the binary
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::new(BUILTIN_PACK.iter().map(Category::from).collect())
    }

    /// Parse a knowledge base from TOML text
    ///
    /// ```toml
    /// [[categories]]
    /// id = "freins"
    /// keywords = ["frein"]
    ///
    /// [[categories.problems]]
    /// id = "bruit_freinage"
    /// symptoms = ["grince"]
    /// explanation = "..."
    /// causes = ["..."]
    /// solutions = ["..."]
    /// severity = "critical"
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self, KnowledgeError> {
        let file: KnowledgeFile = toml::from_str(contents)?;
        Self::new(file.categories)
    }

    /// Load a knowledge base from a TOML file
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Categories in enumeration order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every (category, problem) pair in enumeration order
    pub fn problems(&self) -> impl Iterator<Item = (&Category, &ProblemDefinition)> {
        self.categories
            .iter()
            .flat_map(|c| c.problems.iter().map(move |p| (c, p)))
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn problem(&self, category_id: &str, problem_id: &str) -> Option<&ProblemDefinition> {
        self.category(category_id)?.problem(problem_id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.categories.iter().map(|c| c.problems.len()).sum()
    }
}

impl From<&PackProblem> for ProblemDefinition {
    fn from(entry: &PackProblem) -> Self {
        Self {
            id: entry.id.to_string(),
            symptoms: entry.symptoms.iter().map(|s| s.to_string()).collect(),
            explanation: entry.explanation.to_string(),
            causes: entry.causes.iter().map(|s| s.to_string()).collect(),
            solutions: entry.solutions.iter().map(|s| s.to_string()).collect(),
            severity: entry.severity,
        }
    }
}

impl From<&PackCategory> for Category {
    fn from(entry: &PackCategory) -> Self {
        Self {
            id: entry.id.to_string(),
            keywords: entry.keywords.iter().map(|s| s.to_string()).collect(),
            problems: entry.problems.iter().map(ProblemDefinition::from).collect(),
        }
    }
}

fn validate(categories: &[Category]) -> Result<(), KnowledgeError> {
    if categories.is_empty() {
        return Err(KnowledgeError::Empty);
    }

    let mut category_ids = HashSet::new();
    for category in categories {
        if category.id.trim().is_empty() {
            return Err(KnowledgeError::BlankCategoryId);
        }
        if !category_ids.insert(category.id.as_str()) {
            return Err(KnowledgeError::DuplicateCategory(category.id.clone()));
        }
        if category.keywords.is_empty() {
            return Err(KnowledgeError::NoKeywords(category.id.clone()));
        }
        for keyword in &category.keywords {
            check_phrase(&category.id, keyword)?;
        }
        if category.problems.is_empty() {
            return Err(KnowledgeError::NoProblems(category.id.clone()));
        }

        let mut problem_ids = HashSet::new();
        for problem in &category.problems {
            if !problem_ids.insert(problem.id.as_str()) {
                return Err(KnowledgeError::DuplicateProblem {
                    category: category.id.clone(),
                    problem: problem.id.clone(),
                });
            }
            validate_problem(&category.id, problem)?;
        }
    }

    Ok(())
}

fn validate_problem(category_id: &str, problem: &ProblemDefinition) -> Result<(), KnowledgeError> {
    let lists = [
        ("symptoms", &problem.symptoms),
        ("causes", &problem.causes),
        ("solutions", &problem.solutions),
    ];
    for (field, list) in lists {
        if list.is_empty() {
            return Err(KnowledgeError::EmptyList {
                category: category_id.to_string(),
                problem: problem.id.clone(),
                field,
            });
        }
    }

    if problem.explanation.trim().is_empty() {
        return Err(KnowledgeError::MissingExplanation {
            category: category_id.to_string(),
            problem: problem.id.clone(),
        });
    }

    let location = format!("{}/{}", category_id, problem.id);
    for symptom in &problem.symptoms {
        check_phrase(&location, symptom)?;
    }

    Ok(())
}

/// Keywords and symptoms are compared against a lowercased utterance, so an
/// uppercase or blank phrase could never (or would always) match.
fn check_phrase(location: &str, phrase: &str) -> Result<(), KnowledgeError> {
    if phrase.trim().is_empty() || phrase.to_lowercase() != phrase {
        return Err(KnowledgeError::InvalidPhrase {
            location: location.to_string(),
            phrase: phrase.to_string(),
        });
    }
    Ok(())
}

// Tests are in tests/knowledge_tests.rs
