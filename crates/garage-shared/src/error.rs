//! Error types for the diagnostic engine.
//!
//! The engine itself never fails at request time. Everything here is raised
//! while a knowledge base is being built or loaded, once, at startup.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Knowledge base has no categories")]
    Empty,

    #[error("Duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("Category id must not be blank")]
    BlankCategoryId,

    #[error("Category '{0}' has no keywords")]
    NoKeywords(String),

    #[error("Category '{0}' has no problems")]
    NoProblems(String),

    #[error("Duplicate problem id '{problem}' in category '{category}'")]
    DuplicateProblem { category: String, problem: String },

    #[error("Problem '{category}/{problem}' has an empty {field} list")]
    EmptyList {
        category: String,
        problem: String,
        field: &'static str,
    },

    #[error("Problem '{category}/{problem}' has no explanation")]
    MissingExplanation { category: String, problem: String },

    #[error("Trigger phrase '{phrase}' in '{location}' must be non-blank and lowercase")]
    InvalidPhrase { location: String, phrase: String },

    #[error("Failed to read knowledge file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse knowledge file: {0}")]
    Toml(#[from] toml::de::Error),
}
