//! Canned chat texts: the welcome message and the quick questions.
//!
//! Quick questions are fed verbatim through the same matcher as typed text.

/// First bot message of every session
pub const WELCOME_TEXT: &str = "Bonjour ! Je suis votre assistant de diagnostic automobile. \
Décrivez le problème de votre véhicule ou choisissez une question rapide.";

/// Quick questions offered by the chat surface
pub const QUICK_QUESTIONS: &[&str] = &[
    "Mon moteur fait un bruit de claquement",
    "Ma voiture ne démarre pas",
    "Mes freins grincent",
    "Ma batterie se décharge rapidement",
    "La climatisation ne fait pas froid",
    "Comment réduire ma consommation de carburant ?",
    "Mon pneu perd de l'air",
];

/// Look up a quick question by its 1-based menu number
pub fn quick_question(number: usize) -> Option<&'static str> {
    number.checked_sub(1).and_then(|i| QUICK_QUESTIONS.get(i).copied())
}
