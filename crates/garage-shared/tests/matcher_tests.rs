//! Matcher tests against the built-in pack and small hand-built packs.
//!
//! Tests verify:
//! - Result length never exceeds two
//! - Symptom matches outrank category fallbacks
//! - Matching is case-insensitive and deterministic
//! - The fallback rule only fires while nothing has matched yet

use garage_shared::knowledge::KnowledgeBase;
use garage_shared::matcher::{match_utterance, scan_category, Match, Relevance, Scan, MAX_MATCHES};
use garage_shared::presets::QUICK_QUESTIONS;

fn builtin() -> KnowledgeBase {
    KnowledgeBase::builtin().unwrap()
}

fn ids(matches: &[Match]) -> Vec<(&str, &str, Relevance)> {
    matches
        .iter()
        .map(|m| (m.category_id.as_str(), m.problem_id.as_str(), m.relevance))
        .collect()
}

/// Two categories, A before B, two problems each
fn ordered_pack() -> KnowledgeBase {
    KnowledgeBase::from_toml_str(
        r#"
[[categories]]
id = "a"
keywords = ["alpha"]

[[categories.problems]]
id = "a1"
symptoms = ["bruit sec"]
explanation = "Probleme A1."
causes = ["cause"]
solutions = ["solution"]

[[categories.problems]]
id = "a2"
symptoms = ["odeur"]
explanation = "Probleme A2."
causes = ["cause"]
solutions = ["solution"]

[[categories]]
id = "b"
keywords = ["beta"]

[[categories.problems]]
id = "b1"
symptoms = ["fuite"]
explanation = "Probleme B1."
causes = ["cause"]
solutions = ["solution"]

[[categories.problems]]
id = "b2"
symptoms = ["vibration"]
explanation = "Probleme B2."
causes = ["cause"]
solutions = ["solution"]
"#,
    )
    .unwrap()
}

// =============================================================================
// General properties
// =============================================================================

#[test]
fn test_never_more_than_two_matches() {
    let kb = builtin();
    let utterances = [
        "",
        "bonjour",
        "mon moteur surchauffe, ma pédale de frein est molle, ma batterie se décharge et mon pneu est crevé",
        "problème de moteur, de freins, de batterie, de pneu, de clim et de consommation",
        "ça vibre, ça tremble et le volant tremble quand je freine avec un pneu usé",
    ];
    for utterance in utterances.iter().chain(QUICK_QUESTIONS.iter()) {
        let matches = match_utterance(utterance, &kb);
        assert!(matches.len() <= MAX_MATCHES, "{}", utterance);
    }
}

#[test]
fn test_empty_and_blank_input() {
    let kb = builtin();
    assert!(match_utterance("", &kb).is_empty());
    assert!(match_utterance("   \n\t", &kb).is_empty());
}

#[test]
fn test_unrelated_input() {
    let kb = builtin();
    assert!(match_utterance("quelle heure est-il ?", &kb).is_empty());
}

#[test]
fn test_symptom_without_category_keyword_is_ignored() {
    // "grince" is a brake symptom, but no brake keyword is present
    let kb = builtin();
    assert!(match_utterance("ça grince", &kb).is_empty());
}

#[test]
fn test_idempotent() {
    let kb = builtin();
    let utterance = "mon moteur surchauffe et mes freins grincent";
    assert_eq!(match_utterance(utterance, &kb), match_utterance(utterance, &kb));
}

#[test]
fn test_case_insensitive() {
    let kb = builtin();
    let upper = match_utterance("Ma Batterie Se Décharge", &kb);
    let lower = match_utterance("ma batterie se décharge", &kb);
    assert_eq!(upper, lower);
    assert_eq!(
        ids(&lower),
        vec![("electrique", "batterie_dechargee", Relevance::Symptom)]
    );

    let shouted = match_utterance("MA BATTERIE SE DÉCHARGE", &kb);
    assert_eq!(shouted, lower);
}

// =============================================================================
// Symptom matches
// =============================================================================

#[test]
fn test_soft_brake_pedal() {
    let kb = builtin();
    let matches = match_utterance("la pédale de frein est molle", &kb);
    assert_eq!(
        ids(&matches),
        vec![("freins", "pedale_molle", Relevance::Symptom)]
    );
}

#[test]
fn test_two_symptom_matches_in_category_order() {
    let kb = builtin();
    let matches = match_utterance("mon moteur surchauffe et mes freins grincent", &kb);
    assert_eq!(
        ids(&matches),
        vec![
            ("moteur", "surchauffe", Relevance::Symptom),
            ("freins", "bruit_freinage", Relevance::Symptom),
        ]
    );
}

#[test]
fn test_problem_recorded_once_for_several_symptoms() {
    let kb = builtin();
    let matches = match_utterance("ma batterie se décharge, elle est à plat", &kb);
    assert_eq!(
        ids(&matches),
        vec![("electrique", "batterie_dechargee", Relevance::Symptom)]
    );
}

#[test]
fn test_engine_does_not_start() {
    let kb = builtin();
    let matches = match_utterance("Ma voiture ne démarre pas ce matin", &kb);
    assert_eq!(matches[0].problem_id, "ne_demarre_pas");
    assert_eq!(matches[0].relevance, Relevance::Symptom);
}

#[test]
fn test_every_quick_question_hits_a_symptom() {
    let kb = builtin();
    for question in QUICK_QUESTIONS {
        let matches = match_utterance(question, &kb);
        assert!(!matches.is_empty(), "{}", question);
        assert_eq!(matches[0].relevance, Relevance::Symptom, "{}", question);
    }
}

// =============================================================================
// Fallback rule
// =============================================================================

#[test]
fn test_category_fallback() {
    let kb = builtin();
    let matches = match_utterance("j'ai un souci avec mes freins", &kb);
    assert_eq!(
        ids(&matches),
        vec![
            ("freins", "pedale_molle", Relevance::Fallback),
            ("freins", "bruit_freinage", Relevance::Fallback),
        ]
    );
}

#[test]
fn test_symptom_ranked_ahead_of_fallback() {
    // The engine category triggers first without a symptom, so its problems
    // are added as fallbacks; the later brake symptom still ranks first.
    let kb = builtin();
    let matches = match_utterance("problème de moteur et mes freins grincent", &kb);
    assert_eq!(
        ids(&matches),
        vec![
            ("freins", "bruit_freinage", Relevance::Symptom),
            ("moteur", "surchauffe", Relevance::Fallback),
        ]
    );
}

#[test]
fn test_only_first_triggered_category_gets_fallback() {
    let kb = builtin();
    let matches = match_utterance("problème de moteur et de freins", &kb);
    assert_eq!(
        ids(&matches),
        vec![
            ("moteur", "surchauffe", Relevance::Fallback),
            ("moteur", "ne_demarre_pas", Relevance::Fallback),
        ]
    );
}

#[test]
fn test_earlier_symptom_suppresses_later_fallback() {
    let kb = builtin();
    let matches = match_utterance("mon moteur surchauffe et j'ai un souci de freins", &kb);
    assert_eq!(
        ids(&matches),
        vec![("moteur", "surchauffe", Relevance::Symptom)]
    );
}

#[test]
fn test_ordering_quirk_with_two_categories() {
    let kb = ordered_pack();

    // Only B triggers, no symptom: B's problems as fallbacks
    let matches = match_utterance("souci beta", &kb);
    assert_eq!(
        ids(&matches),
        vec![("b", "b1", Relevance::Fallback), ("b", "b2", Relevance::Fallback)]
    );

    // A triggers with a symptom first: B contributes nothing
    let matches = match_utterance("alpha bruit sec et souci beta", &kb);
    assert_eq!(ids(&matches), vec![("a", "a1", Relevance::Symptom)]);

    // A triggers without a symptom: A's fallbacks, B contributes nothing
    let matches = match_utterance("alpha et beta", &kb);
    assert_eq!(
        ids(&matches),
        vec![("a", "a1", Relevance::Fallback), ("a", "a2", Relevance::Fallback)]
    );
}

#[test]
fn test_later_symptom_does_not_remove_earlier_fallbacks() {
    let kb = ordered_pack();
    let matches = match_utterance("alpha, beta avec une fuite", &kb);
    assert_eq!(
        ids(&matches),
        vec![("b", "b1", Relevance::Symptom), ("a", "a1", Relevance::Fallback)]
    );
}

// =============================================================================
// Single category step
// =============================================================================

#[test]
fn test_scan_category_untriggered_is_identity() {
    let kb = ordered_pack();
    let b = kb.category("b").unwrap();
    let scan = scan_category(b, "alpha seulement", Scan::new());
    assert!(scan.is_empty());
}

#[test]
fn test_scan_category_fallback_depends_on_accumulator() {
    let kb = ordered_pack();
    let a = kb.category("a").unwrap();
    let b = kb.category("b").unwrap();

    let fresh = scan_category(b, "beta", Scan::new());
    assert_eq!(fresh.len(), 2);
    assert!(fresh.matches().iter().all(|m| m.relevance == Relevance::Fallback));

    let seeded = scan_category(a, "alpha odeur", Scan::new());
    assert_eq!(seeded.len(), 1);
    let after = scan_category(b, "beta", seeded.clone());
    assert_eq!(after, seeded);
}

#[test]
fn test_reserved_tier_never_produced() {
    let kb = builtin();
    let utterances = [
        "problème de moteur",
        "la pédale de frein est molle",
        "mon pneu est crevé",
        "ma clim sent le moisi",
    ];
    for utterance in utterances {
        assert!(match_utterance(utterance, &kb)
            .iter()
            .all(|m| m.relevance != Relevance::Reserved));
    }
}
