//! Responder and formatter tests.
//!
//! Tests verify:
//! - Clarify payload when nothing matched
//! - Safety escalation on brakes and engine-won't-start
//! - Related-topic teaser for a secondary match
//! - Section order and list markers in the rendered text

use garage_shared::knowledge::KnowledgeBase;
use garage_shared::matcher::{match_utterance, Match, Relevance};
use garage_shared::render::{
    render_text, RenderStyle, CAUSES_HEADER, CLARIFY_TEXT, RELATED_LABEL, SOLUTIONS_HEADER,
    URGENT_TEXT,
};
use garage_shared::responder::{compose, ResponsePayload};

fn builtin() -> KnowledgeBase {
    KnowledgeBase::builtin().unwrap()
}

fn respond(utterance: &str) -> (ResponsePayload, String) {
    let kb = builtin();
    let payload = compose(&match_utterance(utterance, &kb), &kb);
    let text = render_text(&payload, &RenderStyle::emoji());
    (payload, text)
}

// =============================================================================
// Clarify
// =============================================================================

#[test]
fn test_empty_matches_give_clarify() {
    let kb = builtin();
    let payload = compose(&[], &kb);
    assert_eq!(payload, ResponsePayload::Clarify);
    assert!(payload.is_clarify());
    assert!(payload.advice().is_none());
    assert_eq!(render_text(&payload, &RenderStyle::emoji()), CLARIFY_TEXT);
}

#[test]
fn test_empty_utterance_gives_clarify() {
    let (payload, text) = respond("");
    assert!(payload.is_clarify());
    assert_eq!(text, CLARIFY_TEXT);
}

#[test]
fn test_unknown_primary_degrades_to_clarify() {
    let kb = builtin();
    let stray = Match {
        category_id: "carrosserie".to_string(),
        problem_id: "rayure".to_string(),
        relevance: Relevance::Symptom,
    };
    assert_eq!(compose(&[stray], &kb), ResponsePayload::Clarify);
}

#[test]
fn test_unknown_secondary_drops_teaser() {
    let kb = builtin();
    let mut matches = match_utterance("la pédale de frein est molle", &kb);
    matches.push(Match {
        category_id: "carrosserie".to_string(),
        problem_id: "rayure".to_string(),
        relevance: Relevance::Fallback,
    });

    let advice = compose(&matches, &kb).advice().cloned().unwrap();
    assert_eq!(advice.problem_id, "pedale_molle");
    assert_eq!(advice.related, None);
}

// =============================================================================
// Advice content
// =============================================================================

#[test]
fn test_advice_copies_problem_definition() {
    let kb = builtin();
    let (payload, _) = respond("ma batterie se décharge");
    let advice = payload.advice().unwrap();
    let problem = kb.problem("electrique", "batterie_dechargee").unwrap();

    assert_eq!(advice.category_id, "electrique");
    assert_eq!(advice.problem_id, "batterie_dechargee");
    assert_eq!(advice.explanation, problem.explanation);
    assert_eq!(advice.causes, problem.causes);
    assert_eq!(advice.solutions, problem.solutions);
    assert!(!advice.urgent);
    assert_eq!(advice.related, None);
}

#[test]
fn test_brake_problem_is_urgent() {
    let (payload, text) = respond("la pédale de frein est molle");
    assert!(payload.advice().unwrap().urgent);
    assert!(text.contains(URGENT_TEXT));
}

#[test]
fn test_engine_not_starting_is_urgent() {
    let (payload, text) = respond("ma voiture ne démarre pas");
    let advice = payload.advice().unwrap();
    assert_eq!(advice.problem_id, "ne_demarre_pas");
    assert!(advice.urgent);
    assert!(text.contains(URGENT_TEXT));
}

#[test]
fn test_brake_fallback_is_urgent() {
    let (payload, text) = respond("j'ai un souci avec mes freins");
    assert!(payload.advice().unwrap().urgent);
    assert!(text.contains(URGENT_TEXT));
}

#[test]
fn test_efficiency_and_climate_are_not_urgent() {
    for utterance in ["ma voiture consomme trop", "la clim ne fait pas froid"] {
        let (payload, text) = respond(utterance);
        assert!(!payload.advice().unwrap().urgent, "{}", utterance);
        assert!(!text.contains(URGENT_TEXT), "{}", utterance);
    }
}

#[test]
fn test_related_topic_teaser() {
    let kb = builtin();
    let (payload, text) = respond("mon moteur surchauffe et mes freins grincent");
    let advice = payload.advice().unwrap();
    let secondary = kb.problem("freins", "bruit_freinage").unwrap();

    assert_eq!(advice.problem_id, "surchauffe");
    // Primary is an engine problem, not a safety one
    assert!(!advice.urgent);
    assert_eq!(advice.related.as_deref(), Some(secondary.explanation.as_str()));
    assert!(text.contains(RELATED_LABEL));
    assert!(text.contains(&secondary.explanation));
}

#[test]
fn test_no_teaser_for_single_match() {
    let (_, text) = respond("la pédale de frein est molle");
    assert!(!text.contains(RELATED_LABEL));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_sections_in_order() {
    let (payload, text) = respond("j'ai un souci avec mes freins");
    let advice = payload.advice().unwrap();

    let explanation = text.find(&advice.explanation).unwrap();
    let causes = text.find(CAUSES_HEADER).unwrap();
    let solutions = text.find(SOLUTIONS_HEADER).unwrap();
    let urgent = text.find(URGENT_TEXT).unwrap();
    let related = text.find(RELATED_LABEL).unwrap();

    assert!(explanation < causes);
    assert!(causes < solutions);
    assert!(solutions < urgent);
    assert!(urgent < related);
}

#[test]
fn test_sections_separated_by_blank_lines() {
    let (payload, text) = respond("ma batterie se décharge");
    let advice = payload.advice().unwrap();
    let sections: Vec<&str> = text.split("\n\n").collect();

    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0], advice.explanation);
    assert_eq!(sections[1].lines().count(), advice.causes.len() + 1);
    assert_eq!(sections[2].lines().count(), advice.solutions.len() + 1);
}

#[test]
fn test_list_items_in_order_with_markers() {
    let kb = builtin();
    let problem = kb.problem("electrique", "batterie_dechargee").unwrap();
    let payload = compose(&match_utterance("ma batterie se décharge", &kb), &kb);

    let style = RenderStyle::ascii();
    let text = render_text(&payload, &style);
    let cause_lines: Vec<String> = text
        .lines()
        .filter(|l| l.starts_with(style.cause_marker))
        .map(|l| l.to_string())
        .collect();
    let expected: Vec<String> = problem
        .causes
        .iter()
        .map(|c| format!("{} {}", style.cause_marker, c))
        .collect();
    assert_eq!(cause_lines, expected);

    let solution_lines: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with(style.solution_marker))
        .collect();
    assert_eq!(solution_lines.len(), problem.solutions.len());
    assert!(solution_lines[0].ends_with(&problem.solutions[0]));
}

#[test]
fn test_headers_are_emphasized() {
    let (_, text) = respond("ma batterie se décharge");
    assert!(text.contains(&format!("**{}**", CAUSES_HEADER)));
    assert!(text.contains(&format!("**{}**", SOLUTIONS_HEADER)));
}

#[test]
fn test_emoji_markers() {
    let (_, text) = respond("mon pneu perd de l'air");
    assert!(text.contains("🔍 "));
    assert!(text.contains("🔧 "));
    assert!(!text.contains("⚠️"));
}

// =============================================================================
// Wire shape
// =============================================================================

#[test]
fn test_payload_serialization() {
    let json = serde_json::to_string(&ResponsePayload::Clarify).unwrap();
    assert_eq!(json, r#"{"kind":"clarify"}"#);

    let (payload, _) = respond("la pédale de frein est molle");
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["kind"], "advice");
    assert_eq!(value["category_id"], "freins");
    assert_eq!(value["urgent"], true);
    assert!(value.get("related").is_none());

    let parsed: ResponsePayload = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, payload);
}
