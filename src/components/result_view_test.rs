use super::*;

fn source(origin: &str, score: f64, text: &str) -> Source {
    Source { source: origin.to_owned(), score, text: text.to_owned() }
}

// =============================================================
// Confidence tiers
// =============================================================

#[test]
fn confidence_tier_examples() {
    assert_eq!(ConfidenceTier::from_confidence(0.75), ConfidenceTier::Positive);
    assert_eq!(ConfidenceTier::from_confidence(0.5), ConfidenceTier::Cautionary);
    assert_eq!(ConfidenceTier::from_confidence(0.1), ConfidenceTier::Negative);
}

#[test]
fn confidence_tier_boundaries_are_inclusive_upward() {
    assert_eq!(ConfidenceTier::from_confidence(0.70), ConfidenceTier::Positive);
    assert_eq!(ConfidenceTier::from_confidence(0.6999), ConfidenceTier::Cautionary);
    assert_eq!(ConfidenceTier::from_confidence(0.40), ConfidenceTier::Cautionary);
    assert_eq!(ConfidenceTier::from_confidence(0.3999), ConfidenceTier::Negative);
    assert_eq!(ConfidenceTier::from_confidence(0.0), ConfidenceTier::Negative);
    assert_eq!(ConfidenceTier::from_confidence(1.0), ConfidenceTier::Positive);
}

// =============================================================
// Method badge
// =============================================================

#[test]
fn method_label_upper_cases_and_spaces() {
    assert_eq!(method_label(&Method::Document), "DOCUMENT");
    assert_eq!(method_label(&Method::WebSearch), "WEB SEARCH");
    assert_eq!(method_label(&Method::Other("llm_only".to_owned())), "LLM ONLY");
}

#[test]
fn method_accent_mapping() {
    assert_eq!(method_accent(&Method::Document), Accent::Primary);
    assert_eq!(method_accent(&Method::WebSearch), Accent::Secondary);
    assert_eq!(method_accent(&Method::Other("fallback".to_owned())), Accent::Neutral);
}

#[test]
fn method_icon_falls_back_to_model_glyph() {
    assert_eq!(method_icon(&Method::Document), "\u{1F4C4}");
    assert_eq!(method_icon(&Method::WebSearch), "\u{1F50D}");
    assert_eq!(method_icon(&Method::Other("llm_only".to_owned())), "\u{1F9E0}");
    assert_ne!(method_icon(&Method::Document), method_icon(&Method::WebSearch));
}

// =============================================================
// Percentages
// =============================================================

#[test]
fn percent_rounds_to_whole_numbers() {
    assert_eq!(percent(0.82), 82);
    assert_eq!(percent(0.916), 92);
    assert_eq!(percent(0.004), 0);
    assert_eq!(percent(1.0), 100);
}

#[test]
fn bar_width_clamps_out_of_range_confidence() {
    assert_eq!(bar_width(0.5), 50.0);
    assert_eq!(bar_width(-0.2), 0.0);
    assert_eq!(bar_width(1.7), 100.0);
}

// =============================================================
// Sources
// =============================================================

#[test]
fn source_rows_absent_when_empty() {
    assert_eq!(source_rows(&[]), None);
}

#[test]
fn source_rows_preserve_input_order() {
    let sources = [
        source("web", 0.30, "third-best"),
        source("document", 0.95, "best"),
        source("document", 0.60, "middle"),
    ];
    let rows = source_rows(&sources).unwrap();
    let texts: Vec<_> = rows.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["third-best", "best", "middle"]);
    assert_eq!(rows[0].accent, Accent::Secondary);
    assert_eq!(rows[1].accent, Accent::Primary);
    assert_eq!(rows[0].score, "Score: 30%");
}

// =============================================================
// Full scenario
// =============================================================

#[test]
fn document_answer_summary() {
    let resp = QueryResponse {
        answer: "Refunds are available within 30 days of purchase.".to_owned(),
        method: Method::Document,
        confidence: 0.82,
        sources: vec![source("document", 0.91, "Customers may request a refund within 30 days.")],
    };
    let summary = ResultSummary::from(&resp);
    assert_eq!(summary.method_label, "DOCUMENT");
    assert_eq!(summary.method_accent, Accent::Primary);
    assert_eq!(summary.method_icon, method_icon(&Method::Document));
    assert_eq!(summary.confidence_percent, 82);
    assert_eq!(summary.confidence_tier, ConfidenceTier::Positive);
    let rows = summary.sources.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "document");
    assert_eq!(rows[0].score, "Score: 91%");
}

#[test]
fn accent_classes() {
    assert_eq!(Accent::Primary.class(), "chip chip--primary");
    assert_eq!(Accent::Secondary.class(), "chip chip--secondary");
    assert_eq!(Accent::Neutral.class(), "chip");
}
