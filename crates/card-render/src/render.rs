//! HTML fragment builders

use alert_model::AlertCard;
use std::fmt::Write;

/// User-visible failure text, identical for every failure class
const LOAD_ERROR_TEXT: &str = "Unable to load alerts";

/// Render a batch of cards as one fragment, preserving input order.
///
/// Every interpolated value is escaped; a record cannot break out of its
/// card markup.
pub fn render_cards(cards: &[AlertCard]) -> String {
    let mut out = String::new();
    for card in cards {
        write_card(&mut out, card);
    }
    out
}

/// Render the single error element shown when a poll cycle fails.
pub fn render_error() -> String {
    format!("<p class=\"alert-error\">{}</p>\n", LOAD_ERROR_TEXT)
}

// Writes to a String are infallible, hence the discarded results.
fn write_card(out: &mut String, card: &AlertCard) {
    out.push_str("<div class=\"alert-card\">\n");
    if let Some(snapshot) = &card.snapshot {
        let _ = writeln!(
            out,
            "  <img class=\"alert-snapshot\" src=\"{}\" alt=\"snapshot\">",
            escape(snapshot)
        );
    }
    let _ = writeln!(
        out,
        "  <p class=\"alert-location\">{}</p>",
        escape(&card.location)
    );
    let _ = writeln!(
        out,
        "  <p class=\"alert-confidence\">Confidence: {}</p>",
        escape(&card.confidence_label)
    );
    if let Some(captured_at) = &card.captured_at {
        let _ = writeln!(out, "  <p class=\"alert-time\">{}</p>", escape(captured_at));
    }
    let _ = writeln!(
        out,
        "  <a class=\"alert-review\" href=\"{}\">Review</a>",
        escape(&card.review_href)
    );
    out.push_str("</div>\n");
}

/// Escape text for HTML body and attribute positions.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
