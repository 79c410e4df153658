//! Markdown brief export
//!
//! Renders the metric rows and their insight cards as a leadership-safe
//! markdown brief: headline counts up front, then one section per row.

use crate::insights::{InsightCard, StateKey};
use crate::metrics::MetricRow;
use chrono::Local;

/// Render a markdown brief. `rows` and `cards` are aligned by index.
pub fn render_brief(rows: &[MetricRow], cards: &[InsightCard], title: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {title}\n\n"));
    out.push_str(&format!(
        "Generated {} \u{2022} {} result{}\n\n",
        Local::now().format("%d %b %Y"),
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    ));

    out.push_str(&headline(rows, cards));

    for (row, card) in rows.iter().zip(cards.iter()) {
        out.push_str(&section(row, card));
    }

    out
}

fn headline(rows: &[MetricRow], cards: &[InsightCard]) -> String {
    let count_state = |keys: &[StateKey]| {
        cards
            .iter()
            .filter(|c| keys.contains(&c.state_key))
            .count()
    };
    let clear = count_state(&[StateKey::ClearUp, StateKey::ClearDown]);
    let possible = count_state(&[StateKey::PossibleUp, StateKey::PossibleDown]);
    let no_clear = count_state(&[StateKey::NoClear]);
    let significant = rows.iter().filter(|r| r.significant_95).count();

    let mut out = String::from("## Headline\n\n");
    out.push_str(&format!("- Clear results: {clear}\n"));
    out.push_str(&format!("- Possible movements: {possible}\n"));
    out.push_str(&format!("- No clear change: {no_clear}\n"));
    out.push_str(&format!(
        "- Statistically significant: {significant} of {}\n\n",
        rows.len()
    ));
    out
}

fn section(row: &MetricRow, card: &InsightCard) -> String {
    let mut out = format!(
        "## {} \u{2014} {} ({}, {}, {})\n\n",
        row.kpi, row.brand, row.market, row.category, row.period
    );

    out.push_str(&format!("**{}** \u{2022} {}\n\n", card.state_label, card.note));

    out.push_str(&format!(
        "- Control {} vs exposed {}\n",
        fmt_pct(row.control_pct),
        fmt_pct(row.exposed_pct)
    ));
    out.push_str(&format!(
        "- Difference {} pts, lift {}\n",
        fmt_num(row.diff_pct_pts),
        fmt_pct(row.lift_pct)
    ));
    out.push_str(&format!(
        "- CI [{}, {}] pts \u{2022} p-value {} \u{2022} reliability {}\n",
        fmt_num(row.ci_low_pct_pts),
        fmt_num(row.ci_high_pct_pts),
        fmt_p(row.p_value),
        row.reliability.label()
    ));
    if row.data_flag.is_flagged() {
        out.push_str(&format!("- Caveat: {}\n", row.data_flag.label()));
    }

    out.push_str(&format!("\n{}\n\n{}\n\n", card.meaning, card.decision));
    out
}

fn fmt_pct(v: Option<f64>) -> String {
    v.map_or("N/A".to_string(), |v| format!("{v:.2}%"))
}

fn fmt_num(v: Option<f64>) -> String {
    v.map_or("N/A".to_string(), |v| format!("{v:.2}"))
}

fn fmt_p(v: Option<f64>) -> String {
    v.map_or("N/A".to_string(), |v| format!("{v:.4}"))
}
