use crate::domain::catalog::{Catalog, GoalPlaybook};
use crate::domain::model::MatchResult;
use crate::utils::error::Result;
use std::fmt::Write;

/// Launch steps shown per card.
const FIRST_MOVES: usize = 3;

pub fn render_json(matches: &[MatchResult<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(matches)?)
}

fn bullet_list(out: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(out, "  {}", title.to_uppercase());
    for item in items {
        let _ = writeln!(out, "    • {}", item);
    }
}

/// Plain-text card for one match.
pub fn render_card(catalog: &Catalog, result: &MatchResult<'_>) -> String {
    let blueprint = result.blueprint;
    let labels = catalog.labels();
    let mut out = String::new();

    let mut badges = Vec::new();
    if let Some(style) = blueprint.primary_growth_style() {
        badges.push(labels.growth_style.get(style).to_string());
    }
    badges.push(format!(
        "Time: {}",
        labels.time_commitment.get(blueprint.time_commitment)
    ));
    badges.push("Zero capital launch".to_string());

    let _ = writeln!(out, "[{}]", badges.join("] ["));
    let _ = writeln!(out, "{}  (score {})", blueprint.title, result.score);
    let _ = writeln!(out, "  {}", blueprint.headline);
    let _ = writeln!(out, "  {}", blueprint.description);
    out.push('\n');

    bullet_list(&mut out, "Why this wins", &blueprint.value_props);

    let leverage: Vec<&str> = result
        .highlights
        .iter()
        .flat_map(|group| group.items.iter().map(String::as_str))
        .collect();
    let _ = writeln!(out, "  LEVERAGE POINTS");
    let _ = writeln!(out, "    {}", leverage.join(" · "));

    let first_moves = &blueprint.launch_steps[..blueprint.launch_steps.len().min(FIRST_MOVES)];
    bullet_list(&mut out, "First revenue moves", first_moves);
    let _ = writeln!(out, "  NO-CASH TACTICS");
    let _ = writeln!(out, "    {}", blueprint.no_cash_tactics.join(" · "));
    bullet_list(&mut out, "Revenue experiments", &blueprint.revenue_streams);
    bullet_list(&mut out, "Scale pathways", &blueprint.scale_angles);

    out
}

pub fn render_playbook(playbook: &GoalPlaybook) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", playbook.label, playbook.description);
    let _ = writeln!(out, "{}", playbook.headline.to_uppercase());
    for point in &playbook.focus_points {
        let _ = writeln!(out, "  • {}", point);
    }
    out
}

pub fn render_prompts(catalog: &Catalog) -> String {
    let mut out = String::new();
    if !catalog.strategic_angles().is_empty() {
        let _ = writeln!(out, "PRIME YOUR LAUNCH IN THE NEXT 7 DAYS");
        for (index, angle) in catalog.strategic_angles().iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", index + 1, angle);
        }
    }
    if !catalog.diagnostic_questions().is_empty() {
        let _ = writeln!(out, "DIAGNOSTIC PROMPTS");
        for question in catalog.diagnostic_questions() {
            let _ = writeln!(out, "  • {}", question);
        }
    }
    out
}

pub fn render_text(catalog: &Catalog, playbook: &GoalPlaybook, matches: &[MatchResult<'_>]) -> String {
    let mut out = render_playbook(playbook);
    out.push('\n');
    if matches.is_empty() {
        out.push_str("No ideas in the catalog yet.\n");
        return out;
    }
    let _ = writeln!(out, "YOUR TOP {} NO-CAPITAL PLAYS", matches.len());
    for result in matches {
        out.push('\n');
        out.push_str(&render_card(catalog, result));
    }
    out
}
