use anyhow::Result;
use zero_capital_ideas::{
    rank, ranked_cycle, score, tokenize, BuiltinCatalog, Catalog, CatalogConfig, Constraint,
    Goal, TimeCommitment, UserPreferences,
};
use zero_capital_ideas::domain::ports::CatalogProvider;

const HEADER: &str = r#"
[labels.time_commitment]
micro = "1-4 hrs/week"
part-time = "5-15 hrs/week"
full-time = "16+ hrs/week"

[labels.growth_style]
community = "Community-led"
content = "Content engine"
services = "Service-first"
partnerships = "Partnership leverage"
productized = "Productized systems"

[playbooks.income]
label = "Fast cashflow"
description = "d"
example = "e"
headline = "h"
focus_points = ["f"]

[playbooks.audience]
label = "Audience leverage"
description = "d"
example = "e"
headline = "h"
focus_points = ["f"]

[playbooks.credibility]
label = "Proof-of-work"
description = "d"
example = "e"
headline = "h"
focus_points = ["f"]

[playbooks.automation]
label = "Systems leverage"
description = "d"
example = "e"
headline = "h"
focus_points = ["f"]
"#;

fn entry(id: &str, required: &str, supportive: &str, time: &str, growth: &str) -> String {
    format!(
        r#"
[[blueprints]]
id = "{id}"
title = "{id}"
headline = "h"
description = "d"
required_skills = [{required}]
supportive_skills = [{supportive}]
suitable_interests = ["startups"]
target_audiences = ["founders"]
time_commitment = "{time}"
growth_styles = ["{growth}"]
revenue_streams = ["one"]
no_cash_tactics = ["one"]
launch_steps = ["one"]
scale_angles = ["one"]
value_props = ["one"]
differentiation = "{id} edge"
"#
    )
}

fn writer_catalog() -> Result<Catalog> {
    let document = format!(
        "{}{}{}{}",
        HEADER,
        entry("a", r#""writing""#, r#""editing""#, "micro", "community"),
        entry("b", r#""sales""#, r#""writing""#, "full-time", "services"),
        entry("c", r#""finance""#, r#""legal""#, "part-time", "content"),
    );
    Ok(CatalogConfig::from_toml_str(&document)?.into_catalog()?)
}

#[test]
fn test_writer_scenario() -> Result<()> {
    let catalog = writer_catalog()?;
    let prefs = UserPreferences {
        skills: "writing".to_string(),
        time_commitment: Constraint::Only(TimeCommitment::Micro),
        goal: Goal::Income,
        ..UserPreferences::default()
    };

    let results = rank(&catalog, &prefs, 0);
    let summary: Vec<(&str, u32)> = results
        .iter()
        .map(|m| (m.blueprint.id.as_str(), m.score))
        .collect();
    assert_eq!(summary, vec![("a", 8), ("b", 2), ("c", 0)]);

    assert_eq!(results[0].highlights[0].label, "Direct fit strengths");
    assert_eq!(results[0].highlights[1].label, "Time fit");
    assert_eq!(results[0].highlights[1].items, vec!["1-4 hrs/week"]);
    assert_eq!(results[1].highlights[0].label, "Transferable skills");
    assert_eq!(results[2].highlights[0].label, "Leverage points");
    assert_eq!(results[2].highlights[0].items, vec!["c edge"]);
    Ok(())
}

#[test]
fn test_writer_scenario_with_no_required_skills() -> Result<()> {
    let document = format!(
        "{}{}{}",
        HEADER,
        entry("a", r#""writing""#, r#""editing""#, "micro", "community"),
        entry("b", "", r#""writing""#, "part-time", "services"),
    );
    let catalog = CatalogConfig::from_toml_str(&document)?.into_catalog()?;
    assert!(catalog.blueprints()[1].required_skills.is_empty());

    let prefs = UserPreferences {
        skills: "writing".to_string(),
        time_commitment: Constraint::Only(TimeCommitment::Micro),
        goal: Goal::Income,
        ..UserPreferences::default()
    };

    let summary: Vec<(String, u32)> = rank(&catalog, &prefs, 0)
        .iter()
        .map(|m| (m.blueprint.id.clone(), m.score))
        .collect();
    assert_eq!(summary, vec![("a".to_string(), 8), ("b".to_string(), 2)]);
    Ok(())
}

#[test]
fn test_ties_keep_catalog_order() -> Result<()> {
    let catalog = writer_catalog()?;
    let prefs = UserPreferences {
        goal: Goal::Audience,
        ..UserPreferences::default()
    };
    let ids: Vec<&str> = rank(&catalog, &prefs, 0)
        .iter()
        .map(|m| m.blueprint.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    Ok(())
}

#[test]
fn test_rank_is_pure_and_cyclic() -> Result<()> {
    let catalog = writer_catalog()?;
    let prefs = UserPreferences {
        skills: "Writing/sales".to_string(),
        ..UserPreferences::default()
    };
    let n = catalog.len();

    assert_eq!(rank(&catalog, &prefs, 1), rank(&catalog, &prefs, 1));
    assert_eq!(rank(&catalog, &prefs, 2), rank(&catalog, &prefs, 2 + n));
    assert_eq!(rank(&catalog, &prefs, 0), rank(&catalog, &prefs, 5 * n));
    Ok(())
}

#[test]
fn test_offset_zero_matches_plain_sort() -> Result<()> {
    let catalog = writer_catalog()?;
    let prefs = UserPreferences {
        skills: "legal editing".to_string(),
        ..UserPreferences::default()
    };

    let mut sorted: Vec<_> = catalog
        .blueprints()
        .iter()
        .map(|b| score(b, &prefs, catalog.labels()))
        .collect();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted.truncate(3);

    assert_eq!(rank(&catalog, &prefs, 0), sorted);
    Ok(())
}

#[test]
fn test_builtin_catalog_refresh_visits_every_blueprint() -> Result<()> {
    let catalog = BuiltinCatalog.load_catalog()?;
    let prefs = UserPreferences {
        skills: tokenize("research, writing").join(" "),
        interests: "startups".to_string(),
        ..UserPreferences::default()
    };

    let cycle = ranked_cycle(&catalog, &prefs, 0);
    assert_eq!(cycle.len(), catalog.len());
    assert!(cycle.windows(2).all(|pair| pair[0].score >= pair[1].score));

    let mut seen: Vec<String> = (0..catalog.len())
        .map(|offset| rank(&catalog, &prefs, offset)[0].blueprint.id.clone())
        .collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), catalog.len());
    Ok(())
}

#[test]
fn test_builtin_empty_preferences_score_zero() -> Result<()> {
    let catalog = BuiltinCatalog.load_catalog()?;
    for goal in [Goal::Audience, Goal::Credibility] {
        let prefs = UserPreferences {
            goal,
            ..UserPreferences::default()
        };
        for blueprint in catalog.blueprints() {
            let result = score(blueprint, &prefs, catalog.labels());
            assert_eq!(result.score, 0);
            assert_eq!(result.highlights.len(), 1);
            assert_eq!(result.highlights[0].label, "Leverage points");
            assert_eq!(result.highlights[0].items, vec![blueprint.differentiation.clone()]);
        }
    }
    Ok(())
}
