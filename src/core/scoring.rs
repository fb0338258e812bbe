use crate::core::tokenizer::tokenize;
use crate::domain::catalog::Labels;
use crate::domain::model::{Blueprint, Goal, Highlight, MatchResult, UserPreferences};
use std::collections::HashSet;

pub const DIRECT_SKILL_POINTS: u32 = 4;
pub const TRANSFERABLE_SKILL_POINTS: u32 = 2;
pub const INTEREST_POINTS: u32 = 3;
pub const AUDIENCE_POINTS: u32 = 2;
pub const TIME_FIT_POINTS: u32 = 4;
pub const GROWTH_FIT_POINTS: u32 = 5;
pub const INCOME_GOAL_POINTS: u32 = 3;
pub const AUTOMATION_GOAL_POINTS: u32 = 3;
pub const CREDIBILITY_GOAL_POINTS: u32 = 2;

/// Minimum list length that earns the income and automation goal bonuses.
const GOAL_DEPTH: usize = 3;

pub const DIRECT_FIT_LABEL: &str = "Direct fit strengths";
pub const TRANSFERABLE_LABEL: &str = "Transferable skills";
pub const INTERESTS_LABEL: &str = "Energizing topics";
pub const AUDIENCE_LABEL: &str = "Warm audience access";
pub const TIME_FIT_LABEL: &str = "Time fit";
pub const GROWTH_FIT_LABEL: &str = "Growth preference";
pub const FALLBACK_LABEL: &str = "Leverage points";

fn token_set(raw: &str) -> HashSet<String> {
    tokenize(raw).into_iter().collect()
}

/// Catalog entries whose lower-cased form is in `tokens`, original spelling and order kept.
fn matching(candidates: &[String], tokens: &HashSet<String>) -> Vec<String> {
    candidates
        .iter()
        .filter(|candidate| tokens.contains(&candidate.to_lowercase()))
        .cloned()
        .collect()
}

#[derive(Default)]
struct Tally {
    score: u32,
    highlights: Vec<Highlight>,
}

impl Tally {
    fn add_matches(&mut self, label: &str, points_each: u32, matched: Vec<String>) {
        if matched.is_empty() {
            return;
        }
        self.score += points_each * matched.len() as u32;
        self.highlights.push(Highlight::new(label, matched));
    }

    fn add_fit(&mut self, label: &str, points: u32, display: &str) {
        self.score += points;
        self.highlights
            .push(Highlight::new(label, vec![display.to_string()]));
    }
}

/// Scores one blueprint against the preferences.
///
/// Highlight groups are emitted in rule order: direct skills, transferable
/// skills, interests, audiences, time fit, growth fit. Goal bonuses add to the
/// score without a highlight. When nothing matched, a single "Leverage points"
/// group carries the blueprint's differentiation.
pub fn score<'a>(
    blueprint: &'a Blueprint,
    preferences: &UserPreferences,
    labels: &Labels,
) -> MatchResult<'a> {
    let skill_tokens = token_set(&preferences.skills);
    let interest_tokens = token_set(&preferences.interests);
    let audience_tokens = token_set(&preferences.audience);

    let mut tally = Tally::default();

    tally.add_matches(
        DIRECT_FIT_LABEL,
        DIRECT_SKILL_POINTS,
        matching(&blueprint.required_skills, &skill_tokens),
    );
    tally.add_matches(
        TRANSFERABLE_LABEL,
        TRANSFERABLE_SKILL_POINTS,
        matching(&blueprint.supportive_skills, &skill_tokens),
    );
    tally.add_matches(
        INTERESTS_LABEL,
        INTEREST_POINTS,
        matching(&blueprint.suitable_interests, &interest_tokens),
    );
    tally.add_matches(
        AUDIENCE_LABEL,
        AUDIENCE_POINTS,
        matching(&blueprint.target_audiences, &audience_tokens),
    );

    if preferences.time_commitment.value() == Some(blueprint.time_commitment) {
        tally.add_fit(
            TIME_FIT_LABEL,
            TIME_FIT_POINTS,
            labels.time_commitment.get(blueprint.time_commitment),
        );
    }

    if let Some(style) = preferences.growth_style.value() {
        if blueprint.growth_styles.contains(&style) {
            tally.add_fit(
                GROWTH_FIT_LABEL,
                GROWTH_FIT_POINTS,
                labels.growth_style.get(style),
            );
        }
    }

    tally.score += goal_bonus(blueprint, preferences.goal);

    if tally.highlights.is_empty() {
        tally.highlights.push(Highlight::new(
            FALLBACK_LABEL,
            vec![blueprint.differentiation.clone()],
        ));
    }

    tracing::debug!(
        blueprint = %blueprint.id,
        score = tally.score,
        groups = tally.highlights.len(),
        "scored blueprint"
    );

    MatchResult {
        blueprint,
        score: tally.score,
        highlights: tally.highlights,
    }
}

fn goal_bonus(blueprint: &Blueprint, goal: Goal) -> u32 {
    match goal {
        Goal::Income if blueprint.revenue_streams.len() >= GOAL_DEPTH => INCOME_GOAL_POINTS,
        Goal::Automation if blueprint.no_cash_tactics.len() >= GOAL_DEPTH => {
            AUTOMATION_GOAL_POINTS
        }
        Goal::Credibility if !blueprint.validation_signals.is_empty() => CREDIBILITY_GOAL_POINTS,
        _ => 0,
    }
}
