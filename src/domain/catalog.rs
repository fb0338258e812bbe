use crate::domain::model::{Blueprint, Goal, GrowthStyle, TimeCommitment};
use crate::utils::error::{IdeaError, Result};
use crate::utils::validation::{
    validate_blueprint_entries, validate_blueprint_list, validate_non_empty_string,
    validate_unique_ids,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCommitmentLabels {
    pub micro: String,
    #[serde(rename = "part-time")]
    pub part_time: String,
    #[serde(rename = "full-time")]
    pub full_time: String,
}

impl TimeCommitmentLabels {
    pub fn get(&self, time: TimeCommitment) -> &str {
        match time {
            TimeCommitment::Micro => &self.micro,
            TimeCommitment::PartTime => &self.part_time,
            TimeCommitment::FullTime => &self.full_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthStyleLabels {
    pub community: String,
    pub content: String,
    pub services: String,
    pub partnerships: String,
    pub productized: String,
}

impl GrowthStyleLabels {
    pub fn get(&self, style: GrowthStyle) -> &str {
        match style {
            GrowthStyle::Community => &self.community,
            GrowthStyle::Content => &self.content,
            GrowthStyle::Services => &self.services,
            GrowthStyle::Partnerships => &self.partnerships,
            GrowthStyle::Productized => &self.productized,
        }
    }
}

/// Copy shown when the user picks a goal: the preset tile plus its playbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalPlaybook {
    pub label: String,
    pub description: String,
    pub example: String,
    pub headline: String,
    pub focus_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalPlaybooks {
    pub income: GoalPlaybook,
    pub audience: GoalPlaybook,
    pub credibility: GoalPlaybook,
    pub automation: GoalPlaybook,
}

impl GoalPlaybooks {
    pub fn get(&self, goal: Goal) -> &GoalPlaybook {
        match goal {
            Goal::Income => &self.income,
            Goal::Audience => &self.audience,
            Goal::Credibility => &self.credibility,
            Goal::Automation => &self.automation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub time_commitment: TimeCommitmentLabels,
    pub growth_style: GrowthStyleLabels,
}

/// Immutable, validated set of blueprints and lookup tables.
///
/// Only obtainable through [`Catalog::new`], so every instance has passed
/// load-time validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    blueprints: Vec<Blueprint>,
    labels: Labels,
    playbooks: GoalPlaybooks,
    strategic_angles: Vec<String>,
    diagnostic_questions: Vec<String>,
}

impl Catalog {
    pub fn new(
        blueprints: Vec<Blueprint>,
        labels: Labels,
        playbooks: GoalPlaybooks,
        strategic_angles: Vec<String>,
        diagnostic_questions: Vec<String>,
    ) -> Result<Self> {
        validate_unique_ids(blueprints.iter().map(|b| b.id.as_str()))?;
        for blueprint in &blueprints {
            validate_blueprint(blueprint)?;
        }
        validate_labels(&labels)?;
        validate_playbooks(&playbooks)?;

        if blueprints.is_empty() {
            tracing::warn!("Catalog contains no blueprints; rankings will be empty");
        }

        Ok(Self {
            blueprints,
            labels,
            playbooks,
            strategic_angles,
            diagnostic_questions,
        })
    }

    pub fn blueprints(&self) -> &[Blueprint] {
        &self.blueprints
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn playbook(&self, goal: Goal) -> &GoalPlaybook {
        self.playbooks.get(goal)
    }

    pub fn strategic_angles(&self) -> &[String] {
        &self.strategic_angles
    }

    pub fn diagnostic_questions(&self) -> &[String] {
        &self.diagnostic_questions
    }
}

fn validate_blueprint(blueprint: &Blueprint) -> Result<()> {
    let id = blueprint.id.as_str();
    if id.trim().is_empty() {
        return Err(IdeaError::invalid_blueprint(
            &blueprint.title,
            "id",
            "must not be empty",
        ));
    }
    for (field, value) in [
        ("title", &blueprint.title),
        ("differentiation", &blueprint.differentiation),
    ] {
        if value.trim().is_empty() {
            return Err(IdeaError::invalid_blueprint(id, field, "must not be empty"));
        }
    }

    if blueprint.growth_styles.is_empty() {
        return Err(IdeaError::invalid_blueprint(
            id,
            "growth_styles",
            "must not be empty",
        ));
    }

    validate_blueprint_entries(id, "required_skills", &blueprint.required_skills)?;
    validate_blueprint_entries(id, "supportive_skills", &blueprint.supportive_skills)?;
    validate_blueprint_entries(id, "suitable_interests", &blueprint.suitable_interests)?;
    validate_blueprint_entries(id, "target_audiences", &blueprint.target_audiences)?;
    validate_blueprint_list(id, "revenue_streams", &blueprint.revenue_streams)?;
    validate_blueprint_list(id, "no_cash_tactics", &blueprint.no_cash_tactics)?;
    validate_blueprint_list(id, "launch_steps", &blueprint.launch_steps)?;
    validate_blueprint_list(id, "scale_angles", &blueprint.scale_angles)?;
    validate_blueprint_list(id, "value_props", &blueprint.value_props)?;

    Ok(())
}

fn validate_labels(labels: &Labels) -> Result<()> {
    for time in TimeCommitment::ALL {
        validate_non_empty_string(
            &format!("labels.time_commitment.{}", time),
            labels.time_commitment.get(time),
        )?;
    }
    for style in GrowthStyle::ALL {
        validate_non_empty_string(
            &format!("labels.growth_style.{}", style),
            labels.growth_style.get(style),
        )?;
    }
    Ok(())
}

fn validate_playbooks(playbooks: &GoalPlaybooks) -> Result<()> {
    for goal in Goal::ALL {
        let playbook = playbooks.get(goal);
        validate_non_empty_string(&format!("playbooks.{}.label", goal), &playbook.label)?;
        validate_non_empty_string(&format!("playbooks.{}.headline", goal), &playbook.headline)?;
        if playbook.focus_points.is_empty() {
            return Err(IdeaError::ConfigValidationError {
                field: format!("playbooks.{}.focus_points", goal),
                message: "at least one focus point is required".to_string(),
            });
        }
    }
    Ok(())
}
