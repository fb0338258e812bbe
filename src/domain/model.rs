use crate::utils::error::{IdeaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weekly time a plan needs to get traction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeCommitment {
    Micro,
    PartTime,
    FullTime,
}

impl TimeCommitment {
    pub const ALL: [TimeCommitment; 3] = [
        TimeCommitment::Micro,
        TimeCommitment::PartTime,
        TimeCommitment::FullTime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeCommitment::Micro => "micro",
            TimeCommitment::PartTime => "part-time",
            TimeCommitment::FullTime => "full-time",
        }
    }
}

/// How a plan compounds once launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthStyle {
    Community,
    Content,
    Services,
    Partnerships,
    Productized,
}

impl GrowthStyle {
    pub const ALL: [GrowthStyle; 5] = [
        GrowthStyle::Community,
        GrowthStyle::Content,
        GrowthStyle::Services,
        GrowthStyle::Partnerships,
        GrowthStyle::Productized,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GrowthStyle::Community => "community",
            GrowthStyle::Content => "content",
            GrowthStyle::Services => "services",
            GrowthStyle::Partnerships => "partnerships",
            GrowthStyle::Productized => "productized",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Income,
    Audience,
    Credibility,
    Automation,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::Income, Goal::Audience, Goal::Credibility, Goal::Automation];

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Income => "income",
            Goal::Audience => "audience",
            Goal::Credibility => "credibility",
            Goal::Automation => "automation",
        }
    }
}

macro_rules! impl_wire_name {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = IdeaError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim().to_lowercase();
                <$ty>::ALL
                    .into_iter()
                    .find(|candidate| candidate.as_str() == wanted)
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = <$ty>::ALL.iter().map(|v| v.as_str()).collect();
                        IdeaError::invalid_value(
                            $field,
                            s,
                            format!("expected one of: {}", allowed.join(", ")),
                        )
                    })
            }
        }
    };
}

impl_wire_name!(TimeCommitment, "time_commitment");
impl_wire_name!(GrowthStyle, "growth_style");
impl_wire_name!(Goal, "goal");

/// A categorical preference that may be left open with "any".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint<T> {
    Any,
    Only(T),
}

impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Constraint::Any
    }
}

impl<T: Copy> Constraint<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            Constraint::Any => None,
            Constraint::Only(value) => Some(*value),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Constraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Any => f.write_str("any"),
            Constraint::Only(value) => value.fmt(f),
        }
    }
}

impl<T> FromStr for Constraint<T>
where
    T: FromStr<Err = IdeaError>,
{
    type Err = IdeaError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(Constraint::Any);
        }
        s.parse().map(Constraint::Only)
    }
}

/// One pre-authored zero-capital business plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub id: String,
    pub title: String,
    pub headline: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub supportive_skills: Vec<String>,
    pub suitable_interests: Vec<String>,
    pub target_audiences: Vec<String>,
    pub time_commitment: TimeCommitment,
    pub growth_styles: Vec<GrowthStyle>,
    pub revenue_streams: Vec<String>,
    pub no_cash_tactics: Vec<String>,
    pub launch_steps: Vec<String>,
    pub scale_angles: Vec<String>,
    pub value_props: Vec<String>,
    #[serde(default)]
    pub validation_signals: Vec<String>,
    pub differentiation: String,
}

impl Blueprint {
    /// The style shown on the card badge.
    pub fn primary_growth_style(&self) -> Option<GrowthStyle> {
        self.growth_styles.first().copied()
    }
}

/// The user's current inputs. Replaced wholesale on every edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPreferences {
    pub skills: String,
    pub interests: String,
    pub audience: String,
    pub time_commitment: Constraint<TimeCommitment>,
    pub growth_style: Constraint<GrowthStyle>,
    pub goal: Goal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub label: String,
    pub items: Vec<String>,
}

impl Highlight {
    pub fn new(label: &str, items: Vec<String>) -> Self {
        Self {
            label: label.to_string(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub blueprint: &'a Blueprint,
    pub score: u32,
    pub highlights: Vec<Highlight>,
}
