use crate::config::catalog_config::{BuiltinCatalog, TomlCatalogFile};
use crate::domain::model::{Constraint, Goal, GrowthStyle, TimeCommitment, UserPreferences};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use clap::Parser;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Parser)]
#[command(name = "zero-capital-ideas")]
#[command(about = "Match your skills and interests to zero-capital business plans")]
pub struct CliConfig {
    /// Path to a TOML catalog; the built-in catalog is used when omitted
    #[arg(long)]
    pub catalog: Option<String>,

    /// Strengths or skills you lean on
    #[arg(long, default_value = "")]
    pub skills: String,

    /// Topics that energize you
    #[arg(long, default_value = "")]
    pub interests: String,

    /// Communities or audiences you can reach easily
    #[arg(long, default_value = "")]
    pub audience: String,

    /// Weekly time: any, micro, part-time, full-time
    #[arg(long, default_value = "any")]
    pub time: Constraint<TimeCommitment>,

    /// Momentum style: any, community, content, services, partnerships, productized
    #[arg(long, default_value = "any")]
    pub growth: Constraint<GrowthStyle>,

    /// Priority: income, audience, credibility, automation
    #[arg(long, default_value = "income")]
    pub goal: Goal,

    /// How many times to refresh the short-list before showing it
    #[arg(long, default_value = "0")]
    pub rotation: usize,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Also print launch actions and diagnostic prompts
    #[arg(long)]
    pub show_prompts: bool,

    /// Read commands from stdin and re-rank after each one
    #[arg(long)]
    pub interactive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn preferences(&self) -> UserPreferences {
        UserPreferences {
            skills: self.skills.clone(),
            interests: self.interests.clone(),
            audience: self.audience.clone(),
            time_commitment: self.time,
            growth_style: self.growth,
            goal: self.goal,
        }
    }

    pub fn catalog_provider(&self) -> Box<dyn CatalogProvider> {
        match &self.catalog {
            Some(path) => Box::new(TomlCatalogFile::new(path)),
            None => Box::new(BuiltinCatalog),
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
        }
        validate_one_of("format", &self.format, &OUTPUT_FORMATS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let config = CliConfig::try_parse_from([
            "zero-capital-ideas",
            "--skills",
            "research, writing",
            "--time",
            "part-time",
            "--growth",
            "content",
            "--goal",
            "credibility",
            "--rotation",
            "2",
        ])
        .unwrap();

        let prefs = config.preferences();
        assert_eq!(prefs.skills, "research, writing");
        assert_eq!(prefs.time_commitment, Constraint::Only(TimeCommitment::PartTime));
        assert_eq!(prefs.growth_style, Constraint::Only(GrowthStyle::Content));
        assert_eq!(prefs.goal, Goal::Credibility);
        assert_eq!(config.rotation, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_are_unconstrained() {
        let config = CliConfig::try_parse_from(["zero-capital-ideas"]).unwrap();
        assert_eq!(config.preferences(), UserPreferences::default());
        assert_eq!(config.catalog_provider().source_name(), "builtin");
    }

    #[test]
    fn test_rejects_unknown_enum_values() {
        assert!(CliConfig::try_parse_from(["zero-capital-ideas", "--time", "weekends"]).is_err());
        assert!(CliConfig::try_parse_from(["zero-capital-ideas", "--goal", "any"]).is_err());
    }

    #[test]
    fn test_validate_format() {
        let config =
            CliConfig::try_parse_from(["zero-capital-ideas", "--format", "yaml"]).unwrap();
        assert!(config.validate().is_err());
    }
}
