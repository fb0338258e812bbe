pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::session::ExplorerSession;
pub use config::{BuiltinCatalog, CatalogConfig, TomlCatalogFile};
pub use crate::core::{rank, ranked_cycle, score, tokenize, MatchEngine, TOP_MATCHES};
pub use domain::catalog::Catalog;
pub use domain::model::{
    Blueprint, Constraint, Goal, GrowthStyle, Highlight, MatchResult, TimeCommitment,
    UserPreferences,
};
pub use utils::error::{IdeaError, Result};
