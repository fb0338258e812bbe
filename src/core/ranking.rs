use crate::core::scoring::score;
use crate::domain::catalog::{Catalog, GoalPlaybook};
use crate::domain::model::{Goal, MatchResult, UserPreferences};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::Result;

/// Number of matches shown per refresh.
pub const TOP_MATCHES: usize = 3;

/// Every blueprint scored, sorted by descending score and rotated left by
/// `rotation_offset` (modulo the catalog size).
///
/// Equal scores keep catalog order; `sort_by` is stable.
pub fn ranked_cycle<'a>(
    catalog: &'a Catalog,
    preferences: &UserPreferences,
    rotation_offset: usize,
) -> Vec<MatchResult<'a>> {
    let mut scored: Vec<MatchResult<'a>> = catalog
        .blueprints()
        .iter()
        .map(|blueprint| score(blueprint, preferences, catalog.labels()))
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let offset = rotation_offset % scored.len().max(1);
    scored.rotate_left(offset);

    tracing::debug!(
        blueprints = scored.len(),
        rotation = offset,
        leader = scored.first().map(|m| m.blueprint.id.as_str()).unwrap_or("-"),
        "ranked catalog"
    );

    scored
}

/// The top [`TOP_MATCHES`] of [`ranked_cycle`]; fewer for small catalogs.
pub fn rank<'a>(
    catalog: &'a Catalog,
    preferences: &UserPreferences,
    rotation_offset: usize,
) -> Vec<MatchResult<'a>> {
    let mut cycle = ranked_cycle(catalog, preferences, rotation_offset);
    cycle.truncate(TOP_MATCHES);
    cycle
}

/// Read-only engine over a loaded catalog.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    catalog: Catalog,
}

impl MatchEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn from_provider<P: CatalogProvider + ?Sized>(provider: &P) -> Result<Self> {
        let catalog = provider.load_catalog()?;
        tracing::info!(
            source = %provider.source_name(),
            blueprints = catalog.len(),
            "Catalog loaded"
        );
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn playbook(&self, goal: Goal) -> &GoalPlaybook {
        self.catalog.playbook(goal)
    }

    pub fn rank(&self, preferences: &UserPreferences, rotation_offset: usize) -> Vec<MatchResult<'_>> {
        rank(&self.catalog, preferences, rotation_offset)
    }
}
