use crate::core::ranking::MatchEngine;
use crate::domain::catalog::GoalPlaybook;
use crate::domain::model::{MatchResult, UserPreferences};

/// Presentation-side state: the current preferences and the refresh counter.
///
/// The engine stays stateless; every call to [`ExplorerSession::matches`]
/// recomputes from scratch.
#[derive(Debug)]
pub struct ExplorerSession<'e> {
    engine: &'e MatchEngine,
    preferences: UserPreferences,
    rotation: usize,
}

impl<'e> ExplorerSession<'e> {
    pub fn new(engine: &'e MatchEngine) -> Self {
        Self::with_preferences(engine, UserPreferences::default())
    }

    pub fn with_preferences(engine: &'e MatchEngine, preferences: UserPreferences) -> Self {
        Self {
            engine,
            preferences,
            rotation: 0,
        }
    }

    pub fn engine(&self) -> &'e MatchEngine {
        self.engine
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Swaps in a complete new preference value. The refresh counter is kept.
    pub fn replace_preferences(&mut self, preferences: UserPreferences) {
        tracing::debug!(?preferences, "preferences replaced");
        self.preferences = preferences;
    }

    /// Advances the rotation by one.
    pub fn refresh(&mut self) -> usize {
        self.rotation = self.rotation.saturating_add(1);
        self.rotation
    }

    pub fn reset(&mut self) {
        self.preferences = UserPreferences::default();
        self.rotation = 0;
    }

    pub fn matches(&self) -> Vec<MatchResult<'e>> {
        self.engine.rank(&self.preferences, self.rotation)
    }

    pub fn playbook(&self) -> &'e GoalPlaybook {
        self.engine.playbook(self.preferences.goal)
    }
}
