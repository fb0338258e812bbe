pub mod ranking;
pub mod scoring;
pub mod tokenizer;

pub use crate::domain::model::{MatchResult, UserPreferences};
pub use crate::domain::ports::CatalogProvider;
pub use crate::utils::error::Result;
pub use ranking::{rank, ranked_cycle, MatchEngine, TOP_MATCHES};
pub use scoring::score;
pub use tokenizer::tokenize;
