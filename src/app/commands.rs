use crate::app::session::ExplorerSession;
use crate::domain::model::{Constraint, Goal, GrowthStyle, TimeCommitment, UserPreferences};
use crate::utils::error::{IdeaError, Result};
use std::str::FromStr;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Skills(String),
    Interests(String),
    Audience(String),
    Time(Constraint<TimeCommitment>),
    Growth(Constraint<GrowthStyle>),
    Goal(Goal),
    Refresh,
    Reset,
    Show,
    Quit,
}

pub const HELP: &str = "commands: skills <text> | interests <text> | audience <text> | \
time <any|micro|part-time|full-time> | growth <any|style> | goal <goal> | refresh | reset | show | quit";

impl FromStr for SessionCommand {
    type Err = IdeaError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "skills" => Ok(SessionCommand::Skills(rest.to_string())),
            "interests" => Ok(SessionCommand::Interests(rest.to_string())),
            "audience" => Ok(SessionCommand::Audience(rest.to_string())),
            "time" => rest.parse().map(SessionCommand::Time),
            "growth" => rest.parse().map(SessionCommand::Growth),
            "goal" => rest.parse().map(SessionCommand::Goal),
            "refresh" => Ok(SessionCommand::Refresh),
            "reset" => Ok(SessionCommand::Reset),
            "show" | "" => Ok(SessionCommand::Show),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            _ => Err(IdeaError::invalid_value("command", verb, HELP)),
        }
    }
}

impl SessionCommand {
    /// Applies the command. Edits build a whole new preference value.
    /// Returns `false` once the session should end.
    pub fn apply(self, session: &mut ExplorerSession<'_>) -> bool {
        let current = session.preferences().clone();
        let next = match self {
            SessionCommand::Skills(skills) => UserPreferences { skills, ..current },
            SessionCommand::Interests(interests) => UserPreferences { interests, ..current },
            SessionCommand::Audience(audience) => UserPreferences { audience, ..current },
            SessionCommand::Time(time_commitment) => UserPreferences {
                time_commitment,
                ..current
            },
            SessionCommand::Growth(growth_style) => UserPreferences {
                growth_style,
                ..current
            },
            SessionCommand::Goal(goal) => UserPreferences { goal, ..current },
            SessionCommand::Refresh => {
                session.refresh();
                return true;
            }
            SessionCommand::Reset => {
                session.reset();
                return true;
            }
            SessionCommand::Show => return true,
            SessionCommand::Quit => return false,
        };
        session.replace_preferences(next);
        true
    }
}
