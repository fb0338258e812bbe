use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use zero_capital_ideas::app::commands::SessionCommand;
use zero_capital_ideas::app::render;
use zero_capital_ideas::{
    BuiltinCatalog, ExplorerSession, Goal, IdeaError, MatchEngine, TomlCatalogFile,
};

#[test]
fn test_engine_from_builtin_catalog() -> Result<()> {
    let engine = MatchEngine::from_provider(&BuiltinCatalog)?;
    let mut session = ExplorerSession::new(&engine);

    for line in ["skills research, analysis", "interests startups", "goal credibility"] {
        assert!(line.parse::<SessionCommand>()?.apply(&mut session));
    }

    let first = session.matches();
    assert_eq!(first.len(), 3);
    assert_eq!(first[0].blueprint.id, "niche-research-desk");
    assert_eq!(session.playbook().label, "Proof-of-work");

    assert!("refresh".parse::<SessionCommand>()?.apply(&mut session));
    let second = session.matches();
    assert_eq!(second[0].blueprint.id, first[1].blueprint.id);
    assert_eq!(second[1].blueprint.id, first[2].blueprint.id);

    let text = render::render_text(engine.catalog(), session.playbook(), &second);
    assert!(text.contains("YOUR TOP 3 NO-CAPITAL PLAYS"));
    Ok(())
}

#[test]
fn test_session_goal_switch_changes_bonus() -> Result<()> {
    let engine = MatchEngine::from_provider(&BuiltinCatalog)?;
    let mut session = ExplorerSession::new(&engine);

    let income_total: u32 = session.matches().iter().map(|m| m.score).sum();
    assert!(income_total > 0);

    SessionCommand::Goal(Goal::Audience).apply(&mut session);
    let audience_total: u32 = session.matches().iter().map(|m| m.score).sum();
    assert_eq!(audience_total, 0);
    Ok(())
}

#[test]
fn test_malformed_catalog_file_fails_fast() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"[labels.time_commitment]\nmicro = \"1-4 hrs/week\"\n")?;

    let err = MatchEngine::from_provider(&TomlCatalogFile::new(file.path())).unwrap_err();
    assert!(matches!(err, IdeaError::CatalogParseError(_)));
    Ok(())
}
