use clap::Parser;
use std::io::{self, BufRead, Write};
use zero_capital_ideas::app::commands::{SessionCommand, HELP};
use zero_capital_ideas::app::render;
use zero_capital_ideas::utils::error::{ErrorSeverity, IdeaError};
use zero_capital_ideas::utils::{logger, validation::Validate};
use zero_capital_ideas::{CliConfig, ExplorerSession, MatchEngine};

fn main() {
    let config = CliConfig::parse();

    if config.is_json() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting zero-capital-ideas");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<(), IdeaError> {
    config.validate()?;

    let provider = config.catalog_provider();
    let engine = MatchEngine::from_provider(provider.as_ref())?;

    let mut session = ExplorerSession::with_preferences(&engine, config.preferences());
    for _ in 0..config.rotation {
        session.refresh();
    }

    if config.show_prompts && !config.is_json() {
        println!("{}", render::render_prompts(engine.catalog()));
    }

    if config.interactive {
        return interactive(config, &mut session);
    }

    print_matches(config, &session)
}

fn print_matches(config: &CliConfig, session: &ExplorerSession<'_>) -> Result<(), IdeaError> {
    let matches = session.matches();
    if config.is_json() {
        println!("{}", render::render_json(&matches)?);
    } else {
        let catalog = session.engine().catalog();
        println!("{}", render::render_text(catalog, session.playbook(), &matches));
    }
    Ok(())
}

fn interactive(config: &CliConfig, session: &mut ExplorerSession<'_>) -> Result<(), IdeaError> {
    eprintln!("{}", HELP);
    print_matches(config, session)?;

    let stdin = io::stdin();
    loop {
        eprint!("> ");
        io::stderr().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("❌ {}", e);
                continue;
            }
        };
        if !command.apply(session) {
            break;
        }
        print_matches(config, session)?;
    }

    Ok(())
}
