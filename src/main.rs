use chrono::{Local, NaiveDate};
use clap::Parser;
use little_memories::application::{views, ConfigService, Session};
use little_memories::cli::{
    format_dashboard, format_favorites, format_profiles, format_suggestions, format_timeline, Cli,
    Commands,
};
use little_memories::domain::parse_date;
use little_memories::error::{MemoriesError, Result};
use little_memories::infrastructure::{init_logging, Config, LoadedScenario, Scenario};
use log::LevelFilter;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_dir = Config::locate()?;
    let config = Config::load_from_dir(&config_dir)?;

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config.level_filter()
    };
    init_logging(level);

    let date_format = config.date_format.as_str();

    match cli.command {
        Commands::Timeline { scenario } => {
            let (session, _) = load_session(&scenario)?;
            let active = session.profiles.active_profile();
            let entries = views::timeline(
                session.entries.entries(),
                session.profiles.active_profile_id(),
            );
            let output = format_timeline(active.map(|p| p.name.as_str()), &entries, date_format);
            println!("{}", output.trim_end());
            Ok(())
        }
        Commands::Dashboard { scenario } => {
            let (session, _) = load_session(&scenario)?;
            let dashboard = views::dashboard(session.entries.entries());
            println!("{}", format_dashboard(&dashboard, date_format).trim_end());
            Ok(())
        }
        Commands::Profiles { scenario, today } => {
            let (session, loaded) = load_session(&scenario)?;
            let today = match today {
                Some(input) => parse_date(&input, loaded.today)?,
                None => loaded.today,
            };
            let cards = views::profile_overview(&session.profiles, today);
            println!("{}", format_profiles(&cards, date_format).trim_end());
            Ok(())
        }
        Commands::Favorites { scenario, profile } => {
            let (session, loaded) = load_session(&scenario)?;
            let profile_id = match profile {
                Some(key) => loaded.profile_id(&key)?,
                None => session.profiles.active_profile_id().ok_or_else(|| {
                    MemoriesError::Validation("No active profile to show favorites for".to_string())
                })?,
            };
            let favorites = views::favorites(session.entries.entries(), profile_id);
            println!("{}", format_favorites(&favorites, date_format).trim_end());
            Ok(())
        }
        Commands::Suggestions => {
            println!("{}", format_suggestions().trim_end());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(config_dir);

            if list {
                let config = service.list()?;
                println!("date_format = {}", config.date_format);
                println!("log_level = {}", config.log_level);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: little-memories config [--list | <key> [<value>]]");
                println!("Valid keys: date_format, log_level");
                Ok(())
            }
        }
    }
}

fn load_session(path: &Path) -> Result<(Session, LoadedScenario)> {
    let scenario = Scenario::load(path)?;
    let mut session = Session::new();
    let loaded = scenario.apply(&mut session, system_today())?;
    Ok((session, loaded))
}

fn system_today() -> NaiveDate {
    Local::now().date_naive()
}
