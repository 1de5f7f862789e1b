// layman-catalog - the commands and quotes pages, in your terminal
//
// This is the main entry point. Parses CLI args, turns flags into view-state
// actions and prints whatever survives the filters.

use layman_catalog_lib::{
    catalog::{CommandRecord, Permission},
    core::{filter_commands, filter_quotes, CommandAction, QuoteAction, QuoteViewState},
    config::ConfigSource,
    CatalogError, CatalogStore, Config, Result,
};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (data_override, args) = take_data_flag(args)?;

    if args.is_empty() {
        print_usage();
        return Ok(());
    }

    let (config, source) = Config::load_or_default(Config::default_path().ok()).await?;
    init_logging(&config);
    log_config_source(&source);

    let command = &args[0];
    let rest = &args[1..];

    match command.as_str() {
        "commands" => handle_commands(&config, data_override, rest).await,
        "quotes" => handle_quotes(&config, data_override, rest).await,
        "tags" => handle_tags(&config, data_override).await,
        "games" => handle_games(&config, data_override).await,
        "show" => handle_show(&config, data_override, rest).await,
        "version" | "-v" | "--version" => {
            println!("layman-catalog v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

fn init_logging(config: &Config) {
    // RUST_LOG wins over the config file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn log_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::File(path) => debug!(path = %path.display(), "Config loaded"),
        ConfigSource::Missing(path) => {
            debug!(path = %path.display(), "No config file, using defaults")
        }
        ConfigSource::NoHome => warn!("Could not determine home directory, using default config"),
    }
}

// Pull `--data <path>` out wherever it appears
fn take_data_flag(args: Vec<String>) -> Result<(Option<PathBuf>, Vec<String>)> {
    let mut data = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if arg == "--data" {
            let path = iter
                .next()
                .ok_or_else(|| CatalogError::Usage("--data needs a path".to_string()))?;
            data = Some(PathBuf::from(path));
        } else {
            rest.push(arg);
        }
    }

    Ok((data, rest))
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| CatalogError::Usage(format!("{} needs a value", flag)))
}

async fn open_catalog(config: &Config, data_override: Option<PathBuf>) -> Result<CatalogStore> {
    let path = config.catalog_path(data_override.as_deref())?;
    CatalogStore::load(path).await
}

async fn handle_commands(
    config: &Config,
    data_override: Option<PathBuf>,
    args: &[String],
) -> Result<()> {
    let mut actions = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--permission" | "-p" => {
                let permission: Permission = flag_value(args, i, "--permission")?.parse()?;
                actions.push(CommandAction::TogglePermission(permission));
                i += 1;
            }
            "--tag" | "-t" => {
                let tag = flag_value(args, i, "--tag")?;
                actions.push(CommandAction::ToggleTag(tag.to_string()));
                i += 1;
            }
            "--search" | "-s" => {
                let query = flag_value(args, i, "--search")?;
                actions.push(CommandAction::SetSearchQuery(query.to_string()));
                i += 1;
            }
            "--focus" | "-f" => {
                let id = flag_value(args, i, "--focus")?;
                actions.push(CommandAction::SetFocused(id.to_string()));
                i += 1;
            }
            "--desc" => actions.push(CommandAction::ToggleAlphabeticalOrder),
            "--role" => actions.push(CommandAction::CycleRoleSort),
            other => {
                return Err(CatalogError::Usage(format!(
                    "Unknown option for commands: {}",
                    other
                )))
            }
        }
        i += 1;
    }

    let store = open_catalog(config, data_override).await?;
    let records = store.commands();

    let state = actions
        .into_iter()
        .fold(config.initial_command_state(), |state, action| {
            state.apply(action, records)
        });
    debug!(?state, "Commands view state");

    let results = filter_commands(records, &state);
    info!(visible = results.len(), "Rendering commands");

    if results.is_empty() {
        println!("{}", results.empty_message());
        return Ok(());
    }

    println!("\n{} (role sort: {})", results.count_label(), state.role_sort);
    println!("{}", "=".repeat(60));
    for (n, cmd) in results.numbered() {
        let focused = state.focused_id.as_deref() == Some(cmd.id.as_str());
        print_command(n, cmd, focused);
    }
    println!("{}", "=".repeat(60));

    Ok(())
}

fn print_command(n: usize, cmd: &CommandRecord, expanded: bool) {
    let marker = if cmd.is_focus_eligible() { "+" } else { " " };
    println!("{:3}. {} {} [{}]", n, marker, cmd.name, cmd.permission.label());
    println!("       {}", cmd.description);

    if !cmd.aliases().is_empty() {
        println!("       aliases: {}", cmd.aliases().join(", "));
    }
    if !cmd.command_groups().is_empty() {
        println!("       tags: {}", cmd.command_groups().join(", "));
    }

    if expanded {
        for group in cmd.parameter_groups() {
            println!("       - {}", group.name);
            for param in &group.parameters {
                let required = if param.required { " (required)" } else { "" };
                println!("           {}{}: {}", param.name, required, param.description);
            }
        }
    }
}

async fn handle_quotes(
    config: &Config,
    data_override: Option<PathBuf>,
    args: &[String],
) -> Result<()> {
    let mut state = QuoteViewState::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--game" | "-g" => {
                let game = flag_value(args, i, "--game")?;
                state = state.apply(QuoteAction::ToggleGame(game.to_string()));
                i += 1;
            }
            "--search" | "-s" => {
                let query = flag_value(args, i, "--search")?;
                state = state.apply(QuoteAction::SetSearchQuery(query.to_string()));
                i += 1;
            }
            other => {
                return Err(CatalogError::Usage(format!(
                    "Unknown option for quotes: {}",
                    other
                )))
            }
        }
        i += 1;
    }

    let store = open_catalog(config, data_override).await?;
    let results = filter_quotes(store.quotes(), &state);

    if results.is_empty() {
        println!("{}", results.empty_message());
        return Ok(());
    }

    println!("\n{}", results.count_label());
    println!("{}", "=".repeat(60));
    for quote in results.iter() {
        println!("#{:<4} \"{}\"", quote.number, quote.quote);
        println!("       {} @ {}", quote.game, quote.timestamp);
    }
    println!("{}", "=".repeat(60));

    Ok(())
}

async fn handle_tags(config: &Config, data_override: Option<PathBuf>) -> Result<()> {
    let store = open_catalog(config, data_override).await?;
    let tags = store.available_tags();

    if tags.is_empty() {
        println!("No tags in the catalog.");
    } else {
        for tag in tags {
            println!("{}", tag);
        }
    }

    Ok(())
}

async fn handle_games(config: &Config, data_override: Option<PathBuf>) -> Result<()> {
    let store = open_catalog(config, data_override).await?;
    let games = store.available_games();

    if games.is_empty() {
        println!("No games in the catalog.");
    } else {
        for game in games {
            println!("{}", game);
        }
    }

    Ok(())
}

async fn handle_show(
    config: &Config,
    data_override: Option<PathBuf>,
    args: &[String],
) -> Result<()> {
    let id = args
        .first()
        .ok_or_else(|| CatalogError::Usage("show needs a command id".to_string()))?;

    let store = open_catalog(config, data_override).await?;
    let cmd = store
        .find_command(id)
        .ok_or_else(|| CatalogError::CommandNotFound(id.clone()))?;

    print_command(1, cmd, true);

    Ok(())
}

fn print_usage() {
    println!(
        r#"layman-catalog v{} - Browse commands and quotes

USAGE:
    layman-catalog [--data <path>] <COMMAND> [OPTIONS]

COMMANDS:
    commands               List commands
        -p, --permission <p>   Toggle a permission filter (user, moderator, admin, owner)
        -t, --tag <tag>        Toggle a tag filter
        -s, --search <query>   Search names, aliases, descriptions and tags
        -f, --focus <id>       Expand a command's parameters
            --desc             Sort names Z to A
            --role             Cycle role sort (off, asc, desc)
    quotes                 List quotes
        -g, --game <game>      Toggle a game filter
        -s, --search <query>   Search text, game, timestamp and number
    tags                   List every command tag
    games                  List every quoted game
    show <id>              Show one command in full
    version                Show version
    help                   Show this help

EXAMPLES:
    layman-catalog commands -p admin --role
    layman-catalog commands -t Moderation -s ban
    layman-catalog quotes -g "Portal 2"

CONFIG:
    ~/.layman-catalog/config.toml (optional)
"#,
        env!("CARGO_PKG_VERSION")
    );
}
