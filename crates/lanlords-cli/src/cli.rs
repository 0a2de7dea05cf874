//! Argument parsing and command dispatch for the `lanlords` CLI.

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lanlords_config::{ConfigStore, OptionResolver};
use tracing_subscriber::EnvFilter;

use crate::client::{API_URL_OPTION, ApiClient, AppContext, CliResult};
use crate::commands::{config, container, game, server};

/// Parses CLI arguments, executes the requested command, and reports
/// failures on stderr. Returns the process exit code.
pub async fn run() -> i32 {
    init_logging();
    let cli = Cli::parse();

    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => ConfigStore::default_path()?,
    };
    let store = ConfigStore::new(config_path);
    let resolver = OptionResolver::new(store.clone());
    let ctx = AppContext {
        client: ApiClient::new(resolver.clone())?,
        resolver,
        store,
    };

    match cli.command {
        Command::Test => handle_test(&ctx),
        Command::Config(command) => match command {
            ConfigCommand::Init(args) => config::handle_config_init(&ctx, args),
            ConfigCommand::Show => config::handle_config_show(&ctx),
        },
        Command::Server(command) => {
            match command {
                ServerCommand::Start => server::handle_server_start(),
                ServerCommand::Stop => server::handle_server_stop(),
                ServerCommand::List => server::handle_server_list(),
            }
            Ok(())
        }
        Command::Game(GameCommand::List(args)) => game::handle_game_list(&ctx, args).await,
        Command::Container(ContainerCommand::List(args)) => {
            container::handle_container_list(&ctx, args).await
        }
    }
}

/// Debug verb: print the resolved API URL.
fn handle_test(ctx: &AppContext) -> CliResult<()> {
    let url = ctx.resolver.resolve(API_URL_OPTION)?;
    println!("{url}");
    Ok(())
}

#[derive(Parser)]
#[command(
    name = "lanlords",
    about = "Command-line client for the Lanlords infrastructure API"
)]
struct Cli {
    /// Path to the configuration file (defaults to ~/.lanlords/config).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved API URL (debug helper).
    Test,
    /// Configure the CLI.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Manage game servers.
    #[command(subcommand)]
    Server(ServerCommand),
    /// Manage defined games.
    #[command(subcommand)]
    Game(GameCommand),
    /// Manage running containers.
    #[command(subcommand)]
    Container(ContainerCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Create a new CLI config, overwriting any existing one.
    Init(ConfigInitArgs),
    /// Show the current CLI config.
    Show,
}

/// Arguments for `config init`.
#[derive(Args, Default)]
pub(crate) struct ConfigInitArgs {
    /// API URL to persist (prompted for when absent).
    #[arg(long)]
    pub(crate) api_url: Option<String>,
    /// Skip the overwrite confirmation prompt.
    #[arg(long)]
    pub(crate) yes: bool,
}

#[derive(Subcommand)]
enum ServerCommand {
    /// Start a game server.
    Start,
    /// Stop a game server.
    Stop,
    /// List running game servers.
    List,
}

#[derive(Subcommand)]
enum GameCommand {
    /// List defined games.
    List(ListArgs),
}

#[derive(Subcommand)]
enum ContainerCommand {
    /// List running containers.
    List(ListArgs),
}

/// Arguments shared by the list verbs.
#[derive(Args, Clone, Copy, Default)]
pub(crate) struct ListArgs {
    /// Output in JSON format.
    #[arg(long = "output-json")]
    pub(crate) output_json: bool,
}

/// How command results are rendered.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) enum OutputFormat {
    /// Aligned plain-text table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub(crate) const fn from_output_json(output_json: bool) -> Self {
        if output_json { Self::Json } else { Self::Table }
    }
}
