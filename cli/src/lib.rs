mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rp_core::infra::settings_store::SettingsStore;
use rp_core::usecase::app_service::AppService;

pub use commands::{CommandError, SettingField};

/// Rewrite text in a chosen tone and copy it to the clipboard
#[derive(Debug, Parser)]
#[command(name = "rephraser", version, about)]
pub struct Cli {
    /// Settings file (defaults to the OS config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite text (reads stdin when no text is given)
    Rewrite(RewriteArgs),
    /// List supported styles
    Styles,
    /// Show or change persisted settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Debug, clap::Args)]
pub struct RewriteArgs {
    /// developer, friendly, business, gen-z (anything else gets a generic rewrite)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Do not copy the result to the clipboard
    #[arg(long)]
    pub no_copy: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    pub text: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Print current settings (API key masked)
    Show,
    /// Store the Gemini API key (empty string clears it)
    SetKey { key: String },
    /// Change a single setting
    Set {
        #[arg(value_enum)]
        field: SettingField,
        value: String,
    },
    /// Print the settings file path
    Path,
}

fn init_logging() {
    // stdout は結果専用。ログは stderr へ
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,rephraser_cli=info,rp_core=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn open_store(path: Option<PathBuf>) -> Result<SettingsStore, CommandError> {
    match path {
        Some(path) => Ok(SettingsStore::open(path)),
        None => Ok(SettingsStore::open_default()?),
    }
}

async fn dispatch(cli: Cli) -> Result<(), CommandError> {
    let service = AppService::new(open_store(cli.settings)?);

    match cli.command {
        Command::Rewrite(args) => commands::rewrite(&service, args).await,
        Command::Styles => {
            commands::styles();
            Ok(())
        }
        Command::Settings { action } => match action {
            SettingsAction::Show => commands::settings_show(&service),
            SettingsAction::SetKey { key } => commands::settings_set_key(&service, &key),
            SettingsAction::Set { field, value } => commands::settings_set(&service, field, &value),
            SettingsAction::Path => {
                println!("{}", service.settings_path().display());
                Ok(())
            }
        },
    }
}

/// エントリポイント。終了コードを返す
pub fn run() -> i32 {
    init_logging();
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start async runtime: {e}");
            return 1;
        }
    };

    match runtime.block_on(dispatch(cli)) {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("error: {e}");
            1
        }
    }
}
