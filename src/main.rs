#![forbid(unsafe_code)]
//! hasura-pick Command Line Interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hpick::commands::{execute_init, execute_pick, InitOptions, PickOptions};
use hpick::config::DEFAULT_CONFIG_PATH;
use hpick::{Config, OperationKind, OptionValue};

#[derive(Parser)]
#[command(name = "hasura-pick")]
#[command(about = "Pick a seed or migration and run the matching hasura command")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, env = "HASURA_PICK_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed data commands
    Seed {
        #[command(subcommand)]
        cmd: SeedCommands,
    },

    /// Migration commands
    Migrate {
        #[command(subcommand)]
        cmd: MigrateCommands,
    },

    /// Write a config file for this project
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts (use defaults)
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum SeedCommands {
    /// Pick a seed file and apply it
    Apply {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Pick a migration and apply it
    Apply {
        #[command(flatten)]
        common: CommonArgs,

        /// Migration direction
        #[arg(long = "type", value_enum)]
        direction: Option<Direction>,

        /// Mark the migration as applied without running it
        #[arg(long)]
        skip_execution: bool,

        /// Print the SQL hasura would run instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Pick a migration and delete it from the migration state
    Delete {
        #[command(flatten)]
        common: CommonArgs,

        /// Delete from the server state only
        #[arg(long)]
        server: bool,
    },
}

/// Flags shared by every pick command
#[derive(Args)]
struct CommonArgs {
    /// Database whose seeds/migrations are listed
    #[arg(long)]
    database_name: Option<String>,

    /// GraphQL engine endpoint, forwarded to hasura
    #[arg(long)]
    endpoint: Option<String>,

    /// Admin secret, forwarded to hasura
    #[arg(long)]
    admin_secret: Option<String>,

    /// Hasura project directory (overrides config)
    #[arg(long)]
    project: Option<PathBuf>,

    /// Use this candidate instead of prompting
    #[arg(long)]
    pick: Option<String>,

    /// Print the hasura command instead of running it
    #[arg(long)]
    print: bool,
}

/// Migration direction for `migrate apply --type`
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Direction {
    Up,
    Down,
}

impl CommonArgs {
    fn into_options(self, kind: OperationKind, config: &mut Config) -> PickOptions {
        if let Some(project) = self.project {
            config.project_dir = project;
        }

        let mut options = PickOptions::new(kind);
        options.database_name = self.database_name;
        options.pick = self.pick;
        options.print = self.print;
        if let Some(endpoint) = self.endpoint {
            options.flags.push(("endpoint".to_string(), OptionValue::from(endpoint)));
        }
        if let Some(secret) = self.admin_secret {
            options.flags.push(("admin-secret".to_string(), OptionValue::from(secret)));
        }
        options
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Init replaces the config, so only the pick commands read it
    let config_path = cli.config;

    match cli.command {
        Commands::Init { force, yes } => {
            let options = InitOptions {
                path: config_path,
                force,
                yes,
            };
            execute_init(options)?;
        }

        Commands::Seed { cmd } => match cmd {
            SeedCommands::Apply { common } => {
                let mut config = Config::load_if_present(&config_path)?;
                let options = common.into_options(OperationKind::SeedApply, &mut config);
                execute_pick(options, config)?;
            }
        },

        Commands::Migrate { cmd } => match cmd {
            MigrateCommands::Apply {
                common,
                direction,
                skip_execution,
                dry_run,
            } => {
                let mut config = Config::load_if_present(&config_path)?;
                let mut options = common.into_options(OperationKind::MigrateApply, &mut config);
                if let Some(direction) = direction {
                    let value = match direction {
                        Direction::Up => "up",
                        Direction::Down => "down",
                    };
                    options.flags.push(("type".to_string(), OptionValue::from(value)));
                }
                if skip_execution {
                    options
                        .flags
                        .push(("skip-execution".to_string(), OptionValue::from(true)));
                }
                if dry_run {
                    options.flags.push(("dry-run".to_string(), OptionValue::from(true)));
                }
                execute_pick(options, config)?;
            }
            MigrateCommands::Delete { common, server } => {
                let mut config = Config::load_if_present(&config_path)?;
                let mut options = common.into_options(OperationKind::MigrateDelete, &mut config);
                if server {
                    options.flags.push(("server".to_string(), OptionValue::from(true)));
                }
                execute_pick(options, config)?;
            }
        },
    }

    Ok(())
}
