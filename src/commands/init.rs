//! @acp:module "Init Command"
//! @acp:summary "Write a hasura-pick config file for the current project"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `hasura-pick init`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Where to write the config
    pub path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Skip interactive prompts
    pub yes: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let mut config = Config::default();
    if !options.yes {
        run_interactive_init(&mut config)?;
    }

    report_layout(&config);

    config.save(&options.path)?;
    println!(
        "{} Created {}",
        style("✓").green(),
        options.path.display()
    );

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  Run {} to pick a migration",
        style("hasura-pick migrate apply").cyan()
    );

    Ok(())
}

fn run_interactive_init(config: &mut Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{} hasura-pick setup\n", style("→").cyan());

    let project_dir: String = Input::with_theme(&theme)
        .with_prompt("Hasura project directory")
        .default(config.project_dir.display().to_string())
        .interact_text()?;
    config.project_dir = PathBuf::from(project_dir);

    config.database_name = Input::with_theme(&theme)
        .with_prompt("Default database name")
        .default(config.database_name.clone())
        .interact_text()?;

    let custom_bin = Confirm::with_theme(&theme)
        .with_prompt("Use a hasura binary other than `hasura` on PATH?")
        .default(false)
        .interact()?;
    if custom_bin {
        config.hasura_bin = Input::with_theme(&theme)
            .with_prompt("Path to hasura binary")
            .interact_text()?;
    }

    Ok(())
}

fn report_layout(config: &Config) {
    let layout = config.layout();
    for (label, dir) in [("seeds", &layout.seeds_dir), ("migrations", &layout.migrations_dir)] {
        if has_database(dir, &config.database_name) {
            println!("{} Found {} for {}", style("✓").green(), label, config.database_name);
        } else {
            println!(
                "{} No {} directory at {}",
                style("⚠").yellow(),
                label,
                dir.join(&config.database_name).display()
            );
        }
    }
}

fn has_database(dir: &Path, database: &str) -> bool {
    dir.join(database).is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_with_defaults_writes_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".hasura-pick.json");

        execute_init(InitOptions {
            path: path.clone(),
            force: false,
            yes: true,
        })
        .unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_force_replaces_broken_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".hasura-pick.json");
        std::fs::write(&path, "{ broken").unwrap();

        execute_init(InitOptions {
            path: path.clone(),
            force: true,
            yes: true,
        })
        .unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_has_database() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("default")).unwrap();
        assert!(has_database(temp.path(), "default"));
        assert!(!has_database(temp.path(), "app"));
    }
}
