//! CLI entry point for ivconf
//!
//! Inspects and edits the image viewer's settings and keybindings:
//! listing values, changing and persisting them, and replaying key
//! sequences through the same buffering the viewer uses.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use image_viewer_config::config::{unescape_keys, ConfigManager};
use image_viewer_config::keybindings::{self, split_keys, validate_key_sequence};
use image_viewer_config::settings::{self, Setting};
use image_viewer_config::{BindingTable, Bindings, KeyBuffer, KeyOutcome, Mode, SettingsRegistry};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ivconf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding settings.conf and keys.conf
    #[arg(short, long, global = true, default_value = "~/.config/imageviewer")]
    config_dir: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all settings
    Settings {
        /// Only show settings that differ from their default
        #[arg(long)]
        changed: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the value of one setting
    Get {
        /// Setting name, e.g. library.width
        name: String,
    },

    /// Change a setting
    Set {
        name: String,
        value: String,

        /// Write settings.conf afterwards
        #[arg(long)]
        save: bool,
    },

    /// Reset a setting, or all of them, to the default
    Reset {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        name: Option<String>,

        #[arg(long)]
        all: bool,

        /// Write settings.conf afterwards
        #[arg(long)]
        save: bool,
    },

    /// List keybindings
    Keys {
        /// Show the effective bindings of one mode, including fallbacks
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Bind a key sequence and write keys.conf
    Bind {
        keys: String,
        command: String,

        #[arg(short, long, default_value = "global")]
        mode: Mode,
    },

    /// Remove a key sequence and write keys.conf
    Unbind {
        keys: String,

        #[arg(short, long, default_value = "global")]
        mode: Mode,
    },

    /// Replay a key sequence and show what each key resolves to
    Press {
        keys: String,

        #[arg(short, long, default_value = "image")]
        mode: Mode,
    },

    /// Check that both config files load cleanly
    Check,
}

/// Everything a subcommand works on.
struct Workspace {
    manager: ConfigManager,
    registry: SettingsRegistry,
    table: BindingTable,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = expand_path(&cli.config_dir)?;

    if let Commands::Check = cli.command {
        return check_config(&config_dir);
    }

    let mut ws = load_workspace(&config_dir)?;

    match cli.command {
        Commands::Settings { changed, json } => list_settings(&ws.registry, changed, json)?,
        Commands::Get { name } => {
            println!("{}", ws.registry.get(&name)?);
        }
        Commands::Set { name, value, save } => {
            ws.registry.override_value(&name, value.as_str())?;
            println!(
                "{} {} = {}",
                "✓".green(),
                name.cyan(),
                ws.registry.get(&name)?
            );
            if save {
                save_settings(&ws)?;
            }
        }
        Commands::Reset { name, all, save } => {
            if all {
                ws.registry.reset_all();
                println!("{} Reset {} settings", "✓".green(), ws.registry.len());
            } else if let Some(name) = name {
                ws.registry.reset(&name)?;
                println!(
                    "{} {} = {}",
                    "✓".green(),
                    name.cyan(),
                    ws.registry.get(&name)?
                );
            }
            if save {
                save_settings(&ws)?;
            }
        }
        Commands::Keys { mode, json } => list_keybindings(&ws.table, mode, json)?,
        Commands::Bind {
            keys,
            command,
            mode,
        } => {
            validate_key_sequence(&keys)?;
            let keys = unescape_keys(&keys);
            ws.table.bind(&keys, &command, mode);
            println!(
                "{} {} {} → {}",
                "✓".green(),
                format!("[{}]", mode).magenta(),
                keys.cyan().bold(),
                command
            );
            save_keybindings(&ws)?;
        }
        Commands::Unbind { keys, mode } => {
            let keys = unescape_keys(&keys);
            ws.table.unbind(&keys, mode)?;
            println!(
                "{} {} {} removed",
                "✓".green(),
                format!("[{}]", mode).magenta(),
                keys.cyan().bold()
            );
            save_keybindings(&ws)?;
        }
        Commands::Press { keys, mode } => press_keys(&ws.table, mode, &keys)?,
        Commands::Check => {}
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "image_viewer_config=debug,ivconf=debug"
    } else {
        "image_viewer_config=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Expand tilde in a path argument
fn expand_path(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Builds the factory configuration and lays the config files over it.
///
/// `keys.conf` is written as a full snapshot of every mode's table, so
/// when it exists it replaces the factory bindings instead of extending
/// them. That way an `unbind` of a factory key survives a restart.
fn load_workspace(config_dir: &Path) -> anyhow::Result<Workspace> {
    let manager = ConfigManager::new(config_dir.to_path_buf())
        .with_context(|| format!("Failed to open config directory {}", config_dir.display()))?;

    let mut registry = SettingsRegistry::new();
    settings::defaults::register_all(&mut registry)?;
    manager.load_settings(&mut registry)?;

    let mut table = BindingTable::new();
    if manager.keys_path().exists() {
        debug!(path = %manager.keys_path().display(), "keys.conf replaces factory bindings");
    } else {
        keybindings::defaults::register_all(&mut table);
    }
    manager.load_keybindings(&mut table)?;

    Ok(Workspace {
        manager,
        registry,
        table,
    })
}

fn save_settings(ws: &Workspace) -> anyhow::Result<()> {
    let backup = ws.manager.save_settings(&ws.registry)?;
    report_saved(&ws.manager.settings_path(), backup.as_deref());
    Ok(())
}

fn save_keybindings(ws: &Workspace) -> anyhow::Result<()> {
    let backup = ws.manager.save_keybindings(&ws.table)?;
    report_saved(&ws.manager.keys_path(), backup.as_deref());
    Ok(())
}

fn report_saved(path: &Path, backup: Option<&Path>) {
    println!("{} Wrote {}", "✓".green(), path.display());
    if let Some(backup) = backup {
        println!("  {} {}", "backup:".dimmed(), backup.display());
    }
}

fn list_settings(registry: &SettingsRegistry, changed_only: bool, json: bool) -> anyhow::Result<()> {
    let settings: Vec<&Setting> = if changed_only {
        registry.changed().collect()
    } else {
        registry.iter().collect()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    for setting in &settings {
        let state = if setting.is_default() {
            "".normal()
        } else {
            format!("(default {})", setting.default_value()).yellow()
        };

        println!(
            "{} = {} {} {}",
            setting.name().cyan().bold(),
            setting.value(),
            format!("[{}]", setting.kind()).dimmed(),
            state
        );
    }

    println!("\n{} Total: {} settings", "✓".green(), settings.len());
    Ok(())
}

fn list_keybindings(table: &BindingTable, mode: Option<Mode>, json: bool) -> anyhow::Result<()> {
    if let Some(mode) = mode {
        let effective = table.get(mode);

        if json {
            println!("{}", serde_json::to_string_pretty(&*effective)?);
        } else {
            println!("{}", format!("Effective bindings in {} mode\n", mode).bold());
            print_bindings(&effective);
            println!("\n{} Total: {} bindings", "✓".green(), effective.len());
        }
        return Ok(());
    }

    if json {
        let by_mode: BTreeMap<&str, &Bindings> =
            table.iter().map(|(mode, bindings)| (mode.as_str(), bindings)).collect();
        println!("{}", serde_json::to_string_pretty(&by_mode)?);
        return Ok(());
    }

    for (mode, bindings) in table.iter().filter(|(_, bindings)| !bindings.is_empty()) {
        println!("{}", format!("[{}]", mode).magenta().bold());
        print_bindings(bindings);
        println!();
    }

    println!("{} Total: {} bindings", "✓".green(), table.total_bindings());
    Ok(())
}

fn print_bindings(bindings: &Bindings) {
    for (keys, command) in bindings.iter() {
        println!("  {} → {}", keys.cyan().bold(), command.green());
    }
}

/// Feeds each key of `keys` through a fresh buffer.
fn press_keys(table: &BindingTable, mode: Mode, keys: &str) -> anyhow::Result<()> {
    validate_key_sequence(keys)?;
    let keys = unescape_keys(keys);

    let mut buffer = KeyBuffer::new();
    for key in split_keys(&keys) {
        let outcome = buffer.press(table, mode, key);
        match outcome {
            KeyOutcome::Command(command) => {
                println!("{} {} → {}", key.cyan().bold(), "run".green(), command)
            }
            KeyOutcome::Pending(pending) => {
                println!("{} {} {}", key.cyan().bold(), "wait".yellow(), pending.dimmed())
            }
            KeyOutcome::Discarded(discarded) => {
                println!("{} {} {}", key.cyan().bold(), "drop".red(), discarded.dimmed())
            }
        }
    }

    if let Some(pending) = buffer.pending() {
        println!("\n{} '{}' still waiting for more keys", "⚠".yellow(), pending);
    }

    Ok(())
}

/// Loads both files, reporting every problem instead of stopping at the first.
fn check_config(config_dir: &Path) -> anyhow::Result<()> {
    let manager = ConfigManager::new(config_dir.to_path_buf())
        .with_context(|| format!("Failed to open config directory {}", config_dir.display()))?;

    println!("{} Checking config: {}", "→".cyan(), config_dir.display());

    let mut failures = 0;

    let mut registry = SettingsRegistry::new();
    settings::defaults::register_all(&mut registry)?;
    match manager.load_settings(&mut registry) {
        Ok(report) => {
            println!(
                "{} {}: {} applied",
                "✓".green(),
                manager.settings_path().display(),
                report.applied
            );
            for name in &report.skipped {
                println!("  {} unknown setting '{}' ignored", "⚠".yellow(), name);
            }
        }
        Err(e) => {
            failures += 1;
            println!("{} {}", "✗".red().bold(), e);
        }
    }

    let mut table = BindingTable::new();
    match manager.load_keybindings(&mut table) {
        Ok(report) => println!(
            "{} {}: {} bindings",
            "✓".green(),
            manager.keys_path().display(),
            report.applied
        ),
        Err(e) => {
            failures += 1;
            println!("{} {}", "✗".red().bold(), e);
        }
    }

    let backups = manager.list_backups()?;
    println!("{} {} backups in {}", "→".cyan(), backups.len(), manager.backup_dir().display());

    if failures > 0 {
        println!(
            "\n{}",
            format!("⚠ {} config file{} failed to load", failures, if failures == 1 { "" } else { "s" })
                .yellow()
        );
        std::process::exit(1);
    }

    println!("\n{} {}", "✓".green().bold(), "Config is clean!".bold());
    Ok(())
}
