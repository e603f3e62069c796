use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io::{BufRead, IsTerminal, Write};
use tracing::warn;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use uicue::config::{self, ConfigFile, ResolvedConfig};
use uicue::labels::{Labeler, ToolInvocation};
use uicue::{ClassValue, Merger, join_classes, ui};

#[derive(Parser, Debug)]
#[command(
    name = "uicue",
    version,
    about = "Tailwind class merging and tool status labels for agent front-ends",
    long_about = None,
)]
struct Args {
    /// Profile to use from config file
    #[arg(short, long, env = "UICUE_PROFILE", global = true)]
    profile: Option<String>,

    /// Override the Tailwind class prefix (e.g. "tw-")
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Override the variant separator
    #[arg(long, global = true)]
    separator: Option<String>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose class values and resolve Tailwind conflicts
    Cn {
        /// Class values, in order
        values: Vec<String>,

        /// Parse each value as JSON (strings, arrays, {"class": bool} maps)
        #[arg(long)]
        json: bool,
    },

    /// Resolve Tailwind conflicts in an already-flat class list
    Merge {
        classes: Vec<String>,
    },

    /// Print the status label for a tool invocation
    Label {
        /// Tool identifier, e.g. str_replace_editor
        #[arg(required_unless_present = "stdin")]
        tool: Option<String>,

        /// Tool arguments as a JSON object
        #[arg(long)]
        args: Option<String>,

        /// Prefix the label with the tool glyph
        #[arg(long)]
        glyph: bool,

        /// Read JSON-lines invocation records ({"name": .., "args": ..}) from stdin
        #[arg(long, conflicts_with_all = ["tool", "args"])]
        stdin: bool,
    },

    /// Write a default config file to ~/.config/uicue/config.toml
    Init,

    /// List configured profiles
    Profiles,

    /// Print shell completions to stdout
    Completions {
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match &args.command {
        Command::Init => {
            let path = ConfigFile::write_default_if_missing()?;
            println!("Config written to: {}", path.display());
            return Ok(());
        }
        Command::Completions { shell } => {
            let mut cmd = Args::command();
            clap_complete::generate(*shell, &mut cmd, "uicue", &mut std::io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let file = ConfigFile::load()?;
    if let Command::Profiles = args.command {
        print_profiles(&file);
        return Ok(());
    }

    let resolved = ResolvedConfig::resolve(
        &file,
        args.profile.as_deref(),
        args.prefix.as_deref(),
        args.separator.as_deref(),
    );

    match args.command {
        Command::Cn { values, json } => {
            let merger = merger_for(&resolved)?;
            let inputs = parse_class_values(&values, json)?;
            println!("{}", merger.merge(&join_classes(&inputs)));
        }
        Command::Merge { classes } => {
            let merger = merger_for(&resolved)?;
            println!("{}", merger.merge(&classes.join(" ")));
        }
        Command::Label { tool, args: tool_args, glyph, stdin } => {
            let labeler = Labeler::new(resolved.labels.clone());
            if stdin {
                label_stream(&labeler)?;
            } else if let Some(tool) = tool {
                let tool_args = tool_args
                    .as_deref()
                    .map(serde_json::from_str::<serde_json::Value>)
                    .transpose()
                    .context("--args is not valid JSON")?;
                let label = labeler.label(&tool, tool_args.as_ref());
                if glyph {
                    println!("{}", render_status(&tool, &label));
                } else {
                    println!("{label}");
                }
            }
        }
        Command::Init | Command::Profiles | Command::Completions { .. } => {}
    }
    Ok(())
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

// ── Class names ───────────────────────────────────────────────────────────────

fn merger_for(resolved: &ResolvedConfig) -> Result<Merger> {
    Merger::from_config(resolved)
        .with_context(|| format!("Invalid merge settings in profile '{}'", resolved.profile_name))
}

fn parse_class_values(values: &[String], json: bool) -> Result<Vec<ClassValue>> {
    if !json {
        return Ok(values.iter().map(ClassValue::from).collect());
    }
    values
        .iter()
        .map(|raw| {
            serde_json::from_str::<serde_json::Value>(raw)
                .map(ClassValue::from)
                .with_context(|| format!("Invalid JSON class value: {raw}"))
        })
        .collect()
}

// ── Labels ────────────────────────────────────────────────────────────────────

fn render_status(tool: &str, label: &str) -> String {
    if std::io::stdout().is_terminal() {
        ui::styled_status_line(tool, label)
    } else {
        ui::status_line(tool, label)
    }
}

fn label_stream(labeler: &Labeler) -> Result<()> {
    let stdin = std::io::stdin();
    let mut out = std::io::stdout().lock();
    for (n, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let invocation: ToolInvocation = match serde_json::from_str(&line) {
            Ok(inv) => inv,
            Err(e) => {
                warn!(line = n + 1, "skipping malformed invocation record: {e}");
                continue;
            }
        };
        let label = labeler.label(&invocation.name, invocation.args.as_ref());
        writeln!(out, "{}", render_status(&invocation.name, &label))?;
    }
    Ok(())
}

// ── Profiles listing ──────────────────────────────────────────────────────────

fn print_profiles(file: &ConfigFile) {
    let mut entries: Vec<_> = file.profiles.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    println!();
    println!("  Profiles  ({})", config::config_path().display());
    if entries.is_empty() {
        println!("  (none, built-in defaults in use; run `uicue init`)");
    }
    for (name, profile) in entries {
        let marker = if *name == file.default_profile { " ←" } else { "" };
        let prefix = if profile.prefix.is_empty() { "(none)" } else { profile.prefix.as_str() };
        println!("  {name}{marker}");
        println!("    prefix     {prefix}");
        println!("    separator  {}", profile.separator);
        println!("    groups     {}", profile.groups.len());
        println!("    labels     {}", profile.labels.len());
        println!();
    }
}
