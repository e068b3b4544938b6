use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use warden::{
    ChangelogConfig, DEFAULT_CONFIG_FILE, HygieneViolation, WardenConfig, advise,
    initialize_project, read_config_value, scan_architecture, scan_hygiene, validate_changelog,
};

#[derive(Parser)]
#[command(name = "warden")]
#[command(version, about = "changelog, architecture and release hygiene checks", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// path to the project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// output format (json or human)
    #[arg(short, long, default_value = "human", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// validate changelog structure
    Changelog {
        /// changelog file (defaults to CHANGELOG.md in the project root)
        file: Option<PathBuf>,

        /// require an '## [Unreleased]' section
        #[arg(long)]
        require_unreleased: bool,

        /// require a date on every version heading
        #[arg(long)]
        require_dates: bool,
    },

    /// suggest the next version bump from commits since the last tag
    Bump {
        /// path to the repository (optional, defaults to the project root)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// check that the domain layer stays free of forbidden imports
    Arch {
        /// path to the project (optional, defaults to the project root)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// scan for oversized files and unowned work markers
    Hygiene {
        /// maximum lines per file before it is flagged
        #[arg(long)]
        max_lines: Option<usize>,
    },

    /// read a value from the project configuration file
    Config {
        /// dotted key path, e.g. author.name
        key: String,

        /// configuration file (defaults to .project-config.yaml in the project root)
        #[arg(short = 'c', long)]
        file: Option<PathBuf>,
    },

    /// rename scaffold components to their project names
    Init {
        /// new backend component name
        backend: String,

        /// new frontend component name
        frontend: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Changelog {
            file,
            require_unreleased,
            require_dates,
        } => {
            handle_changelog(&cli.path, &cli.format, file, require_unreleased, require_dates)?;
        }
        Commands::Bump { path } => {
            let repo_path = path.as_ref().unwrap_or(&cli.path);
            handle_bump(repo_path, &cli.format)?;
        }
        Commands::Arch { path } => {
            let project_path = path.as_ref().unwrap_or(&cli.path);
            handle_arch(project_path, &cli.format)?;
        }
        Commands::Hygiene { max_lines } => {
            handle_hygiene(&cli.path, &cli.format, max_lines)?;
        }
        Commands::Config { key, file } => {
            handle_config(&cli.path, &cli.format, &key, file)?;
        }
        Commands::Init { backend, frontend } => {
            handle_init(&cli.path, &cli.format, &backend, &frontend)?;
        }
    }

    Ok(())
}

fn handle_changelog(
    root: &PathBuf,
    format: &OutputFormat,
    file: Option<PathBuf>,
    require_unreleased: bool,
    require_dates: bool,
) -> Result<()> {
    let changelog_path = file.unwrap_or_else(|| root.join("CHANGELOG.md"));

    // file settings are a baseline, flags can only tighten them
    let defaults = WardenConfig::load_or_default(root).changelog;
    let config = ChangelogConfig::new()
        .require_unreleased(defaults.require_unreleased || require_unreleased)
        .require_dates(defaults.require_dates || require_dates);

    if !changelog_path.exists() {
        let message = format!("changelog not found: {}", changelog_path.display());
        match format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "file": changelog_path,
                    "valid": false,
                    "error": message,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Human => {
                eprintln!("{}", format!("❌ ERROR: {}", message).red());
            }
        }
        anyhow::bail!("changelog validation failed");
    }

    let content = std::fs::read_to_string(&changelog_path)
        .with_context(|| format!("failed to read {}", changelog_path.display()))?;
    let outcome = validate_changelog(&content, &config);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "file": changelog_path,
                "valid": outcome.is_valid(),
                "violation": outcome.violation(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match outcome.violation() {
            None => println!("{}", "✅ Changelog validation passed!".green()),
            Some(violation) => {
                eprintln!("{}", format!("❌ ERROR: {}", violation.message).red());
            }
        },
    }

    if !outcome.is_valid() {
        anyhow::bail!("changelog validation failed");
    }

    Ok(())
}

fn handle_bump(path: &PathBuf, format: &OutputFormat) -> Result<()> {
    let advice = advise(path).context("failed to analyze repository history")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&advice)?);
        }
        OutputFormat::Human => {
            println!("{} {}", "Current Version:".blue(), advice.tag);
            println!("{} {}", "Commits since tag:".blue(), advice.commits_scanned);

            match (&advice.bump, &advice.next_version) {
                (Some(bump), Some(next)) => {
                    println!();
                    println!("{} {}", "Suggested Bump:".green(), bump);
                    println!("{}  v{}", "Next Version:".green(), next);
                    println!("{}        {}", "Reason:".yellow(), advice.reason);
                }
                _ => {
                    println!();
                    println!("{}", "No changes to release.".yellow());
                }
            }
        }
    }

    Ok(())
}

fn handle_arch(path: &PathBuf, format: &OutputFormat) -> Result<()> {
    if matches!(format, OutputFormat::Human) {
        println!("🏰 Scanning Architectural Boundaries...");
    }

    let violations = scan_architecture(path).context("failed to scan source tree")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "compliant": violations.is_empty(),
                "violations": violations,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if violations.is_empty() {
                println!("{}", "✅ Architecture compliant (Domain is pure).".green());
            } else {
                println!();
                println!("{} Architectural Violations Found:", violations.len());
                println!();
                for violation in &violations {
                    println!(
                        "{}",
                        format!("❌ [Arch Violation] {}", violation.path.display()).red()
                    );
                    println!("   Imported: {}", violation.import);
                    println!("   Rule: {}", violation.rule);
                }
            }
        }
    }

    if !violations.is_empty() {
        anyhow::bail!("{} architectural violation(s) found", violations.len());
    }

    Ok(())
}

fn handle_hygiene(root: &PathBuf, format: &OutputFormat, max_lines: Option<usize>) -> Result<()> {
    let mut config = WardenConfig::load_or_default(root).hygiene;
    if let Some(max) = max_lines {
        config = config.max_file_lines(max);
    }

    if matches!(format, OutputFormat::Human) {
        println!("🔍 Scanning for Complexity and Hygiene...");
    }

    let violations = scan_hygiene(root, &config).context("failed to scan project tree")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "compliant": violations.is_empty(),
                "violations": violations,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if violations.is_empty() {
                println!(
                    "{}",
                    "✅ Hygiene compliant (No God Files, Strict TODOs).".green()
                );
            } else {
                println!();
                println!("{} Hygiene Violations Found:", violations.len());
                println!();
                for violation in &violations {
                    print_hygiene_violation(violation);
                }
            }
        }
    }

    if !violations.is_empty() {
        anyhow::bail!("{} hygiene violation(s) found", violations.len());
    }

    Ok(())
}

fn print_hygiene_violation(violation: &HygieneViolation) {
    match violation {
        HygieneViolation::FileTooLarge { path, lines, max } => {
            println!(
                "{}",
                format!(
                    "❌ [Too Large] {}: {} lines (Max: {})",
                    path.display(),
                    lines,
                    max
                )
                .red()
            );
            println!("   → AI Context Risk: Split this file immediately.");
        }
        HygieneViolation::BareTodo { path, line, text } => {
            println!(
                "{}",
                format!("❌ [Bare TO-DO] {}:{}", path.display(), line).red()
            );
            println!("   → Found '{}'", text);
            println!("   → Rule: Must use TODO(user) or TODO(#issue)");
        }
    }
}

fn handle_config(
    root: &PathBuf,
    format: &OutputFormat,
    key: &str,
    file: Option<PathBuf>,
) -> Result<()> {
    let config_path = file.unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE));
    let value = read_config_value(&config_path, key)
        .with_context(|| format!("failed to read '{}' from {}", key, config_path.display()))?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "file": config_path,
                "key": key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", value);
        }
    }

    Ok(())
}

fn handle_init(root: &PathBuf, format: &OutputFormat, backend: &str, frontend: &str) -> Result<()> {
    if matches!(format, OutputFormat::Human) {
        println!(
            "🚀 Initializing project: Backend='{}', Frontend='{}'",
            backend, frontend
        );
    }

    let report = initialize_project(root, backend, frontend)
        .context("failed to rename project components")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            for renamed in &report.renamed {
                let from = renamed.from.strip_prefix(root).unwrap_or(&renamed.from);
                let to = renamed.to.strip_prefix(root).unwrap_or(&renamed.to);
                println!("Moving {} -> {}", from.display(), to.display());
            }
            println!(
                "{}",
                "✅ Makefile auto-detects components. No change needed.".green()
            );
            for step in &report.manual_steps {
                println!("{}", format!("⚠️  Manual Step: {}", step).yellow());
            }
            println!();
            println!(
                "{}",
                "✅ Initialization complete. Run 'make status' to verify.".green()
            );
        }
    }

    Ok(())
}
