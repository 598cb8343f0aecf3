//! CLI entry point for template-insight.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `template-insight-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use template_insight_app::{
    AnalyzeInput, ExplainOutput, format_explanation, format_not_found, load_registry,
    render_output, resolve_settings, run_analyze, run_explain, write_output,
};
use template_insight_domain::policy::AnalysisOptions;
use template_insight_settings::{Overrides, ResolvedConfig};

#[derive(Parser, Debug)]
#[command(
    name = "template-insight",
    version,
    about = "Classify C++ compiler diagnostics into template issues"
)]
struct Cli {
    /// Path to the config file (`.toml` for TOML, JSON otherwise).
    #[arg(long, global = true, default_value = "config.json")]
    config: Utf8PathBuf,

    /// Override the log level (trace|debug|info|warn|error|critical|off).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Override the issue kinds file.
    #[arg(long, global = true, value_name = "FILE")]
    issue_kinds: Option<String>,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a compiler log (the default when no command is given).
    Analyze(AnalyzeArgs),

    /// Show what an issue code means.
    Explain {
        /// Issue code, e.g. NO_MEMBER.
        code: String,
    },
}

#[derive(Args, Debug, Default)]
struct AnalyzeArgs {
    /// Read the log from FILE instead of stdin.
    #[arg(long, value_name = "FILE")]
    input: Option<Utf8PathBuf>,

    /// Compiler that produced the log (informational).
    #[arg(long)]
    compiler: Option<String>,

    /// Override the maximum number of issues to emit.
    #[arg(long)]
    max_issues: Option<u64>,

    /// Only report this code; repeat to allow several. Replaces the configured list.
    #[arg(long = "enable", value_name = "CODE")]
    enable: Vec<String>,

    /// Also run the located template detectors (overload, conversion, SFINAE, constraints).
    #[arg(long)]
    extended: bool,

    /// Override the output format (json|text).
    #[arg(long)]
    format: Option<String>,

    /// Write output to FILE instead of stdout.
    #[arg(long, value_name = "FILE")]
    output: Option<String>,

    /// Pretty-print JSON or include detailed messages in text.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Some(Commands::Analyze(ref args)) => cmd_analyze(&cli, args),
        None => cmd_analyze(&cli, &AnalyzeArgs::default()),
        Some(Commands::Explain { ref code }) => cmd_explain(&cli, code),
    }
}

fn cmd_analyze(cli: &Cli, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let overrides = Overrides {
        max_issues: args.max_issues,
        enabled_issue_codes: (!args.enable.is_empty()).then(|| args.enable.clone()),
        issue_kinds_file: cli.issue_kinds.clone(),
        extended_detectors: args.extended.then_some(true),
        format: args.format.clone(),
        verbose: args.verbose.then_some(true),
        output_file: args.output.clone(),
        log_level: cli.log_level.clone(),
    };
    let resolved = load_settings(&cli.config, overrides)?;
    init_logging(&resolved);

    let log_text = read_input(args.input.as_deref())?;
    if log_text.trim().is_empty() {
        eprintln!("template-insight: warning: no diagnostics on input");
        tracing::warn!("empty input");
    }

    let options = AnalysisOptions {
        compiler: args
            .compiler
            .clone()
            .unwrap_or_else(|| AnalysisOptions::default().compiler),
    };
    let output = run_analyze(AnalyzeInput {
        log_text: &log_text,
        options,
        config: &resolved.analysis,
    });

    let rendered = render_output(&output.report, &resolved.output);
    match &resolved.output.output_file {
        Some(path) => write_output(path, &rendered).context("write analysis output")?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn cmd_explain(cli: &Cli, code: &str) -> anyhow::Result<()> {
    let overrides = Overrides {
        issue_kinds_file: cli.issue_kinds.clone(),
        log_level: cli.log_level.clone(),
        ..Overrides::default()
    };
    let resolved = load_settings(&cli.config, overrides)?;
    init_logging(&resolved);

    let registry = load_registry(&resolved.analysis);
    match run_explain(code, &registry) {
        ExplainOutput::Found { kind, source } => {
            print!("{}", format_explanation(&kind, source));
            Ok(())
        }
        ExplainOutput::NotFound {
            code,
            available_codes,
        } => {
            eprint!("{}", format_not_found(&code, &available_codes));
            std::process::exit(1);
        }
    }
}

/// Read and resolve the config file. A missing or broken file means defaults;
/// only bad overrides are fatal.
fn load_settings(path: &Utf8Path, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            eprintln!(
                "template-insight: warning: cannot read config {path} ({err}); using defaults"
            );
            None
        }
    };

    match resolve_settings(path, text.as_deref(), overrides.clone()) {
        Ok(resolved) => Ok(resolved),
        Err(err) if text.is_some() => {
            eprintln!("template-insight: warning: {err:#}; using defaults");
            resolve_settings(path, None, overrides)
        }
        Err(err) => Err(err),
    }
}

fn init_logging(resolved: &ResolvedConfig) {
    if let Err(err) = logging::init(&resolved.logger) {
        eprintln!("template-insight: warning: logging disabled: {err:#}");
    }
}

/// Compiler output is not guaranteed to be UTF-8; invalid bytes are replaced.
fn read_input(path: Option<&Utf8Path>) -> anyhow::Result<String> {
    let bytes = match path {
        Some(path) => std::fs::read(path).with_context(|| format!("read input: {path}"))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("read stdin")?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
