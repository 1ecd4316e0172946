use anyhow::Result;
use clap::Parser;
use kube_prompt::config::load_theme;
use kube_prompt::environment::EnvLookup;
use kube_prompt::errors::display_user_error;
use kube_prompt::prompt::render::{OutputFormat, ShellKind, render};
use kube_prompt::{Prompt, ShortenOptions, SystemEnv};
use kube_prompt_types::Theme;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const LOG_FILE_ENV: &str = "KPROMPT_LOG_FILE";
const LOG_FILTER_ENV: &str = "KPROMPT_LOG";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shorten gke_<project>_<zone>_<name> cluster names to <name>
    #[arg(long)]
    shorten_gke_names: bool,

    /// Shorten EKS cluster ARNs to the cluster name
    #[arg(long)]
    shorten_eks_names: bool,

    /// Theme file (JSON)
    #[arg(short, long)]
    theme: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Ansi)]
    format: OutputFormat,

    #[arg(long, value_enum, default_value_t = ShellKind::Bare)]
    shell: ShellKind,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| SystemEnv.var(LOG_FILE_ENV).map(PathBuf::from));
    if let Some(path) = log_file.as_deref()
        && let Err(err) = init_tracing(path)
    {
        display_user_error(&err);
    }

    match run(&cli) {
        Ok(output) => {
            let mut out = std::io::stdout().lock();
            write!(out, "{}", output).ok();
            out.flush().ok();
            ExitCode::SUCCESS
        }
        Err(err) => {
            display_user_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let theme = match load_theme(cli.theme.as_deref()) {
        Ok(theme) => theme,
        Err(err) => {
            warn!("falling back to default theme: {:#}", err);
            display_user_error(&err);
            Theme::default()
        }
    };

    let prompt = Prompt::new(
        theme,
        ShortenOptions {
            gke: cli.shorten_gke_names,
            eks: cli.shorten_eks_names,
        },
    );
    let segments = prompt.segments(&SystemEnv);
    render(&segments, cli.format, cli.shell)
}

fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::sync::Arc::new(
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?,
    );
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .init();
    Ok(())
}
