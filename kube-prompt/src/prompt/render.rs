//! Segment rendering for the terminal.

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use crossterm::queue;
use crossterm::style::{Color, Colors, Print, ResetColor, SetColors};
use kube_prompt_types::DisplaySegment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Ansi,
    Json,
}

/// Shell whose prompt receives the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ShellKind {
    Bash,
    Zsh,
    #[default]
    Bare,
}

impl ShellKind {
    /// Markers around zero-width escape sequences.
    fn escape_markers(&self) -> (&'static str, &'static str) {
        match self {
            ShellKind::Bash => ("\\[", "\\]"),
            ShellKind::Zsh => ("%{", "%}"),
            ShellKind::Bare => ("", ""),
        }
    }
}

pub fn render(segments: &[DisplaySegment], format: OutputFormat, shell: ShellKind) -> Result<String> {
    match format {
        OutputFormat::Ansi => render_ansi(segments, shell),
        OutputFormat::Json => render_json(segments),
    }
}

/// Render segments as ` <text> ` blocks in their 256-color pairs.
pub fn render_ansi(segments: &[DisplaySegment], shell: ShellKind) -> Result<String> {
    if segments.is_empty() {
        return Ok(String::new());
    }

    let (open, close) = shell.escape_markers();
    let mut out: Vec<u8> = Vec::new();
    for segment in segments {
        let colors = Colors::new(
            Color::AnsiValue(segment.foreground),
            Color::AnsiValue(segment.background),
        );
        queue!(
            out,
            Print(open),
            SetColors(colors),
            Print(close),
            Print(format!(" {} ", segment.text))
        )?;
    }
    queue!(out, Print(open), ResetColor, Print(close))?;

    String::from_utf8(out).context("rendered prompt is not utf-8")
}

pub fn render_json(segments: &[DisplaySegment]) -> Result<String> {
    serde_json::to_string(segments).context("failed to serialize segments")
}
