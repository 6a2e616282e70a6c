//! # Wireframes CLI
//!
//! Renders the athlete app wireframes to files.
//!
//! ## Usage
//!
//! ```bash
//! # List the designed screens in journey order
//! wireframes list
//!
//! # Render two screens as SVG into ./out
//! wireframes render welcome daw --out out
//!
//! # Render every screen as JSON with a custom theme
//! wireframes render --all --format json --theme dark.json --out out
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `RenderConfig` - Resolved render job: screens, theme, format, output directory
//! - `run` / `render` - Build through the screen registry, export, write `<id>.<ext>`

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use wireframe_core::Theme;
use wireframe_layout::Registry;
use wireframe_renderer::{ExportConfig, ExportFormat, WireframeExporter};

/// Command-line arguments for `wireframes`.
#[derive(Debug, Clone, Parser)]
#[command(name = "wireframes")]
#[command(about = "Render the athlete app wireframes")]
#[command(version)]
pub struct CliArgs {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the screen ids in journey order
    List {
        /// Print a JSON array instead of one id per line
        #[arg(long)]
        json: bool,
    },
    /// Render screens to files
    Render(RenderArgs),
}

/// Arguments of `wireframes render`.
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Screen ids to render
    pub ids: Vec<String>,

    /// Render every screen
    #[arg(long, conflicts_with = "ids")]
    pub all: bool,

    /// Output directory, created if missing
    #[arg(long, short, env = "WIREFRAMES_OUT", default_value = "wireframes")]
    pub out: PathBuf,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// JSON theme file; missing keys keep their defaults
    #[arg(long, env = "WIREFRAMES_THEME")]
    pub theme: Option<PathBuf>,

    /// Output scale factor (PNG and SVG size)
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,
}

/// Output formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// SVG markup
    Svg,
    /// Serialized wireframe
    Json,
    /// Raster image (needs the `png` feature)
    Png,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Svg => Self::Svg,
            OutputFormat::Json => Self::Json,
            OutputFormat::Png => Self::Png,
        }
    }
}

/// A resolved render job.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Screens to render, in order.
    pub ids: Vec<String>,
    /// Output directory.
    pub out_dir: PathBuf,
    /// Output format.
    pub format: ExportFormat,
    /// Theme applied to every screen.
    pub theme: Theme,
    /// Exporter settings.
    pub export: ExportConfig,
}

impl RenderConfig {
    /// Resolve command-line arguments against the registry, loading the
    /// theme file if one is given.
    ///
    /// # Errors
    ///
    /// Fails if no screen is selected, an id is unknown, or the theme file
    /// cannot be read or parsed.
    pub fn resolve(args: RenderArgs, registry: &Registry) -> anyhow::Result<Self> {
        let ids: Vec<String> = if args.all {
            registry.list_screens().iter().map(ToString::to_string).collect()
        } else {
            args.ids
        };
        if ids.is_empty() {
            bail!("no screens selected: pass screen ids or --all");
        }
        if let Some(unknown) = ids.iter().find(|id| !registry.contains(id)) {
            bail!(
                "unknown screen '{unknown}' (known: {})",
                registry.list_screens().join(", ")
            );
        }

        let theme = match &args.theme {
            Some(path) => load_theme(path)?,
            None => Theme::default(),
        };

        Ok(Self {
            ids,
            out_dir: args.out,
            format: args.format.into(),
            theme,
            export: ExportConfig {
                scale: args.scale,
                ..ExportConfig::default()
            },
        })
    }
}

/// Read and validate a JSON theme file.
///
/// # Errors
///
/// Fails if the file cannot be read or does not hold a valid theme.
pub fn load_theme(path: &Path) -> anyhow::Result<Theme> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read theme file {}", path.display()))?;
    let theme = Theme::from_json(&json)
        .with_context(|| format!("invalid theme file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "theme loaded");
    Ok(theme)
}

/// Build, export and write every screen of `config`.
///
/// Returns the written paths in screen order.
///
/// # Errors
///
/// Fails on the first screen that cannot be built, exported or written.
pub fn render(config: &RenderConfig, registry: &Registry) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.out_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.out_dir.display()
        )
    })?;

    let exporter = WireframeExporter::new(config.export.clone());
    let mut written = Vec::with_capacity(config.ids.len());

    for id in &config.ids {
        let bytes = exporter
            .export_screen(registry, id, &config.theme, config.format)
            .with_context(|| format!("failed to render screen '{id}'"))?;

        let path = config
            .out_dir
            .join(format!("{id}.{}", config.format.extension()));
        fs::write(&path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;

        tracing::info!(screen = %id, path = %path.display(), bytes = bytes.len(), "wrote wireframe");
        written.push(path);
    }

    Ok(written)
}

/// Execute a parsed command, printing user-facing output to `out`.
///
/// # Errors
///
/// Fails if the command fails or `out` cannot be written.
pub fn run(args: CliArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let registry = Registry::global();

    match args.command {
        Command::List { json } => {
            let ids = registry.list_screens();
            if json {
                writeln!(out, "{}", serde_json::to_string(ids)?)?;
            } else {
                for id in ids {
                    writeln!(out, "{id}")?;
                }
            }
        }
        Command::Render(render_args) => {
            let config = RenderConfig::resolve(render_args, registry)?;
            let written = render(&config, registry)?;
            for path in &written {
                writeln!(out, "{}", path.display())?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("wireframes").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_render_defaults() {
        match parse(&["render", "welcome"]).command {
            Command::Render(args) => {
                assert_eq!(args.ids, vec!["welcome".to_string()]);
                assert!(!args.all);
                assert_eq!(args.format, OutputFormat::Svg);
                assert!((args.scale - 1.0).abs() < f32::EPSILON);
                assert!(args.theme.is_none());
            }
            other => panic!("Expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_all_conflicts_with_ids() {
        let result = CliArgs::try_parse_from(["wireframes", "render", "welcome", "--all"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_maps_to_export_format() {
        assert_eq!(ExportFormat::from(OutputFormat::Json), ExportFormat::Json);
        assert_eq!(ExportFormat::from(OutputFormat::Png), ExportFormat::Png);
    }

    #[test]
    fn test_resolve_rejects_unknown_and_empty() {
        let registry = Registry::new();
        let args = |ids: &[&str]| RenderArgs {
            ids: ids.iter().map(ToString::to_string).collect(),
            all: false,
            out: PathBuf::from("out"),
            format: OutputFormat::Svg,
            theme: None,
            scale: 1.0,
        };

        let err = RenderConfig::resolve(args(&["settings"]), &registry).expect_err("unknown");
        assert!(err.to_string().contains("settings"));
        assert!(RenderConfig::resolve(args(&[]), &registry).is_err());

        let all = RenderConfig::resolve(
            RenderArgs {
                all: true,
                ..args(&[])
            },
            &registry,
        )
        .expect("all");
        assert_eq!(all.ids.len(), 12);
    }
}
