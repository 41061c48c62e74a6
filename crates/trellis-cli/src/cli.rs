//! Command-line interface for the trellis utility
//!
//! Loads a diagram model manifest, renders it to PlantUML source files, and
//! optionally previews the result through a local `plantuml.jar`.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use trellis::core::logging::init_logging;
use trellis::prelude::*;
use trellis::preview;

use crate::manifest;

/// Trellis - render class and package diagram models as PlantUML source
#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Render class and package diagram models as PlantUML source text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a model manifest to PlantUML source files
    Render {
        /// JSON model manifest describing the diagram definitions
        #[arg(short, long)]
        model: PathBuf,

        /// Directory the diagram files are written into
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Rendering strategy
        #[arg(long, value_enum, default_value_t = StrategyChoice::Template)]
        strategy: StrategyChoice,

        /// Render images through a local plantuml.jar after writing
        #[arg(long)]
        preview: bool,
    },

    /// Run already-rendered diagram files through a local plantuml.jar
    Preview {
        /// PlantUML source files to render
        files: Vec<PathBuf>,
    },
}

/// Rendering strategy selection
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum StrategyChoice {
    /// Flat stream template renderer
    #[default]
    Template,
    /// Node/edge printer protocol renderer
    Printer,
}

/// Main CLI application
pub struct TrellisApp;

impl TrellisApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags.
        let log_level_str = std::env::var("TRELLIS_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("TRELLIS_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Trellis v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                model,
                out_dir,
                strategy,
                preview,
            } => self.render_command(model, out_dir, strategy, preview, cli.verbose),
            Commands::Preview { files } => self.preview_command(files, cli.verbose),
        }
    }

    /// Handle the render command
    fn render_command(
        &self,
        model: PathBuf,
        out_dir: Option<PathBuf>,
        strategy: StrategyChoice,
        preview: bool,
        verbose: bool,
    ) -> Result<()> {
        let manifest = manifest::load(&model)?;
        let (diagrams, analysis) = manifest.into_diagrams();
        let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
        tracing::debug!(model = %model.display(), out_dir = %out_dir.display(), "loaded model manifest");

        if verbose {
            eprintln!("Loaded {} diagram definition(s)", diagrams.len());
        }

        let paths = self.render_diagrams(&diagrams, &analysis, &out_dir, strategy)?;
        for path in &paths {
            println!("{}", path.display());
        }

        if preview {
            let images = trellis::preview::render_locally(&paths);
            if verbose {
                eprintln!("Rendered {} image(s)", images.len());
            }
        }

        Ok(())
    }

    fn render_diagrams(
        &self,
        diagrams: &[Diagram],
        analysis: &dyn Analysis,
        out_dir: &Path,
        strategy: StrategyChoice,
    ) -> Result<Vec<PathBuf>> {
        match strategy {
            StrategyChoice::Template => {
                let renderer = TemplateRenderer::with_out_dir(out_dir);
                Ok(renderer.render_project(diagrams, analysis)?)
            }
            StrategyChoice::Printer => {
                // The printer protocol covers class diagrams; a package
                // diagram in the pair still renders through the template.
                let printer = PrinterRenderer::with_out_dir(out_dir);
                match diagrams {
                    [] => Err(RenderError::EmptyProject.into()),
                    [class_diagram] => {
                        Ok(vec![printer.write_class_diagram(class_diagram, analysis)?])
                    }
                    [package_diagram, class_diagram, ..] => {
                        let template = TemplateRenderer::with_out_dir(out_dir);
                        Ok(vec![
                            template.write_package_diagram(package_diagram)?,
                            printer.write_class_diagram(class_diagram, analysis)?,
                        ])
                    }
                }
            }
        }
    }

    /// Handle the preview command
    fn preview_command(&self, files: Vec<PathBuf>, verbose: bool) -> Result<()> {
        let images = preview::render_locally(&files);
        if verbose {
            eprintln!("Rendered {} image(s)", images.len());
        }
        for image in &images {
            println!("{}", image.display());
        }
        Ok(())
    }
}

impl Default for TrellisApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing_render_command() {
        let args = vec![
            "trellis",
            "render",
            "--model",
            "model.json",
            "--out-dir",
            "out",
            "--strategy",
            "printer",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Render {
                model,
                out_dir,
                strategy,
                preview,
            } => {
                assert_eq!(model.to_string_lossy(), "model.json");
                assert_eq!(out_dir.unwrap().to_string_lossy(), "out");
                assert_eq!(strategy, StrategyChoice::Printer);
                assert!(!preview);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_parsing_strategy_default() {
        let args = vec!["trellis", "render", "--model", "model.json"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Render { strategy, .. } => {
                assert_eq!(strategy, StrategyChoice::Template);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_parsing_preview_command() {
        let args = vec!["trellis", "preview", "a_classes.txt", "b_classes.txt"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Preview { files } => {
                assert_eq!(files.len(), 2);
            }
            _ => panic!("Expected Preview command"),
        }
    }

    #[test]
    fn test_verbose_flag() {
        let args = vec!["trellis", "--verbose", "preview"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_render_command_writes_files() {
        let dir = tempdir().unwrap();
        let model_path = dir.path().join("model.json");
        fs::write(
            &model_path,
            r#"{
                "title": "demo",
                "modules": ["demo"],
                "classes": [{"name": "demo.Widget", "attributes": ["x : int"]}]
            }"#,
        )
        .unwrap();

        let app = TrellisApp::new();
        app.render_command(
            model_path,
            Some(dir.path().to_path_buf()),
            StrategyChoice::Template,
            false,
            false,
        )
        .unwrap();

        let packages = fs::read_to_string(dir.path().join("demo_packages.txt")).unwrap();
        assert!(packages.contains("package demo {"));

        let classes = fs::read_to_string(dir.path().join("demo_classes.txt")).unwrap();
        assert!(classes.contains("class demo.Widget {"));
        assert!(classes.contains("    +x\n"));
    }

    #[test]
    fn test_render_command_printer_strategy() {
        let dir = tempdir().unwrap();
        let model_path = dir.path().join("model.json");
        fs::write(
            &model_path,
            r#"{
                "title": "demo",
                "classes": [
                    {"name": "demo.Base"},
                    {"name": "demo.Widget"}
                ],
                "relations": [
                    {"kind": "specialization", "from": "demo.Widget", "to": "demo.Base"}
                ]
            }"#,
        )
        .unwrap();

        let app = TrellisApp::new();
        app.render_command(
            model_path,
            Some(dir.path().to_path_buf()),
            StrategyChoice::Printer,
            false,
            false,
        )
        .unwrap();

        let classes = fs::read_to_string(dir.path().join("demo_classes.txt")).unwrap();
        // Printer labels use basenames.
        assert!(classes.contains("class Base \n"));
        assert!(classes.contains("Base <|-- Widget\n"));
    }

    #[test]
    fn test_render_command_missing_manifest_fails() {
        let app = TrellisApp::new();
        let result = app.render_command(
            PathBuf::from("/nonexistent/model.json"),
            None,
            StrategyChoice::Template,
            false,
            false,
        );
        assert!(result.is_err());
    }
}
