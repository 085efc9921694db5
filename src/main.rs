use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{self, filter::EnvFilter};

use refactoring_cookbook::{CatalogLoader, CodeLayout, MarkdownRenderer, RenderConfig};

/// Refactoring Cookbook - render before/after technique catalogs as Markdown
#[derive(Parser, Debug)]
#[command(name = "cookbook-render")]
#[command(about = "Render a refactoring cookbook from YAML or JSON technique records")]
#[command(version)]
struct Args {
    /// Source file or directory of technique records
    #[arg(
        short = 's',
        long = "source",
        default_value = "cookbook",
        value_name = "PATH"
    )]
    source: PathBuf,

    /// Output file (default: standard output)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Document title, used when the source does not set one
    #[arg(long = "title")]
    title: Option<String>,

    /// How the Before/After code pair is laid out
    #[arg(long = "layout", value_enum, default_value_t = LayoutArg::SideBySide)]
    layout: LayoutArg,

    /// Code language tag for entries that do not name one
    #[arg(long = "code-language", default_value = "cpp")]
    code_language: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutArg {
    SideBySide,
    Stacked,
}

impl From<LayoutArg> for CodeLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::SideBySide => CodeLayout::SideBySide,
            LayoutArg::Stacked => CodeLayout::Stacked,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the document
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!("Rendering cookbook with args: {:?}", args);

    let catalog = CatalogLoader::new()
        .load_path(&args.source)
        .with_context(|| format!("failed to load cookbook from {}", args.source.display()))?;

    let renderer = MarkdownRenderer::new(create_config_from_args(&args));
    let document = renderer.render(&catalog)?;

    match &args.output {
        Some(path) => std::fs::write(path, &document)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout().lock().write_all(document.as_bytes())?,
    }

    tracing::info!("Rendered {} techniques", catalog.len());
    Ok(())
}

/// Create a RenderConfig from command line arguments
fn create_config_from_args(args: &Args) -> RenderConfig {
    let mut config = RenderConfig {
        layout: args.layout.into(),
        code_language: args.code_language.clone(),
        ..RenderConfig::default()
    };
    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    config
}
