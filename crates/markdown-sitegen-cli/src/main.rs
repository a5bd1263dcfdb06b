//! `sitegen` - builds a static site from markdown.
//!
//! Provides commands for:
//! - `build`: copy static assets and render every content page
//! - `init`: write a default `sitegen.toml`
//! - `render`: print the HTML of a single markdown file

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{io, markdown_to_html};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sitegen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy static assets and generate every page into the output directory.
    Build(BuildArgs),
    /// Write a config file with default settings.
    Init {
        /// Path of the config file to create.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the rendered HTML body of one markdown file.
    Render {
        /// Markdown file to render.
        file: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct BuildArgs {
    /// Config file (defaults to ./sitegen.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory of markdown sources.
    #[arg(long)]
    content: Option<PathBuf>,
    /// Directory of static assets.
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,
    /// Output directory, cleared before the build.
    #[arg(long)]
    output: Option<PathBuf>,
    /// HTML page template.
    #[arg(long)]
    template: Option<PathBuf>,
}

impl BuildArgs {
    /// Loads the config file if present and applies command-line overrides.
    fn resolve(self) -> Result<Config> {
        let config_path = self.config.unwrap_or_else(Config::config_path);
        let mut config = match Config::load_from_path(&config_path)? {
            Some(config) => {
                log::info!("Using config {}", config_path.display());
                config
            }
            None => {
                log::info!("No config at {}, using defaults", config_path.display());
                Config::default()
            }
        };

        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(template) = self.template {
            config.template_path = template;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Commands::Build(args) => build(&args.resolve()?),
        Commands::Init { config } => init(&config.unwrap_or_else(Config::config_path)),
        Commands::Render { file } => {
            println!("{}", render(&file)?);
            Ok(())
        }
    }
}

fn build(config: &Config) -> Result<()> {
    let copied = io::copy_static(&config.static_dir, &config.output_dir).with_context(|| {
        format!(
            "copying static assets from {}",
            config.static_dir.display()
        )
    })?;
    let pages = io::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
    )
    .with_context(|| format!("generating pages from {}", config.content_dir.display()))?;

    log::info!(
        "Built {} pages and {copied} static files into {}",
        pages.len(),
        config.output_dir.display()
    );
    Ok(())
}

fn init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }
    Config::default()
        .save_to_path(config_path)
        .with_context(|| format!("writing {}", config_path.display()))?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn render(file: &Path) -> Result<String> {
    let markdown = io::read_file(file)?;
    markdown_to_html(&markdown).with_context(|| format!("rendering {}", file.display()))
}
