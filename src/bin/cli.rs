//! Screening Dashboard CLI
//!
//! Command-line interface for offline dashboard operations:
//! - List sections
//! - Render one section as HTML, JSON or text
//! - Export a static site
//! - Validate the datasets
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use screening_dashboard::config::{generate_default_config, Config};
use screening_dashboard::data::DatasetRegistry;
use screening_dashboard::export::export_site;
use screening_dashboard::logging;
use screening_dashboard::render::{
    render_page, render_text, route_for, NavMode, OutputFormat, PageOptions, Renderer,
};
use screening_dashboard::section::SectionRouter;

#[derive(Parser)]
#[command(name = "dashboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Blood pressure screening dashboard tools")]
#[command(long_about = "Render, export and check the 2023 NHIS blood pressure screening dashboard\nwithout running the server.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short = 'c', long = "config", global = true)]
    pub config_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the dashboard sections in menu order
    Sections,

    /// Render one section
    Render {
        /// Section id (default: configured default section). Unknown ids fall back.
        section: Option<String>,
        /// Output format (html, json, text)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export every section as static HTML
    Export {
        /// Output directory
        #[arg(short, long, default_value = "dashboard_site")]
        dir: PathBuf,
    },

    /// Check the datasets for internal consistency
    Validate,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let load = match &cli.config_file {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load_default(),
    };
    logging::init(&load.config.logging);
    load.log();
    let config = load.into_config();

    let registry = DatasetRegistry::national_2023();

    match cli.command {
        Commands::Sections => {
            let router = SectionRouter::with_default(config.dashboard.default_section_id());

            println!("{:<16} | {:<24} | Datasets", "Id", "Label");
            println!("{}", "-".repeat(64));
            for section in router.sections() {
                let route = route_for(section.id);
                let datasets: Vec<&str> = route.datasets.iter().map(|d| d.as_str()).collect();
                let marker = if router.is_active(section.id) { " *" } else { "" };
                println!(
                    "{:<16} | {:<24} | {}{}",
                    section.id,
                    section.label,
                    datasets.join(", "),
                    marker
                );
            }
        }

        Commands::Render {
            section,
            format,
            output,
        } => {
            let mut router = SectionRouter::with_default(config.dashboard.default_section_id());
            if let Some(id) = section.as_deref() {
                let selection = router.select(id);
                if selection.fallback {
                    eprintln!(
                        "Unknown section '{}', showing {}",
                        id, selection.active
                    );
                }
            }

            let panel = Renderer::new(&registry).render(&router);
            let rendered = match format {
                OutputFormat::Html => {
                    let options = PageOptions {
                        title: config.dashboard.title.clone(),
                        subtitle: config.dashboard.subtitle.clone(),
                        nav: NavMode::Links,
                    };
                    render_page(&panel, registry.source(), &options)
                }
                OutputFormat::Json => serde_json::to_string_pretty(&panel)?,
                OutputFormat::Text => render_text(&panel),
            };

            write_output(output.as_deref(), &rendered)?;
        }

        Commands::Export { dir } => {
            let options = PageOptions {
                title: config.dashboard.title.clone(),
                subtitle: config.dashboard.subtitle.clone(),
                ..PageOptions::default()
            };
            let manifest = export_site(
                &registry,
                &dir,
                &options,
                config.dashboard.default_section_id(),
            )
            .with_context(|| format!("export to {} failed", dir.display()))?;

            println!("Exported {} sections to {:?}", manifest.pages.len(), dir);
            for page in &manifest.pages {
                println!("  {:<16} {}", page.section, page.file);
            }
            println!("  {:<16} index.html", manifest.default_section);
        }

        Commands::Validate => match registry.validate() {
            Ok(()) => {
                println!("All {} datasets are consistent", registry.names().len());
                println!(
                    "  Sample: n={} ({} {})",
                    registry.overview().total_records,
                    registry.source().survey,
                    registry.source().year
                );
            }
            Err(e) => {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Written to {:?}", path);
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
