use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{InputEvent, Timers};
use folio_site::{ExportOptions, Host, SiteContent, export_site};
use folio_ui::Viewport;

#[derive(Parser)]
#[command(name = "folio", about = "Render and inspect the portfolio site")]
struct Cli {
    /// JSON content document; the built-in content is used when omitted
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pre-render every page to static HTML
    Render {
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,

        /// Scroll offset to render the pages at, in pixels
        #[arg(long, default_value_t = 0.0)]
        scroll_y: f32,

        #[arg(long, default_value_t = 800.0)]
        viewport_height: f32,

        #[arg(long, default_value_t = 4000.0)]
        content_height: f32,
    },

    /// Print the content document as JSON
    DumpContent,

    /// Mount a page and log its state
    Inspect {
        /// Page path, e.g. `/` or `/projects`
        #[arg(default_value = "/")]
        path: String,

        #[arg(long, default_value_t = 0.0)]
        scroll_y: f32,
    },
}

fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    match path {
        Some(path) => SiteContent::load(path)
            .with_context(|| format!("failed to load content from {}", path.display())),
        None => Ok(SiteContent::builtin()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let content = load_content(cli.content.as_deref())?;

    match cli.command {
        Commands::Render {
            out,
            scroll_y,
            viewport_height,
            content_height,
        } => {
            let opts = ExportOptions {
                scroll_y,
                viewport_height,
                content_height,
            };
            let written = export_site(&content, &out, &opts)
                .with_context(|| format!("failed to export site to {}", out.display()))?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Commands::DumpContent => {
            println!("{}", content.to_json_pretty()?);
        }
        Commands::Inspect { path, scroll_y } => inspect(content, &path, scroll_y)?,
    }
    Ok(())
}

fn inspect(content: SiteContent, path: &str, scroll_y: f32) -> Result<()> {
    let defaults = ExportOptions::default();
    let viewport = Viewport::new(defaults.viewport_height, defaults.content_height);
    let mut host = Host::new(content, viewport, Timers::new());
    let route = host.open(path).with_context(|| format!("failed to open {path}"))?;
    host.dispatch(&InputEvent::scroll(scroll_y));

    println!("route: {}", route.path());
    println!(
        "scroll: {:.1} / {:.1}",
        host.viewport().offset(),
        host.viewport().max_offset()
    );
    if let Some(home) = host.home() {
        println!("header scrolled: {}", home.is_scrolled());
        println!("hero opacity: {:.3}", home.hero_opacity());
        println!("portrait scale: {:.3}", home.portrait_scale());
        if let Some(slide) = home.current_slide() {
            println!(
                "showcase: {} / {} ({})",
                home.showcase().current() + 1,
                home.showcase().len(),
                slide.title
            );
        }
    }
    if let Some(projects) = host.projects() {
        println!("featured: {}", projects.featured().title);
        println!("listed: {}", projects.rest().len());
    }
    if let Some(frame) = host.frame() {
        let keys: Vec<&str> = frame.hit_regions.iter().map(|r| r.key.as_str()).collect();
        log::info!("{} interactive regions: {}", keys.len(), keys.join(", "));
    }
    Ok(())
}
