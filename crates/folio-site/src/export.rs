//! Pre-renders every route to static HTML.

use std::path::{Path, PathBuf};

use folio_core::Timers;
use folio_ui::{Viewport, html};
use thiserror::Error;

use crate::content::SiteContent;
use crate::host::{Host, HostError, Route};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportOptions {
    /// Scroll offset the pages are rendered at.
    pub scroll_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            viewport_height: 800.0,
            content_height: 4000.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Mounts `route`, applies the scroll offset and renders a full document.
pub fn render_page(
    content: &SiteContent,
    route: Route,
    opts: &ExportOptions,
) -> Result<String, ExportError> {
    let viewport = Viewport::new(opts.viewport_height, opts.content_height);
    let mut host = Host::new(content.clone(), viewport, Timers::new());
    host.open(route.path())?;
    host.viewport().scroll_to(opts.scroll_y);

    let title = format!("{} | {}", content.profile.name, route.title());
    let doc = host
        .frame()
        .map(|frame| html::document(&title, &frame.root))
        .unwrap_or_default();
    Ok(doc)
}

/// Writes one `index.html` per route under `out_dir`. Returns the paths
/// written, in route order.
pub fn export_site(
    content: &SiteContent,
    out_dir: &Path,
    opts: &ExportOptions,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::with_capacity(Route::ALL.len());
    for route in Route::ALL {
        let doc = render_page(content, route, opts)?;
        let path = out_dir.join(route.output_file());
        write_file(&path, &doc)?;
        log::info!("wrote {} ({} bytes)", path.display(), doc.len());
        written.push(path);
    }
    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    let io = |source: std::io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io)?;
    }
    std::fs::write(path, contents).map_err(io)
}
