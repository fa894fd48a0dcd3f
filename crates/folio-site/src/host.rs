//! Mounts one page at a time and feeds it input.
//!
//! Opening a path disposes the scope of the page that was mounted before it,
//! so its scroll listener and showcase timer are gone before the next page
//! subscribes. The scroll offset is reset to the top on every navigation.

use std::rc::Rc;

use folio_core::*;
use folio_ui::Viewport;
use thiserror::Error;

use crate::content::{ContentError, SiteContent};
use crate::pages::home::HomePage;
use crate::pages::projects::ProjectsPage;

pub const HOME_PATH: &str = "/";
pub const PROJECTS_PATH: &str = "/projects";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Projects,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Projects];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => HOME_PATH,
            Route::Projects => PROJECTS_PATH,
        }
    }

    /// Ignores fragment, query and trailing slash: `/projects/#top` is
    /// `Projects`.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['#', '?']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => Some(Route::Home),
            "/projects" => Some(Route::Projects),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Projects => "Projects",
        }
    }

    /// Where the pre-rendered page lives, relative to the output directory.
    pub fn output_file(self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::Projects => "projects/index.html",
        }
    }
}

pub enum Mounted {
    Home(HomePage),
    Projects(ProjectsPage),
}

impl Mounted {
    pub fn route(&self) -> Route {
        match self {
            Mounted::Home(_) => Route::Home,
            Mounted::Projects(_) => Route::Projects,
        }
    }

    pub fn view(&self) -> View {
        match self {
            Mounted::Home(page) => page.view(),
            Mounted::Projects(page) => page.view(),
        }
    }

    fn unmount(self) {
        match self {
            Mounted::Home(page) => page.unmount(),
            Mounted::Projects(page) => page.unmount(),
        }
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no page at {0:?}")]
    NotFound(String),

    #[error(transparent)]
    Content(#[from] ContentError),
}

pub struct Host {
    content: Rc<SiteContent>,
    viewport: Viewport,
    timers: Timers,
    scheduler: Scheduler,
    mounted: Option<Mounted>,
}

impl Host {
    pub fn new(content: SiteContent, viewport: Viewport, timers: Timers) -> Self {
        Self {
            content: Rc::new(content),
            viewport,
            timers,
            scheduler: Scheduler::new(),
            mounted: None,
        }
    }

    /// Unmounts the current page and mounts the one at `path`.
    ///
    /// An unknown path keeps the current page. A page that fails to mount
    /// leaves nothing mounted.
    pub fn open(&mut self, path: &str) -> Result<Route, HostError> {
        let route = Route::from_path(path).ok_or_else(|| HostError::NotFound(path.to_string()))?;
        self.close();
        self.viewport.scroll_to(0.0);

        let page = match route {
            Route::Home => Mounted::Home(HomePage::mount(
                self.content.clone(),
                &self.viewport,
                &self.timers,
            )),
            Route::Projects => Mounted::Projects(ProjectsPage::mount(&self.content)?),
        };
        log::info!("opened {}", route.path());
        self.mounted = Some(page);
        Ok(route)
    }

    pub fn close(&mut self) {
        if let Some(page) = self.mounted.take() {
            page.unmount();
        }
    }

    pub fn route(&self) -> Option<Route> {
        self.mounted.as_ref().map(Mounted::route)
    }

    pub fn home(&self) -> Option<&HomePage> {
        match &self.mounted {
            Some(Mounted::Home(page)) => Some(page),
            _ => None,
        }
    }

    pub fn projects(&self) -> Option<&ProjectsPage> {
        match &self.mounted {
            Some(Mounted::Projects(page)) => Some(page),
            _ => None,
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Composes the mounted page from its current state.
    pub fn frame(&mut self) -> Option<Frame> {
        let page = self.mounted.as_ref()?;
        Some(self.scheduler.compose(|| page.view()))
    }

    /// Scroll and resize go to the viewport; pointer events go to the view
    /// keyed by the event. Returns whether anything handled the event.
    pub fn dispatch(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Scroll { y } => {
                self.viewport.scroll_to(*y);
                true
            }
            InputEvent::Resize {
                viewport_height,
                content_height,
            } => {
                self.viewport.resize(*viewport_height, *content_height);
                true
            }
            _ => match self.frame() {
                Some(frame) => frame.dispatch(event),
                None => {
                    log::warn!("no page mounted; dropping {event:?}");
                    false
                }
            },
        }
    }

    /// Runs due timers. Returns how many callbacks fired.
    pub fn tick(&self) -> usize {
        self.timers.poll()
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_from_paths() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/#portfolio"), Some(Route::Home));
        assert_eq!(Route::from_path("/projects"), Some(Route::Projects));
        assert_eq!(Route::from_path("/projects/?page=2"), Some(Route::Projects));
        assert_eq!(Route::from_path("/pro"), None);
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn unknown_path_leaves_page_mounted() {
        let viewport = Viewport::new(800.0, 4000.0);
        let mut host = Host::new(SiteContent::builtin(), viewport, Timers::new());
        host.open("/").unwrap();
        assert!(matches!(host.open("/blog"), Err(HostError::NotFound(_))));
        assert_eq!(host.route(), Some(Route::Home));
    }
}
