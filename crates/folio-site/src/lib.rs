//! The portfolio site: content, the home and projects pages, a host that
//! mounts them one at a time, and static export.

pub mod content;
pub mod export;
pub mod host;
pub mod pages {
    pub mod home;
    pub mod projects;
}

pub use content::{
    ArticleMeta, ContentError, ContentId, ContentItem, ContentList, Profile, SiteContent,
};
pub use export::{ExportError, ExportOptions, export_site, render_page};
pub use host::{HOME_PATH, Host, HostError, Mounted, PROJECTS_PATH, Route};
pub use pages::home::HomePage;
pub use pages::projects::ProjectsPage;
