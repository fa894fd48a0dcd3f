use folio_core::*;
use folio_ui::*;

use crate::content::{ContentError, ContentId, ContentItem, SiteContent};
use crate::host::HOME_PATH;

pub fn project_key(id: ContentId) -> String {
    format!("project:{id}")
}

/// Article list: the first project is featured, the rest are listed below it
/// and expand inline when clicked. A second click collapses the card.
pub struct ProjectsPage {
    scope: Scope,
    featured: ContentItem,
    rest: Vec<ContentItem>,
    expanded: Selection<ContentId>,
}

impl ProjectsPage {
    /// Fails with `ContentError::EmptyList` when there is no project to feature.
    pub fn mount(content: &SiteContent) -> Result<Self, ContentError> {
        let (featured, rest) = content.projects.split_first()?;
        let expanded = Selection::new(rest.iter().map(|p| p.id), SelectionPolicy::Toggle);
        log::debug!("projects mounted: featured {}, {} more", featured.id, rest.len());

        let scope = Scope::named("projects");
        {
            let expanded = expanded.clone();
            scope.add_disposer(move || {
                expanded.dismiss();
            });
        }

        Ok(Self {
            scope,
            featured: featured.clone(),
            rest: rest.to_vec(),
            expanded,
        })
    }

    pub fn unmount(self) {
        self.scope.dispose();
        log::debug!("projects unmounted");
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn featured(&self) -> &ContentItem {
        &self.featured
    }

    pub fn rest(&self) -> &[ContentItem] {
        &self.rest
    }

    /// Expands `id`, or collapses it if it is already expanded.
    pub fn toggle(&self, id: ContentId) -> bool {
        self.expanded.activate(id)
    }

    pub fn is_expanded(&self, id: ContentId) -> bool {
        self.expanded.is_active(id)
    }

    pub fn expanded(&self) -> Option<ContentId> {
        self.expanded.active()
    }

    pub fn selection(&self) -> &Selection<ContentId> {
        &self.expanded
    }

    pub fn view(&self) -> View {
        let featured = &self.featured;
        let cards: Vec<View> = self.rest.iter().map(|p| self.project_card(p)).collect();

        Page(Modifier::new().class("projects")).child(
            Main(Modifier::new()).child((
                Section("latest", Modifier::new()).child((
                    Text("Latest Projects").style(TextStyle::Heading),
                    Card(Modifier::new().class("featured")).child((
                        Image(&featured.image, &featured.title),
                        Text(&featured.title).style(TextStyle::Display),
                        Text(&featured.description),
                        byline(featured),
                    )),
                )),
                Section("top", Modifier::new()).child((
                    Text("Top Projects").style(TextStyle::Heading),
                    Column(Modifier::new()).child(cards),
                )),
                Link(HOME_PATH, "Back to Home").with(Modifier::new().class("back")),
            )),
        )
    }

    fn project_card(&self, item: &ContentItem) -> View {
        let id = item.id;
        let open = self.expanded.is_active(id);
        let expanded = self.expanded.clone();

        Card(
            Modifier::new()
                .key(project_key(id))
                .class_if(open, "expanded")
                .clickable(move || {
                    expanded.activate(id);
                }),
        )
        .child(
            Row(Modifier::new()).child((
                Image(&item.image, &item.title).size(96, 96),
                Column(Modifier::new()).child((
                    Text(&item.title).style(TextStyle::Title),
                    byline(item),
                    open.then(|| Text(&item.description)),
                )),
            )),
        )
    }
}

fn byline(item: &ContentItem) -> Option<View> {
    item.byline().map(|line| Text(line).style(TextStyle::Caption))
}
