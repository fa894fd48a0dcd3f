use std::rc::Rc;

use folio_core::*;
use folio_ui::*;
use web_time::Duration;

use crate::content::{ContentId, ContentItem, SiteContent};
use crate::host::PROJECTS_PATH;

pub const SCROLL_THRESHOLD_PX: f32 = 50.0;
pub const SHOWCASE_INTERVAL: Duration = Duration::from_secs(5);
pub const SUMMARY_CHARS: usize = 100;
pub const HOVER_SCALE: f32 = 1.05;

pub const MENU_TOGGLE_KEY: &str = "menu-toggle";
pub const DETAIL_CLOSE_KEY: &str = "detail-close";
pub const SHOWCASE_PREV_KEY: &str = "showcase-prev";
pub const SHOWCASE_NEXT_KEY: &str = "showcase-next";

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "#home"),
    ("Portfolio", "#portfolio"),
    ("Projects", PROJECTS_PATH),
    ("Research", "#research"),
    ("CONTACT", "#contact"),
];

pub fn portfolio_key(id: ContentId) -> String {
    format!("portfolio:{id}")
}

/// Hero fades out over the first fifth of the page.
pub fn hero_opacity_curve() -> Keyframes<f32> {
    Keyframes::between((0.0, 1.0), (0.2, 0.0))
}

/// Portrait grows by 20% over the first half of the page.
pub fn portrait_scale_curve() -> Keyframes<f32> {
    Keyframes::between((0.0, 1.0), (0.5, 1.2))
}

/// Home page: header, hero, portfolio grid, research showcase, contact.
///
/// Portfolio cards open a detail dialog. Clicking the open card again keeps
/// it open; only the close button dismisses it.
pub struct HomePage {
    content: Rc<SiteContent>,
    scope: Scope,
    header: ScrollThreshold,
    hero_opacity: ScrollLinked<f32>,
    portrait_scale: ScrollLinked<f32>,
    menu_open: Signal<bool>,
    hovered: Hover<ContentId>,
    selected: Selection<ContentId>,
    showcase: Carousel,
}

impl HomePage {
    pub fn mount(content: Rc<SiteContent>, viewport: &Viewport, timers: &Timers) -> Self {
        let scope = Scope::named("home");
        let menu_open = signal(false);
        let hovered = Hover::new();
        let selected = Selection::new(content.portfolio.ids(), SelectionPolicy::Replace);
        let showcase = Carousel::new(content.research.len(), SHOWCASE_INTERVAL, timers);

        let header = scope.run(|| {
            let header = ScrollThreshold::attach(viewport, SCROLL_THRESHOLD_PX);
            showcase.start();
            header
        });

        // UI state does not outlive the page.
        {
            let scrolled = header.signal();
            let menu_open = menu_open.clone();
            let hovered = hovered.clone();
            let selected = selected.clone();
            let slide = showcase.signal();
            scope.add_disposer(move || {
                scrolled.set_if_changed(false);
                menu_open.set_if_changed(false);
                hovered.clear();
                selected.dismiss();
                slide.set_if_changed(0);
            });
        }

        log::debug!(
            "home mounted: {} portfolio items, {} slides",
            content.portfolio.len(),
            content.research.len()
        );

        Self {
            content,
            scope,
            header,
            hero_opacity: ScrollLinked::new(viewport, hero_opacity_curve()),
            portrait_scale: ScrollLinked::new(viewport, portrait_scale_curve()),
            menu_open,
            hovered,
            selected,
            showcase,
        }
    }

    /// Releases the scroll listener and the showcase timer.
    pub fn unmount(self) {
        self.scope.dispose();
        log::debug!("home unmounted");
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn is_scrolled(&self) -> bool {
        self.header.is_scrolled()
    }

    pub fn scrolled_signal(&self) -> Signal<bool> {
        self.header.signal()
    }

    pub fn hero_opacity(&self) -> f32 {
        self.hero_opacity.get()
    }

    pub fn portrait_scale(&self) -> f32 {
        self.portrait_scale.get()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn menu_signal(&self) -> Signal<bool> {
        self.menu_open.clone()
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn hover(&self) -> &Hover<ContentId> {
        &self.hovered
    }

    pub fn selection(&self) -> &Selection<ContentId> {
        &self.selected
    }

    pub fn selected_item(&self) -> Option<&ContentItem> {
        self.selected
            .active()
            .and_then(|id| self.content.portfolio.get(id))
    }

    pub fn showcase(&self) -> &Carousel {
        &self.showcase
    }

    pub fn current_slide(&self) -> Option<&ContentItem> {
        self.content.research.iter().nth(self.showcase.current())
    }

    pub fn view(&self) -> View {
        let profile = &self.content.profile;
        Page(Modifier::new().class("home")).child((
            self.header_view(),
            Main(Modifier::new()).child((
                self.hero_view(),
                self.portfolio_view(),
                self.showcase_view(),
                self.contact_view(),
            )),
            Footer(Modifier::new()).child(
                Text(format!(
                    "© {} {}. All rights reserved.",
                    profile.copyright_year, profile.name
                ))
                .style(TextStyle::Caption),
            ),
            self.detail_view(),
        ))
    }

    fn header_view(&self) -> View {
        let open = self.menu_open.get();
        let toggle = {
            let menu_open = self.menu_open.clone();
            move || menu_open.update(|o| *o = !*o)
        };

        Header(
            Modifier::new()
                .class("site-header")
                .class_if(self.header.is_scrolled(), "scrolled"),
        )
        .child((
            Nav(Modifier::new()).child((
                Text(&self.content.profile.brand).style(TextStyle::Brand),
                nav_links("desktop-nav"),
                Button(if open { "Close" } else { "Menu" }, toggle).with(
                    Modifier::new()
                        .key(MENU_TOGGLE_KEY)
                        .class("menu-toggle")
                        .label(if open { "Close menu" } else { "Open menu" }),
                ),
            )),
            open.then(|| nav_links("mobile-nav")),
        ))
    }

    fn hero_view(&self) -> View {
        let profile = &self.content.profile;
        Section(
            "home",
            Modifier::new().class("hero").alpha(self.hero_opacity.get()),
        )
        .child((
            Text(profile.headline.join("\n")).style(TextStyle::Display),
            Box(Modifier::new().class("portrait").scale(self.portrait_scale.get()))
                .child(Image(&profile.portrait, &profile.portrait_alt).size(300, 400)),
        ))
    }

    fn portfolio_view(&self) -> View {
        let cards: Vec<View> = self
            .content
            .portfolio
            .iter()
            .map(|item| self.portfolio_card(item))
            .collect();
        Section("portfolio", Modifier::new()).child((
            Text("Portfolio").style(TextStyle::Heading),
            Grid(3, Modifier::new()).child(cards),
        ))
    }

    fn portfolio_card(&self, item: &ContentItem) -> View {
        let id = item.id;
        let hovered = self.hovered.is_hovered(id);
        let mut m = Modifier::new()
            .key(portfolio_key(id))
            .class_if(hovered, "hovered")
            .clickable({
                let selected = self.selected.clone();
                move || {
                    selected.activate(id);
                }
            })
            .on_pointer_enter({
                let h = self.hovered.clone();
                move || h.enter(id)
            })
            .on_pointer_leave({
                let h = self.hovered.clone();
                move || h.leave(id)
            });
        if hovered {
            m = m.scale(HOVER_SCALE);
        }

        Card(m).child((
            Image(&item.image, &item.title).size(300, 200),
            Text(&item.title).style(TextStyle::Title),
            Text(item.summary(SUMMARY_CHARS)).style(TextStyle::Caption),
        ))
    }

    fn showcase_view(&self) -> View {
        let index = self.showcase.current();
        let slides: Vec<View> = self
            .content
            .research
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                Box(Modifier::new().class("slide").class_if(i == index, "active")).child((
                    Image(&slide.image, &slide.title),
                    Text(&slide.title).style(TextStyle::Heading),
                ))
            })
            .collect();

        let prev = {
            let c = self.showcase.clone();
            move || c.prev()
        };
        let next = {
            let c = self.showcase.clone();
            move || c.next()
        };

        Section("research", Modifier::new().class("showcase")).child((
            Box(Modifier::new().class("slides")).child(slides),
            Button("Previous", prev).with(
                Modifier::new()
                    .key(SHOWCASE_PREV_KEY)
                    .label("Previous slide"),
            ),
            Button("Next", next).with(Modifier::new().key(SHOWCASE_NEXT_KEY).label("Next slide")),
        ))
    }

    fn contact_view(&self) -> View {
        Section("contact", Modifier::new()).child((
            Text("Get in Touch").style(TextStyle::Heading),
            Link(&self.content.profile.contact_href, "Contact Me").with(Modifier::new().class("cta")),
        ))
    }

    fn detail_view(&self) -> View {
        let item = self.selected_item();
        let close = {
            let selected = self.selected.clone();
            move || {
                selected.dismiss();
            }
        };
        Dialog(
            item.is_some(),
            item.map(|i| i.title.clone()).unwrap_or_default(),
        )
        .child(item.map(|item| {
            Column(Modifier::new()).child((
                Text(&item.title).style(TextStyle::Title),
                Text(&item.description),
                Image(&item.image, &item.title).size(400, 300),
                Button("Close", close).with(Modifier::new().key(DETAIL_CLOSE_KEY)),
            ))
        }))
    }
}

fn nav_links(class: &str) -> View {
    List(
        Modifier::new().class(class),
        NAV_LINKS
            .iter()
            .map(|&(label, href)| {
                Link(href, label).with(Modifier::new().class_if(href == "#contact", "cta"))
            })
            .collect(),
    )
}
