use std::rc::Rc;

use folio_core::{InputEvent, ManualClock, Timers};
use folio_site::pages::home::{
    DETAIL_CLOSE_KEY, HOVER_SCALE, MENU_TOGGLE_KEY, SHOWCASE_INTERVAL, SHOWCASE_NEXT_KEY,
    portfolio_key,
};
use folio_site::pages::projects::project_key;
use folio_site::{ContentError, ContentList, HomePage, Host, HostError, Route, SiteContent};
use folio_ui::Viewport;
use web_time::{Duration, Instant};

struct Harness {
    clock: Rc<ManualClock>,
    host: Host,
}

impl Harness {
    fn new(path: &str) -> Self {
        Self::with_content(SiteContent::builtin(), path)
    }

    fn with_content(content: SiteContent, path: &str) -> Self {
        let clock = Rc::new(ManualClock::new(Instant::now()));
        let timers = Timers::with_clock(clock.clone());
        let mut host = Host::new(content, Viewport::new(800.0, 4000.0), timers);
        host.open(path).unwrap();
        Self { clock, host }
    }

    fn click(&mut self, key: &str) -> bool {
        self.host.dispatch(&InputEvent::click(key))
    }

    fn wait(&self, by: Duration) -> usize {
        self.clock.advance(by);
        self.host.tick()
    }
}

#[test]
fn portfolio_click_replaces_active_item() {
    let mut h = Harness::new("/");
    let home = h.host.home().unwrap();
    let ids: Vec<_> = h.host.content().portfolio.ids().collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(home.selection().active(), None);

    assert!(h.click(&portfolio_key(3)));
    let home = h.host.home().unwrap();
    assert!(home.selection().is_active(3));
    assert!(!home.selection().is_active(1));

    h.click(&portfolio_key(5));
    let home = h.host.home().unwrap();
    assert!(!home.selection().is_active(3));
    assert!(home.selection().is_active(5));
    assert_eq!(home.selected_item().map(|i| i.id), Some(5));
}

#[test]
fn repeated_portfolio_click_keeps_detail_open() {
    let mut h = Harness::new("/");
    h.click(&portfolio_key(2));
    h.click(&portfolio_key(2));
    assert_eq!(h.host.home().unwrap().selection().active(), Some(2));

    assert!(h.click(DETAIL_CLOSE_KEY));
    assert_eq!(h.host.home().unwrap().selection().active(), None);
}

#[test]
fn detail_dialog_shows_full_description() {
    let mut h = Harness::new("/");
    let item = h.host.content().portfolio.get(4).unwrap().clone();

    let frame = h.host.frame().unwrap();
    assert!(frame.region(DETAIL_CLOSE_KEY).is_none());

    h.click(&portfolio_key(4));
    let frame = h.host.frame().unwrap();
    assert!(frame.region(DETAIL_CLOSE_KEY).is_some());
    assert!(frame.root.text_content().contains(&item.description.as_str()));
}

#[test]
fn project_click_toggles_inline_panel() {
    let mut h = Harness::new("/projects");
    assert_eq!(h.host.content().projects.len(), 5);

    assert!(h.click(&project_key(2)));
    assert!(h.host.projects().unwrap().is_expanded(2));

    h.click(&project_key(2));
    assert!(!h.host.projects().unwrap().is_expanded(2));
    assert_eq!(h.host.projects().unwrap().expanded(), None);

    h.click(&project_key(2));
    h.click(&project_key(4));
    let page = h.host.projects().unwrap();
    assert!(!page.is_expanded(2));
    assert!(page.is_expanded(4));
}

#[test]
fn showcase_advances_once_per_interval() {
    let h = Harness::new("/");
    for _ in 0..3 {
        assert_eq!(h.wait(SHOWCASE_INTERVAL), 1);
    }
    let home = h.host.home().unwrap();
    assert_eq!(home.showcase().len(), 4);
    assert_eq!(home.showcase().current(), 3);

    h.wait(SHOWCASE_INTERVAL);
    assert_eq!(h.host.home().unwrap().showcase().current(), 0);
}

#[test]
fn manual_advance_does_not_double_step() {
    let mut h = Harness::new("/");
    h.wait(Duration::from_millis(4000));
    assert!(h.click(SHOWCASE_NEXT_KEY));
    assert_eq!(h.host.home().unwrap().showcase().current(), 1);

    assert_eq!(h.wait(Duration::from_millis(1000)), 0);
    assert_eq!(h.host.home().unwrap().showcase().current(), 1);

    h.wait(Duration::from_millis(4000));
    assert_eq!(h.host.home().unwrap().showcase().current(), 2);
}

#[test]
fn navigating_away_releases_scroll_listener_and_timer() {
    let mut h = Harness::new("/");
    assert_eq!(h.host.viewport().listener_count(), 1);
    assert_eq!(h.host.timers().len(), 1);

    h.host.open("/projects").unwrap();
    assert_eq!(h.host.viewport().listener_count(), 0);
    assert!(h.host.timers().is_empty());
    for _ in 0..3 {
        assert_eq!(h.wait(SHOWCASE_INTERVAL), 0);
    }

    h.host.open("/").unwrap();
    assert_eq!(h.host.home().unwrap().showcase().current(), 0);
    assert_eq!(h.host.timers().len(), 1);
}

#[test]
fn no_ticks_after_host_is_dropped() {
    let h = Harness::new("/");
    let slide = h.host.home().unwrap().showcase().signal();
    let timers = h.host.timers().clone();
    let clock = h.clock.clone();
    drop(h);

    clock.advance(SHOWCASE_INTERVAL * 3);
    assert_eq!(timers.poll(), 0);
    assert_eq!(slide.get(), 0);
}

#[test]
fn header_flips_past_fifty_pixels() {
    let mut h = Harness::new("/");
    assert!(!h.host.home().unwrap().is_scrolled());

    h.host.dispatch(&InputEvent::scroll(50.0));
    assert!(!h.host.home().unwrap().is_scrolled());
    h.host.dispatch(&InputEvent::scroll(51.0));
    assert!(h.host.home().unwrap().is_scrolled());

    let frame = h.host.frame().unwrap();
    let header = frame.root.children.first().unwrap();
    assert!(header.modifier.classes.iter().any(|c| c == "scrolled"));

    h.host.dispatch(&InputEvent::scroll(10.0));
    assert!(!h.host.home().unwrap().is_scrolled());
}

#[test]
fn hero_follows_scroll_progress() {
    let mut h = Harness::new("/");
    // 800px viewport over 4000px of content: 3200px of travel.
    h.host.dispatch(&InputEvent::scroll(320.0));
    let home = h.host.home().unwrap();
    assert!((home.hero_opacity() - 0.5).abs() < 1e-4);
    assert!((home.portrait_scale() - 1.04).abs() < 1e-4);

    h.host.dispatch(&InputEvent::scroll(3200.0));
    let home = h.host.home().unwrap();
    assert_eq!(home.hero_opacity(), 0.0);
    assert!((home.portrait_scale() - 1.2).abs() < 1e-6);
}

#[test]
fn hover_marks_one_card() {
    let mut h = Harness::new("/");
    h.host.dispatch(&InputEvent::enter(portfolio_key(2)));
    h.host.dispatch(&InputEvent::enter(portfolio_key(3)));
    assert_eq!(h.host.home().unwrap().hover().hovered(), Some(3));

    // A late leave from the previous card does not clear the current one.
    h.host.dispatch(&InputEvent::leave(portfolio_key(2)));
    assert_eq!(h.host.home().unwrap().hover().hovered(), Some(3));

    let frame = h.host.frame().unwrap();
    let card = frame.root.find(&portfolio_key(3)).unwrap();
    assert_eq!(card.modifier.scale, Some(HOVER_SCALE));

    h.host.dispatch(&InputEvent::leave(portfolio_key(3)));
    assert_eq!(h.host.home().unwrap().hover().hovered(), None);
}

#[test]
fn menu_toggle_shows_mobile_links() {
    let mut h = Harness::new("/");
    let mobile_links = |host: &mut Host| {
        host.frame()
            .unwrap()
            .root
            .text_content()
            .iter()
            .filter(|t| **t == "Projects")
            .count()
    };
    assert_eq!(mobile_links(&mut h.host), 1);

    h.click(MENU_TOGGLE_KEY);
    assert!(h.host.home().unwrap().is_menu_open());
    assert_eq!(mobile_links(&mut h.host), 2);

    h.click(MENU_TOGGLE_KEY);
    assert!(!h.host.home().unwrap().is_menu_open());
}

#[test]
fn unknown_keys_are_ignored() {
    let mut h = Harness::new("/");
    assert!(!h.click(&portfolio_key(42)));
    assert!(!h.click("nope"));
    assert_eq!(h.host.home().unwrap().selection().active(), None);

    // Ids outside the list are a no-op.
    assert!(!h.host.home().unwrap().selection().activate(0));
}

#[test]
fn empty_project_list_fails_to_mount() {
    let mut content = SiteContent::builtin();
    content.projects = ContentList::default();
    let clock = Rc::new(ManualClock::new(Instant::now()));
    let mut host = Host::new(content, Viewport::default(), Timers::with_clock(clock));

    host.open("/").unwrap();
    let err = host.open("/projects").unwrap_err();
    assert!(matches!(err, HostError::Content(ContentError::EmptyList)));
    assert_eq!(host.route(), None);

    assert_eq!(host.open("/").unwrap(), Route::Home);
}

#[test]
fn home_mounted_mid_page_matches_scroll_position() {
    let clock = Rc::new(ManualClock::new(Instant::now()));
    let timers = Timers::with_clock(clock);
    let viewport = Viewport::new(800.0, 4000.0);
    viewport.scroll_to(200.0);

    let home = HomePage::mount(Rc::new(SiteContent::builtin()), &viewport, &timers);
    assert!(home.is_scrolled());
    // 200 / 3200 of the way down, a quarter of the fade range.
    assert!((home.hero_opacity() - 0.6875).abs() < 1e-4);

    viewport.scroll_to(30.0);
    assert!(!home.is_scrolled());
    home.unmount();
    assert_eq!(viewport.listener_count(), 0);
}

#[test]
fn page_state_resets_on_unmount() {
    let mut h = Harness::new("/");
    h.host.dispatch(&InputEvent::scroll(200.0));
    h.click(&portfolio_key(3));
    h.click(MENU_TOGGLE_KEY);
    h.host.dispatch(&InputEvent::enter(portfolio_key(2)));
    h.wait(SHOWCASE_INTERVAL);

    let home = h.host.home().unwrap();
    let selected = home.selection().clone();
    let hover = home.hover().clone();
    let slide = home.showcase().signal();
    let menu = home.menu_signal();
    let scrolled = home.scrolled_signal();
    assert_eq!(selected.active(), Some(3));
    assert_eq!(hover.hovered(), Some(2));
    assert_eq!(slide.get(), 1);
    assert!(menu.get());
    assert!(scrolled.get());

    h.host.open("/projects").unwrap();
    assert_eq!(selected.active(), None);
    assert_eq!(hover.hovered(), None);
    assert_eq!(slide.get(), 0);
    assert!(!menu.get());
    assert!(!scrolled.get());

    h.click(&project_key(2));
    let expanded = h.host.projects().unwrap().selection().clone();
    assert_eq!(expanded.active(), Some(2));

    h.host.open("/").unwrap();
    assert_eq!(expanded.active(), None);
}
