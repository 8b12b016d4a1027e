//! Hub view state.
//!
//! Every user-visible change goes through one of the event methods on
//! [`Hub`]; they are applied one at a time by the presentation loop. The
//! page number is reset to 1 whenever the filtered list can change shape
//! (new query, different viewport class), so no caller has to clamp it.

use crate::config::Config;
use crate::preferences::{PreferenceStore, load_theme, save_theme};
use crate::source::LoadOutcome;
use crate::Result;
use linkhub_engine::{PageInfo, filter_links, paginate};
use linkhub_types::{Link, Theme, ThemeId};

/// Display class derived from the available width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Narrow viewports show one page at a time
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: u16, narrow_width: u16) -> Self {
        if width < narrow_width {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_paged(self) -> bool {
        self == ViewportClass::Narrow
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    /// Loaded, but nothing to show (no links, or nothing matched)
    Empty,
    Showing,
}

/// What the presentation layer renders
#[derive(Debug, Clone)]
pub struct HubView<'a> {
    pub status: ViewStatus,
    pub links: Vec<&'a Link>,
    pub page: PageInfo,
    /// Number of links matching the query across all pages
    pub matches: usize,
    pub query: &'a str,
    pub theme: &'static Theme,
}

#[derive(Debug, Clone, Copy)]
pub struct HubSettings {
    pub page_size: usize,
    pub narrow_width: u16,
}

impl From<&Config> for HubSettings {
    fn from(config: &Config) -> Self {
        Self {
            page_size: config.page_size,
            narrow_width: config.narrow_width,
        }
    }
}

impl Default for HubSettings {
    fn default() -> Self {
        HubSettings::from(&Config::default())
    }
}

pub struct Hub {
    links: Vec<Link>,
    loading: bool,
    load_failure: Option<String>,
    query: String,
    page: usize,
    viewport: ViewportClass,
    theme: ThemeId,
    settings: HubSettings,
    preferences: Box<dyn PreferenceStore>,
}

impl Hub {
    /// Create a hub in the loading state, with the theme read from `preferences`.
    pub fn new(settings: HubSettings, preferences: Box<dyn PreferenceStore>) -> Self {
        let theme = load_theme(preferences.as_ref());
        Self {
            links: Vec::new(),
            loading: true,
            load_failure: None,
            query: String::new(),
            page: 1,
            viewport: ViewportClass::Wide,
            theme,
            settings,
            preferences,
        }
    }

    pub fn links_loaded(&mut self, outcome: LoadOutcome) {
        self.load_failure = outcome.failure.clone();
        self.links = outcome.into_links();
        self.loading = false;
        self.page = 1;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.page = 1;
        }
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.page = 1;
    }

    pub fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.page = 1;
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Record a new viewport width. Crossing the narrow threshold resets the page.
    pub fn resize(&mut self, width: u16) {
        let class = ViewportClass::from_width(width, self.settings.narrow_width);
        if class != self.viewport {
            log::debug!("viewport class {:?} -> {:?}", self.viewport, class);
            self.viewport = class;
            self.page = 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.page_info().has_next() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page_info().has_previous() {
            self.page -= 1;
        }
    }

    /// Jump to page `number`. Returns false, leaving the page alone, when it does not exist.
    ///
    /// Page 1 always exists, even when nothing matches.
    pub fn go_to_page(&mut self, number: usize) -> bool {
        let info = self.page_info();
        if number == 1 || (info.paged && number >= 1 && number <= info.total_pages) {
            self.page = number;
            true
        } else {
            false
        }
    }

    /// Switch theme and persist the choice.
    pub fn select_theme(&mut self, theme: ThemeId) -> Result<()> {
        self.theme = theme;
        save_theme(self.preferences.as_mut(), theme)
    }

    pub fn cycle_theme(&mut self) -> Result<()> {
        self.select_theme(self.theme.next())
    }

    pub fn view(&self) -> HubView<'_> {
        let filtered = filter_links(&self.links, &self.query);
        let page = paginate(
            &filtered,
            self.settings.page_size,
            self.page,
            self.viewport.is_paged(),
        );

        let status = if self.loading {
            ViewStatus::Loading
        } else if page.items.is_empty() {
            ViewStatus::Empty
        } else {
            ViewStatus::Showing
        };

        HubView {
            status,
            links: page.items.to_vec(),
            page: page.info,
            matches: filtered.len(),
            query: &self.query,
            theme: self.theme.theme(),
        }
    }

    fn page_info(&self) -> PageInfo {
        let count = filter_links(&self.links, &self.query).len();
        let paged = self.viewport.is_paged();
        PageInfo {
            number: if paged { self.page } else { 1 },
            total_pages: if paged {
                linkhub_engine::total_pages(count, self.settings.page_size)
            } else {
                1
            },
            paged,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_failure(&self) -> Option<&str> {
        self.load_failure.as_deref()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn preferences(&self) -> &dyn PreferenceStore {
        self.preferences.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{MemoryPreferences, THEME_KEY};
    use linkhub_engine::build_links;

    fn twelve_links() -> LoadOutcome {
        let mut text = String::from("id,title,url,icon,description,tags\n");
        for i in 1..=12 {
            let tag = if i % 2 == 0 { "even" } else { "odd" };
            text.push_str(&format!("{i},Link {i},https://{i}.test,GlobeIcon,,{tag}\n"));
        }
        LoadOutcome {
            rows: build_links(&text).unwrap(),
            failure: None,
        }
    }

    fn narrow_hub() -> Hub {
        let mut hub = Hub::new(HubSettings::default(), Box::new(MemoryPreferences::new()));
        hub.resize(40);
        hub.links_loaded(twelve_links());
        hub
    }

    fn ids(view: &HubView<'_>) -> Vec<i64> {
        view.links.iter().filter_map(|link| link.id).collect()
    }

    #[test]
    fn test_starts_loading() {
        let hub = Hub::new(HubSettings::default(), Box::new(MemoryPreferences::new()));
        let view = hub.view();
        assert_eq!(view.status, ViewStatus::Loading);
        assert!(view.links.is_empty());
    }

    #[test]
    fn test_failed_load_shows_empty_state() {
        let mut hub = Hub::new(HubSettings::default(), Box::new(MemoryPreferences::new()));
        hub.links_loaded(LoadOutcome::failed("boom"));
        assert_eq!(hub.view().status, ViewStatus::Empty);
        assert!(!hub.is_loading());
        assert_eq!(hub.load_failure(), Some("boom"));
    }

    #[test]
    fn test_narrow_viewport_pages_by_five() {
        let mut hub = narrow_hub();
        let view = hub.view();
        assert_eq!(view.page.total_pages, 3);
        assert_eq!(ids(&view), [1, 2, 3, 4, 5]);

        hub.next_page();
        hub.next_page();
        let view = hub.view();
        assert_eq!(view.page.number, 3);
        assert_eq!(ids(&view), [11, 12]);

        // navigation is disabled on the last page
        hub.next_page();
        assert_eq!(hub.page(), 3);
    }

    #[test]
    fn test_previous_page_stops_at_one() {
        let mut hub = narrow_hub();
        hub.previous_page();
        assert_eq!(hub.page(), 1);
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut hub = narrow_hub();
        hub.next_page();
        hub.next_page();
        assert_eq!(hub.page(), 3);

        hub.set_query("even");
        assert_eq!(hub.page(), 1);
        let view = hub.view();
        assert_eq!(view.matches, 6);
        assert_eq!(ids(&view), [2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_typing_resets_page() {
        let mut hub = narrow_hub();
        hub.next_page();
        hub.push_query_char('l');
        assert_eq!(hub.page(), 1);

        hub.next_page();
        hub.pop_query_char();
        assert_eq!(hub.page(), 1);
        assert_eq!(hub.query(), "");
    }

    #[test]
    fn test_same_query_keeps_page() {
        let mut hub = narrow_hub();
        hub.set_query("link");
        hub.next_page();
        hub.set_query("link");
        assert_eq!(hub.page(), 2);
    }

    #[test]
    fn test_viewport_class_change_resets_page() {
        let mut hub = narrow_hub();
        hub.next_page();
        hub.resize(60);
        assert_eq!(hub.page(), 2, "same class keeps the page");

        hub.resize(120);
        assert_eq!(hub.viewport(), ViewportClass::Wide);
        assert_eq!(hub.page(), 1);

        let view = hub.view();
        assert_eq!(view.page.total_pages, 1);
        assert_eq!(view.links.len(), 12);
    }

    #[test]
    fn test_wide_viewport_ignores_paging() {
        let mut hub = Hub::new(HubSettings::default(), Box::new(MemoryPreferences::new()));
        hub.resize(200);
        hub.links_loaded(twelve_links());
        hub.next_page();
        assert_eq!(hub.page(), 1);
        assert_eq!(hub.view().links.len(), 12);
    }

    #[test]
    fn test_go_to_page_stays_in_range() {
        let mut hub = narrow_hub();
        assert!(hub.go_to_page(3));
        assert_eq!(hub.view().links.len(), 2);
        assert!(!hub.go_to_page(4));
        assert!(!hub.go_to_page(0));
        assert_eq!(hub.page(), 3);

        hub.resize(120);
        assert!(hub.go_to_page(1));
        assert!(!hub.go_to_page(2));

        hub.resize(40);
        hub.set_query("nothing like this");
        assert!(hub.go_to_page(1));
    }

    #[test]
    fn test_no_match_is_empty() {
        let mut hub = narrow_hub();
        hub.set_query("nothing like this");
        let view = hub.view();
        assert_eq!(view.status, ViewStatus::Empty);
        assert_eq!(view.page.total_pages, 0);
    }

    #[test]
    fn test_theme_read_at_startup_and_written_on_change() -> Result<()> {
        let prefs = MemoryPreferences::new().with(THEME_KEY, "rose");
        let mut hub = Hub::new(HubSettings::default(), Box::new(prefs));
        assert_eq!(hub.theme(), ThemeId::Rose);

        hub.cycle_theme()?;
        assert_eq!(hub.theme(), ThemeId::Emerald);
        assert_eq!(
            hub.preferences().get(THEME_KEY).as_deref(),
            Some("emerald")
        );

        hub.select_theme(ThemeId::Cyan)?;
        assert_eq!(hub.view().theme.id, ThemeId::Cyan);
        assert_eq!(hub.preferences().get(THEME_KEY).as_deref(), Some("cyan"));
        Ok(())
    }
}
