use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use linkhub_runtime::Hub;
use linkhub_types::Link;
use std::collections::HashSet;

/// UI state layered over the hub: selection, scroll, expanded cards
pub struct AppState {
    pub hub: Hub,
    pub name: String,
    pub tagline: String,
    /// Selected card, as an index into the current page
    pub selected: usize,
    /// First card drawn in the list area
    pub scroll: usize,
    /// Expanded cards, as indexes into `hub.links()`
    pub expanded: HashSet<usize>,
    pub now: DateTime<Local>,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(hub: Hub, name: impl Into<String>, tagline: impl Into<String>) -> Self {
        Self {
            hub,
            name: name.into(),
            tagline: tagline.into(),
            selected: 0,
            scroll: 0,
            expanded: HashSet::new(),
            now: Local::now(),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn tick(&mut self) {
        self.now = Local::now();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.hub.query().is_empty() {
                    self.should_quit = true;
                } else {
                    self.hub.clear_query();
                    self.reset_selection();
                }
            }
            KeyCode::Char(c) => {
                self.hub.push_query_char(c);
                self.reset_selection();
            }
            KeyCode::Backspace => {
                self.hub.pop_query_char();
                self.reset_selection();
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let count = self.hub.view().links.len();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => self.toggle_selected(),
            KeyCode::Left => {
                self.hub.previous_page();
                self.reset_selection();
            }
            KeyCode::Right => {
                self.hub.next_page();
                self.reset_selection();
            }
            KeyCode::Tab => {
                match self.hub.cycle_theme() {
                    Ok(()) => self.status_message = None,
                    Err(err) => {
                        log::warn!("could not save theme: {}", err);
                        self.status_message = Some(format!("Could not save theme: {}", err));
                    }
                }
            }
            _ => {}
        }
    }

    pub fn resize(&mut self, width: u16) {
        let before = self.hub.page();
        self.hub.resize(width);
        if self.hub.page() != before {
            self.reset_selection();
        }
    }

    pub fn is_expanded(&self, link: &Link) -> bool {
        self.link_index(link)
            .is_some_and(|index| self.expanded.contains(&index))
    }

    fn toggle_selected(&mut self) {
        let index = {
            let view = self.hub.view();
            view.links
                .get(self.selected)
                .and_then(|link| self.link_index(link))
        };
        if let Some(index) = index {
            if !self.expanded.remove(&index) {
                self.expanded.insert(index);
            }
        }
    }

    fn link_index(&self, link: &Link) -> Option<usize> {
        self.hub
            .links()
            .iter()
            .position(|candidate| std::ptr::eq(candidate, link))
    }

    fn reset_selection(&mut self) {
        self.selected = 0;
        self.scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkhub_engine::build_links;
    use linkhub_runtime::{
        HubSettings, LoadOutcome, MemoryPreferences, PreferenceStore, THEME_KEY, ViewportClass,
    };
    use linkhub_types::ThemeId;
    use std::cell::Cell;
    use std::rc::Rc;

    const LINKS_CSV: &str = "id,title,url,icon,description,tags\n\
        1,GitHub,https://github.com,GithubIcon,,\n\
        2,Mail,mailto:x,MailIcon,Contact me,work;personal\n\
        3,Blog,https://blog.test,GlobeIcon,Writing,";

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> AppState {
        let mut hub = Hub::new(HubSettings::default(), Box::new(MemoryPreferences::new()));
        hub.links_loaded(LoadOutcome {
            rows: build_links(LINKS_CSV).unwrap(),
            failure: None,
        });
        AppState::new(hub, "Link Hub", "Links worth keeping close.")
    }

    #[test]
    fn test_typing_edits_query() {
        let mut app = loaded_app();
        for c in "work".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.hub.query(), "work");

        let view = app.hub.view();
        assert_eq!(view.links.len(), 1);
        assert_eq!(view.links[0].title, "Mail");
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Char('x')));

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.hub.query(), "");
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_selection_stays_in_range() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected, 0);

        for _ in 0..5 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_enter_toggles_expansion() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.is_expanded(&app.hub.links()[1]));
        assert!(!app.is_expanded(&app.hub.links()[0]));

        app.handle_key(key(KeyCode::Enter));
        assert!(!app.is_expanded(&app.hub.links()[1]));
    }

    #[test]
    fn test_tab_cycles_and_persists_theme() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.hub.theme(), ThemeId::Rose);
        assert_eq!(
            app.hub.preferences().get(THEME_KEY).as_deref(),
            Some("rose")
        );
    }

    /// Store whose writes fail while `broken` is set
    struct FlakyPreferences {
        broken: Rc<Cell<bool>>,
    }

    impl PreferenceStore for FlakyPreferences {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> linkhub_runtime::Result<()> {
            if self.broken.get() {
                Err(linkhub_runtime::Error::Config("disk full".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_theme_save_failure_message_clears_on_next_success() {
        let broken = Rc::new(Cell::new(true));
        let hub = Hub::new(
            HubSettings::default(),
            Box::new(FlakyPreferences {
                broken: Rc::clone(&broken),
            }),
        );
        let mut app = AppState::new(hub, "Link Hub", "");

        app.handle_key(key(KeyCode::Tab));
        assert!(app.status_message.is_some());

        broken.set(false);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.status_message, None);
        assert_eq!(app.hub.theme(), ThemeId::Emerald);
    }

    #[test]
    fn test_arrows_page_in_narrow_viewport() {
        let mut app = loaded_app();
        app.hub.resize(40);
        assert_eq!(app.hub.viewport(), ViewportClass::Narrow);

        // three links fit on one page, so there is nowhere to go
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.hub.page(), 1);
    }

    #[test]
    fn test_ctrl_c_quits_without_typing() {
        let mut app = loaded_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.hub.query(), "");
    }
}
