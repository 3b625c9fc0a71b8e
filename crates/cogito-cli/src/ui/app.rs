use std::time::Instant;

use cogito_engine::Session;
use cogito_types::CategoryFilter;
use crossterm::event::KeyCode;
use rand::thread_rng;

use super::labels::Locale;
use super::theme::Theme;

/// Whether keystrokes edit the search input or drive the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

/// Interactive state: the session plus cursor and input mode. All edits
/// route through the browser; the cursor is clamped to the display window
/// after every change.
pub struct App {
    pub session: Session,
    pub theme: Theme,
    pub locale: Locale,
    pub input_mode: InputMode,
    pub cursor: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, theme: Theme, locale: Locale) -> Self {
        Self {
            session,
            theme,
            locale,
            input_mode: InputMode::Browse,
            cursor: 0,
            should_quit: false,
        }
    }

    /// Advance engine time; returns true when derived state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(browser) = self.session.browser_mut() else {
            return false;
        };
        let changed = browser.tick(now);
        if changed {
            self.clamp_cursor();
        }
        changed
    }

    pub fn on_key(&mut self, code: KeyCode, now: Instant) {
        if !self.session.status().is_ready() {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                // Retry is a full reload of the session, never a scoped
                // retry of just the fetch.
                KeyCode::Char('r') => {
                    self.session.reload();
                    self.cursor = 0;
                }
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Search => self.on_search_key(code, now),
            InputMode::Browse => self.on_browse_key(code, now),
        }
    }

    fn on_search_key(&mut self, code: KeyCode, now: Instant) {
        let Some(browser) = self.session.browser_mut() else {
            return;
        };
        match code {
            KeyCode::Esc | KeyCode::Enter => self.input_mode = InputMode::Browse,
            KeyCode::Backspace => {
                let mut input = browser.search_input().to_owned();
                input.pop();
                browser.set_search_input(input, now);
            }
            KeyCode::Char(c) => {
                let mut input = browser.search_input().to_owned();
                input.push(c);
                browser.set_search_input(input, now);
            }
            _ => {}
        }
    }

    fn on_browse_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Down | KeyCode::Char('j') => self.cursor_down(now),
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Char('g') => self.cursor = 0,
            KeyCode::Char('G') => {
                if let Some(browser) = self.session.browser_mut() {
                    let len = browser.visible_len();
                    if len > 0 {
                        browser.on_scroll_progress(1.0, now);
                    }
                    self.cursor = len.saturating_sub(1);
                }
            }
            KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('n') => {
                if let Some(browser) = self.session.browser_mut() {
                    browser.select_random(&mut thread_rng());
                    self.cursor = 0;
                }
            }
            KeyCode::Char('x') => {
                if let Some(browser) = self.session.browser_mut() {
                    browser.clear_filters();
                    self.cursor = 0;
                }
            }
            KeyCode::Char('a') => {
                if let Some(browser) = self.session.browser_mut() {
                    browser.load_all(now);
                }
            }
            KeyCode::Tab => self.cycle_category(),
            KeyCode::Char('r') => {
                self.session.reload();
                self.cursor = 0;
            }
            _ => {}
        }
    }

    fn cursor_down(&mut self, now: Instant) {
        let Some(browser) = self.session.browser_mut() else {
            return;
        };
        let len = browser.visible_len();
        if len == 0 {
            return;
        }
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
        // Scroll-position signal: crossing the threshold pulls in the next
        // batch without an explicit command.
        let progress = (self.cursor + 1) as f64 / len as f64;
        browser.on_scroll_progress(progress, now);
    }

    fn toggle_selected(&mut self) {
        let Some(browser) = self.session.browser_mut() else {
            return;
        };
        let id = browser.visible().nth(self.cursor).map(|t| t.id.clone());
        if let Some(id) = id {
            browser.toggle_select(&id);
        }
    }

    fn cycle_category(&mut self) {
        let Some(browser) = self.session.browser_mut() else {
            return;
        };
        let categories = browser.categories().to_vec();
        let next = match &browser.criteria().category {
            CategoryFilter::All => match categories.first() {
                Some(first) => CategoryFilter::named(first.clone()),
                None => CategoryFilter::All,
            },
            CategoryFilter::Named(current) => {
                match categories.iter().position(|c| c == current) {
                    Some(index) => match categories.get(index + 1) {
                        Some(following) => CategoryFilter::named(following.clone()),
                        None => CategoryFilter::All,
                    },
                    None => CategoryFilter::All,
                }
            }
        };
        browser.set_category(next);
        self.cursor = 0;
    }

    fn clamp_cursor(&mut self) {
        let len = self
            .session
            .browser()
            .map(|b| b.visible_len())
            .unwrap_or(0);
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cogito_engine::Pacing;
    use cogito_testing::fixtures;
    use std::io::Write;
    use std::path::PathBuf;

    fn ready_app(count: usize) -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("thoughts.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(fixtures::corpus_json(&fixtures::sized_thoughts(count)).as_bytes())
            .unwrap();

        let mut session = Session::new(path, Pacing::immediate());
        session.load();
        (App::new(session, Theme::default(), Locale::default()), dir)
    }

    #[test]
    fn test_scrolling_to_threshold_extends_window() {
        let now = Instant::now();
        let (mut app, _dir) = ready_app(30);
        assert_eq!(app.session.browser().unwrap().visible_len(), 20);

        // Move past 80% of the window.
        for _ in 0..16 {
            app.on_key(KeyCode::Down, now);
        }
        assert!(app.session.browser().unwrap().is_extending());

        app.tick(now);
        assert_eq!(app.session.browser().unwrap().visible_len(), 30);
    }

    #[test]
    fn test_search_mode_edits_input() {
        let now = Instant::now();
        let (mut app, _dir) = ready_app(5);

        app.on_key(KeyCode::Char('/'), now);
        assert_eq!(app.input_mode, InputMode::Search);
        app.on_key(KeyCode::Char('a'), now);
        app.on_key(KeyCode::Char('b'), now);
        app.on_key(KeyCode::Backspace, now);
        assert_eq!(app.session.browser().unwrap().search_input(), "a");

        app.on_key(KeyCode::Esc, now);
        assert_eq!(app.input_mode, InputMode::Browse);
    }

    #[test]
    fn test_cursor_clamps_when_window_shrinks() {
        let now = Instant::now();
        let (mut app, _dir) = ready_app(30);
        for _ in 0..10 {
            app.on_key(KeyCode::Down, now);
        }
        assert_eq!(app.cursor, 10);

        app.on_key(KeyCode::Char('/'), now);
        for c in "thought number 7".chars() {
            app.on_key(KeyCode::Char(c), now);
        }
        app.tick(now);
        // One match; the cursor follows the window down.
        assert_eq!(app.session.browser().unwrap().visible_len(), 1);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_tab_cycles_back_to_all() {
        let now = Instant::now();
        let (mut app, _dir) = ready_app(5);

        app.on_key(KeyCode::Tab, now);
        assert_eq!(
            app.session.browser().unwrap().criteria().category,
            CategoryFilter::named("generated")
        );
        app.on_key(KeyCode::Tab, now);
        assert_eq!(
            app.session.browser().unwrap().criteria().category,
            CategoryFilter::All
        );
    }
}
