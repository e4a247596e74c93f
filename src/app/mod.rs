//! Application state and event handling.
//!
//! `App` owns the content store, the transcript, and all view-local
//! selection state. Key handling mutates state; rendering reads it. The
//! only state that leaves the process is the theme preference.

mod input;

use crate::commands::history::{HistoryLog, InputRecall};
use crate::commands::resolver::{self, Effect};
use crate::config::UiConfig;
use crate::content::{ContentStore, Project};
use crate::services::app_dirs::AppDirs;
use crate::services::prefs;
use crate::view::theme::{Theme, ThemeChoice};
use std::path::PathBuf;

/// The three pages, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    About,
}

impl Page {
    pub fn next(self) -> Self {
        match self {
            Page::Home => Page::Projects,
            Page::Projects => Page::About,
            Page::About => Page::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Page::Home => Page::About,
            Page::Projects => Page::Home,
            Page::About => Page::Projects,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutTab {
    Skills,
    Experience,
    Education,
}

impl AboutTab {
    pub fn next(self) -> Self {
        match self {
            AboutTab::Skills => AboutTab::Experience,
            AboutTab::Experience => AboutTab::Education,
            AboutTab::Education => AboutTab::Skills,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AboutTab::Skills => AboutTab::Education,
            AboutTab::Experience => AboutTab::Skills,
            AboutTab::Education => AboutTab::Experience,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AboutTab::Skills => "Skills",
            AboutTab::Experience => "Experience",
            AboutTab::Education => "Education",
        }
    }
}

/// The overlay state machine: idle, or showing one project's details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayState {
    Idle,
    Open(String),
}

pub struct App {
    pub store: ContentStore,

    pub theme_choice: ThemeChoice,
    pub theme: Theme,
    themes_dir: PathBuf,
    prefs_path: PathBuf,

    pub page: Page,
    pub overlay: OverlayState,
    pub about_tab: AboutTab,

    /// Tag filter on the projects page, in selection order.
    pub selected_tags: Vec<String>,
    pub tag_cursor: usize,
    pub project_cursor: usize,

    pub input: String,
    pub history: HistoryLog,
    recall: InputRecall,

    pub tagline_index: usize,
    tick: u64,
    tagline_interval_ticks: u64,
    reveal_delay_ticks: u64,

    should_quit: bool,
}

impl App {
    pub fn new(store: ContentStore, theme_choice: ThemeChoice, dirs: &AppDirs, ui: &UiConfig) -> Self {
        let themes_dir = dirs.themes_dir();
        let theme = Theme::load(theme_choice, &themes_dir);
        Self {
            store,
            theme_choice,
            theme,
            themes_dir,
            prefs_path: dirs.theme_pref_path(),
            page: Page::Home,
            overlay: OverlayState::Idle,
            about_tab: AboutTab::Skills,
            selected_tags: Vec::new(),
            tag_cursor: 0,
            project_cursor: 0,
            input: String::new(),
            history: HistoryLog::new(),
            recall: InputRecall::new(),
            tagline_index: 0,
            tick: 0,
            tagline_interval_ticks: ui.tagline_interval_ticks(),
            reveal_delay_ticks: ui.reveal_delay_ticks(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance timers. Returns true if anything visible changed.
    pub fn on_tick(&mut self) -> bool {
        self.tick += 1;
        let mut changed = false;

        let taglines = self.store.site.splash.taglines.len();
        if taglines > 1 && self.tick % self.tagline_interval_ticks == 0 {
            self.tagline_index = (self.tagline_index + 1) % taglines;
            changed = true;
        }

        if self.history.advance_reveal(self.reveal_delay_ticks) {
            changed = true;
        }

        changed
    }

    /// Submit the current input line to the resolver and apply the outcome.
    /// Blank input is a no-op: nothing is appended or recorded.
    pub fn submit_input(&mut self) {
        let raw = std::mem::take(&mut self.input);

        let Some(resolution) = resolver::resolve(&raw, &self.store) else {
            return;
        };
        self.recall.record(raw.trim().to_string());

        match resolution.effect {
            Effect::ClearHistory => {
                self.history.clear();
                return;
            }
            Effect::OpenProject(id) => {
                self.overlay = OverlayState::Open(id);
            }
            Effect::None => {}
        }

        if let Some(response) = resolution.response {
            self.history.push(raw.trim().to_string(), response);
        }
    }

    pub fn recall_prev(&mut self) {
        if let Some(command) = self.recall.prev() {
            self.input = command.to_string();
        }
    }

    pub fn recall_next(&mut self) {
        match self.recall.next() {
            Some(command) => self.input = command.to_string(),
            None => self.input.clear(),
        }
    }

    /// Flip the theme, reload the palette, and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme_choice = self.theme_choice.toggled();
        self.theme = Theme::load(self.theme_choice, &self.themes_dir);
        tracing::info!("Theme toggled to {}", self.theme_choice.name());
        prefs::save_theme(&self.prefs_path, self.theme_choice);
    }

    pub fn close_overlay(&mut self) {
        self.overlay = OverlayState::Idle;
    }

    pub fn overlay_project(&self) -> Option<&Project> {
        match &self.overlay {
            OverlayState::Open(id) => self.store.project(id),
            OverlayState::Idle => None,
        }
    }

    /// Projects passing the tag filter: all of them when no tag is selected,
    /// otherwise any project carrying at least one selected tag.
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.store
            .projects()
            .iter()
            .filter(|p| {
                self.selected_tags.is_empty()
                    || p.tags.iter().any(|t| self.selected_tags.contains(t))
            })
            .collect()
    }

    pub fn toggle_tag_at_cursor(&mut self) {
        let tag = match self.store.all_tags().get(self.tag_cursor) {
            Some(tag) => tag.to_string(),
            None => return,
        };
        if let Some(pos) = self.selected_tags.iter().position(|t| *t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag);
        }
        self.clamp_project_cursor();
    }

    pub fn clear_filters(&mut self) {
        self.selected_tags.clear();
        self.clamp_project_cursor();
    }

    pub fn move_project_cursor(&mut self, delta: isize) {
        let count = self.visible_projects().len();
        if count == 0 {
            self.project_cursor = 0;
            return;
        }
        let current = self.project_cursor as isize;
        self.project_cursor = (current + delta).rem_euclid(count as isize) as usize;
    }

    pub fn move_tag_cursor(&mut self, delta: isize) {
        let count = self.store.all_tags().len();
        if count == 0 {
            return;
        }
        let current = self.tag_cursor as isize;
        self.tag_cursor = (current + delta).rem_euclid(count as isize) as usize;
    }

    fn clamp_project_cursor(&mut self) {
        let count = self.visible_projects().len();
        if count == 0 {
            self.project_cursor = 0;
        } else if self.project_cursor >= count {
            self.project_cursor = count - 1;
        }
    }

    /// Open the overlay for the project under the cursor.
    pub fn open_selected_project(&mut self) {
        let id = self
            .visible_projects()
            .get(self.project_cursor)
            .map(|p| p.id.clone());
        if let Some(id) = id {
            self.overlay = OverlayState::Open(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bundled;
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let temp = TempDir::new().unwrap();
        let dirs = AppDirs::for_testing(temp.path());
        let app = App::new(
            bundled().clone(),
            ThemeChoice::Dark,
            &dirs,
            &UiConfig::default(),
        );
        (temp, app)
    }

    fn submit(app: &mut App, line: &str) {
        app.input = line.to_string();
        app.submit_input();
    }

    #[test]
    fn submitting_a_command_appends_to_history() {
        let (_temp, mut app) = test_app();
        submit(&mut app, "help");
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history.entries()[0].input, "help");
        assert!(app.input.is_empty());
    }

    #[test]
    fn blank_input_appends_nothing() {
        let (_temp, mut app) = test_app();
        submit(&mut app, "   ");
        assert!(app.history.is_empty());
        // And is not recallable either.
        app.recall_prev();
        assert!(app.input.is_empty());
    }

    #[test]
    fn clear_wipes_history_and_leaves_no_entry() {
        let (_temp, mut app) = test_app();
        submit(&mut app, "help");
        submit(&mut app, "ls");
        submit(&mut app, "clear");
        assert!(app.history.is_empty());
    }

    #[test]
    fn cd_opens_the_overlay_for_the_project() {
        let (_temp, mut app) = test_app();
        submit(&mut app, "cd portfolio-site");
        assert_eq!(app.overlay, OverlayState::Open("portfolio-site".to_string()));
        assert_eq!(app.overlay_project().unwrap().id, "portfolio-site");
        // The transcript got the confirmation line too.
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn cd_unknown_leaves_overlay_idle() {
        let (_temp, mut app) = test_app();
        submit(&mut app, "cd nonexistent");
        assert_eq!(app.overlay, OverlayState::Idle);
    }

    #[test]
    fn cd_while_open_replaces_the_overlay_target() {
        let (_temp, mut app) = test_app();
        submit(&mut app, "cd portfolio-site");
        submit(&mut app, "cd semantic-auth");
        assert_eq!(app.overlay, OverlayState::Open("semantic-auth".to_string()));
    }

    #[test]
    fn theme_toggle_persists_the_choice() {
        let (temp, mut app) = test_app();
        app.toggle_theme();
        assert_eq!(app.theme_choice, ThemeChoice::Light);

        let dirs = AppDirs::for_testing(temp.path());
        assert_eq!(
            prefs::load_theme(&dirs.theme_pref_path()),
            Some(ThemeChoice::Light)
        );
    }

    #[test]
    fn tag_filter_is_an_or_filter() {
        let (_temp, mut app) = test_app();
        let all = app.store.projects().len();
        assert_eq!(app.visible_projects().len(), all);

        app.selected_tags = vec!["go".to_string()];
        let visible = app.visible_projects();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|p| p.tags.iter().any(|t| t == "go")));
        assert!(visible.len() < all);

        app.selected_tags = vec!["go".to_string(), "typescript".to_string()];
        let visible = app.visible_projects();
        assert!(visible
            .iter()
            .all(|p| p.tags.iter().any(|t| t == "go" || t == "typescript")));

        app.clear_filters();
        assert_eq!(app.visible_projects().len(), all);
    }

    #[test]
    fn filtering_clamps_the_project_cursor() {
        let (_temp, mut app) = test_app();
        app.project_cursor = app.store.projects().len() - 1;
        app.tag_cursor = 0;
        app.toggle_tag_at_cursor();
        assert!(app.project_cursor < app.visible_projects().len().max(1));
    }

    #[test]
    fn tagline_rotates_on_interval_and_wraps() {
        let (_temp, mut app) = test_app();
        let count = app.store.site.splash.taglines.len();
        assert!(count > 1);

        let interval = app.tagline_interval_ticks;
        for _ in 0..interval {
            app.on_tick();
        }
        assert_eq!(app.tagline_index, 1);

        for _ in 0..(interval * (count as u64 - 1)) {
            app.on_tick();
        }
        assert_eq!(app.tagline_index, 0);
    }

    #[test]
    fn recall_round_trip_restores_commands() {
        let (_temp, mut app) = test_app();
        submit(&mut app, "help");
        submit(&mut app, "ls");

        app.recall_prev();
        assert_eq!(app.input, "ls");
        app.recall_prev();
        assert_eq!(app.input, "help");
        app.recall_next();
        assert_eq!(app.input, "ls");
        app.recall_next();
        assert!(app.input.is_empty());
    }
}
