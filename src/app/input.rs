//! Key dispatch: one exhaustive match from key event to state change.

use super::{App, OverlayState, Page};
use crossterm::event::{KeyCode, KeyModifiers};

impl App {
    /// Handle a key press. Returns true if a re-render is needed.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        // Global chords first.
        if modifiers == KeyModifiers::CONTROL {
            match code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.request_quit();
                    return false;
                }
                KeyCode::Char('t') => {
                    self.toggle_theme();
                    return true;
                }
                _ => {}
            }
        }

        // A modal overlay swallows everything except its close keys.
        if self.overlay != OverlayState::Idle {
            return match code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.close_overlay();
                    true
                }
                _ => false,
            };
        }

        match code {
            KeyCode::Tab => {
                self.page = self.page.next();
                return true;
            }
            KeyCode::BackTab => {
                self.page = self.page.prev();
                return true;
            }
            _ => {}
        }

        match self.page {
            Page::Home => self.handle_home_key(code, modifiers),
            Page::Projects => self.handle_projects_key(code),
            Page::About => self.handle_about_key(code),
        }
    }

    /// The home page routes printable keys into the terminal input line.
    fn handle_home_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char(c)
                if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT =>
            {
                self.input.push(c);
                true
            }
            KeyCode::Backspace => {
                self.input.pop();
                true
            }
            KeyCode::Enter => {
                self.submit_input();
                true
            }
            KeyCode::Up => {
                self.recall_prev();
                true
            }
            KeyCode::Down => {
                self.recall_next();
                true
            }
            _ => false,
        }
    }

    fn handle_projects_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up => {
                self.move_project_cursor(-1);
                true
            }
            KeyCode::Down => {
                self.move_project_cursor(1);
                true
            }
            KeyCode::Left => {
                self.move_tag_cursor(-1);
                true
            }
            KeyCode::Right => {
                self.move_tag_cursor(1);
                true
            }
            KeyCode::Char(' ') => {
                self.toggle_tag_at_cursor();
                true
            }
            KeyCode::Backspace => {
                self.clear_filters();
                true
            }
            KeyCode::Enter => {
                self.open_selected_project();
                true
            }
            _ => false,
        }
    }

    fn handle_about_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Left => {
                self.about_tab = self.about_tab.prev();
                true
            }
            KeyCode::Right => {
                self.about_tab = self.about_tab.next();
                true
            }
            _ => false,
        }
    }
}
