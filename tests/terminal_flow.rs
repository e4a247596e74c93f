//! End-to-end flows: drive the app with key events the way the event loop
//! does and assert on the resulting state.

use crossterm::event::{KeyCode, KeyModifiers};
use folio::app::{App, OverlayState, Page};
use folio::config::UiConfig;
use folio::content::bundled;
use folio::services::app_dirs::AppDirs;
use folio::services::prefs;
use folio::view::theme::ThemeChoice;
use tempfile::TempDir;

fn start_app() -> (TempDir, App) {
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

fn type_line(app: &mut App, line: &str) {
    for c in line.chars() {
        app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
    }
    app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
}

#[test]
fn a_full_terminal_session() {
    let (_temp, mut app) = start_app();

    type_line(&mut app, "help");
    type_line(&mut app, "ls");
    type_line(&mut app, "cat euler.py");
    type_line(&mut app, "frobnicate");
    assert_eq!(app.history.len(), 4);

    // Unknown commands land in the transcript with the default message.
    let last = &app.history.entries()[3];
    assert_eq!(last.input, "frobnicate");
    assert_eq!(
        last.response.lines[0].text,
        "Command not found. Type 'help' for available commands."
    );

    // Blank submissions leave no trace.
    type_line(&mut app, "   ");
    assert_eq!(app.history.len(), 4);

    type_line(&mut app, "clear");
    assert!(app.history.is_empty());
}

#[test]
fn run_reveals_its_output_over_ticks() {
    let (_temp, mut app) = start_app();

    type_line(&mut app, "run euler.py");
    let total = app.history.entries()[0].response.lines.len();
    assert!(total > 1);
    assert_eq!(app.history.entries()[0].revealed, 1);

    // Tick until the reveal completes; it must terminate well within bounds.
    let mut ticks = 0;
    while !app.history.entries()[0].fully_revealed() {
        app.on_tick();
        ticks += 1;
        assert!(ticks < 100, "reveal never completed");
    }
    assert_eq!(app.history.entries()[0].revealed, total);
}

#[test]
fn cd_opens_the_overlay_and_escape_closes_it() {
    let (_temp, mut app) = start_app();

    type_line(&mut app, "cd portfolio-site");
    assert_eq!(
        app.overlay,
        OverlayState::Open("portfolio-site".to_string())
    );

    // While open, typed characters are swallowed.
    app.handle_key(KeyCode::Char('z'), KeyModifiers::NONE);
    assert!(app.input.is_empty());

    app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(app.overlay, OverlayState::Idle);

    // A bad target never opens it.
    type_line(&mut app, "cd nowhere");
    assert_eq!(app.overlay, OverlayState::Idle);
    assert_eq!(
        app.history.entries().last().unwrap().response.lines[0].text,
        "Directory not found: nowhere"
    );
}

#[test]
fn browsing_projects_with_a_filter() {
    let (_temp, mut app) = start_app();

    app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
    assert_eq!(app.page, Page::Projects);
    let total = app.store.projects().len();

    // Select the first tag and confirm the list narrows.
    app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
    let filtered = app.visible_projects().len();
    assert!(filtered < total);
    assert!(filtered > 0);

    // Open the first visible project's overlay.
    app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    let expected = app.visible_projects()[0].id.clone();
    assert_eq!(app.overlay, OverlayState::Open(expected));
    app.handle_key(KeyCode::Esc, KeyModifiers::NONE);

    // Clearing filters restores everything.
    app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
    assert_eq!(app.visible_projects().len(), total);
}

#[test]
fn theme_toggle_survives_a_restart() {
    let (temp, mut app) = start_app();
    app.handle_key(KeyCode::Char('t'), KeyModifiers::CONTROL);
    assert_eq!(app.theme_choice, ThemeChoice::Light);
    drop(app);

    // The next session reads the preference back.
    let dirs = AppDirs::for_testing(temp.path());
    let saved = prefs::load_theme(&dirs.theme_pref_path());
    assert_eq!(saved, Some(ThemeChoice::Light));

    let app = App::new(bundled().clone(), saved.unwrap(), &dirs, &UiConfig::default());
    assert_eq!(app.theme_choice, ThemeChoice::Light);
}

#[test]
fn recall_walks_submitted_commands() {
    let (_temp, mut app) = start_app();

    type_line(&mut app, "help");
    type_line(&mut app, "ls");
    type_line(&mut app, "cat motd.txt");

    app.handle_key(KeyCode::Up, KeyModifiers::NONE);
    assert_eq!(app.input, "cat motd.txt");
    app.handle_key(KeyCode::Up, KeyModifiers::NONE);
    assert_eq!(app.input, "ls");
    app.handle_key(KeyCode::Down, KeyModifiers::NONE);
    assert_eq!(app.input, "cat motd.txt");
    app.handle_key(KeyCode::Down, KeyModifiers::NONE);
    assert!(app.input.is_empty());
}
