//! Blocking event loop driving the demo page on the terminal.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use trellis::prelude::{ThemeMode, TrellisTheme};
use trellis_dom::{ColorContext, FocusState, Terminal};

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::page::{DemoPage, PageAction};
use crate::sample::User;

/// Keys the host handles before anything reaches the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Global {
    Quit,
    ToggleTheme,
}

fn global_key(raw: &CrosstermEvent) -> Option<Global> {
    let CrosstermEvent::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = raw
    else {
        return None;
    };
    if *kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Esc => Some(Global::Quit),
        KeyCode::Char('c') if ctrl => Some(Global::Quit),
        KeyCode::Char('t') if ctrl => Some(Global::ToggleTheme),
        _ => None,
    }
}

/// The tree is rebuilt only when something it reflects has changed. Focus
/// counts because `FocusState::apply` marks elements but never unmarks them.
fn needs_rebuild(
    theme_toggled: bool,
    page_dirty: bool,
    before: Option<&str>,
    after: Option<&str>,
) -> bool {
    theme_toggled || page_dirty || before != after
}

pub fn run(config: &DemoConfig, users: Vec<User>) -> Result<(), DemoError> {
    let page = DemoPage::new(users);
    let mut mode = config.theme_mode();
    let mut focus = FocusState::new();
    let mut terminal = Terminal::new()?;
    let mut root = page.render(mode);

    log::info!("demo started in {} mode", mode.as_str());

    loop {
        focus.validate(&root);
        focus.apply(&mut root);
        let theme = TrellisTheme::for_mode(mode);
        terminal.render(&root, &ColorContext::new(&theme))?;

        let focused_before = focus.focused().map(str::to_string);
        let mut toggle_theme = false;
        for raw in terminal.poll(None)? {
            match global_key(&raw) {
                Some(Global::Quit) => {
                    log::info!("quit requested");
                    return Ok(());
                }
                Some(Global::ToggleTheme) => {
                    toggle_theme = !toggle_theme;
                    continue;
                }
                None => {}
            }

            for event in focus.translate(&raw, &root, terminal.layout()) {
                log::trace!("event {event:?}");
                if page.dispatch(&event) == PageAction::ToggleTheme {
                    toggle_theme = !toggle_theme;
                }
            }
        }

        if toggle_theme {
            mode = mode.toggled();
            log::info!("theme switched to {}", mode.as_str());
        }
        let page_dirty = page.take_dirty();
        if needs_rebuild(toggle_theme, page_dirty, focused_before.as_deref(), focus.focused()) {
            log::debug!("rebuilding page (dirty: {page_dirty})");
            root = page.render(mode);
        }
    }
}
