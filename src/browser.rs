use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::{cursor, execute, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use std::sync::Once;

use crate::app::{App, Control};
use crate::clipboard::Clipboard;
use crate::listing;
use crate::ui;

/// Runs the interactive browser until the user quits. Falls back to the
/// printed listing when the terminal cannot enter raw mode.
pub fn run(app: &mut App, clipboard: &mut dyn Clipboard, use_alt_screen: bool) -> Result<()> {
    static INIT_CTRL_C: Once = Once::new();
    INIT_CTRL_C.call_once(|| {
        let _ = ctrlc::set_handler(move || {
            // Best-effort restore terminal state and exit with 130
            let _ = terminal::disable_raw_mode();
            print!("\x1b[?25h\x1b[?1049l");
            let _ = io::stdout().flush();
            std::process::exit(130);
        });
    });

    if terminal::enable_raw_mode().is_err() {
        println!("{}", app.i18n().t("warning_interactive_failed"));
        print_simple(app);
        return Ok(());
    }

    let mut stdout = io::stdout();
    if use_alt_screen {
        execute!(stdout, terminal::EnterAlternateScreen)?;
    }
    execute!(stdout, cursor::Hide)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
        original_hook(info);
    }));

    let mut tui = Terminal::new(CrosstermBackend::new(stdout))?;
    let result = event_loop(&mut tui, app, clipboard);

    // Restore terminal settings even when the loop failed
    let _ = terminal::disable_raw_mode();
    if use_alt_screen {
        let _ = execute!(tui.backend_mut(), terminal::LeaveAlternateScreen);
    } else {
        let _ = tui.clear();
    }
    let _ = execute!(tui.backend_mut(), cursor::Show);
    let _ = std::panic::take_hook();

    result
}

fn event_loop(
    tui: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    loop {
        tui.draw(|frame| ui::draw(frame, app))
            .context("failed to draw the browser")?;

        match event::read().context("failed to read terminal input")? {
            Event::Key(key) => {
                if app.handle_key(key, clipboard) == Control::Quit {
                    return Ok(());
                }
            }
            // Resize and focus events just trigger a redraw
            _ => {}
        }
    }
}

/// Prints the current selection's results without entering raw mode.
pub fn print_simple(app: &App) {
    let visible = app.visible();
    print!(
        "{}",
        listing::render_text(&visible, app.selection(), app.catalog().len(), app.i18n())
    );
}
