//! Rendering of the command browser.
//!
//! ```text
//! +--[ CS Commands Hub ]------------------------ [Ctrl+L] English --+
//! | Popular console commands ...             Version: < CS2 >       |
//! +-- Search ----------+--- 8 of 8 commands ------------------------+
//! | infinite_          | ▌ Infinite ammo          [Copy] [Copy ...] |
//! +-- Category --------+   Practice • CS2, CS:GO                    |
//! |   All              |    sv_infinite_ammo 1                      |
//! | > Practice         |   Gives unlimited ammo ...                 |
//! +-- How to use ------+   Tip: use mp_restartgame 1 ...            |
//! | 1. Open console .. |                                            |
//! +--------------------+--------------------------------------------+
//! | Made for practice ... / Note ... / key hints                    |
//! +-----------------------------------------------------------------+
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::catalog::CommandRecord;
use crate::i18n::I18n;

/// Draw the whole browser for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Sidebar + results
            Constraint::Length(5), // Footer
        ])
        .split(frame.size());

    draw_header(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(33), Constraint::Percentage(67)])
        .split(chunks[1]);
    draw_sidebar(frame, app, body[0]);
    draw_results(frame, app, body[1]);

    draw_footer(frame, app, chunks[2]);

    if app.notice().is_some() {
        draw_notice(frame, app);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let i18n = app.i18n();
    let selection = app.selection();

    let title_line = Line::from(vec![
        Span::styled(
            i18n.t("app_title"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[Ctrl+L] ", Style::default().fg(Color::DarkGray)),
        Span::styled(i18n.t("language_name"), Style::default().fg(Color::Cyan)),
        Span::raw("   "),
        Span::styled(
            format!("{}: ", i18n.t("version_label")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("< {} >", selection.version.label()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]);
    let tagline = Line::from(Span::styled(i18n.t("tagline"), Style::default().fg(Color::Gray)));

    let header =
        Paragraph::new(vec![title_line, tagline]).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let i18n = app.i18n();
    let options = app.category_options();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(options.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    // Search box
    let query = &app.selection().query;
    let search_line = if query.is_empty() {
        Line::from(Span::styled(i18n.t("search_placeholder"), Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![
            Span::raw(query.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])
    };
    let search = Paragraph::new(search_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", i18n.t("search_label"))),
    );
    frame.render_widget(search, chunks[0]);

    // Category selector
    let items: Vec<ListItem> = options
        .iter()
        .map(|option| {
            if *option == app.selection().category {
                ListItem::new(Line::from(Span::styled(
                    format!("> {}", option.label()),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )))
            } else {
                ListItem::new(format!("  {}", option.label()))
            }
        })
        .collect();
    let categories = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} [Tab] ", i18n.t("category_label"))),
    );
    frame.render_widget(categories, chunks[1]);

    // How to use
    let steps = vec![
        Line::from(format!("1. {}", i18n.t("how_to_step_console"))),
        Line::from(format!("2. {}", i18n.t("how_to_step_cheats"))),
    ];
    let how_to = Paragraph::new(steps)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", i18n.t("how_to_use"))),
        );
    frame.render_widget(how_to, chunks[2]);
}

fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    let i18n = app.i18n();
    let visible = app.visible();
    let title = format!(
        " {} ",
        i18n.t_format(
            "results_count",
            &[&visible.len().to_string(), &app.catalog().len().to_string()]
        )
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    if visible.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            i18n.t("no_commands"),
            Style::default().fg(Color::Red),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    // Inner width minus the highlight symbol
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, record)| command_card(record, app, i18n, width, i == app.cursor()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(30, 34, 42)))
        .highlight_symbol("▌ ");
    let mut state = ListState::default().with_selected(Some(app.cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn command_card<'a>(
    record: &CommandRecord,
    app: &App,
    i18n: &I18n,
    width: usize,
    highlighted: bool,
) -> ListItem<'a> {
    let text = record.text(app.selection().language);
    let button_style = if highlighted {
        Style::default().fg(Color::Black).bg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                text.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("[{}]", i18n.t("copy_button")), button_style),
            Span::raw(" "),
            Span::styled(format!("[{}]", i18n.t("copy_desc_button")), button_style),
        ]),
        Line::from(Span::styled(
            format!("{} • {}", record.category, record.versions_label()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!(" {} ", text.command),
            Style::default().fg(Color::Yellow).bg(Color::Rgb(40, 44, 52)),
        )),
    ];
    for row in wrap_text(&text.description, width) {
        lines.push(Line::from(row));
    }
    for row in wrap_text(&i18n.t("card_tip"), width) {
        lines.push(Line::from(Span::styled(row, Style::default().fg(Color::DarkGray))));
    }
    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let i18n = app.i18n();
    let lines = vec![
        Line::from(Span::styled(i18n.t("footer_made_for"), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(i18n.t("footer_note"), Style::default().fg(Color::Gray))),
        Line::from(Span::styled(i18n.t("key_hints"), Style::default().fg(Color::DarkGray))),
    ];
    let footer = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn draw_notice(frame: &mut Frame, app: &App) {
    let Some(notice) = app.notice() else {
        return;
    };
    let i18n = app.i18n();
    let (title, color) = if notice.success {
        (i18n.t("notice_title_ok"), Color::Green)
    } else {
        (i18n.t("notice_title_error"), Color::Red)
    };

    let area = centered_rect(60, 6, frame.size());
    let body = vec![
        Line::from(Span::styled(
            notice.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(i18n.t("notice_dismiss"), Style::default().fg(Color::DarkGray))),
    ];
    let popup = Paragraph::new(body).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", title)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// A rect of `percent_x`% width and `height` rows centered in `r`.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = (r.width as u32 * percent_x as u32 / 100) as u16;
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width.saturating_sub(width)) / 2,
        y: r.y + (r.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Greedy word wrap by display width; words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        for ch in word.chars() {
            if !current.is_empty() && current.width() + ch.width().unwrap_or(0) > width {
                rows.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, GameVersion, Language};
    use crate::clipboard::mock::MockClipboard;
    use crate::filter::CategoryFilter;
    use crate::state::Selection;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app(lang: Language) -> App {
        App::new(
            Catalog::builtin().unwrap(),
            Selection::new(lang, GameVersion::Cs2, CategoryFilter::All),
            "// ",
        )
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(app: &mut App, code: KeyCode) {
        let mut clipboard = MockClipboard::default();
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut clipboard);
    }

    #[test]
    fn renders_english_labels_and_first_card() {
        let app = app(Language::En);
        let screen = render(&app, 140, 40);
        assert!(screen.contains("CS Commands Hub"));
        assert!(screen.contains("Infinite ammo"));
        assert!(screen.contains("sv_infinite_ammo 1"));
        assert!(screen.contains("8 of 8 commands"));
        assert!(screen.contains("How to use"));
    }

    #[test]
    fn renders_russian_labels() {
        let app = app(Language::Ru);
        let screen = render(&app, 140, 40);
        assert!(screen.contains("Бесконечные патроны"));
        assert!(screen.contains("Как использовать"));
        assert!(screen.contains("Русский"));
    }

    #[test]
    fn empty_result_shows_placeholder() {
        let mut app = app(Language::En);
        for c in "no such thing".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        let screen = render(&app, 140, 40);
        assert!(screen.contains("No commands found"));
        assert!(!screen.contains("Infinite ammo"));
    }

    #[test]
    fn notice_popup_is_drawn() {
        let mut app = app(Language::En);
        press(&mut app, KeyCode::Enter);
        let screen = render(&app, 140, 40);
        assert!(screen.contains("Copied to clipboard"));
        assert!(screen.contains("Press any key to continue"));
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let app = app(Language::Ru);
        render(&app, 20, 5);
    }

    #[test]
    fn wraps_by_display_width() {
        assert_eq!(wrap_text("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(wrap_text("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(wrap_text("Позволяет покупать", 10), vec!["Позволяет", "покупать"]);
        assert!(wrap_text("", 10).is_empty());
    }
}
