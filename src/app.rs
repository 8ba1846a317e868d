//! Browser state: the catalog, the current selection, the highlighted row and
//! the open acknowledgment, plus the key bindings that drive them.
//!
//! Selection changes are pure (`Selection::apply`); the clipboard is only
//! touched from `App::dispatch`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::catalog::{Catalog, CommandRecord};
use crate::clipboard::{copy_record, Clipboard, CopyOptions};
use crate::filter::{category_options, CategoryFilter};
use crate::i18n::I18n;
use crate::state::{Selection, SelectionChange};

const PAGE: isize = 5;

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Change(SelectionChange),
    Move(isize),
    Copy { include_description: bool },
    Dismiss,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Blocking acknowledgment shown after a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub success: bool,
    pub message: String,
}

pub fn intent(key: KeyEvent, notice_open: bool) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c' | 'C' | 'd' | 'D')) {
        return Some(Intent::Quit);
    }
    if notice_open {
        return Some(Intent::Dismiss);
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('l' | 'L') => Some(Intent::Change(SelectionChange::ToggleLanguage)),
            KeyCode::Char('e' | 'E') => Some(Intent::Copy {
                include_description: true,
            }),
            KeyCode::Char('p' | 'P') => Some(Intent::Move(-1)),
            KeyCode::Char('n' | 'N') => Some(Intent::Move(1)),
            KeyCode::Char('u' | 'U') => Some(Intent::Change(SelectionChange::ClearQuery)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Up => Some(Intent::Move(-1)),
        KeyCode::Down => Some(Intent::Move(1)),
        KeyCode::PageUp => Some(Intent::Move(-PAGE)),
        KeyCode::PageDown => Some(Intent::Move(PAGE)),
        KeyCode::Left => Some(Intent::Change(SelectionChange::PreviousVersion)),
        KeyCode::Right => Some(Intent::Change(SelectionChange::NextVersion)),
        KeyCode::Tab => Some(Intent::Change(SelectionChange::NextCategory)),
        KeyCode::BackTab => Some(Intent::Change(SelectionChange::PreviousCategory)),
        KeyCode::Enter => Some(Intent::Copy { include_description: false }),
        KeyCode::Backspace => Some(Intent::Change(SelectionChange::PopChar)),
        KeyCode::Delete => Some(Intent::Change(SelectionChange::ClearQuery)),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Intent::Change(SelectionChange::PushChar(c)))
        }
        _ => None,
    }
}

pub struct App {
    catalog: Catalog,
    options: Vec<CategoryFilter>,
    selection: Selection,
    i18n: I18n,
    cursor: usize,
    notice: Option<Notice>,
    comment_prefix: String,
}

impl App {
    pub fn new(catalog: Catalog, selection: Selection, comment_prefix: &str) -> Self {
        let options = category_options(&catalog);
        let i18n = I18n::new(selection.language);
        Self {
            catalog,
            options,
            selection,
            i18n,
            cursor: 0,
            notice: None,
            comment_prefix: comment_prefix.to_string(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn category_options(&self) -> &[CategoryFilter] {
        &self.options
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn visible(&self) -> Vec<&CommandRecord> {
        self.selection.visible(&self.catalog)
    }

    pub fn handle_key(&mut self, key: KeyEvent, clipboard: &mut dyn Clipboard) -> Control {
        match intent(key, self.notice.is_some()) {
            Some(intent) => self.dispatch(intent, clipboard),
            None => Control::Continue,
        }
    }

    pub fn dispatch(&mut self, intent: Intent, clipboard: &mut dyn Clipboard) -> Control {
        match intent {
            Intent::Quit => return Control::Quit,
            Intent::Dismiss => self.notice = None,
            Intent::Change(change) => {
                let next = self.selection.apply(change, &self.options);
                if next != self.selection {
                    self.cursor = 0;
                }
                self.i18n.set_language(next.language);
                self.selection = next;
            }
            Intent::Move(delta) => {
                let len = self.visible().len();
                if len > 0 {
                    let target = self.cursor as isize + delta;
                    self.cursor = target.clamp(0, len as isize - 1) as usize;
                }
            }
            Intent::Copy { include_description } => {
                let options = CopyOptions {
                    include_description,
                    comment_prefix: self.comment_prefix.clone(),
                };
                let lang = self.selection.language;
                let outcome = self
                    .selection
                    .visible(&self.catalog)
                    .get(self.cursor)
                    .map(|record| copy_record(clipboard, record, lang, &options));
                if let Some(outcome) = outcome {
                    self.notice = Some(Notice {
                        success: outcome.is_success(),
                        message: outcome.message(&self.i18n),
                    });
                }
            }
        }
        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GameVersion, Language};
    use crate::clipboard::mock::MockClipboard;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app(lang: Language) -> App {
        let catalog = Catalog::builtin().unwrap();
        App::new(
            catalog,
            Selection::new(lang, GameVersion::Cs2, CategoryFilter::All),
            "// ",
        )
    }

    fn type_text(app: &mut App, clipboard: &mut MockClipboard, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)), clipboard);
        }
    }

    #[test]
    fn typing_filters_the_list() {
        let mut app = app(Language::En);
        let mut clipboard = MockClipboard::default();
        type_text(&mut app, &mut clipboard, "bot");
        let ids: Vec<&str> = app.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["bot_place", "bot_add"]);
        app.handle_key(key(KeyCode::Delete), &mut clipboard);
        assert_eq!(app.visible().len(), 8);
    }

    #[test]
    fn enter_copies_highlighted_command() {
        let mut app = app(Language::En);
        let mut clipboard = MockClipboard::default();
        type_text(&mut app, &mut clipboard, "bot");
        app.handle_key(key(KeyCode::Down), &mut clipboard);
        app.handle_key(key(KeyCode::Enter), &mut clipboard);
        assert_eq!(clipboard.writes, vec!["bot_add <T|CT> <count>"]);
        let notice = app.notice().unwrap();
        assert!(notice.success);
        assert_eq!(notice.message, "Copied to clipboard");
    }

    #[test]
    fn ctrl_e_copies_with_description_in_current_language() {
        let mut app = app(Language::Ru);
        let mut clipboard = MockClipboard::default();
        app.handle_key(ctrl('e'), &mut clipboard);
        let record = app.catalog().get("sv_infinite_ammo").unwrap();
        let text = record.text(Language::Ru);
        assert_eq!(
            clipboard.writes,
            vec![format!("{}\n// {}", text.command, text.description)]
        );
        assert_eq!(app.notice().unwrap().message, "Скопировано в буфер обмена с описанием");
    }

    #[test]
    fn notice_swallows_next_key() {
        let mut app = app(Language::En);
        let mut clipboard = MockClipboard {
            fail: true,
            ..Default::default()
        };
        app.handle_key(key(KeyCode::Enter), &mut clipboard);
        let notice = app.notice().unwrap().clone();
        assert!(!notice.success);
        assert!(notice.message.starts_with("Copy failed"));

        let before = app.selection().clone();
        assert_eq!(app.handle_key(key(KeyCode::Esc), &mut clipboard), Control::Continue);
        assert!(app.notice().is_none());
        assert_eq!(app.selection(), &before);
        assert_eq!(app.handle_key(key(KeyCode::Esc), &mut clipboard), Control::Quit);
    }

    #[test]
    fn ctrl_c_quits_while_notice_is_open() {
        let mut app = app(Language::En);
        let mut clipboard = MockClipboard::default();
        app.handle_key(key(KeyCode::Enter), &mut clipboard);
        assert!(app.notice().is_some());
        assert_eq!(app.handle_key(ctrl('c'), &mut clipboard), Control::Quit);
        assert_eq!(intent(ctrl('d'), true), Some(Intent::Quit));
        assert_eq!(intent(ctrl('l'), true), Some(Intent::Dismiss));
    }

    #[test]
    fn language_toggle_switches_strings() {
        let mut app = app(Language::En);
        let mut clipboard = MockClipboard::default();
        app.handle_key(ctrl('l'), &mut clipboard);
        assert_eq!(app.selection().language, Language::Ru);
        assert_eq!(app.i18n().t("no_commands"), "Команды не найдены");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app(Language::En);
        let mut clipboard = MockClipboard::default();
        app.handle_key(key(KeyCode::PageDown), &mut clipboard);
        app.handle_key(key(KeyCode::PageDown), &mut clipboard);
        assert_eq!(app.cursor(), 7);
        app.handle_key(key(KeyCode::Left), &mut clipboard);
        assert_eq!(app.selection().version, GameVersion::Cs16);
        assert_eq!(app.cursor(), 0);
        app.handle_key(key(KeyCode::Up), &mut clipboard);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn copy_on_empty_list_does_nothing() {
        let mut app = app(Language::En);
        let mut clipboard = MockClipboard::default();
        type_text(&mut app, &mut clipboard, "zzzz");
        app.handle_key(key(KeyCode::Enter), &mut clipboard);
        assert!(clipboard.writes.is_empty());
        assert!(app.notice().is_none());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = key(KeyCode::Char('x'));
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        assert_eq!(intent(release, false), None);
        assert_eq!(intent(ctrl('c'), false), Some(Intent::Quit));
        assert_eq!(
            intent(key(KeyCode::Tab), false),
            Some(Intent::Change(SelectionChange::NextCategory))
        );
    }
}
