use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

use crate::catalog::{CommandRecord, Language};
use crate::i18n::I18n;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard: {0}")]
    System(#[from] arboard::Error),
    #[error("failed to launch {program}: {source}")]
    Spawn { program: String, source: io::Error },
    #[error("failed to write to {program}: {source}")]
    Write { program: String, source: io::Error },
    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Destination for copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A program that reads the text to copy from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardTool {
    /// Splits a configured command line on whitespace.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?;
        Some(Self {
            program: program.to_string(),
            args: parts.map(str::to_string).collect(),
        })
    }

    fn pipe(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(source) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(ClipboardError::Write {
                    program: self.program.clone(),
                    source,
                });
            }
        }

        let status = child.wait().map_err(|source| ClipboardError::Write {
            program: self.program.clone(),
            source,
        })?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Failed {
                program: self.program.clone(),
                status,
            })
        }
    }
}

/// Host clipboard. Uses the native clipboard unless `clipboard.command`
/// names a program to pipe into instead.
pub struct SystemClipboard {
    command: Option<ClipboardTool>,
    // Kept across writes; X11 selections are dropped with the handle
    native: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new(configured: Option<&str>) -> Self {
        let command = configured.and_then(ClipboardTool::parse);
        match &command {
            Some(tool) => log::debug!("clipboard: piping into {}", tool.program),
            None => log::debug!("clipboard: native"),
        }
        Self {
            command,
            native: None,
        }
    }

    fn native(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        let clipboard = match self.native.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        Ok(self.native.insert(clipboard))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(tool) = &self.command {
            return tool.pipe(text);
        }
        self.native()?.set_text(text)?;
        log::debug!("copied {} bytes to the native clipboard", text.len());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOptions {
    pub include_description: bool,
    pub comment_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { with_description: bool },
    Failed { reason: String },
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CopyOutcome::Copied { .. })
    }

    pub fn message(&self, i18n: &I18n) -> String {
        match self {
            CopyOutcome::Copied { with_description: false } => i18n.t("copied"),
            CopyOutcome::Copied { with_description: true } => i18n.t("copied_with_desc"),
            CopyOutcome::Failed { reason } => i18n.t_format("copy_failed", &[reason]),
        }
    }
}

/// Text written to the clipboard for a record.
pub fn payload(record: &CommandRecord, lang: Language, options: &CopyOptions) -> String {
    let text = record.text(lang);
    if options.include_description {
        format!("{}\n{}{}", text.command, options.comment_prefix, text.description)
    } else {
        text.command.clone()
    }
}

pub fn copy_record(
    clipboard: &mut dyn Clipboard,
    record: &CommandRecord,
    lang: Language,
    options: &CopyOptions,
) -> CopyOutcome {
    match clipboard.set_text(&payload(record, lang, options)) {
        Ok(()) => CopyOutcome::Copied {
            with_description: options.include_description,
        },
        Err(err) => {
            log::warn!("copy of {} failed: {}", record.id, err);
            CopyOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockClipboard;
    use super::*;
    use crate::catalog::Catalog;

    fn options(include_description: bool) -> CopyOptions {
        CopyOptions {
            include_description,
            comment_prefix: "// ".to_string(),
        }
    }

    #[test]
    fn copies_command_verbatim() {
        let catalog = Catalog::builtin().unwrap();
        let record = catalog.get("bot_add").unwrap();
        let mut clipboard = MockClipboard::default();
        let outcome = copy_record(&mut clipboard, record, Language::En, &options(false));
        assert_eq!(outcome, CopyOutcome::Copied { with_description: false });
        assert_eq!(clipboard.writes, vec!["bot_add <T|CT> <count>"]);
    }

    #[test]
    fn copies_command_with_description() {
        let catalog = Catalog::builtin().unwrap();
        let record = catalog.get("mp_buytime").unwrap();
        let mut clipboard = MockClipboard::default();
        copy_record(&mut clipboard, record, Language::Ru, &options(true));
        let text = record.text(Language::Ru);
        assert_eq!(
            clipboard.writes,
            vec![format!("{}\n// {}", text.command, text.description)]
        );
    }

    #[test]
    fn failure_is_reported_not_raised() {
        let catalog = Catalog::builtin().unwrap();
        let record = catalog.get("sv_cheats").unwrap();
        let mut clipboard = MockClipboard {
            fail: true,
            ..Default::default()
        };
        let outcome = copy_record(&mut clipboard, record, Language::En, &options(true));
        assert!(!outcome.is_success());
        assert!(clipboard.writes.is_empty());
    }

    #[test]
    fn messages_differ_between_success_and_failure() {
        let i18n = I18n::new(Language::Ru);
        let ok = CopyOutcome::Copied { with_description: false }.message(&i18n);
        let ok_desc = CopyOutcome::Copied { with_description: true }.message(&i18n);
        let failed = CopyOutcome::Failed { reason: "denied".to_string() }.message(&i18n);
        assert_eq!(ok, "Скопировано в буфер обмена");
        assert_ne!(ok, ok_desc);
        assert_eq!(failed, "Не удалось скопировать: denied");
    }

    #[test]
    fn configured_command_line_is_split() {
        assert_eq!(
            ClipboardTool::parse("xclip -selection clipboard"),
            Some(ClipboardTool {
                program: "xclip".to_string(),
                args: vec!["-selection".to_string(), "clipboard".to_string()],
            })
        );
        assert_eq!(ClipboardTool::parse("   "), None);
    }

    #[test]
    fn native_clipboard_is_the_default() {
        assert!(SystemClipboard::new(None).command.is_none());
        assert!(SystemClipboard::new(Some("  ")).command.is_none());
        let piped = SystemClipboard::new(Some("wl-copy"));
        assert_eq!(piped.command.unwrap().program, "wl-copy");
    }

    #[cfg(unix)]
    #[test]
    fn configured_command_receives_exact_utf8_payload() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.txt");
        let catalog = Catalog::builtin().unwrap();
        let record = catalog.get("sv_cheats").unwrap();
        let mut clipboard = SystemClipboard::new(Some(&format!("tee {}", out.display())));

        let outcome = copy_record(&mut clipboard, record, Language::Ru, &options(true));

        assert!(outcome.is_success());
        let expected = payload(record, Language::Ru, &options(true));
        assert_eq!(std::fs::read_to_string(&out).unwrap(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_is_reported() {
        let mut clipboard = SystemClipboard::new(Some("false"));
        let big = "x".repeat(1 << 20);
        assert!(matches!(
            clipboard.set_text(&big),
            Err(ClipboardError::Write { .. }) | Err(ClipboardError::Failed { .. })
        ));
    }

    #[test]
    fn missing_command_is_a_spawn_error() {
        let mut clipboard = SystemClipboard::new(Some("cch-no-such-clipboard-tool"));
        assert!(matches!(
            clipboard.set_text("x"),
            Err(ClipboardError::Spawn { .. })
        ));
    }
}
