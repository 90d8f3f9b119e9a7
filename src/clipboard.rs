/// System clipboard access for copying result paths and pasting JSON.
///
/// CLI tools (wl-copy/xclip) are tried first — they persist clipboard
/// content independently of the process, which matters for TUI apps.
/// arboard is the fallback when neither tool is available.
pub struct Clipboard {
    system: Option<arboard::Clipboard>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self {
            system: arboard::Clipboard::new().ok(),
        }
    }

    /// Copy text to the system clipboard. Returns false if every backend failed.
    pub fn copy(&mut self, text: &str) -> bool {
        if Self::copy_with_cli(text) {
            return true;
        }
        if let Some(ref mut cb) = self.system {
            return cb.set_text(text.to_string()).is_ok();
        }
        false
    }

    /// Read text from the system clipboard, if any backend can provide it.
    pub fn paste(&mut self) -> Option<String> {
        if let Some(text) = Self::paste_with_cli() {
            return Some(text);
        }
        self.system.as_mut().and_then(|cb| cb.get_text().ok())
    }

    fn copy_with_cli(text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        // Try wl-copy first (Wayland), then xclip (X11)
        let commands: &[&[&str]] = &[&["wl-copy"], &["xclip", "-selection", "clipboard"]];

        for cmd in commands {
            if let Ok(mut child) = Command::new(cmd[0])
                .args(&cmd[1..])
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                if let Some(ref mut stdin) = child.stdin {
                    let _ = stdin.write_all(text.as_bytes());
                }
                if let Ok(status) = child.wait() {
                    if status.success() {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn paste_with_cli() -> Option<String> {
        use std::process::Command;

        let commands: &[&[&str]] = &[
            &["wl-paste", "--no-newline"],
            &["xclip", "-selection", "clipboard", "-o"],
        ];

        for cmd in commands {
            if let Ok(output) = Command::new(cmd[0]).args(&cmd[1..]).output() {
                if output.status.success() {
                    if let Ok(text) = String::from_utf8(output.stdout) {
                        return Some(text);
                    }
                }
            }
        }
        None
    }
}
