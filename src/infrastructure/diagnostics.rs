use std::fmt::Display;

/// Human-readable progress lines on stderr, silent unless enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    enabled: bool,
}

impl Diagnostics {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn note(&self, msg: impl Display) {
        if self.enabled {
            eprintln!("greeter: {msg}");
        }
    }

    pub fn warn(&self, msg: impl Display) {
        if self.enabled {
            eprintln!("greeter: warning: {msg}");
        }
    }
}
