//! Non-interactive UI for CI/headless environments.

use super::theme::LintTheme;
use super::{OutputMode, ProgressSpinner, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Never draws spinners and never colors output.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: LintTheme,
    is_ci: bool,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_ci(mode, is_ci())
    }

    /// Create with explicit CI flag (for testing).
    pub fn with_ci(mode: OutputMode, is_ci: bool) -> Self {
        Self {
            mode,
            theme: LintTheme::plain(),
            is_ci,
        }
    }

    /// Whether a CI environment was detected.
    pub fn is_ci(&self) -> bool {
        self.is_ci
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::hidden())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn explicit_ci_flag() {
        assert!(NonInteractiveUI::with_ci(OutputMode::Normal, true).is_ci());
        assert!(!NonInteractiveUI::with_ci(OutputMode::Normal, false).is_ci());
    }

    #[test]
    fn spinner_is_hidden() {
        let mut ui = NonInteractiveUI::with_ci(OutputMode::Verbose, false);
        let mut spinner = ui.start_spinner("Linting");
        spinner.finish_clear();
    }
}
