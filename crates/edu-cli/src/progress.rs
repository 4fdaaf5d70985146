use std::io::IsTerminal;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::cli::{GlobalFlags, OutputFormat};

/// Spinner set for in-flight lanes.
///
/// Disabled (every call a no-op) when stderr is not a terminal, in quiet mode,
/// or for machine-readable output.
pub struct Spinners {
    multi: Option<MultiProgress>,
}

impl Spinners {
    #[must_use]
    pub fn new(flags: &GlobalFlags) -> Self {
        let enabled = std::io::stderr().is_terminal()
            && !flags.quiet
            && flags.format == OutputFormat::Text;
        Self {
            multi: enabled.then(MultiProgress::new),
        }
    }

    #[must_use]
    pub fn spinner(&self, message: &str) -> Spinner {
        let Some(multi) = &self.multi else {
            return Spinner { bar: None };
        };

        let bar = multi.add(ProgressBar::new_spinner());
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Spinner { bar: Some(bar) }
    }

    /// Print a line without tearing the spinners.
    pub fn println(&self, text: &str) {
        match &self.multi {
            Some(multi) => multi.suspend(|| println!("{text}")),
            None => println!("{text}"),
        }
    }
}

pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
