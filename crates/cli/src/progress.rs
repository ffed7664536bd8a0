//! Progress bar fed by sync notifications

use chrono::NaiveDate;
use console::Term;
use harvestmine_core::SyncObserver;
use harvestmine_domain::constants::REPORT_DATE_FORMAT;
use harvestmine_domain::SyncResult;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TEMPLATE: &str = "{spinner:.green} {msg} [{bar:30.cyan/blue}] {pos}/{len}";

/// Observer that advances an `indicatif` bar per processed entry
#[derive(Clone)]
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    /// Visible on an interactive stderr, hidden otherwise
    #[must_use]
    pub fn new() -> Self {
        if Term::stderr().is_term() {
            Self::with_bar(ProgressBar::new(0))
        } else {
            Self::hidden()
        }
    }

    /// Draws nothing but still tracks length and position
    #[must_use]
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden()))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        let style = ProgressStyle::default_bar()
            .template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    #[must_use]
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Remove the bar before the report is printed
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncObserver for ProgressObserver {
    fn on_entries_fetched(&self, date: NaiveDate, count: usize) {
        self.bar.inc_length(count as u64);
        self.bar.set_message(date.format(REPORT_DATE_FORMAT).to_string());
    }

    fn on_entry_processed(&self, _result: &SyncResult) {
        self.bar.inc(1);
    }
}
