use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use gitlist::audit::AuditProgress;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Progress state under a single lock.
#[derive(Default)]
struct ProgressState {
    /// Overall bar counting finished organizations.
    overall: Option<ProgressBar>,
    /// Fetch spinners by organization login.
    fetch_bars: HashMap<String, ProgressBar>,
}

/// Interactive progress reporter using indicatif.
///
/// Draws one overall bar over the organization list and one spinner per
/// organization showing pages and repositories fetched so far.
pub struct InteractiveReporter {
    multi: MultiProgress,
    state: Mutex<ProgressState>,
}

impl InteractiveReporter {
    pub fn new() -> Self {
        Self::with_multi(MultiProgress::new())
    }

    /// A reporter that tracks state without drawing anything.
    #[cfg(test)]
    pub fn hidden() -> Self {
        Self::with_multi(MultiProgress::with_draw_target(
            indicatif::ProgressDrawTarget::hidden(),
        ))
    }

    fn with_multi(multi: MultiProgress) -> Self {
        Self {
            multi,
            state: Mutex::new(ProgressState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProgressState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn handle(&self, event: AuditProgress) {
        let mut state = self.lock();

        match event {
            AuditProgress::FetchingOrganizations { count } => {
                let pb = self.multi.add(ProgressBar::new(count as u64));
                pb.set_style(Self::bar_style());
                pb.set_prefix(format!("{:12}", "Organizations"));
                state.overall = Some(pb);
            }

            AuditProgress::FetchingOrganization { organization } => {
                let pb = self.multi.add(ProgressBar::new_spinner());
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(Duration::from_millis(100));
                pb.set_prefix(format!("{:12}", organization));
                pb.set_message("Fetching repositories...");
                state.fetch_bars.insert(organization, pb);
            }

            AuditProgress::FetchedPage {
                organization,
                page,
                total_so_far,
                ..
            } => {
                if let Some(pb) = state.fetch_bars.get(&organization) {
                    pb.set_message(format!("Page {} ({} repos)", page, total_so_far));
                }
            }

            AuditProgress::OrganizationComplete {
                organization,
                total,
            } => {
                if let Some(pb) = state.fetch_bars.get(&organization) {
                    pb.finish_with_message(format!("✓ {} repos fetched", total));
                }
                if let Some(ref pb) = state.overall {
                    pb.inc(1);
                }
            }

            AuditProgress::AggregationComplete { total } => {
                if let Some(ref pb) = state.overall {
                    pb.finish_with_message(format!("✓ {} repos", total));
                }
            }

            _ => {}
        }
    }

    /// Finish all progress bars.
    pub fn finish(&self) {
        let state = self.lock();
        for pb in state.fetch_bars.values() {
            if !pb.is_finished() {
                pb.finish();
            }
        }
        if let Some(ref pb) = state.overall
            && !pb.is_finished()
        {
            pb.finish();
        }
    }

    #[cfg(test)]
    pub fn organization_count(&self) -> usize {
        self.lock().fetch_bars.len()
    }

    #[cfg(test)]
    pub fn all_finished(&self) -> bool {
        let state = self.lock();
        state.fetch_bars.values().all(ProgressBar::is_finished)
            && state.overall.as_ref().is_none_or(ProgressBar::is_finished)
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{prefix:.bold.cyan} {spinner:.green} {msg}")
            .expect("Invalid template")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos:>3}/{len:3} {msg}")
            .expect("Invalid template")
            .progress_chars("█▓░")
    }
}

impl Default for InteractiveReporter {
    fn default() -> Self {
        Self::new()
    }
}
