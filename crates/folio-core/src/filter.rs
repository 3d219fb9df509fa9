//! Text and featured-only filtering over the project store.

use core::time::Duration;

use crate::debounce::{DebounceTicket, Debouncer};
use crate::project::ProjectRecord;

/// Current filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw search text as typed. Trimmed and lowercased when applied.
    pub query: String,
    pub featured_only: bool,
}

impl FilterState {
    /// Normalized query used for matching.
    #[must_use]
    pub fn needle(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

fn matches_with(needle: &str, featured_only: bool, project: &ProjectRecord) -> bool {
    let text = needle.is_empty() || project.haystack().contains(needle);
    let featured = !featured_only || project.featured;
    text && featured
}

/// Projects passing `state`, in store order.
#[must_use]
pub fn filter_projects<'a>(projects: &'a [ProjectRecord], state: &FilterState) -> Vec<&'a ProjectRecord> {
    let needle = state.needle();
    projects
        .iter()
        .filter(|p| matches_with(&needle, state.featured_only, p))
        .collect()
}

/// Holds the filter inputs and debounces text input.
///
/// The controller never touches the store; callers pass the store slice to
/// [`FilterController::apply`] whenever a recompute is due:
/// - after [`on_featured_change`](Self::on_featured_change), immediately;
/// - after [`on_timer`](Self::on_timer) or [`poll`](Self::poll) returns `true`.
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    state: FilterState,
    debounce: Debouncer,
    recomputes: u64,
}

impl FilterController {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            state: FilterState::default(),
            debounce: Debouncer::new(delay),
            recomputes: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Number of recomputes performed so far.
    #[must_use]
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// Record new search text and (re)schedule the recompute.
    pub fn on_query_input(&mut self, value: &str, now: Duration) -> DebounceTicket {
        self.state.query.clear();
        self.state.query.push_str(value);
        self.debounce.schedule(now)
    }

    /// A host timer elapsed. `true` means recompute now.
    pub fn on_timer(&mut self, ticket: DebounceTicket) -> bool {
        self.debounce.fire(ticket)
    }

    /// Clock-driven variant of [`on_timer`](Self::on_timer).
    pub fn poll(&mut self, now: Duration) -> bool {
        self.debounce.poll(now)
    }

    /// Record the featured-only checkbox. Always recompute immediately.
    pub fn on_featured_change(&mut self, checked: bool) {
        self.state.featured_only = checked;
    }

    /// Filter `projects` with the current state.
    pub fn apply<'a>(&mut self, projects: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        self.recomputes += 1;
        let filtered = filter_projects(projects, &self.state);
        tracing::debug!(
            query = %self.state.query,
            featured_only = self.state.featured_only,
            matched = filtered.len(),
            total = projects.len(),
            "filter applied"
        );
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::DEFAULT_DEBOUNCE;
    use crate::project::sample;
    use pretty_assertions::assert_eq;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn store() -> Vec<ProjectRecord> {
        let mut a = sample("Atlas Maps", true);
        a.tech = vec!["Rust".into(), "Axum".into()];
        let mut b = sample("Food Tracker", false);
        b.tech = vec!["Svelte".into()];
        let mut c = sample("Pater Rack", true);
        c.tech = vec!["CLI".into()];
        vec![a, b, c]
    }

    fn titles(list: &[&ProjectRecord]) -> Vec<String> {
        list.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let projects = store();
        let state = FilterState {
            query: "   ".into(),
            featured_only: false,
        };
        assert_eq!(filter_projects(&projects, &state).len(), 3);
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let projects = store();
        let state = FilterState {
            query: "  SVELTE ".into(),
            featured_only: false,
        };
        assert_eq!(titles(&filter_projects(&projects, &state)), vec!["Food Tracker"]);
    }

    #[test]
    fn query_can_span_fields() {
        let projects = store();
        let state = FilterState {
            query: "summary rust".into(),
            featured_only: false,
        };
        assert_eq!(titles(&filter_projects(&projects, &state)), vec!["Atlas Maps"]);
    }

    #[test]
    fn featured_only_keeps_featured_in_order() {
        let projects = store();
        let state = FilterState {
            query: String::new(),
            featured_only: true,
        };
        assert_eq!(
            titles(&filter_projects(&projects, &state)),
            vec!["Atlas Maps", "Pater Rack"]
        );
    }

    #[test]
    fn both_constraints_must_hold() {
        let projects = store();
        let state = FilterState {
            query: "tracker".into(),
            featured_only: true,
        };
        assert!(filter_projects(&projects, &state).is_empty());
    }

    #[test]
    fn rapid_keystrokes_recompute_once_with_final_query() {
        let projects = store();
        let mut ctl = FilterController::new(DEFAULT_DEBOUNCE);
        let mut results = Vec::new();

        for (i, text) in ["p", "pa", "pat", "pate"].iter().enumerate() {
            let now = ms(i as u64 * 40);
            ctl.on_query_input(text, now);
            if ctl.poll(now) {
                results.push(titles(&ctl.apply(&projects)));
            }
        }
        for t in (120..=400).step_by(10) {
            if ctl.poll(ms(t)) {
                results.push(titles(&ctl.apply(&projects)));
            }
        }

        assert_eq!(ctl.recomputes(), 1);
        assert_eq!(results, vec![vec!["Pater Rack".to_string()]]);
    }

    #[test]
    fn only_latest_timer_ticket_recomputes() {
        let mut ctl = FilterController::new(DEFAULT_DEBOUNCE);
        let t1 = ctl.on_query_input("a", ms(0));
        let t2 = ctl.on_query_input("at", ms(30));
        assert!(!ctl.on_timer(t1));
        assert!(ctl.on_timer(t2));
        assert_eq!(ctl.state().query, "at");
    }

    #[test]
    fn featured_change_applies_without_waiting() {
        let projects = store();
        let mut ctl = FilterController::new(DEFAULT_DEBOUNCE);
        ctl.on_featured_change(true);
        assert_eq!(ctl.apply(&projects).len(), 2);
        ctl.on_featured_change(false);
        assert_eq!(ctl.apply(&projects).len(), 3);
    }

    #[test]
    fn apply_never_mutates_the_store() {
        let projects = store();
        let before = projects.clone();
        let mut ctl = FilterController::new(DEFAULT_DEBOUNCE);
        ctl.on_query_input("zzz", ms(0));
        assert!(ctl.apply(&projects).is_empty());
        assert_eq!(projects, before);
    }

    #[test]
    fn unset_store_filters_to_nothing() {
        let mut ctl = FilterController::new(DEFAULT_DEBOUNCE);
        assert!(ctl.apply(&[]).is_empty());
    }
}
