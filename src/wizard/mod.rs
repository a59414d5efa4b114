//! The three-step wizard state machine.
//!
//! `Academic -> Preferences -> Refine -> Results`, plus a reset edge from
//! the results back to the first step. Forward motion out of the first step
//! is gated on the two required fields. Committing the final step persists
//! the profile and runs the matcher against the catalog.

use std::time::{
    Duration,
    Instant,
};

use crate::{
    catalog::CatalogProvider,
    core::ScoredScholarship,
    matcher,
    profile::ProfileStore,
};

// Cosmetic pause before a transition commits, so the UI can show motion.
// Purely visual; nothing is computed during the wait.
const STEP_DELAY: Duration = Duration::from_millis(180);
const SEARCH_DELAY: Duration = Duration::from_millis(260);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Academic,
    Preferences,
    Refine,
    Results,
}

impl WizardStep {
    pub fn ordinal(self) -> usize {
        match self {
            WizardStep::Academic => 1,
            WizardStep::Preferences => 2,
            WizardStep::Refine => 3,
            WizardStep::Results => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Academic => "Academic Background",
            WizardStep::Preferences => "Funding Preferences",
            WizardStep::Refine => "Refine Your Search",
            WizardStep::Results => "Matching Scholarships",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PendingAction {
    Advance,
    Search,
}

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    action: PendingAction,
    due: Instant,
}

pub struct WizardController {
    step: WizardStep,
    pub store: ProfileStore,
    pub query: String,
    pub country_filter: String, // empty = all countries
    results: Vec<ScoredScholarship>,
    pending: Option<PendingTransition>,
    catalog: Box<dyn CatalogProvider>,
}

impl WizardController {
    pub fn new(catalog: Box<dyn CatalogProvider>, store: ProfileStore) -> Self {
        Self {
            step: WizardStep::Academic,
            store,
            query: String::new(),
            country_filter: String::new(),
            results: Vec::new(),
            pending: None,
            catalog,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn results(&self) -> &[ScoredScholarship] {
        &self.results
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Step 1 requires a field of study and a degree level. Every other
    /// step advances freely.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Academic => {
                !self.store.profile.field_of_study.is_empty()
                    && !self.store.profile.degree_level.is_empty()
            }
            WizardStep::Preferences | WizardStep::Refine => true,
            WizardStep::Results => false,
        }
    }

    /// Schedules the forward transition. Ignored while another transition
    /// is pending, so a double click during the pause cannot fire twice.
    pub fn advance(&mut self) {
        if self.pending.is_some() || !self.can_advance() {
            return;
        }

        let (action, delay) = match self.step {
            WizardStep::Academic | WizardStep::Preferences => (PendingAction::Advance, STEP_DELAY),
            WizardStep::Refine => (PendingAction::Search, SEARCH_DELAY),
            WizardStep::Results => return,
        };

        self.pending = Some(PendingTransition { action, due: Instant::now() + delay });
    }

    /// Immediate. A no-op on the first step and while a transition is
    /// pending.
    pub fn back(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.step = match self.step {
            WizardStep::Academic => WizardStep::Academic,
            WizardStep::Preferences => WizardStep::Academic,
            WizardStep::Refine => WizardStep::Preferences,
            WizardStep::Results => return,
        };
    }

    /// Back to step one with the refine filters cleared. The profile is
    /// deliberately kept so a returning user starts pre-filled.
    pub fn reset(&mut self) {
        self.query.clear();
        self.country_filter.clear();
        self.results.clear();
        self.pending = None;
        self.step = WizardStep::Academic;
    }

    /// Commits a due transition. Returns true when the state changed this
    /// call. The GUI invokes this every frame while a transition is pending.
    pub fn tick(&mut self) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if Instant::now() < pending.due {
            return false;
        }
        self.pending = None;

        match pending.action {
            PendingAction::Advance => {
                self.step = match self.step {
                    WizardStep::Academic => WizardStep::Preferences,
                    WizardStep::Preferences => WizardStep::Refine,
                    other => other,
                };
                // Entering the refine step seeds the country filter from
                // the declared preference, unless one is already set.
                if self.step == WizardStep::Refine && self.country_filter.is_empty() {
                    self.country_filter = self.store.profile.preferred_country.clone();
                }
            }
            PendingAction::Search => {
                self.store.save();
                self.run_search();
                self.step = WizardStep::Results;
            }
        }
        true
    }

    /// Remaining wait on the pending transition, if any. Lets the GUI
    /// schedule its next repaint instead of spinning.
    pub fn time_until_commit(&self) -> Option<Duration> {
        self.pending.map(|p| p.due.saturating_duration_since(Instant::now()))
    }

    fn run_search(&mut self) {
        self.results = matcher::filter_and_rank(
            &self.store.profile,
            self.catalog.records(),
            &self.query,
            &self.country_filter,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use std::time::Duration;

    use super::*;
    use crate::{
        catalog::StaticCatalog,
        core::Profile,
        profile::ProfileStore,
    };

    fn controller_with(profile: Profile) -> WizardController {
        WizardController::new(Box::new(StaticCatalog::new()), ProfileStore::in_memory(profile))
    }

    fn filled_profile() -> Profile {
        Profile {
            field_of_study: "Computer Science".to_string(),
            degree_level: "Master's".to_string(),
            ..Profile::default()
        }
    }

    // Drives a scheduled transition to completion.
    fn settle(wizard: &mut WizardController) {
        while wizard.is_transitioning() {
            sleep(Duration::from_millis(20));
            wizard.tick();
        }
    }

    #[test]
    fn step_one_blocks_without_required_fields() {
        let mut wizard = controller_with(Profile::default());
        assert!(!wizard.can_advance());

        wizard.advance();
        settle(&mut wizard);
        assert_eq!(wizard.step(), WizardStep::Academic);

        wizard.store.profile.field_of_study = "Law".to_string();
        assert!(!wizard.can_advance());
        wizard.store.profile.degree_level = "PhD".to_string();
        assert!(wizard.can_advance());
    }

    #[test]
    fn advance_walks_the_steps_in_order() {
        let mut wizard = controller_with(filled_profile());

        wizard.advance();
        settle(&mut wizard);
        assert_eq!(wizard.step(), WizardStep::Preferences);

        wizard.advance();
        settle(&mut wizard);
        assert_eq!(wizard.step(), WizardStep::Refine);

        wizard.advance();
        settle(&mut wizard);
        assert_eq!(wizard.step(), WizardStep::Results);
        assert!(!wizard.results().is_empty());
    }

    #[test]
    fn back_from_step_one_is_a_no_op() {
        let mut wizard = controller_with(filled_profile());
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Academic);
    }

    #[test]
    fn transition_commits_only_after_the_delay() {
        let mut wizard = controller_with(filled_profile());
        wizard.advance();

        assert!(wizard.is_transitioning());
        assert!(!wizard.tick());
        assert_eq!(wizard.step(), WizardStep::Academic);

        settle(&mut wizard);
        assert_eq!(wizard.step(), WizardStep::Preferences);
    }

    #[test]
    fn double_submit_during_delay_is_ignored() {
        let mut wizard = controller_with(filled_profile());
        wizard.advance();
        wizard.advance(); // queued behind nothing; must be dropped
        settle(&mut wizard);

        assert_eq!(wizard.step(), WizardStep::Preferences);
    }

    #[test]
    fn search_ranks_the_whole_catalog_by_default() {
        let mut wizard = controller_with(filled_profile());
        for _ in 0..3 {
            wizard.advance();
            settle(&mut wizard);
        }

        let results = wizard.results();
        assert_eq!(results.len(), 4);
        for pair in results.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn refine_filters_reach_the_matcher() {
        let mut wizard = controller_with(filled_profile());
        wizard.advance();
        settle(&mut wizard);
        wizard.advance();
        settle(&mut wizard);

        wizard.country_filter = "Germany".to_string();
        wizard.advance();
        settle(&mut wizard);

        assert_eq!(wizard.step(), WizardStep::Results);
        assert!(wizard.results().iter().all(|s| s.record.country == "Germany"));
    }

    #[test]
    fn preferred_country_seeds_the_refine_filter() {
        let mut profile = filled_profile();
        profile.preferred_country = "United Kingdom".to_string();
        let mut wizard = controller_with(profile);

        wizard.advance();
        settle(&mut wizard);
        wizard.advance();
        settle(&mut wizard);

        assert_eq!(wizard.step(), WizardStep::Refine);
        assert_eq!(wizard.country_filter, "United Kingdom");
    }

    #[test]
    fn empty_result_set_is_a_valid_state() {
        let mut wizard = controller_with(filled_profile());
        wizard.advance();
        settle(&mut wizard);
        wizard.advance();
        settle(&mut wizard);

        wizard.query = "no such scholarship anywhere".to_string();
        wizard.advance();
        settle(&mut wizard);

        assert_eq!(wizard.step(), WizardStep::Results);
        assert!(wizard.results().is_empty());
    }

    #[test]
    fn reset_clears_filters_but_keeps_the_profile() {
        let mut wizard = controller_with(filled_profile());
        for _ in 0..3 {
            wizard.advance();
            settle(&mut wizard);
        }

        wizard.query = "excellence".to_string();
        wizard.country_filter = "United Kingdom".to_string();
        wizard.reset();

        assert_eq!(wizard.step(), WizardStep::Academic);
        assert!(wizard.query.is_empty());
        assert!(wizard.country_filter.is_empty());
        assert!(wizard.results().is_empty());
        assert_eq!(wizard.store.profile.field_of_study, "Computer Science");
        assert_eq!(wizard.store.profile.degree_level, "Master's");
    }

    #[test]
    fn malformed_profile_json_falls_back_to_defaults() {
        let parsed: Profile = serde_json::from_str("{\"gpa\": 3.8, \"unknown\": true}")
            .unwrap_or_default();
        assert!((parsed.gpa - 3.8).abs() < f32::EPSILON);
        assert_eq!(parsed.annual_budget_usd, 10_000);

        let broken: Profile = serde_json::from_str("not json at all").unwrap_or_default();
        assert_eq!(broken, Profile::default());
    }
}
