// SPDX-License-Identifier: MPL-2.0
//! The results region of the window.

use super::fragment::Fragment;
use crate::ui::design_tokens::motion;
use crate::ui::notifications::ContainerId;
use std::time::Instant;

/// Container id of the results region.
pub const RESULTS_CONTAINER: ContainerId = ContainerId::named("results");

/// Number of skeleton placeholders shown while loading.
pub const SKELETON_COUNT: usize = 3;

/// Skeleton placeholder kinds, in reveal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skeleton {
    Summary,
    Vulnerabilities,
    Services,
}

impl Skeleton {
    const ORDER: [Skeleton; SKELETON_COUNT] =
        [Skeleton::Summary, Skeleton::Vulnerabilities, Skeleton::Services];
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFragment {
    pub fragment: Fragment,
    /// When the fragment starts to appear.
    pub reveal_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Loading {
        since: Instant,
    },
    Rendered,
}

/// Ordered fragments plus the loading state of the results region.
#[derive(Debug, Clone, Default)]
pub struct ResultsPanel {
    phase: Phase,
    fragments: Vec<PlacedFragment>,
}

impl ResultsPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Container hosting this panel's inline notifications.
    #[must_use]
    pub fn container(&self) -> ContainerId {
        RESULTS_CONTAINER
    }

    /// Removes every fragment and returns to the idle state.
    pub fn clear(&mut self) {
        self.fragments.clear();
        self.phase = Phase::Idle;
    }

    /// Replaces the content with loading skeletons.
    pub fn begin_loading(&mut self, now: Instant) {
        self.fragments.clear();
        self.phase = Phase::Loading { since: now };
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// When the current loading phase started.
    #[must_use]
    pub fn loading_since(&self) -> Option<Instant> {
        match self.phase {
            Phase::Loading { since } => Some(since),
            _ => None,
        }
    }

    /// Appends a fragment that appears at `reveal_at`.
    pub fn push(&mut self, fragment: Fragment, reveal_at: Instant) {
        log::debug!("placing {} fragment", fragment.kind());
        self.phase = Phase::Rendered;
        self.fragments.push(PlacedFragment {
            fragment,
            reveal_at,
        });
    }

    /// All fragments in placement order.
    #[must_use]
    pub fn fragments(&self) -> &[PlacedFragment] {
        &self.fragments
    }

    /// Fragments whose reveal time has passed.
    pub fn revealed(&self, now: Instant) -> impl Iterator<Item = &PlacedFragment> {
        self.fragments.iter().filter(move |f| f.reveal_at <= now)
    }

    /// Skeletons shown at `now`; they appear one after another.
    #[must_use]
    pub fn skeletons(&self, now: Instant) -> &'static [Skeleton] {
        let Phase::Loading { since } = self.phase else {
            return &[];
        };
        let elapsed = now.saturating_duration_since(since);
        let stagger = motion::SKELETON_STAGGER.as_millis().max(1);
        let shown = (elapsed.as_millis() / stagger) as usize + 1;
        &Skeleton::ORDER[..shown.min(SKELETON_COUNT)]
    }

    /// Returns whether the panel still changes over time.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_loading() || self.fragments.iter().any(|f| f.reveal_at > now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn skeletons_appear_every_200ms() {
        let t0 = Instant::now();
        let mut panel = ResultsPanel::new();
        assert!(panel.skeletons(t0).is_empty());

        panel.begin_loading(t0);
        assert_eq!(panel.skeletons(t0), &[Skeleton::Summary]);
        assert_eq!(panel.skeletons(t0 + Duration::from_millis(199)).len(), 1);
        assert_eq!(panel.skeletons(t0 + Duration::from_millis(200)).len(), 2);
        assert_eq!(panel.skeletons(t0 + Duration::from_millis(400)).len(), 3);
        assert_eq!(panel.skeletons(t0 + Duration::from_secs(5)).len(), 3);
    }

    #[test]
    fn push_ends_loading() {
        let t0 = Instant::now();
        let mut panel = ResultsPanel::new();
        panel.begin_loading(t0);
        panel.push(Fragment::EmptyState, t0);

        assert!(!panel.is_loading());
        assert!(panel.loading_since().is_none());
        assert!(panel.skeletons(t0).is_empty());
        assert_eq!(panel.fragments().len(), 1);
    }

    #[test]
    fn fragments_reveal_on_schedule() {
        let t0 = Instant::now();
        let mut panel = ResultsPanel::new();
        panel.push(Fragment::EmptyState, t0);
        panel.push(Fragment::EmptyState, t0 + Duration::from_millis(100));

        assert_eq!(panel.revealed(t0).count(), 1);
        assert!(panel.is_animating(t0));
        assert_eq!(panel.revealed(t0 + Duration::from_millis(100)).count(), 2);
        assert!(!panel.is_animating(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn clear_resets_everything() {
        let t0 = Instant::now();
        let mut panel = ResultsPanel::new();
        panel.push(Fragment::EmptyState, t0);
        panel.clear();
        assert!(panel.fragments().is_empty());
        assert!(!panel.is_loading());
    }
}
