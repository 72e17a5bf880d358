//! Guide State - the resolved step list and the player's position in it
//!
//! Derived from [`CharacterState`]: whenever race or class changes the chain
//! is re-resolved, and the character's saved index becomes the starting
//! position. Navigation writes the new position back to the character unless
//! the session is browsing.
//!
//! The position is tied to the session revision it was adopted from. Once the
//! character switches to another session, navigation is refused until the
//! next `sync()` adopts the new session's index.
//!
//! Resolutions can overlap when race/class change quickly. Each one takes a
//! new generation number when it starts and only commits if that number is
//! still the newest when it finishes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use levelguide_domain::{PlayerClass, PlayerRace, ProcessedStep};

use crate::application::GuideChainService;
use crate::ports::outbound::GuideSource;

use super::{CharacterState, ProgressWrite, SessionView};

/// Lifecycle of the resolved guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideStatus {
    /// No race/class selected
    Idle,
    Loading,
    Ready,
    /// Resolution failed; carries the user-facing message
    Error(String),
}

/// Point-in-time view of the guide state
#[derive(Debug, Clone)]
pub struct GuideSnapshot {
    pub status: GuideStatus,
    pub steps: Arc<Vec<ProcessedStep>>,
    pub current_step_index: usize,
    pub recenter_trigger: u64,
}

/// The character session the guide position currently belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Adopted {
    revision: u64,
    /// Character index last adopted or written, to spot external changes
    saved_index: usize,
}

impl From<SessionView> for Adopted {
    fn from(view: SessionView) -> Self {
        Self {
            revision: view.revision,
            saved_index: view.current_step_index,
        }
    }
}

struct GuideInner {
    status: GuideStatus,
    steps: Arc<Vec<ProcessedStep>>,
    current_step_index: usize,
    recenter_trigger: u64,
    /// Race/class of the most recent resolution request
    requested: Option<(PlayerRace, PlayerClass)>,
    adopted: Option<Adopted>,
}

impl Default for GuideInner {
    fn default() -> Self {
        Self {
            status: GuideStatus::Idle,
            steps: Arc::new(Vec::new()),
            current_step_index: 0,
            recenter_trigger: 0,
            requested: None,
            adopted: None,
        }
    }
}

pub struct GuideState {
    character: Arc<CharacterState>,
    chain: GuideChainService,
    generation: AtomicU64,
    inner: Mutex<GuideInner>,
}

impl GuideState {
    pub fn new(character: Arc<CharacterState>, source: Arc<dyn GuideSource>) -> Self {
        Self {
            character,
            chain: GuideChainService::new(source),
            generation: AtomicU64::new(0),
            inner: Mutex::new(GuideInner::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GuideInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------

    /// Bring the guide in line with the character.
    ///
    /// Re-resolves when race or class changed since the last request. If
    /// they are unchanged but the character moved to another session (a load,
    /// save or switch into or out of browsing) or its saved index moved, the
    /// saved index is adopted without refetching.
    pub async fn sync(&self) {
        let view = self.character.view();
        let (Some(race), Some(class)) = (view.race, view.class) else {
            self.go_idle();
            return;
        };

        let changed = { self.lock().requested != Some((race, class)) };
        if changed {
            self.resolve(race, class).await;
            return;
        }

        let mut inner = self.lock();
        let adopted = Adopted::from(view);
        if inner.status == GuideStatus::Ready && inner.adopted != Some(adopted) {
            inner.current_step_index = clamp_index(view.current_step_index, inner.steps.len());
            inner.adopted = Some(adopted);
            tracing::debug!(
                index = inner.current_step_index,
                revision = view.revision,
                "Adopted saved step index"
            );
        }
    }

    /// Re-resolve the current race/class unconditionally
    pub async fn reload(&self) {
        match (self.character.race(), self.character.class()) {
            (Some(race), Some(class)) => self.resolve(race, class).await,
            _ => self.go_idle(),
        }
    }

    async fn resolve(&self, race: PlayerRace, class: PlayerClass) {
        let generation = {
            let mut inner = self.lock();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            inner.status = GuideStatus::Loading;
            inner.requested = Some((race, class));
            generation
        };
        tracing::debug!(race = %race, class = %class, generation, "Resolving guide");

        let result = self.chain.resolve_chain(race, class).await;
        let view = self.character.view();

        let mut inner = self.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding stale guide resolution");
            return;
        }

        match result {
            Ok(steps) => {
                inner.current_step_index = clamp_index(view.current_step_index, steps.len());
                // Race/class moved on while fetching: the next sync re-resolves
                inner.adopted = (view.race == Some(race) && view.class == Some(class))
                    .then_some(Adopted::from(view));
                tracing::info!(
                    race = %race,
                    class = %class,
                    steps = steps.len(),
                    index = inner.current_step_index,
                    "Guide ready"
                );
                inner.steps = Arc::new(steps);
                inner.status = GuideStatus::Ready;
            }
            Err(e) => {
                tracing::warn!(race = %race, class = %class, "Guide resolution failed: {}", e);
                inner.steps = Arc::new(Vec::new());
                inner.current_step_index = 0;
                inner.adopted = None;
                inner.status = GuideStatus::Error(e.user_message());
            }
        }
    }

    fn go_idle(&self) {
        let mut inner = self.lock();
        self.generation.fetch_add(1, Ordering::SeqCst);
        inner.status = GuideStatus::Idle;
        inner.steps = Arc::new(Vec::new());
        inner.current_step_index = 0;
        inner.requested = None;
        inner.adopted = None;
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Advance to the next step.
    ///
    /// Returns `false` without changing anything unless the guide is ready,
    /// still matches the character's session, and the current step is not
    /// the last one.
    pub fn mark_current_step_completed(&self) -> bool {
        let mut inner = self.lock();
        if inner.status != GuideStatus::Ready {
            tracing::debug!("Ignoring step completion while guide is not ready");
            return false;
        }
        if inner.current_step_index + 1 >= inner.steps.len() {
            tracing::debug!("Already at the last step");
            return false;
        }

        let index = inner.current_step_index + 1;
        self.move_to(&mut inner, index)
    }

    /// Jump directly to `index`; out-of-range indexes are ignored
    pub fn jump_to_step(&self, index: usize) -> bool {
        let mut inner = self.lock();
        if inner.status != GuideStatus::Ready {
            tracing::debug!("Ignoring jump while guide is not ready");
            return false;
        }
        if index >= inner.steps.len() {
            tracing::debug!(index, total = inner.steps.len(), "Ignoring out of range jump");
            return false;
        }

        self.move_to(&mut inner, index)
    }

    fn move_to(&self, inner: &mut GuideInner, index: usize) -> bool {
        let Some(adopted) = inner.adopted else {
            tracing::debug!("Ignoring navigation until the guide is synced");
            return false;
        };

        match self.character.record_progress(adopted.revision, index) {
            ProgressWrite::Stale => {
                tracing::debug!(index, "Ignoring navigation for a session that has changed");
                return false;
            }
            ProgressWrite::Saved => {
                inner.adopted = Some(Adopted {
                    revision: adopted.revision,
                    saved_index: index,
                });
            }
            ProgressWrite::Browsing => {}
        }
        inner.current_step_index = index;
        true
    }

    /// Ask observers to scroll back to the current step
    pub fn request_recenter(&self) {
        self.lock().recenter_trigger += 1;
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn snapshot(&self) -> GuideSnapshot {
        let inner = self.lock();
        GuideSnapshot {
            status: inner.status.clone(),
            steps: Arc::clone(&inner.steps),
            current_step_index: inner.current_step_index,
            recenter_trigger: inner.recenter_trigger,
        }
    }

    pub fn status(&self) -> GuideStatus {
        self.lock().status.clone()
    }

    pub fn current_step_index(&self) -> usize {
        self.lock().current_step_index
    }

    pub fn current_step(&self) -> Option<ProcessedStep> {
        let inner = self.lock();
        inner.steps.get(inner.current_step_index).cloned()
    }

    pub fn total_steps(&self) -> usize {
        self.lock().steps.len()
    }

    /// Position as a percentage of the whole chain, 0 when empty
    pub fn progress_percentage(&self) -> f64 {
        let inner = self.lock();
        if inner.steps.is_empty() {
            return 0.0;
        }
        inner.current_step_index as f64 / inner.steps.len() as f64 * 100.0
    }

    pub fn is_last_step(&self) -> bool {
        let inner = self.lock();
        !inner.steps.is_empty() && inner.current_step_index + 1 == inner.steps.len()
    }

    pub fn recenter_trigger(&self) -> u64 {
        self.lock().recenter_trigger
    }
}

fn clamp_index(saved: usize, len: usize) -> usize {
    saved.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use levelguide_domain::{Faction, ZoneGuide};
    use tokio::sync::Notify;

    use crate::infrastructure::storage::MemoryStorageProvider;
    use crate::infrastructure::testing::{sample_guides, sample_source, StaticGuideSource};
    use crate::ports::outbound::{GuideSourceError, MockGuideSource};

    fn character_state() -> Arc<CharacterState> {
        Arc::new(CharacterState::restore(
            Arc::new(MemoryStorageProvider::new()),
            Arc::new(MemoryStorageProvider::new()),
        ))
    }

    fn guide_state(character: &Arc<CharacterState>) -> GuideState {
        GuideState::new(Arc::clone(character), Arc::new(sample_source()))
    }

    async fn ready_named(race: PlayerRace, class: PlayerClass) -> (Arc<CharacterState>, GuideState) {
        let character = character_state();
        character.create_character("Foo", race, class).unwrap();
        let guide = guide_state(&character);
        guide.sync().await;
        assert_eq!(guide.status(), GuideStatus::Ready);
        (character, guide)
    }

    /// Blocks fetches of one document until released
    struct GatedSource {
        inner: StaticGuideSource,
        gated: &'static str,
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl GuideSource for GatedSource {
        async fn fetch_guide(
            &self,
            faction: Faction,
            name: &str,
        ) -> Result<ZoneGuide, GuideSourceError> {
            if name == self.gated {
                self.entered.notify_one();
                self.release.notified().await;
            }
            self.inner.fetch_guide(faction, name).await
        }
    }

    #[tokio::test]
    async fn starts_idle_without_selection() {
        let character = character_state();
        let guide = guide_state(&character);

        guide.sync().await;

        assert_eq!(guide.status(), GuideStatus::Idle);
        assert_eq!(guide.total_steps(), 0);
        assert!(!guide.mark_current_step_completed());
    }

    #[tokio::test]
    async fn resolves_on_first_sync() {
        let (_, guide) = ready_named(PlayerRace::Human, PlayerClass::Mage).await;

        let snapshot = guide.snapshot();
        assert_eq!(snapshot.steps.len(), 6);
        assert_eq!(snapshot.current_step_index, 0);
        assert_eq!(
            guide.current_step().map(|s| s.composite_id),
            Some(snapshot.steps[0].composite_id.clone())
        );
    }

    #[tokio::test]
    async fn completion_advances_and_writes_through() {
        let (character, guide) = ready_named(PlayerRace::Human, PlayerClass::Mage).await;

        assert!(guide.mark_current_step_completed());
        assert!(guide.mark_current_step_completed());

        assert_eq!(guide.current_step_index(), 2);
        assert_eq!(character.current_step_index(), 2);
    }

    #[tokio::test]
    async fn completion_at_last_step_is_noop() {
        let (character, guide) = ready_named(PlayerRace::Human, PlayerClass::Mage).await;
        let last = guide.total_steps() - 1;
        assert!(guide.jump_to_step(last));
        assert!(guide.is_last_step());

        assert!(!guide.mark_current_step_completed());

        assert_eq!(guide.current_step_index(), last);
        assert_eq!(character.current_step_index(), last);
    }

    #[tokio::test]
    async fn out_of_range_jump_is_ignored() {
        let (character, guide) = ready_named(PlayerRace::Human, PlayerClass::Mage).await;
        assert!(guide.jump_to_step(3));

        assert!(!guide.jump_to_step(6));
        assert!(!guide.jump_to_step(usize::MAX));

        assert_eq!(guide.current_step_index(), 3);
        assert_eq!(character.current_step_index(), 3);
    }

    #[tokio::test]
    async fn browsing_progress_is_not_written_through() {
        let character = character_state();
        character
            .create_character("Foo", PlayerRace::Human, PlayerClass::Mage)
            .unwrap();
        character.start_browsing(PlayerRace::Human, PlayerClass::Warrior);
        let guide = guide_state(&character);
        guide.sync().await;

        assert!(guide.mark_current_step_completed());
        assert!(guide.jump_to_step(4));

        assert_eq!(guide.current_step_index(), 4);
        assert_eq!(character.current_step_index(), 0);

        character.load_character("Foo").unwrap();
        assert_eq!(character.current_step_index(), 0);
    }

    #[tokio::test]
    async fn browsing_unsupported_race_cannot_navigate() {
        let character = character_state();
        character.start_browsing(PlayerRace::Orc, PlayerClass::Hunter);
        let guide = guide_state(&character);
        guide.sync().await;

        assert!(!guide.mark_current_step_completed());
        assert!(character.character_names().is_empty());
    }

    #[tokio::test]
    async fn saved_index_is_clamped_to_shorter_guide() {
        let character = character_state();
        character
            .create_character("Foo", PlayerRace::Dwarf, PlayerClass::Warrior)
            .unwrap();
        character.set_current_step_index(40);
        let guide = guide_state(&character);

        guide.sync().await;

        assert_eq!(guide.total_steps(), 3);
        assert_eq!(guide.current_step_index(), 2);
    }

    #[tokio::test]
    async fn empty_chain_is_ready_with_nothing_to_do() {
        let character = character_state();
        character
            .create_character("Foo", PlayerRace::NightElf, PlayerClass::Warrior)
            .unwrap();
        character.set_current_step_index(5);
        let source = StaticGuideSource::with_guides([ZoneGuide::new(
            "1-6_shadowglen_NE",
            "Shadowglen",
            "1-6",
            Faction::Alliance,
        )]);
        let guide = GuideState::new(Arc::clone(&character), Arc::new(source));

        guide.sync().await;

        assert_eq!(guide.status(), GuideStatus::Ready);
        assert_eq!(guide.current_step_index(), 0);
        assert_eq!(guide.progress_percentage(), 0.0);
        assert!(!guide.is_last_step());
        assert!(guide.current_step().is_none());
        assert!(!guide.mark_current_step_completed());
        assert!(!guide.jump_to_step(0));
    }

    #[tokio::test]
    async fn unsupported_race_reports_distinct_error() {
        let character = character_state();
        character
            .create_character("Foo", PlayerRace::Tauren, PlayerClass::Druid)
            .unwrap();
        let mut source = MockGuideSource::new();
        source.expect_fetch_guide().never();
        let guide = GuideState::new(Arc::clone(&character), Arc::new(source));

        guide.sync().await;

        assert_eq!(
            guide.status(),
            GuideStatus::Error("Tauren guides are not supported yet".into())
        );
    }

    #[tokio::test]
    async fn failed_fetch_clears_previous_steps() {
        let (character, guide) = ready_named(PlayerRace::Human, PlayerClass::Mage).await;
        assert_eq!(guide.total_steps(), 6);

        // Coldridge exists, but its successor does not
        let partial: Vec<_> = sample_guides()
            .into_iter()
            .filter(|g| g.name != "11-13_loch_modan")
            .collect();
        let broken = GuideState::new(
            Arc::clone(&character),
            Arc::new(StaticGuideSource::with_guides(partial)),
        );
        character.set_race(PlayerRace::Dwarf);
        broken.sync().await;

        assert_eq!(
            broken.status(),
            GuideStatus::Error("Failed to load guide".into())
        );
        assert_eq!(broken.total_steps(), 0);
    }

    #[tokio::test]
    async fn error_replaces_ready_steps_on_reload() {
        let character = character_state();
        character
            .create_character("Foo", PlayerRace::Human, PlayerClass::Mage)
            .unwrap();
        let mut source = MockGuideSource::new();
        let mut calls = 0;
        source.expect_fetch_guide().returning(move |faction, name| {
            calls += 1;
            if calls > 2 {
                return Err(GuideSourceError::Io {
                    name: name.to_string(),
                    message: "connection reset".into(),
                });
            }
            sample_guides()
                .into_iter()
                .find(|g| g.faction == faction && g.name == name)
                .ok_or_else(|| GuideSourceError::NotFound {
                    name: name.to_string(),
                })
        });
        let guide = GuideState::new(Arc::clone(&character), Arc::new(source));

        guide.sync().await;
        assert_eq!(guide.total_steps(), 6);

        guide.reload().await;
        assert_eq!(guide.status(), GuideStatus::Error("Failed to load guide".into()));
        assert_eq!(guide.total_steps(), 0);
    }

    #[tokio::test]
    async fn class_change_re_resolves() {
        let (character, guide) = ready_named(PlayerRace::Human, PlayerClass::Mage).await;
        let has_trainer_step = |guide: &GuideState| {
            guide
                .snapshot()
                .steps
                .iter()
                .any(|s| s.original_id == "northshire_002")
        };
        assert!(has_trainer_step(&guide));

        character.set_class(PlayerClass::Warrior);
        guide.sync().await;

        assert_eq!(guide.status(), GuideStatus::Ready);
        assert!(!has_trainer_step(&guide));
    }

    #[tokio::test]
    async fn clearing_character_returns_to_idle() {
        let (character, guide) = ready_named(PlayerRace::Human, PlayerClass::Mage).await;

        character.clear_character();
        guide.sync().await;

        assert_eq!(guide.status(), GuideStatus::Idle);
        assert_eq!(guide.total_steps(), 0);
    }

    #[tokio::test]
    async fn loading_another_save_adopts_its_index() {
        let character = character_state();
        character
            .create_character("First", PlayerRace::Human, PlayerClass::Mage)
            .unwrap();
        character
            .create_character("Second", PlayerRace::Human, PlayerClass::Mage)
            .unwrap();
        character.set_current_step_index(4);
        character.load_character("First").unwrap();

        let mut source = MockGuideSource::new();
        source
            .expect_fetch_guide()
            .times(2)
            .returning(|faction, name| {
                sample_guides()
                    .into_iter()
                    .find(|g| g.faction == faction && g.name == name)
                    .ok_or_else(|| GuideSourceError::NotFound {
                        name: name.to_string(),
                    })
            });
        let guide = GuideState::new(Arc::clone(&character), Arc::new(source));
        guide.sync().await;
        assert_eq!(guide.current_step_index(), 0);

        character.load_character("Second").unwrap();
        guide.sync().await;

        assert_eq!(guide.current_step_index(), 4);
    }

    #[tokio::test]
    async fn browsing_position_does_not_leak_into_loaded_character() {
        let character = character_state();
        character
            .create_character("First", PlayerRace::Human, PlayerClass::Mage)
            .unwrap();
        let guide = guide_state(&character);
        guide.sync().await;

        character.start_browsing(PlayerRace::Human, PlayerClass::Mage);
        guide.sync().await;
        assert!(guide.jump_to_step(4));

        // Same race/class and same stored index, but a different session
        character.load_character("First").unwrap();
        guide.sync().await;
        assert_eq!(guide.current_step_index(), 0);

        assert!(guide.mark_current_step_completed());
        assert_eq!(guide.current_step_index(), 1);
        assert_eq!(character.current_step_index(), 1);
    }

    #[tokio::test]
    async fn saving_a_browsing_session_adopts_the_saved_position() {
        let character = character_state();
        character.start_browsing(PlayerRace::Human, PlayerClass::Mage);
        let guide = guide_state(&character);
        guide.sync().await;
        assert!(guide.jump_to_step(2));
        assert_eq!(character.current_step_index(), 0);

        character
            .save_character("Kept", Some(guide.current_step_index()))
            .unwrap();
        guide.sync().await;
        assert!(guide.mark_current_step_completed());

        assert_eq!(guide.current_step_index(), 3);
        assert_eq!(character.current_step_index(), 3);
    }

    #[tokio::test]
    async fn navigation_after_unsynced_character_switch_is_refused() {
        let character = character_state();
        character
            .create_character("Second", PlayerRace::Dwarf, PlayerClass::Warrior)
            .unwrap();
        character
            .create_character("First", PlayerRace::Human, PlayerClass::Mage)
            .unwrap();
        let guide = guide_state(&character);
        guide.sync().await;
        assert!(guide.jump_to_step(4));

        character.load_character("Second").unwrap();

        assert!(!guide.mark_current_step_completed());
        assert!(!guide.jump_to_step(1));
        assert_eq!(guide.current_step_index(), 4);
        assert_eq!(character.current_step_index(), 0);

        character.load_character("First").unwrap();
        assert_eq!(character.current_step_index(), 4);
    }

    #[tokio::test]
    async fn navigation_waits_for_sync_after_class_change() {
        let (character, guide) = ready_named(PlayerRace::Human, PlayerClass::Mage).await;

        character.set_class(PlayerClass::Warrior);
        assert!(!guide.jump_to_step(1));
        assert_eq!(character.current_step_index(), 0);

        guide.sync().await;
        assert!(guide.jump_to_step(1));
        assert_eq!(character.current_step_index(), 1);
    }

    #[tokio::test]
    async fn navigation_does_not_count_as_external_index_change() {
        let (_, guide) = ready_named(PlayerRace::Human, PlayerClass::Mage).await;
        assert!(guide.jump_to_step(3));

        guide.sync().await;

        assert_eq!(guide.current_step_index(), 3);
    }

    #[tokio::test]
    async fn stale_resolution_is_discarded() {
        let character = character_state();
        character
            .create_character("Foo", PlayerRace::Human, PlayerClass::Mage)
            .unwrap();
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let source = GatedSource {
            inner: sample_source(),
            gated: "1-6_northshire_human",
            entered: Arc::clone(&entered),
            release: Arc::clone(&release),
        };
        let guide = Arc::new(GuideState::new(Arc::clone(&character), Arc::new(source)));

        let slow = tokio::spawn({
            let guide = Arc::clone(&guide);
            async move { guide.sync().await }
        });
        entered.notified().await;
        assert_eq!(guide.status(), GuideStatus::Loading);

        character.set_race(PlayerRace::Dwarf);
        character.set_class(PlayerClass::Warrior);
        guide.sync().await;
        assert_eq!(guide.total_steps(), 3);

        release.notify_one();
        slow.await.unwrap();

        let snapshot = guide.snapshot();
        assert_eq!(snapshot.status, GuideStatus::Ready);
        assert_eq!(snapshot.steps.len(), 3);
        assert!(snapshot.steps[0].composite_id.starts_with("1-6_coldridge"));
    }

    #[tokio::test]
    async fn steps_stay_visible_while_reloading() {
        let character = character_state();
        character
            .create_character("Foo", PlayerRace::Human, PlayerClass::Mage)
            .unwrap();
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let source = GatedSource {
            inner: sample_source(),
            gated: "6-11_elwynn_forest",
            entered: Arc::clone(&entered),
            release: Arc::clone(&release),
        };
        let guide = Arc::new(GuideState::new(Arc::clone(&character), Arc::new(source)));

        // First resolution passes the gate once released
        let first = tokio::spawn({
            let guide = Arc::clone(&guide);
            async move { guide.sync().await }
        });
        entered.notified().await;
        release.notify_one();
        first.await.unwrap();
        assert!(guide.jump_to_step(2));

        let second = tokio::spawn({
            let guide = Arc::clone(&guide);
            async move { guide.reload().await }
        });
        entered.notified().await;

        let during = guide.snapshot();
        assert_eq!(during.status, GuideStatus::Loading);
        assert_eq!(during.steps.len(), 6);
        assert!(!guide.jump_to_step(1));

        release.notify_one();
        second.await.unwrap();
        assert_eq!(guide.status(), GuideStatus::Ready);
        assert_eq!(guide.current_step_index(), 2);
    }

    #[tokio::test]
    async fn progress_and_recenter() {
        let (_, guide) = ready_named(PlayerRace::Dwarf, PlayerClass::Hunter).await;
        assert_eq!(guide.total_steps(), 4);

        assert!(guide.jump_to_step(2));
        assert_eq!(guide.progress_percentage(), 50.0);

        let before = guide.recenter_trigger();
        guide.request_recenter();
        guide.request_recenter();
        assert_eq!(guide.recenter_trigger(), before + 2);
        assert_eq!(guide.current_step_index(), 2);
    }
}
