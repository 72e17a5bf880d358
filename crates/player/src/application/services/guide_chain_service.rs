//! Guide chain service - resolves a race/class into one flat step sequence
//!
//! Starting from the race's first document, each document is fetched, its
//! steps filtered to the player, stamped with a chain-wide index, and its
//! `next` pointer followed until a terminal document is reached.

use std::collections::HashSet;
use std::sync::Arc;

use levelguide_domain::{
    should_show_for_class, should_show_for_race, ClassRestricted, PlayerClass, PlayerRace,
    ProcessedStep, RaceRestricted, Step, Tip,
};

use crate::application::GuideError;
use crate::ports::outbound::GuideSource;

/// Service for resolving guide chains
///
/// Holds no state between calls, so resolving the same race/class against
/// unchanged documents always yields the same sequence.
#[derive(Clone)]
pub struct GuideChainService {
    source: Arc<dyn GuideSource>,
}

impl GuideChainService {
    /// Create a new GuideChainService reading from the given source
    pub fn new(source: Arc<dyn GuideSource>) -> Self {
        Self { source }
    }

    /// Resolve the full guide chain for a race/class pair.
    ///
    /// Any fetch failure aborts the whole resolution; partial chains are
    /// never returned.
    pub async fn resolve_chain(
        &self,
        race: PlayerRace,
        class: PlayerClass,
    ) -> Result<Vec<ProcessedStep>, GuideError> {
        let start = race
            .starting_guide()
            .ok_or(GuideError::UnsupportedRace(race))?;
        let faction = race.faction();

        let mut resolved = Vec::new();
        let mut global_index = 0;
        let mut visited = HashSet::new();
        let mut current = Some(start.to_string());

        while let Some(name) = current {
            if !visited.insert(name.clone()) {
                return Err(GuideError::ChainCycle { name });
            }

            let mut guide = self.source.fetch_guide(faction, &name).await?;
            let raw_steps = std::mem::take(&mut guide.steps);
            let raw_count = raw_steps.len();
            let before = resolved.len();

            for step in raw_steps {
                if !applies_to(&step, race, class) {
                    continue;
                }
                let step = with_class_tips(step, class);
                resolved.push(ProcessedStep::stamp(step, &guide, global_index));
                global_index += 1;
            }

            tracing::debug!(
                guide = %name,
                kept = resolved.len() - before,
                total = raw_count,
                "Loaded guide document"
            );

            current = guide.next;
        }

        tracing::info!(
            race = %race,
            class = %class,
            steps = resolved.len(),
            documents = visited.len(),
            "Resolved guide chain"
        );

        Ok(resolved)
    }
}

fn applies_to(step: &Step, race: PlayerRace, class: PlayerClass) -> bool {
    should_show_for_race(step.race_restrictions(), Some(race))
        && should_show_for_class(step.class_restrictions(), Some(class))
}

fn with_class_tips(mut step: Step, class: PlayerClass) -> Step {
    let tips = step
        .tips
        .take()
        .unwrap_or_default()
        .into_iter()
        .filter(|tip| tip_applies(tip, class))
        .collect();
    step.tips = Some(tips);
    step
}

fn tip_applies(tip: &Tip, class: PlayerClass) -> bool {
    match tip.class() {
        Some(restriction) => should_show_for_class(Some(&[restriction][..]), Some(class)),
        None => true,
    }
}
