//! Simple test fixtures used across unit tests.

use std::collections::HashMap;

use async_trait::async_trait;

use levelguide_domain::{Faction, Step, StepType, Tip, ZoneGuide};

use crate::ports::outbound::{GuideSource, GuideSourceError};

/// In-memory guide source keyed by faction and document name
#[derive(Clone, Default)]
pub struct StaticGuideSource {
    guides: HashMap<(Faction, String), ZoneGuide>,
}

impl StaticGuideSource {
    pub fn with_guides(guides: impl IntoIterator<Item = ZoneGuide>) -> Self {
        let mut source = Self::default();
        for guide in guides {
            source.insert(guide);
        }
        source
    }

    pub fn insert(&mut self, guide: ZoneGuide) {
        self.guides
            .insert((guide.faction, guide.name.clone()), guide);
    }
}

#[async_trait]
impl GuideSource for StaticGuideSource {
    async fn fetch_guide(
        &self,
        faction: Faction,
        name: &str,
    ) -> Result<ZoneGuide, GuideSourceError> {
        self.guides
            .get(&(faction, name.to_string()))
            .cloned()
            .ok_or_else(|| GuideSourceError::NotFound {
                name: name.to_string(),
            })
    }
}

fn class_tip(class: &str, text: &str) -> Tip {
    Tip::Hint {
        class: Some(class.to_string()),
        text: text.to_string(),
    }
}

/// A small Alliance guide set covering every supported starting zone.
///
/// Human / Mage resolves to 6 steps, Human / Warrior to 6,
/// Dwarf / Warrior to 3, Dwarf / Hunter to 4.
pub fn sample_guides() -> Vec<ZoneGuide> {
    let northshire = ZoneGuide::new(
        "1-6_northshire_human",
        "Northshire Valley",
        "1-6",
        Faction::Alliance,
    )
    .with_next("6-11_elwynn_forest")
    .with_step(
        Step::new(
            "northshire_001",
            StepType::QuestAccept,
            "Accept A Threat Within from Deputy Willem",
        )
        .with_coords(48.2, 42.0, "elwynn_forest")
        .with_quest(783, "A Threat Within")
        .with_npc("Deputy Willem")
        .with_tip(class_tip("Mage", "Train Fireball at level 4"))
        .with_tip(class_tip("Warrior", "Train Battle Shout at level 4"))
        .with_tip(Tip::Info {
            class: None,
            text: "Loot every wolf".to_string(),
        }),
    )
    .with_step(
        Step::new(
            "northshire_002",
            StepType::Info,
            "Visit your class trainer in Northshire Abbey",
        )
        .with_classes(["Mage", "Priest"]),
    )
    .with_step(
        Step::new("northshire_003", StepType::Kill, "Kill Kobold Vermin").with_races(["!Orc"]),
    )
    .with_step(
        Step::new("northshire_004", StepType::Loot, "Buy a Heavy Linen Bandage")
            .with_classes(["!Mage"]),
    );

    let elwynn = ZoneGuide::new(
        "6-11_elwynn_forest",
        "Elwynn Forest",
        "6-11",
        Faction::Alliance,
    )
    .with_step(
        Step::new("elwynn_001", StepType::Travel, "Run to Goldshire").with_coords(
            42.1,
            65.9,
            "elwynn_forest",
        ),
    )
    .with_step(
        Step::new("elwynn_002", StepType::QuestTurnin, "Turn in Report to Goldshire")
            .with_races(["Human"]),
    )
    .with_step(
        Step::new("elwynn_003", StepType::Travel, "Scout the Deadmines entrance").with_coords(
            42.6,
            71.8,
            "the_deadmines",
        ),
    );

    let coldridge = ZoneGuide::new(
        "1-6_coldridge_valley_dwarf_gnome",
        "Coldridge Valley",
        "1-6",
        Faction::Alliance,
    )
    .with_next("11-13_loch_modan")
    .with_step(
        Step::new("coldridge_001", StepType::QuestAccept, "Accept Dwarven Outfitters")
            .with_races(["Dwarf"]),
    )
    .with_step(
        Step::new("coldridge_002", StepType::QuestAccept, "Accept Gnomish Outfitters")
            .with_races(["Gnome"]),
    )
    .with_step(Step::new("coldridge_003", StepType::Grind, "Grind troggs to level 4"))
    .with_step(
        Step::new("coldridge_004", StepType::Info, "Tame a Large Crag Boar")
            .with_classes(["Hunter"]),
    );

    let loch_modan = ZoneGuide::new(
        "11-13_loch_modan",
        "Loch Modan",
        "11-13",
        Faction::Alliance,
    )
    .with_step(Step::new("lochmodan_001", StepType::Fly, "Fly to Thelsamar"));

    let shadowglen = ZoneGuide::new(
        "1-6_shadowglen_NE",
        "Shadowglen",
        "1-6",
        Faction::Alliance,
    )
    .with_step(Step::new("shadowglen_001", StepType::Kill, "Kill Young Nightsabers"))
    .with_step(
        Step::new("shadowglen_002", StepType::Info, "Learn Bear Form basics")
            .with_classes(["Druid"]),
    );

    vec![northshire, elwynn, coldridge, loch_modan, shadowglen]
}

/// Source pre-loaded with [`sample_guides`]
pub fn sample_source() -> StaticGuideSource {
    StaticGuideSource::with_guides(sample_guides())
}
