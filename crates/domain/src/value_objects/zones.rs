//! Map zone classification

const DUNGEONS: &[&str] = &[
    "ragefire_chasm",
    "wailing_caverns",
    "the_deadmines",
    "shadowfang_keep",
    "the_stockades",
    "gnomeregan",
    "razorfen_kraul",
    "scarlet_monastery",
    "razorfen_downs",
    "uldaman",
    "zul_farrak",
    "maraudon",
    "sunken_temple",
    "blackrock_depths",
    "blackrock_spire",
];

/// Whether a map zone key names a dungeon instance
pub fn is_dungeon(zone: &str) -> bool {
    DUNGEONS.contains(&zone)
}
