//! Domain entities - guide documents and the steps resolved from them

mod processed_step;
mod step;
mod zone_guide;

pub use processed_step::ProcessedStep;
pub use step::{Coords, QuestRef, Step, StepType, Tip};
pub use zone_guide::ZoneGuide;
