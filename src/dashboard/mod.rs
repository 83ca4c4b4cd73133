//! Dashboard module - Slot registry and refresh loop

mod refresh;
mod registry;

pub use refresh::{group_thousands, RefreshLoop};
pub use registry::{slots, RenderValue, ReportEntry, SlotRegistry, Tone, ALL_SLOTS};
