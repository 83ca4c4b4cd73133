//! GUI module - User interface components

mod app;
mod board;
mod control_panel;

pub use app::ThreatboardApp;
pub use board::BoardView;
pub use control_panel::{ControlPanel, ControlPanelAction};
