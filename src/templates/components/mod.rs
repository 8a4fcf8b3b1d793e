pub mod panel;

pub use panel::{chart_panel, notes_list};
