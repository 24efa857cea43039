pub mod config_panel;
pub mod handlers;
pub mod header;
pub mod results;
pub mod status_panel;
