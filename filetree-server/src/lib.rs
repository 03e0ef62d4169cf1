pub mod api;
pub mod args;
pub mod state;
