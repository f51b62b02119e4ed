// Presentation layer: turns user commands into model transitions and renders reports.

pub mod command;
pub mod render;
pub mod session;
