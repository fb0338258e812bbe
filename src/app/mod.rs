// Presentation collaborators: session state owned by the caller, interactive commands and rendering.

pub mod commands;
pub mod render;
pub mod session;
