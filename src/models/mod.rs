// Module exports for models

pub mod access;
pub mod event;
pub mod settings;
pub mod ui;
