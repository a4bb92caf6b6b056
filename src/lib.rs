// Recruit Calendar Library
// Calendar engine of the recruitment CRM, exported for the CLI and tests

pub mod models;
pub mod services;
pub mod ui;
pub mod utils;
