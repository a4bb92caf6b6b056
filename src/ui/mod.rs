// UI module exports
// Plain-text renderings of the calendar page

pub mod views;
