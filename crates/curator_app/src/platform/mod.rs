//! Terminal front end: command loop, effect execution, logging and the HTML
//! preview output.
mod app;
mod effects;
mod logging;
mod preview;
mod ui;

pub use app::run_app;
