//! Terminal front-end: wires the pure core to the engine and the console.
pub mod app;
pub mod cli;
pub mod effects;
pub mod logging;
pub mod ui;
