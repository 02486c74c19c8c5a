pub mod config;
pub mod dice;
pub mod display;
pub mod headless;
pub mod logging;
pub mod ui;
