mod commands;
mod logging;
mod render;
mod setup;
mod shell;

pub use commands::run;
