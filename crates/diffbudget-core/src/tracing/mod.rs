//! Observability for diffbudget.
//! `tracing` with an `EnvFilter`, console or JSON lines, optional log file.

pub mod setup;

pub use setup::init_tracing;
