// Composition root for the registration session.
//
// - Read config from the environment (optionally a `.env` file).
// - Build the catalog, the submission context and the session.
// - Render views and drive the command loop from `main.rs`.

pub mod command;
pub mod config;
pub mod dialog;
pub mod render;
pub mod session;
pub mod telemetry;
