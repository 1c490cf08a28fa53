use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::error::ErrorKind;

use cpe_fair_registrations::modules::registrations::use_cases::register_for_event::handler::SubmissionContext;
use cpe_fair_registrations::shared::core::primitives::{SystemClock, UuidV7Ids};
use cpe_fair_registrations::shell::command::Command;
use cpe_fair_registrations::shell::config::{AppConfig, load_env_file};
use cpe_fair_registrations::shell::render::Renderer;
use cpe_fair_registrations::shell::session::{Outcome, Session};
use cpe_fair_registrations::shell::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    load_env_file(Path::new(".env")).context("reading .env")?;

    let config = AppConfig::from_env()?;
    init_tracing(&config.log_filter);

    let catalog = config.load_catalog()?;
    tracing::info!(
        events = catalog.len(),
        filter_by = %config.filter_by,
        policy = %config.policy,
        "catalog loaded"
    );

    let renderer = Renderer::new(!config.no_color && io::stdout().is_terminal());
    let context =
        SubmissionContext::new(config.policy, Arc::new(SystemClock), Arc::new(UuidV7Ids));
    let mut session = Session::new(catalog, config.filter_by, context, renderer);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "CpE Fair 2024: The Grand Prix. Type `help` for commands.\n")?;
    writeln!(stdout, "{}", session.render_current())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                writeln!(stdout, "{e}")?;
                continue;
            }
            Err(e) => {
                let message = e.to_string();
                let message = message.trim_start_matches("error: ").trim_end();
                writeln!(stdout, "{}", renderer.error(message))?;
                continue;
            }
        };
        match session.execute(command) {
            Ok(Outcome::Output(text)) => writeln!(stdout, "{text}\n")?,
            Ok(Outcome::Quit) => break,
            Err(e) => writeln!(stdout, "{}", renderer.error(&e.to_string()))?,
        }
        stdout.flush()?;
    }
    Ok(())
}
