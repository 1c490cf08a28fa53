use clap::{CommandFactory, Parser, Subcommand};

use crate::modules::registrations::core::draft::FormField;

#[derive(Debug, Parser)]
#[command(
    name = "cpe_fair",
    no_binary_name = true,
    disable_help_subcommand = true,
    help_template = "Commands:\n{subcommands}"
)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

/// One line of user input in the terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show events, optionally filtered (`events all` resets)
    #[command(visible_alias = "e")]
    Events {
        /// Category key; words are joined with single spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        key: Vec<String>,
    },

    /// Show registrations
    #[command(visible_alias = "d")]
    Dashboard,

    /// Filter the dashboard, no term clears it
    #[command(visible_alias = "s")]
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        term: Vec<String>,
    },

    /// Open the registration form for an event
    #[command(visible_alias = "r")]
    Register {
        event_id: String,

        /// Preselected sub-event
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        sub_event: Vec<String>,
    },

    /// Fill a form field (subEvent, firstName, lastName, email, phone, yearLevel)
    Set {
        #[arg(value_parser = parse_field)]
        field: FormField,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        value: Vec<String>,
    },

    /// Submit the open form
    Submit,

    /// Discard the open form
    #[command(visible_alias = "close")]
    Cancel,

    /// Ask to cancel a registration
    Delete { id: String },

    /// Cancel the registration pending deletion
    #[command(visible_alias = "yes")]
    Confirm,

    /// Keep the registration pending deletion
    #[command(visible_alias = "no")]
    Keep,

    /// Print registrations as JSON
    Export,

    /// Show this list
    Help,

    #[command(visible_aliases = ["exit", "q"])]
    Quit,
}

fn parse_field(name: &str) -> Result<FormField, String> {
    name.parse().map_err(|_| {
        format!("expected subEvent, firstName, lastName, email, phone or yearLevel, got {name:?}")
    })
}

/// Words of a free-text argument, `None` when there were none.
pub fn joined(words: &[String]) -> Option<String> {
    (!words.is_empty()).then(|| words.join(" "))
}

impl Command {
    /// `None` for blank lines. The verb is matched case-insensitively.
    pub fn parse(line: &str) -> Result<Option<Self>, clap::Error> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args = std::iter::once(verb.to_ascii_lowercase()).chain(words.map(str::to_string));
        CommandLine::try_parse_from(args).map(|parsed| Some(parsed.command))
    }

    pub fn help() -> String {
        CommandLine::command().render_help().to_string()
    }
}
