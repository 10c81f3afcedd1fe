//! Responsible for reading the configuration of the `backfill` command line tool

mod cli;
mod predicate;

use std::ffi::OsString;

use clap::Parser;

pub use cli::Command;
pub use predicate::{Predicate, PredicateError};

/// Log filter used if neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Holds all the configurable information for a single invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Filter for the logger, used if `RUST_LOG` is not set
    pub log_level: String,

    /// Spread arrays over multiple lines when printing them
    pub pretty: bool,
}

impl Settings {
    /// Read the settings and the requested command from the process arguments
    ///
    /// Exits the process with a usage message if the arguments are invalid.
    #[must_use]
    pub fn init() -> (Self, Command) {
        Self::from_arguments(cli::Arguments::parse())
    }

    pub fn try_init_from<I, T>(arguments: I) -> Result<(Self, Command), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        cli::Arguments::try_parse_from(arguments).map(Self::from_arguments)
    }

    fn from_arguments(arguments: cli::Arguments) -> (Self, Command) {
        let mut settings = Self::default();
        let command = arguments.update_settings(&mut settings);

        (settings, command)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            pretty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use backfill::{Depth, Value};

    use super::{Command, Predicate, Settings};

    fn parse(literal: &str) -> Value {
        literal.parse().unwrap()
    }

    #[test]
    fn defaults() {
        let (settings, command) = Settings::try_init_from(["backfill", "entries", "{a: 1}"]).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(
            command,
            Command::Entries {
                value: parse("{a: 1}")
            }
        );
    }

    #[test]
    fn global_options() {
        let (settings, command) = Settings::try_init_from([
            "backfill",
            "--pretty",
            "--log-level",
            "trace",
            "sort",
            "[3, 1, 2]",
            "--descending",
        ])
        .unwrap();

        assert!(settings.pretty);
        assert_eq!(settings.log_level, "trace");
        assert_eq!(
            command,
            Command::Sort {
                value: parse("[3, 1, 2]"),
                descending: true
            }
        );
    }

    #[test]
    fn flatten_depth() {
        let (_, command) = Settings::try_init_from(["backfill", "flatten", "[[1]]"]).unwrap();
        assert!(matches!(command, Command::Flatten { depth: Depth::Levels(1), .. }));

        let (_, command) =
            Settings::try_init_from(["backfill", "flatten", "[[1]]", "--depth", "inf"]).unwrap();
        assert!(matches!(command, Command::Flatten { depth: Depth::Unbounded, .. }));

        assert!(Settings::try_init_from(["backfill", "flatten", "[]", "--depth", "deep"]).is_err());
    }

    #[test]
    fn predicate_commands() {
        let (_, command) =
            Settings::try_init_from(["backfill", "some", "[1, 'a']", "is-string"]).unwrap();
        assert_eq!(
            command,
            Command::Any {
                value: parse("[1, 'a']"),
                predicate: Predicate::IsString
            }
        );

        let (_, command) =
            Settings::try_init_from(["backfill", "find", "[[1], ['b']]", "contains='b'"]).unwrap();
        assert!(matches!(
            command,
            Command::Find {
                predicate: Predicate::Contains(Value::Str(_)),
                ..
            }
        ));
    }

    #[test]
    fn invalid_arguments() {
        assert!(Settings::try_init_from(["backfill", "sort", "[1, 2"]).is_err());
        assert!(Settings::try_init_from(["backfill", "every", "[1]", "is-big"]).is_err());
        assert!(Settings::try_init_from(["backfill"]).is_err());
    }
}
