use backfill::{Depth, ParseError, Value};

use crate::{Predicate, PredicateError, Settings};

#[derive(clap::Parser, Debug)]
#[command(name = "backfill", version, about = "Array helpers on the command line", long_about = None)]
pub(crate) struct Arguments {
    /// Log filter to use if RUST_LOG is not set
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Spread arrays over multiple lines
    #[clap(
        long,
        action = clap::ArgAction::SetTrue,
    )]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

/// The operation to run
///
/// Every operation reads its input as a literal like `[1, [2, 3]]` or `{a: 15, b: 'x'}`.
#[derive(clap::Subcommand, Clone, Debug, PartialEq)]
pub enum Command {
    /// Sort the values of an array, keeping keys attached to their values
    Sort {
        #[arg(value_parser = parse_value)]
        value: Value,

        /// Sort from largest to smallest
        #[arg(long, action = clap::ArgAction::SetTrue)]
        descending: bool,
    },

    /// Concatenate nested arrays into their parent
    Flatten {
        #[arg(value_parser = parse_value)]
        value: Value,

        /// Number of levels to flatten, or "inf" to flatten completely
        #[arg(long, default_value_t = Depth::default(), value_parser = parse_depth)]
        depth: Depth,
    },

    /// Print the first value matching a predicate, or null
    Find {
        #[arg(value_parser = parse_value)]
        value: Value,

        /// One of is-int, is-string, is-array, equals=<VALUE> or contains=<VALUE>
        #[arg(value_parser = parse_predicate)]
        predicate: Predicate,
    },

    /// Check whether at least one value matches a predicate
    #[command(name = "some")]
    Any {
        #[arg(value_parser = parse_value)]
        value: Value,

        /// One of is-int, is-string, is-array, equals=<VALUE> or contains=<VALUE>
        #[arg(value_parser = parse_predicate)]
        predicate: Predicate,
    },

    /// Check whether every value matches a predicate
    #[command(name = "every")]
    All {
        #[arg(value_parser = parse_value)]
        value: Value,

        /// One of is-int, is-string, is-array, equals=<VALUE> or contains=<VALUE>
        #[arg(value_parser = parse_predicate)]
        predicate: Predicate,
    },

    /// Print the [key, value] pairs of an array
    Entries {
        #[arg(value_parser = parse_value)]
        value: Value,
    },

    /// Build an array from [key, value] pairs
    FromEntries {
        #[arg(value_parser = parse_value)]
        value: Value,
    },
}

impl Arguments {
    pub(crate) fn update_settings(self, settings: &mut Settings) -> Command {
        if let Some(log_level) = self.log_level {
            settings.log_level = log_level;
        }

        settings.pretty = self.pretty;

        self.command
    }
}

fn parse_value(s: &str) -> Result<Value, String> {
    s.parse().map_err(|e: ParseError| format!("{e}"))
}

fn parse_depth(s: &str) -> Result<Depth, String> {
    s.parse()
        .map_err(|e: <Depth as std::str::FromStr>::Err| format!("expected a number or \"inf\": {e}"))
}

fn parse_predicate(s: &str) -> Result<Predicate, String> {
    s.parse().map_err(|e: PredicateError| format!("{e}"))
}
