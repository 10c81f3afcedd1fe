use std::process::ExitCode;

use backfill::{Container, EntryError, Orderable, Value};
use error_derive::Error;
use settings::{Command, Settings};

#[derive(Debug, Error)]
enum CliError {
    #[msg = "input must be an array"]
    NotAnArray,

    #[msg = "failed to convert entries"]
    Entries(EntryError),
}

pub fn main() -> ExitCode {
    let (settings, command) = Settings::init();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    log::debug!("Running {command:?}");

    match run(command) {
        Ok(result) => {
            if settings.pretty {
                println!("{result:#}");
            } else {
                println!("{result}");
            }
            ExitCode::SUCCESS
        },
        Err(error) => {
            match std::error::Error::source(&error) {
                Some(source) => log::error!("{error}: {source}"),
                None => log::error!("{error}"),
            }
            ExitCode::FAILURE
        },
    }
}

fn into_array(value: Value) -> Result<Container<Value>, CliError> {
    match value {
        Value::Array(array) => Ok(array),
        other => {
            log::warn!("Expected an array, found a value of type {}", other.type_name());
            Err(CliError::NotAnArray)
        },
    }
}

fn run(command: Command) -> Result<Value, CliError> {
    let result = match command {
        Command::Sort { value, descending } => {
            let array = into_array(value)?;
            let sorted = if descending {
                backfill::sort_by(&array, |a, b| b.compare(a))
            } else {
                backfill::sort(&array)
            };
            Value::Array(sorted)
        },
        Command::Flatten { value, depth } => {
            Value::Array(backfill::flatten_container(&into_array(value)?, depth))
        },
        Command::Find { value, predicate } => {
            let array = into_array(value)?;
            backfill::find(|value, _| predicate.matches(value), &array)
                .cloned()
                .unwrap_or(Value::Null)
        },
        Command::Any { value, predicate } => Value::Bool(backfill::some(
            |value, _| predicate.matches(value),
            &into_array(value)?,
        )),
        Command::All { value, predicate } => Value::Bool(backfill::every(
            |value, _| predicate.matches(value),
            &into_array(value)?,
        )),
        Command::Entries { value } => value.to_entries()?,
        Command::FromEntries { value } => value.restore_entries()?,
    };

    Ok(result)
}
