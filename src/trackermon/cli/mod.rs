//! Terminal client: path resolution, one-shot and REPL modes.

mod print;

use crate::args::Cli;
use colored::Colorize;
use directories::ProjectDirs;
use print::{print_messages, print_result, print_startup};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use trackermon::api::{MessageLevel, TrackerApi};
use trackermon::config::TrackermonConfig;
use trackermon::error::{Result, TrackermonError};
use trackermon::store::json::JsonFileStore;

const PROMPT: &str = "> ";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "trackermon", "trackermon").ok_or_else(|| {
        TrackermonError::Config("could not determine the user's home directory".to_string())
    })
}

fn config_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(dir) => Ok(dir.clone()),
        None => Ok(project_dirs()?.config_dir().to_path_buf()),
    }
}

fn data_file(cli: &Cli, config: &TrackermonConfig) -> Result<PathBuf> {
    match (&cli.data, &config.data_file) {
        (Some(path), _) | (None, Some(path)) => Ok(path.clone()),
        (None, None) => Ok(config.data_file_or(project_dirs()?.data_dir())),
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let config = TrackermonConfig::load(config_dir(cli)?)?;
    let store = JsonFileStore::new(data_file(cli, &config)?);
    tracing::debug!(data = %store.path().display(), "using data file");

    let (mut api, outcome) = TrackerApi::open(
        store,
        config.command_options(),
        config.sample_data_on_first_run,
    )?;

    match cli.command_line() {
        Some(line) => {
            // One-shot output stays quiet unless the data file was rejected.
            if let Some(warning) = outcome
                .message()
                .filter(|m| m.level == MessageLevel::Warning)
            {
                print_messages(&[warning]);
            }
            let result = api.execute_line(&line)?;
            print_result(&result, api.session().catalog());
            Ok(())
        }
        None => {
            print_startup(&outcome, api.session().indexed_visible().as_slice());
            repl(&mut api, io::stdin().lock())
        }
    }
}

/// Reads commands line by line until `exit` or end of input. Command failures
/// are reported and the loop continues.
fn repl<R: BufRead>(api: &mut TrackerApi<JsonFileStore>, input: R) -> Result<()> {
    let mut lines = input.lines();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;

        match api.execute_line(&line) {
            Ok(result) => {
                print_result(&result, api.session().catalog());
                if result.exit {
                    return Ok(());
                }
            }
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
    }
}
