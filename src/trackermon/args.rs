use clap::Parser;
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    env!("TRACKERMON_BUILD_INFO")
);

#[derive(Parser, Debug)]
#[command(name = "trackermon")]
#[command(version = VERSION)]
#[command(about = "Keep track of the shows you watch", long_about = None)]
#[command(after_help = "Without a COMMAND, trackermon reads commands from stdin, one per line.\n\
    Examples:\n  trackermon add n/Naruto s/watching t/Anime\n  trackermon find naruto\n  trackermon delete 2")]
pub struct Cli {
    /// Command to run once, e.g. `add n/Naruto s/watching`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub command: Vec<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Catalog file to use instead of the configured one
    #[arg(long, env = "TRACKERMON_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, env = "TRACKERMON_CONFIG_DIR", value_name = "DIR")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The one-shot command line, if any words were given.
    pub fn command_line(&self) -> Option<String> {
        (!self.command.is_empty()).then(|| self.command.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_words_means_repl() {
        let cli = Cli::try_parse_from(["trackermon"]).unwrap();
        assert_eq!(cli.command_line(), None);
        assert!(!cli.verbose);
    }

    #[test]
    fn trailing_words_form_one_command() {
        let cli = Cli::try_parse_from([
            "trackermon",
            "-v",
            "--data",
            "/tmp/shows.json",
            "add",
            "n/Attack on Titan",
            "s/watching",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/shows.json")));
        assert_eq!(
            cli.command_line().as_deref(),
            Some("add n/Attack on Titan s/watching")
        );
    }
}
