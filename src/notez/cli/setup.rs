use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "notez", bin_name = "notez", version = get_version())]
#[command(about = "A small note store with optional AI suggestions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes.json and config.json (overrides NOTEZ_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note (reads stdin when no content is given)
    #[command(alias = "n")]
    Create {
        /// Content of the note
        #[arg(num_args = 0..)]
        content: Vec<String>,
    },

    /// List notes
    #[command(alias = "ls")]
    List,

    /// View one or more notes
    #[command(alias = "v")]
    View {
        /// Indexes of the notes (e.g. 1 3 5 or 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Replace the content of a note
    #[command(alias = "e")]
    Edit {
        /// Index of the note
        index: String,

        /// New content (may be empty)
        #[arg(num_args = 0..)]
        content: Vec<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the notes (e.g. 1 3 5 or 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Fetch AI suggestions for a note
    #[command(alias = "s")]
    Suggest {
        /// Index of the note
        index: String,
    },

    /// Talk to the remote notes backend
    Remote {
        #[command(subcommand)]
        action: RemoteCommands,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (suggestions-url, backend-url, timeout)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the notes file
    Path,
}

#[derive(Subcommand, Debug)]
pub enum RemoteCommands {
    /// List notes stored on the backend
    #[command(alias = "ls")]
    List,

    /// Create a note on the backend
    Create {
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// Copy backend notes missing locally to the top of the local list
    Pull,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["notez"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn create_collects_words() {
        let cli = Cli::try_parse_from(["notez", "n", "buy", "milk"]).unwrap();
        match cli.command {
            Some(Commands::Create { content }) => assert_eq!(content, vec!["buy", "milk"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn edit_takes_index_then_content() {
        let cli = Cli::try_parse_from(["notez", "edit", "2", "new", "text"]).unwrap();
        match cli.command {
            Some(Commands::Edit { index, content }) => {
                assert_eq!(index, "2");
                assert_eq!(content, vec!["new", "text"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn delete_requires_an_index() {
        assert!(Cli::try_parse_from(["notez", "rm"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["notez", "list", "--data-dir", "/tmp/x", "-v"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }

    #[test]
    fn remote_subcommands() {
        let cli = Cli::try_parse_from(["notez", "remote", "pull"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Remote {
                action: RemoteCommands::Pull
            })
        ));
    }
}
