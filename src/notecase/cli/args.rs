use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// "0.3.2" for release builds, "0.3.2@abc1234" for everything else.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("NOTECASE_GIT_HASH");
    const IS_RELEASE: &str = env!("NOTECASE_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "notecase", version = get_version())]
#[command(about = "Labelled plain-text notes with encrypted backups", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes, newest first
    #[command(alias = "ls")]
    List {
        /// Only notes carrying this label
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Show a note
    #[command(alias = "v")]
    View { id: String },

    /// Add a new note
    #[command(alias = "n")]
    Add {
        /// Note content
        content: String,

        /// Title of the note
        #[arg(short, long, default_value = "")]
        title: String,

        /// Comma separated labels (e.g. "work,ideas")
        #[arg(short, long)]
        labels: Option<String>,
    },

    /// Change the title, content or labels of a note
    #[command(alias = "e")]
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        /// Comma separated labels; an empty string clears them
        #[arg(short, long)]
        labels: Option<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete { id: String },

    /// List every label in use
    Labels,

    /// Write an unencrypted zip of all notes
    Export {
        /// Directory for the archive
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Create an encrypted backup and upload it to a directory
    Backup {
        /// Destination directory the sealed backup is copied to
        #[arg(long)]
        to: PathBuf,

        /// Working directory for intermediate files (defaults to the system temp dir)
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, env = "NOTECASE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Restore notes from an exported zip or, with a password, an encrypted backup
    Restore {
        file: PathBuf,

        #[arg(long, env = "NOTECASE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Show or change where notes are stored
    Location {
        /// New notes directory
        path: Option<PathBuf>,

        /// Go back to the default location
        #[arg(long, conflicts_with = "path")]
        clear: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_labels() {
        let cli = Cli::parse_from(["notecase", "add", "milk, eggs", "-t", "Shopping", "-l", "home"]);
        match cli.command {
            Some(Commands::Add {
                content,
                title,
                labels,
            }) => {
                assert_eq!(content, "milk, eggs");
                assert_eq!(title, "Shopping");
                assert_eq!(labels.as_deref(), Some("home"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn location_clear_conflicts_with_path() {
        assert!(Cli::try_parse_from(["notecase", "location", "/x", "--clear"]).is_err());
    }
}
