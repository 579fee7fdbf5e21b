use clap::{Parser, Subcommand};
use qboard::model::{DifficultyFilter, SortKey};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "qboard", bin_name = "qboard", version = get_version())]
#[command(about = "Work through coding-interview questions and track your progress", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load questions from this CSV instead of the configured source
    #[arg(long, global = true, value_name = "CSV")]
    pub source: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List questions (the default command)
    #[command(alias = "ls")]
    List {
        /// Only questions whose title or topics contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// all, easy, medium or hard
        #[arg(short, long, default_value = "all")]
        difficulty: DifficultyFilter,

        /// Sort key: title, difficulty, frequency, acceptance, topics.
        /// Repeating the active key flips the direction. Text columns ignore
        /// case but are not locale-collated (accented letters sort last).
        #[arg(long, value_name = "KEY")]
        sort: Vec<SortKey>,

        /// Force ascending order
        #[arg(long, conflicts_with = "desc")]
        asc: bool,

        /// Force descending order
        #[arg(long)]
        desc: bool,

        /// Show problem links
        #[arg(short, long)]
        links: bool,
    },

    /// Flip the completed mark of questions (by number or title)
    #[command(alias = "t")]
    Toggle {
        /// Numbers from the list (e.g. 1 7 12) or a title (e.g. Two Sum)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Show completion progress
    #[command(alias = "st")]
    Status,

    /// Clear all progress
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Write progress to progress.json
    Export {
        /// Directory (writes progress.json inside it) or file path
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Replace progress with the contents of a JSON file
    Import {
        /// A JSON object mapping titles to true/false
        path: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (source, slot)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
