use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jot")]
#[command(version, about = "Tab-delimited note keeping for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on a named category store instead of the global notes file
    #[arg(short, long, global = true)]
    pub category: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note, dated today unless a date is given
    #[command(alias = "a")]
    Add {
        /// Note content ("-" reads one note per line from stdin)
        content: String,

        /// Note date (yyyy-MM-dd)
        date: Option<String>,
    },

    /// List notes; postponed notes stay hidden (the default command)
    #[command(alias = "ls")]
    List {
        /// Only undone notes
        #[arg(short, long, conflicts_with = "postponed")]
        undone: bool,

        /// Only postponed notes
        #[arg(short, long)]
        postponed: bool,
    },

    /// Show the latest n notes
    Latest {
        /// How many; negative or oversized counts list everything
        #[arg(allow_hyphen_values = true)]
        count: i64,
    },

    /// Show notes grouped by date
    Tree,

    /// Find notes containing a term (case-sensitive)
    #[command(alias = "f")]
    Search { term: String },

    /// Find notes matching a regular expression (case-insensitive)
    Grep { pattern: String },

    /// Mark a note as done
    Done {
        /// Note id
        #[arg(required_unless_present = "all")]
        id: Option<u32>,

        /// Mark every undone note as done
        #[arg(long, conflicts_with = "id")]
        all: bool,
    },

    /// Mark a note as undone
    Undone { id: u32 },

    /// Postpone an undone note
    Postpone { id: u32 },

    /// Delete a note, all done notes, or the whole store
    #[command(alias = "rm")]
    Delete {
        /// Note id
        #[arg(required_unless_present_any = ["all", "done"])]
        id: Option<u32>,

        /// Delete every note
        #[arg(long, conflicts_with = "id")]
        all: bool,

        /// Delete every note marked done
        #[arg(long, conflicts_with_all = ["id", "all"])]
        done: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Replace a note's content, or its date if the argument is one
    Replace {
        id: u32,

        /// New content, or a yyyy-MM-dd date
        data: String,
    },

    /// Export all notes as a static HTML table
    Export {
        /// Output file
        path: PathBuf,
    },

    /// Print the resolved store path
    Path,

    /// List category stores
    Categories,
}
