use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate a natal chart and store it as the current profile
    Chart {
        #[arg(long)]
        name: String,

        /// Birth date, e.g. 1994-03-21
        #[arg(long)]
        date: String,

        /// Local birth time, e.g. 04:12
        #[arg(long)]
        time: String,

        /// Birth place, e.g. "Lisbon, Portugal"
        #[arg(long)]
        location: String,

        #[arg(long)]
        bio: Option<String>,
    },

    /// Recalculate the stored profile's chart from its birth data
    Recalc,

    /// Print the stored profile
    Show {
        /// Print raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Score synastry between the current profile and a candidate profile file
    Compat {
        candidate: PathBuf,
    },

    /// Suggest an opening line for a candidate profile file
    Icebreaker {
        candidate: PathBuf,
    },

    /// List upcoming personalized astrological events
    Forecast {
        /// Reference day (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete the stored profile
    Reset,
}
