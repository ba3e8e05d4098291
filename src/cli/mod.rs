use std::path::PathBuf;

use clap::Subcommand;

use crate::connector::{DEFAULT_PORT, DEFAULT_SERVER_URL, DEFAULT_STATIC_DIR};
use crate::domain::Language;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (POST /generate plus the static front-end)
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,

        /// Directory with the web front-end
        #[arg(long, default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,
    },

    /// Analyze a topic in-process and print the pros and cons
    Analyze {
        topic: String,

        /// Output language: id or en
        #[arg(short, long, default_value = "id")]
        language: Language,
    },

    /// Analyze a topic through a running server's /generate endpoint
    Ask {
        topic: String,

        /// Output language: id or en
        #[arg(short, long, default_value = "id")]
        language: Language,

        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        server: String,
    },
}
