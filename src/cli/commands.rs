// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the web interface
    Serve {
        /// Address to bind (overrides WEB_ADDRESS)
        #[arg(long)]
        address: Option<String>,

        /// Port to listen on (overrides WEB_PORT)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Score a password; prompts for it when not given
    Check {
        /// Password to score
        password: Option<String>,
    },

    /// Generate random passwords
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Include digits
        #[arg(long, short)]
        numbers: bool,

        /// Include punctuation
        #[arg(long, short)]
        specials: bool,

        /// How many passwords to print
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },
}
