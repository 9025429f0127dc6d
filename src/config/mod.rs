pub mod roster;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::model::Sport;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_file_extension, validate_path, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "depth-chart")]
    #[command(about = "Maintain and inspect team depth charts")]
    pub struct CliConfig {
        /// TOML roster file to replay; runs the built-in demo when omitted
        #[arg(long)]
        pub roster: Option<String>,

        /// Sport used for entries that do not name one
        #[arg(long, default_value = "nfl")]
        pub sport: Sport,

        /// Print the final depth chart as JSON
        #[arg(long)]
        pub json: bool,

        /// Emit logs as JSON
        #[arg(long)]
        pub log_json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(roster) = &self.roster {
                validate_path("roster", roster)?;
                validate_file_extension("roster", roster, &["toml"])?;
            }
            Ok(())
        }
    }

}
