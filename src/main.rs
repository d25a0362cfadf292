use clap::Parser;
use inkly_debug::choices::{Scenario, Section};
use inkly_debug::report::{self, ReportOptions, DEFAULT_BASE_URL, DEFAULT_PLAYER_ID};
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "inkly-debug",
    version,
    about = "Prints a narrated trace of the Inkly canvas drawing event flow"
)]
struct Cli {
    /// Which part of the report to print.
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,
    /// Canned sequence of user actions to simulate.
    #[arg(long, value_enum, default_value_t = Scenario::HappyPath)]
    scenario: Scenario,
    /// Base URL of the running game server, used in the closing instructions.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Player id for the manual browser test.
    #[arg(long, default_value = DEFAULT_PLAYER_ID)]
    player_id: String,
}

impl From<Cli> for ReportOptions {
    fn from(cli: Cli) -> Self {
        ReportOptions {
            section: cli.section,
            scenario: cli.scenario,
            base_url: cli.base_url,
            player_id: cli.player_id,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Off)
        .parse_default_env()
        .init();

    let options = ReportOptions::from(Cli::parse());
    log::debug!("options: {options:?}");

    let stdout = io::stdout();
    report::run(&options, &mut stdout.lock())
}
