use clap::Parser;
use student_roster::utils::{logger, validation::Validate};
use student_roster::{App, CliConfig, Console, RosterError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.roster_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let mut app = App::new(Console::stdio(), config);

    match app.run() {
        Ok(()) => Ok(()),
        Err(RosterError::InputClosed) => {
            tracing::debug!("Input closed, ending session");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Session aborted: {}", e);
            Err(e.into())
        }
    }
}
