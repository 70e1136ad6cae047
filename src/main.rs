use shakti::cli::commands::{self, Env};
use shakti::cli::output::Output;
use shakti::cli::Cli;
use shakti::config::ClientConfig;
use shakti::Notice;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shakti={level},warn")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let config = match ClientConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("{}: {}", cli.config.display(), e));
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging.level, cli.verbose);

    let result = match Env::new(config) {
        Ok(env) => commands::dispatch(cli.command, &env, &output).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<Notice>() {
                Some(notice) => output.notice(notice),
                None => output.error(&format!("{:#}", e)),
            }
            ExitCode::FAILURE
        }
    }
}
