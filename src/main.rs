use std::io;
use std::process::ExitCode;

use variant_chess::cli::Session;
use variant_chess::config::AppConfig;
use variant_chess::engine::Game;

fn main() -> ExitCode {
    let config = AppConfig::from_env();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();

    tracing::info!("variant-chess v{}", env!("CARGO_PKG_VERSION"));

    let mut session = Session::new(Game::new(), config, io::stdin().lock(), io::stdout().lock());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal I/O failed");
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
