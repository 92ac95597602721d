mod app;
mod config;
mod data;
mod error;
mod state;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use app::{Session, SessionEnd};
use error::Error;
use state::AppState;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let outcome = run();
    if let Err(e) = &outcome {
        eprintln!("Error: {e:#}");
    }
    ExitCode::from(exit_status(&outcome))
}

/// Quitting and closed input both count as success.
fn exit_status(outcome: &Result<SessionEnd>) -> u8 {
    match outcome {
        Ok(end) => {
            log::debug!("session finished: {end:?}");
            0
        }
        Err(_) => 1,
    }
}

fn run() -> Result<SessionEnd> {
    // Input waits are blocking reads, so the handler ends the process itself.
    ctrlc::set_handler(|| {
        log::info!("{}", Error::InterruptRequested);
        std::process::exit(0);
    })?;

    let path = config::data_path();
    let state = AppState::load(&path)?;
    log::info!("{} elements available", state.len());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(&state, stdin.lock(), stdout.lock());
    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_endings_exit_successfully() {
        assert_eq!(exit_status(&Ok(SessionEnd::Quit)), 0);
        assert_eq!(exit_status(&Ok(SessionEnd::InputClosed)), 0);
    }

    #[test]
    fn load_failure_exits_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = AppState::load(&dir.path().join("missing.csv"))
            .map(|_| SessionEnd::Quit)
            .map_err(anyhow::Error::from);
        assert_eq!(exit_status(&outcome), 1);
    }
}
