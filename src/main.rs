use contact_book::prelude::{AppError, run_app};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<(), AppError> {
    // stdout belongs to the dialogue, so diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run_app()
}
