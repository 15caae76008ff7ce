use tilekit::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    tilekit::cli::run_from_env()
}
