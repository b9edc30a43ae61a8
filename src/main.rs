use anyhow::Result;
use i3_quickterm::app::App;
use i3_quickterm::cli;

fn main() {
    // Process CLI arguments first (help and version exit here)
    let options = cli::process_cli();

    i3_quickterm::debug::init_log_bridge(options.verbose);
    log::info!("Starting i3-quickterm {:?}", options);

    if let Err(e) = run(options) {
        eprintln!("i3-quickterm: error: {e:#}");
        std::process::exit(1);
    }
}

fn run(options: cli::RuntimeOptions) -> Result<()> {
    App::new(options).run()?;
    Ok(())
}
