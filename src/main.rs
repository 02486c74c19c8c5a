use anyhow::Context;
use clap::Parser;
use dicetray::config::Config;
use dicetray::dice::ThreadRoller;
use dicetray::headless::roll_to_text;
use dicetray::logging::init_tracing;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dicetray", version, about = "Roll six-sided dice in the terminal")]
struct Cli {
    /// Roll N dice, print them and exit without starting the UI
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    roll: Option<String>,

    /// Pre-fill the dice count in the UI
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    count: Option<String>,

    /// Path to a config file (default: ~/.config/dicetray/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(input) = cli.roll {
        let mut roller = ThreadRoller::thread();
        match roll_to_text(&input, &config, &mut roller) {
            Ok(text) => println!("{}", text),
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    dicetray::ui::runtime::run(&config, cli.count).context("Terminal UI failed")?;
    Ok(())
}
