use std::env;

use anyhow::Result;

use termtask::config::Config;
use termtask::events::{JsonlEvents, NoopEvents, TodoEvents};
use termtask::service::TodoService;
use termtask::{logger, ui};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut config_path: Option<String> = None;
    match args.first().map(String::as_str) {
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some("--init-config") => {
            let path = Config::default_config_path()?;
            Config::generate_default_config(&path)?;
            println!("✓ Generated default configuration file: {}", path.display());
            return Ok(());
        }
        Some("--config") => match args.get(1) {
            Some(path) => config_path = Some(path.clone()),
            None => {
                eprintln!("Error: --config requires a path");
                print_usage();
                std::process::exit(1);
            }
        },
        Some(other) => {
            eprintln!("Error: Unknown option '{other}'");
            print_usage();
            std::process::exit(1);
        }
        None => {}
    }

    let config = match &config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    logger::init(&config.logging)?;

    let events: Box<dyn TodoEvents> = if config.events.enabled {
        Box::new(JsonlEvents::new(config.events.file_path()))
    } else {
        Box::new(NoopEvents)
    };
    let service = TodoService::new(events);

    ui::run_app(service, config)
}

fn print_usage() {
    eprintln!("Usage: termtask [OPTIONS]");
    eprintln!();
    eprintln!("An in-memory todo manager with an interactive terminal menu.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <PATH>  Load configuration from an explicit file");
    eprintln!("  --init-config    Write the default configuration file and exit");
    eprintln!("  -h, --help       Show this help message");
}
