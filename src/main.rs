/* 3rd party libraries */
use clap::{Arg, Command};
use log::{info, warn};
use std::io;
use std::path::Path;

/* Custom libraries */
use elevator_fsm::config::{self, Config, OutputFormat};
use elevator_fsm::elevator::{ElevatorController, EventSink, JsonLinesSink, LogSink};
use elevator_fsm::scenario;
use elevator_fsm::unwrap_or_exit;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator_fsm")
        .about("Runs an operation script against the elevator state machine")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .takes_value(true)
                .possible_values(["text", "json"])
                .help("Output format, overrides output.format"),
        )
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .takes_value(true)
                .possible_values(["reference", "config"])
                .default_value("reference")
                .help("Script to run: the built-in reference script or [[scenario.steps]]"),
        )
        .get_matches();

    // Load the configuration
    let mut config = match matches.value_of("config") {
        Some(path) => unwrap_or_exit!(config::load_config(Path::new(path)), "Configuration"),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => unwrap_or_exit!(
            config::load_config(Path::new(DEFAULT_CONFIG_PATH)),
            "Configuration"
        ),
        None => {
            info!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    match matches.value_of("format") {
        Some("json") => config.output.format = OutputFormat::Json,
        Some("text") => config.output.format = OutputFormat::Text,
        _ => (),
    }

    let steps = match matches.value_of("scenario") {
        Some("config") => {
            if config.scenario.steps.is_empty() {
                warn!("Configuration has no scenario steps");
            }
            config.scenario.steps.clone()
        }
        _ => scenario::reference_scenario(),
    };

    // Create the controller and run the script
    let sink: Box<dyn EventSink + Send> = match config.output.format {
        OutputFormat::Text => Box::new(LogSink),
        OutputFormat::Json => Box::new(JsonLinesSink::new(io::stdout())),
    };
    let mut controller = ElevatorController::from_config(&config.controller, sink);
    scenario::run_scenario(&mut controller, &steps);

    let snapshot = controller.snapshot();
    match config.output.format {
        OutputFormat::Text => println!("final: {}", snapshot),
        OutputFormat::Json => match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!("Failed to serialize final snapshot: {}", e),
        },
    }
}
