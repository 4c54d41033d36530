//! assistkit - a small command-line assistant
//!
//! Voice-style command routing, an HTTP API, a BMI calculator and a
//! console weather viewer.

use anyhow::Result;
use assistkit::assistant::Assistant;
use assistkit::config::Config;
use assistkit::error::AssistError;
use assistkit::skills::{self, Surface};
use assistkit::{bmi, server, tts, weather};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive assistant: one command per line on stdin
    Listen {
        /// Speak replies with the system TTS engine
        #[arg(long)]
        speak: bool,
    },
    /// Run a single command and print the reply
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Body Mass Index calculator
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// Height in metres
        #[arg(long)]
        height: Option<f64>,
    },
    /// Current weather for a city name or ZIP code
    Weather { location: Option<String> },
}

fn init_logging(verbose: bool, config: &Config) -> Result<()> {
    let level = if verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_logging(args.verbose, &config)?;

    info!("🤖 assistkit v{} starting...", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Listen { speak } => {
            let router = Arc::new(skills::default_router(&config, Surface::Console)?);
            let engine: Arc<dyn tts::TtsEngine> = if speak {
                Arc::new(tts::system::SystemEngine::new())
            } else {
                tts::create_engine(&config)
            };
            let assistant = Assistant::new(router, engine);
            let exit = assistant.run(BufReader::new(tokio::io::stdin())).await?;
            info!("Assistant stopped: {:?}", exit);
        }
        Command::Ask { text } => {
            let router = skills::default_router(&config, Surface::Console)?;
            let dispatch = router.dispatch(&text.join(" ")).await;
            println!("{}", dispatch.reply.text);
        }
        Command::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server_host = host;
            }
            if let Some(port) = port {
                config.server_port = port;
            }
            let router = Arc::new(skills::default_router(&config, Surface::Server)?);
            server::serve(&config, router).await?;
        }
        Command::Bmi { weight, height } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            if let Err(e) = bmi::run_interactive(&mut input, &mut output, weight, height) {
                println!("\n[Calculation Error] {}", e);
            }
        }
        Command::Weather { location } => run_weather(&config, location).await?,
    }

    Ok(())
}

async fn run_weather(config: &Config, location: Option<String>) -> Result<()> {
    println!("--- Console Weather App ---");
    println!("Fetching weather data using OpenWeatherMap.");

    let client = match weather::WeatherClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            println!("\nCRITICAL ERROR: {}", e);
            return Ok(());
        }
    };

    let location = match location {
        Some(location) => location,
        None => {
            print!("\nEnter city name or ZIP code: ");
            std::io::stdout().flush()?;
            let mut line = String::new();
            std::io::stdin().read_line(&mut line)?;
            line
        }
    };
    let location = location.trim();
    if location.is_empty() {
        println!("Location cannot be empty. Exiting.");
        return Ok(());
    }

    println!("\nFetching data for {}...", location);
    match client.current(location).await {
        Ok(report) => {
            let mut out = std::io::stdout();
            weather::animate(&mut out, &report.condition).await?;
            println!("{}", report.render());
        }
        Err(AssistError::NotFound(message)) => println!("\n[ERROR]\n{}", message),
        Err(e) => {
            warn!("Weather lookup failed: {}", e);
            println!("\n[ERROR]\nAPI Request Error: {}", e);
        }
    }
    Ok(())
}
