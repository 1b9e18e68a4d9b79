use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use rover_service::{Heading, Rover};

#[derive(Parser)]
#[command(name = "rover-cli")]
#[command(about = "Command-line client for the Mars Rover API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000/api")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show API usage and a sample payload
    Info,
    /// Send a command string to the service
    Move {
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        x: i64,
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        y: i64,
        #[arg(short, long, default_value = "NORTH")]
        direction: Heading,
        /// Commands, e.g. FFRFF
        #[arg(short, long)]
        command: String,
    },
    /// Run the rover locally, without a server
    Simulate {
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        x: i64,
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        y: i64,
        #[arg(short, long, default_value = "NORTH")]
        direction: Heading,
        /// Commands, e.g. FFRFF
        commands: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Info => {
            let res = client.get(&cli.url).send().await?;
            print_response(res).await?;
        }
        Commands::Move { x, y, direction, command } => {
            let body = json!({
                "state": { "x": x, "y": y, "direction": direction },
                "command": command,
            });
            let res = client.post(&cli.url).json(&body).send().await?;
            print_response(res).await?;
        }
        Commands::Simulate { x, y, direction, commands } => {
            let mut rover = Rover::new();
            rover.init(x, y, direction);
            let applied = rover.execute(&commands);
            if applied < commands.chars().count() {
                eprintln!("Stopped after {} of {} commands", applied, commands.chars().count());
            }
            println!("{}", rover);
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
