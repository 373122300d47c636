//! Hotel Service - maintenance CLI for the reservation store.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::CreateUserParams;
use hotel_service_lib::config::HotelServiceConfig;
use hotel_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "hotel-service")]
#[command(about = "Hotel reservation persistence tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Drop hotels and rooms, then insert the seed data
    Seed,
    /// Validate and store a new user
    CreateUser {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "NEW_USER_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = HotelServiceConfig::from_env();
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            hotel_service_lib::run_migrations(&config, migrate_action).await?;
        }
        Commands::Seed => {
            let hotels = hotel_service_lib::seed_database(&config).await?;
            println!("{}", serde_json::to_string_pretty(&hotels)?);
        }
        Commands::CreateUser {
            first_name,
            last_name,
            email,
            password,
        } => {
            let params = CreateUserParams::new(first_name, last_name, email, password);
            match hotel_service_lib::create_user(&config, params).await {
                Ok(user) => println!("{}", serde_json::to_string_pretty(&user)?),
                Err(err) => {
                    if let Some(errors) = err.validation_errors() {
                        for (field, message) in errors.iter() {
                            eprintln!("{}: {}", field, message);
                        }
                    } else {
                        eprintln!("{}", err.user_message());
                    }
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
