use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spendtrack::cli::{
    build_cipher, handle_category_command, handle_expense_command, handle_init,
    handle_report_command, open_store, CategoryCommands, ExpenseCommands,
};
use spendtrack::config::{Settings, TrackerPaths};

#[derive(Parser)]
#[command(
    name = "spendtrack",
    version,
    about = "Personal expense tracking with spending analytics",
    long_about = "spendtrack records personal expenses against categories and \
                  computes spending reports over a date range. Payment method \
                  data is stored encrypted with a key derived from the \
                  SPENDTRACK_ENCRYPTION_KEY passphrase."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the tracker: data directory, user, default categories
    Init {
        /// Username to record expenses against
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Spending report over a date range (defaults to the current month)
    Report {
        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Init { name } => {
            handle_init(&paths, &mut settings, name)?;
        }
        Commands::Category(cmd) => {
            let mut store = open_store(&paths)?;
            handle_category_command(&mut store, cmd)?;
        }
        Commands::Expense(cmd) => {
            let cipher = build_cipher(&settings)?;
            let mut store = open_store(&paths)?;
            handle_expense_command(&mut store, &cipher, &settings, cmd)?;
        }
        Commands::Report { from, to } => {
            let store = open_store(&paths)?;
            handle_report_command(&store, &settings, from, to)?;
        }
        Commands::Config => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Categories file: {}", paths.categories_file().display());
            match &settings.user {
                Some(user) => println!("User:            {} ({})", user.username, user.id),
                None => println!("User:            (not initialized)"),
            }
            println!(
                "Encryption:      {}",
                if settings.key_params.is_some() {
                    "configured"
                } else {
                    "not configured"
                }
            );
        }
    }

    Ok(())
}
