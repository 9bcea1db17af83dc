use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use kakeibo::cli::{
    handle_add_command, handle_calendar_command, handle_export_command, handle_goal_command,
    handle_list_command, handle_projection_command, handle_show_command, handle_summary_command,
    handle_trend_command, parse_date, AddArgs, CalendarArgs, ExportArgs, GoalCommands, ListArgs,
    ShowArgs, TrendCommands,
};
use kakeibo::config::{paths::KakeiboPaths, settings::Settings};
use kakeibo::services::transaction::default_date;
use kakeibo::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kakeibo",
    version,
    about = "Household ledger with savings-goal budget projections",
    long_about = "Kakeibo records income and expenses and turns a savings goal into \
                  spending guidance: what is left to spend this month, per day, and \
                  how the ledger trends over days and months."
)]
struct Cli {
    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true, env = "KAKEIBO_TODAY", value_name = "YYYY-MM-DD")]
    today: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Record an income or expense
    Add(AddArgs),

    /// List recorded transactions, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one transaction in full
    Show(ShowArgs),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Total balance and income/expense share
    Summary,

    /// Budget projection toward the savings goal
    #[command(alias = "budget")]
    Projection,

    /// Income and expense trends
    #[command(subcommand)]
    Trend(TrendCommands),

    /// Month calendar with daily nets
    #[command(alias = "cal")]
    Calendar(CalendarArgs),

    /// Export data as CSV, JSON or YAML
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    kakeibo::logging::init(cli.verbose);

    let today = match cli.today.as_deref() {
        Some(s) => parse_date(s)?,
        None => default_date(),
    };

    // Initialize paths and settings
    let paths = KakeiboPaths::new()?;
    let settings = Settings::load_or_create(&paths)
        .with_context(|| format!("loading {}", paths.settings_file().display()))?;
    debug!(base_dir = %paths.base_dir().display(), %today, "starting");

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Kakeibo at: {}", paths.base_dir().display());
            kakeibo::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next steps:");
            println!("  kakeibo goal set --balance 0 --target 120000 --date 2025-12-31 --income 200000");
            println!("  kakeibo add expense 3500 --memo Lunch");
            println!("  kakeibo projection");
        }
        Some(Commands::Config) => {
            println!("Kakeibo Configuration");
            println!("=====================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Goal file:         {}", paths.goal_file().display());
            println!("Initialized:       {}", storage.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Daily trend days:     {}", settings.daily_trend_days);
            println!("  Monthly trend months: {}", settings.monthly_trend_months);
            println!("  First day of week:    {}", settings.first_day_of_week);
        }
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args, today)?,
        Some(Commands::List(args)) => handle_list_command(&storage, &settings, args)?,
        Some(Commands::Show(args)) => handle_show_command(&storage, &settings, args)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd)?,
        Some(Commands::Summary) => handle_summary_command(&storage, &settings)?,
        Some(Commands::Projection) => handle_projection_command(&storage, &settings, today)?,
        Some(Commands::Trend(cmd)) => handle_trend_command(&storage, &settings, cmd)?,
        Some(Commands::Calendar(args)) => {
            handle_calendar_command(&storage, &settings, args, today)?
        }
        Some(Commands::Export(args)) => handle_export_command(&storage, args, today)?,
        None => {
            println!("Kakeibo - household ledger and budget projections");
            println!();
            println!("Run 'kakeibo --help' for usage information.");
        }
    }

    Ok(())
}
