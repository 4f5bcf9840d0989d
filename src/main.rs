use anyhow::Result;
use clap::{Parser, Subcommand};

use onsplit::cli::{
    handle_expense_command, handle_export_command, handle_member_command, ExpenseCommands,
    ExportCommands, MemberCommands,
};
use onsplit::config::{paths::OnSplitPaths, settings::Settings};
use onsplit::storage::Storage;

#[derive(Parser)]
#[command(
    name = "onsplit",
    version,
    about = "Command-line expense splitting",
    long_about = "OnSplit helps groups share expenses from the command line. \
                  Build an expense in a resumable step-by-step wizard, split it \
                  equally, by percentage, by fixed amounts or by weights, and \
                  settle it into a local ledger."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense wizard and ledger commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Roster management commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Export the committed ledger
    #[command(subcommand)]
    Export(ExportCommands),

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = OnSplitPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Commands::Expense(command) => handle_expense_command(&storage, &settings, command)?,
        Commands::Member(command) => handle_member_command(&storage, command)?,
        Commands::Export(command) => handle_export_command(&storage, command)?,
        Commands::Init => {
            if paths.is_initialized() {
                println!("Already initialized at {}", paths.base_dir().display());
            } else {
                settings.setup_completed = true;
                settings.save(&paths)?;
                println!("Initialized OnSplit at {}", paths.base_dir().display());
                println!("Next steps:");
                println!("  - Add members:      onsplit member add <name>");
                println!("  - Start an expense: onsplit expense start");
            }
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Draft file:     {}", paths.draft_file().display());
            println!("Members file:   {}", paths.members_file().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Activity log:   {}", paths.activity_log().display());
            println!();
            println!("Currency symbol:    {}", settings.currency_symbol);
            println!("Default split:      {}", settings.default_split_method);
            println!("Commit attempts:    {}", settings.commit_max_attempts);
            println!("Commit backoff:     {} ms", settings.commit_retry_base_ms);
            println!("Settlement delay:   {} ms", settings.settlement_delay_ms);
        }
    }

    Ok(())
}
