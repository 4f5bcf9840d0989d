//! Expense wizard CLI commands
//!
//! Each invocation rebuilds the wizard controller over the persisted
//! draft, applies one mutation or navigation, and exits; the draft file
//! carries the session across invocations.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::activity::ActivityLogger;
use crate::config::Settings;
use crate::display::{
    format_draft_summary, format_expense_details, format_expense_list, format_field_errors,
    format_step_header,
};
use crate::error::{OnSplitError, OnSplitResult};
use crate::models::{
    Currency, DetailsPatch, ExpenseCategory, LineItem, LineItemId, Member, MemberId, Money,
    PaymentMethod, Receipt, ReceiptId, SplitData,
};
use crate::services::{ExpenseService, RosterService};
use crate::storage::{FileDraftStore, Storage};
use crate::wizard::{
    CancelToken, DraftUpdate, LocalSettlementGateway, NextOutcome, RetryPolicy, WizardController,
};

/// Expense wizard subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Start (or resume) the expense-creation wizard
    Start {
        /// Discard any existing draft and start fresh
        #[arg(long)]
        reset: bool,
    },
    /// Show the draft and current step
    Status,
    /// Set expense details (step 1)
    Set {
        /// Expense title
        #[arg(short, long)]
        title: Option<String>,
        /// Free-form description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// Total amount (e.g. "100" or "100.00")
        #[arg(short, long)]
        amount: Option<String>,
        /// Category (general, food, travel, housing, entertainment, utilities, shopping)
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Currency (USD, EUR, GBP, USDC, ETH)
        #[arg(long)]
        currency: Option<String>,
    },
    /// Manage receipt attachments (step 2)
    #[command(subcommand)]
    Receipt(ReceiptCommands),
    /// Compute the split (step 3)
    #[command(subcommand)]
    Split(SplitCommands),
    /// Manage itemized rows (step 4)
    #[command(subcommand)]
    Item(ItemCommands),
    /// Select a payment method (step 5); run without arguments to list methods
    Payment {
        /// Payment method id
        method: Option<String>,
    },
    /// Validate the current step and advance
    Next,
    /// Go back one step
    Back,
    /// Jump to a visited step (or the immediate next one)
    Goto {
        /// 1-based step number
        step: usize,
    },
    /// Submit the completed expense
    Submit,
    /// Discard the draft
    Cancel,
    /// List committed expenses
    List,
    /// Show one committed expense
    Show {
        /// Expense ID
        id: String,
    },
}

/// Receipt subcommands
#[derive(Subcommand)]
pub enum ReceiptCommands {
    /// Attach a receipt file
    Add {
        /// Path to the receipt file
        path: String,
    },
    /// Remove an attached receipt
    Remove {
        /// Receipt ID
        id: String,
    },
}

/// Split subcommands
#[derive(Subcommand)]
pub enum SplitCommands {
    /// Split equally across members (defaults to the whole roster)
    Equal {
        /// Comma-separated member names or IDs
        #[arg(short, long)]
        members: Option<String>,
    },
    /// Split by percentages, e.g. "alice=60 bob=40"
    Percentage {
        /// member=percentage pairs
        entries: Vec<String>,
    },
    /// Split by fixed amounts, e.g. "alice=60.00 bob=40.00"
    Fixed {
        /// member=amount pairs
        entries: Vec<String>,
    },
    /// Split by weights, e.g. "alice=2 bob=1"
    Weighted {
        /// member=weight pairs
        entries: Vec<String>,
    },
}

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add a line item
    Add {
        /// Item name
        name: String,
        /// Item amount (e.g. "18.50")
        amount: String,
        /// Comma-separated member names or IDs to assign
        #[arg(short, long)]
        assign: Option<String>,
    },
    /// Remove a line item
    Remove {
        /// Line item ID
        id: String,
    },
    /// Assign members to an existing line item
    Assign {
        /// Line item ID
        id: String,
        /// Comma-separated member names or IDs
        members: String,
    },
}

fn build_controller(storage: &Storage) -> WizardController<FileDraftStore> {
    let logger = ActivityLogger::new(storage.paths().activity_log());
    WizardController::with_activity(storage.draft_store(), logger)
}

fn roster_members(storage: &Storage) -> OnSplitResult<Vec<Member>> {
    storage.roster.get_all()
}

/// Parse "name=value" pairs, resolving names through the roster
fn parse_pairs<T>(
    service: &RosterService,
    entries: &[String],
    parse_value: impl Fn(&str) -> OnSplitResult<T>,
) -> OnSplitResult<Vec<(MemberId, T)>> {
    if entries.is_empty() {
        return Err(OnSplitError::Validation(
            "Provide at least one member=value pair".into(),
        ));
    }

    entries
        .iter()
        .map(|entry| {
            let (name, value) = entry.split_once('=').ok_or_else(|| {
                OnSplitError::Validation(format!("Expected member=value, got '{}'", entry))
            })?;
            let member = service.resolve(name.trim())?;
            Ok((member.id, parse_value(value.trim())?))
        })
        .collect()
}

fn parse_money(s: &str) -> OnSplitResult<Money> {
    Money::parse(s).map_err(|e| OnSplitError::Validation(e.to_string()))
}

fn parse_number(s: &str) -> OnSplitResult<f64> {
    s.parse::<f64>()
        .map_err(|_| OnSplitError::Validation(format!("Not a number: {}", s)))
}

fn require_total(controller: &WizardController<FileDraftStore>) -> OnSplitResult<Money> {
    controller.draft().total_amount().ok_or_else(|| {
        OnSplitError::Validation("Set the expense amount first: onsplit expense set --amount".into())
    })
}

/// Handle an expense subcommand
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    command: ExpenseCommands,
) -> OnSplitResult<()> {
    match command {
        ExpenseCommands::Start { reset } => {
            let mut controller = build_controller(storage);
            if reset {
                controller.cancel_draft()?;
                println!("Discarded the previous draft.");
            }
            let step = controller.current_step();
            println!("{}", format_step_header(step));
            println!("Fill in this step, then run 'onsplit expense next'.");
        }
        ExpenseCommands::Status => {
            let controller = build_controller(storage);
            let members = roster_members(storage)?;
            print!(
                "{}",
                format_draft_summary(controller.draft(), controller.current_step(), &members)
            );
            if let Err(errors) = controller.validate_current() {
                println!("\nThis step is not complete yet:");
                print!("{}", format_field_errors(&errors));
            }
        }
        ExpenseCommands::Set {
            title,
            description,
            amount,
            category,
            date,
            currency,
        } => {
            let patch = DetailsPatch {
                title,
                description,
                amount: amount.as_deref().map(parse_money).transpose()?,
                category: category
                    .as_deref()
                    .map(|s| {
                        s.parse::<ExpenseCategory>()
                            .map_err(OnSplitError::Validation)
                    })
                    .transpose()?,
                date: date
                    .as_deref()
                    .map(|s| {
                        NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
                            OnSplitError::Validation(format!("Invalid date: {} (use YYYY-MM-DD)", s))
                        })
                    })
                    .transpose()?,
                currency: currency
                    .as_deref()
                    .map(|s| s.parse::<Currency>().map_err(OnSplitError::Validation))
                    .transpose()?,
            };

            if patch.is_empty() {
                println!("Nothing to set. See 'onsplit expense set --help'.");
                return Ok(());
            }

            let mut controller = build_controller(storage);
            controller.apply(DraftUpdate::Details(patch))?;
            println!("Details updated.");
        }
        ExpenseCommands::Receipt(receipt_command) => {
            let mut controller = build_controller(storage);
            match receipt_command {
                ReceiptCommands::Add { path } => {
                    let bytes = std::fs::read(&path).map_err(|e| {
                        OnSplitError::Validation(format!("Cannot read {}: {}", path, e))
                    })?;
                    let name = std::path::Path::new(&path)
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.clone());

                    let receipt = Receipt::with_payload(name, bytes).preview(path);
                    let id = receipt.id;
                    controller.apply(DraftUpdate::AttachReceipt(receipt))?;
                    println!("Attached receipt {}", id);
                }
                ReceiptCommands::Remove { id } => {
                    let receipt_id: ReceiptId = id
                        .parse()
                        .map_err(|_| OnSplitError::Validation(format!("Invalid receipt id: {}", id)))?;
                    controller.apply(DraftUpdate::RemoveReceipt(receipt_id))?;
                    println!("Removed receipt {}", id);
                }
            }
        }
        ExpenseCommands::Split(split_command) => {
            let service = RosterService::new(storage);
            let mut controller = build_controller(storage);
            let total = require_total(&controller)?;

            let split = match split_command {
                SplitCommands::Equal { members } => {
                    let ids = match members {
                        Some(csv) => service.resolve_many(&csv)?,
                        None => roster_members(storage)?.iter().map(|m| m.id).collect(),
                    };
                    if ids.is_empty() {
                        return Err(OnSplitError::Validation(
                            "The roster is empty; add members first".into(),
                        ));
                    }
                    SplitData::equal(total, &ids)
                }
                SplitCommands::Percentage { entries } => {
                    let pairs = parse_pairs(&service, &entries, parse_number)?;
                    SplitData::percentage(total, &pairs)
                }
                SplitCommands::Fixed { entries } => {
                    let pairs = parse_pairs(&service, &entries, parse_money)?;
                    SplitData::fixed(total, &pairs)
                }
                SplitCommands::Weighted { entries } => {
                    let pairs = parse_pairs(&service, &entries, parse_number)?;
                    SplitData::weighted(total, &pairs)
                }
            };

            controller.apply(DraftUpdate::SetSplit(split))?;
            let members = roster_members(storage)?;
            print!(
                "{}",
                crate::display::format_split_table(controller.draft(), &members)
            );
        }
        ExpenseCommands::Item(item_command) => {
            let service = RosterService::new(storage);
            let mut controller = build_controller(storage);

            match item_command {
                ItemCommands::Add {
                    name,
                    amount,
                    assign,
                } => {
                    let mut item = LineItem::new(name, parse_money(&amount)?);
                    if let Some(csv) = assign {
                        item.assign(service.resolve_many(&csv)?);
                    }
                    let id = item.id;
                    controller.apply(DraftUpdate::UpsertItem(item))?;
                    println!("Added item {}", id);
                }
                ItemCommands::Remove { id } => {
                    let item_id: LineItemId = id
                        .parse()
                        .map_err(|_| OnSplitError::Validation(format!("Invalid item id: {}", id)))?;
                    controller.apply(DraftUpdate::RemoveItem(item_id))?;
                    println!("Removed item {}", id);
                }
                ItemCommands::Assign { id, members } => {
                    let item_id: LineItemId = id
                        .parse()
                        .map_err(|_| OnSplitError::Validation(format!("Invalid item id: {}", id)))?;
                    let member_ids = service.resolve_many(&members)?;
                    controller.apply(DraftUpdate::AssignItem {
                        item: item_id,
                        members: member_ids,
                    })?;
                    println!("Assigned item {}", id);
                }
            }
        }
        ExpenseCommands::Payment { method } => match method {
            Some(id) => {
                let method = PaymentMethod::find(&id)
                    .ok_or_else(|| OnSplitError::payment_method_not_found(&id))?;
                let mut controller = build_controller(storage);
                controller.apply(DraftUpdate::SetPaymentMethod(method.id.to_string()))?;
                println!("Payment method set to {}", method.label);
            }
            None => {
                println!("Available payment methods:");
                for method in PaymentMethod::catalog() {
                    println!("  {:14} {}", method.id, method);
                }
            }
        },
        ExpenseCommands::Next => {
            let mut controller = build_controller(storage);
            match controller.go_next()? {
                NextOutcome::Advanced(step) => {
                    println!("{}", format_step_header(step));
                }
                NextOutcome::ReadyToSubmit => {
                    println!("All steps complete. Run 'onsplit expense submit' to settle.");
                }
                NextOutcome::Invalid(errors) => {
                    println!("Fix this step before continuing:");
                    print!("{}", format_field_errors(&errors));
                }
            }
        }
        ExpenseCommands::Back => {
            let mut controller = build_controller(storage);
            let step = controller.go_back()?;
            println!("{}", format_step_header(step));
        }
        ExpenseCommands::Goto { step } => {
            let mut controller = build_controller(storage);
            let step = controller.go_to_step(step)?;
            println!("{}", format_step_header(step));
        }
        ExpenseCommands::Submit => {
            let mut controller = build_controller(storage);
            let gateway = LocalSettlementGateway::from_settings(&storage.expenses, settings);
            let policy = RetryPolicy::from_settings(settings);
            let cancel = CancelToken::new();

            println!("Submitting…");
            let receipt = controller.submit(&gateway, &policy, &cancel)?;
            println!("Success: {}", receipt.message);
            println!("Recorded as {}", receipt.expense_id);
        }
        ExpenseCommands::Cancel => {
            let mut controller = build_controller(storage);
            controller.cancel_draft()?;
            println!("Draft discarded.");
        }
        ExpenseCommands::List => {
            let service = ExpenseService::new(storage);
            print!("{}", format_expense_list(&service.list()?));
        }
        ExpenseCommands::Show { id } => {
            let service = ExpenseService::new(storage);
            print!("{}", format_expense_details(&service.get(&id)?));
        }
    }

    Ok(())
}
