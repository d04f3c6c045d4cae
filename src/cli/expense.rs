//! Expense CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::auth::IdentityResolver;
use crate::config::Settings;
use crate::crypto::FieldCipher;
use crate::display::{format_expense_detail, format_expense_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryId, ExpenseId, Money, UserId};
use crate::services::{ExpenseInput, ExpenseService};
use crate::store::DataStore;

/// Expense management commands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent, e.g. "12.50"
        amount: String,
        /// Category name or id
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Payment method (stored encrypted)
        #[arg(short, long)]
        payment: Option<String>,
        /// Location
        #[arg(short, long)]
        location: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List your expenses, newest first
    List,
    /// Show one expense in full
    Show {
        /// Expense id
        id: String,
    },
    /// Edit an expense (unspecified fields keep their current value)
    Edit {
        /// Expense id
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        payment: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense id
        id: String,
    },
}

/// Handle expense commands
pub fn handle_expense_command<S: DataStore>(
    store: &mut S,
    cipher: &FieldCipher,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let user = settings.current_user()?;

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
            payment,
            location,
            notes,
        } => {
            let category_id = resolve_category(store, &category)?;
            let input = ExpenseInput {
                category_id,
                amount: parse_amount(&amount)?,
                description,
                expense_date: parse_date_or_today(date.as_deref())?,
                payment_method: payment,
                location,
                notes,
            };

            let mut service = ExpenseService::new(store, cipher);
            let view = service.create(&user, input)?;
            println!("Recorded expense {} ({} on {})", view.id, view.amount, view.expense_date);
            Ok(())
        }
        ExpenseCommands::List => {
            let service = ExpenseService::new(store, cipher);
            let views = service.list(&user)?;
            print!("{}", format_expense_list(&views));
            Ok(())
        }
        ExpenseCommands::Show { id } => {
            let id = resolve_expense_id(store, user.id, &id)?;
            let service = ExpenseService::new(store, cipher);
            let view = service.get(&user, id)?;
            print!("{}", format_expense_detail(&view));
            Ok(())
        }
        ExpenseCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
            payment,
            location,
            notes,
        } => {
            let id = resolve_expense_id(store, user.id, &id)?;

            let current = {
                let service = ExpenseService::new(store, cipher);
                service.get(&user, id)?
            };

            // Updates are a full replace at the service layer; fill the
            // gaps from the current record first.
            if payment.is_none() && current.payment_method_degraded {
                return Err(TrackerError::Validation(
                    "Stored payment method cannot be decrypted; re-supply it with --payment"
                        .into(),
                ));
            }

            let category_id = match category {
                Some(c) => resolve_category(store, &c)?,
                None => current.category_id,
            };
            let input = ExpenseInput {
                category_id,
                amount: match amount {
                    Some(a) => parse_amount(&a)?,
                    None => current.amount,
                },
                description: description.or(current.description),
                expense_date: match date {
                    Some(d) => parse_date(&d)?,
                    None => current.expense_date,
                },
                payment_method: payment.or(current.payment_method),
                location: location.or(current.location),
                notes: notes.or(current.notes),
            };

            let mut service = ExpenseService::new(store, cipher);
            let view = service.update(&user, id, input)?;
            println!("Updated expense {}", view.id);
            Ok(())
        }
        ExpenseCommands::Delete { id } => {
            let id = resolve_expense_id(store, user.id, &id)?;
            let mut service = ExpenseService::new(store, cipher);
            service.delete(&user, id)?;
            println!("Deleted expense {}", id);
            Ok(())
        }
    }
}

fn parse_amount(s: &str) -> TrackerResult<Money> {
    let amount =
        Money::parse(s).map_err(|e| TrackerError::Validation(e.to_string()))?;
    if !amount.is_positive() {
        return Err(TrackerError::Validation(format!(
            "Amount must be positive, got {}",
            amount
        )));
    }
    Ok(amount)
}

fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TrackerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

fn parse_date_or_today(s: Option<&str>) -> TrackerResult<NaiveDate> {
    match s {
        Some(s) => parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

/// Resolve an expense id argument against the user's own expenses
///
/// Accepts a full UUID (with or without the `exp-` prefix) or the short
/// `exp-xxxxxxxx` form shown in listings, matched as a unique prefix.
fn resolve_expense_id<S: DataStore>(
    store: &S,
    owner: UserId,
    arg: &str,
) -> TrackerResult<ExpenseId> {
    if let Ok(id) = arg.parse::<ExpenseId>() {
        return Ok(id);
    }

    let fragment = arg.strip_prefix("exp-").unwrap_or(arg).to_ascii_lowercase();
    if fragment.is_empty() || !fragment.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        return Err(TrackerError::Validation(format!(
            "Invalid expense id '{}'",
            arg
        )));
    }

    let expenses = store.find_expenses(owner, None)?;
    let mut candidates = expenses
        .iter()
        .filter(|e| e.id.as_uuid().to_string().starts_with(&fragment));

    match (candidates.next(), candidates.next()) {
        (Some(found), None) => Ok(found.id),
        (Some(_), Some(_)) => Err(TrackerError::Validation(format!(
            "Expense id '{}' matches more than one expense; use more characters",
            arg
        ))),
        (None, _) => Err(TrackerError::expense_not_found(arg)),
    }
}

/// Resolve a category argument as a name (case-insensitive) or an id
fn resolve_category<S: DataStore>(store: &S, arg: &str) -> TrackerResult<CategoryId> {
    let categories = store.list_categories()?;
    if let Some(category) = categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(arg))
    {
        return Ok(category.id);
    }

    if let Ok(id) = arg.parse::<CategoryId>() {
        if categories.iter().any(|c| c.id == id) {
            return Ok(id);
        }
    }

    Err(TrackerError::category_not_found(arg))
}
