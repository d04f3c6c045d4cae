//! Category CLI commands

use clap::Subcommand;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Category;
use crate::store::DataStore;

/// Category management commands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// Display icon
        #[arg(short, long, default_value = "")]
        icon: String,
    },
    /// List all categories
    List,
}

/// Handle category commands
pub fn handle_category_command<S: DataStore>(
    store: &mut S,
    cmd: CategoryCommands,
) -> TrackerResult<()> {
    match cmd {
        CategoryCommands::Add { name, icon } => {
            let existing = store.list_categories()?;
            if existing.iter().any(|c| c.name.eq_ignore_ascii_case(&name)) {
                return Err(TrackerError::Validation(format!(
                    "Category '{}' already exists",
                    name
                )));
            }

            let category = Category::new(name, icon);
            category
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;
            let saved = store.save_category(category)?;
            println!("Added category {} ({})", saved.name, saved.id);
            Ok(())
        }
        CategoryCommands::List => {
            let mut categories = store.list_categories()?;
            categories.sort_by(|a, b| a.name.cmp(&b.name));

            if categories.is_empty() {
                println!("No categories. Run 'spendtrack init' to seed defaults.");
                return Ok(());
            }

            for category in categories {
                println!("{:12} {}", category.id.to_string(), category);
            }
            Ok(())
        }
    }
}
