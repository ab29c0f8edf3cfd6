//! User Registration Library
//!
//! A small user store on top of a local SQLite file: register users,
//! check credentials and list what is stored.
//! It can be driven through the `registration` binary or embedded directly.

pub mod config;
pub mod display;
pub mod infra;
pub mod repository;
pub mod service;

use std::io::Write;
use std::sync::Arc;

use common::AppResult;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Output format for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

/// A single user store action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Init,
    Add {
        username: String,
        email: String,
        password: String,
    },
    Authenticate {
        username: String,
        password: String,
    },
    List {
        format: ListFormat,
    },
}

/// Run one action against the configured store, writing results to `out`.
///
/// The schema is ensured before every action. Returns `false` when the action
/// was rejected (username taken, credentials wrong); storage failures are
/// returned as errors.
pub async fn run_command<W: Write>(
    config: &UserServiceConfig,
    action: UserAction,
    out: &mut W,
) -> AppResult<bool> {
    config.database.validate()?;

    let db = Database::connect(&config.database).await?;
    let users = UserManager::new(Arc::new(UserStore::new(db.get_connection())));
    users.initialize().await?;

    let accepted = match action {
        UserAction::Init => {
            writeln!(
                out,
                "User store ready at {}",
                config.database.path.display()
            )?;
            true
        }
        UserAction::Add {
            username,
            email,
            password,
        } => {
            let added = users.add_user(&username, &email, &password).await?;
            if added {
                writeln!(out, "User '{}' registered", username)?;
            } else {
                writeln!(out, "Username '{}' is already taken", username)?;
            }
            added
        }
        UserAction::Authenticate { username, password } => {
            let authenticated = users.authenticate(&username, &password).await?;
            if authenticated {
                writeln!(out, "Authenticated '{}'", username)?;
            } else {
                writeln!(out, "Invalid username or password")?;
            }
            authenticated
        }
        UserAction::List { format } => {
            let listed = users.list_users().await?;
            match format {
                ListFormat::Text => display::write_users(out, &listed)?,
                ListFormat::Json => display::write_users_json(out, &listed)?,
            }
            true
        }
    };

    db.close().await?;
    Ok(accepted)
}
