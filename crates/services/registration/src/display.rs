//! Presentation of user listings.

use std::io::{self, Write};

use common::AppResult;
use domain::{User, UserResponse};

/// Write one `Username: ..., Email: ...` line per user.
pub fn write_users<W: Write>(out: &mut W, users: &[User]) -> io::Result<()> {
    for user in users {
        writeln!(out, "{}", user)?;
    }
    Ok(())
}

/// Write the users as a JSON array of `{ "username", "email" }` objects.
pub fn write_users_json<W: Write>(out: &mut W, users: &[User]) -> AppResult<()> {
    let body: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    serde_json::to_writer_pretty(&mut *out, &body)?;
    writeln!(out)?;
    Ok(())
}
