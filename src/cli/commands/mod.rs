pub mod auth;
pub mod server;
pub mod thesis;

use std::io::{self, BufRead, Write};

/// Read a password from stdin when none was passed on the command line.
pub(crate) fn resolve_password(password: Option<String>) -> anyhow::Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
