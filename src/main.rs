//! Credential store - command loop
//!
//! Reads one command per line from stdin and prints one reply per line to
//! stdout until `EXIT` or end of input. Each reply is flushed before the next
//! line is read. Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, BufRead, Write};

use credtable::dispatch::{Command, Reply};
use credtable::session::Session;
use log::{info, warn};

fn main() -> io::Result<()> {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut session = Session::new();

    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match line.parse::<Command>() {
            Ok(command) => match session.execute(command) {
                Some(reply) => reply,
                None => break,
            },
            Err(err) => {
                warn!("line {}: {}", lineno + 1, err);
                Reply::from(err)
            }
        };

        writeln!(out, "{}", reply)?;
        out.flush()?;
    }

    info!(
        "session closed with {} user(s) in {} rows",
        session.count(),
        session.capacity()
    );

    Ok(())
}
