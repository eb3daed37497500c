use std::io::{self, Write};

use crate::cli::LoadArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::shell;

/// Prints export statements to stdout for the invoking shell to `eval`.
/// Stdout carries nothing else; diagnostics go to stderr as `#` comments.
pub fn run(ctx: &AppContext, args: LoadArgs) -> AppResult<()> {
    let document = ctx.store.load()?;
    let profile = document.profile(&args.profile)?;

    if profile.is_empty() {
        eprintln!("# Profile '{}' is empty", args.profile);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in shell::render(profile) {
        writeln!(out, "{line}")?;
    }

    Ok(())
}
