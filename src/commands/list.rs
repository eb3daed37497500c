use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;

#[derive(Serialize)]
struct ProfileSummary<'a> {
    name: &'a str,
    variables: usize,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let document = ctx.store.load()?;
    let names = document.profile_names();

    if ctx.output.mode() == OutputMode::Text {
        if names.is_empty() {
            println!("No profiles available");
            return Ok(());
        }

        println!("Available profiles:");
        for name in &names {
            let count = document.profile(name)?.len();
            let suffix = if count == 1 { "" } else { "s" };
            println!("  - {name} ({count} variable{suffix})");
        }

        return Ok(());
    }

    let summaries = names
        .iter()
        .map(|name| {
            Ok(ProfileSummary {
                name,
                variables: document.profile(name)?.len(),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let text = format!("{} profiles", summaries.len());
    ctx.output.emit(&text, &summaries)
}
