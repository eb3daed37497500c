use serde::Serialize;

use crate::cli::RemoveArgs;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Serialize)]
struct RemoveReport<'a> {
    profile: &'a str,
    removed: &'a str,
}

pub fn run(ctx: &AppContext, args: RemoveArgs) -> AppResult<()> {
    let mut document = ctx.store.load()?;
    document.unset_variable(&args.profile, &args.key)?;
    ctx.store.save(&document)?;

    let text = format!("Removed '{}' from profile '{}'", args.key, args.profile);
    ctx.output.emit(
        &text,
        &RemoveReport {
            profile: &args.profile,
            removed: &args.key,
        },
    )
}
