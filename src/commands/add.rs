use serde::Serialize;

use crate::cli::AddArgs;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Serialize)]
struct AddReport<'a> {
    profile: &'a str,
    key: &'a str,
    value: &'a str,
}

pub fn run(ctx: &AppContext, args: AddArgs) -> AppResult<()> {
    let mut document = ctx.store.load()?;
    document.set_variable(&args.profile, &args.key, &args.value)?;
    ctx.store.save(&document)?;

    let text = format!(
        "Added/updated '{}={}' to profile '{}'",
        args.key, args.value, args.profile
    );
    ctx.output.emit(
        &text,
        &AddReport {
            profile: &args.profile,
            key: &args.key,
            value: &args.value,
        },
    )
}
