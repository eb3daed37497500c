use serde::Serialize;

use crate::cli::CreateArgs;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Serialize)]
struct CreateReport<'a> {
    created: &'a str,
}

pub fn run(ctx: &AppContext, args: CreateArgs) -> AppResult<()> {
    let mut document = ctx.store.load()?;
    document.create_profile(&args.profile)?;
    ctx.store.save(&document)?;

    let text = format!("Created profile '{}'", args.profile);
    ctx.output.emit(
        &text,
        &CreateReport {
            created: &args.profile,
        },
    )
}
