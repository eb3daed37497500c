use serde::Serialize;

use crate::cli::DeleteArgs;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Serialize)]
struct DeleteReport<'a> {
    deleted: &'a str,
}

pub fn run(ctx: &AppContext, args: DeleteArgs) -> AppResult<()> {
    let mut document = ctx.store.load()?;
    document.delete_profile(&args.profile)?;
    ctx.store.save(&document)?;

    let text = format!("Deleted profile '{}'", args.profile);
    ctx.output.emit(
        &text,
        &DeleteReport {
            deleted: &args.profile,
        },
    )
}
