use crate::cli::ShowArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;

pub fn run(ctx: &AppContext, args: ShowArgs) -> AppResult<()> {
    let document = ctx.store.load()?;
    let profile = document.profile(&args.profile)?;

    if ctx.output.mode() == OutputMode::Text {
        if profile.is_empty() {
            println!("Profile '{}' is empty", args.profile);
            return Ok(());
        }

        println!("Profile: {}", args.profile);
        println!("Environment variables:");
        for (key, value) in profile {
            println!("  {key}={value}");
        }

        return Ok(());
    }

    let text = format!("{} variables", profile.len());
    ctx.output.emit(&text, profile)
}
