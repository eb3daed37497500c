use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        file,
        json,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(file, json)?;

    match command {
        Command::Create(args) => commands::create::run(&ctx, args),
        Command::Delete(args) => commands::delete::run(&ctx, args),
        Command::Add(args) => commands::add::run(&ctx, args),
        Command::Remove(args) => commands::remove::run(&ctx, args),
        Command::List => commands::list::run(&ctx),
        Command::Show(args) => commands::show::run(&ctx, args),
        Command::Load(args) => commands::load::run(&ctx, args),
    }
}
