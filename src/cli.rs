use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const AFTER_HELP: &str = "\
`load` prints export statements, so the output must be evaluated by the
current shell to take effect:

    eval \"$(envprofile load dev)\"";

#[derive(Debug, Parser)]
#[command(
    name = "envprofile",
    version,
    about = "Manage named profiles of environment variables",
    after_help = AFTER_HELP
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Use PATH as the profile store instead of the default location"
    )]
    pub file: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Create a new empty profile")]
    Create(CreateArgs),
    #[command(about = "Delete a profile")]
    Delete(DeleteArgs),
    #[command(about = "Add or update a variable in a profile")]
    Add(AddArgs),
    #[command(about = "Remove a variable from a profile")]
    Remove(RemoveArgs),
    #[command(about = "List all profiles")]
    List,
    #[command(about = "Show the variables of a profile")]
    Show(ShowArgs),
    #[command(about = "Print shell export statements for a profile")]
    Load(LoadArgs),
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(help = "Name of the profile")]
    pub profile: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(help = "Name of the profile")]
    pub profile: String,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(help = "Name of the profile")]
    pub profile: String,
    #[arg(help = "Environment variable name")]
    pub key: String,
    #[arg(help = "Environment variable value")]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[arg(help = "Name of the profile")]
    pub profile: String,
    #[arg(help = "Environment variable name")]
    pub key: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(help = "Name of the profile")]
    pub profile: String,
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    #[arg(help = "Name of the profile")]
    pub profile: String,
}
