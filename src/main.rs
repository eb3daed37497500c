use clap::Parser;

fn main() {
    let cli = envprofile::cli::Cli::parse();

    if let Err(err) = envprofile::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
