mod bookmarks_cmd;
mod cli;
mod sections_cmd;
mod shared;
mod split_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Split {
            ref file,
            ref out_dir,
            ref zip,
            ref format,
            ref password,
            strict,
        } => split_cmd::run(
            file,
            out_dir,
            zip.as_deref(),
            format,
            password.as_deref(),
            strict,
        ),
        cli::Commands::Sections {
            ref file,
            ref format,
            ref password,
        } => sections_cmd::run(file, format, password.as_deref()),
        cli::Commands::Bookmarks {
            ref file,
            ref format,
            ref password,
        } => bookmarks_cmd::run(file, format, password.as_deref()),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
