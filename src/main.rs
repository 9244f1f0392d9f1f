use clap::Parser;
use console::style;

use designkit::cli::{run, Args};

fn main() {
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        std::process::exit(1);
    }
}
