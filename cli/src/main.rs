mod args;

use std::process;

fn main() {
    if let Err(e) = args::run() {
        eprintln!("{e}");
        process::exit(1);
    }
}
