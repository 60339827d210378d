//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = walkability_cli::run() {
        eprintln!("walkability: {err}");
        std::process::exit(1);
    }
}
