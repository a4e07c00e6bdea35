use std::io;
use std::process;

use env_logger::{Builder, Env};

use boltview::cli::{self, Stdio};

fn init_logger() {
    // Level comes from RUST_LOG, default info.
    // Example: RUST_LOG=debug boltview buckets ./t.db
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut streams = Stdio {
        stdin: &mut stdin,
        stdout: &mut stdout,
        stderr: &mut stderr,
    };

    if let Err(err) = cli::run(&mut streams, &args) {
        // Error messages go to stdout; usage text already went to stderr.
        if !matches!(err, boltview::Error::Usage) {
            println!("{}", err);
        }
        process::exit(err.exit_code());
    }
}
