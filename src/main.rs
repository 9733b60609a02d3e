mod app;
mod config;
mod engine;
mod error;
mod models;

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use crate::app::session::{Session, Step};

fn main() -> Result<(), error::AppError> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let mut session = Session::new(&config);
    println!("{}", session.greeting());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.handle_line(&line) {
            Step::Reply(text) => {
                if !text.is_empty() {
                    writeln!(stdout, "{text}")?;
                }
            }
            Step::Quit => break,
        }
    }

    Ok(())
}
