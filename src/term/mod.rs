extern crate ansi_term;
extern crate linefeed;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult};
use std::sync::Once;

/// Interactive line-numbered BASIC.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print errors without terminal styling
    #[arg(long)]
    plain: bool,

    /// Statements executed between checks of the terminal
    #[arg(long, default_value_t = 5000)]
    cycles: usize,
}

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

pub fn main() {
    let args = Args::parse();
    init_tracing();
    if let Err(error) = main_loop(&args) {
        eprintln!("{}", error);
    }
}

fn main_loop(args: &Args) -> std::io::Result<()> {
    let mut runtime = Runtime::new();
    let command = Interface::new("BASIC")?;
    let input = Interface::new("INPUT")?;
    tracing::debug!(cycles = args.cycles, plain = args.plain, "terminal started");

    loop {
        match runtime.execute(args.cycles) {
            Event::Stopped => {
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        runtime.enter(&string);
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Error(error) => {
                let s = error.to_string();
                if args.plain {
                    command.write_fmt(format_args!("{}\n", s))?;
                } else {
                    command.write_fmt(format_args!("{}\n", Style::new().bold().paint(s)))?;
                }
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::List(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Quit => break,
        }
    }
    Ok(())
}
