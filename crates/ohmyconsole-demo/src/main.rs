//! OhMyConsole Demo - Main Entry Point
//!
//! Prints one line per level, then exercises debug gating.
//!
//! Usage:
//!     DEBUG=main ohmyconsole-demo
//!     DEBUG=main:sub ohmyconsole-demo
//!     ohmyconsole-demo --debug main --kind none

use clap::Parser;
use ohmyconsole::{args, json, EnvKind, FixedProbe, LoggerFactory, ShellProbe};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ohmyconsole-demo")]
#[command(about = "Walk through the OhMyConsole levels and DEBUG gating")]
#[command(version)]
struct Args {
    /// Debug filter (overrides the DEBUG environment variable)
    #[arg(short, long)]
    debug: Option<String>,

    /// Console kind: shell, browser or none
    #[arg(short, long, default_value = "shell")]
    kind: EnvKind,

    /// Filter for the logger's own diagnostics (RUST_LOG syntax)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn factory(args: &Args) -> LoggerFactory {
    match (&args.debug, args.kind) {
        (None, EnvKind::Shell) => LoggerFactory::new(ShellProbe::new()),
        (filter, kind) => {
            let filter = filter
                .clone()
                .or_else(|| std::env::var(ohmyconsole::env::DEBUG_VAR).ok());
            let probe = match filter {
                Some(filter) => FixedProbe::new(kind).with_debug_filter(filter),
                None => FixedProbe::new(kind),
            };
            LoggerFactory::new(probe)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    ohmyconsole::tracing::init_with_filter(&args.log_level);
    info!("Starting OhMyConsole demo v{}", env!("CARGO_PKG_VERSION"));

    let factory = factory(&args);

    println!("Functional Test:");

    let logger = factory.create("functional-test")?;
    logger.log(&args!["some information"]);
    logger.info(&args!["some information"]);
    logger.warn(&args!["some information"]);
    logger.error(&args!["there was an error"]);
    logger.info(&args!["formatted: %s=%d %j", "answer", "42", json!({"ok": true})]);

    println!("\nDEBUG test:");

    let main_logger = factory.create("main")?;
    let sub_logger = factory.create("main:sub")?;
    main_logger.debug(&args!["matches main"]);
    sub_logger.debug(&args!["matches main, main:sub"]);

    Ok(())
}
