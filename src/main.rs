mod command;
mod session;
mod view;

#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use command::{CommandExecutor, RunOutcome, Timing, TokioPacer};
use session::{run_once, spawn_stdin_reader, Session, SessionConfig, HELP};
use std::process::ExitCode;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use view::TerminalView;

/// Robot Board - program a robot on a 6x6 grid and watch it run
#[derive(Parser, Debug)]
#[command(name = "robot-board")]
#[command(about = "Program a robot on a 6x6 grid and watch it run")]
struct Args {
    /// Main board program (F, L, R, P); runs once and exits instead of prompting
    #[arg(long)]
    main: Option<String>,

    /// Function board program (F, L, R), used with --main
    #[arg(long, default_value = "")]
    function: String,

    /// Run without animation delays
    #[arg(long)]
    fast: bool,

    /// Pause after every step, in milliseconds
    #[arg(long)]
    step_delay_ms: Option<u64>,

    /// Do not draw the board
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        let timing = if self.fast {
            Timing::instant()
        } else if let Some(ms) = self.step_delay_ms {
            Timing::with_step_delay(Duration::from_millis(ms))
        } else {
            Timing::default()
        };

        SessionConfig {
            timing,
            draw_board: !self.quiet,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the board
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let config = args.session_config();
    info!(
        "Robot board starting: step delay {:?}, drawing {}",
        config.timing.step_delay,
        if config.draw_board { "on" } else { "off" }
    );

    let view = TerminalView::new(std::io::stdout(), config.draw_board);
    let mut executor = CommandExecutor::new(view, TokioPacer, config.timing);

    if let Some(main_program) = &args.main {
        let outcome = run_once(&mut executor, main_program, &args.function).await?;
        return Ok(match outcome {
            RunOutcome::Completed { .. } => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        });
    }

    println!("{}", HELP);

    let (tx, rx) = mpsc::channel(32);
    let input = spawn_stdin_reader(tx);

    let mut session = Session::new(executor);
    session.run(rx).await;

    match input.await {
        Ok(Err(e)) => warn!("Input error: {:#}", e),
        Err(e) => warn!("Input task failed: {}", e),
        Ok(Ok(())) => {}
    }

    Ok(ExitCode::SUCCESS)
}
