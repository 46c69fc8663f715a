//! Terminal front end for the quantum vault simulator.
//!
//! # Responsibility
//! - Render the banner and menu, read stdin lines, print session output.
//! - Map the session's terminal state to the process exit code.

mod config;

use config::CliConfig;
use quantum_vault_core::{
    core_version, init_logging, MenuChoice, RandomSource, Session, SessionState,
    StdRandomSource,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const MENU_RULE: &str = "========================================";

fn main() -> ExitCode {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("logging disabled: {err}");
    }

    let random = match config.seed {
        Some(seed) => StdRandomSource::seeded(seed),
        None => StdRandomSource::from_entropy(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run(Session::new(random), &mut stdin.lock(), &mut stdout) {
        Ok(SessionState::TerminatedCollapse) => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("terminal I/O failed: {err}");
            ExitCode::from(2)
        }
    }
}

/// Drives the session until it terminates or input ends.
fn run<G, I, O>(mut session: Session<G>, input: &mut I, output: &mut O) -> io::Result<SessionState>
where
    G: RandomSource,
    I: BufRead,
    O: Write,
{
    print_banner(output)?;

    while !session.is_terminated() {
        print_menu(output)?;
        let Some(choice) = read_line(input)? else {
            log::info!("event=input_closed module=cli status=ok");
            break;
        };

        let mut prompt_error = None;
        let outcome = session.handle_menu_input(&choice, |prompt| {
            if let Err(err) = write!(output, "\n{prompt}").and_then(|()| output.flush()) {
                prompt_error = Some(err);
                return None;
            }
            match read_line(input) {
                Ok(line) => line,
                Err(err) => {
                    prompt_error = Some(err);
                    None
                }
            }
        });
        if let Some(err) = prompt_error {
            return Err(err);
        }

        let Ok(outcome) = outcome else {
            break;
        };
        writeln!(output)?;
        for line in &outcome.lines {
            writeln!(output, "{line}")?;
        }
    }

    Ok(session.state())
}

fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_banner<O: Write>(output: &mut O) -> io::Result<()> {
    writeln!(output, "{MENU_RULE}")?;
    writeln!(output, "  OMEGA SECTOR - QUANTUM DATA VAULT v{}", core_version())?;
    writeln!(output, "  Welcome, Shift Supervisor!")?;
    writeln!(output, "{MENU_RULE}")
}

fn print_menu<O: Write>(output: &mut O) -> io::Result<()> {
    writeln!(output, "\n{MENU_RULE}")?;
    writeln!(output, "    QUANTUM VAULT CONTROL PANEL")?;
    writeln!(output, "{MENU_RULE}")?;
    for (index, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, choice.label())?;
    }
    writeln!(output, "{MENU_RULE}")?;
    write!(output, "Your choice: ")?;
    output.flush()
}
