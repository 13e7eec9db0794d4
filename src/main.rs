use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use bmi_ml::BmiCalculator;
use bmi_ml::config::AppConfig;
use bmi_ml::session::{Reply, Session};
use log::{error, info};

fn main() -> ExitCode {
    let path = std::env::args().nth(1);
    let config = match AppConfig::load(path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();
    info!("starting session with {config:?}");

    let mut session = Session::new(BmiCalculator::new(), config);
    match run(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("i/o failure: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "BMI calculator with a learned model. Type 'help' for commands.")?;
    loop {
        write!(stdout, "{}", session.config().prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.handle(&line) {
            Ok(Reply::Text(text)) if text.is_empty() => {}
            Ok(Reply::Text(text)) => writeln!(stdout, "{text}")?,
            Ok(Reply::Quit) => break,
            Err(e) => writeln!(stdout, "error: {e}")?,
        }
    }

    info!(
        "session closed with {} samples",
        session.calculator().samples().len()
    );
    Ok(())
}
