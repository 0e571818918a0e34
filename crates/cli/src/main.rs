use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use salvage_cli::{App, Cli, Config};
use salvage_core::DomainError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    salvage_observability::init(config.log_format);

    let mut app = App::new(config);

    let stderr = io::stderr();
    let mut err = stderr.lock();
    if let Err(e) = app.load(&mut err) {
        let _ = writeln!(err, "{e:#}");
        return ExitCode::from(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match app.run(&cli.command, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "error: {e:#}");
            if e.downcast_ref::<DomainError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
