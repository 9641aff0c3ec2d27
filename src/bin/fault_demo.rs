use std::io;

use fault_demo::{logger, prompt, run_all, DemoError, FaultConfig, LogDiagnostics};

fn main() -> Result<(), DemoError> {
    let config = FaultConfig::default();
    logger::init(&config.log)?;

    let mut rng = rand::thread_rng();
    run_all(&config, &mut rng, &mut LogDiagnostics);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt::prompt_loop(stdin.lock(), &mut stdout)?;

    Ok(())
}
