use std::fs::File;
use std::io::BufReader;

use anyhow::Context;

use shipplan_cli::{Config, run};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    shipplan_observability::init(config.log_format);

    for warning in &config.warnings {
        tracing::warn!("{warning}; using default");
    }

    let stdout = std::io::stdout().lock();

    match std::env::args_os().nth(1) {
        Some(path) if path != "-" => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open {}", path.to_string_lossy()))?;
            run(&config, BufReader::new(file), stdout)?;
        }
        _ => {
            run(&config, std::io::stdin().lock(), stdout)?;
        }
    }

    Ok(())
}
