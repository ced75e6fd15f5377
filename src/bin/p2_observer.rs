// Pattern 2: Observer - restock alerts fanned out to email and mobile subscribers.
//
// Run with: cargo run --bin p2_observer [-- path/to/restock.toml]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use design_patterns::config::RestockConfig;
use design_patterns::delivery::ConsoleSender;
use design_patterns::logging;

fn load_config() -> anyhow::Result<RestockConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            RestockConfig::load(&path)
                .with_context(|| format!("loading restock scenario from {}", path.display()))
        }
        None => Ok(RestockConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = load_config()?;

    println!("{}", "Pattern 2: Observer".bold());
    println!("===================\n");

    let mut subject = config.build_subject(Arc::new(ConsoleSender));
    println!(
        "{} {} subscribers watching {}\n",
        "===".cyan(),
        subject.observer_count(),
        subject.product()
    );

    for count in &config.script {
        let previous = subject.stock_count();
        println!("{}", format!("--- set stock {} -> {} ---", previous, count).cyan());

        if let Some(report) = subject.set_stock_count(*count) {
            for (identity, err) in &report.failures {
                println!("{} {}: {}", "failed".red(), identity, err);
            }
        }
    }

    println!("Final stock for {}: {}", subject.product(), subject.stock_count());
    Ok(())
}
