// Singleton demo: many threads race for the one DatabaseHandler.

use std::thread;
use std::time::Duration;

use colored::Colorize;
use crossbeam::channel::unbounded;
use itertools::Itertools;
use log::warn;
use rand::Rng;

use design_patterns::config::DemoConfig;
use design_patterns::singleton::{Acquisition, DatabaseHandler};
use design_patterns::{logging, PatternError};

fn main() -> Result<(), PatternError> {
    logging::init();
    let config = DemoConfig::embedded()?;
    let callers = config.singleton.callers;

    println!("{}", "Singleton: Database Handler".bold());
    println!("===========================\n");

    println!("[main] trying to get a DB instance from {} threads...", callers);

    let (tx, rx) = unbounded();
    thread::scope(|s| {
        for _ in 0..callers {
            let tx = tx.clone();
            s.spawn(move || {
                // Jitter so the callers hit different branches of the guard.
                let pause = rand::thread_rng().gen_range(0..200);
                thread::sleep(Duration::from_micros(pause));

                let (handler, how) = DatabaseHandler::acquire();
                if tx.send((handler as *const DatabaseHandler as usize, how)).is_err() {
                    warn!("[main] result channel closed, dropping a {} acquisition", how);
                }
            });
        }
    });
    drop(tx);

    let results: Vec<(usize, Acquisition)> = rx.iter().collect();
    if results.len() != callers {
        warn!("[main] expected {} results, got {}", callers, results.len());
    }
    let distinct = results.iter().map(|(addr, _)| addr).unique().count();
    let paths = results.iter().map(|(_, how)| *how).counts();

    println!("{}", "=== Acquisitions ===".green());
    for how in [
        Acquisition::Constructed,
        Acquisition::LockedHit,
        Acquisition::FastPath,
    ] {
        println!("{:>12}: {}", how.to_string(), paths.get(&how).copied().unwrap_or(0));
    }
    println!();

    println!("{}", "=== Identity ===".green());
    println!("callers:           {}", results.len());
    println!("distinct handlers: {}", distinct);
    println!("constructions:     {}", DatabaseHandler::constructions());
    if distinct == 1 && DatabaseHandler::constructions() == 1 {
        println!("{}", "every caller got the same instance".green());
    } else {
        println!("{}", "singleton invariant broken".red());
    }
    println!();

    println!("{}", "=== Using the handler ===".green());
    println!("{}", DatabaseHandler::instance().query("SELECT * FROM users"));

    Ok(())
}
