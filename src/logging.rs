//! Logger setup shared by the demo binaries.

use std::io::Write;

use env_logger::{Builder, Env};

/// Install the stderr logger. Defaults to `info`; `RUST_LOG` overrides it.
///
/// Calling this more than once is harmless; later calls keep the first logger.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init();
        init();
        log::info!("logger installed");
    }
}
