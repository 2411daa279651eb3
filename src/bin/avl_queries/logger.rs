use std::io::Write;

use env_logger::{Builder, Env};

/// Initialize the logger. The level comes from `RUST_LOG` and defaults to
/// `warn` so that the answers on stdout are the only output of a normal run.
/// Records go to stderr with their module path and line number.
pub fn initialize_logger() {
    let env = Env::default().default_filter_or("warn");
    let mut builder = Builder::from_env(env);

    builder.format(|buf, record| {
        let path = record.module_path().unwrap_or("");
        let line = match record.line() {
            Some(l) => l.to_string(),
            None => "".to_string(),
        };

        writeln!(
            buf,
            "[{} {} {}:{}] {}",
            buf.timestamp_seconds(),
            record.level(),
            path,
            line,
            record.args()
        )
    });

    builder.init();
}
