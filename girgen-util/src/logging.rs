use env_logger::fmt::Color;
use log::Level;

/// Filter for the log output, in `env_logger` syntax. Defaults to `warn`.
pub const LOG_ENV: &str = "GIRGEN_LOG";

/// Install the coloured logger used by the CLI and the tests. Later calls are ignored.
pub fn init_log() {
    use std::io::Write;

    let env = env_logger::Env::new()
        .filter_or(LOG_ENV, "warn")
        .write_style(format!("{LOG_ENV}_STYLE"));

    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red).set_bold(true),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Cyan),
                Level::Debug | Level::Trace => style.set_color(Color::White).set_dimmed(true),
            };

            // girgen_write::class -> write::class
            let target = record.target().trim_start_matches("girgen_");
            writeln!(
                buf,
                "{:<5} {target}: {}",
                style.value(record.level()),
                record.args()
            )
        })
        .try_init();
}
