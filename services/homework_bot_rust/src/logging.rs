use chrono::Utc;
use env_logger::{Builder, Env};
use log::Record;
use std::io::Write;

/// Initialize `env_logger`. `RUST_LOG` wins over the built-in `debug` default.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            let ts = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
            writeln!(buf, "{}", format_record(&ts, record))
        })
        .init();
}

/// `<timestamp>, <LEVEL>, <module path>, <message>`
pub fn format_record(timestamp: &str, record: &Record<'_>) -> String {
    format!(
        "{}, {}, {}, {}",
        timestamp,
        record.level(),
        record.module_path().unwrap_or("unknown"),
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_format_record_layout() {
        let line = format_record(
            "2026-10-19 12:00:00.000",
            &Record::builder()
                .args(format_args!("Message sent: hi"))
                .level(Level::Debug)
                .module_path(Some("homework_bot_rust::telegram"))
                .build(),
        );
        assert_eq!(
            line,
            "2026-10-19 12:00:00.000, DEBUG, homework_bot_rust::telegram, Message sent: hi"
        );
    }
}
