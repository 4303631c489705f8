//! Console logging for the browser build. Events from the whole crate go through
//! `tracing`; this installs a subscriber that writes them to the devtools console.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "info";

/// Builds the event filter from `EnvFilter` directives such as `debug` or
/// `medrec_web=trace,info`. Blank or malformed input falls back to `info`.
pub fn env_filter(directives: &str) -> EnvFilter {
    let directives = directives.trim();
    if directives.is_empty() {
        return EnvFilter::new(DEFAULT_DIRECTIVES);
    }
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

#[cfg(target_arch = "wasm32")]
pub fn init(config: &super::config::AppConfig) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};
    use tracing_web::MakeWebConsoleWriter;

    console_error_panic_hook::set_once();

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let result = tracing_subscriber::registry()
        .with(env_filter(&config.log_level))
        .with(fmt_layer)
        .try_init();

    if let Err(err) = result {
        web_sys::console::warn_1(&format!("logging already initialized: {err}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::env_filter;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn blank_directives_default_to_info() {
        assert_eq!(env_filter("   ").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn directives_set_the_most_verbose_level() {
        assert_eq!(env_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(
            env_filter("medrec_web=trace,info").max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
