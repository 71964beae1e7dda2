use std::{env, sync::Once};

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "budget_ledger=info";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// A non-empty `RUST_LOG` wins; otherwise `directive` is used, falling back
/// to `budget_ledger=info`.
pub fn init_tracing(directive: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = build_filter(directive, rust_log.as_deref());
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

fn filter_directives<'a>(directive: Option<&'a str>, rust_log: Option<&'a str>) -> &'a str {
    let non_empty = |raw: &&str| !raw.trim().is_empty();
    rust_log
        .filter(non_empty)
        .or_else(|| directive.filter(non_empty))
        .unwrap_or(DEFAULT_DIRECTIVE)
}

fn build_filter(directive: Option<&str>, rust_log: Option<&str>) -> EnvFilter {
    let directives = filter_directives(directive, rust_log);
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!("ignoring invalid log directives `{directives}`: {err}");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::{filter::LevelFilter, Layer, Registry};

    fn max_level(filter: &EnvFilter) -> Option<LevelFilter> {
        <EnvFilter as Layer<Registry>>::max_level_hint(filter)
    }

    #[test]
    fn rust_log_overrides_default_level() {
        let filter = build_filter(None, Some("budget_ledger=debug"));
        assert_eq!(max_level(&filter), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn rust_log_overrides_configured_directive() {
        assert_eq!(
            filter_directives(Some("budget_ledger=warn"), Some("budget_ledger=trace")),
            "budget_ledger=trace"
        );
    }

    #[test]
    fn configured_directive_replaces_default() {
        assert_eq!(
            filter_directives(Some("budget_ledger=debug"), None),
            "budget_ledger=debug"
        );
        assert_eq!(filter_directives(None, Some("  ")), DEFAULT_DIRECTIVE);
        let filter = build_filter(None, None);
        assert_eq!(max_level(&filter), Some(LevelFilter::INFO));
    }

    #[test]
    fn invalid_directives_fall_back_to_default() {
        let filter = build_filter(Some("budget_ledger=loud"), None);
        assert_eq!(max_level(&filter), Some(LevelFilter::INFO));
    }
}
