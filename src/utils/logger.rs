use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// 一行一筆 JSON，給其他工具收集
    Json,
}

/// `RUST_LOG` 未設定時使用的 filter
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "depth_chart=debug,info"
    } else {
        "depth_chart=info"
    }
}

/// 日誌一律寫到 stderr，stdout 只留給深度圖輸出（`--json` 時才能直接 pipe）
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(directives.parse::<EnvFilter>().is_ok(), "{}", directives);
        }
        assert!(default_directives(true).contains("debug"));
    }
}
