use clap::Parser;

/// HelloWebView: a web page in a native window that can open a native popup.
#[derive(Parser, Debug)]
#[command(name = "hellowebview", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (a tracing filter directive, e.g. `debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_no_overrides() {
        let args = Args::try_parse_from(["hellowebview"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let args = Args::try_parse_from([
            "hellowebview",
            "--config",
            "/tmp/hello.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/hello.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["hellowebview", "--execute", "ls"]).is_err());
    }
}
