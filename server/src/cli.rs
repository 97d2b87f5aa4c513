use clap::ValueEnum;
use log::LevelFilter;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Off => LevelFilter::Off,
        }
    }
}

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "0.0.0.0")]
    pub(crate) bind: String,

    #[arg(short = 'P', long, default_value_t = 8080)]
    pub(crate) port: u16,

    #[arg(long, value_name = "LEVEL", value_enum, default_value_t=LogLevel::Info)]
    pub(crate) log: LogLevel,
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["kallari-site-server"]).unwrap();
        assert_eq!(cli.bind, "0.0.0.0");
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.log, LogLevel::Info);
    }

    #[test]
    fn arguments() {
        let cli = Cli::try_parse_from([
            "kallari-site-server",
            "--bind",
            "127.0.0.1",
            "-P",
            "9000",
            "--log",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.bind, "127.0.0.1");
        assert_eq!(cli.port, 9000);
        assert_eq!(LevelFilter::from(cli.log), LevelFilter::Debug);
    }

    #[test]
    fn invalid_port() {
        assert!(Cli::try_parse_from(["kallari-site-server", "-P", "http"]).is_err());
    }
}
