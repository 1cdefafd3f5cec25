use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "hush-server", about = "Serves the Hush site and its contact inbox")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "HUSH_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Directory holding the built web bundle.
    #[arg(long, env = "HUSH_DIST", default_value = "dist")]
    pub dist: PathBuf,

    /// SQLite file for contact requests.
    #[arg(long, env = "HUSH_INBOX", default_value = "contact.db")]
    pub inbox: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "hush-server",
            "--bind",
            "127.0.0.1:9000",
            "--dist",
            "/srv/hush",
            "--inbox",
            "/var/lib/hush/contact.db",
        ])
        .expect("parse");
        assert_eq!(config.bind, "127.0.0.1:9000".parse().expect("addr"));
        assert_eq!(config.dist, PathBuf::from("/srv/hush"));
        assert_eq!(config.inbox, PathBuf::from("/var/lib/hush/contact.db"));
    }

    #[test]
    fn rejects_unparseable_bind_address() {
        assert!(ServerConfig::try_parse_from(["hush-server", "--bind", "not-an-addr"]).is_err());
    }
}
