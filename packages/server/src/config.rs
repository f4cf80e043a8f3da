use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Command line and environment configuration for the API server.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio-api", version, about = "Serve the portfolio project catalog")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind.
    #[arg(long = "bind", env = "BIND_ADDR", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind_addr: IpAddr,

    /// JSON catalog file (`{ "projects": [...] }`). The bundled catalog is
    /// served when unset.
    #[arg(long, env = "PROJECTS_FILE")]
    pub projects_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::parse_from([
            "folio-api",
            "--port",
            "8080",
            "--bind",
            "127.0.0.1",
            "--projects-file",
            "/tmp/projects.json",
        ]);
        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(
            config.projects_file,
            Some(PathBuf::from("/tmp/projects.json"))
        );
        assert_eq!(config.log, "info");
    }
}
