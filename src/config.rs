/*
 * Responsibility
 * - positional CLI argument parsing (port, optional response file)
 * - validation at startup (bad arguments fail the process)
 */
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Port used when no arguments are given (claims-echo only).
pub const DEFAULT_PORT: u16 = 8181;

/// Response strategy, fixed at process start.
///
/// The two variants are mutually exclusive: either the bearer token's
/// payload is decoded and echoed back, or the token is ignored and a
/// file's bytes are served verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseMode {
    /// Decode the JWT payload segment (no signature check) and echo it.
    ClaimsEcho,
    /// Serve the file's contents on every request, read fresh each time.
    CannedFile(PathBuf),
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    Usage,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(arg) => write!(f, "invalid port: {}", arg),
            ConfigError::Usage => {
                write!(f, "usage: introspect-stub [<port> [<response_file>]]")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,
    pub mode: ResponseMode,
}

impl Config {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args)
    }

    fn parse(args: &[String]) -> Result<Self, ConfigError> {
        let (port, mode) = match args {
            [] => (DEFAULT_PORT, ResponseMode::ClaimsEcho),
            [port] => (parse_port(port)?, ResponseMode::ClaimsEcho),
            [port, file] => (
                parse_port(port)?,
                ResponseMode::CannedFile(PathBuf::from(file)),
            ),
            _ => return Err(ConfigError::Usage),
        };

        let addr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;

        Ok(Self { addr, mode })
    }
}

fn parse_port(arg: &str) -> Result<u16, ConfigError> {
    let port: u16 = arg
        .parse()
        .map_err(|_| ConfigError::InvalidPort(arg.to_string()))?;
    if port == 0 {
        return Err(ConfigError::InvalidPort(arg.to_string()));
    }
    Ok(port)
}
