use std::path::PathBuf;

use clap::Parser;
use poly_link::ConnectionInfo;

/// Command-line arguments for the extractor.
#[derive(Parser, Debug)]
#[command(
    name = "poly-schema",
    about = "Schema report extractor for a Polypheny server",
    version
)]
pub struct Cli {
    /// Path to the JSON schema descriptor
    pub descriptor: PathBuf,

    /// Path the report is written to
    pub output: PathBuf,

    /// Server hostname
    #[arg(long, default_value = "localhost", env = "POLYPHENY_HOST")]
    pub host: String,

    /// Server port
    #[arg(long, default_value_t = 20591, env = "POLYPHENY_PORT")]
    pub port: u16,

    /// Username
    #[arg(long, default_value = "pa", env = "POLYPHENY_USER")]
    pub user: String,

    /// Password
    #[arg(long, default_value = "", env = "POLYPHENY_PASSWORD")]
    pub password: String,
}

impl Cli {
    pub fn connection(&self) -> ConnectionInfo {
        ConnectionInfo::new(&self.host, self.port, &self.user, &self.password)
    }
}
