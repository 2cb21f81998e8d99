use clap::Parser;
use poly_link::ConnectionInfo;

/// CLI configuration for the benchmark tool.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "poly-bench",
    about = "Times raw INSERT statements against stored-procedure execution on a Polypheny server",
    version
)]
pub struct Config {
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

    /// Number of timed iterations per operation
    #[arg(long, default_value_t = 1000)]
    pub iterations: u32,

    /// Number of warmup iterations (excluded from measurements)
    #[arg(long, default_value_t = 0)]
    pub warmup: u32,

    /// Path of the CSV file the raw durations are written to
    #[arg(long, default_value = "polypheny-benchmarks.csv")]
    pub output: String,

    /// Name of the scratch table created for the run
    #[arg(long, default_value = "dummy")]
    pub table: String,

    /// Name of the stored procedure created for the run
    #[arg(long, default_value = "spNoParam")]
    pub procedure: String,

    /// Skip the pre-flight connectivity checks
    #[arg(long, default_value_t = false)]
    pub skip_preflight: bool,
}

impl Config {
    pub fn connection(&self) -> ConnectionInfo {
        ConnectionInfo::new(&self.host, self.port, &self.user, &self.password)
    }
}
