use std::fmt;

use tokio_postgres::Config;

/// Where and as whom to connect.
///
/// The password is kept out of `Display` so connection targets can be logged
/// freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl ConnectionInfo {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
        }
    }

    /// Driver-level connection config for this target.
    pub(crate) fn pg_config(&self) -> Config {
        let mut config = Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .user(&self.user)
            .password(&self.password)
            .application_name("poly-tools");
        config
    }
}

impl fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.user, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_postgres::config::Host;

    #[test]
    fn display_redacts_password() {
        let info = ConnectionInfo::new("localhost", 20591, "pa", "hunter2");
        let shown = info.to_string();
        assert_eq!(shown, "pa@localhost:20591");
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn pg_config_carries_target() {
        let info = ConnectionInfo::new("db.example", 20591, "pa", "");
        let config = info.pg_config();
        assert_eq!(config.get_user(), Some("pa"));
        assert_eq!(config.get_ports(), &[20591]);
        match config.get_hosts() {
            [Host::Tcp(host)] => assert_eq!(host, "db.example"),
            other => panic!("unexpected hosts: {:?}", other),
        }
    }
}
