//! Connection lifecycle as reported by the transport.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

/// Transport connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    /// Most recent `status` message from the server.
    pub server_status: Option<String>,
}

impl ConnectionState {
    pub fn mark_connected(&mut self) {
        self.status = ConnectionStatus::Connected;
    }

    pub fn mark_disconnected(&mut self) {
        self.status = ConnectionStatus::Disconnected;
    }

    pub fn record_server_status(&mut self, message: String) {
        self.server_status = Some(message);
    }
}
