use serde::Serialize;

/// Bot statistics captured at send time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub servers: u64,
    pub shards: u64,
}

impl StatsSnapshot {
    pub fn new(servers: u64, shards: u64) -> Self {
        Self { servers, shards }
    }
}
