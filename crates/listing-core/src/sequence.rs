//! Request Sequencing
//!
//! Each fetch gets a monotonically increasing number. Only the response to
//! the latest issued request may update the results.

/// Sequence number of an issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next sequence number; all earlier ones become stale
    pub fn issue(&mut self) -> RequestSeq {
        self.latest += 1;
        RequestSeq(self.latest)
    }

    pub fn is_current(&self, seq: RequestSeq) -> bool {
        seq.0 == self.latest
    }
}
