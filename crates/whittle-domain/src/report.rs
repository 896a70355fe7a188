/// Outcome for a single candidate. Rejections carry no reason code; only the
/// aggregate counters distinguish them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

/// Monotonic counters for one filter run.
///
/// `processed == accepted + rejected` holds after every `record` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub processed: u64,
    pub accepted: u64,
    pub rejected: u64,
}

impl RunStats {
    pub fn record(&mut self, verdict: Verdict) {
        self.processed += 1;
        match verdict {
            Verdict::Accepted => self.accepted += 1,
            Verdict::Rejected => self.rejected += 1,
        }
    }
}
