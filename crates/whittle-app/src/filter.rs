//! The `filter` use case: stream a wordlist through the policy chain.

use std::io::{BufRead, Write};

use anyhow::Context;
use time::OffsetDateTime;
use whittle_domain::policy::Policy;
use whittle_domain::{evaluate, RunStats, Verdict};

/// Output from the filter use case.
#[derive(Clone, Debug)]
pub struct FilterOutput {
    pub stats: RunStats,
    pub started_at: OffsetDateTime,
    pub finished_at: OffsetDateTime,
}

impl FilterOutput {
    pub fn elapsed_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).as_seconds_f64().max(0.0)
    }
}

/// Stream `reader` through the policy chain, writing accepted candidates to
/// `writer` in input order, newline-joined with no trailing delimiter.
///
/// Lines are read as raw bytes; a line that is not valid UTF-8 counts as
/// processed and rejected and is skipped, never aborting the run. Accepted
/// candidates are written as soon as they pass, so the accepted set is never
/// buffered whole.
pub fn run_filter<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    policy: &Policy,
) -> anyhow::Result<FilterOutput> {
    let started_at = OffsetDateTime::now_utc();

    let mut stats = RunStats::default();
    let mut raw = Vec::new();
    let mut first = true;

    loop {
        raw.clear();
        let read = reader
            .read_until(b'\n', &mut raw)
            .context("read wordlist")?;
        if read == 0 {
            break;
        }

        let Ok(line) = std::str::from_utf8(&raw) else {
            stats.record(Verdict::Rejected);
            continue;
        };
        let candidate = line.trim();

        let verdict = evaluate(candidate, policy);
        stats.record(verdict);
        if verdict == Verdict::Accepted {
            if !first {
                writer.write_all(b"\n").context("write output")?;
            }
            writer
                .write_all(candidate.as_bytes())
                .context("write output")?;
            first = false;
        }
    }
    writer.flush().context("flush output")?;

    let finished_at = OffsetDateTime::now_utc();
    Ok(FilterOutput {
        stats,
        started_at,
        finished_at,
    })
}
