//! Chunk scanning: prompt-echo skipping and stop-sequence matching.
//!
//! The relay loop itself lives in the server crate; this module holds the
//! per-chunk step it drives, plus the tagged outcome the loop ends with.

use std::fmt;

use bytes::Bytes;

/// Bytes per read from the subprocess stdout pipe. A tunable, not a
/// correctness requirement.
pub const CHUNK_SIZE: usize = 128;

/// What to do with one chunk read from the pipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanAction {
    /// Chunk is still inside the echoed prompt; nothing to forward.
    Skip,
    /// Forward these bytes and keep reading.
    Emit(Bytes),
    /// Forward these bytes, then stop reading: a stop sequence matched.
    EmitAndStop(Bytes),
}

/// How the relay loop ended. Consumed by the caller for logging; none of
/// these are surfaced to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The subprocess closed its stdout pipe.
    Completed,
    /// A stop sequence matched the accumulated output.
    StoppedAtMatch,
    /// A read from the pipe failed; the stream was truncated where it stood.
    ReadError,
}

impl fmt::Display for RelayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayOutcome::Completed => write!(f, "completed"),
            RelayOutcome::StoppedAtMatch => write!(f, "stop_matched"),
            RelayOutcome::ReadError => write!(f, "read_error"),
        }
    }
}

/// Per-request stream state: skip accounting plus the tail of emitted bytes
/// used for stop-sequence matching.
///
/// The inference binary echoes the prompt plus one delimiter byte before any
/// generated text, so the first `prompt.len() + 1` bytes read are discarded.
/// This is a byte-count contract with the binary: if its echo encodes the
/// prompt differently than the request body did, the boundary shifts.
#[derive(Debug)]
pub struct StopScanner {
    bytes_to_skip: i64,
    tail: Vec<u8>,
    stop: Vec<String>,
}

impl StopScanner {
    pub fn new(prompt: &str, stop: Vec<String>) -> Self {
        Self {
            bytes_to_skip: prompt.len() as i64 + 1,
            tail: Vec::new(),
            stop,
        }
    }

    /// Feed one chunk read from the pipe.
    ///
    /// The skip counter is decremented by the full chunk length on every
    /// call, including pure-skip chunks, so accounting stays correct across
    /// chunk boundaries. When the counter crosses zero mid-chunk the emitted
    /// slice starts at the boundary, not at the chunk start.
    pub fn scan(&mut self, chunk: &[u8]) -> ScanAction {
        let n = chunk.len() as i64;
        let action = if self.bytes_to_skip < n {
            let start = self.bytes_to_skip.max(0) as usize;
            let emitted = &chunk[start..];
            self.tail.extend_from_slice(emitted);
            let bytes = Bytes::copy_from_slice(emitted);
            if self.stop_matched() {
                ScanAction::EmitAndStop(bytes)
            } else {
                ScanAction::Emit(bytes)
            }
        } else {
            ScanAction::Skip
        };
        self.bytes_to_skip -= n;
        action
    }

    /// Suffix-match each stop sequence against the tail with ASCII spaces
    /// trimmed from both ends.
    ///
    /// Matching runs over the accumulated bytes, not the current chunk, so a
    /// stop sequence split across two reads still matches once the second
    /// read's bytes arrive.
    fn stop_matched(&self) -> bool {
        if self.stop.is_empty() {
            return false;
        }
        let trimmed = trim_spaces(&self.tail);
        self.stop.iter().any(|s| trimmed.ends_with(s.as_bytes()))
    }
}

/// Trim ASCII space bytes (0x20 only) from both ends.
fn trim_spaces(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != b' ').unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| b != b' ').map_or(start, |i| i + 1);
    &bytes[start..end]
}
