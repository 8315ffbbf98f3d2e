// this_file: crates/glyphcode-gen/src/scheduler.rs

//! Supersede-on-change generation scheduling.
//!
//! `submit` is fire-and-forget: the caller's thread never blocks on a
//! generation. Workers may complete out of order; the delivery gate
//! guarantees that observed results never regress to an older request once
//! a newer one has been delivered.

use crate::request::{GeneratedCode, GenerationRequest};
use glyphcode_core::{
    Bitmap, Format, GlyphCodeError, Result, SourceCodeOptions, DEFAULT_ARRAY_NAME,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};

/// Event delivered on the scheduler's outbound channel.
#[derive(Debug)]
pub enum GenerationEvent {
    /// Emitted synchronously when a request is submitted, so the caller
    /// can show a pending indication.
    Started { seq: u64 },
    /// Emitted exactly once per non-superseded request.
    Completed {
        seq: u64,
        result: Result<GeneratedCode>,
    },
}

/// Tracks the highest delivered sequence number.
///
/// The channel send happens inside the lock: the check and the send form
/// one atomic step, so two completions can never interleave out of order.
struct DeliveryGate {
    last_delivered: Mutex<Option<u64>>,
}

impl DeliveryGate {
    fn new() -> Self {
        Self {
            last_delivered: Mutex::new(None),
        }
    }

    /// Deliver `result` unless a request with a higher or equal sequence
    /// number has already been delivered. Returns whether it was sent.
    fn deliver(
        &self,
        events: &mpsc::Sender<GenerationEvent>,
        seq: u64,
        result: Result<GeneratedCode>,
    ) -> bool {
        let mut last = self.last_delivered.lock();
        if last.is_some_and(|delivered| seq <= delivered) {
            log::debug!(
                target: "glyphcode::sched",
                "dropping superseded result seq={} (delivered={:?})",
                seq,
                *last
            );
            return false;
        }
        *last = Some(seq);
        // Receiver may be gone during shutdown; nothing to do about it.
        let _ = events.send(GenerationEvent::Completed { seq, result });
        true
    }
}

/// Serializes generation requests onto a bounded worker pool and delivers
/// the single most recent result per state change.
pub struct GenerationScheduler {
    pool: rayon::ThreadPool,
    next_seq: AtomicU64,
    events: mpsc::Sender<GenerationEvent>,
    gate: Arc<DeliveryGate>,
}

impl GenerationScheduler {
    /// Create a scheduler with an automatically sized worker pool.
    pub fn new(events: mpsc::Sender<GenerationEvent>) -> Result<Self> {
        Self::with_workers(0, events)
    }

    /// Create a scheduler with `workers` threads (0 = auto).
    pub fn with_workers(workers: usize, events: mpsc::Sender<GenerationEvent>) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("glyphcode-gen-{}", i))
            .build()
            .map_err(|e| GlyphCodeError::Internal(format!("failed to build worker pool: {}", e)))?;
        Ok(Self {
            pool,
            next_seq: AtomicU64::new(0),
            events,
            gate: Arc::new(DeliveryGate::new()),
        })
    }

    /// Submit a generation request. Returns the assigned sequence number
    /// immediately; the result arrives on the event channel.
    ///
    /// `array_name` defaults to [`DEFAULT_ARRAY_NAME`] when `None`.
    pub fn submit(
        &self,
        bitmap: Bitmap,
        options: SourceCodeOptions,
        format: Format,
        array_name: Option<&str>,
    ) -> u64 {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let request = GenerationRequest {
            seq,
            bitmap,
            options,
            format,
            array_name: array_name.unwrap_or(DEFAULT_ARRAY_NAME).to_string(),
        };

        log::debug!(
            target: "glyphcode::sched",
            "submitting seq={} format={} name={}",
            seq,
            request.format,
            request.array_name
        );
        let _ = self.events.send(GenerationEvent::Started { seq });

        let gate = Arc::clone(&self.gate);
        let events = self.events.clone();
        self.pool.spawn(move || {
            let result = request.generate();
            gate.deliver(&events, request.seq, result);
        });
        seq
    }
}
