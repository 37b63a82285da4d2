//! Notification publishing/subscription abstraction (mechanics only).
//!
//! The bus is the one-way channel between the provenance core and external
//! observers. The core publishes a notification after a mutation has fully
//! applied and never consumes the stream itself, so the bus makes minimal
//! assumptions:
//!
//! - **Transport-agnostic**: in-memory channels here; a broker elsewhere.
//! - **Broadcast semantics**: every subscriber gets a copy of every message.
//! - **No persistence**: the ledger's history is the durable record, not the
//!   bus; a lost notification can be reconstructed from batch history.
//! - **At-least-once acceptable**: observers must tolerate duplicates.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to the notification stream.
///
/// Designed for single-threaded consumption; hand each subscription to one
/// consumer thread. Messages arrive in publish order for a given publisher.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Domain-agnostic notification bus (pub/sub abstraction).
///
/// `publish()` can fail (bus closed, transport error). Failures surface to
/// the caller after the state mutation has already committed, so a retry can
/// only duplicate a notification, never a state change.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
