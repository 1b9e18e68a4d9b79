//! Stop switch for a running rover service.
//!
//! The binary holds one `Shutdown` for the life of the process; integration
//! tests hold one per spawned service and flip it when a test is done.

use tokio::sync::broadcast;

/// One-shot stop switch shared by everything that serves rover requests.
///
/// Each server gets its own receiver from [`Shutdown::subscribe`]. Dropping the
/// `Shutdown` closes the channel, which servers treat the same as [`Shutdown::trigger`].
pub struct Shutdown {
    stop: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        // Capacity 1: the only message ever sent is "stop".
        let (stop, _) = broadcast::channel(1);
        Self { stop }
    }

    /// Receiver to hand to `HttpServer::run`.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.stop.subscribe()
    }

    /// Ask every subscribed server to stop accepting rover requests and drain.
    ///
    /// A no-op when no server is subscribed.
    pub fn trigger(&self) {
        let _ = self.stop.send(());
    }

    /// Servers still holding a receiver.
    pub fn listeners(&self) -> usize {
        self.stop.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
