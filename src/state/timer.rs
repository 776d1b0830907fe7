// Scheduled state transitions.
// Timer chains and fixed-rate tickers run as tokio tasks and deliver events over a channel.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// A fixed sequence of delayed events, each at an absolute offset from the
/// moment it was scheduled.
///
/// The owning widget drains delivered events on its own thread; the task never
/// touches widget state. Cancelling (or dropping) aborts the task and drops
/// the receiver so late deliveries are discarded.
#[derive(Debug)]
pub struct TimerChain<E> {
    task: Option<JoinHandle<()>>,
    rx: Option<UnboundedReceiver<E>>,
    /// Events not yet delivered.
    pending: usize,
}

impl<E> Default for TimerChain<E> {
    fn default() -> Self {
        Self {
            task: None,
            rx: None,
            pending: 0,
        }
    }
}

impl<E: Send + 'static> TimerChain<E> {
    /// Schedule `steps`, replacing any chain already in flight.
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, steps: Vec<(Duration, E)>) {
        self.cancel();

        let (tx, rx) = mpsc::unbounded_channel();
        let origin = Instant::now();
        self.pending = steps.len();
        self.rx = Some(rx);
        self.task = Some(tokio::spawn(async move {
            for (offset, event) in steps {
                tokio::time::sleep_until(origin + offset).await;
                if tx.send(event).is_err() {
                    return;
                }
            }
        }));
    }

    /// Abort the chain. Undelivered events are dropped.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            if self.pending > 0 {
                log::debug!("Cancelled timer chain with {} pending events", self.pending);
            }
        }
        self.rx = None;
        self.pending = 0;
    }

    /// Take every event delivered so far, in order.
    pub fn drain(&mut self) -> Vec<E> {
        let mut delivered = Vec::new();
        if let Some(rx) = self.rx.as_mut() {
            while let Ok(event) = rx.try_recv() {
                delivered.push(event);
            }
        }
        self.pending = self.pending.saturating_sub(delivered.len());
        if self.pending == 0 {
            self.task = None;
            self.rx = None;
        }
        delivered
    }
}

#[cfg(test)]
impl<E: Send + 'static> TimerChain<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether events are still outstanding.
    pub fn is_running(&self) -> bool {
        self.pending > 0
    }
}

impl<E> Drop for TimerChain<E> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Fires once per period for as long as it is alive.
#[derive(Debug)]
pub struct Ticker {
    task: JoinHandle<()>,
    rx: UnboundedReceiver<()>,
}

impl Ticker {
    /// Start ticking; the first tick arrives one full period from now.
    /// Must be called from within a tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    return;
                }
            }
        });
        Self { task, rx }
    }

    /// Number of ticks delivered since the last drain.
    pub fn drain(&mut self) -> usize {
        let mut ticks = 0;
        while self.rx.try_recv().is_ok() {
            ticks += 1;
        }
        ticks
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_chain_delivers_at_absolute_offsets() {
        let mut chain = TimerChain::new();
        chain.schedule(vec![
            (Duration::from_millis(100), 'a'),
            (Duration::from_millis(300), 'b'),
        ]);
        assert!(chain.is_running());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(chain.drain(), vec!['a']);
        assert!(chain.is_running());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(chain.drain(), vec!['b']);
        assert!(!chain.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending() {
        let mut chain = TimerChain::new();
        chain.schedule(vec![(Duration::from_millis(100), 1u8)]);
        chain.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(chain.drain().is_empty());
        assert!(!chain.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_chain() {
        let mut chain = TimerChain::new();
        chain.schedule(vec![(Duration::from_millis(100), "old")]);
        chain.schedule(vec![(Duration::from_millis(200), "new")]);

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(chain.drain(), vec!["new"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_counts_periods() {
        let mut ticker = Ticker::start(Duration::from_millis(2000));

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(ticker.drain(), 0);

        tokio::time::sleep(Duration::from_millis(5500)).await;
        assert_eq!(ticker.drain(), 3);
    }
}
