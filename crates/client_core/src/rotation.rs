use std::time::Duration;

use tokio::{sync::watch, task::JoinHandle};

/// Rotates through display-only entries on a fixed period. Used for the
/// activity ticker and the FOMO notices; purely cosmetic view state. The
/// rotation task is cancelled when the rotator is dropped.
pub struct ActivityRotator {
    task: Option<JoinHandle<()>>,
    rx: watch::Receiver<String>,
}

impl ActivityRotator {
    pub fn start(entries: Vec<String>, period: Duration) -> Self {
        let first = entries.first().cloned().unwrap_or_default();
        let (tx, rx) = watch::channel(first);

        // Nothing to rotate for zero or one entries.
        let task = if entries.len() > 1 {
            Some(tokio::spawn(async move {
                let mut interval = tokio::time::interval(period);
                // The first tick completes immediately; skip it so the
                // initial entry holds for a full period.
                interval.tick().await;
                let mut index = 0usize;
                loop {
                    interval.tick().await;
                    index = (index + 1) % entries.len();
                    if tx.send(entries[index].clone()).is_err() {
                        break;
                    }
                }
            }))
        } else {
            None
        };

        Self { task, rx }
    }

    pub fn current(&self) -> String {
        self.rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.rx.clone()
    }
}

impl Drop for ActivityRotator {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rotates_through_entries_in_order() {
        let rotator = ActivityRotator::start(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            Duration::from_millis(10),
        );
        let mut rx = rotator.subscribe();
        assert_eq!(rotator.current(), "a");

        rx.changed().await.expect("first rotation");
        assert_eq!(*rx.borrow(), "b");
        rx.changed().await.expect("second rotation");
        assert_eq!(*rx.borrow(), "c");
        rx.changed().await.expect("wraparound");
        assert_eq!(*rx.borrow(), "a");
    }

    #[tokio::test]
    async fn single_entry_never_rotates() {
        let rotator = ActivityRotator::start(vec!["only".to_string()], Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(rotator.current(), "only");
    }

    #[tokio::test]
    async fn empty_entries_yield_a_quiet_rotator() {
        let rotator = ActivityRotator::start(Vec::new(), Duration::from_millis(5));
        assert_eq!(rotator.current(), "");
    }

    #[tokio::test]
    async fn dropping_the_rotator_stops_the_task() {
        let rotator = ActivityRotator::start(
            vec!["a".to_string(), "b".to_string()],
            Duration::from_millis(10),
        );
        let mut rx = rotator.subscribe();
        drop(rotator);

        // The sender side goes away once the task is aborted, so the
        // receiver runs out of changes instead of ticking forever.
        let drained = tokio::time::timeout(Duration::from_millis(200), async {
            while rx.changed().await.is_ok() {}
        })
        .await;
        assert!(drained.is_ok(), "rotation task should stop after drop");
    }
}
