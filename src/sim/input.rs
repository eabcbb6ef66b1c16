use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};

use glam::Vec2;

/// Messages from an input source to the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMessage {
    /// New target position in logical surface coordinates.
    SetTarget(Vec2),
}

/// Sending half handed to input handlers. Cheap to clone, usable from any thread.
#[derive(Debug, Clone)]
pub struct TargetSender {
    tx: Sender<InputMessage>,
}

impl TargetSender {
    /// Returns `false` once the driver is gone.
    pub fn set_target(&self, target: Vec2) -> bool {
        self.tx.send(InputMessage::SetTarget(target)).is_ok()
    }
}

/// Receiving half owned by the driver, drained at the top of every tick.
#[derive(Debug)]
pub struct TargetReceiver {
    rx: Receiver<InputMessage>,
}

impl TargetReceiver {
    /// Drains everything pending and returns the most recent target, if any.
    pub fn latest(&self) -> Option<Vec2> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(InputMessage::SetTarget(target)) => latest = Some(target),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }
}

pub fn target_channel() -> (TargetSender, TargetReceiver) {
    let (tx, rx) = channel();
    (TargetSender { tx }, TargetReceiver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn latest_message_wins() {
        let (tx, rx) = target_channel();
        assert_eq!(rx.latest(), None);

        tx.set_target(Vec2::new(1.0, 1.0));
        tx.set_target(Vec2::new(2.0, 3.0));
        assert_eq!(rx.latest(), Some(Vec2::new(2.0, 3.0)));
        assert_eq!(rx.latest(), None);
    }

    #[test]
    fn senders_work_across_threads() {
        let (tx, rx) = target_channel();
        let remote = tx.clone();
        thread::spawn(move || {
            assert!(remote.set_target(Vec2::new(9.0, 9.0)));
        })
        .join()
        .unwrap();
        assert_eq!(rx.latest(), Some(Vec2::new(9.0, 9.0)));
    }

    #[test]
    fn sending_after_driver_drop_reports_failure() {
        let (tx, rx) = target_channel();
        drop(rx);
        assert!(!tx.set_target(Vec2::ZERO));
    }
}
