/// Coupled sender/receiver pair.
/// Ensures the channel endpoints stay together and share the same type.
#[derive(Debug)]
pub struct Channel<T> {
    tx: tokio::sync::mpsc::UnboundedSender<T>,
    rx: tokio::sync::mpsc::UnboundedReceiver<T>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl<T> Channel<T> {
    pub fn tx(&self) -> &tokio::sync::mpsc::UnboundedSender<T> {
        &self.tx
    }
    pub fn rx(&mut self) -> &mut tokio::sync::mpsc::UnboundedReceiver<T> {
        &mut self.rx
    }
    /// Discards everything queued so far. Returns how many were dropped.
    pub fn drain(&mut self) -> usize {
        std::iter::from_fn(|| self.rx.try_recv().ok()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn drain_empties_queue() {
        let mut channel = Channel::<u8>::default();
        channel.tx().send(1).unwrap();
        channel.tx().send(2).unwrap();
        assert_eq!(channel.drain(), 2);
        assert!(channel.rx().try_recv().is_err());
    }
}
