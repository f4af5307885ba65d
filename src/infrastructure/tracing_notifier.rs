use crate::domain::ports::CustomerNotifier;
use tracing::info;

/// Notifier that records the pickup signal as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl CustomerNotifier for TracingNotifier {
    fn notify_customer_ready(&self) {
        info!(
            target: "shipping::notifier",
            "customer will be notified when order is ready for pickup"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NotifierHandle;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_tracing_notifier_emits_info_event() {
        let log = CapturedLog::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(log.clone())
            .with_ansi(false)
            .finish();
        let notifier: NotifierHandle = Arc::new(TracingNotifier::new());

        tracing::subscriber::with_default(subscriber, || {
            notifier.notify_customer_ready();
            notifier.notify_customer_ready();
        });

        let output = log.contents();
        let events: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("ready for pickup"))
            .collect();
        assert_eq!(events.len(), 2);
        assert!(events[0].contains("INFO"));
        assert!(events[0].contains("shipping::notifier"));
    }
}
