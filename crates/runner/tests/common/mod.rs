#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// In-memory sink for formatted log output.
///
/// Hand [`LogCapture::subscriber`] to `tracing::subscriber::set_default` and
/// read everything written so far with [`LogCapture::contents`].
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    /// A subscriber recording every event at `info` and above.
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync {
        self.filtered_subscriber(EnvFilter::new("info"))
    }

    /// A subscriber applying `filter` before recording.
    pub fn filtered_subscriber(&self, filter: EnvFilter) -> impl Subscriber + Send + Sync {
        let writer = self.clone();
        tracing_subscriber::registry().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        )
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}
