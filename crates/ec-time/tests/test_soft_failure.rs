//! The lenient Gregorian day number logs instead of failing.

use std::io;
use std::sync::{Arc, Mutex};

use ec_time::{day_number_lenient, GregorianDate};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, sink.text())
}

#[test]
fn invalid_triple_logs_and_returns_zero() {
    let (n, logs) = with_captured_logs(|| day_number_lenient(2023, 2, 30));
    assert_eq!(n, 0);
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("not a Gregorian date"), "{logs}");
    assert!(logs.contains("month=2"), "{logs}");
}

#[test]
fn non_numeric_shape_logs_and_returns_zero() {
    let (n, logs) = with_captured_logs(|| day_number_lenient(2023, 1, 1_000));
    assert_eq!(n, 0);
    assert!(logs.contains("day=1000"), "{logs}");
}

#[test]
fn valid_triple_is_silent() {
    let (n, logs) = with_captured_logs(|| day_number_lenient(2023, 9, 12));
    assert_eq!(n, GregorianDate::from_ymd(2023, 9, 12).unwrap().day_number());
    assert!(logs.is_empty(), "{logs}");
}
