//! The analyzer reports its match decision as a tracing event.

use std::sync::{Arc, Mutex};

use askdev_core::Analyzer;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct MockWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl std::io::Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MockWriter {
    type Writer = MockWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let writer = MockWriter {
        buf: Arc::new(Mutex::new(Vec::new())),
    };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let out = writer.buf.lock().unwrap().clone();
    String::from_utf8(out).unwrap()
}

#[test]
fn pattern_match_is_logged() {
    let output = capture(|| {
        let d = Analyzer::default().diagnose("W/App: java.lang.SecurityException: denied");
        assert!(d.is_some());
    });
    assert!(output.contains("matched catalog pattern"), "{output}");
    assert!(output.contains("SecurityException"), "{output}");
}

#[test]
fn miss_is_logged() {
    let output = capture(|| {
        assert!(Analyzer::default().diagnose("nothing to see").is_none());
    });
    assert!(output.contains("no catalog entry matched"), "{output}");
}

#[test]
fn oversized_frame_line_is_warned_and_dropped() {
    let output = capture(|| {
        let d = Analyzer::default()
            .diagnose(
                "java.lang.IllegalArgumentException: bad\n\
                 \tat a.B.c(B.java:99999999999)\n\
                 \tat a.B.d(B.java:8)",
            )
            .unwrap();
        assert_eq!(d.frames.len(), 1);
        assert_eq!(d.frames[0].line, 8);
    });
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("line number out of range"), "{output}");
    assert!(output.contains("stack frame"), "{output}");
}
