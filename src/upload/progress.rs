// Progress instrumentation for the upload body.
//
// `ObservedReader` sits between the serialized body and the HTTP client and
// reports how many bytes the client pulled. It never changes what is read.

use std::io::{self, Read};

use indicatif::ProgressBar;

/// Receives byte counts as the transport consumes the body.
pub trait ProgressObserver {
    fn advance(&mut self, bytes: u64);

    /// Called once, as soon as the announced total has been reported or the
    /// reader hits end of stream, whichever happens first.
    fn finish(&mut self) {}
}

impl ProgressObserver for ProgressBar {
    fn advance(&mut self, bytes: u64) {
        self.inc(bytes);
    }

    fn finish(&mut self) {
        ProgressBar::finish(self);
    }
}

/// Pass-through reader that reports every successful read to an observer.
///
/// The reported total is capped at `total`, so an underlying stream that is
/// longer than announced can never push the counter past it.
pub struct ObservedReader<R, O> {
    inner: R,
    observer: O,
    total: u64,
    transferred: u64,
    finished: bool,
}

impl<R: Read, O: ProgressObserver> ObservedReader<R, O> {
    pub fn new(inner: R, total: u64, observer: O) -> Self {
        ObservedReader {
            inner,
            observer,
            total,
            transferred: 0,
            finished: false,
        }
    }

    pub fn transferred(&self) -> u64 {
        self.transferred
    }

    // The transport stops reading once it has sent `total` bytes, so the
    // end-of-stream read may never happen.
    fn finish_once(&mut self) {
        if !self.finished {
            self.finished = true;
            self.observer.finish();
        }
    }
}

impl<R: Read, O: ProgressObserver> Read for ObservedReader<R, O> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 {
            if !buf.is_empty() {
                self.finish_once();
            }
            return Ok(0);
        }

        let step = (n as u64).min(self.total - self.transferred);
        if step > 0 {
            self.transferred += step;
            self.observer.advance(step);
        }
        if self.transferred == self.total {
            self.finish_once();
        }
        Ok(n)
    }
}

/// Wrap `reader` so every byte pulled from it is reported to `observer`.
pub fn wrap<R: Read, O: ProgressObserver>(reader: R, total: u64, observer: O) -> ObservedReader<R, O> {
    ObservedReader::new(reader, total, observer)
}
