//! Line-oriented text output on the diagnostic serial port.
//!
//! Status messages are written verbatim. Plot points use the `>name: value`
//! form understood by serial plotters, with two decimals.

use core::fmt::{self, Write as _};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_io_async::Write;
use heapless::String;
use l3gd20::AngularRate;

/// Longest line emitted, newline included.
pub const LINE_CAP: usize = 64;

pub struct Telemetry<'a, M: RawMutex, W> {
    sink: &'a Mutex<M, W>,
}

impl<M: RawMutex, W> Clone for Telemetry<'_, M, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex, W> Copy for Telemetry<'_, M, W> {}

impl<'a, M, W> Telemetry<'a, M, W>
where
    M: RawMutex,
    W: Write,
{
    pub const fn new(sink: &'a Mutex<M, W>) -> Self {
        Self { sink }
    }

    /// Format one line and write it out. Text past `LINE_CAP - 1` bytes is
    /// cut; write failures are logged and dropped.
    pub async fn line(&self, args: fmt::Arguments<'_>) {
        let mut buf = LineBuf(String::new());
        if buf.write_fmt(args).is_err() {
            warn!("telemetry line truncated");
        }
        let mut line = buf.0;
        // Room for the terminator is always left by LineBuf.
        let _ = line.push('\n');

        let mut sink = self.sink.lock().await;
        if sink.write_all(line.as_bytes()).await.is_err() {
            warn!("telemetry write failed");
        }
    }

    pub async fn status(&self, msg: &str) {
        self.line(format_args!("{}", msg)).await
    }

    pub async fn plot(&self, name: &str, value: f32) {
        self.line(format_args!(">{}: {:.2}", name, value)).await
    }

    pub async fn plot_rate(&self, rate: &AngularRate) {
        self.plot("x_axis", rate.x).await;
        self.plot("y_axis", rate.y).await;
        self.plot("z_axis", rate.z).await;
    }
}

/// Keeps as much of the text as fits, leaving one byte for the newline.
struct LineBuf(String<LINE_CAP>);

impl fmt::Write for LineBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.len() + c.len_utf8() > LINE_CAP - 1 {
                return Err(fmt::Error);
            }
            self.0.push(c).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
