use embedded_hal_async::delay::DelayNs;

use crate::clock::Clock;
use crate::config::GestureConfig;
use crate::gyro::RateSource;
use crate::template::GestureTemplate;

/// Fill `out` with samples until either the capture window has elapsed or
/// the template is full, pausing `sample_interval_ms` after each sample.
///
/// `out` is cleared first. Elapsed time is checked before each sample, so a
/// capture overruns the window by at most one sample plus one interval. On a
/// source error `out` holds whatever was captured so far.
pub async fn capture<S, C, D>(
    source: &mut S,
    clock: &C,
    delay: &mut D,
    config: &GestureConfig,
    out: &mut GestureTemplate,
) -> Result<usize, S::Error>
where
    S: RateSource,
    C: Clock,
    D: DelayNs,
{
    out.clear();
    let start = clock.now_ms();
    let window = u64::from(config.duration_ms);

    while clock.elapsed_since(start) < window && !out.is_full() {
        let rate = source.sample().await?;
        // Guarded by is_full above.
        let _ = out.push(rate);
        delay.delay_ms(config.sample_interval_ms).await;
    }

    trace!(
        "captured {=usize} samples in {=u64} ms",
        out.len(),
        clock.elapsed_since(start)
    );
    Ok(out.len())
}
