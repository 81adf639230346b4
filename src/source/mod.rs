//! Temperature sources feeding a monitor.
//!
//! A source is anything that yields samples in order until it is exhausted.
//! Pacing between reads belongs to the source (see [`Paced`]), never to the
//! monitor.

pub mod error;

pub use error::SourceError;

use crate::core::TemperatureSample;
use std::collections::VecDeque;
use std::time::Duration;

/// Readings the stock device replays when no sensor is attached.
const REFERENCE_READINGS: [f64; 16] = [
    16.0, 17.0, 16.5, 18.0, 19.0, 22.0, 24.0, 26.75, 28.7, 27.6, 26.0, 24.0, 22.0, 45.0, 68.0,
    86.45,
];

/// Producer of an ordered sequence of samples.
///
/// `None` means the source is exhausted. `Some(Err(_))` is a failed read,
/// which is terminal for the current run.
pub trait TemperatureSource {
    fn next_sample(&mut self) -> Option<Result<TemperatureSample, SourceError>>;
}

impl<S: TemperatureSource + ?Sized> TemperatureSource for &mut S {
    fn next_sample(&mut self) -> Option<Result<TemperatureSample, SourceError>> {
        (**self).next_sample()
    }
}

impl<S: TemperatureSource + ?Sized> TemperatureSource for Box<S> {
    fn next_sample(&mut self) -> Option<Result<TemperatureSample, SourceError>> {
        (**self).next_sample()
    }
}

/// The stock device's seed readings.
pub fn reference_readings() -> Vec<f64> {
    REFERENCE_READINGS.to_vec()
}

/// Fixed list of values, each stamped with the time it is read.
///
/// # Example
///
/// ```rust
/// use thermowatch::source::{Readings, TemperatureSource};
///
/// let mut readings = Readings::new(vec![16.0, 30.0]);
///
/// assert_eq!(readings.next_sample().unwrap().unwrap().value(), 16.0);
/// assert_eq!(readings.next_sample().unwrap().unwrap().value(), 30.0);
/// assert!(readings.next_sample().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Readings {
    values: VecDeque<f64>,
}

impl Readings {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Replay [`reference_readings`].
    pub fn reference() -> Self {
        Self::new(REFERENCE_READINGS)
    }

    /// Values not yet read.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl TemperatureSource for Readings {
    fn next_sample(&mut self) -> Option<Result<TemperatureSample, SourceError>> {
        self.values.pop_front().map(|value| Ok(TemperatureSample::now(value)))
    }
}

/// Adapter over any iterator of read results.
///
/// Works for finite and infinite producers alike. Pair an infinite one with
/// a [`StopHandle`](crate::monitor::StopHandle).
#[derive(Clone, Debug)]
pub struct IterSource<I> {
    inner: I,
}

impl<I> IterSource<I>
where
    I: Iterator<Item = Result<TemperatureSample, SourceError>>,
{
    pub fn new(inner: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: inner.into_iter(),
        }
    }
}

impl<I> TemperatureSource for IterSource<I>
where
    I: Iterator<Item = Result<TemperatureSample, SourceError>>,
{
    fn next_sample(&mut self) -> Option<Result<TemperatureSample, SourceError>> {
        self.inner.next()
    }
}

/// Source over already-timestamped samples that never fail.
pub fn from_samples<I>(samples: I) -> impl TemperatureSource
where
    I: IntoIterator<Item = TemperatureSample>,
{
    IterSource::new(samples.into_iter().map(Ok))
}

/// Wraps a source and sleeps `interval` before every read but the first.
#[derive(Clone, Debug)]
pub struct Paced<S> {
    inner: S,
    interval: Duration,
    started: bool,
}

impl<S: TemperatureSource> Paced<S> {
    pub fn new(inner: S, interval: Duration) -> Self {
        Self {
            inner,
            interval,
            started: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: TemperatureSource> TemperatureSource for Paced<S> {
    fn next_sample(&mut self) -> Option<Result<TemperatureSample, SourceError>> {
        if self.started && !self.interval.is_zero() {
            std::thread::sleep(self.interval);
        }
        self.started = true;
        self.inner.next_sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn drain(source: &mut impl TemperatureSource) -> Vec<f64> {
        let mut values = Vec::new();
        while let Some(Ok(sample)) = source.next_sample() {
            values.push(sample.value());
        }
        values
    }

    #[test]
    fn readings_yield_values_in_order() {
        let mut readings = Readings::new(vec![16.0, 30.0, 10.0]);

        assert_eq!(drain(&mut readings), vec![16.0, 30.0, 10.0]);
        assert_eq!(readings.remaining(), 0);
    }

    #[test]
    fn empty_readings_are_exhausted_immediately() {
        let mut readings = Readings::default();

        assert!(readings.next_sample().is_none());
    }

    #[test]
    fn reference_readings_match_stock_device() {
        let readings = reference_readings();

        assert_eq!(readings.len(), 16);
        assert_eq!(readings.first(), Some(&16.0));
        assert_eq!(readings.last(), Some(&86.45));
        assert_eq!(Readings::reference().remaining(), 16);
    }

    #[test]
    fn iter_source_forwards_errors() {
        let mut source = IterSource::new(vec![
            Ok(TemperatureSample::now(16.0)),
            Err(SourceError::Disconnected),
        ]);

        assert!(matches!(source.next_sample(), Some(Ok(_))));
        assert_eq!(
            source.next_sample(),
            Some(Err(SourceError::Disconnected))
        );
        assert!(source.next_sample().is_none());
    }

    #[test]
    fn from_samples_preserves_timestamps() {
        let sample = TemperatureSample::now(42.0);
        let mut source = from_samples(vec![sample]);

        assert_eq!(source.next_sample(), Some(Ok(sample)));
    }

    #[test]
    fn paced_does_not_delay_first_read() {
        let mut paced = Paced::new(Readings::new(vec![1.0]), Duration::from_secs(5));

        let started = Instant::now();
        assert!(paced.next_sample().is_some());
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn paced_sleeps_between_reads() {
        let interval = Duration::from_millis(20);
        let mut paced = Paced::new(Readings::new(vec![1.0, 2.0, 3.0]), interval);

        let started = Instant::now();
        assert_eq!(drain(&mut paced), vec![1.0, 2.0, 3.0]);
        assert!(started.elapsed() >= interval * 2);
    }

    #[test]
    fn boxed_source_is_a_source() {
        let mut boxed: Box<dyn TemperatureSource> = Box::new(Readings::new(vec![5.0]));

        assert_eq!(drain(&mut boxed), vec![5.0]);
    }
}
