//! Timestamped input streams and the driver that feeds them to a learner.
//!
//! Two streams tick independently. At every distinct timestamp the learner sees which of them
//! ticked, and fires only when both did.

use std::{cmp::Ordering, io};

use chrono::{NaiveDateTime, TimeDelta};
use derive_more::{Display, Error};

use crate::{OnlineLearner, UpdateResult};

pub type Timestamp = NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StreamError {
    #[display("tick #{index} is not later than the tick before it")]
    OutOfOrder { index: usize },
    #[display("timestamp out of range")]
    TimeOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick<T> {
    pub time: Timestamp,
    pub value: T,
}

/// A stream of ticks with strictly increasing timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve<T> {
    ticks: Vec<Tick<T>>,
}

impl<T> Curve<T> {
    pub fn new(ticks: impl IntoIterator<Item = (Timestamp, T)>) -> Result<Self, StreamError> {
        let ticks: Vec<Tick<T>> = ticks
            .into_iter()
            .map(|(time, value)| Tick { time, value })
            .collect();
        for (i, pair) in ticks.windows(2).enumerate() {
            if pair[1].time <= pair[0].time {
                return Err(StreamError::OutOfOrder { index: i + 1 });
            }
        }
        Ok(Self { ticks })
    }

    /// Ticks `values` one after another, the first at `start`, spaced by `interval`.
    pub fn from_fn(
        start: Timestamp,
        interval: TimeDelta,
        values: impl IntoIterator<Item = T>,
    ) -> Result<Self, StreamError> {
        let mut time = Some(start);
        let mut ticks = Vec::new();
        for value in values {
            let tick_time = time.ok_or(StreamError::TimeOverflow)?;
            ticks.push((tick_time, value));
            time = tick_time.checked_add_signed(interval);
        }
        Self::new(ticks)
    }

    pub fn ticks(&self) -> &[Tick<T>] {
        &self.ticks
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Same timestamps, values mapped through `f`.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Curve<U> {
        Curve {
            ticks: self
                .ticks
                .iter()
                .map(|tick| Tick {
                    time: tick.time,
                    value: f(&tick.value),
                })
                .collect(),
        }
    }
}

/// One engine cycle as seen by the learner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub time: Timestamp,
    /// `Some` only if `x` ticked at `time`.
    pub x: Option<f64>,
    /// `Some` only if `y_true` ticked at `time`.
    pub y_true: Option<f64>,
}

/// Merges the two streams into one event per distinct timestamp, in timestamp order.
pub fn synchronize(xs: &Curve<f64>, ys: &Curve<f64>) -> Vec<Event> {
    let (xs, ys) = (xs.ticks(), ys.ticks());
    let mut events = Vec::with_capacity(xs.len().max(ys.len()));
    let (mut i, mut j) = (0usize, 0usize);
    while i < xs.len() || j < ys.len() {
        let ordering = match (xs.get(i), ys.get(j)) {
            (Some(x), Some(y)) => x.time.cmp(&y.time),
            (Some(_), None) => Ordering::Less,
            (None, _) => Ordering::Greater,
        };
        let event = match ordering {
            Ordering::Less => {
                i += 1;
                Event {
                    time: xs[i - 1].time,
                    x: Some(xs[i - 1].value),
                    y_true: None,
                }
            }
            Ordering::Greater => {
                j += 1;
                Event {
                    time: ys[j - 1].time,
                    x: None,
                    y_true: Some(ys[j - 1].value),
                }
            }
            Ordering::Equal => {
                i += 1;
                j += 1;
                Event {
                    time: xs[i - 1].time,
                    x: Some(xs[i - 1].value),
                    y_true: Some(ys[j - 1].value),
                }
            }
        };
        events.push(event);
    }
    events
}

/// Runs `learner` over the two streams. Returns one output tick per update.
pub fn run(
    learner: &mut OnlineLearner,
    xs: &Curve<f64>,
    ys: &Curve<f64>,
) -> Vec<Tick<UpdateResult>> {
    synchronize(xs, ys)
        .into_iter()
        .filter_map(|event| {
            let value = learner.step(event.x, event.y_true)?;
            Some(Tick {
                time: event.time,
                value,
            })
        })
        .collect()
}

/// Writes every output stream of every tick, as `<time> <name>:<value>`.
pub fn print_outputs(outputs: &[Tick<UpdateResult>], w: &mut impl io::Write) -> io::Result<()> {
    for tick in outputs {
        for (name, value) in tick.value.fields() {
            writeln!(w, "{} {name}:{value}", tick.time)?;
        }
    }
    Ok(())
}
