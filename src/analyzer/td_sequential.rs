// TD Sequential-style exhaustion detector: a 9-day setup phase followed by a
// 13-day countdown phase, both driven by lagged close comparisons.
use crate::config::{COUNTDOWN_LAG, COUNTDOWN_TARGET, SETUP_LAG, SETUP_TARGET};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    SetupComplete,
    CountdownComplete,
}

/// One completed phase. `day` is 1-based and relative to the filtered close
/// sequence handed to `detect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalEvent {
    pub day: usize,
    pub kind: SignalKind,
    pub direction: Direction,
}

impl fmt::Display for SignalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SignalKind::SetupComplete => {
                write!(f, "Setup complete at day {}: {} phase", self.day, self.direction.label())
            }
            SignalKind::CountdownComplete => write!(
                f,
                "Signal activated at day {}: {} - {} sustainably!",
                self.day,
                self.direction.label(),
                self.direction.label()
            ),
        }
    }
}

/// The two mutually-exclusive counting stages. Setup counting only runs while
/// no countdown is active; a completed countdown drops back to an empty setup.
#[derive(Debug, Clone, Copy)]
enum Phase {
    Setup { count: u32, direction: Option<Direction> },
    Countdown { direction: Direction, count: u32 },
}

/// Scans an ordered close sequence and returns every completed setup and
/// countdown, in order. All state is local to the call.
pub fn detect(closes: &[f64]) -> Vec<SignalEvent> {
    let mut events = Vec::new();
    let mut phase = Phase::Setup { count: 0, direction: None };

    for i in 0..closes.len() {
        let lower_close = i >= SETUP_LAG && closes[i] < closes[i - SETUP_LAG];
        let higher_close = i >= SETUP_LAG && closes[i] > closes[i - SETUP_LAG];

        if let Phase::Setup { count, direction } = phase {
            // A direction flip restarts the count at 1; a day that qualifies
            // in neither direction cancels the run outright.
            let (count, direction) = if lower_close {
                let count = if direction == Some(Direction::Buy) { count + 1 } else { 1 };
                (count, Some(Direction::Buy))
            } else if higher_close {
                let count = if direction == Some(Direction::Sell) { count + 1 } else { 1 };
                (count, Some(Direction::Sell))
            } else {
                (0, None)
            };

            phase = match direction {
                Some(direction) if count >= SETUP_TARGET => {
                    events.push(SignalEvent {
                        day: i + 1,
                        kind: SignalKind::SetupComplete,
                        direction,
                    });
                    Phase::Countdown { direction, count: 0 }
                }
                _ => Phase::Setup { count, direction },
            };
        }

        // Checked on the same index a setup just completed on, so a day can
        // both finish the setup and score the first countdown point.
        if let Phase::Countdown { direction, count } = phase {
            let qualifies = i >= COUNTDOWN_LAG
                && match direction {
                    Direction::Buy => closes[i] < closes[i - COUNTDOWN_LAG],
                    Direction::Sell => closes[i] > closes[i - COUNTDOWN_LAG],
                };
            let count = if qualifies { count + 1 } else { count };

            phase = if count >= COUNTDOWN_TARGET {
                events.push(SignalEvent {
                    day: i + 1,
                    kind: SignalKind::CountdownComplete,
                    direction,
                });
                Phase::Setup { count: 0, direction: None }
            } else {
                Phase::Countdown { direction, count }
            };
        }
    }

    events
}
