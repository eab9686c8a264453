//! Icon marker extraction from chat markup.
//!
//! Chat text embeds icons as `<img=N>`. This module pulls the numeric `N`
//! values back out in textual order. Parsing is total: malformed markup
//! yields fewer values, never an error.

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside any marker.
    Idle,
    /// Between `=` and `>`.
    Reading,
}

/// Digit accumulator for a single marker.
///
/// Accumulates negatively so the full magnitude `i32::MAX` stays reachable
/// without touching `i32::MIN`. Once a digit would push the value below
/// `-i32::MAX` the run is clamped and every further digit is dropped.
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    value: i32,
    clamped: bool,
}

impl Accumulator {
    const LIMIT: i32 = -i32::MAX;

    fn push_digit(&mut self, digit: u32) {
        if self.clamped {
            return;
        }

        // digit < 10, cast is lossless
        let next = self
            .value
            .checked_mul(10)
            .and_then(|v| v.checked_sub(digit as i32))
            .filter(|v| *v >= Self::LIMIT);

        match next {
            Some(v) => self.value = v,
            None => self.clamped = true,
        }
    }

    /// Sign-corrected value; never overflows because `value >= -i32::MAX`.
    fn finish(self) -> i32 {
        -self.value
    }
}

/// Extract every `=N>` icon index from `text`, in order.
///
/// - `=` starts reading; a second `=` before `>` keeps the digits read so far.
/// - While reading, ASCII digits accumulate and everything else except `>`
///   is skipped.
/// - `>` closes the marker and emits its value.
/// - A marker without a closing `>` emits nothing.
/// - Digit runs too long for `i32` keep the digits that fit.
///
/// ```
/// use pethover::parser::extract_icon_ids;
///
/// assert_eq!(extract_icon_ids("<img=12><img=40>"), vec![12, 40]);
/// assert!(extract_icon_ids("no icons here").is_empty());
/// ```
pub fn extract_icon_ids(text: &str) -> Vec<i32> {
    let mut ids = Vec::new();
    let mut state = ScanState::Idle;
    let mut acc = Accumulator::default();

    for c in text.chars() {
        match (state, c) {
            (_, '=') => state = ScanState::Reading,
            (ScanState::Reading, '>') => {
                ids.push(acc.finish());
                acc = Accumulator::default();
                state = ScanState::Idle;
            }
            (ScanState::Reading, c) => {
                if let Some(digit) = c.to_digit(10) {
                    acc.push_digit(digit);
                }
            }
            (ScanState::Idle, _) => {}
        }
    }

    ids
}
