use serde::{Deserialize, Serialize};

/// Minutes in a day; the largest value an interval end may take.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A half-open time range `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    start: u32,
    end: u32,
}

impl Interval {
    /// Builds an interval. Returns `None` unless `start < end <= 24:00`.
    pub fn new(start: u32, end: u32) -> Option<Self> {
        if start < end && end <= MINUTES_PER_DAY {
            Some(Self { start, end })
        } else {
            None
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Two intervals that only share an endpoint do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u32, end: u32) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        assert!(Interval::new(600, 600).is_none());
        assert!(Interval::new(700, 600).is_none());
        assert!(Interval::new(1400, MINUTES_PER_DAY + 1).is_none());
        assert!(Interval::new(1380, MINUTES_PER_DAY).is_some());
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let a = iv(540, 600);
        let b = iv(600, 660);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn partial_and_nested_overlap() {
        let a = iv(540, 660);
        assert!(a.overlaps(&iv(600, 720)));
        assert!(a.overlaps(&iv(560, 580)));
        assert!(iv(560, 580).overlaps(&a));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn disjoint_intervals() {
        assert!(!iv(540, 600).overlaps(&iv(780, 840)));
    }
}
