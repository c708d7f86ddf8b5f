use std::collections::VecDeque;

use crate::data::MISSING_PRICE;

/// Rolling window of aligned per-symbol price series and one shared label axis.
///
/// Every series and the label sequence always have the same length, never more
/// than `capacity`. Overflow evicts the oldest tick from all of them at once.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBuffer {
    capacity: usize,
    origin_ms: u64,
    labels: VecDeque<String>,
    series: Vec<VecDeque<f64>>,
}

impl SeriesBuffer {
    /// `series_count` is fixed for the life of the buffer.
    pub fn new(series_count: usize, capacity: usize, origin_ms: u64) -> Self {
        Self {
            capacity,
            origin_ms,
            labels: VecDeque::with_capacity(capacity + 1),
            series: (0..series_count)
                .map(|_| VecDeque::with_capacity(capacity + 1))
                .collect(),
        }
    }

    /// Push one tick. `values[i]` feeds series `i`; missing values count as 0
    /// and extra values are ignored.
    pub fn append(&mut self, label: String, values: &[f64]) {
        self.labels.push_back(label);
        for (i, series) in self.series.iter_mut().enumerate() {
            series.push_back(values.get(i).copied().unwrap_or(MISSING_PRICE));
        }
        while self.labels.len() > self.capacity {
            self.labels.pop_front();
            for series in &mut self.series {
                series.pop_front();
            }
        }
        debug_assert!(self.series.iter().all(|s| s.len() == self.labels.len()));
    }

    /// Clear every sequence and restart the time origin at `now_ms`.
    pub fn reset(&mut self, now_ms: u64) -> u64 {
        self.labels.clear();
        for series in &mut self.series {
            series.clear();
        }
        self.origin_ms = now_ms;
        self.origin_ms
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn origin_ms(&self) -> u64 {
        self.origin_ms
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn labels(&self) -> &VecDeque<String> {
        &self.labels
    }

    pub fn series(&self, index: usize) -> Option<&VecDeque<f64>> {
        self.series.get(index)
    }

    pub fn latest(&self, index: usize) -> Option<f64> {
        self.series(index)?.back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(b: &SeriesBuffer, i: usize) -> Vec<f64> {
        b.series(i).unwrap().iter().copied().collect()
    }

    fn aligned(b: &SeriesBuffer) -> bool {
        (0..b.series_count()).all(|i| b.series(i).unwrap().len() == b.len())
    }

    #[test]
    fn lengths_stay_equal_and_bounded() {
        let mut b = SeriesBuffer::new(3, 20, 0);
        for tick in 0..57 {
            // Deliberately short and long value slices.
            let vals: Vec<f64> = (0..(tick % 5)).map(|v| v as f64).collect();
            b.append(format!("t{}", tick), &vals);
            assert!(aligned(&b));
            assert!(b.len() <= 20);
        }
        assert_eq!(b.len(), 20);
    }

    #[test]
    fn twenty_five_ticks_keep_ticks_six_to_twenty_five() {
        let mut b = SeriesBuffer::new(2, 20, 0);
        for tick in 1..=25 {
            b.append(format!("t{}", tick), &[tick as f64, -(tick as f64)]);
        }
        let expected: Vec<f64> = (6..=25).map(|t| t as f64).collect();
        assert_eq!(values(&b, 0), expected);
        assert_eq!(values(&b, 1), expected.iter().map(|v| -v).collect::<Vec<_>>());
        assert_eq!(b.labels().front().map(String::as_str), Some("t6"));
        assert_eq!(b.labels().back().map(String::as_str), Some("t25"));
    }

    #[test]
    fn missing_values_are_zero_filled() {
        let mut b = SeriesBuffer::new(3, 20, 0);
        b.append("a".into(), &[1.0]);
        assert_eq!(values(&b, 0), vec![1.0]);
        assert_eq!(values(&b, 2), vec![0.0]);
    }

    #[test]
    fn reset_then_appends_matches_fresh_buffer() {
        let mut used = SeriesBuffer::new(2, 20, 0);
        for tick in 0..30 {
            used.append(format!("old{}", tick), &[1.0, 2.0]);
        }
        assert_eq!(used.reset(500), 500);
        assert!(used.is_empty());
        assert!(aligned(&used));

        let mut fresh = SeriesBuffer::new(2, 20, 500);
        for tick in 0..7 {
            let label = format!("new{}", tick);
            used.append(label.clone(), &[tick as f64, 0.5]);
            fresh.append(label, &[tick as f64, 0.5]);
        }
        assert_eq!(used, fresh);
    }

    #[test]
    fn zero_series_buffer_still_tracks_labels() {
        let mut b = SeriesBuffer::new(0, 2, 0);
        b.append("a".into(), &[]);
        b.append("b".into(), &[]);
        b.append("c".into(), &[]);
        assert_eq!(b.len(), 2);
        assert_eq!(b.latest(0), None);
    }
}
