use std::collections::VecDeque;

use crate::domain::AccelerationSample;

/// Bounded acceleration history feeding the chart.
///
/// Oldest samples are evicted once `capacity` is reached.
#[derive(Clone, Debug)]
pub struct AccelerationHistory {
    samples: VecDeque<AccelerationSample>,
    capacity: usize,
}

impl AccelerationHistory {
    /// A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    pub fn push(&mut self, sample: AccelerationSample) {
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Shrinking drops the oldest samples that no longer fit.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn latest(&self) -> Option<&AccelerationSample> {
        self.samples.back()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn accelerations(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.acceleration).collect()
    }

    /// `[{"time": .., "acceleration": ..}, ...]`, oldest first
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.samples).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: f64) -> AccelerationSample {
        AccelerationSample { time, acceleration: time * 2.0 }
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut history = AccelerationHistory::new(3);
        for i in 0..5 {
            history.push(sample(i as f64));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.times(), vec![2.0, 3.0, 4.0]);
        assert_eq!(history.accelerations(), vec![4.0, 6.0, 8.0]);
        assert_eq!(history.latest(), Some(&sample(4.0)));
    }

    #[test]
    fn zero_capacity_keeps_latest_sample() {
        let mut history = AccelerationHistory::new(0);
        assert_eq!(history.capacity(), 1);
        history.push(sample(1.0));
        history.push(sample(2.0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), Some(&sample(2.0)));
    }

    #[test]
    fn shrinking_capacity_drops_oldest() {
        let mut history = AccelerationHistory::new(10);
        for i in 0..6 {
            history.push(sample(i as f64));
        }
        history.set_capacity(2);
        assert_eq!(history.times(), vec![4.0, 5.0]);
        history.set_capacity(8);
        history.push(sample(6.0));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn json_uses_chart_keys() {
        let mut history = AccelerationHistory::new(4);
        assert_eq!(history.to_json(), "[]");
        history.push(AccelerationSample { time: 0.5, acceleration: -1.25 });
        assert_eq!(history.to_json(), r#"[{"time":0.5,"acceleration":-1.25}]"#);
    }

    #[test]
    fn clear_empties_but_keeps_capacity() {
        let mut history = AccelerationHistory::new(4);
        history.push(sample(1.0));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 4);
    }
}
