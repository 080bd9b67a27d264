use nalgebra as na;
use std::collections::VecDeque;

/// Append-only log of satellite positions, one entry per completed step.
///
/// With a capacity set, the oldest entries are evicted once the log is full,
/// so long runs stay bounded. The integrator only ever writes to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionHistory {
    positions: VecDeque<na::Vector2<f64>>,
    capacity: Option<usize>,
    evicted: usize,
}

impl PositionHistory {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A capacity of zero means unbounded.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: VecDeque::with_capacity(capacity),
            capacity: (capacity > 0).then_some(capacity),
            evicted: 0,
        }
    }

    pub fn push(&mut self, position: na::Vector2<f64>) {
        if let Some(capacity) = self.capacity {
            while self.positions.len() >= capacity {
                self.positions.pop_front();
                self.evicted += 1;
            }
        }
        self.positions.push_back(position);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of entries dropped from the front since the log was created.
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    pub fn last(&self) -> Option<&na::Vector2<f64>> {
        self.positions.back()
    }

    pub fn get(&self, index: usize) -> Option<&na::Vector2<f64>> {
        self.positions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &na::Vector2<f64>> + '_ {
        self.positions.iter()
    }

    pub fn to_vec(&self) -> Vec<na::Vector2<f64>> {
        self.positions.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_keeps_everything_in_order() {
        let mut history = PositionHistory::unbounded();
        for i in 0..100 {
            history.push(na::Vector2::new(i as f64, 0.0));
        }
        assert_eq!(history.len(), 100);
        assert_eq!(history.evicted(), 0);
        assert_eq!(history.get(0), Some(&na::Vector2::new(0.0, 0.0)));
        assert_eq!(history.last(), Some(&na::Vector2::new(99.0, 0.0)));
    }

    #[test]
    fn capped_history_evicts_oldest() {
        let mut history = PositionHistory::with_capacity(3);
        for i in 0..5 {
            history.push(na::Vector2::new(i as f64, -(i as f64)));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.evicted(), 2);
        let xs: Vec<f64> = history.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_capacity_is_unbounded() {
        let mut history = PositionHistory::with_capacity(0);
        assert_eq!(history.capacity(), None);
        for _ in 0..10 {
            history.push(na::Vector2::zeros());
        }
        assert_eq!(history.len(), 10);
    }
}
