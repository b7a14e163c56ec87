use crate::domain::model::StatsSnapshot;

pub const DEFAULT_WINDOW: usize = 10;

/// Mean and population standard deviation over a window of at most
/// `capacity` samples. Adding to a full window starts a fresh one.
#[derive(Debug, Clone)]
pub struct SequenceStats {
    numbers: Vec<f64>,
    capacity: usize,
}

impl Default for SequenceStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceStats {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_WINDOW)
    }

    /// 視窗至少容納一個樣本
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            numbers: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn add_number(&mut self, number: f64) {
        if self.numbers.len() >= self.capacity {
            tracing::debug!("Window of {} samples full, starting over", self.capacity);
            self.numbers.clear();
        }
        self.numbers.push(number);
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    pub fn count(&self) -> usize {
        self.numbers.len()
    }

    pub fn average(&self) -> Option<f64> {
        if self.numbers.is_empty() {
            return None;
        }
        let sum: f64 = self.numbers.iter().sum();
        Some(sum / self.numbers.len() as f64)
    }

    pub fn standard_deviation(&self) -> Option<f64> {
        let avg = self.average()?;
        let sum: f64 = self.numbers.iter().map(|x| (x - avg).powi(2)).sum();
        Some((sum / self.numbers.len() as f64).sqrt())
    }

    /// `count` 佔兩格，平均值與標準差取三位小數
    pub fn formatted_statistics(&self) -> String {
        format!(
            "{:>2} {:.3} {:.3}",
            self.count(),
            self.average().unwrap_or(f64::NAN),
            self.standard_deviation().unwrap_or(f64::NAN)
        )
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            count: self.count(),
            average: self.average(),
            standard_deviation: self.standard_deviation(),
            formatted: self.formatted_statistics(),
        }
    }
}
