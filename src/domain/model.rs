use serde::Serialize;

/// 暴力破解結果
#[derive(Debug, Clone, Serialize)]
pub struct CrackOutcome {
    pub opened: bool,
    pub attempts: u64,
    pub search_space: Option<u128>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueueSnapshot {
    pub capacity: usize,
    pub size: usize,
    pub elements: Vec<String>,
    pub rejected: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub count: usize,
    pub average: Option<f64>,
    pub standard_deviation: Option<f64>,
    pub formatted: String,
}
