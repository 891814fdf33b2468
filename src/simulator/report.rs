//! Simulation report generation.

use serde::Serialize;

/// Stats collected from one simulated run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub cleared: bool,
    pub died: bool,
    pub timed_out: bool,
    pub total_ticks: u64,
    pub attacks: u64,
    /// Resolved targets, hits plus misses.
    pub swings_resolved: u64,
    pub hits: u64,
    pub empty_swings: u64,
    pub kills: u32,
    pub heals: u32,
    pub multiply_count: u32,
    pub final_number: i64,
    pub final_lives: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_cleared: u32,
    pub runs_died: u32,
    pub runs_timed_out: u32,

    pub hit_rate: f64,
    pub avg_kills: f64,
    pub avg_heals: f64,
    pub avg_multiply_count: f64,
    pub avg_final_number: f64,
    pub avg_ticks: f64,
    pub max_final_number: i64,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;
        let avg = |f: fn(&RunStats) -> f64| runs.iter().map(f).sum::<f64>() / denom;

        let swings: u64 = runs.iter().map(|r| r.swings_resolved).sum();
        let hits: u64 = runs.iter().map(|r| r.hits).sum();

        Self {
            num_runs,
            runs_cleared: runs.iter().filter(|r| r.cleared).count() as u32,
            runs_died: runs.iter().filter(|r| r.died).count() as u32,
            runs_timed_out: runs.iter().filter(|r| r.timed_out).count() as u32,
            hit_rate: if swings == 0 {
                0.0
            } else {
                hits as f64 / swings as f64
            },
            avg_kills: avg(|r| r.kills as f64),
            avg_heals: avg(|r| r.heals as f64),
            avg_multiply_count: avg(|r| r.multiply_count as f64),
            avg_final_number: avg(|r| r.final_number as f64),
            avg_ticks: avg(|r| r.total_ticks as f64),
            max_final_number: runs.iter().map(|r| r.final_number).max().unwrap_or(0),
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let pct = |n: u32| n as f64 / self.num_runs.max(1) as f64 * 100.0;
        let mut out = String::new();
        out.push_str("RESULTS\n");
        out.push_str("───────────────────────────────────────\n");
        out.push_str(&format!("  Runs:              {}\n", self.num_runs));
        out.push_str(&format!(
            "  Cleared:           {} ({:.1}%)\n",
            self.runs_cleared,
            pct(self.runs_cleared)
        ));
        out.push_str(&format!(
            "  Died:              {} ({:.1}%)\n",
            self.runs_died,
            pct(self.runs_died)
        ));
        out.push_str(&format!(
            "  Timed out:         {} ({:.1}%)\n",
            self.runs_timed_out,
            pct(self.runs_timed_out)
        ));
        out.push_str(&format!("  Hit rate:          {:.3}\n", self.hit_rate));
        out.push_str(&format!("  Avg kills:         {:.2}\n", self.avg_kills));
        out.push_str(&format!("  Avg heals:         {:.2}\n", self.avg_heals));
        out.push_str(&format!(
            "  Avg multiplies:    {:.2}\n",
            self.avg_multiply_count
        ));
        out.push_str(&format!(
            "  Avg final number:  {:.1}\n",
            self.avg_final_number
        ));
        out.push_str(&format!("  Max final number:  {}\n", self.max_final_number));
        out.push_str(&format!("  Avg ticks:         {:.0}\n", self.avg_ticks));
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregates() {
        let runs = vec![
            RunStats {
                cleared: true,
                swings_resolved: 10,
                hits: 6,
                kills: 3,
                final_number: 20,
                ..RunStats::default()
            },
            RunStats {
                died: true,
                swings_resolved: 10,
                hits: 4,
                kills: 1,
                final_number: 4,
                ..RunStats::default()
            },
        ];
        let report = SimReport::from_runs(runs);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_cleared, 1);
        assert_eq!(report.runs_died, 1);
        assert!((report.hit_rate - 0.5).abs() < 1e-9);
        assert!((report.avg_kills - 2.0).abs() < 1e-9);
        assert_eq!(report.max_final_number, 20);
        assert!(report.to_text().contains("Hit rate:          0.500"));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.hit_rate, 0.0);
        assert!(report.to_json().contains("\"num_runs\": 0"));
    }
}
