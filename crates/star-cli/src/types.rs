use std::path::PathBuf;

use serde::Serialize;

use star_model::StarTable;
use star_transform::{BuildReport, TransformOptions};

/// Row count and written file of one output table.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub table: StarTable,
    pub rows: usize,
    /// `None` on a dry run.
    pub path: Option<PathBuf>,
}

/// Outcome of one `build` run, also serialized for `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub records: usize,
    pub options: TransformOptions,
    pub tables: Vec<TableSummary>,
    pub issues: BuildReport,
    pub elapsed_ms: u128,
}

impl RunResult {
    pub fn table(&self, table: StarTable) -> Option<&TableSummary> {
        self.tables.iter().find(|summary| summary.table == table)
    }

    pub fn dry_run(&self) -> bool {
        self.output_dir.is_none()
    }
}
