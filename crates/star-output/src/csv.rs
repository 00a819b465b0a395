//! CSV output generation.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{debug, info};

use star_model::{StarSchema, StarTable};
use star_transform::star_frames;

/// Files written by one run, keyed by table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub tables: BTreeMap<StarTable, PathBuf>,
}

impl OutputPaths {
    pub fn get(&self, table: StarTable) -> Option<&Path> {
        self.tables.get(&table).map(PathBuf::as_path)
    }
}

/// Path of `table`'s CSV file inside `output_dir`.
pub fn table_path(output_dir: &Path, table: StarTable) -> PathBuf {
    output_dir.join(format!("{}.csv", table.name()))
}

/// Writes one DataFrame as CSV with a header row, replacing any existing file.
///
/// Null cells are written as empty fields.
pub fn write_table_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    CsvWriter::new(&mut writer)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Writes every table of the schema into `output_dir`.
pub fn write_star_schema(output_dir: &Path, schema: &StarSchema) -> Result<OutputPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let frames = star_frames(schema).context("convert star schema to frames")?;
    let mut outputs = OutputPaths::default();
    for (table, mut df) in frames {
        let path = table_path(output_dir, table);
        write_table_csv(&path, &mut df)?;
        debug!(
            table = %table,
            row_count = df.height(),
            path = %path.display(),
            "table written"
        );
        outputs.tables.insert(table, path);
    }
    info!(
        output_dir = %output_dir.display(),
        table_count = outputs.tables.len(),
        "star schema written"
    );
    Ok(outputs)
}
