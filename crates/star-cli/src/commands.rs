use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use star_ingest::read_sales_records;
use star_model::StarTable;
use star_output::write_star_schema;
use star_transform::{KeyStrategy, TransformOptions, UnparsedDatePolicy, build_star_schema};

use crate::cli::{BuildArgs, TablesArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::{RunResult, TableSummary};

pub fn run_build(args: &BuildArgs) -> Result<RunResult> {
    let span = info_span!("build", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let records = read_sales_records(&args.input)?;
    let options = transform_options(args);
    let build = build_star_schema(&records, &options).context("build star schema")?;

    let output_dir = if args.dry_run {
        info!("dry run, no files written");
        None
    } else {
        Some(resolve_output_dir(args))
    };
    let paths = match &output_dir {
        Some(dir) => Some(write_star_schema(dir, &build.schema)?),
        None => None,
    };

    let tables = StarTable::ALL
        .iter()
        .map(|&table| TableSummary {
            table,
            rows: build.schema.row_count(table),
            path: paths
                .as_ref()
                .and_then(|paths| paths.get(table))
                .map(Path::to_path_buf),
        })
        .collect();

    let result = RunResult {
        input: args.input.clone(),
        output_dir,
        records: records.len(),
        options,
        tables,
        issues: build.report,
        elapsed_ms: start.elapsed().as_millis(),
    };

    if let Some(path) = &args.report {
        write_report(path, &result)?;
    }
    debug!(elapsed_ms = result.elapsed_ms, "build finished");
    Ok(result)
}

pub fn run_tables(args: &TablesArgs) -> Result<()> {
    let tables = match &args.table {
        Some(name) => vec![StarTable::from_str(name)?],
        None => StarTable::ALL.to_vec(),
    };
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Description"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    for star_table in tables {
        table.add_row(vec![
            star_table.name().to_string(),
            star_table.description().to_string(),
            star_table.columns().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn transform_options(args: &BuildArgs) -> TransformOptions {
    let unparsed_dates = if args.null_date_row {
        UnparsedDatePolicy::NullRow
    } else {
        UnparsedDatePolicy::Exclude
    };
    TransformOptions::new()
        .with_key_strategy(KeyStrategy::for_partitions(usize::from(args.partitions)))
        .with_unparsed_dates(unparsed_dates)
}

/// Tables land next to the input unless `--output-dir` says otherwise.
fn resolve_output_dir(args: &BuildArgs) -> PathBuf {
    if let Some(dir) = &args.output_dir {
        return dir.clone();
    }
    match args.input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn write_report(path: &Path, result: &RunResult) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, result)
        .with_context(|| format!("serialize report to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    info!(path = %path.display(), "wrote run report");
    Ok(())
}
