use anyhow::Context;
use anyhow::Result;
use chrono::Local;
use clap::Parser;
use clap::Subcommand;
use mobilserv_converter::convert::DEFAULT_INPUT_SHEET;
use mobilserv_converter::layout::ColumnKind;
use mobilserv_converter::read_output;
use mobilserv_converter::ConvertOptions;
use mobilserv_converter::ConvertedDocument;
use mobilserv_converter::Layout;
use mobilserv_converter::NumericFallback;
use std::path::Path;
use std::path::PathBuf;
use tracing::info;

/// Converts Smart Assistance exports into MobilServ imports
#[derive(Parser, Debug)]
#[command(name = "mobilserv-converter", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a Smart Assistance workbook
    Convert {
        /// Input workbook (.xlsx or .xlsm)
        input: PathBuf,

        /// Output file, defaults to ExportMobilServ_<timestamp>.xlsx next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input sheet name or glob pattern
        #[arg(long, env = "MOBILSERV_SHEET", default_value = DEFAULT_INPUT_SHEET)]
        sheet: String,

        /// Leading rows to drop before remapping
        #[arg(long, env = "MOBILSERV_SKIP_ROWS", default_value_t = 0)]
        skip_rows: usize,

        /// Value of integer and decimal cells that cannot be converted: missing or zero
        #[arg(long, default_value = "missing")]
        numeric_fallback: NumericFallback,

        /// Print the first N converted rows
        #[arg(long, value_name = "N")]
        preview: Option<usize>,
    },

    /// Print statistics of a converted workbook
    Inspect {
        file: PathBuf,
    },

    /// Print the move rules and typed columns
    Layout,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let layout = Layout::mobilserv().context("Built-in layout is invalid")?;
    match cli.command {
        Commands::Convert {
            input,
            output,
            sheet,
            skip_rows,
            numeric_fallback,
            preview,
        } => {
            let options = ConvertOptions {
                sheet,
                skip_rows,
                numeric_fallback,
                ..ConvertOptions::default()
            };
            run_convert(&input, output, &options, preview, layout)
        }
        Commands::Inspect { file } => run_inspect(&file, layout),
        Commands::Layout => run_layout(layout),
    }
}

fn run_convert(input: &Path, output: Option<PathBuf>, options: &ConvertOptions, preview: Option<usize>, layout: &Layout) -> Result<()> {
    let document = mobilserv_converter::convert_file(input, layout, options)
        .with_context(|| format!("Failed to convert '{}'", input.display()))?;

    let output = output.unwrap_or_else(|| default_output_path(input));
    std::fs::write(&output, &document.bytes).with_context(|| format!("Failed to write '{}'", output.display()))?;
    info!(output = %output.display(), "conversion finished");

    let summary = &document.summary;
    println!("Rows processed:    {}", summary.rows);
    println!("Output columns:    {}", summary.columns);
    println!("Rules applied:     {} ({} skipped)", summary.rules_applied, summary.rules_skipped);
    println!("Coercion failures: {}", summary.coercion_failures);
    println!("Output file:       {}", output.display());
    for warning in &document.warnings {
        eprintln!("warning: {warning}");
    }
    if let Some(count) = preview {
        print_preview(&document, count);
    }
    Ok(())
}

/// `ExportMobilServ_<YYYYmmdd_HHMMSS>.xlsx` in the input's directory.
fn default_output_path(input: &Path) -> PathBuf {
    let name = format!("ExportMobilServ_{}.xlsx", Local::now().format("%Y%m%d_%H%M%S"));
    input.parent().map(|parent| parent.join(&name)).unwrap_or_else(|| PathBuf::from(name))
}

/// Prints the non-blank cells of the first `count` rows.
fn print_preview(document: &ConvertedDocument, count: usize) {
    let table = &document.table;
    for (index, row) in table.rows().iter().take(count).enumerate() {
        println!();
        println!("Row {}", index + 1);
        for (header, value) in table.headers().iter().zip(row) {
            if !value.is_blank() {
                println!("  {header}: {value}");
            }
        }
    }
}

fn run_inspect(file: &Path, layout: &Layout) -> Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("Failed to read '{}'", file.display()))?;
    let table = read_output(bytes, layout).with_context(|| format!("Failed to read '{}'", file.display()))?;

    println!("Rows:    {}", table.row_count());
    println!("Columns: {}", table.width());
    for col in 0..table.width() {
        if let Some(kind) = layout.column_kind(col) {
            let missing = table.column(col).filter(|value| value.is_missing()).count();
            if missing > 0 {
                println!("  {} ({kind}): {missing} missing", table.headers()[col]);
            }
        }
    }
    Ok(())
}

fn run_layout(layout: &Layout) -> Result<()> {
    println!("Move rules:");
    for rule in layout.rules() {
        let (_, header) = layout.describe(rule.destination);
        println!("  {:>3} -> {:<3} {}", rule.source_address, rule.destination_address, header.unwrap_or("-"));
    }
    for kind in [ColumnKind::Integer, ColumnKind::Decimal] {
        println!("{kind} columns:");
        for position in layout.positions(kind) {
            let (address, header) = layout.describe(position);
            println!("  {:<3} {}", address, header.unwrap_or("-"));
        }
    }
    println!("date columns:");
    for name in layout.date_columns() {
        println!("  {name}");
    }
    Ok(())
}
