// Command line surface.
//
// Purpose
// - Run one report against an export on disk and write its sheets to a directory, or print
//   them when no directory is given.

use crate::modules::efficiency::use_cases::employee_efficiency::report::employee_efficiency;
use crate::modules::efficiency::use_cases::item_efficiency::report::item_efficiency;
use crate::modules::efficiency::use_cases::operation_efficiency::report::operation_efficiency;
use crate::modules::idle_time::use_cases::create_summary::handler::CreateSummaryHandler;
use crate::modules::idle_time::use_cases::mean_idle_time::handler::MeanIdleTimeHandler;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::table::InputTable;
use crate::shared::infrastructure::report_sink::csv_directory::CsvDirectorySink;
use crate::shared::infrastructure::report_sink::in_memory::InMemoryReportSink;
use crate::shared::infrastructure::report_sink::{ReportSink, Sheet};
use crate::shell::config::ReportConfig;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "idle_time_report",
    about = "Idle time, overtime and efficiency reports for timeclock exports"
)]
pub struct Cli {
    /// TOML file with report constants (falls back to IDLE_REPORT_CONFIG, then defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the extensive, daily, weekly and overall idle time sheets
    IdleSummary {
        /// Timeclock export (CSV)
        input: PathBuf,
        /// Directory receiving one CSV file per sheet
        #[arg(long)]
        out: PathBuf,
    },
    /// Mean idle time per team member
    MeanIdle {
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Planned against clocked hours per employee
    EmployeeEfficiency {
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Estimated against actual hours per operation
    OperationEfficiency {
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Per-unit efficiency per make item
    ItemEfficiency {
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serve the reports over HTTP
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: SocketAddr,
        /// Directory receiving the sheets of every summary request
        #[arg(long, default_value = "reports")]
        out: PathBuf,
    },
}

/// Runs every command except `serve`, which the binary owns.
pub async fn execute(command: Command, config: &ReportConfig) -> Result<(), ApplicationError> {
    match command {
        Command::IdleSummary { input, out } => {
            let table = InputTable::from_path(&input)?;
            let sink = Arc::new(CsvDirectorySink::new(&out));
            CreateSummaryHandler::new(Arc::new(config.idle_time.clone()), sink)
                .handle(&table)
                .await?;
            println!("Summary files created in {}", out.display());
            Ok(())
        }
        Command::MeanIdle { input, out } => {
            let table = InputTable::from_path(&input)?;
            match out {
                Some(out) => {
                    let sink = Arc::new(CsvDirectorySink::new(&out));
                    let mean = MeanIdleTimeHandler::new(Arc::new(config.idle_time.clone()), sink)
                        .handle(&table)
                        .await?;
                    println!("{} written to {}", mean.title, out.display());
                }
                None => {
                    let sink = Arc::new(InMemoryReportSink::new());
                    let handler =
                        MeanIdleTimeHandler::new(Arc::new(config.idle_time.clone()), sink.clone());
                    let mean = handler.handle(&table).await?;
                    println!("{}", mean.title);
                    print_sheets(sink.sheets.lock().await.iter());
                }
            }
            Ok(())
        }
        Command::EmployeeEfficiency { input, out } => {
            let report = employee_efficiency(&InputTable::from_path(&input)?, &config.efficiency)?;
            emit(report.sheets()?, out.as_deref()).await
        }
        Command::OperationEfficiency { input, out } => {
            let report = operation_efficiency(&InputTable::from_path(&input)?, &config.efficiency)?;
            emit(report.sheets()?, out.as_deref()).await
        }
        Command::ItemEfficiency { input, out } => {
            let report = item_efficiency(&InputTable::from_path(&input)?, &config.efficiency)?;
            emit(report.sheets()?, out.as_deref()).await
        }
        Command::Serve { .. } => Err(ApplicationError::Unexpected(
            "serve is handled by the binary".into(),
        )),
    }
}

async fn emit(sheets: Vec<Sheet>, out: Option<&Path>) -> Result<(), ApplicationError> {
    match out {
        Some(dir) => {
            let sink = CsvDirectorySink::new(dir);
            for sheet in sheets {
                sink.write_sheet(sheet).await?;
            }
            println!("Summary files created in {}", dir.display());
        }
        None => print_sheets(sheets.iter()),
    }
    Ok(())
}

fn print_sheets<'a>(sheets: impl Iterator<Item = &'a Sheet>) {
    for sheet in sheets {
        println!("== {} ({} rows)", sheet.name, sheet.rows);
        print!("{}", sheet.as_text());
    }
}
