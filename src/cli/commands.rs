use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

use chrono::Local;

use super::{views, CliError, USAGE};
use crate::{
    core::RecordStore,
    domain::NewRecord,
    utils::{build_info, format::export_file_name},
};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Vec<String>),
    Set {
        id: String,
        field: String,
        value: String,
    },
    Delete(String),
    Daily,
    Weekly,
    Monthly,
    Summary,
    Import(PathBuf),
    Export(Option<PathBuf>),
    Sample,
    Clear,
    Version,
    Help,
}

impl Command {
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let name = args.next().unwrap_or_else(|| "help".to_string());
        let mut required = |what: &str| {
            args.next()
                .ok_or_else(|| CliError::Usage(format!("`{}` needs {}\n{}", name, what, USAGE)))
        };

        let command = match name.as_str() {
            "add" => {
                let mut fields = Vec::new();
                while let Ok(value) = required("") {
                    fields.push(value);
                }
                Command::Add(fields)
            }
            "set" => Command::Set {
                id: required("a record id")?,
                field: required("a field name")?,
                value: required("a value")?,
            },
            "delete" => Command::Delete(required("a record id")?),
            "daily" | "list" => Command::Daily,
            "weekly" => Command::Weekly,
            "monthly" => Command::Monthly,
            "summary" => Command::Summary,
            "import" => Command::Import(PathBuf::from(required("a file path")?)),
            "export" => Command::Export(required("").ok().map(PathBuf::from)),
            "sample" => Command::Sample,
            "clear" => Command::Clear,
            "version" | "--version" | "-V" => Command::Version,
            "help" | "--help" | "-h" => Command::Help,
            other => {
                return Err(CliError::Usage(format!(
                    "unknown command `{}`\n{}",
                    other, USAGE
                )))
            }
        };
        Ok(command)
    }
}

fn new_record_from_args(fields: &[String]) -> NewRecord {
    let arg = |idx: usize| fields.get(idx).map(String::as_str).unwrap_or("");
    let mut record = NewRecord::from_raw(arg(0), arg(1), arg(2), arg(3), arg(4), arg(5));
    if record.date.is_empty() {
        record.date = Local::now().date_naive().format("%Y-%m-%d").to_string();
    }
    record
}

fn export_target(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(export_file_name(Local::now().date_naive()))
    } else {
        path.to_path_buf()
    }
}

/// Executes `command` against `store`, writing human-readable output to `out`.
pub fn run<W: Write>(
    command: Command,
    store: &mut RecordStore,
    out: &mut W,
    colour: bool,
) -> Result<(), CliError> {
    match command {
        Command::Add(fields) => {
            let id = store.add(new_record_from_args(&fields));
            writeln!(out, "Added record {}", id)?;
        }
        Command::Set { id, field, value } => {
            let id = store.resolve_id(&id)?;
            store.update_field(&id, &field, &value)?;
            writeln!(out, "Updated {} on {}", field, id)?;
        }
        Command::Delete(id) => {
            let id = store.resolve_id(&id)?;
            let removed = store.delete(&id)?;
            writeln!(out, "Deleted record {} ({})", removed.id, removed.date)?;
        }
        Command::Daily => {
            writeln!(out, "{}", views::daily_table(&store.report().daily, colour))?;
        }
        Command::Weekly => {
            writeln!(out, "{}", views::weekly_table(&store.report().weekly, colour))?;
        }
        Command::Monthly => {
            writeln!(out, "{}", views::monthly_table(&store.report().monthly, colour))?;
        }
        Command::Summary => {
            let text = views::dashboard_lines(&store.dashboard(), store.goal(), colour);
            writeln!(out, "{}", text)?;
        }
        Command::Import(path) => {
            let file = File::open(&path)?;
            let report = store.import_csv(BufReader::new(file))?;
            writeln!(
                out,
                "Imported {} records from {} ({} rows without a date skipped)",
                report.imported,
                path.display(),
                report.dropped
            )?;
        }
        Command::Export(None) => {
            store.write_csv(out)?;
            writeln!(out)?;
        }
        Command::Export(Some(path)) => {
            let target = export_target(&path);
            let mut file = File::create(&target)?;
            store.write_csv(&mut file)?;
            writeln!(out, "Exported {} records to {}", store.len(), target.display())?;
        }
        Command::Sample => {
            store.load_sample();
            writeln!(out, "Loaded {} days of sample data", store.len())?;
        }
        Command::Clear => {
            let count = store.len();
            store.clear();
            writeln!(out, "Cleared {} records", count)?;
        }
        Command::Version => {
            writeln!(out, "{}", build_info::current().summary_line())?;
        }
        Command::Help => {
            writeln!(out, "{}", USAGE)?;
        }
    }
    Ok(())
}
