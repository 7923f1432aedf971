//! Passenger CSV loading
//!
//! Column names are matched after trimming and lowercasing, and a few common
//! alternative spellings are accepted:
//!
//! | Column | Also accepted as |
//! |--------|------------------|
//! | `pclass` | `class` |
//! | `sibsp` | `siblings_spouses`, `sib_sp` |
//! | `parch` | `parents_children`, `par_ch` |
//!
//! `pclass` and `sex` are always required. Each command also names the columns
//! its analysis reads, such as `survived` for survival rates, and a file
//! lacking one of them is rejected rather than read as all unknown. Columns no
//! command asked for may be absent. An absent column or an empty cell leaves
//! the attribute unknown (`age`, `survived`, `fare`, `name`) or zero (`sibsp`,
//! `parch`). Columns not listed here are ignored.

use std::{fs::File, io, path::Path};

use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, Trim};
use roster_analysis::{Dataset, Passenger};

/// Loads and validates the passenger CSV file at `path`.
///
/// `required` names the columns, besides `pclass` and `sex`, that the file
/// must contain.
pub fn load_dataset(path: &Path, required: &[&str]) -> anyhow::Result<Dataset> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open passenger file: {}", path.display()))?;
    let rows = read_passengers(io::BufReader::new(file), required)
        .with_context(|| format!("Failed to read passenger file: {}", path.display()))?;
    log::info!("loaded {} passengers from {}", rows.len(), path.display());
    let dataset = Dataset::new(rows)
        .with_context(|| format!("Invalid passenger data in {}", path.display()))?;
    Ok(dataset)
}

/// Parses passenger rows from CSV text with a header line.
///
/// Fails if the header lacks `pclass`, `sex` or any column in `required`.
pub fn read_passengers<R>(reader: R, required: &[&str]) -> anyhow::Result<Vec<Passenger>>
where
    R: io::Read,
{
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers().context("Failed to read CSV headers")?;
    let columns = Columns::from_headers(headers, required)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.context("Failed to read CSV record")?;
        let line = record.position().map_or(0, csv::Position::line);
        let passenger = columns
            .parse(&record)
            .with_context(|| format!("Invalid passenger on line {line}"))?;
        rows.push(passenger);
    }
    Ok(rows)
}

fn canonical_column_name(header: &str) -> String {
    let name = header.trim().to_lowercase();
    let canonical = match name.as_str() {
        "class" => "pclass",
        "siblings_spouses" | "sib_sp" => "sibsp",
        "parents_children" | "par_ch" => "parch",
        _ => return name,
    };
    canonical.to_owned()
}

/// Positions of the known columns in a record.
#[derive(Debug, Clone)]
struct Columns {
    pclass: usize,
    sex: usize,
    age: Option<usize>,
    survived: Option<usize>,
    sibsp: Option<usize>,
    parch: Option<usize>,
    fare: Option<usize>,
    name: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord, required: &[&str]) -> anyhow::Result<Self> {
        let names = headers
            .iter()
            .map(canonical_column_name)
            .collect::<Vec<_>>();
        let find = |column: &str| names.iter().position(|name| name == column);
        let require = |column: &str| {
            find(column).ok_or_else(|| anyhow::anyhow!("Missing required column: {column}"))
        };

        let pclass = require("pclass")?;
        let sex = require("sex")?;
        for column in required {
            require(column)?;
        }

        Ok(Self {
            pclass,
            sex,
            age: find("age"),
            survived: find("survived"),
            sibsp: find("sibsp"),
            parch: find("parch"),
            fare: find("fare"),
            name: find("name"),
        })
    }

    fn parse(&self, record: &StringRecord) -> anyhow::Result<Passenger> {
        let cell = |idx: Option<usize>| {
            idx.and_then(|idx| record.get(idx))
                .filter(|value| !value.trim().is_empty())
        };

        let pclass = cell(Some(self.pclass))
            .ok_or_else(|| anyhow::anyhow!("pclass is empty"))?
            .trim()
            .parse::<u8>()
            .context("pclass is not a class number")?;
        let sex = cell(Some(self.sex))
            .ok_or_else(|| anyhow::anyhow!("sex is empty"))?
            .trim()
            .to_lowercase();

        Ok(Passenger {
            pclass,
            sex,
            age: parse_optional(cell(self.age), "age")?,
            survived: cell(self.survived).map(parse_survived).transpose()?,
            sibsp: parse_optional(cell(self.sibsp), "sibsp")?.unwrap_or(0),
            parch: parse_optional(cell(self.parch), "parch")?.unwrap_or(0),
            fare: parse_optional(cell(self.fare), "fare")?,
            name: cell(self.name).map(str::to_owned),
        })
    }
}

fn parse_optional<T>(value: Option<&str>, column: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .with_context(|| format!("{column} has an invalid value: {value:?}"))
        })
        .transpose()
}

fn parse_survived(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => anyhow::bail!("survived must be 0, 1, true or false, got {value:?}"),
    }
}
