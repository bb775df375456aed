use super::TableError;
use crate::model::{OdPair, SelfPairPolicy, TravelTimeRow, GRID_CELLS};
use csv::StringRecord;
use itertools::Itertools;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const ORIGIN_COLUMN: &str = "Origin";
pub const DESTINATION_COLUMN: &str = "Destination";
/// position of the first of the 49 value columns
pub const VALUE_OFFSET: usize = 2;

/// every travel time row of a dataset, indexed by origin-destination pair
#[derive(Debug, Clone, Default)]
pub struct TravelTimeTable {
    rows: Vec<TravelTimeRow>,
    lookup: HashMap<OdPair, usize>,
}

impl TravelTimeTable {
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        log::info!("reading travel time table from {}", path.to_string_lossy());
        Self::from_reader(file)
    }

    /// reads a table with a header row. origin and destination are found by
    /// name, the 49 values are the columns following the first two. any
    /// columns after those are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        let header_lookup = headers
            .iter()
            .enumerate()
            .map(|(i, s)| (s.trim(), i))
            .collect::<HashMap<_, _>>();
        let origin_idx = *header_lookup
            .get(ORIGIN_COLUMN)
            .ok_or_else(|| TableError::MissingColumn(ORIGIN_COLUMN.to_string()))?;
        let destination_idx = *header_lookup
            .get(DESTINATION_COLUMN)
            .ok_or_else(|| TableError::MissingColumn(DESTINATION_COLUMN.to_string()))?;
        if headers.len() > VALUE_OFFSET + GRID_CELLS {
            log::warn!(
                "travel time table has {} columns, ignoring everything after column {}",
                headers.len(),
                VALUE_OFFSET + GRID_CELLS
            );
        }

        let mut table = TravelTimeTable::default();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            if record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            let row = parse_row(&record, line, origin_idx, destination_idx)?;
            table.insert(row, line);
        }
        log::info!(
            "loaded {} travel time rows across {} locations",
            table.len(),
            table.locations().len()
        );
        Ok(table)
    }

    fn insert(&mut self, row: TravelTimeRow, line: u64) {
        let pair = row.pair();
        if self.lookup.contains_key(&pair) {
            log::warn!("duplicate row for {pair} on line {line}, keeping the first one");
            return;
        }
        self.lookup.insert(pair, self.rows.len());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[TravelTimeRow] {
        &self.rows
    }

    pub fn get(&self, origin: &str, destination: &str) -> Option<&TravelTimeRow> {
        self.lookup
            .get(&OdPair::new(origin, destination))
            .and_then(|idx| self.rows.get(*idx))
    }

    /// sorted unique origins
    pub fn origins(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.origin.clone())
            .sorted()
            .dedup()
            .collect_vec()
    }

    /// sorted unique destinations
    pub fn destinations(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.destination.clone())
            .sorted()
            .dedup()
            .collect_vec()
    }

    /// sorted union of origins and destinations
    pub fn locations(&self) -> Vec<String> {
        self.rows
            .iter()
            .flat_map(|r| [r.origin.clone(), r.destination.clone()])
            .sorted()
            .dedup()
            .collect_vec()
    }

    /// every value of every row, as recorded
    pub fn all_values(&self) -> Vec<f64> {
        self.all_values_with(SelfPairPolicy::AsRecorded)
    }

    /// every value of every row after applying a self pair policy, so the
    /// color domain matches what is drawn
    pub fn all_values_with(&self, policy: SelfPairPolicy) -> Vec<f64> {
        self.rows
            .iter()
            .flat_map(|r| policy.values(r).into_owned())
            .collect_vec()
    }
}

fn parse_row(
    record: &StringRecord,
    line: u64,
    origin_idx: usize,
    destination_idx: usize,
) -> Result<TravelTimeRow, TableError> {
    let field = |idx: usize, name: &str| {
        record
            .get(idx)
            .map(|s| s.trim())
            .ok_or_else(|| TableError::MalformedRow {
                line,
                msg: format!("missing {name} field"),
            })
    };
    let origin = field(origin_idx, ORIGIN_COLUMN)?;
    let destination = field(destination_idx, DESTINATION_COLUMN)?;

    let found = record.len().saturating_sub(VALUE_OFFSET).min(GRID_CELLS);
    if found < GRID_CELLS {
        return Err(TableError::MalformedRow {
            line,
            msg: format!("expected {GRID_CELLS} values, found {found}"),
        });
    }
    let values = record
        .iter()
        .skip(VALUE_OFFSET)
        .take(GRID_CELLS)
        .enumerate()
        .map(|(i, s)| parse_value(s.trim(), line, VALUE_OFFSET + i))
        .collect::<Result<Vec<_>, _>>()?;

    TravelTimeRow::new(origin, destination, values).map_err(|e| TableError::MalformedRow {
        line,
        msg: e.to_string(),
    })
}

/// empty cells are missing values. anything else must be a finite number.
fn parse_value(field: &str, line: u64, column: usize) -> Result<f64, TableError> {
    if field.is_empty() {
        return Ok(f64::NAN);
    }
    let value = field.parse::<f64>().map_err(|e| TableError::MalformedRow {
        line,
        msg: format!("column {column} value '{field}' is not a number: {e}"),
    })?;
    if !value.is_finite() {
        return Err(TableError::MalformedRow {
            line,
            msg: format!("column {column} value '{field}' is not a finite number"),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn header() -> String {
        let values = (0..49).map(|i| format!("v{i}")).join(",");
        format!("Origin,Destination,{values}")
    }

    fn row(origin: &str, destination: &str, base: f64, count: usize) -> String {
        let values = (0..count).map(|i| format!("{}", base + i as f64)).join(",");
        format!("{origin},{destination},{values}")
    }

    fn csv_of(rows: &[String]) -> String {
        format!("{}\n{}\n", header(), rows.join("\n"))
    }

    #[test]
    fn test_load_and_lookup() {
        let data = csv_of(&[
            row("Chicago", "Detroit", 0.0, 49),
            row("Toronto", "Buffalo", 100.0, 49),
            row("Chicago", "Chicago", 1.0, 49),
        ]);
        let table = TravelTimeTable::from_reader(data.as_bytes()).expect("should load table");
        assert_eq!(table.len(), 3);
        let r = table.get("Toronto", "Buffalo").expect("pair should exist");
        assert_eq!(r.values()[0], 100.0);
        assert_eq!(r.values()[48], 148.0);
        assert!(table.get("Buffalo", "Toronto").is_none());
        assert_eq!(table.origins(), vec!["Chicago", "Toronto"]);
        assert_eq!(table.destinations(), vec!["Buffalo", "Chicago", "Detroit"]);
        assert_eq!(
            table.locations(),
            vec!["Buffalo", "Chicago", "Detroit", "Toronto"]
        );
        assert_eq!(table.all_values().len(), 147);
        let zeroed = table.all_values_with(SelfPairPolicy::Zeros);
        assert_eq!(zeroed.iter().filter(|v| **v == 0.0).count(), 50);
    }

    #[test]
    fn test_forty_value_row_fails() {
        let data = csv_of(&[
            row("Chicago", "Detroit", 0.0, 49),
            row("Detroit", "Chicago", 0.0, 40),
        ]);
        match TravelTimeTable::from_reader(data.as_bytes()) {
            Err(TableError::MalformedRow { line, msg }) => {
                assert_eq!(line, 3);
                assert!(msg.contains("found 40"), "unexpected message {msg}");
            }
            other => panic!("expected MalformedRow, found {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_value_fails() {
        let mut bad = row("Chicago", "Detroit", 0.0, 48);
        bad.push_str(",fast");
        let data = csv_of(&[bad]);
        assert!(matches!(
            TravelTimeTable::from_reader(data.as_bytes()),
            Err(TableError::MalformedRow { line: 2, .. })
        ));
    }

    #[test]
    fn test_non_finite_values_fail() {
        for bad in ["inf", "-inf", "Infinity", "NaN"] {
            let mut values = vec![String::from("2.5"); 49];
            values[0] = String::from(bad);
            let data = csv_of(&[format!("Hamilton,Windsor,{}", values.join(","))]);
            match TravelTimeTable::from_reader(data.as_bytes()) {
                Err(TableError::MalformedRow { line, msg }) => {
                    assert_eq!(line, 2);
                    assert!(msg.contains(bad), "unexpected message {msg}");
                }
                other => panic!("'{bad}' should be rejected, found {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_fields_are_missing() {
        let mut values = vec![String::from("2.5"); 49];
        values[10] = String::new();
        let data = csv_of(&[format!("Hamilton,Windsor,{}", values.join(","))]);
        let table = TravelTimeTable::from_reader(data.as_bytes()).expect("should load table");
        let r = table.get("Hamilton", "Windsor").expect("pair should exist");
        assert!(r.values()[10].is_nan());
        assert_eq!(r.values()[11], 2.5);
    }

    #[test]
    fn test_extra_columns_ignored_and_duplicates_keep_first() {
        let data = csv_of(&[
            row("Duluth", "Montreal", 5.0, 52),
            row("Duluth", "Montreal", 500.0, 49),
        ]);
        let table = TravelTimeTable::from_reader(data.as_bytes()).expect("should load table");
        assert_eq!(table.len(), 1);
        let r = table.get("Duluth", "Montreal").expect("pair should exist");
        assert_eq!(r.values().len(), 49);
        assert_eq!(r.values()[0], 5.0);
    }

    #[test]
    fn test_missing_column() {
        let data = "From,Destination,a\nChicago,Detroit,1\n";
        assert!(matches!(
            TravelTimeTable::from_reader(data.as_bytes()),
            Err(TableError::MissingColumn(c)) if c == "Origin"
        ));
    }

    #[test]
    fn test_from_csv_file() {
        let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
        write!(file, "{}", csv_of(&[row("Milwaukee", "Thunder Bay", 1.0, 49)]))
            .expect("should write temp file");
        let table = TravelTimeTable::from_csv(file.path()).expect("should load table");
        assert!(table.get("Milwaukee", "Thunder Bay").is_some());

        assert!(matches!(
            TravelTimeTable::from_csv("does/not/exist.csv"),
            Err(TableError::Io { .. })
        ));
    }
}
