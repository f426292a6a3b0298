// src/store.rs
//
// Dataset files on disk: one JSON array per kind, plus `summary.json`.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::csv;
use crate::error::{Error, Result};
use crate::file::write_atomic;
use crate::model::{records_from_value, Summary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatasetKind {
    Teams,
    Games,
    TeamStats,
    BettingLines,
    Ratings,
    Summary,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 6] = [
        DatasetKind::Teams,
        DatasetKind::Games,
        DatasetKind::TeamStats,
        DatasetKind::BettingLines,
        DatasetKind::Ratings,
        DatasetKind::Summary,
    ];

    pub fn stem(self) -> &'static str {
        match self {
            DatasetKind::Teams => "teams",
            DatasetKind::Games => "games",
            DatasetKind::TeamStats => "team_stats",
            DatasetKind::BettingLines => "betting_lines",
            DatasetKind::Ratings => "ratings",
            DatasetKind::Summary => "summary",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.stem())
    }

    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::Teams => "Teams",
            DatasetKind::Games => "Games",
            DatasetKind::TeamStats => "Team stats",
            DatasetKind::BettingLines => "Betting lines",
            DatasetKind::Ratings => "Ratings",
            DatasetKind::Summary => "Summary",
        }
    }

    pub fn path_in(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// Records that decoded, plus how many array elements did not.
#[derive(Debug)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut json_err = None;
    let res = write_atomic(path, |w| {
        serde_json::to_writer_pretty(&mut *w, value).map_err(|e| {
            let io = std::io::Error::other(e.to_string());
            json_err = Some(e);
            io
        })
    });
    match (res, json_err) {
        (Err(_), Some(e)) => Err(Error::json(path, e)),
        (res, _) => res,
    }
}

/// Overwrite `<dir>/<kind>.json` with `records` (an empty array is still
/// written). With `csv`, a flattened `<kind>.csv` goes alongside; without
/// it, a `<kind>.csv` left by an earlier run is removed.
/// Returns the paths written.
pub fn save_records<T: Serialize>(
    dir: &Path,
    kind: DatasetKind,
    records: &[T],
    with_csv: bool,
) -> Result<Vec<PathBuf>> {
    let path = kind.path_in(dir);
    write_json(&path, records)?;
    let mut written = vec![path];
    let csv_path = dir.join(format!("{}.csv", kind.stem()));

    if !with_csv {
        match fs::remove_file(&csv_path) {
            Ok(()) => logf!("Removed stale {}", csv_path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::io(&csv_path, e)),
        }
    } else {
        let values: Vec<Value> = records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| Error::json(&written[0], e))?;
        write_atomic(&csv_path, |w| csv::write_flattened(w, &values))?;
        written.push(csv_path);
    }

    logf!("Saved {} {} records to {}", records.len(), kind.stem(), written[0].display());
    Ok(written)
}

pub fn save_summary(dir: &Path, summary: &Summary) -> Result<PathBuf> {
    let path = DatasetKind::Summary.path_in(dir);
    write_json(&path, summary)?;
    logf!("Saved summary to {}", path.display());
    Ok(path)
}

fn read_value(path: &Path) -> Result<Value> {
    if !path.is_file() {
        return Err(Error::DataMissing(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::Malformed {
        what: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// `DataMissing` when the file is absent, `Malformed` when it is not a JSON
/// array. Individual bad elements are skipped and counted.
pub fn load_records<T: DeserializeOwned>(dir: &Path, kind: DatasetKind) -> Result<Loaded<T>> {
    let path = kind.path_in(dir);
    let value = read_value(&path)?;
    let (records, skipped) = records_from_value(value).map_err(|reason| Error::Malformed {
        what: path.display().to_string(),
        reason,
    })?;
    if skipped > 0 {
        logw!("{}: skipped {skipped} malformed records", path.display());
    }
    Ok(Loaded { records, skipped })
}

pub fn load_summary(dir: &Path) -> Result<Summary> {
    let path = DatasetKind::Summary.path_in(dir);
    let value = read_value(&path)?;
    serde_json::from_value(value).map_err(|e| Error::Malformed {
        what: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Dataset kinds with a file in `dir`.
pub fn present(dir: &Path) -> Vec<DatasetKind> {
    if !dir.is_dir() {
        return Vec::new();
    }
    DatasetKind::ALL
        .into_iter()
        .filter(|k| k.path_in(dir).is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Team;

    #[test]
    fn save_then_load_keeps_extras_and_counts_junk() {
        let dir = tempfile::tempdir().unwrap();
        let teams: Vec<Team> = serde_json::from_value(json!([
            {"id": 1, "school": "Duke", "mascot": "Blue Devils"},
            {"id": 2, "school": "UNC"}
        ]))
        .unwrap();
        save_records(dir.path(), DatasetKind::Teams, &teams, false).unwrap();

        let loaded: Loaded<Team> = load_records(dir.path(), DatasetKind::Teams).unwrap();
        assert_eq!(loaded.records, teams);
        assert_eq!(loaded.skipped, 0);

        fs::write(DatasetKind::Teams.path_in(dir.path()), r#"[{"id": 1}, 17]"#).unwrap();
        let loaded: Loaded<Team> = load_records(dir.path(), DatasetKind::Teams).unwrap();
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.skipped, 1);
    }

    #[test]
    fn missing_and_malformed_files_are_distinct_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records::<Team>(dir.path(), DatasetKind::Teams).unwrap_err();
        assert!(matches!(err, Error::DataMissing(_)));

        fs::write(DatasetKind::Teams.path_in(dir.path()), "{not json").unwrap();
        let err = load_records::<Team>(dir.path(), DatasetKind::Teams).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[test]
    fn empty_dataset_still_writes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = save_records::<Team>(dir.path(), DatasetKind::Teams, &[], true).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(fs::read_to_string(&paths[0]).unwrap(), "[]");
        assert_eq!(present(dir.path()), vec![DatasetKind::Teams]);
    }

    #[test]
    fn rerun_without_csv_removes_previous_csv() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("teams.csv");
        save_records::<Team>(dir.path(), DatasetKind::Teams, &[], true).unwrap();
        assert!(csv_path.is_file());

        let paths = save_records::<Team>(dir.path(), DatasetKind::Teams, &[], false).unwrap();
        assert_eq!(paths, vec![DatasetKind::Teams.path_in(dir.path())]);
        assert!(!csv_path.exists());

        // nothing to remove the second time
        save_records::<Team>(dir.path(), DatasetKind::Teams, &[], false).unwrap();
    }

    #[test]
    fn present_on_missing_dir_is_empty() {
        assert!(present(Path::new("/definitely/not/here")).is_empty());
    }
}
