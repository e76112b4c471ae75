use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RatingsError, Result};
use crate::model::PlayerRecord;

/// File name a record for `player_name` is saved under.
///
/// Spaces and path separators become underscores so the name stays a single path component.
pub fn record_filename(player_name: &str) -> String {
    format!(
        "player_data_{}.json",
        player_name
            .trim()
            .to_lowercase()
            .replace([' ', '/', '\\'], "_")
    )
}

/// Write `record` as pretty JSON into `dir`, creating it if needed.
pub fn save_record(record: &PlayerRecord, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;

    let path = dir.join(record_filename(&record.name));
    let file = File::create(&path).map_err(|e| io_error(&path, e))?;
    serde_json::to_writer_pretty(BufWriter::new(file), record)?;

    debug!(path = %path.display(), "saved player record");
    Ok(path)
}

/// Read a record previously written by [`save_record`].
pub fn load_record(path: impl AsRef<Path>) -> Result<PlayerRecord> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn io_error(path: &Path, source: std::io::Error) -> RatingsError {
    RatingsError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeCategory;
    use crate::parse_player_page;

    const CURRY: &str = include_str!("scraper/testdata/stephen-curry.md");

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("nba2k-ratings-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_record_filename() {
        assert_eq!(
            record_filename("Stephen Curry"),
            "player_data_stephen_curry.json"
        );
        assert_eq!(
            record_filename("Shai Gilgeous-Alexander"),
            "player_data_shai_gilgeous-alexander.json"
        );
        assert_eq!(
            record_filename("Jimmy Butler / Heat"),
            "player_data_jimmy_butler___heat.json"
        );
        assert_eq!(record_filename(r"a\b"), "player_data_a_b.json");
    }

    #[test]
    fn test_save_name_with_separator() {
        let dir = scratch_dir("separator");
        let mut record =
            parse_player_page(CURRY, "https://www.2kratings.com/stephen-curry").unwrap();
        record.name = "Stephen Curry / Warriors".to_string();

        let path = save_record(&record, &dir).unwrap();
        assert_eq!(path.parent(), Some(dir.as_path()));
        assert_eq!(load_record(&path).unwrap().name, record.name);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("save");
        let record = parse_player_page(CURRY, "https://www.2kratings.com/stephen-curry").unwrap();

        let path = save_record(&record, &dir).unwrap();
        assert_eq!(path, dir.join("player_data_stephen_curry.json"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["overall_rating"], 96);
        assert_eq!(json["badges"]["total"], 5);
        assert_eq!(json["badges"]["hof"], 2);
        assert_eq!(
            json["attributes"]["Outside Scoring"]["sub_attributes"]["Mid-Range Shot"]["raw_text"],
            "98+1"
        );
        assert_eq!(json["badges"]["individual_badges"][1]["tier"], "Hall of Fame");
        assert!(json["details"].get("position").is_some());

        let loaded = load_record(&path).unwrap();
        assert_eq!(loaded, record);
        assert_eq!(
            loaded.attributes[&AttributeCategory::OutsideScoring]
                .sub_attributes
                .names()
                .next(),
            Some("Close Shot")
        );

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_record(scratch_dir("missing").join("nope.json")).unwrap_err();
        assert!(matches!(err, RatingsError::Io { .. }));
        assert!(!err.is_recoverable());
    }
}
