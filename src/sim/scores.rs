/// High-score table: an append-only file of ranked records.
///
/// ## File format
///   One key-value line per record: `score=TAG,SCORE,DATE`
///   e.g. `score=ABC,12,2026-10-19 21:04:55`
///
/// Lines are appended on save and ranked on query (descending by score,
/// ties in the order they were saved). Unknown or malformed lines are
/// skipped so a damaged file never hides the rest of the table.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRecord {
    pub initials: String,
    pub score: u32,
    pub date: String,
}

/// Where finished games are recorded. Failures are reported as `false`
/// or an empty table, never as a panic.
pub trait ScoreStore {
    fn save(&mut self, initials: &str, score: u32, timestamp: &str) -> bool;
    fn top_scores(&self, limit: usize) -> Vec<ScoreRecord>;
    fn count(&self) -> usize;
    fn clear(&mut self) -> bool;
}

pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Vec<ScoreRecord> {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_records(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => vec![],
            Err(e) => {
                warn!("could not read scores from {}: {e}", self.path.display());
                vec![]
            }
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn save(&mut self, initials: &str, score: u32, timestamp: &str) -> bool {
        let tag = match normalize_initials(initials) {
            Some(t) => t,
            None => {
                warn!("rejected score with initials {:?}", initials);
                return false;
            }
        };
        if timestamp.contains(|c: char| c == '\n' || c == '\r') {
            warn!("rejected score with multi-line timestamp");
            return false;
        }

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && fs::create_dir_all(dir).is_err() {
                warn!("could not create score directory {}", dir.display());
                return false;
            }
        }

        let line = format!("score={},{},{}\n", tag, score, timestamp);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| f.write_all(line.as_bytes()));
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("saving score to {} failed: {e}", self.path.display());
                false
            }
        }
    }

    fn top_scores(&self, limit: usize) -> Vec<ScoreRecord> {
        let mut records = self.read_all();
        // stable: equal scores keep save order
        records.sort_by(|a, b| b.score.cmp(&a.score));
        records.truncate(limit);
        records
    }

    fn count(&self) -> usize {
        self.read_all().len()
    }

    fn clear(&mut self) -> bool {
        match fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                warn!("clearing scores at {} failed: {e}", self.path.display());
                false
            }
        }
    }
}

/// Current local time in the table's format.
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Exactly three ASCII letters, uppercased.
pub fn normalize_initials(raw: &str) -> Option<String> {
    if raw.chars().count() == 3 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(raw.to_ascii_uppercase())
    } else {
        None
    }
}

fn parse_records(content: &str) -> Vec<ScoreRecord> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ScoreRecord> {
    let val = line.trim_end().strip_prefix("score=")?;
    let mut parts = val.splitn(3, ',');
    let initials = normalize_initials(parts.next()?)?;
    let score = parts.next()?.trim().parse().ok()?;
    let date = parts.next()?.to_string();
    Some(ScoreRecord { initials, score, date })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT: AtomicUsize = AtomicUsize::new(0);

    fn temp_store() -> FileScoreStore {
        let n = NEXT.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir()
            .join(format!("vimwizards_scores_{}_{}.dat", std::process::id(), n));
        let _ = fs::remove_file(&path);
        FileScoreStore::new(path)
    }

    const DATE: &str = "2026-10-19 12:00:00";

    #[test]
    fn ranks_descending_with_limit() {
        let mut s = temp_store();
        for (tag, score) in [("AAA", 100), ("BBB", 250), ("CCC", 175), ("DDD", 300), ("EEE", 50)] {
            assert!(s.save(tag, score, DATE));
        }
        let top = s.top_scores(3);
        let tags: Vec<_> = top.iter().map(|r| r.initials.as_str()).collect();
        assert_eq!(tags, vec!["DDD", "BBB", "CCC"]);
        assert_eq!(top[0].score, 300);
        assert_eq!(top[0].date, DATE);
        assert_eq!(s.count(), 5);
        assert!(s.clear());
    }

    #[test]
    fn ties_keep_save_order() {
        let mut s = temp_store();
        s.save("ONE", 5, DATE);
        s.save("TWO", 5, DATE);
        let top = s.top_scores(10);
        assert_eq!(top[0].initials, "ONE");
        assert_eq!(top[1].initials, "TWO");
        s.clear();
    }

    #[test]
    fn initials_are_validated_and_uppercased() {
        let mut s = temp_store();
        assert!(!s.save("AB", 1, DATE));
        assert!(!s.save("ABCD", 1, DATE));
        assert!(!s.save("A1C", 1, DATE));
        assert!(s.save("abc", 1, DATE));
        assert_eq!(s.top_scores(1)[0].initials, "ABC");
        s.clear();
    }

    #[test]
    fn missing_file_is_empty_and_clear_is_ok() {
        let mut s = temp_store();
        assert!(s.top_scores(10).is_empty());
        assert_eq!(s.count(), 0);
        assert!(s.clear());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let recs = parse_records(
            "score=ABC,10,2026-01-01 00:00:00\n\
             garbage\n\
             score=XY,3,date\n\
             score=DEF,notanumber,date\n\
             score=GHI,7,2026-01-02 00:00:00\n",
        );
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1], ScoreRecord { initials: "GHI".into(), score: 7, date: "2026-01-02 00:00:00".into() });
    }

    #[test]
    fn timestamp_has_expected_shape() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }
}
