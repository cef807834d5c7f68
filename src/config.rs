/// Game settings from `config.toml`.
///
/// Every key is optional. Arena sizes are clamped to what the board labels
/// can show, and relative score/log paths land in the writable data dir.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::grid::{Position, MAX_COLUMNS};

// ── Resolved settings ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub seed: Option<u64>,
    pub scores_file: PathBuf,
    pub top_n: usize,
    pub assets_dir: PathBuf,
    pub log_file: PathBuf,
}

/// Arena size and wizard start, in cell columns (not storage columns).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    pub width: usize,
    pub height: usize,
    pub start_x: usize,
    pub start_y: usize,
}

impl ArenaConfig {
    pub fn start_position(&self) -> Position {
        Position::new((self.start_x * 2) as i32, self.start_y as i32)
    }
}

// Column labels run A..Z.
pub const MIN_SIZE: usize = 2;
pub const MAX_WIDTH: usize = MAX_COLUMNS;
pub const MAX_HEIGHT: usize = 99;

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    arena: TomlArena,
    #[serde(default)]
    spawn: TomlSpawn,
    #[serde(default)]
    scores: TomlScores,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlArena {
    #[serde(default = "default_size")]
    width: usize,
    #[serde(default = "default_size")]
    height: usize,
    #[serde(default)]
    start_x: usize,
    #[serde(default)]
    start_y: usize,
}

#[derive(Deserialize, Debug, Default)]
struct TomlSpawn {
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Deserialize, Debug)]
struct TomlScores {
    #[serde(default = "default_scores_file")]
    file: String,
    #[serde(default = "default_top_n")]
    top_n: usize,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_assets_dir")]
    assets_dir: String,
    #[serde(default = "default_log_file")]
    log_file: String,
}

// ── Defaults ──

fn default_size() -> usize { 10 }
fn default_scores_file() -> String { "scores.dat".into() }
fn default_top_n() -> usize { 10 }
fn default_assets_dir() -> String { "assets".into() }
fn default_log_file() -> String { "vimwizards.log".into() }

impl Default for TomlArena {
    fn default() -> Self {
        TomlArena {
            width: default_size(),
            height: default_size(),
            start_x: 0,
            start_y: 0,
        }
    }
}

impl Default for TomlScores {
    fn default() -> Self {
        TomlScores {
            file: default_scores_file(),
            top_n: default_top_n(),
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral {
            assets_dir: default_assets_dir(),
            log_file: default_log_file(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Look for `config.toml` next to the executable, then in the CWD,
    /// then in `~/.local/share/vimwizards`. Never fails; problems are
    /// reported on stderr and defaults are used.
    pub fn load() -> Self {
        let search_dirs = candidate_dirs();
        let toml_cfg = load_toml(&search_dirs);
        build(toml_cfg, &search_dirs, &data_dir())
    }
}

fn build(cfg: TomlConfig, search_dirs: &[PathBuf], data_dir: &Path) -> GameConfig {
    let width = cfg.arena.width.clamp(MIN_SIZE, MAX_WIDTH);
    let height = cfg.arena.height.clamp(MIN_SIZE, MAX_HEIGHT);
    let arena = ArenaConfig {
        width,
        height,
        start_x: cfg.arena.start_x.min(width - 1),
        start_y: cfg.arena.start_y.min(height - 1),
    };

    // first candidate dir that has it, else relative to the CWD
    let assets_dir = if Path::new(&cfg.general.assets_dir).is_absolute() {
        PathBuf::from(&cfg.general.assets_dir)
    } else {
        search_dirs.iter()
            .map(|d| d.join(&cfg.general.assets_dir))
            .find(|p| p.is_dir())
            .unwrap_or_else(|| PathBuf::from(&cfg.general.assets_dir))
    };

    GameConfig {
        arena,
        seed: cfg.spawn.seed,
        scores_file: resolve_data_path(&cfg.scores.file, data_dir),
        top_n: cfg.scores.top_n.max(1),
        assets_dir,
        log_file: resolve_data_path(&cfg.general.log_file, data_dir),
    }
}

fn resolve_data_path(raw: &str, data_dir: &Path) -> PathBuf {
    let p = PathBuf::from(raw);
    if p.is_absolute() { p } else { data_dir.join(p) }
}

const APP_DIR: &str = ".local/share/vimwizards";

fn exe_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(Path::to_path_buf)
}

fn home_app_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(APP_DIR))
}

/// Where `config.toml` and `assets/` may live, in lookup order, deduplicated.
fn candidate_dirs() -> Vec<PathBuf> {
    let home = home_app_dir().filter(|d| d.is_dir());
    let mut dirs: Vec<PathBuf> = Vec::new();
    for dir in [exe_dir(), std::env::current_dir().ok(), home].into_iter().flatten() {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }
    dirs
}

/// Writable directory for scores and the log file: the exe dir when it
/// accepts writes, else `~/.local/share/vimwizards`, else the CWD.
fn data_dir() -> PathBuf {
    if let Some(dir) = exe_dir() {
        let probe = dir.join(".vimwizards_probe");
        if std::fs::write(&probe, "").is_ok() {
            let _ = std::fs::remove_file(&probe);
            return dir;
        }
    }
    if let Some(dir) = home_app_dir() {
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// First readable `config.toml` wins.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for path in search_dirs.iter().map(|d| d.join("config.toml")).filter(|p| p.exists()) {
        match std::fs::read_to_string(&path) {
            Ok(text) => return parse_toml(&text),
            Err(e) => eprintln!("vimwizards: cannot read {}: {e}", path.display()),
        }
    }
    TomlConfig::default()
}

fn parse_toml(text: &str) -> TomlConfig {
    match toml::from_str::<TomlConfig>(text) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("vimwizards: bad config.toml, using defaults: {e}");
            TomlConfig::default()
        }
    }
}
