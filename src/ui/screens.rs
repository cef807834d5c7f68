/// Menu, game-over and high-score screens.
///
/// Key handling lives in small state types (`TitleMenu`, `InitialsEntry`)
/// so it can be exercised without a terminal; the `*_screen` functions
/// only glue those to `read_key` and the renderer.

use crossterm::event::{KeyCode, KeyEvent};
use crossterm::style::Color;
use log::{info, warn};

use super::art::Art;
use super::input::{is_ctrl_c, read_key};
use super::renderer::Renderer;
use crate::error::GameError;
use crate::sim::scores::{normalize_initials, now_timestamp, ScoreRecord, ScoreStore};

const TITLE_FG: Color = Color::Rgb { r: 210, g: 130, b: 255 };
const TEXT_FG: Color = Color::Rgb { r: 200, g: 200, b: 210 };
const SELECTED_FG: Color = Color::Rgb { r: 255, g: 220, b: 120 };
const DIM_FG: Color = Color::DarkGrey;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuChoice {
    StartGame,
    HighScores,
    Quit,
}

const MENU_ITEMS: [(&str, MenuChoice); 3] = [
    ("Start Game", MenuChoice::StartGame),
    ("High Scores", MenuChoice::HighScores),
    ("Quit", MenuChoice::Quit),
];

// ── Title menu ──

#[derive(Default)]
pub struct TitleMenu {
    selected: usize,
}

impl TitleMenu {
    pub fn selected(&self) -> MenuChoice {
        MENU_ITEMS[self.selected].1
    }

    /// Returns the chosen entry once Enter (or a quit key) is pressed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<MenuChoice> {
        if is_ctrl_c(&key) {
            return Some(MenuChoice::Quit);
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected = (self.selected + 1) % MENU_ITEMS.len();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = (self.selected + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
                None
            }
            KeyCode::Enter => Some(self.selected()),
            KeyCode::Char('q') | KeyCode::Esc => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    fn lines(&self, art: &Art) -> Vec<(String, Color)> {
        let mut out: Vec<(String, Color)> =
            art.logo.iter().map(|l| (l.clone(), TITLE_FG)).collect();
        out.push((String::new(), TEXT_FG));
        for (i, (label, _)) in MENU_ITEMS.iter().enumerate() {
            if i == self.selected {
                out.push((format!("> {}", label), SELECTED_FG));
            } else {
                out.push((format!("  {}", label), TEXT_FG));
            }
        }
        out.push((String::new(), TEXT_FG));
        out.push(("j/k select, Enter confirm, q quit".to_string(), DIM_FG));
        out
    }
}

pub fn title_screen(renderer: &mut Renderer, art: &Art) -> Result<MenuChoice, GameError> {
    let mut menu = TitleMenu::default();
    loop {
        renderer.draw_lines(&menu.lines(art))?;
        if let Some(choice) = menu.handle_key(read_key()?) {
            return Ok(choice);
        }
    }
}

// ── Initials entry ──

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EntryState {
    Editing,
    Submitted(String),
    Cancelled,
}

#[derive(Default)]
pub struct InitialsEntry {
    buf: String,
}

impl InitialsEntry {
    pub fn text(&self) -> &str {
        &self.buf
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EntryState {
        if is_ctrl_c(&key) {
            return EntryState::Cancelled;
        }
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() && self.buf.len() < 3 => {
                self.buf.push(c.to_ascii_uppercase());
                EntryState::Editing
            }
            KeyCode::Backspace => {
                self.buf.pop();
                EntryState::Editing
            }
            KeyCode::Enter => match normalize_initials(&self.buf) {
                Some(tag) => EntryState::Submitted(tag),
                None => EntryState::Editing,
            },
            KeyCode::Esc => EntryState::Cancelled,
            _ => EntryState::Editing,
        }
    }
}

// ── Game over ──

/// Final score, initials prompt, then the table.
pub fn game_over_screen(
    renderer: &mut Renderer,
    art: &Art,
    score: u32,
    store: &mut dyn ScoreStore,
    top_n: usize,
) -> Result<(), GameError> {
    let mut lines: Vec<(String, Color)> =
        art.game_over.iter().map(|l| (l.clone(), TITLE_FG)).collect();
    lines.push((String::new(), TEXT_FG));
    lines.push((format!("Final score: {}", score), SELECTED_FG));
    lines.push((String::new(), TEXT_FG));
    lines.push(("press any key".to_string(), DIM_FG));
    renderer.draw_lines(&lines)?;
    read_key()?;

    let mut entry = InitialsEntry::default();
    let note = loop {
        let prompt = vec![
            (format!("Final score: {}", score), SELECTED_FG),
            (String::new(), TEXT_FG),
            ("Enter your initials (3 letters):".to_string(), TEXT_FG),
            (format!("  [{:<3}]", entry.text()), SELECTED_FG),
            (String::new(), TEXT_FG),
            ("Enter save, Backspace delete, Esc skip".to_string(), DIM_FG),
        ];
        renderer.draw_lines(&prompt)?;

        match entry.handle_key(read_key()?) {
            EntryState::Editing => continue,
            EntryState::Cancelled => break "Score not saved.".to_string(),
            EntryState::Submitted(tag) => {
                if store.save(&tag, score, &now_timestamp()) {
                    info!("saved score {} for {}", score, tag);
                    break format!("Saved {} with {} points.", tag, score);
                }
                warn!("score store rejected {} {}", tag, score);
                break "Could not save score.".to_string();
            }
        }
    };

    high_score_screen(renderer, store, top_n, &note)
}

// ── High scores ──

pub fn high_score_screen(
    renderer: &mut Renderer,
    store: &mut dyn ScoreStore,
    top_n: usize,
    note: &str,
) -> Result<(), GameError> {
    let mut note = note.to_string();
    loop {
        let mut lines = Vec::new();
        if !note.is_empty() {
            lines.push((note.clone(), SELECTED_FG));
            lines.push((String::new(), TEXT_FG));
        }
        lines.push(("HIGH SCORES".to_string(), TITLE_FG));
        lines.push((String::new(), TEXT_FG));
        lines.extend(table_lines(&store.top_scores(top_n)).into_iter().map(|l| (l, TEXT_FG)));
        lines.push((String::new(), TEXT_FG));
        lines.push((format!("{} games recorded", store.count()), DIM_FG));
        lines.push(("x clear table, any other key back".to_string(), DIM_FG));
        renderer.draw_lines(&lines)?;

        let key = read_key()?;
        if key.code != KeyCode::Char('x') {
            return Ok(());
        }
        note = if store.clear() {
            info!("score table cleared");
            "Table cleared.".to_string()
        } else {
            "Could not clear the table.".to_string()
        };
    }
}

fn table_lines(records: &[ScoreRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No scores yet.".to_string()];
    }
    records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{:>2}. {}  {:>5}  {}", i + 1, r.initials, r.score, r.date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn menu_wraps_both_ways() {
        let mut m = TitleMenu::default();
        assert_eq!(m.selected(), MenuChoice::StartGame);
        assert_eq!(m.handle_key(key(KeyCode::Char('k'))), None);
        assert_eq!(m.selected(), MenuChoice::Quit);
        m.handle_key(key(KeyCode::Down));
        assert_eq!(m.selected(), MenuChoice::StartGame);
        m.handle_key(key(KeyCode::Char('j')));
        assert_eq!(m.handle_key(key(KeyCode::Enter)), Some(MenuChoice::HighScores));
    }

    #[test]
    fn menu_quit_keys() {
        let mut m = TitleMenu::default();
        assert_eq!(m.handle_key(key(KeyCode::Char('q'))), Some(MenuChoice::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(m.handle_key(ctrl_c), Some(MenuChoice::Quit));
    }

    #[test]
    fn initials_need_three_letters() {
        let mut e = InitialsEntry::default();
        e.handle_key(key(KeyCode::Char('a')));
        e.handle_key(key(KeyCode::Char('1')));
        e.handle_key(key(KeyCode::Char('b')));
        assert_eq!(e.handle_key(key(KeyCode::Enter)), EntryState::Editing);
        e.handle_key(key(KeyCode::Char('c')));
        e.handle_key(key(KeyCode::Char('d')));
        assert_eq!(e.text(), "ABC");
        assert_eq!(e.handle_key(key(KeyCode::Enter)), EntryState::Submitted("ABC".into()));
    }

    #[test]
    fn initials_backspace_and_cancel() {
        let mut e = InitialsEntry::default();
        e.handle_key(key(KeyCode::Char('x')));
        e.handle_key(key(KeyCode::Backspace));
        e.handle_key(key(KeyCode::Backspace));
        assert_eq!(e.text(), "");
        assert_eq!(e.handle_key(key(KeyCode::Esc)), EntryState::Cancelled);
    }

    #[test]
    fn table_ranks_from_one() {
        let recs = vec![
            ScoreRecord { initials: "ABC".into(), score: 12, date: "2026-10-19 21:04:55".into() },
            ScoreRecord { initials: "XYZ".into(), score: 3, date: "2026-10-18 08:00:00".into() },
        ];
        let lines = table_lines(&recs);
        assert_eq!(lines[0], " 1. ABC     12  2026-10-19 21:04:55");
        assert!(lines[1].starts_with(" 2. XYZ"));
        assert_eq!(table_lines(&[]), vec!["No scores yet.".to_string()]);
    }
}
