/// ASCII art for the title and game-over screens.
/// Loaded from `<assets>/ascii/*.txt`; missing files fall back to plain text.

use std::path::Path;

use log::warn;

const LOGO_FILE: &str = "ascii/logo.txt";
const GAME_OVER_FILE: &str = "ascii/game_over.txt";

const LOGO_FALLBACK: &str = "V I M   W I Z A R D S";
const GAME_OVER_FALLBACK: &str = "GAME OVER";

pub struct Art {
    pub logo: Vec<String>,
    pub game_over: Vec<String>,
}

impl Art {
    pub fn load(assets_dir: &Path) -> Self {
        Art {
            logo: load_or(assets_dir, LOGO_FILE, LOGO_FALLBACK),
            game_over: load_or(assets_dir, GAME_OVER_FILE, GAME_OVER_FALLBACK),
        }
    }
}

fn load_or(dir: &Path, name: &str, fallback: &str) -> Vec<String> {
    let path = dir.join(name);
    match std::fs::read_to_string(&path) {
        Ok(text) => to_lines(&text),
        Err(e) => {
            warn!("art {} unavailable ({e}), using fallback", path.display());
            to_lines(fallback)
        }
    }
}

fn to_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while lines.last().map_or(false, |l| l.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dir_uses_fallbacks() {
        let art = Art::load(Path::new("/nonexistent/vimwizards/assets"));
        assert_eq!(art.logo, vec![LOGO_FALLBACK.to_string()]);
        assert_eq!(art.game_over, vec![GAME_OVER_FALLBACK.to_string()]);
    }

    #[test]
    fn trailing_blank_lines_are_dropped() {
        assert_eq!(to_lines("ab  \ncd\n\n\n"), vec!["ab".to_string(), "cd".to_string()]);
    }
}
