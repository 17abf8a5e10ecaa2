//! Filename parser for movie and TV episode files
//!
//! Parses filenames like:
//! - "The.Matrix.1999.1080p.mkv"
//! - "Show.Name.S01E02.Episode.Title.mkv"
//! - "Show.Name.S02E05-E07.mkv"

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::text_utils::title_case;

/// Quality/codec/source tags that never belong in a title.
static JUNK_TAGS: &[&str] = &[
    "720p", "1080p", "2160p", "x264", "x265", "h264", "bluray", "webrip", "hdrip",
];

/// Container extensions stripped from the end of a filename. Stripping
/// repeats from the right so stacked extensions are fully removed.
static MEDIA_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "mov", "wmv", "flv", "webm", "ts", "m2ts", "mpg", "mpeg", "ogv",
    "3gp",
];

// First 4-digit run starting 19/20, anywhere in the name (not token-aligned)
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(19|20)\d{2}").unwrap());

// S01E02 / 1x05 / S02E05-E07 forms; only the first match counts
static EPISODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)S?(\d{1,2})[xE](\d{2})(?:-?E?(\d{2}))?").unwrap());

// Single delimiter characters; consecutive delimiters produce empty parts
static DELIMITER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.\-_\s]").unwrap());

/// Season and episode numbers detected in a filename
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowInfo {
    pub season: u32,
    /// Contiguous ascending run starting at the first captured episode
    pub episodes: Vec<u32>,
}

/// Normalized tokens plus whatever metadata detection was asked for
#[derive(Debug, Clone, Default)]
pub struct TokenizedName {
    pub tokens: Vec<String>,
    pub year: Option<u32>,
    pub show_info: Option<ShowInfo>,
    /// Raw text matched by the season/episode pattern, e.g. "S01E02"
    pub episode_marker: Option<String>,
}

/// Parsed movie information from a filename
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedMovie {
    pub title: String,
    pub year: Option<u32>,
}

/// Parsed episode information from a filename
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedShow {
    pub title: String,
    pub season: Option<u32>,
    pub episodes: Option<Vec<u32>>,
    pub episode_title: Option<String>,
}

/// Split a filename into normalized tokens, optionally detecting a release
/// year and/or season/episode numbers.
///
/// Junk tags and the token spelling out a detected year never appear in the
/// output. Never fails: absent patterns leave the corresponding field `None`.
pub fn tokenize(filename: &str, detect_year: bool, detect_show_info: bool) -> TokenizedName {
    let name = strip_extensions(filename);

    let mut result = TokenizedName::default();

    if detect_year {
        if let Some(m) = YEAR_RE.find(name) {
            result.year = m.as_str().parse().ok();
        }
    }

    if detect_show_info {
        if let Some(caps) = EPISODE_RE.captures(name) {
            let season = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
            let first = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
            let last = caps.get(3).and_then(|m| m.as_str().parse::<u32>().ok());
            if let (Some(season), Some(first)) = (season, first) {
                let episodes = match last {
                    Some(last) if last >= first => (first..=last).collect(),
                    // a reversed range degrades to the first episode alone
                    _ => vec![first],
                };
                result.show_info = Some(ShowInfo { season, episodes });
                result.episode_marker = Some(caps[0].to_string());
            }
        }
    }

    // Year exclusion runs before junk filtering
    let year_token = result.year.map(|y| y.to_string());

    for part in DELIMITER_RE.split(name) {
        let token = normalize_token(part);

        if year_token.as_deref() == Some(token.as_str()) {
            continue;
        }
        if JUNK_TAGS.contains(&token.as_str()) {
            continue;
        }
        result.tokens.push(token);
    }

    result
}

/// Parse a movie filename to extract title and year.
///
/// Example: "The.Matrix.1999.1080p.mkv" -> title "The Matrix", year 1999
pub fn parse_movie(filename: &str) -> ParsedMovie {
    let tokenized = tokenize(filename, true, false);
    let result = ParsedMovie {
        title: title_case(tokenized.tokens.join(" ").trim()),
        year: tokenized.year,
    };

    debug!(
        filename = filename,
        title = %result.title,
        year = ?result.year,
        "Parsed movie filename"
    );

    result
}

/// Parse a TV show filename into title, season, episode(s) and an optional
/// trailing episode title.
///
/// Episode numbers are plain integers that can collide with ordinary words,
/// so the title boundary is found by matching tokens against the detected
/// episode numbers and against the matched marker text itself.
pub fn parse_show(filename: &str) -> ParsedShow {
    let tokenized = tokenize(filename, false, true);
    let tokens = &tokenized.tokens;

    let mut result = ParsedShow::default();
    let mut token_index = tokens.len();

    if let Some(info) = &tokenized.show_info {
        let episode_strings: Vec<String> = info.episodes.iter().map(|e| e.to_string()).collect();
        let marker_fragments: Vec<String> = tokenized
            .episode_marker
            .as_deref()
            .map(|marker| DELIMITER_RE.split(marker).map(normalize_token).collect())
            .unwrap_or_default();
        let is_episode_token = |token: &str| {
            episode_strings.iter().any(|e| e == token)
                || marker_fragments.iter().any(|f| f == token)
        };

        // First token that looks like episode metadata bounds the title
        token_index = tokens
            .iter()
            .position(|t| is_episode_token(t))
            .unwrap_or(tokens.len());

        // The episode-number region may span several consecutive tokens
        let mut last_episode_index = token_index;
        for (i, token) in tokens.iter().enumerate().skip(token_index) {
            if is_episode_token(token) {
                last_episode_index = i;
            } else {
                break;
            }
        }

        if last_episode_index + 1 < tokens.len() {
            let tail = title_case(tokens[last_episode_index + 1..].join(" ").trim());
            if !tail.is_empty() {
                result.episode_title = Some(tail);
            }
        }

        result.season = Some(info.season);
        result.episodes = Some(info.episodes.clone());
    }

    result.title = title_case(tokens[..token_index].join(" ").trim());

    debug!(
        filename = filename,
        title = %result.title,
        season = ?result.season,
        episodes = ?result.episodes,
        episode_title = ?result.episode_title,
        "Parsed show filename"
    );

    result
}

/// Strip trailing container extensions, repeating so stacked extensions
/// ("concert.mp4.mkv") are fully removed.
fn strip_extensions(filename: &str) -> &str {
    let mut name = filename;
    while let Some((stem, ext)) = name.rsplit_once('.') {
        if MEDIA_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
            name = stem;
        } else {
            break;
        }
    }
    name
}

/// Trim surrounding brackets and lowercase one delimiter-split part.
fn normalize_token(part: &str) -> String {
    part.trim_matches(['(', ')', '[', ']']).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_filters_year_and_junk() {
        let tokenized = tokenize("The.Matrix.1999.1080p.mkv", true, false);
        assert_eq!(tokenized.tokens, vec!["the", "matrix"]);
        assert_eq!(tokenized.year, Some(1999));
        assert!(tokenized.show_info.is_none());
    }

    #[test]
    fn test_parse_movie() {
        let movie = parse_movie("The.Matrix.1999.1080p.mkv");
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.year, Some(1999));
    }

    #[test]
    fn test_parse_show_single_episode() {
        let show = parse_show("Show.Name.S01E02.Episode.Title.mkv");
        assert_eq!(show.title, "Show Name");
        assert_eq!(show.season, Some(1));
        assert_eq!(show.episodes, Some(vec![2]));
        assert_eq!(show.episode_title.as_deref(), Some("Episode Title"));
    }

    #[test]
    fn test_parse_show_episode_range() {
        let show = parse_show("Show.Name.S02E05-E07.mkv");
        assert_eq!(show.title, "Show Name");
        assert_eq!(show.season, Some(2));
        assert_eq!(show.episodes, Some(vec![5, 6, 7]));
        assert_eq!(show.episode_title, None);
    }

    #[test]
    fn test_parse_show_without_marker() {
        let show = parse_show("Holiday.Special.mkv");
        assert_eq!(show.title, "Holiday Special");
        assert_eq!(show.season, None);
        assert_eq!(show.episodes, None);
        assert_eq!(show.episode_title, None);
    }

    #[test]
    fn test_strip_extensions() {
        assert_eq!(strip_extensions("movie.mkv"), "movie");
        assert_eq!(strip_extensions("movie.MP4"), "movie");
        assert_eq!(strip_extensions("concert.mp4.mkv"), "concert");
        assert_eq!(strip_extensions("movie.2005"), "movie.2005");
        assert_eq!(strip_extensions("no_extension"), "no_extension");
    }
}
