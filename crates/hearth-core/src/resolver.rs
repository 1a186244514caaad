//! Search resolution: raw query text in, navigation target out.
//!
//! A leading `!bang` token selects an alternate engine; with no further
//! terms it becomes a bare visit to that engine's origin. Everything else
//! goes to the currently selected engine with the query percent-encoded.
//! The resolver is a pure function; the caller owns engine selection and
//! the onboarding latch.

use crate::models::SearchEngine;

const BANG_MARKER: char = '!';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Empty or whitespace-only query: take no action.
    None,
    /// Navigate the browser to `url`. `bang_used` is true when a bang
    /// shorthand picked the engine, so the caller can latch the
    /// first-use hint.
    Navigate { url: String, bang_used: bool },
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// An engine's configured URL is not a valid absolute URL. This is a
    /// configuration error, surfaced to the caller rather than recovered.
    #[error("engine '{id}' has a malformed URL '{url}': {source}")]
    InvalidEngineUrl {
        id: String,
        url: String,
        source: url::ParseError,
    },
}

/// Index of the engine a fresh search bar should select: the first engine
/// marked default, else the first engine.
pub fn default_engine_index(engines: &[SearchEngine]) -> usize {
    engines.iter().position(|e| e.is_default).unwrap_or(0)
}

pub fn resolve(
    raw_query: &str,
    engines: &[SearchEngine],
    selected: &SearchEngine,
) -> Result<Resolution, ResolveError> {
    let trimmed = raw_query.trim();
    if trimmed.is_empty() {
        return Ok(Resolution::None);
    }

    let mut parts = trimmed.split(' ');
    let first = parts.next().unwrap_or_default();

    if let Some(candidate) = first.strip_prefix(BANG_MARKER) {
        // First engine in list order wins; duplicate bangs are not validated.
        if let Some(engine) = engines
            .iter()
            .find(|e| e.bang.as_deref() == Some(candidate))
        {
            let terms = parts.collect::<Vec<_>>().join(" ");
            let url = if terms.is_empty() {
                engine_origin(engine)?
            } else {
                format!("{}{}", engine.url, urlencoding::encode(&terms))
            };
            return Ok(Resolution::Navigate {
                url,
                bang_used: true,
            });
        }
    }

    // Standard search: the original text as given, literal `!` included.
    Ok(Resolution::Navigate {
        url: format!("{}{}", selected.url, urlencoding::encode(raw_query)),
        bang_used: false,
    })
}

/// Scheme + host of the engine's configured URL, for bare `!bang` visits.
fn engine_origin(engine: &SearchEngine) -> Result<String, ResolveError> {
    let parsed = url::Url::parse(&engine.url).map_err(|source| ResolveError::InvalidEngineUrl {
        id: engine.id.clone(),
        url: engine.url.clone(),
        source,
    })?;
    Ok(parsed.origin().ascii_serialization())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::default_engines;

    fn engine(id: &str, url: &str, bang: Option<&str>) -> SearchEngine {
        SearchEngine {
            id: id.into(),
            label: id.into(),
            url: url.into(),
            is_default: false,
            bang: bang.map(Into::into),
        }
    }

    fn selected() -> SearchEngine {
        let mut e = engine("google", "https://www.google.com/search?q=", None);
        e.is_default = true;
        e
    }

    #[test]
    fn empty_and_whitespace_queries_take_no_action() {
        let engines = default_engines();
        let sel = selected();
        assert_eq!(resolve("", &engines, &sel).unwrap(), Resolution::None);
        assert_eq!(resolve("   ", &engines, &sel).unwrap(), Resolution::None);
        assert_eq!(resolve("\t\n", &engines, &sel).unwrap(), Resolution::None);
    }

    #[test]
    fn plain_query_targets_selected_engine_with_encoded_text() {
        let engines = default_engines();
        let sel = selected();
        assert_eq!(
            resolve("rust async book", &engines, &sel).unwrap(),
            Resolution::Navigate {
                url: "https://www.google.com/search?q=rust%20async%20book".into(),
                bang_used: false,
            }
        );
    }

    #[test]
    fn bang_with_terms_targets_the_bang_engine() {
        let engines = default_engines();
        let sel = selected();
        assert_eq!(
            resolve("!yt cat videos", &engines, &sel).unwrap(),
            Resolution::Navigate {
                url: "https://www.youtube.com/results?search_query=cat%20videos".into(),
                bang_used: true,
            }
        );
    }

    #[test]
    fn bare_bang_visits_the_engine_origin() {
        let engines = default_engines();
        let sel = selected();
        assert_eq!(
            resolve("!yt", &engines, &sel).unwrap(),
            Resolution::Navigate {
                url: "https://www.youtube.com".into(),
                bang_used: true,
            }
        );
        // Surrounding whitespace still counts as a bare bang
        assert_eq!(
            resolve("  !gh  ", &engines, &sel).unwrap(),
            Resolution::Navigate {
                url: "https://github.com".into(),
                bang_used: true,
            }
        );
    }

    #[test]
    fn unknown_bang_falls_through_with_the_literal_text() {
        let engines = default_engines();
        let sel = selected();
        assert_eq!(
            resolve("!zzz something", &engines, &sel).unwrap(),
            Resolution::Navigate {
                url: "https://www.google.com/search?q=%21zzz%20something".into(),
                bang_used: false,
            }
        );
    }

    #[test]
    fn bang_match_is_case_sensitive() {
        let engines = default_engines();
        let sel = selected();
        let resolved = resolve("!YT music", &engines, &sel).unwrap();
        match resolved {
            Resolution::Navigate { url, bang_used } => {
                assert!(!bang_used);
                assert!(url.starts_with("https://www.google.com/search?q="));
            }
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn duplicate_bangs_resolve_to_the_first_engine_in_list_order() {
        let engines = vec![
            engine("first", "https://first.example/?q=", Some("x")),
            engine("second", "https://second.example/?q=", Some("x")),
        ];
        let sel = selected();
        assert_eq!(
            resolve("!x hi", &engines, &sel).unwrap(),
            Resolution::Navigate {
                url: "https://first.example/?q=hi".into(),
                bang_used: true,
            }
        );
    }

    #[test]
    fn untrimmed_plain_query_is_encoded_as_given() {
        let engines = default_engines();
        let sel = selected();
        assert_eq!(
            resolve(" hi ", &engines, &sel).unwrap(),
            Resolution::Navigate {
                url: "https://www.google.com/search?q=%20hi%20".into(),
                bang_used: false,
            }
        );
    }

    #[test]
    fn malformed_engine_url_is_a_configuration_error() {
        let engines = vec![engine("bad", "not a url", Some("bad"))];
        let sel = selected();
        let err = resolve("!bad", &engines, &sel).unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn default_engine_index_prefers_the_marked_default() {
        let mut engines = default_engines();
        assert_eq!(default_engine_index(&engines), 0);
        engines[0].is_default = false;
        engines[4].is_default = true;
        assert_eq!(default_engine_index(&engines), 4);
        for e in &mut engines {
            e.is_default = false;
        }
        assert_eq!(default_engine_index(&engines), 0);
    }
}
