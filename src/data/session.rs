use crate::calc::Rokuyo;
use crate::data::persistence::{Format, Persistable};
use serde::{Deserialize, Serialize};

/// View state carried between TUI launches: the last viewed year and rokuyō filter.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Session {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rokuyo_filter: Option<Rokuyo>,
}

impl Persistable for Session {
    fn filename() -> &'static str {
        "session.json"
    }
    fn format() -> Format {
        Format::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_session_default_is_empty() {
        let s = Session::default();
        assert!(s.year.is_none());
        assert!(s.rokuyo_filter.is_none());
    }

    #[test]
    fn test_session_save_to_load_from() {
        let tmp = TempDir::new().unwrap();
        let s = Session {
            year: Some(2027),
            rokuyo_filter: Some(Rokuyo::Taian),
        };
        s.save_to(tmp.path()).unwrap();
        let raw = std::fs::read_to_string(tmp.path().join("session.json")).unwrap();
        assert!(raw.contains("taian"));
        assert_eq!(Session::load_from(tmp.path()).unwrap(), s);
    }

    #[test]
    fn test_session_tolerates_missing_fields() {
        let s: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Session::default());
    }
}
