use crate::data::{AppSettings, HolidayData, Persistable};
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    println!("Data files initialized in {}", dir.display());
    Ok(())
}

/// Writes all default data files into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    AppSettings::default().save_to(dir)?;
    let holidays = HolidayData::bundled()?;
    tracing::info!(
        version = %holidays.table_version,
        entries = holidays.holidays.len(),
        "writing bundled holiday table"
    );
    holidays.save_to(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_in_dir_creates_files() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        assert!(tmp.path().join("config.yaml").exists());
        assert!(tmp.path().join("holidays.yaml").exists());
    }

    #[test]
    fn test_written_holidays_match_bundled_table() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let loaded = HolidayData::load_from(tmp.path()).unwrap();
        let bundled = HolidayData::bundled().unwrap();
        assert_eq!(loaded.table_version, bundled.table_version);
        assert_eq!(loaded.holidays, bundled.holidays);
        assert!(loaded.to_table().is_ok());
    }

    #[test]
    fn test_written_config_has_settings_key() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let content = fs::read_to_string(tmp.path().join("config.yaml")).unwrap();
        assert!(content.contains("settings:"));
        assert!(content.contains("locale: ja"));
    }

    #[test]
    fn test_run_in_dir_overwrites_existing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("holidays.yaml"), "holidays: []\n").unwrap();
        run_in_dir(tmp.path()).unwrap();
        let loaded = HolidayData::load_from(tmp.path()).unwrap();
        assert!(!loaded.holidays.is_empty());
    }
}
