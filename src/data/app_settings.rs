use crate::data::persistence::{Format, Persistable};
use crate::i18n::Locale;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Upper bound for both year picker settings.
const MAX_YEAR_SPAN: u32 = 200;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub locale: Locale,
    /// How many years before the current one the year picker starts at.
    pub year_select_back: u32,
    /// Number of years offered by the year picker.
    pub year_select_count: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            locale: Locale::Ja,
            year_select_back: 2,
            year_select_count: 10,
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
    fn format() -> Format {
        Format::Yaml
    }
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        Ok(SettingsWrapper::load()?.settings)
    }

    pub fn save_to(&self, dir: &std::path::Path) -> Result<()> {
        SettingsWrapper {
            settings: self.clone(),
        }
        .save_to(dir)
    }

    /// Years offered by the year picker around `current_year`. Both settings
    /// are clamped to `MAX_YEAR_SPAN`.
    pub fn selectable_years(&self, current_year: i32) -> Vec<i32> {
        if self.year_select_back > MAX_YEAR_SPAN || self.year_select_count > MAX_YEAR_SPAN {
            tracing::warn!(
                back = self.year_select_back,
                count = self.year_select_count,
                max = MAX_YEAR_SPAN,
                "year picker settings out of range, clamping"
            );
        }
        let back = i32::try_from(self.year_select_back.min(MAX_YEAR_SPAN)).unwrap_or(0);
        let count = i32::try_from(self.year_select_count.min(MAX_YEAR_SPAN)).unwrap_or(0);
        let first = current_year.saturating_sub(back);
        (0..count).map_while(|i| first.checked_add(i)).collect()
    }
}
