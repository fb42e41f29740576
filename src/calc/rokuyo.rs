use crate::i18n::Locale;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The six-day traditional label cycle.
#[derive(
    Serialize, Deserialize, clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Rokuyo {
    #[value(alias = "先勝")]
    Sakigachi,
    #[value(alias = "友引")]
    Tomobiki,
    #[value(alias = "先負")]
    Sakimake,
    #[value(alias = "仏滅")]
    Butsumetsu,
    #[value(alias = "大安")]
    Taian,
    #[value(alias = "赤口")]
    Shakkou,
}

impl Rokuyo {
    /// Cycle order; position `i` is the label for `(month + day) % 6 == i`.
    pub const ALL: [Rokuyo; 6] = [
        Rokuyo::Sakigachi,
        Rokuyo::Tomobiki,
        Rokuyo::Sakimake,
        Rokuyo::Butsumetsu,
        Rokuyo::Taian,
        Rokuyo::Shakkou,
    ];

    pub fn kanji(self) -> &'static str {
        match self {
            Rokuyo::Sakigachi => "先勝",
            Rokuyo::Tomobiki => "友引",
            Rokuyo::Sakimake => "先負",
            Rokuyo::Butsumetsu => "仏滅",
            Rokuyo::Taian => "大安",
            Rokuyo::Shakkou => "赤口",
        }
    }

    pub fn romaji(self) -> &'static str {
        match self {
            Rokuyo::Sakigachi => "Sakigachi",
            Rokuyo::Tomobiki => "Tomobiki",
            Rokuyo::Sakimake => "Sakimake",
            Rokuyo::Butsumetsu => "Butsumetsu",
            Rokuyo::Taian => "Taian",
            Rokuyo::Shakkou => "Shakkou",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ja => self.kanji(),
            Locale::En => self.romaji(),
        }
    }

    /// Next label in filter-cycling order; `None` wraps back to the first label
    /// and the last label wraps to `None`.
    pub fn cycle(current: Option<Rokuyo>) -> Option<Rokuyo> {
        match current {
            None => Some(Rokuyo::ALL[0]),
            Some(r) => {
                let pos = Rokuyo::ALL.iter().position(|&x| x == r).unwrap_or(0);
                Rokuyo::ALL.get(pos + 1).copied()
            }
        }
    }
}

/// Simplified civil rokuyō: `(month + day) % 6` over a fixed label order.
/// `month` is 1-based. This is not the lunisolar rule.
pub fn rokuyo(month: u32, day: u32) -> Rokuyo {
    let index = (month as u64 + day as u64) % 6;
    Rokuyo::ALL[index as usize]
}

pub fn rokuyo_of(date: NaiveDate) -> Rokuyo {
    rokuyo(date.month(), date.day())
}
