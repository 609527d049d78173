use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[cfg_attr(test, derive(fake::Dummy))]
pub enum Genre {
    #[default]
    Pop,
    Rock,
    Rap,
    #[strum(to_string = "rnb", serialize = "r&b")]
    #[serde(alias = "r&b")]
    Rnb,
    Country,
}

impl Genre {
    pub fn label(self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
            Genre::Rap => "Rap",
            Genre::Rnb => "R&B",
            Genre::Country => "Country",
        }
    }

    pub fn id(self) -> &'static str {
        self.into()
    }
}
