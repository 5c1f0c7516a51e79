//! Weapon catalog records as served by stat.ink.
//!
//! Only deserialized, never constructed by the bot itself. Every field the catalog
//! might omit defaults so that one odd entry does not fail the whole fetch.

use serde::Deserialize;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Weapon {
    pub key: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(rename = "type", default)]
    pub weapon_type: WeaponPart,
    #[serde(rename = "name")]
    pub weapon_name: LocalizedName,
    #[serde(rename = "main", default, deserialize_with = "deserialize_nullable_string")]
    pub main_weapon_id: String,
    #[serde(rename = "sub", default)]
    pub sub_weapon: WeaponPart,
    #[serde(rename = "special", default)]
    pub special_weapon: WeaponPart,
    /// Key of the original weapon when this entry is a reskin.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub reskin_of: String,
}

/// Weapon type, sub weapon or special weapon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WeaponPart {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub name: LocalizedName,
}

/// Display name in the locales the bot uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocalizedName {
    #[serde(rename = "en_US", default)]
    pub en_us: String,
    #[serde(rename = "ja_JP", default)]
    pub ja_jp: String,
}

// stat.ink sends null rather than omitting the field
fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
