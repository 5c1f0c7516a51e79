//! Weapon catalog fixtures in the shape served by stat.ink's `/api/v3/weapon`.

fn part_json(key: &str, en_us: &str, ja_jp: &str) -> serde_json::Value {
    serde_json::json!({
        "key": key,
        "aliases": [],
        "name": {
            "en_US": en_us,
            "ja_JP": ja_jp,
        },
    })
}

/// A single original (non-reskin) weapon entry.
///
/// # Arguments
/// - `key` - Catalog key, also used as the English name
/// - `ja_name` - Japanese display name
pub fn weapon_json(key: &str, ja_name: &str) -> serde_json::Value {
    serde_json::json!({
        "key": key,
        "aliases": [key.replace('_', "")],
        "type": part_json("shooter", "Shooters", "シューター"),
        "name": {
            "en_US": key,
            "ja_JP": ja_name,
        },
        "main": key,
        "sub": part_json("kyubanbomb", "Suction Bomb", "キューバンボム"),
        "special": part_json("ultrashot", "Trizooka", "ウルトラショット"),
        "reskin_of": null,
    })
}

/// A reskin entry pointing at `original`.
pub fn reskin_json(key: &str, original: &str) -> serde_json::Value {
    let mut weapon = weapon_json(key, key);
    weapon["main"] = serde_json::json!(original);
    weapon["reskin_of"] = serde_json::json!(original);
    weapon
}

/// A full catalog response body.
///
/// # Arguments
/// - `weapons` - `(key, Japanese name)` for each entry, in order
pub fn catalog_json(weapons: &[(&str, &str)]) -> serde_json::Value {
    serde_json::Value::Array(
        weapons
            .iter()
            .map(|(key, ja_name)| weapon_json(key, ja_name))
            .collect(),
    )
}
