use std::collections::HashMap;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct MaterialsConfig {
    pub materials: HashMap<String, MaterialDef>,
}

#[derive(Deserialize)]
pub struct MaterialDef {
    pub shininess: Option<u8>,
}

#[derive(Deserialize)]
pub struct TilesConfig {
    pub tiles: Vec<TileDef>,
}

#[derive(Deserialize)]
pub struct TileDef {
    pub name: String,
    pub id: Option<u16>,
    pub solid: Option<bool>,
    /// "default" | "water"
    pub render_pass: Option<String>,
    /// "opaque" | "transparent" | "merged"
    pub transparency: Option<String>,
    /// Key into the material catalog; defaults to "default".
    pub material: Option<String>,
    pub textures: Option<TexturesDef>,
}

/// Per-face atlas offsets in tile units; `all` fills any face not
/// given explicitly.
#[derive(Deserialize, Default)]
pub struct TexturesDef {
    pub all: Option<[i32; 2]>,
    pub top: Option<[i32; 2]>,
    pub bottom: Option<[i32; 2]>,
    pub side: Option<[i32; 2]>,
}
