use super::{BuildRequest, ImageSet};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Optional field that remembers an explicit `null`: absent is `None`,
/// `null` is `Some(None)`.
pub type Nullable<T> = Option<Option<T>>;

fn present<'de, D, T>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Block names grouped by their role in the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub main: Vec<String>,
    pub accent: Vec<String>,
    pub detail: Vec<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub lighting: Nullable<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Structured build description, as produced by the text model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub title: String,
    pub difficulty: String,
    #[serde(rename = "estimatedTime")]
    pub estimated_time: String,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Nullable<String>,
    pub palette: Palette,
    pub layers: Vec<String>,
    pub tips: Vec<String>,
    pub features: Vec<String>,
    #[serde(default)]
    pub image_prompt: String,
    /// Fields outside the schema, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Concept {
    /// Deterministic concept used whenever the text model cannot deliver one.
    pub fn fallback(request: &BuildRequest) -> Self {
        Self {
            title: format!("{} {}", request.style, request.idea),
            difficulty: "Intermediate".to_string(),
            estimated_time: "Unknown".to_string(),
            description: None,
            palette: Palette {
                main: vec!["Oak Planks".to_string()],
                accent: vec!["Cobblestone".to_string()],
                detail: vec!["Glass".to_string()],
                lighting: Some(Some(vec!["Torch".to_string()])),
                extra: Map::new(),
            },
            layers: vec![
                "Foundation".to_string(),
                "Walls".to_string(),
                "Roof".to_string(),
            ],
            tips: vec!["Try mixing blocks for texture.".to_string()],
            features: vec!["Main structure".to_string()],
            image_prompt: format!(
                "Minecraft {} {} in {} biome",
                request.style, request.idea, request.biome
            ),
            extra: Map::new(),
        }
    }
}

/// Payload of `POST /api/generate`: the concept's fields at top level plus
/// the rendered views.
#[derive(Debug, Clone, Serialize)]
pub struct ConceptResponse {
    #[serde(flatten)]
    pub concept: Concept,
    pub images: ImageSet,
}
