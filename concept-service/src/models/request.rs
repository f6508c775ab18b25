use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_STYLE: &str = "medieval";
pub const DEFAULT_BIOME: &str = "plains";
pub const DEFAULT_SCALE: &str = "medium";

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct BuildRequest {
    #[validate(length(min = 1, max = 500, message = "idea must be 1-500 characters"))]
    pub idea: String,

    #[serde(default = "default_style")]
    #[validate(length(max = 100, message = "style must be at most 100 characters"))]
    pub style: String,

    #[serde(default = "default_biome")]
    #[validate(length(max = 100, message = "biome must be at most 100 characters"))]
    pub biome: String,

    #[serde(default = "default_scale")]
    #[validate(length(max = 100, message = "scale must be at most 100 characters"))]
    pub scale: String,
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_biome() -> String {
    DEFAULT_BIOME.to_string()
}

fn default_scale() -> String {
    DEFAULT_SCALE.to_string()
}

impl BuildRequest {
    /// A request for `idea` with every other field at its default.
    pub fn new(idea: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            style: default_style(),
            biome: default_biome(),
            scale: default_scale(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_biome(mut self, biome: impl Into<String>) -> Self {
        self.biome = biome.into();
        self
    }

    pub fn with_scale(mut self, scale: impl Into<String>) -> Self {
        self.scale = scale.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_take_defaults() {
        let request: BuildRequest = serde_json::from_str(r#"{"idea": "castle"}"#).unwrap();

        assert_eq!(request.idea, "castle");
        assert_eq!(request.style, "medieval");
        assert_eq!(request.biome, "plains");
        assert_eq!(request.scale, "medium");
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let request: BuildRequest = serde_json::from_str(
            r#"{"idea": "castle", "style": "gothic", "biome": "snow", "scale": "large"}"#,
        )
        .unwrap();

        let expected = BuildRequest::new("castle")
            .with_style("gothic")
            .with_biome("snow")
            .with_scale("large");
        assert_eq!(request, expected);
    }

    #[test]
    fn missing_idea_is_rejected() {
        assert!(serde_json::from_str::<BuildRequest>(r#"{"style": "gothic"}"#).is_err());
    }

    #[test]
    fn empty_idea_fails_validation() {
        assert!(BuildRequest::new("").validate().is_err());
        assert!(BuildRequest::new("castle").validate().is_ok());
    }

    #[test]
    fn oversized_style_fails_validation() {
        let request = BuildRequest::new("castle").with_style("x".repeat(101));
        assert!(request.validate().is_err());
    }
}
