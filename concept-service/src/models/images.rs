use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed renderings requested for every build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Cinematic,
    Palette,
    Angle,
    Blueprint,
}

impl View {
    pub const ALL: [View; 4] = [View::Cinematic, View::Palette, View::Angle, View::Blueprint];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Cinematic => "cinematic",
            View::Palette => "palette",
            View::Angle => "angle",
            View::Blueprint => "blueprint",
        }
    }

    /// Style fragment appended to the base image prompt for this view.
    pub fn prompt_suffix(&self) -> &'static str {
        match self {
            View::Cinematic => {
                ", cinematic view, detailed lighting, 8k render, photorealistic, voxel art, \
                 Camera angle: eye level serene, Epic composition"
            }
            View::Palette => {
                ", flat lay block palette style, 8k, organized grid, white background, \
                 material breakdown, clean inventory view"
            }
            View::Angle => {
                ", Isometric technical drawing, 8k, schematic style, white background, \
                 3d render, legends detail, clear building details"
            }
            View::Blueprint => {
                ", blueprint schematic style, 8k, blue background, technical drawing, \
                 white lines, top down view"
            }
        }
    }

    pub fn decorate(&self, base_prompt: &str) -> String {
        format!("{}{}", base_prompt, self.prompt_suffix())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image URL per view. The struct shape is what guarantees the response
/// always carries exactly the four view keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    pub cinematic: String,
    pub palette: String,
    pub angle: String,
    pub blueprint: String,
}

impl ImageSet {
    pub fn get(&self, view: View) -> &str {
        match view {
            View::Cinematic => &self.cinematic,
            View::Palette => &self.palette,
            View::Angle => &self.angle,
            View::Blueprint => &self.blueprint,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (View, &str)> + '_ {
        View::ALL.into_iter().map(move |view| (view, self.get(view)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_exactly_four_view_keys() {
        let images = ImageSet {
            cinematic: "a".into(),
            palette: "b".into(),
            angle: "c".into(),
            blueprint: "d".into(),
        };

        let value = serde_json::to_value(&images).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["angle", "blueprint", "cinematic", "palette"]);
    }

    #[test]
    fn decorated_prompts_are_distinct_per_view() {
        let prompts: Vec<String> = View::ALL.iter().map(|v| v.decorate("castle")).collect();

        for (i, a) in prompts.iter().enumerate() {
            assert!(a.starts_with("castle, "));
            for b in &prompts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn suffix_line_continuations_keep_single_spaces() {
        assert!(View::Cinematic
            .prompt_suffix()
            .contains("voxel art, Camera angle: eye level serene"));
        assert!(!View::ALL.iter().any(|v| v.prompt_suffix().contains("  ")));
    }

    #[test]
    fn display_matches_json_key() {
        for view in View::ALL {
            assert_eq!(
                serde_json::to_value(view).unwrap(),
                serde_json::Value::String(view.to_string())
            );
        }
    }
}
