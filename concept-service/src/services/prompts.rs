//! Prompt templates sent to the text and image models.

use crate::models::BuildRequest;

/// Instructions for the text model: act as a Minecraft architect and answer
/// with a single JSON object in the concept schema.
pub fn concept_prompt(request: &BuildRequest) -> String {
    format!(
        r#"Act as a professional Minecraft Architect. Create a detailed build concept for:
Idea: {idea}
Style: {style}
Biome: {biome}
Scale: {scale}

You MUST return ONLY valid JSON (no markdown formatting like ```json).
The JSON structure must be exactly like this:
{{
    "title": "A Creative Title",
    "difficulty": "Beginner/Intermediate/Advanced",
    "estimatedTime": "e.g. 2-3 hours",
    "description": "One or two sentences describing the build",
    "palette": {{
        "main": ["Block Name 1", "Block Name 2"],
        "accent": ["Block Name 3"],
        "detail": ["Block Name 4"],
        "lighting": ["Light Block 1"]
    }},
    "layers": ["Step 1: Description", "Step 2: Description", "Step 3: Description"],
    "tips": ["Pro tip 1", "Pro tip 2"],
    "features": ["Feature 1", "Feature 2"],
    "image_prompt": "A cinematic shot of minecraft {style} {idea} in {biome}, rtx on, 8k, photorealistic textures, dramatic lighting"
}}"#,
        idea = request.idea,
        style = request.style,
        biome = request.biome,
        scale = request.scale,
    )
}

/// Image prompt used when the concept did not carry one.
pub fn default_image_prompt(request: &BuildRequest) -> String {
    format!("{} {} minecraft build", request.style, request.idea)
}

/// Remove markdown code fences the model sometimes wraps its JSON in.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}
