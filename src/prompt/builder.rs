//! Prompt templates and provider payload construction.
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{json, Value};

use crate::prompt::styles::{MotionSpec, StyleSpec};

/// Clip length submitted with high-energy motion jobs, in seconds.
pub const DANCE_CLIP_SECONDS: u32 = 5;
/// Motion-strength scalar submitted with high-energy motion jobs.
pub const DANCE_MOTION_STRENGTH: f64 = 0.8;

pub fn build_image_prompt(spec: &StyleSpec) -> String {
    format!(
        "masterpiece, best quality, ultra detailed, clean studio lighting. STYLE: {} STRICT NEGATIVE: {}",
        spec.positive, spec.negative
    )
}

pub fn build_video_prompt(spec: &MotionSpec) -> String {
    format!(
        "Animate this photo: {}. Keep the subject's face and identity exactly as in the source image, preserve body proportions, no warping or distortion of facial features.",
        spec.motion
    )
}

/// Encode image bytes as an inline `data:` reference.
///
/// The provider accepts only the inline form, not a separate upload step.
/// Uploads without an image content type are tagged as `image/png`.
pub fn image_data_url(bytes: &[u8], content_type: Option<&str>) -> String {
    let mime = content_type
        .filter(|ct| ct.starts_with("image/"))
        .unwrap_or("image/png");
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

pub fn image_input(prompt: &str, data_url: &str) -> Value {
    json!({
        "prompt": prompt,
        "image": data_url,
    })
}

/// High-energy motion jobs carry a fixed clip duration and motion strength;
/// every other video path omits both fields.
pub fn video_input(prompt: &str, data_url: &str, high_energy: bool) -> Value {
    let mut input = json!({
        "prompt": prompt,
        "image": data_url,
    });
    if high_energy {
        input["duration"] = json!(DANCE_CLIP_SECONDS);
        input["motion_strength"] = json!(DANCE_MOTION_STRENGTH);
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::styles::{resolve_image_style, resolve_video_style};

    #[test]
    fn image_prompt_interpolates_both_fragments() {
        let prompt = build_image_prompt(resolve_image_style("style_clay"));
        assert!(prompt.starts_with("masterpiece"));
        assert!(prompt.contains("STYLE: claymation"));
        assert!(prompt.contains("STRICT NEGATIVE: glossy plastic"));
    }

    #[test]
    fn empty_style_id_uses_the_default_cartoon_spec() {
        let prompt = build_image_prompt(resolve_image_style(""));
        assert!(prompt.contains("premium 3D cartoon"));
        assert!(prompt.ends_with("STRICT NEGATIVE: "));
    }

    #[test]
    fn video_prompt_instructs_identity_preservation() {
        let prompt = build_video_prompt(resolve_video_style("vid_breeze"));
        assert!(prompt.contains("gentle breeze"));
        assert!(prompt.contains("identity"));
        assert!(prompt.contains("distortion"));
    }

    #[test]
    fn data_url_is_tagged_with_the_upload_media_type() {
        let url = image_data_url(b"abc", Some("image/jpeg"));
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn data_url_defaults_to_png_without_an_image_content_type() {
        assert!(image_data_url(b"abc", None).starts_with("data:image/png;base64,"));
        assert!(image_data_url(b"abc", Some("application/octet-stream")).starts_with("data:image/png;base64,"));
    }

    #[test]
    fn only_high_energy_video_input_carries_extra_fields() {
        let dance = video_input("p", "d", true);
        assert_eq!(dance["duration"], json!(DANCE_CLIP_SECONDS));
        assert_eq!(dance["motion_strength"], json!(DANCE_MOTION_STRENGTH));

        let calm = video_input("p", "d", false);
        assert!(calm.get("duration").is_none());
        assert!(calm.get("motion_strength").is_none());
    }
}
