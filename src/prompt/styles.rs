//! Static style catalog and resolution.
//!
//! Two closed, curated tables: one for image transform styles and one for
//! video animation motions. Resolution is total over all string inputs;
//! anything not in a table falls back to a default spec so a bad or missing
//! style identifier can never fail a request.

/// Positive/negative prompt fragments for one image transform style.
#[derive(Debug)]
pub struct StyleSpec {
    pub positive: &'static str,
    pub negative: &'static str,
}

/// Motion description for one video animation style.
///
/// `high_energy` marks the single style that is routed to the alternate
/// provider model and carries extra generation parameters.
#[derive(Debug)]
pub struct MotionSpec {
    pub motion: &'static str,
    pub high_energy: bool,
}

const IMAGE_STYLES: &[(&str, StyleSpec)] = &[
    ("style_clay", StyleSpec {
        positive: "claymation character, hand-molded plasticine texture, visible fingerprints in the clay, stop-motion studio lighting",
        negative: "glossy plastic, airbrushed skin, photorealism",
    }),
    ("style_anime", StyleSpec {
        positive: "vibrant anime illustration, cel shading, clean line art, expressive oversized eyes",
        negative: "3d render, western cartoon, muted colors",
    }),
    ("style_pixel", StyleSpec {
        positive: "retro pixel art portrait, 16-bit sprite, crisp dithering, limited color palette",
        negative: "smooth gradients, photorealism, motion blur",
    }),
    ("style_watercolor", StyleSpec {
        positive: "delicate watercolor painting, soft pigment washes, textured paper grain, loose brush edges",
        negative: "hard outlines, digital flatness, oversaturation",
    }),
    ("style_pop", StyleSpec {
        positive: "bold pop art poster, halftone dots, saturated primary colors, thick ink outlines",
        negative: "pastel tones, soft focus, gritty texture",
    }),
];

const VIDEO_STYLES: &[(&str, MotionSpec)] = &[
    ("vid_dance", MotionSpec {
        motion: "energetic dance performance, rhythmic full-body movement, dynamic camera following the beat",
        high_energy: true,
    }),
    ("vid_breeze", MotionSpec {
        motion: "gentle breeze, hair and clothing swaying softly, calm ambient motion",
        high_energy: false,
    }),
    ("vid_smile", MotionSpec {
        motion: "subtle head turn and a warm natural smile, relaxed blinking",
        high_energy: false,
    }),
    ("vid_orbit", MotionSpec {
        motion: "slow cinematic camera orbit around the subject, parallax depth",
        high_energy: false,
    }),
];

static DEFAULT_IMAGE_STYLE: StyleSpec = StyleSpec {
    positive: "premium 3D cartoon character, polished studio render, soft global illumination, friendly proportions",
    negative: "",
};

static DEFAULT_VIDEO_STYLE: MotionSpec = MotionSpec {
    motion: "cinematic living animation, natural micro movements, gentle breathing, subtle camera drift",
    high_energy: false,
};

pub fn resolve_image_style(style_id: &str) -> &'static StyleSpec {
    IMAGE_STYLES
        .iter()
        .find(|(id, _)| *id == style_id)
        .map(|(_, spec)| spec)
        .unwrap_or(&DEFAULT_IMAGE_STYLE)
}

pub fn resolve_video_style(style_id: &str) -> &'static MotionSpec {
    VIDEO_STYLES
        .iter()
        .find(|(id, _)| *id == style_id)
        .map(|(_, spec)| spec)
        .unwrap_or(&DEFAULT_VIDEO_STYLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_style_resolves_verbatim() {
        let spec = resolve_image_style("style_clay");
        assert!(spec.positive.contains("plasticine"));
        assert!(spec.positive.contains("fingerprints"));
    }

    #[test]
    fn unknown_image_style_falls_back_to_default() {
        for id in ["", "style_nope", "STYLE_CLAY", "   "] {
            let spec = resolve_image_style(id);
            assert!(spec.positive.contains("premium 3D cartoon"));
            assert_eq!(spec.negative, "");
        }
    }

    #[test]
    fn only_the_dance_style_is_high_energy() {
        assert!(resolve_video_style("vid_dance").high_energy);
        for id in ["vid_breeze", "vid_smile", "vid_orbit", "", "vid_unknown"] {
            assert!(!resolve_video_style(id).high_energy, "{} should not be high energy", id);
        }
    }

    #[test]
    fn unknown_video_style_falls_back_to_default() {
        let spec = resolve_video_style("vid_missing");
        assert!(spec.motion.contains("cinematic living animation"));
    }
}
