// Carousel configuration.
//
// Everything has a default; environment variables override:
// - DUALVIEW_THUMB_POLICY: "fixed" (default) or "proportional"
// - DUALVIEW_THUMB_LENGTH: thumbnail length for the fixed policy (80)
// - DUALVIEW_THUMB_GAP: gap between thumbnails (8)
// - DUALVIEW_THUMB_DIVISOR: extent divisor for the proportional policy (4)
// - DUALVIEW_STEP_DELTA: strip scroll button distance (100)
// - DUALVIEW_ANIMATE: animate scroll instructions (on)
// - DUALVIEW_CLAMP: clamp centering to the scrollable range (on)

use crate::scroll::geometry::{DEFAULT_THUMB_DIVISOR, DEFAULT_THUMB_GAP, DEFAULT_THUMB_LENGTH};
use crate::scroll::stepper::DEFAULT_STEP_DELTA;
use crate::scroll::ThumbnailGeometry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub geometry: ThumbnailGeometry,
    pub step_delta: f64,
    pub animate: bool,
    pub clamp_to_content: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            geometry: ThumbnailGeometry::default(),
            step_delta: DEFAULT_STEP_DELTA,
            animate: true,
            clamp_to_content: true,
        }
    }
}

impl CarouselConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read overrides through `lookup`, falling back to defaults on bad input.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let gap = positive_or(&lookup, "DUALVIEW_THUMB_GAP", DEFAULT_THUMB_GAP, true);
        let geometry = match lookup("DUALVIEW_THUMB_POLICY")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            Some("proportional") => ThumbnailGeometry::Proportional {
                divisor: positive_or(&lookup, "DUALVIEW_THUMB_DIVISOR", DEFAULT_THUMB_DIVISOR, false),
                gap,
            },
            _ => ThumbnailGeometry::Fixed {
                length: positive_or(&lookup, "DUALVIEW_THUMB_LENGTH", DEFAULT_THUMB_LENGTH, false),
                gap,
            },
        };

        Self {
            geometry,
            step_delta: positive_or(&lookup, "DUALVIEW_STEP_DELTA", DEFAULT_STEP_DELTA, false),
            animate: flag_or(&lookup, "DUALVIEW_ANIMATE", true),
            clamp_to_content: flag_or(&lookup, "DUALVIEW_CLAMP", true),
        }
    }
}

fn positive_or<F>(lookup: &F, name: &str, default: f64, allow_zero: bool) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && (*v > 0.0 || (allow_zero && *v == 0.0)))
        .unwrap_or(default)
}

fn flag_or<F>(lookup: &F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::from_lookup(lookup(&[]));
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(config.geometry.stride(0.0), 88.0);
        assert_eq!(config.step_delta, 100.0);
        assert!(config.animate);
        assert!(config.clamp_to_content);
    }

    #[test]
    fn test_fixed_overrides() {
        let config = CarouselConfig::from_lookup(lookup(&[
            ("DUALVIEW_THUMB_LENGTH", "88"),
            ("DUALVIEW_THUMB_GAP", "0"),
            ("DUALVIEW_STEP_DELTA", " 60 "),
            ("DUALVIEW_ANIMATE", "off"),
        ]));
        assert_eq!(
            config.geometry,
            ThumbnailGeometry::Fixed { length: 88.0, gap: 0.0 }
        );
        assert_eq!(config.step_delta, 60.0);
        assert!(!config.animate);
    }

    #[test]
    fn test_proportional_policy() {
        let config = CarouselConfig::from_lookup(lookup(&[
            ("DUALVIEW_THUMB_POLICY", "Proportional"),
            ("DUALVIEW_THUMB_DIVISOR", "5"),
        ]));
        assert_eq!(
            config.geometry,
            ThumbnailGeometry::Proportional { divisor: 5.0, gap: 8.0 }
        );
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = CarouselConfig::from_lookup(lookup(&[
            ("DUALVIEW_THUMB_LENGTH", "-3"),
            ("DUALVIEW_THUMB_GAP", "wide"),
            ("DUALVIEW_STEP_DELTA", "0"),
            ("DUALVIEW_CLAMP", "maybe"),
            ("DUALVIEW_THUMB_POLICY", "spiral"),
        ]));
        assert_eq!(config, CarouselConfig::default());
    }
}
