//! Background/foreground colors and the light-on-dark decision.
//!
//! Colors are given as one grayscale level or three `r:g:b` levels, each in
//! `(0, 1]` with 0 black and 1 white. Bad components never fail a parse; they
//! fall back to the matching component of a default color.

use crate::consts::{RGB_SEPARATOR, SHADING_SEPARATOR};
use crate::prelude::*;
use serde::Serialize;
use std::fmt;

const RGB_CHANNELS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Gray(f64),
    Rgb([f64; RGB_CHANNELS]),
}

impl Color {
    pub const WHITE: Self = Self::Gray(1.0);
    /// Level 0 is never accepted from a color spec, only used as a default.
    pub const BLACK: Self = Self::Gray(0.0);

    /// One level for gray, three for RGB
    pub fn components(&self) -> &[f64] {
        match self {
            Self::Gray(level) => std::slice::from_ref(level),
            Self::Rgb(rgb) => rgb,
        }
    }

    /// Arithmetic mean of the components, used as the color's lightness
    pub fn mean(&self) -> f64 {
        let components = self.components();
        components.iter().sum::<f64>() / components.len() as f64
    }

    /// Level of one channel; a gray color has the same level on every channel.
    fn channel(&self, index: usize) -> f64 {
        match self {
            Self::Gray(level) => *level,
            Self::Rgb(rgb) => rgb.get(index).copied().unwrap_or_default(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gray(level) => write!(f, "{level:.3}"),
            Self::Rgb([r, g, b]) => {
                write!(f, "{r:.3}{RGB_SEPARATOR}{g:.3}{RGB_SEPARATOR}{b:.3}")
            }
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

fn valid_component(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| *v > 0.0 && *v <= 1.0)
}

/// Parses `gray` or `r:g:b` against `default`.
///
/// Components that are missing, unparsable, or outside `(0, 1]` take the
/// default's value for that channel. An empty spec yields `default`.
pub fn parse_color_spec(spec: &str, default: Color) -> Color {
    let spec = spec.trim();
    if spec.is_empty() {
        return default;
    }

    let fields: Vec<&str> = spec.split(RGB_SEPARATOR).collect();
    if fields.len() > RGB_CHANNELS {
        debug!(spec, "ignoring color components past the third");
    }

    let component = |index: usize| {
        let field = fields.get(index).copied().unwrap_or_default();
        valid_component(field).unwrap_or_else(|| {
            let replacement = default.channel(index);
            debug!(spec, field, replacement, "color component replaced by default");
            replacement
        })
    };

    if fields.len() == 1 {
        Color::Gray(component(0))
    } else {
        Color::Rgb([component(0), component(1), component(2)])
    }
}

/// Whether `a` is darker than `b`, comparing mean component levels
pub fn is_darker(a: &Color, b: &Color) -> bool {
    a.mean() < b.mean()
}

/// Phases must be mirrored when the moons are drawn light on a darker
/// background.
pub fn should_invert(background: &Color, foreground: &Color) -> bool {
    is_darker(background, foreground)
}

/// A background/foreground color pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shading {
    pub background: Color,
    pub foreground: Color,
}

impl Default for Shading {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Shading {
    /// Black moons on a white page.
    ///
    /// Its foreground is `Color::BLACK`, so a shading resolved against this
    /// default can carry a 0 component even though parsed components are
    /// always in `(0, 1]`.
    pub const DEFAULT: Self = Self {
        background: Color::WHITE,
        foreground: Color::BLACK,
    };

    /// White moons on a black page
    pub const INVERTED: Self = Self {
        background: Color::BLACK,
        foreground: Color::WHITE,
    };

    /// Parses `background/foreground` against `default`.
    ///
    /// Either half may be left empty or omitted to keep the default's color
    /// for it; each half is otherwise read with [`parse_color_spec`].
    pub fn parse(spec: &str, default: Self) -> Self {
        let spec = spec.trim();
        if spec.is_empty() {
            return default;
        }

        let (background, foreground) = match (
            spec.split_once(SHADING_SEPARATOR),
            spec.rsplit_once(SHADING_SEPARATOR),
        ) {
            (Some((bg, _)), Some((_, fg))) => (bg, fg),
            _ => (spec, ""),
        };

        Self {
            background: parse_color_spec(background, default.background),
            foreground: parse_color_spec(foreground, default.foreground),
        }
    }

    /// See [`should_invert`]
    pub fn should_invert(&self) -> bool {
        should_invert(&self.background, &self.foreground)
    }
}

impl fmt::Display for Shading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SHADING_SEPARATOR}{}", self.background, self.foreground)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_color(actual: Color, expected: Color) {
        let (a, e) = (actual.components(), expected.components());
        assert_eq!(a.len(), e.len(), "{actual} vs {expected}");
        for (x, y) in a.iter().zip(e) {
            assert!((x - y).abs() < 1e-12, "{actual} vs {expected}");
        }
    }

    #[test]
    fn test_parse_gray() {
        assert_color(parse_color_spec("0.5", Color::WHITE), Color::Gray(0.5));
        assert_color(parse_color_spec(" 1 ", Color::BLACK), Color::Gray(1.0));
    }

    #[test]
    fn test_parse_rgb() {
        assert_color(
            parse_color_spec("0.1:0.2:0.3", Color::WHITE),
            Color::Rgb([0.1, 0.2, 0.3]),
        );
    }

    #[test]
    fn test_out_of_range_gray_takes_default() {
        assert_color(parse_color_spec("1.5", Color::WHITE), Color::WHITE);
        assert_color(parse_color_spec("0", Color::Gray(0.7)), Color::Gray(0.7));
        assert_color(parse_color_spec("-0.2", Color::Gray(0.7)), Color::Gray(0.7));
    }

    #[test]
    fn test_bad_rgb_component_takes_default_channel() {
        let default = Color::Rgb([0.4, 0.5, 0.6]);
        assert_color(
            parse_color_spec("0.1:2.0:0.3", default),
            Color::Rgb([0.1, 0.5, 0.3]),
        );
        assert_color(
            parse_color_spec("x:0.2:0.3", default),
            Color::Rgb([0.4, 0.2, 0.3]),
        );
    }

    #[test]
    fn test_short_rgb_fills_from_default() {
        assert_color(
            parse_color_spec("0.1:0.2", Color::Gray(0.9)),
            Color::Rgb([0.1, 0.2, 0.9]),
        );
    }

    #[test]
    fn test_extra_rgb_components_ignored() {
        assert_color(
            parse_color_spec("0.1:0.2:0.3:0.4", Color::WHITE),
            Color::Rgb([0.1, 0.2, 0.3]),
        );
    }

    #[test]
    fn test_empty_spec_is_default() {
        assert_color(parse_color_spec("", Color::Gray(0.25)), Color::Gray(0.25));
        assert_color(parse_color_spec("   ", Color::Gray(0.25)), Color::Gray(0.25));
    }

    #[test]
    fn test_resolved_components_in_range() {
        for spec in ["1.5", "0", "abc", "0.3:9:-1", "0.2:0.2:0.2:7"] {
            let color = parse_color_spec(spec, Color::Gray(0.5));
            for c in color.components() {
                assert!(*c > 0.0 && *c <= 1.0, "{spec} -> {color}");
            }
        }
    }

    #[test]
    fn test_mean_and_is_darker() {
        assert!((Color::Rgb([0.2, 0.4, 0.9]).mean() - 0.5).abs() < 1e-12);
        assert!(is_darker(&Color::BLACK, &Color::WHITE));
        assert!(!is_darker(&Color::WHITE, &Color::BLACK));
        assert!(!is_darker(&Color::Gray(0.5), &Color::Gray(0.5)));
        // Mixed forms compare by mean
        assert!(is_darker(&Color::Rgb([0.1, 0.1, 0.4]), &Color::Gray(0.3)));
    }

    #[test]
    fn test_should_invert() {
        assert!(!Shading::DEFAULT.should_invert());
        assert!(Shading::INVERTED.should_invert());
        assert!(should_invert(&Color::Gray(0.2), &Color::Gray(0.8)));
    }

    #[test]
    fn test_shading_parse() {
        let shading = Shading::parse("0.2/0.9", Shading::DEFAULT);
        assert_color(shading.background, Color::Gray(0.2));
        assert_color(shading.foreground, Color::Gray(0.9));

        let shading = Shading::parse("0.1:0.1:0.4/1", Shading::DEFAULT);
        assert_color(shading.background, Color::Rgb([0.1, 0.1, 0.4]));
        assert_color(shading.foreground, Color::WHITE);
        assert!(shading.should_invert());
    }

    #[test]
    fn test_shading_parse_partial() {
        // Background only
        let shading = Shading::parse("0.5", Shading::DEFAULT);
        assert_color(shading.background, Color::Gray(0.5));
        assert_color(shading.foreground, Color::BLACK);

        // Foreground only
        let shading = Shading::parse("/0.5", Shading::DEFAULT);
        assert_color(shading.background, Color::WHITE);
        assert_color(shading.foreground, Color::Gray(0.5));

        // Nothing
        assert_eq!(Shading::parse("", Shading::INVERTED), Shading::INVERTED);
    }

    #[test]
    fn test_shading_parse_uses_outer_fields() {
        let shading = Shading::parse("0.3/junk/0.6", Shading::DEFAULT);
        assert_color(shading.background, Color::Gray(0.3));
        assert_color(shading.foreground, Color::Gray(0.6));
    }

    #[test]
    fn test_zero_level_only_from_default() {
        // An explicit 0 is rejected, so black survives only as the default
        let shading = Shading::parse("0.5/0", Shading::DEFAULT);
        assert_color(shading.foreground, Color::BLACK);

        let custom = Shading {
            background: Color::WHITE,
            foreground: Color::Gray(0.3),
        };
        let shading = Shading::parse("0.5/0", custom);
        assert_color(shading.foreground, Color::Gray(0.3));
        assert!(shading.foreground.components().iter().all(|c| *c > 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::Gray(0.5).to_string(), "0.500");
        assert_eq!(Color::Rgb([0.1, 0.25, 1.0]).to_string(), "0.100:0.250:1.000");
        assert_eq!(Shading::DEFAULT.to_string(), "1.000/0.000");
    }

    #[test]
    fn test_serialize_as_directive() {
        let json = serde_json::to_string(&Shading::INVERTED).unwrap();
        assert_eq!(json, r#"{"background":"0.000","foreground":"1.000"}"#);
    }
}
