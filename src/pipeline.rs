//! Customization Pipeline - Single Entry Point
//!
//! A fixed sequence of text substitutions over one in-memory copy of the
//! template. A missing structural marker turns the affected step into a
//! no-op; the pipeline itself never fails and never touches its inputs.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::markup;
use crate::template::{FontAsset, Template};
use crate::validation::{split_logo_words, ColorTriple, HexColor, Warning};
use crate::ENGINE_VERSION;

/// Placeholder rewritten to the main color.
pub const MAIN_PLACEHOLDER: &str = "#A8D48C";

/// Placeholder rewritten to the secondary color.
pub const SECONDARY_PLACEHOLDER: &str = "#88A585";

/// Fill of the legacy placeholder graphic the text layers always replace.
pub const LEGACY_MARK_FILL: &str = "#FF006F";

/// Namespace declaration required by the curved-name `xlink:href`.
pub const XLINK_NAMESPACE: &str = r#"xmlns:xlink="http://www.w3.org/1999/xlink""#;

/// `<svg` head up to the first whitespace or `>`; splice point for the
/// xlink declaration.
static SVG_OPEN_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<svg[^>]*?)((?:\s|>))").unwrap());

/// The complete first `<svg ...>` opening tag.
static SVG_OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg[^>]*>").unwrap());

/// Any `<path>` element filled with the legacy placeholder pink.
static LEGACY_MARK: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(&format!(r#"<path[^>]*fill=["']{LEGACY_MARK_FILL}["'][^>]*/?>"#))
        .case_insensitive(true)
        .build()
        .unwrap()
});

static MAIN_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(MAIN_PLACEHOLDER)
        .case_insensitive(true)
        .build()
        .unwrap()
});

static SECONDARY_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(SECONDARY_PLACEHOLDER)
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// One customization call's text and color inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomizeRequest {
    /// Logo phrase; at most two whitespace-delimited words are used.
    pub logo_phrase: String,
    /// Name rendered along the arc. Interpolated verbatim, unescaped.
    pub name_string: String,
    #[serde(default)]
    pub colors: ColorTriple,
}

/// The customized document plus everything the caller reports on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomizedSvg {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub engine_version: String,
    pub svg: String,
    pub warnings: Vec<Warning>,
}

/// Run the full customization pipeline.
///
/// Steps, in order: xlink namespace guarantee, font embedding, legacy-mark
/// removal, logo text, curved name, text-layer insertion, placeholder
/// recoloring. Missing `<svg>`/`</svg>` markers degrade to skipped
/// insertions; the document is otherwise returned as-is.
pub fn customize(
    template: &Template,
    font: &FontAsset,
    request: &CustomizeRequest,
) -> CustomizedSvg {
    let mut warnings = Vec::new();

    let mut svg = template.text().to_string();
    svg = ensure_xlink_namespace(svg);
    svg = embed_font_face(svg, font, &request.colors.text);
    svg = strip_legacy_marks(svg);

    let (words, overflow) = split_logo_words(&request.logo_phrase);
    if let Some(warning) = overflow {
        log::warn!("{}", warning.message);
        warnings.push(warning);
    }

    let mut layers = String::new();
    if let Some(logo) = markup::logo_text(&words) {
        layers.push_str(&logo);
        layers.push('\n');
    }
    layers.push_str(&markup::curved_name(&request.name_string));
    svg = insert_before_close(svg, &layers);

    svg = apply_brand_colors(svg, &request.colors);

    CustomizedSvg {
        id: Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        svg,
        warnings,
    }
}

/// Insert the xlink declaration into the opening tag unless the document
/// already declares it anywhere.
fn ensure_xlink_namespace(svg: String) -> String {
    if svg.contains("xmlns:xlink") {
        return svg;
    }
    if !SVG_OPEN_HEAD.is_match(&svg) {
        log::debug!("no <svg> opening tag; skipping xlink namespace insertion");
        return svg;
    }
    SVG_OPEN_HEAD
        .replace(&svg, |caps: &Captures<'_>| {
            format!("{} {XLINK_NAMESPACE}{}", &caps[1], &caps[2])
        })
        .into_owned()
}

/// Splice the `<style>` block right after the first `<svg ...>` tag.
fn embed_font_face(svg: String, font: &FontAsset, text_color: &HexColor) -> String {
    let Some(open_tag) = SVG_OPEN_TAG.find(&svg) else {
        log::debug!("no <svg ...> opening tag; skipping font embedding");
        return svg;
    };

    let style = markup::font_face_style(font, text_color);
    let mut out = String::with_capacity(svg.len() + style.len());
    out.push_str(&svg[..open_tag.end()]);
    out.push_str(&style);
    out.push_str(&svg[open_tag.end()..]);
    out
}

/// Drop the placeholder graphic the text layers always replace.
fn strip_legacy_marks(svg: String) -> String {
    LEGACY_MARK.replace_all(&svg, "").into_owned()
}

/// Splice the generated text layers in front of the first `</svg>`.
///
/// Manual splicing keeps `$` in user-supplied text out of any replacement
/// expansion.
fn insert_before_close(svg: String, layers: &str) -> String {
    let Some(close_at) = svg.find("</svg>") else {
        log::debug!("no </svg> closing tag; skipping text-layer insertion");
        return svg;
    };

    let mut out = String::with_capacity(svg.len() + layers.len());
    out.push_str(&svg[..close_at]);
    out.push_str(layers);
    out.push_str(&svg[close_at..]);
    out
}

/// Blind, case-insensitive, document-wide placeholder recoloring.
fn apply_brand_colors(svg: String, colors: &ColorTriple) -> String {
    let pass = MAIN_PLACEHOLDER_RE
        .replace_all(&svg, colors.main.as_str())
        .into_owned();
    SECONDARY_PLACEHOLDER_RE
        .replace_all(&pass, colors.secondary.as_str())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xlink_splice_lands_in_opening_tag() {
        let spliced = ensure_xlink_namespace(String::from(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="10"></svg>"#,
        ));
        assert!(spliced.starts_with(&format!("<svg {XLINK_NAMESPACE} xmlns=")));
    }

    #[test]
    fn test_xlink_not_duplicated() {
        let already = format!(r#"<svg {XLINK_NAMESPACE}></svg>"#);
        let spliced = ensure_xlink_namespace(already.clone());
        assert_eq!(spliced, already);
    }

    #[test]
    fn test_legacy_mark_removal_is_case_insensitive() {
        let svg = String::from(
            r##"<svg><path d="M0,0" fill="#ff006f"/><path d="M1,1" fill='#FF006F'></path><path fill="#112233"/></svg>"##,
        );
        let stripped = strip_legacy_marks(svg);
        assert!(!stripped.to_lowercase().contains("#ff006f"));
        assert!(stripped.contains(r##"<path fill="#112233"/>"##));
    }

    #[test]
    fn test_insert_before_close_handles_dollar_signs() {
        let svg = String::from("<svg></svg>");
        let out = insert_before_close(svg, "<text>$1 off</text>");
        assert_eq!(out, "<svg><text>$1 off</text></svg>");
    }
}
