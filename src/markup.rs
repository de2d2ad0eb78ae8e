//! Generated SVG Fragments
//!
//! Every coordinate, rotation, and font size here is tuned to the one
//! supported label template. They are fixed literals, not parameters.

use crate::template::FontAsset;
use crate::validation::HexColor;

/// Font family declared by the embedded `@font-face`.
pub const FONT_FAMILY: &str = "CustomTextFont";

/// CSS class carrying the logo text styling.
pub const LOGO_CLASS: &str = "custom-logo-text";

/// CSS class carrying the curved-name styling.
pub const NAME_CLASS: &str = "custom-name-text";

/// Element id of the arc the name text follows.
pub const ARC_PATH_ID: &str = "arcPath";

/// Arc the curved name follows.
pub const ARC_PATH_D: &str = "M880,425 A320,320 0 0,1 1140,100";

/// Rotation applied to the logo `<text>` element.
pub const LOGO_TRANSFORM: &str = "rotate(-3.78 257 267)";

/// Rotation applied to the curved-name group.
pub const NAME_TRANSFORM: &str = "rotate(4.22 880 425)";

/// Build the `<style>` block embedding the uploaded font plus the two text
/// classes. The logo class takes the user's text color; the name class is
/// fixed black.
pub fn font_face_style(font: &FontAsset, text_color: &HexColor) -> String {
    format!(
        r#"
<style type="text/css">
  @font-face {{
    font-family: '{FONT_FAMILY}';
    src: url({font_uri}) format('opentype');
  }}
  .{LOGO_CLASS} {{
    font-family: '{FONT_FAMILY}';
    fill: {text_color};
    font-size: 150px;
    text-anchor: middle;
    dominant-baseline: middle;
  }}
  .{NAME_CLASS} {{
    font-family: '{FONT_FAMILY}';
    fill: #000000;
    font-size: 70px;
    text-anchor: middle;
    dominant-baseline: middle;
    letter-spacing: 1.5px;
  }}
</style>
"#,
        font_uri = font.data_uri(),
    )
}

/// Build the logo `<text>` element, or `None` when there are no words.
///
/// One word renders at 150px. Two words render at 120px as a manually tuned
/// two-line stack. Callers cap the slice at two words beforehand.
pub fn logo_text(words: &[&str]) -> Option<String> {
    match words {
        [] => None,
        [word] => Some(format!(
            r#"<text x="1130" y="1300" class="{LOGO_CLASS}" transform="{LOGO_TRANSFORM}" font-size="150px">{word}</text>"#
        )),
        [first, second, ..] => Some(format!(
            r#"<text x="1130" y="1300" class="{LOGO_CLASS}" transform="{LOGO_TRANSFORM}" font-size="120px">
  <tspan y="1300">{first}</tspan>
  <tspan x="1100" y="1400">{second}</tspan>
</text>"#
        )),
    }
}

/// Build the `<defs>` arc plus the curved-name group.
///
/// The name is interpolated verbatim, without XML escaping: a name
/// containing `<` or `&` yields malformed output. Known limitation.
pub fn curved_name(name: &str) -> String {
    format!(
        r##"<defs>
  <path id="{ARC_PATH_ID}" d="{ARC_PATH_D}" fill="none"/>
</defs>
<g transform="{NAME_TRANSFORM}">
  <text class="{NAME_CLASS}">
    <textPath xlink:href="#{ARC_PATH_ID}" startOffset="50%">{name}</textPath>
  </text>
</g>
"##
    )
}
