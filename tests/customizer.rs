//! Pipeline Property Tests
//!
//! These tests pin down the documented customizer behaviors: marker
//! no-ops, the one-/two-word logo shapes, total recoloring, and the
//! font-embedding round trip.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use labelsmith_core::pipeline::XLINK_NAMESPACE;
use labelsmith_core::{
    customize, export, preview_data_uri, ColorTriple, CustomizeRequest, FontAsset, HexColor,
    Template,
};

const TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 2000 2000">
  <rect width="2000" height="2000" fill="#A8D48C"/>
  <circle cx="100" cy="100" r="50" fill="#a8d48c"/>
  <path d="M0,0 L10,10" fill="#88A585"/>
  <path d="M5,5 L15,15" fill="#FF006F"/>
  <rect x="1" y="1" width="2" height="2" fill="#123456"/>
</svg>"##;

fn test_font() -> FontAsset {
    FontAsset::new(vec![0x00, 0x01, 0x00, 0x00, 0xDE, 0xAD, 0xBE, 0xEF])
}

fn request(logo: &str, name: &str) -> CustomizeRequest {
    CustomizeRequest {
        logo_phrase: logo.to_string(),
        name_string: name.to_string(),
        colors: ColorTriple::default(),
    }
}

fn colors(main: &str, secondary: &str, text: &str) -> ColorTriple {
    ColorTriple {
        main: HexColor::parse(main).unwrap(),
        secondary: HexColor::parse(secondary).unwrap(),
        text: HexColor::parse(text).unwrap(),
    }
}

#[test]
fn missing_close_tag_skips_text_layers() {
    let template = Template::new(r##"<svg viewBox="0 0 10 10"><rect fill="#A8D48C"/>"##);
    let asset = customize(&template, &test_font(), &request("Matcha", "Katja"));

    // Namespace and font embedding still happen.
    assert!(asset.svg.contains(XLINK_NAMESPACE));
    assert!(asset.svg.contains("@font-face"));

    // No text layers were inserted.
    assert!(!asset.svg.contains("<textPath"));
    assert!(!asset.svg.contains(r#"class="custom-logo-text""#));
    assert!(asset.warnings.is_empty());
}

#[test]
fn template_without_any_svg_markers_passes_through() {
    let template = Template::new("just some text, no markup at all");
    let asset = customize(&template, &test_font(), &request("Matcha", "Katja"));
    assert_eq!(asset.svg, "just some text, no markup at all");
}

#[test]
fn xlink_namespace_inserted_exactly_once() {
    let template = Template::new(TEMPLATE);
    assert!(!template.declares_xlink_namespace());

    let asset = customize(&template, &test_font(), &request("Matcha", "Katja"));
    assert_eq!(asset.svg.matches(XLINK_NAMESPACE).count(), 1);

    // The declaration landed inside the first <svg ...> tag.
    let tag_end = asset.svg.find('>').unwrap();
    assert!(asset.svg[..tag_end].contains(XLINK_NAMESPACE));
}

#[test]
fn existing_xlink_namespace_is_left_alone() {
    let template = Template::new(format!(
        r#"<svg {XLINK_NAMESPACE} viewBox="0 0 10 10"></svg>"#
    ));
    let asset = customize(&template, &test_font(), &request("", ""));
    assert_eq!(asset.svg.matches("xmlns:xlink").count(), 1);
}

#[test]
fn empty_logo_phrase_emits_no_logo_element() {
    let asset = customize(&Template::new(TEMPLATE), &test_font(), &request("", "Katja"));
    assert!(!asset.svg.contains(r#"class="custom-logo-text""#));

    // The curved name is emitted regardless.
    assert!(asset.svg.contains("<textPath"));
    assert!(asset.svg.contains(">Katja</textPath>"));
}

#[test]
fn one_word_logo_is_a_single_150px_element() {
    let asset = customize(
        &Template::new(TEMPLATE),
        &test_font(),
        &request("Matcha", "Katja"),
    );

    let element = r#"<text x="1130" y="1300" class="custom-logo-text" transform="rotate(-3.78 257 267)" font-size="150px">Matcha</text>"#;
    assert_eq!(asset.svg.matches(element).count(), 1);
    assert!(!asset.svg.contains("<tspan"));
    assert!(asset.warnings.is_empty());
}

#[test]
fn two_word_logo_is_a_120px_two_line_stack() {
    let asset = customize(
        &Template::new(TEMPLATE),
        &test_font(),
        &request("Green Tea", "Katja"),
    );

    assert!(asset.svg.contains(r#"font-size="120px""#));
    assert!(asset.svg.contains(r#"<tspan y="1300">Green</tspan>"#));
    assert!(asset.svg.contains(r#"<tspan x="1100" y="1400">Tea</tspan>"#));
    assert!(asset.warnings.is_empty());
}

#[test]
fn three_word_logo_behaves_like_two_words_plus_warning() {
    let truncated = customize(
        &Template::new(TEMPLATE),
        &test_font(),
        &request("A B C", "Katja"),
    );
    let reference = customize(
        &Template::new(TEMPLATE),
        &test_font(),
        &request("A B", "Katja"),
    );

    assert_eq!(truncated.svg, reference.svg);
    assert_eq!(truncated.warnings.len(), 1);
    assert_eq!(truncated.warnings[0].rule, "logo_word_count");
    assert!(reference.warnings.is_empty());
}

#[test]
fn legacy_pink_path_is_stripped() {
    let asset = customize(&Template::new(TEMPLATE), &test_font(), &request("", ""));
    assert!(!asset.svg.to_lowercase().contains("#ff006f"));
}

#[test]
fn color_substitution_is_total_and_case_insensitive() {
    let mut req = request("Matcha", "Katja");
    req.colors = colors("#112233", "#445566", "#778899");
    let asset = customize(&Template::new(TEMPLATE), &test_font(), &req);

    let lowered = asset.svg.to_lowercase();
    assert!(!lowered.contains("a8d48c"));
    assert!(!lowered.contains("88a585"));

    // Both casings of the main placeholder were rewritten.
    assert_eq!(asset.svg.matches("#112233").count(), 2);
    assert_eq!(asset.svg.matches("#445566").count(), 1);

    // Unrelated hex literals survive untouched.
    assert!(asset.svg.contains(r##"fill="#123456""##));
}

#[test]
fn embedded_font_round_trips_to_original_bytes() {
    let font = test_font();
    let asset = customize(&Template::new(TEMPLATE), &font, &request("Matcha", "Katja"));

    let marker = "src: url(data:font/opentype;base64,";
    let start = asset.svg.find(marker).unwrap() + marker.len();
    let end = start + asset.svg[start..].find(')').unwrap();
    let decoded = STANDARD.decode(&asset.svg[start..end]).unwrap();

    assert_eq!(decoded, font.bytes());
}

#[test]
fn curved_name_is_interpolated_verbatim() {
    let asset = customize(
        &Template::new(TEMPLATE),
        &test_font(),
        &request("", "Bert & Ernie"),
    );
    assert!(asset.svg.contains(">Bert & Ernie</textPath>"));
}

#[test]
fn inputs_are_not_mutated_and_calls_are_independent() {
    let template = Template::new(TEMPLATE);
    let font = test_font();
    let req = request("Matcha", "Katja");

    let first = customize(&template, &font, &req);
    let second = customize(&template, &font, &req);

    assert_eq!(template.text(), TEMPLATE);
    assert_eq!(first.svg, second.svg);
    assert_ne!(first.id, second.id);
}

#[test]
fn export_describes_the_download_contract() {
    let asset = customize(&Template::new(TEMPLATE), &test_font(), &request("", ""));
    let exported = export(&asset);

    assert_eq!(exported.filename, "custom_logo_and_curved_name.svg");
    assert_eq!(exported.mime, "image/svg+xml");
    assert_eq!(exported.size_bytes, asset.svg.len());
    assert_eq!(exported.hash.len(), 64);
    assert_eq!(
        STANDARD.decode(&exported.data_base64).unwrap(),
        asset.svg.as_bytes()
    );

    let uri = preview_data_uri(&asset.svg);
    assert!(uri.starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn file_round_trip_through_a_temp_dir() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("label.svg");
    let font_path = dir.path().join("font.otf");
    std::fs::write(&template_path, TEMPLATE).unwrap();
    std::fs::write(&font_path, test_font().bytes()).unwrap();

    let template = Template::new(std::fs::read_to_string(&template_path).unwrap());
    let font = FontAsset::new(std::fs::read(&font_path).unwrap());
    let asset = customize(&template, &font, &request("Green Tea", "Katja"));

    let out_path = dir.path().join("custom_logo_and_curved_name.svg");
    std::fs::write(&out_path, asset.svg.as_bytes()).unwrap();
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), asset.svg);
}
