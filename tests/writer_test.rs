//! Tests for the streaming document writer

use chimecfg::domain::{escape_markup, unescape_markup, DocumentError, DocumentWriter};

// ============================================================
// Structure Tests
// ============================================================

#[test]
fn given_nested_entities_when_writing_then_produces_expected_document() {
    let mut writer = DocumentWriter::new();
    writer.open_entity("root");
    writer.open_entity("alarmHour").write_text("7");
    writer.close_entity().unwrap();
    writer.close_entity().unwrap();

    let document = writer.finish().unwrap();
    assert_eq!(document, "<root><alarmHour>7</alarmHour></root>");
}

#[test]
fn given_no_calls_when_finishing_then_yields_empty_document() {
    let document = DocumentWriter::new().finish().unwrap();
    assert_eq!(document, "");
}

#[test]
fn given_entity_without_content_when_closing_then_self_closes() {
    let mut writer = DocumentWriter::new();
    writer.open_entity("root");
    writer.open_entity("gap");
    writer.close_entity().unwrap();
    writer.close_entity().unwrap();

    assert_eq!(writer.finish().unwrap(), "<root><gap/></root>");
}

#[test]
fn given_sibling_after_self_closing_entity_when_writing_then_no_stray_bracket() {
    let mut writer = DocumentWriter::new();
    writer.open_entity("root");
    writer.open_entity("gap");
    writer.close_entity().unwrap();
    writer.open_entity("next").write_text("x");
    writer.close_entity().unwrap();
    writer.close_entity().unwrap();

    assert_eq!(writer.finish().unwrap(), "<root><gap/><next>x</next></root>");
}

#[test]
fn given_text_after_child_when_writing_then_appends_as_sibling() {
    let mut writer = DocumentWriter::new();
    writer.open_entity("root");
    writer.open_entity("child").write_text("x");
    writer.close_entity().unwrap();
    writer.write_text("tail");
    writer.close_entity().unwrap();

    assert_eq!(writer.finish().unwrap(), "<root><child>x</child>tail</root>");
}

#[test]
fn given_open_entities_when_writing_then_depth_tracks_nesting() {
    let mut writer = DocumentWriter::new();
    assert_eq!(writer.depth(), 0);
    writer.open_entity("root");
    writer.open_entity("inner");
    assert_eq!(writer.depth(), 2);
    writer.close_entity().unwrap();
    assert_eq!(writer.depth(), 1);
}

// ============================================================
// Attribute Tests
// ============================================================

#[test]
fn given_attributes_when_writing_then_insertion_order_preserved() {
    let mut writer = DocumentWriter::new();
    writer.open_entity("tone");
    writer.write_attribute("format", "mp3");
    writer.write_attribute("rate", "44100");
    writer.write_text("beep");
    writer.close_entity().unwrap();

    assert_eq!(
        writer.finish().unwrap(),
        r#"<tone format="mp3" rate="44100">beep</tone>"#
    );
}

#[test]
fn given_attributes_on_empty_entity_when_closing_then_kept_on_self_closing_tag() {
    let mut writer = DocumentWriter::new();
    writer.open_entity("tone");
    writer.write_attribute("format", "mp3");
    writer.close_entity().unwrap();

    assert_eq!(writer.finish().unwrap(), r#"<tone format="mp3"/>"#);
}

#[test]
fn given_attribute_after_tag_closed_when_writing_then_silently_ignored() {
    let mut writer = DocumentWriter::new();
    writer.open_entity("root").write_text("x");
    writer.write_attribute("late", "1");
    writer.close_entity().unwrap();

    assert_eq!(writer.finish().unwrap(), "<root>x</root>");
}

#[test]
fn given_attribute_value_with_markup_when_writing_then_escaped() {
    let mut writer = DocumentWriter::new();
    writer.open_entity("tone");
    writer.write_attribute("label", r#"loud & "clear""#);
    writer.close_entity().unwrap();

    assert_eq!(
        writer.finish().unwrap(),
        r#"<tone label="loud &amp; &quot;clear&quot;"/>"#
    );
}

// ============================================================
// Balance Invariant Tests
// ============================================================

#[test]
fn given_empty_stack_when_closing_then_unbalanced_close_error() {
    let mut writer = DocumentWriter::new();
    let err = writer.close_entity().unwrap_err();
    assert_eq!(err, DocumentError::UnbalancedClose);
}

#[test]
fn given_more_closes_than_opens_when_closing_then_fails_at_the_extra_close() {
    let mut writer = DocumentWriter::new();
    writer.open_entity("root").write_text("x");
    writer.close_entity().unwrap();
    let err = writer.close_entity().unwrap_err();
    assert_eq!(err, DocumentError::UnbalancedClose);
}

#[test]
fn given_unclosed_entity_when_finishing_then_names_the_innermost() {
    let mut writer = DocumentWriter::new();
    writer.open_entity("root");
    writer.open_entity("alarmHour");

    let err = writer.finish().unwrap_err();
    assert_eq!(err, DocumentError::UnclosedEntity("alarmHour".to_string()));
}

#[test]
fn given_balanced_sequence_when_finishing_then_succeeds() {
    let mut writer = DocumentWriter::new();
    for _ in 0..3 {
        writer.open_entity("level");
    }
    for _ in 0..3 {
        writer.close_entity().unwrap();
    }
    assert!(writer.finish().is_ok());
}

// ============================================================
// Escaping Tests
// ============================================================

#[test]
fn given_markup_in_text_when_writing_then_escapes_five_characters() {
    let mut writer = DocumentWriter::new();
    writer.open_entity("root").write_text("a & b < c");
    writer.close_entity().unwrap();

    assert_eq!(writer.finish().unwrap(), "<root>a &amp; b &lt; c</root>");
}

#[test]
fn given_already_escaped_text_when_writing_then_double_escapes() {
    // Sequential pass order means an input "&amp;" is escaped again, not
    // collapsed. Byte-exact round trips with older documents rely on this.
    let mut writer = DocumentWriter::new();
    writer.open_entity("root").write_text("&amp;");
    writer.close_entity().unwrap();

    assert_eq!(writer.finish().unwrap(), "<root>&amp;amp;</root>");
}

#[test]
fn given_escaped_output_when_decoding_then_inverts_exactly() {
    let original = r#"tones & <bells> "ring" 'twice'"#;
    assert_eq!(unescape_markup(&escape_markup(original)), original);
}
