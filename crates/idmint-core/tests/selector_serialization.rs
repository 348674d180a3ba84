use idmint_core::{EanFormat, FileType, IsbnFormat, MimeType};

#[test]
fn serializes_selectors_with_wire_names() {
    let value = serde_json::json!([
        IsbnFormat::Isbn13,
        EanFormat::Ean8,
        FileType::Executable,
        MimeType::Message,
    ]);
    let json = serde_json::to_string(&value).expect("serialize selectors");
    assert_eq!(json, r#"["isbn-13","ean-8","executable","message"]"#);
}

#[test]
fn deserialized_names_agree_with_display() {
    let format: IsbnFormat = serde_json::from_str(r#""isbn-10""#).expect("parse isbn format");
    assert_eq!(format.to_string(), "isbn-10");

    let file_type: FileType = serde_json::from_str(r#""compressed""#).expect("parse file type");
    assert_eq!(file_type.to_string(), "compressed");

    assert!(serde_json::from_str::<EanFormat>(r#""ean-12""#).is_err());
}
