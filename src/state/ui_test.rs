use super::*;

#[test]
fn admin_defaults_to_the_upload_tab() {
    assert_eq!(AdminTab::default(), AdminTab::Upload);
}

#[test]
fn dataset_kinds_have_distinct_wire_tokens() {
    let mut tokens: Vec<&str> = DatasetKind::ALL.iter().map(|k| k.wire()).collect();
    tokens.sort_unstable();
    tokens.dedup();
    assert_eq!(tokens.len(), DatasetKind::ALL.len());
}
