use super::*;

#[test]
fn default_settings_enable_editing_and_sprites() {
    assert_eq!(
        ViewerSettings::default().to_json(),
        json!({ "editing": true, "interpolateViews": true, "zSprite": true })
    );
}

#[test]
fn load_options_use_immediate_source() {
    assert_eq!(
        load_options(MolecularFormat::Pdbqt),
        json!({ "sourceType": "immediate", "fileType": "pdbqt" })
    );
}

#[test]
fn viewer_errors_describe_the_failure() {
    assert_eq!(ViewerError::Unavailable.to_string(), "molecule viewer library is not loaded");
    assert_eq!(
        ViewerError::Load { format: "pdb", message: "bad atom".to_owned() }.to_string(),
        "molecule viewer rejected the pdb structure: bad atom"
    );
}
