use super::*;

#[test]
fn small_documents_are_inlined_as_data_uris() {
    let config = RenderConfig::default();
    assert_eq!(
        frame_source("<p>hi</p>", &config),
        FrameSource::Inline("data:text/html;charset=utf-8,%3Cp%3Ehi%3C%2Fp%3E".to_owned())
    );
}

#[test]
fn large_documents_are_deferred_to_object_urls() {
    let config = RenderConfig { object_url_min_bytes: 8, ..RenderConfig::default() };
    assert_eq!(frame_source("<p>12345</p>", &config), FrameSource::Deferred);
}

#[test]
fn sandbox_policy_omits_same_origin() {
    assert!(!SANDBOX_POLICY.contains("allow-same-origin"));
    assert!(!SANDBOX_POLICY.contains("allow-top-navigation"));
}

#[test]
fn deferred_documents_start_blank() {
    let config = RenderConfig { object_url_min_bytes: 1, ..RenderConfig::default() };
    assert_eq!(frame_source("<p>x</p>", &config), FrameSource::Deferred);
    assert_eq!(BLANK_SRC, "about:blank");
}
