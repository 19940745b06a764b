use super::*;
use crate::payload::MolecularFormat;
use serde_json::json;

fn table(columns: &[&str], data: Vec<Vec<serde_json::Value>>) -> TableData {
    TableData { columns: columns.iter().map(|c| (*c).to_owned()).collect(), data }
}

#[test]
fn markup_escapes_text_and_attributes() {
    let mut doc = Markup::document();
    doc.element("p", &[("title", "\"quoted\" & <b>")], "<script>alert(1)</script>");
    let html = doc.finish();
    assert_eq!(
        html,
        "<!DOCTYPE html><p title=\"&quot;quoted&quot; &amp; &lt;b&gt;\">&lt;script&gt;alert(1)&lt;/script&gt;</p>"
    );
}

#[test]
fn script_safe_json_cannot_close_script_element() {
    let literal = script_safe_json(&json!({ "body": "</script><script>x()</script>" }));
    assert!(!literal.contains("</script"));
    let parsed: serde_json::Value = serde_json::from_str(&literal).unwrap();
    assert_eq!(parsed["body"], "</script><script>x()</script>");
}

#[test]
fn html_data_uri_percent_encodes_once() {
    assert_eq!(html_data_uri("<p>a b</p>"), "data:text/html;charset=utf-8,%3Cp%3Ea%20b%3C%2Fp%3E");
    assert_eq!(html_data_uri("100%"), "data:text/html;charset=utf-8,100%25");
}

#[test]
fn table_document_escapes_headers_and_cells() {
    let doc = table_document(
        &table(&["<col>"], vec![vec![json!("<img src=x onerror=alert(1)>")]]),
        &RenderConfig::default(),
        0,
    );
    assert!(doc.contains("<th>&lt;col&gt;</th>"));
    assert!(doc.contains("<td>&lt;img src=x onerror=alert(1)&gt;</td>"));
    assert!(doc.contains("<input id=\"q\" type=\"search\""));
    assert!(doc.contains(TABLE_SCRIPT));
}

#[test]
fn table_document_pads_short_rows() {
    let doc = table_document(&table(&["a", "b"], vec![vec![json!(1)]]), &RenderConfig::default(), 0);
    assert!(doc.contains("<tr><td>1</td><td></td></tr>"));
}

#[test]
fn table_document_renders_nested_image_and_frame() {
    let doc = table_document(
        &table(&["img", "html"], vec![vec![json!("data:image/gif;base64,R0lG"), json!("data:text/html,<b>hi</b>")]]),
        &RenderConfig::default(),
        0,
    );
    assert!(doc.contains("<img class=\"thumb\" src=\"data:image/gif;base64,R0lG\" alt=\"\">"));
    assert!(doc.contains(
        "<iframe sandbox=\"allow-scripts\" src=\"data:text/html;charset=utf-8,%3Cb%3Ehi%3C%2Fb%3E\""
    ));
}

#[test]
fn molecule_document_embeds_body_as_inert_json() {
    let payload = MolecularPayload { format: MolecularFormat::Pdb, body: "ATOM </script>".to_owned() };
    let doc = molecule_document(&payload, &RenderConfig::default());
    assert!(doc.contains("<script type=\"application/json\" id=\"payload\">"));
    assert!(doc.contains("\"format\":\"pdb\""));
    assert!(!doc.contains("ATOM </script>"));
    assert!(doc.contains(crate::config::DEFAULT_VIEWER_SCRIPT_URL));
}

#[test]
fn nested_document_passes_html_through() {
    let doc = nested_document("data:text/html,<em>x</em>", &RenderConfig::default(), 1);
    assert_eq!(doc, "<em>x</em>");
}

#[test]
fn nested_document_reports_decode_errors_inline() {
    let doc = nested_document("data:text/table,oops", &RenderConfig::default(), 1);
    assert!(doc.contains("table payload is not valid JSON"));
}

#[test]
fn nested_document_shows_unknown_subtypes_as_text() {
    let doc = nested_document("data:text/plain,a<b", &RenderConfig::default(), 1);
    assert!(doc.contains("data:text/plain,a&lt;b"));
}

#[test]
fn nested_frames_load_lazily() {
    let doc = table_document(
        &table(&["html"], vec![vec![json!("data:text/html,<p>x</p>")]]),
        &RenderConfig::default(),
        0,
    );
    assert!(doc.contains(" loading=\"lazy\" title=\"html\"></iframe>"));
}
