//! Self-contained HTML documents for sandboxed frames.
//!
//! SECURITY
//! ========
//! Everything that comes from a payload is escaped for the context it lands
//! in: element text and attribute values through `html-escape`, script data
//! as a JSON literal with `</` neutralized, and frame sources as
//! percent-encoded data URIs. Each nesting level is percent-encoded exactly
//! once, relative to the document that embeds it.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::fmt::Write as _;

use serde_json::json;

use super::SANDBOX_POLICY;
use super::cell::{self, CellContent};
use crate::config::RenderConfig;
use crate::payload::{DecodedPayload, MolecularPayload, TableData, classify, decode};
use crate::util::molecule_viewer::ViewerSettings;

const TABLE_STYLE: &str = "body{margin:0;font:13px/1.4 system-ui,sans-serif}\
.bar{position:sticky;top:0;background:#fff;padding:6px;border-bottom:1px solid #ddd}\
.bar input{width:100%;box-sizing:border-box;padding:4px}\
table{border-collapse:collapse;width:max-content;min-width:100%}\
th,td{border:1px solid #e3e3e3;padding:4px 8px;vertical-align:top;text-align:left}\
th{cursor:pointer;background:#f6f6f6;position:sticky;top:42px}\
img.thumb{max-width:160px;max-height:120px}\
iframe{border:1px solid #ffa630;width:320px;height:200px}";

const TABLE_SCRIPT: &str = "(function(){\
var t=document.getElementById('t'),b=t.tBodies[0],q=document.getElementById('q');\
var rows=Array.prototype.slice.call(b.rows),dir={};\
q.addEventListener('input',function(){var s=q.value.toLowerCase();\
rows.forEach(function(r){r.style.display=r.textContent.toLowerCase().indexOf(s)<0?'none':'';});});\
Array.prototype.forEach.call(t.tHead.rows[0].cells,function(th,i){th.addEventListener('click',function(){\
dir[i]=!dir[i];var k=dir[i]?1:-1;rows.sort(function(x,y){\
var a=x.cells[i].textContent,c=y.cells[i].textContent,na=parseFloat(a),nc=parseFloat(c);\
if(!isNaN(na)&&!isNaN(nc)){return (na-nc)*k;}return a.localeCompare(c)*k;});\
rows.forEach(function(r){b.appendChild(r);});});});})();";

const MOLECULE_SCRIPT: &str = "(function(){\
var p=JSON.parse(document.getElementById('payload').textContent);\
try{var m=new Miew({container:document.getElementById('viewer'),settings:p.settings});\
if(m.init()){m.run();m.load(p.body,{sourceType:'immediate',fileType:p.format});}}\
catch(e){document.getElementById('viewer').textContent=String(e);}})();";

/// Incremental HTML writer with per-context escaping.
///
/// Tag names and scripts are trusted literals from this crate; attribute
/// values and text are escaped on the way in.
#[derive(Debug)]
pub struct Markup {
    buf: String,
}

impl Markup {
    /// Start a document with the HTML5 doctype.
    #[must_use]
    pub fn document() -> Self {
        Self { buf: String::from("<!DOCTYPE html>") }
    }

    pub fn open(&mut self, tag: &'static str, attrs: &[(&'static str, &str)]) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            let _ = write!(
                self.buf,
                " {name}=\"{}\"",
                html_escape::encode_double_quoted_attribute(value)
            );
        }
        self.buf.push('>');
        self
    }

    pub fn close(&mut self, tag: &'static str) -> &mut Self {
        let _ = write!(self.buf, "</{tag}>");
        self
    }

    /// Open and close an element around escaped text.
    pub fn element(&mut self, tag: &'static str, attrs: &[(&'static str, &str)], text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&html_escape::encode_text(text));
        self
    }

    /// Append markup that has already been escaped.
    pub fn trusted(&mut self, html: &str) -> &mut Self {
        self.buf.push_str(html);
        self
    }

    pub fn style(&mut self, css: &'static str) -> &mut Self {
        self.open("style", &[]).trusted(css).close("style")
    }

    pub fn script(&mut self, js: &'static str) -> &mut Self {
        self.open("script", &[]).trusted(js).close("script")
    }

    /// Embed `value` as an inert JSON data block readable by page scripts.
    pub fn json_data(&mut self, id: &'static str, value: &serde_json::Value) -> &mut Self {
        let literal = script_safe_json(value);
        self.open("script", &[("type", "application/json"), ("id", id)])
            .trusted(&literal)
            .close("script")
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Serialize JSON so it cannot terminate an enclosing `<script>` element.
#[must_use]
pub fn script_safe_json(value: &serde_json::Value) -> String {
    value
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

/// `data:` URI for an HTML document, percent-encoded once.
#[must_use]
pub fn html_data_uri(document: &str) -> String {
    format!("data:text/html;charset=utf-8,{}", urlencoding::encode(document))
}

/// Full-page table with client-side search and click-to-sort headers.
#[must_use]
pub fn table_document(table: &TableData, config: &RenderConfig, depth: usize) -> String {
    let mut doc = Markup::document();
    doc.open("html", &[])
        .open("head", &[])
        .open("meta", &[("charset", "utf-8")])
        .style(TABLE_STYLE)
        .close("head")
        .open("body", &[])
        .open("div", &[("class", "bar")])
        .open("input", &[("id", "q"), ("type", "search"), ("placeholder", "Search")])
        .close("div")
        .open("table", &[("id", "t")])
        .open("thead", &[])
        .open("tr", &[]);
    for column in &table.columns {
        doc.element("th", &[], column);
    }
    doc.close("tr").close("thead").open("tbody", &[]);
    for row in 0..table.row_count() {
        doc.open("tr", &[]);
        for value in table.row_cells(row) {
            let content = cell::classify_cell(value, config, depth);
            doc.open("td", &[]);
            write_cell(&mut doc, &content);
            doc.close("td");
        }
        doc.close("tr");
    }
    doc.close("tbody")
        .close("table")
        .script(TABLE_SCRIPT)
        .close("body")
        .close("html");
    doc.finish()
}

fn write_cell(doc: &mut Markup, content: &CellContent) {
    match content {
        CellContent::Empty => {}
        CellContent::Image(src) => {
            doc.open("img", &[("class", "thumb"), ("src", src.as_str()), ("alt", "")]);
        }
        CellContent::Rich { kind, document } => {
            let src = html_data_uri(document);
            doc.open(
                "iframe",
                &[
                    ("sandbox", SANDBOX_POLICY),
                    ("src", src.as_str()),
                    ("loading", "lazy"),
                    ("title", kind.as_str()),
                ],
            )
            .close("iframe");
        }
        CellContent::Text(text) => {
            doc.text(text);
        }
    }
}

/// Viewer page for a structure file, used when a molecule is nested in a cell.
#[must_use]
pub fn molecule_document(payload: &MolecularPayload, config: &RenderConfig) -> String {
    let data = json!({
        "body": payload.body,
        "format": payload.format.as_str(),
        "settings": ViewerSettings::default().to_json(),
    });
    let mut doc = Markup::document();
    doc.open("html", &[])
        .open("head", &[])
        .open("meta", &[("charset", "utf-8")])
        .style("html,body,#viewer{margin:0;width:100%;height:100%}")
        .open("script", &[("src", config.viewer_script_url.as_str())])
        .close("script")
        .close("head")
        .open("body", &[])
        .open("div", &[("id", "viewer")])
        .close("div")
        .json_data("payload", &data)
        .script(MOLECULE_SCRIPT)
        .close("body")
        .close("html");
    doc.finish()
}

/// Preformatted text page.
#[must_use]
pub fn text_document(text: &str) -> String {
    let mut doc = Markup::document();
    doc.open("html", &[])
        .open("head", &[])
        .open("meta", &[("charset", "utf-8")])
        .close("head")
        .open("body", &[])
        .element("pre", &[("style", "white-space:pre-wrap;margin:4px")], text)
        .close("body")
        .close("html");
    doc.finish()
}

/// Document for a rich text found inside a table cell at nesting `depth`.
///
/// Decode failures become a text page carrying the error so the cell still
/// shows something.
#[must_use]
pub fn nested_document(text: &str, config: &RenderConfig, depth: usize) -> String {
    let kind = classify(text);
    match decode(kind, text) {
        Ok(DecodedPayload::Table(table)) => table_document(&table, config, depth),
        Ok(DecodedPayload::Molecular(payload)) => molecule_document(&payload, config),
        Ok(DecodedPayload::Html(markup)) => markup,
        Ok(DecodedPayload::PlainText(text)) => text_document(&text),
        Err(err) => {
            leptos::logging::warn!("nested {kind} payload could not be decoded: {err}");
            text_document(&err.to_string())
        }
    }
}
