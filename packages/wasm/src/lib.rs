//! Browser bindings.
//!
//! Documents cross the boundary as JSON strings; the page keeps them in
//! `localStorage` under the same keys the native store uses.

use std::fmt::Display;
use wasm_bindgen::prelude::*;
use webbuilder_common::MemoryStore;
use webbuilder_compiler_html::{compile_to_html, export_blocks, CompileOptions, ExportStyle};
use webbuilder_editor::{Direction, EditSession, Mutation, Pipeline, DOCUMENT_KEY};
use webbuilder_export::{build_archive, build_share_link, parse_share_link, ExportSource};
use webbuilder_flow::{
    compile_graph_page, export_markup, graph_page_options, render_graph_preview, GraphDocument,
};
use webbuilder_model::{BlockKind, Document, Props, Template};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_style(style: &str) -> ExportStyle {
    match style {
        "classes" => ExportStyle::Classes,
        _ => ExportStyle::Inline,
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

/// List editor: a session plus its canvas rendering
#[wasm_bindgen]
pub struct Editor {
    pipeline: Pipeline,
}

#[wasm_bindgen]
impl Editor {
    /// Open an editor on the document JSON the page saved last time
    #[wasm_bindgen(constructor)]
    pub fn new(saved: Option<String>) -> Editor {
        let store = match saved {
            Some(json) => MemoryStore::with_entry(DOCUMENT_KEY, json),
            None => MemoryStore::new(),
        };
        Editor {
            pipeline: Pipeline::new(EditSession::open(Box::new(store))),
        }
    }

    /// Canvas tree as JSON
    pub fn render(&mut self) -> Result<String, JsValue> {
        to_json(&self.pipeline.render().canvas).map_err(js_error)
    }

    /// Apply a serialized mutation and return the new canvas
    pub fn apply(&mut self, mutation: &str) -> Result<String, JsValue> {
        let mutation: Mutation = serde_json::from_str(mutation).map_err(js_error)?;
        to_json(&self.pipeline.apply_mutation(&mutation).canvas).map_err(js_error)
    }

    /// Handle a drop of the raw drag payload on a target
    #[wasm_bindgen(js_name = dropPayload)]
    pub fn drop_payload(&mut self, raw: &str, target: i32) -> Result<String, JsValue> {
        let (_, result) = self.pipeline.drop_raw(raw, target as isize);
        to_json(&result.canvas).map_err(js_error)
    }

    #[wasm_bindgen(js_name = setActiveDrop)]
    pub fn set_active_drop(&mut self, index: Option<u32>) -> Result<String, JsValue> {
        let result = self.pipeline.set_active_drop(index.map(|i| i as usize));
        to_json(&result.canvas).map_err(js_error)
    }

    #[wasm_bindgen(js_name = addFromPalette)]
    pub fn add_from_palette(&mut self, kind: &str) -> Option<String> {
        self.pipeline
            .session_mut()
            .add_from_palette(&BlockKind::from(kind))
    }

    #[wasm_bindgen(js_name = applyTemplate)]
    pub fn apply_template(&mut self, name: &str) -> Option<String> {
        let template = Template::from_name(name)?;
        self.pipeline.session_mut().apply_template(template)
    }

    pub fn select(&mut self, id: Option<String>) -> bool {
        self.pipeline.session_mut().select(id.as_deref())
    }

    #[wasm_bindgen(getter, js_name = selectedId)]
    pub fn selected_id(&self) -> Option<String> {
        self.pipeline.session().selected_id().map(str::to_string)
    }

    #[wasm_bindgen(js_name = removeSelected)]
    pub fn remove_selected(&mut self) -> bool {
        self.pipeline.session_mut().remove_selected()
    }

    #[wasm_bindgen(js_name = duplicateSelected)]
    pub fn duplicate_selected(&mut self) -> bool {
        self.pipeline.session_mut().duplicate_selected()
    }

    /// `direction` is "up" or "down"
    #[wasm_bindgen(js_name = moveSelected)]
    pub fn move_selected(&mut self, direction: &str) -> bool {
        let direction = match direction {
            "up" => Direction::Up,
            "down" => Direction::Down,
            _ => return false,
        };
        self.pipeline.session_mut().move_selected(direction)
    }

    /// Merge a JSON object of props into the selected block
    #[wasm_bindgen(js_name = patchSelected)]
    pub fn patch_selected(&mut self, props: &str) -> Result<bool, JsValue> {
        let props: Props = serde_json::from_str(props).map_err(js_error)?;
        Ok(self.pipeline.session_mut().patch_selected(props))
    }

    pub fn clear(&mut self) {
        self.pipeline.session_mut().clear();
    }

    /// Document JSON to persist
    #[wasm_bindgen(js_name = documentJson)]
    pub fn document_json(&self) -> Result<String, JsValue> {
        self.pipeline.session().document().to_json().map_err(js_error)
    }

    #[wasm_bindgen(js_name = exportHtml)]
    pub fn export_html(&self, style: &str) -> String {
        let options = CompileOptions {
            style: parse_style(style),
            ..CompileOptions::default()
        };
        compile_to_html(self.pipeline.session().document(), options)
    }
}

fn compile_list_page(json: &str, style: &str) -> Result<String, String> {
    let document = Document::from_json(json).map_err(|e| e.to_string())?;
    let options = CompileOptions {
        style: parse_style(style),
        ..CompileOptions::default()
    };
    Ok(compile_to_html(&document, options))
}

fn list_markup(json: &str, style: &str) -> Result<String, String> {
    let document = Document::from_json(json).map_err(|e| e.to_string())?;
    Ok(export_blocks(&document.blocks, parse_style(style)))
}

fn graph(json: &str) -> Result<GraphDocument, String> {
    GraphDocument::from_json(json).map_err(|e| e.to_string())
}

fn archive_bytes(json: &str, is_flow: bool) -> Result<Vec<u8>, String> {
    let (source, options): (Box<dyn ExportSource>, CompileOptions) = if is_flow {
        (Box::new(graph(json)?), graph_page_options())
    } else {
        let document = Document::from_json(json).map_err(|e| e.to_string())?;
        (Box::new(document), CompileOptions::default())
    };
    build_archive(source.as_ref(), options).map_err(|e| e.to_string())
}

/// Full HTML page for a list document
#[wasm_bindgen(js_name = compileListPage)]
pub fn compile_list_page_js(json: &str, style: &str) -> Result<String, JsValue> {
    compile_list_page(json, style).map_err(js_error)
}

/// Block markup only, one block per line
#[wasm_bindgen(js_name = exportListMarkup)]
pub fn export_list_markup_js(json: &str, style: &str) -> Result<String, JsValue> {
    list_markup(json, style).map_err(js_error)
}

/// Full HTML page for a graph document
#[wasm_bindgen(js_name = compileFlowPage)]
pub fn compile_flow_page_js(json: &str) -> Result<String, JsValue> {
    Ok(compile_graph_page(&graph(json).map_err(js_error)?, graph_page_options()))
}

#[wasm_bindgen(js_name = exportFlowMarkup)]
pub fn export_flow_markup_js(json: &str) -> Result<String, JsValue> {
    Ok(export_markup(&graph(json).map_err(js_error)?, ExportStyle::Classes))
}

/// Canvas tree of a graph document as JSON
#[wasm_bindgen(js_name = renderFlowPreview)]
pub fn render_flow_preview_js(json: &str) -> Result<String, JsValue> {
    let graph = graph(json).map_err(js_error)?;
    to_json(&render_graph_preview(&graph)).map_err(js_error)
}

#[wasm_bindgen(js_name = buildShareLink)]
pub fn build_share_link_js(json: &str, base_url: &str) -> Result<String, JsValue> {
    let graph = graph(json).map_err(js_error)?;
    build_share_link(&graph, base_url).map_err(js_error)
}

/// Graph document JSON carried by a link; unreadable links give an empty graph
#[wasm_bindgen(js_name = parseShareLink)]
pub fn parse_share_link_js(url: &str) -> Result<String, JsValue> {
    parse_share_link(url).to_json().map_err(js_error)
}

/// Zip archive bytes for a list document, or a graph document when `is_flow`
#[wasm_bindgen(js_name = buildArchive)]
pub fn build_archive_js(json: &str, is_flow: bool) -> Result<Vec<u8>, JsValue> {
    archive_bytes(json, is_flow).map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_round_trip() {
        let mut editor = Editor::new(None);
        let id = editor.add_from_palette("heading").unwrap();
        assert_eq!(editor.selected_id(), Some(id.clone()));
        assert!(editor.patch_selected(r#"{"text":"Hello"}"#).unwrap());

        let json = editor.document_json().unwrap();
        let reopened = Editor::new(Some(json));
        assert_eq!(reopened.pipeline.session().blocks()[0].id, id);
        assert!(reopened.export_html("inline").contains("<h2>Hello</h2>"));
    }

    #[test]
    fn test_editor_drop_and_render() {
        let mut editor = Editor::new(None);
        let canvas = editor
            .drop_payload(r#"{"source":"palette","type":"text"}"#, 0)
            .unwrap();
        assert!(canvas.contains("\"children\""));
        assert!(editor.move_selected("down"));
        assert!(!editor.move_selected("sideways"));
        assert_eq!(editor.add_from_palette("video"), None);
    }

    #[test]
    fn test_compile_list_page() {
        let html = compile_list_page(
            r#"[{"id":"a","type":"heading","props":{"text":"Hi"}}]"#,
            "inline",
        )
        .unwrap();
        assert!(html.contains("<h2>Hi</h2>"));
        assert!(compile_list_page("{", "inline").is_err());
    }

    #[test]
    fn test_list_markup() {
        let markup = list_markup(
            r#"{"blocks":[{"id":"a","type":"text","props":{"text":"x"}},{"id":"b","type":"video"}]}"#,
            "classes",
        )
        .unwrap();
        assert_eq!(markup.lines().count(), 1);
    }

    #[test]
    fn test_archive_bytes() {
        let bytes = archive_bytes(r#"{"nodes":[],"edges":[]}"#, true).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
