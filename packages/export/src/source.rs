//! Documents the packager can export.

use crate::errors::ExportError;
use webbuilder_compiler_html::{compile_to_html, CompileOptions};
use webbuilder_flow::{compile_graph_page, GraphDocument};
use webbuilder_model::Document;

/// A document that serializes to JSON and compiles to a static page
pub trait ExportSource {
    /// Pretty-printed JSON that reads back to an equal document
    fn serialize(&self) -> Result<String, ExportError>;

    fn compile_page(&self, options: CompileOptions) -> String;
}

impl ExportSource for Document {
    fn serialize(&self) -> Result<String, ExportError> {
        Ok(self.to_json()?)
    }

    fn compile_page(&self, options: CompileOptions) -> String {
        compile_to_html(self, options)
    }
}

impl ExportSource for GraphDocument {
    fn serialize(&self) -> Result<String, ExportError> {
        Ok(self.to_json()?)
    }

    fn compile_page(&self, options: CompileOptions) -> String {
        compile_graph_page(self, options)
    }
}

/// Canonical JSON for any exportable document
pub fn serialize_document<S: ExportSource + ?Sized>(source: &S) -> Result<String, ExportError> {
    source.serialize()
}
