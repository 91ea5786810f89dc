//! Static HTML export of block documents.

mod compiler;

pub use compiler::{
    compile_page, compile_to_html, escape_attr, escape_html, export_blocks, render_blocks,
    CompileOptions, ExportStyle, StaticExportRenderer,
};
