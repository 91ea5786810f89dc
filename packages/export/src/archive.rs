//! Zip packaging: the document JSON, the generated page and a readme.

use crate::errors::ExportError;
use crate::source::ExportSource;
use std::io::{Cursor, Write};
use tracing::info;
use webbuilder_compiler_html::CompileOptions;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const ARCHIVE_FILE_NAME: &str = "webbuilder-export.zip";
pub const ARCHIVE_JSON: &str = "flow.json";
pub const ARCHIVE_HTML: &str = "index.html";
pub const ARCHIVE_README: &str = "README.md";

pub const README: &str = "# Exported Webbuilder Flow\n\nOpen index.html in a browser.\n";

/// Build the archive in memory and return its bytes
pub fn build_archive<S: ExportSource + ?Sized>(
    source: &S,
    options: CompileOptions,
) -> Result<Vec<u8>, ExportError> {
    let json = source.serialize()?;
    let html = source.compile_page(options);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let file_options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, contents) in [
        (ARCHIVE_JSON, json.as_str()),
        (ARCHIVE_HTML, html.as_str()),
        (ARCHIVE_README, README),
    ] {
        zip.start_file(name, file_options)?;
        zip.write_all(contents.as_bytes())?;
    }

    let bytes = zip.finish()?.into_inner();
    info!(bytes = bytes.len(), "Built export archive");
    Ok(bytes)
}
