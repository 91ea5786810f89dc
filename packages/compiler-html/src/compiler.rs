use serde::{Deserialize, Serialize};
use tracing::debug;
use webbuilder_evaluator::{BlockRenderer, ResolvedBlock};
use webbuilder_model::{BlockContent, Document};

/// How exported buttons and images carry their look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStyle {
    /// Inline `style` attributes; the markup stands alone
    #[default]
    Inline,
    /// Fixed class names styled by the page stylesheet
    Classes,
}

const INLINE_BUTTON_STYLE: &str = "display:inline-block;padding:8px 12px;background:#2563eb;color:#fff;border-radius:8px;text-decoration:none;";
const INLINE_IMAGE_STYLE: &str = "width:100%;height:auto;border-radius:8px;";

const PAGE_STYLESHEET: &[&str] = &[
    ":root { --border: #e5e7eb; }",
    "body { margin: 0; font-family: system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif; color: #0f172a; background: #f8fafc; }",
    ".container { max-width: 960px; margin: 40px auto; padding: 0 16px; }",
    ".btn { display:inline-block; padding:8px 12px; background:#2563eb; color:#fff; border-radius:10px; text-decoration:none; }",
    "img { display:block; max-width:100%; height:auto; border-radius:10px; }",
    "h2 { margin: 0 0 8px 0; }",
    "p { margin: 0 0 8px 0; }",
];

/// Options for full-page HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub style: ExportStyle,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Page `<title>`
    pub title: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            style: ExportStyle::Inline,
            pretty: true,
            indent: "  ".to_string(),
            title: "Exported Page".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Renders blocks as static markup text.
///
/// Element choice and escaping are fixed per block type; only the styling
/// of buttons and images depends on [`ExportStyle`]. Unknown block types
/// export as nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticExportRenderer {
    pub style: ExportStyle,
}

impl StaticExportRenderer {
    pub fn new(style: ExportStyle) -> Self {
        Self { style }
    }
}

impl BlockRenderer for StaticExportRenderer {
    type Output = String;

    fn render_resolved(&self, block: &ResolvedBlock<'_>) -> String {
        match block {
            ResolvedBlock::Heading { text, .. } => format!("<h2>{}</h2>", escape_html(text)),
            ResolvedBlock::Text { text, .. } => format!("<p>{}</p>", escape_html(text)),
            ResolvedBlock::Button { text, href, .. } => {
                let styling = match self.style {
                    ExportStyle::Inline => format!("style=\"{}\"", INLINE_BUTTON_STYLE),
                    ExportStyle::Classes => "class=\"btn\"".to_string(),
                };
                format!(
                    "<a href=\"{}\" {}>{}</a>",
                    escape_attr(href),
                    styling,
                    escape_html(text)
                )
            }
            ResolvedBlock::Image { src, alt, .. } => {
                let styling = match self.style {
                    ExportStyle::Inline => format!(" style=\"{}\"", INLINE_IMAGE_STYLE),
                    ExportStyle::Classes => String::new(),
                };
                format!(
                    "<img src=\"{}\" alt=\"{}\"{}/>",
                    escape_attr(src),
                    escape_attr(alt),
                    styling
                )
            }
            ResolvedBlock::Unknown { .. } => String::new(),
        }
    }
}

/// Markup of each block in order; unknown block types are left out
pub fn render_blocks<'a, B, I>(blocks: I, style: ExportStyle) -> Vec<String>
where
    B: BlockContent + 'a,
    I: IntoIterator<Item = &'a B>,
{
    let renderer = StaticExportRenderer::new(style);
    blocks
        .into_iter()
        .map(|block| renderer.render(block))
        .filter(|markup| !markup.is_empty())
        .collect()
}

/// Markup for each block in order, one per line
pub fn export_blocks<'a, B, I>(blocks: I, style: ExportStyle) -> String
where
    B: BlockContent + 'a,
    I: IntoIterator<Item = &'a B>,
{
    render_blocks(blocks, style).join("\n")
}

/// Compile a list document to a self-contained HTML page
pub fn compile_to_html(document: &Document, options: CompileOptions) -> String {
    let blocks = render_blocks(&document.blocks, options.style);
    compile_page(&blocks, options)
}

/// Wrap already exported block markup in a full HTML page.
///
/// Each block is written verbatim after the indent of its line, so newlines
/// inside text or attribute values are kept as they are.
pub fn compile_page<S: AsRef<str>>(blocks: &[S], options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!doctype html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    compile_head(&mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<main class=\"container\">");
    ctx.indent();

    for block in blocks {
        ctx.add_line(block.as_ref());
    }

    ctx.dedent();
    ctx.add_line("</main>");
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    debug!(blocks = blocks.len(), "Compiled static page");
    ctx.get_output()
}

fn compile_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"utf-8\" />");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />");
    let title = format!("<title>{}</title>", escape_html(&ctx.options.title));
    ctx.add_line(&title);

    ctx.add_line("<style>");
    ctx.indent();
    for rule in PAGE_STYLESHEET {
        ctx.add_line(rule);
    }
    ctx.dedent();
    ctx.add_line("</style>");

    ctx.dedent();
    ctx.add_line("</head>");
}

/// Escape text for element content
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape text for a quoted attribute value; backticks are escaped too
pub fn escape_attr(text: &str) -> String {
    escape_html(text).replace('`', "&#x60;")
}
