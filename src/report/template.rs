//! HTML shell of the report document.
//!
//! The theme is written once into the document head as CSS custom
//! properties; every page refers to it through `var(--color-*)`.

use std::fmt::Write;

use crate::config::RenderConfig;
use crate::output::svg::html_escape;

/// Text of the `<title>` element.
pub const DOCUMENT_TITLE: &str = "Quality Timeline";

const STYLES: &str = r"        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'DejaVu Sans', -apple-system, 'Segoe UI', Roboto, Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-fg);
        }
        .page {
            margin: 0 auto 2rem;
            max-width: 1500px;
            break-after: page;
            page-break-after: always;
        }
        .page:last-child { break-after: auto; page-break-after: auto; }
        .page svg { display: block; width: 100%; height: auto; }
        .page svg circle:hover { stroke: var(--color-fg); stroke-width: 2; }
        @page { size: landscape; margin: 0; }
        @media print {
            body { background: var(--color-bg); -webkit-print-color-adjust: exact; print-color-adjust: exact; }
            .page { margin: 0; max-width: none; height: 100vh; }
            .page svg { height: 100%; }
        }
";

/// Document head and the opening `<body>` tag.
#[must_use]
pub fn document_header(render: &RenderConfig) -> String {
    let mut output = String::new();
    output.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
"#,
    );
    let _ = writeln!(output, "    <title>{DOCUMENT_TITLE}</title>");
    output.push_str("    <style>\n        :root {\n");
    for (name, value) in [
        ("bg", &render.background),
        ("fg", &render.foreground),
        ("grid", &render.grid),
    ] {
        let _ = writeln!(output, "            --color-{name}: {};", html_escape(value));
    }
    output.push_str("        }\n");
    output.push_str(STYLES);
    output.push_str("    </style>\n</head>\n<body>\n");
    output
}

/// Closes the body and document.
pub const DOCUMENT_FOOTER: &str = "</body>\n</html>\n";

/// Wrap one page's SVG in its print section.
#[must_use]
pub fn page_section(number: usize, title: &str, svg: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        r#"<section class="page" data-page="{number}" aria-label="{}">"#,
        html_escape(title)
    );
    for line in svg.lines() {
        let _ = writeln!(output, "    {line}");
    }
    output.push_str("</section>\n");
    output
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
