use super::*;

fn page(title: &str) -> Page {
    let mut figure = Figure::new(title);
    figure.draw(format!("<svg><title>{title}</title></svg>"));
    figure.into_page().unwrap()
}

#[test]
fn undrawn_figure_is_render_error() {
    let err = Figure::new("Empty").into_page().unwrap_err();
    assert!(matches!(err, TimelineError::Render(_)));
    assert!(err.to_string().contains("Empty"));
}

#[test]
fn redraw_replaces_content() {
    let mut figure = Figure::new("Core");
    figure.draw("<svg>first</svg>".to_string());
    figure.draw("<svg>second</svg>".to_string());
    let page = figure.into_page().unwrap();

    assert_eq!(page.title(), "Core");
    assert_eq!(page.svg(), "<svg>second</svg>");
}

#[test]
fn pages_are_written_in_append_order() {
    let mut document = ReportDocument::new(Vec::new(), &RenderConfig::default()).unwrap();
    document.append(&page("First")).unwrap();
    document.append(&page("Second")).unwrap();
    assert_eq!(document.page_count(), 2);

    let html = String::from_utf8(document.finish().unwrap()).unwrap();
    let first = html.find("data-page=\"1\" aria-label=\"First\"").unwrap();
    let second = html.find("data-page=\"2\" aria-label=\"Second\"").unwrap();
    assert!(first < second);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn page_can_be_built_without_a_document() {
    let page = page("Standalone");
    assert!(page.svg().contains("<title>Standalone</title>"));
}

#[test]
fn create_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    let mut document = ReportDocument::create(&path, &RenderConfig::default()).unwrap();
    document.append(&page("Only")).unwrap();
    document.finish().unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert_eq!(html.matches("<section class=\"page\"").count(), 1);
}

#[test]
fn dropped_document_is_flushed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.html");

    {
        let mut document = ReportDocument::create(&path, &RenderConfig::default()).unwrap();
        document.append(&page("Written")).unwrap();
    }

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("aria-label=\"Written\""));
    assert!(!html.contains("</html>"));
}

#[test]
fn create_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.html");

    let err = ReportDocument::create(&path, &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, TimelineError::FileWrite { .. }));
}

#[derive(Debug)]
struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("disk full"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_failure_without_path_is_io_error() {
    let err = ReportDocument::new(FailingWriter, &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, TimelineError::Io(_)));
}

#[cfg(target_os = "linux")]
#[test]
fn file_write_failure_names_the_output_file() {
    let path = std::path::Path::new("/dev/full");

    let err = ReportDocument::create(path, &RenderConfig::default())
        .and_then(|mut document| {
            document.append(&page("Only"))?;
            document.finish().map(drop)
        })
        .unwrap_err();

    assert!(matches!(err, TimelineError::FileWrite { .. }));
    assert!(err.to_string().contains("/dev/full"));
}
