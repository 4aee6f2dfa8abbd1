//! Integration tests for validator output parsing through the public API.

use glsl_lint::document::DocumentSnapshot;
use glsl_lint::lint::{parse, Anchor, LineRange, Severity};

const VERTEX_SHADER: &str = "#version 450\r\n\
layout(location = 0) in vec3 position;\r\n\
\r\n\
void main() {\r\n\
\tgl_Position = vec4(positon, 1.0);\r\n\
}\r\n";

#[test]
fn crlf_document_and_output() {
    let doc = DocumentSnapshot::from_text(VERTEX_SHADER);
    let output = "cube.vert\r\n\
                  ERROR: 0:5: 'positon' : undeclared identifier \r\n\
                  ERROR: 0:5: '' : compilation terminated \r\n\
                  ERROR: 1 compilation errors.  No code generated.\r\n";

    let diags = parse(output, &doc);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].severity, Severity::Error);
    assert_eq!(diags[0].anchor, Anchor::Line(LineRange::new(4, 1, 34)));
}

#[test]
fn mixed_severities_keep_output_order() {
    let doc = DocumentSnapshot::from_text(VERTEX_SHADER);
    let output = "WARNING: 0:2: 'location' : overlapping use of location 0\n\
                  ERROR: '#version' : must occur first in shader\n\
                  WARNING: 0:0: '' : implicit stage\n";

    let diags = parse(output, &doc);

    let severities: Vec<_> = diags.iter().map(|d| d.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Warning, Severity::Error, Severity::Warning]
    );
    assert_eq!(diags[0].range(), LineRange::new(1, 0, 38));
    assert!(diags[1].anchor.is_file());
    assert!(diags[2].anchor.is_file());
}

#[test]
fn noise_only_output_is_clean() {
    let doc = DocumentSnapshot::from_text(VERTEX_SHADER);
    let output = "cube.vert\n\nLinked vertex stage:\n\n";
    assert!(parse(output, &doc).is_empty());
}

#[test]
fn diagnostics_past_the_end_get_empty_ranges() {
    let doc = DocumentSnapshot::from_text("void main() {}");
    let diags = parse("ERROR: 0:40: '' : unexpected end of file\n", &doc);
    assert_eq!(diags[0].range(), LineRange::new(39, 0, 0));
}
