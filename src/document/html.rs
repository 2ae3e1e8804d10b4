//! HTML rendering for print documents.

use std::fmt::Write;

use super::PrintDocument;
use crate::label::{Label, Tag};

const STYLE: &str = r#"
  * { box-sizing: border-box; }
  body { margin: 0; font-family: Arial, Helvetica, sans-serif; color: #000; }
  .sheet { display: flex; flex-wrap: wrap; gap: 4mm; padding: 6mm; }
  .label { width: 62mm; min-height: 40mm; border: 1px dashed #999; padding: 3mm; page-break-inside: avoid; }
  .label h2 { font-size: 11pt; margin: 0 0 2mm; }
  .label table { font-size: 8pt; border-collapse: collapse; width: 100%; }
  .label td { padding: 0.3mm 0; vertical-align: middle; }
  .label td.name { width: 40%; color: #333; }
  .swatch { display: inline-block; width: 3mm; height: 3mm; border: 1px solid #000; margin-right: 1mm; vertical-align: middle; }
  .codes { display: flex; align-items: flex-end; justify-content: space-between; margin-top: 2mm; }
  .barcode img { display: block; image-rendering: pixelated; image-rendering: crisp-edges; }
  .barcode .data { font-family: monospace; font-size: 7pt; text-align: center; }
  .qr img { display: block; }
  .invalid { display: flex; align-items: center; justify-content: center; color: #b00; font-weight: bold; }
  footer { font-size: 7pt; color: #666; padding: 0 6mm 6mm; }
  @media print { .label { border-color: transparent; } footer { display: none; } }
"#;

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(super) fn render(doc: &PrintDocument) -> String {
    let mut html = String::new();
    let title = escape(&doc.title);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<main class=\"sheet\">\n",
        title, STYLE
    );

    if doc.labels.is_empty() {
        html.push_str("<p>No products to print.</p>\n");
    }

    for label in &doc.labels {
        match label {
            Label::Tag(tag) => render_tag(&mut html, tag),
            Label::Invalid { product_id, reason } => {
                let _ = writeln!(
                    html,
                    "<section class=\"label invalid\" data-product=\"{}\">{}</section>",
                    escape(product_id),
                    escape(reason)
                );
            }
        }
    }

    let _ = write!(
        html,
        "</main>\n<footer>{} labels, printed {}</footer>\n",
        doc.labels.len(),
        escape(&doc.printed_at)
    );

    if doc.auto_print && !doc.labels.is_empty() {
        // Images are inline or remote; wait for both before printing
        html.push_str("<script>window.addEventListener('load', function () { window.print(); });</script>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_tag(html: &mut String, tag: &Tag) {
    let _ = writeln!(
        html,
        "<section class=\"label\" data-product=\"{}\">",
        escape(&tag.product_id)
    );
    let _ = writeln!(html, "<h2>{}</h2>", escape(&tag.name));

    html.push_str("<table>\n");
    for field in &tag.fields {
        let value = if field.name == "Color" {
            match &tag.color_hex {
                Some(hex) => format!(
                    "<span class=\"swatch\" style=\"background:{}\"></span>{}",
                    escape(hex),
                    escape(&field.value)
                ),
                None => escape(&field.value),
            }
        } else {
            escape(&field.value)
        };
        let _ = writeln!(
            html,
            "<tr><td class=\"name\">{}</td><td>{}</td></tr>",
            escape(field.name),
            value
        );
    }
    html.push_str("</table>\n");

    let _ = writeln!(
        html,
        "<div class=\"codes\">\n<div class=\"barcode\"><img src=\"{}\" alt=\"{}\"><div class=\"data\">{}</div></div>\n<div class=\"qr\"><img src=\"{}\" alt=\"QR {}\" width=\"64\" height=\"64\"></div>\n</div>",
        escape(&tag.barcode_src),
        escape(&tag.barcode_data),
        escape(&tag.barcode_data),
        escape(&tag.qr_src),
        escape(&tag.product_id)
    );
    html.push_str("</section>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelField;

    fn doc(labels: Vec<Label>, auto_print: bool) -> PrintDocument {
        PrintDocument {
            title: "Labels".into(),
            labels,
            auto_print,
            printed_at: "2026-10-18 09:30".into(),
        }
    }

    fn tag(name: &str) -> Tag {
        Tag {
            product_id: "A1".into(),
            name: name.into(),
            barcode_data: "A1".into(),
            fields: vec![LabelField {
                name: "Color",
                value: "#ff0000".into(),
            }],
            color_hex: Some("#ff0000".into()),
            barcode_src: "data:image/png;base64,AAAA".into(),
            qr_src: "https://qr.example/?size=80x80&data=A1".into(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">Tom & Jerry's</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;");
    }

    #[test]
    fn test_render_tag() {
        let html = render(&doc(vec![Label::Tag(tag("Shirt <b>"))], false));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h2>Shirt &lt;b&gt;</h2>"));
        assert!(html.contains("background:#ff0000"));
        assert!(html.contains("src=\"data:image/png;base64,AAAA\""));
        assert!(html.contains("size=80x80&amp;data=A1"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_field_names_are_escaped() {
        let mut t = tag("Shirt");
        t.fields.push(LabelField {
            name: "Fit <slim>",
            value: "Regular".into(),
        });
        let html = render(&doc(vec![Label::Tag(t)], false));
        assert!(html.contains("<td class=\"name\">Fit &lt;slim&gt;</td><td>Regular</td>"));
        assert!(html.contains("<td class=\"name\">Color</td>"));
    }

    #[test]
    fn test_auto_print_script() {
        let html = render(&doc(vec![Label::Tag(tag("Shirt"))], true));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn test_no_script_for_empty_batch() {
        let html = render(&doc(vec![], true));
        assert!(!html.contains("window.print()"));
    }

    #[test]
    fn test_invalid_placeholder() {
        let html = render(&doc(
            vec![Label::Invalid {
                product_id: "X".into(),
                reason: "invalid data".into(),
            }],
            false,
        ));
        assert!(html.contains("class=\"label invalid\""));
        assert!(html.contains(">invalid data</section>"));
    }
}
