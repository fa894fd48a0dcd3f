//! HTML output for a composed `View` tree.
//!
//! Modifier classes become `class`, keys become `data-key`, anchors become
//! `id`, and alpha/scale become inline `opacity` / `transform`. Closed dialogs
//! render nothing. All text and attribute values are escaped.

use folio_core::*;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Full document with `root` as the body.
pub fn document(title: &str, root: &View) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        render(root)
    )
}

pub fn render(root: &View) -> String {
    let mut out = String::new();
    render_into(root, &mut out);
    out
}

fn render_into(v: &View, out: &mut String) {
    match &v.kind {
        ViewKind::Page => element(v, "div", &["page"], &[], out),
        ViewKind::Header => element(v, "header", &[], &[], out),
        ViewKind::Nav => element(v, "nav", &[], &[], out),
        ViewKind::Main => element(v, "main", &[], &[], out),
        ViewKind::Section => element(v, "section", &[], &[], out),
        ViewKind::Footer => element(v, "footer", &[], &[], out),
        ViewKind::Box => element(v, "div", &[], &[], out),
        ViewKind::Row => element(v, "div", &["row"], &[], out),
        ViewKind::Column => element(v, "div", &["column"], &[], out),
        ViewKind::Grid { columns } => {
            let cols = format!("grid-cols-{columns}");
            element(v, "div", &["grid", &cols], &[], out)
        }
        ViewKind::List => element(v, "ul", &[], &[], out),
        ViewKind::ListItem => element(v, "li", &[], &[], out),
        ViewKind::Card => element(v, "article", &["card"], &[], out),
        ViewKind::Text { text, style } => {
            let tag = match style {
                TextStyle::Brand => "h1",
                TextStyle::Display => "h2",
                TextStyle::Heading => "h3",
                TextStyle::Title => "h4",
                TextStyle::Body => "p",
                TextStyle::Caption => "small",
            };
            open_tag(v, tag, &[], &[], out);
            push_text(text, out);
            out.push_str(&format!("</{tag}>"));
        }
        ViewKind::Image {
            src,
            alt,
            width,
            height,
        } => {
            let mut attrs = vec![("src", src.clone()), ("alt", alt.clone())];
            if let Some(w) = width {
                attrs.push(("width", w.to_string()));
            }
            if let Some(h) = height {
                attrs.push(("height", h.to_string()));
            }
            open_tag(v, "img", &[], &attrs, out);
        }
        ViewKind::Link { href, label } => {
            open_tag(v, "a", &[], &[("href", href.clone())], out);
            out.push_str(&escape(label));
            render_children(v, out);
            out.push_str("</a>");
        }
        ViewKind::Button { label } => {
            open_tag(v, "button", &[], &[("type", "button".to_string())], out);
            out.push_str(&escape(label));
            out.push_str("</button>");
        }
        ViewKind::Dialog { open, title } => {
            if *open {
                element(
                    v,
                    "dialog",
                    &[],
                    &[("open", String::new()), ("aria-label", title.clone())],
                    out,
                );
            }
        }
    }
}

/// Line breaks in text become `<br>`.
fn push_text(text: &str, out: &mut String) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        out.push_str(&escape(line));
    }
}

fn element(v: &View, tag: &str, classes: &[&str], attrs: &[(&str, String)], out: &mut String) {
    open_tag(v, tag, classes, attrs, out);
    render_children(v, out);
    out.push_str(&format!("</{tag}>"));
}

fn render_children(v: &View, out: &mut String) {
    for c in &v.children {
        render_into(c, out);
    }
}

fn open_tag(v: &View, tag: &str, classes: &[&str], attrs: &[(&str, String)], out: &mut String) {
    let m = &v.modifier;
    out.push('<');
    out.push_str(tag);

    if let Some(anchor) = &m.anchor {
        push_attr("id", anchor, out);
    }

    let all: Vec<&str> = classes
        .iter()
        .copied()
        .chain(m.classes.iter().map(String::as_str))
        .collect();
    if !all.is_empty() {
        push_attr("class", &all.join(" "), out);
    }

    let mut style = Vec::new();
    if let Some(a) = m.alpha {
        style.push(format!("opacity:{}", trim_float(a)));
    }
    if let Some(s) = m.scale {
        style.push(format!("transform:scale({})", trim_float(s)));
    }
    if !style.is_empty() {
        push_attr("style", &style.join(";"), out);
    }

    if let Some(key) = &m.key {
        push_attr("data-key", key, out);
    }
    if let Some(label) = &m.label {
        push_attr("aria-label", label, out);
    }

    for (name, value) in attrs {
        if value.is_empty() {
            out.push(' ');
            out.push_str(name);
        } else {
            push_attr(name, value, out);
        }
    }
    out.push('>');
}

fn push_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

/// Up to three decimals, without trailing zeros.
fn trim_float(v: f32) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    #[test]
    fn escapes_text_and_attributes() {
        let v = Link("/q?a=1&b=\"2\"", "<Home>");
        assert_eq!(
            render(&v),
            "<a href=\"/q?a=1&amp;b=&quot;2&quot;\">&lt;Home&gt;</a>"
        );
    }

    #[test]
    fn renders_modifiers() {
        let v = Section("home", Modifier::new().class("hero").alpha(0.5).scale(1.2))
            .child(Text("Hi\nthere").style(TextStyle::Display));
        assert_eq!(
            render(&v),
            "<section id=\"home\" class=\"hero\" style=\"opacity:0.5;transform:scale(1.2)\">\
             <h2>Hi<br>there</h2></section>"
        );
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let closed = Dialog(false, "Detail").child(Text("body"));
        assert_eq!(render(&closed), "");

        let open = Dialog(true, "Detail").child(Text("body"));
        assert_eq!(
            render(&open),
            "<dialog open aria-label=\"Detail\"><p>body</p></dialog>"
        );
    }

    #[test]
    fn image_and_button() {
        let img = Image("/images/a.jpeg", "A").size(300, 200);
        assert_eq!(
            render(&img),
            "<img src=\"/images/a.jpeg\" alt=\"A\" width=\"300\" height=\"200\">"
        );
        let b = Button("Next", || {}).with(Modifier::new().key("next"));
        assert_eq!(
            render(&b),
            "<button data-key=\"next\" type=\"button\">Next</button>"
        );
    }

    #[test]
    fn document_wraps_body() {
        let doc = document("A & B", &Page(Modifier::new()));
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>A &amp; B</title>"));
        assert!(doc.contains("<div class=\"page\"></div>"));
    }

    #[test]
    fn float_formatting() {
        assert_eq!(trim_float(1.0), "1");
        assert_eq!(trim_float(0.25), "0.25");
        assert_eq!(trim_float(1.05), "1.05");
        assert_eq!(trim_float(0.0), "0");
    }
}
