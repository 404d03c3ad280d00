use crate::graph::Graph;
use std::io::{self, Write};

/// Serialize a graph to DOT source.
pub fn to_dot(graph: &Graph) -> String {
    let mut out = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_dot(graph, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

pub fn write_dot(graph: &Graph, w: &mut impl Write) -> io::Result<()> {
    if !graph.comment.is_empty() {
        writeln!(w, "// {}", graph.comment.replace('\n', " "))?;
    }
    writeln!(w, "digraph {{")?;

    let (width, height) = graph.layout.size;
    writeln!(
        w,
        "\tgraph [rankdir={} size={}]",
        graph.layout.rank_dir.as_str(),
        quote(&format!("{},{}", width, height))
    )?;

    if let Some(defaults) = &graph.node_defaults {
        let mut attrs = vec![format!("shape={}", defaults.shape.as_str())];
        if let Some(color) = &defaults.fill_color {
            attrs.push("style=filled".to_string());
            attrs.push(format!("fillcolor={}", quote(color)));
        }
        writeln!(w, "\tnode [{}]", attrs.join(" "))?;
    }

    for node in graph.nodes() {
        let mut attrs = vec![format!("label={}", quote(&node.label))];
        if let Some(shape) = node.shape {
            attrs.push(format!("shape={}", shape.as_str()));
        }
        writeln!(w, "\t{} [{}]", quote(&node.id), attrs.join(" "))?;
    }

    for edge in graph.edges() {
        let mut attrs = Vec::new();
        if let Some(label) = &edge.label {
            attrs.push(format!("label={}", quote(label)));
        }
        if let Some(style) = edge.style {
            attrs.push(format!("style={}", style.as_str()));
        }

        write!(w, "\t{} -> {}", quote(&edge.from), quote(&edge.to))?;
        if attrs.is_empty() {
            writeln!(w)?;
        } else {
            writeln!(w, " [{}]", attrs.join(" "))?;
        }
    }

    writeln!(w, "}}")
}

/// Double-quote a DOT id or attribute value.
///
/// Only `"` and raw line breaks are escaped; backslash sequences such as `\n`
/// and `\l` are DOT label escapes and pass through untouched.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
