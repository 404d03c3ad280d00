use super::{ClassSpec, CLASSES, RELATIONSHIPS};
use crate::graph::{Edge, Graph, Layout, Node, NodeDefaults, NodeShape, RankDir};

/// The four domain classes as record nodes with their labelled associations.
pub fn uml_graph() -> Graph {
    let mut graph = Graph::new(
        "PIIS UML Diagram",
        Layout {
            rank_dir: RankDir::TopToBottom,
            size: (8, 5),
        },
    )
    .with_node_defaults(NodeDefaults {
        shape: NodeShape::Record,
        fill_color: Some("lightblue".to_string()),
    });

    for class in &CLASSES {
        graph.add_node(Node::new(class.id, record_label(class)));
    }

    for rel in &RELATIONSHIPS {
        graph.add_edge(Edge::new(rel.from, rel.to).with_label(rel.label));
    }

    graph
}

/// `{Name|+ attr\l...|+ method()\l...}`
fn record_label(class: &ClassSpec) -> String {
    format!(
        "{{{}|{}|{}}}",
        class.name,
        section(class.attributes),
        section(class.methods)
    )
}

fn section(items: &[&str]) -> String {
    items.iter().map(|item| format!("+ {}\\l", item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::to_dot;

    #[test]
    fn test_exactly_four_classes_and_four_relationships() {
        let graph = uml_graph();

        let ids: Vec<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["Uzivatel", "System", "Zaznam", "Opravneni"]);

        let edges: Vec<(&str, &str, Option<&str>)> = graph
            .edges()
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str(), e.label.as_deref()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("Uzivatel", "Zaznam", Some("vytváří")),
                ("Uzivatel", "Opravneni", Some("má")),
                ("System", "Zaznam", Some("spravuje")),
                ("System", "Uzivatel", Some("řídí")),
            ]
        );
    }

    #[test]
    fn test_record_label() {
        let graph = uml_graph();
        assert_eq!(
            graph.node("Opravneni").unwrap().label,
            "{Oprávnění|+ úroveň: int\\l|+ ověřit()\\l+ nastavit()\\l}"
        );
    }

    #[test]
    fn test_dot_output_is_deterministic() {
        let first = to_dot(&uml_graph());
        let second = to_dot(&uml_graph());
        assert_eq!(first, second);
        assert!(first.starts_with("// PIIS UML Diagram\ndigraph {\n\tgraph [rankdir=TB size=\"8,5\"]\n"));
        assert!(first.contains("\tnode [shape=record style=filled fillcolor=\"lightblue\"]\n"));
        assert_eq!(first.matches(" -> ").count(), 4);
    }
}
