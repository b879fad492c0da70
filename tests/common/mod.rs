#![allow(dead_code)]

use flowscore::{Edge, ElementKind, Node, ProcessGraph};

/// Start -> gateway -> `fan_out` tasks, each task ending in its own end event.
pub fn fan_out_graph(gateway: ElementKind, fan_out: usize) -> ProcessGraph {
    let mut nodes = vec![
        Node::new("start", ElementKind::StartEvent),
        Node::new("gw", gateway),
    ];
    let mut edges = vec![Edge::sequence("f-start", "start", "gw")];
    for i in 0..fan_out {
        let task = format!("t{}", i);
        nodes.push(Node::new(task.clone(), ElementKind::Task).with_label("Check Order"));
        edges.push(Edge::sequence(format!("f-gw-{}", i), "gw", task.clone()));
    }
    nodes.push(Node::new("end", ElementKind::EndEvent));
    for i in 0..fan_out {
        edges.push(Edge::sequence(format!("f-end-{}", i), format!("t{}", i), "end"));
    }
    ProcessGraph::new(nodes, edges)
}

/// Start -> labelled tasks in sequence -> end.
pub fn linear_graph(labels: &[&str]) -> ProcessGraph {
    let mut nodes = vec![Node::new("start", ElementKind::StartEvent)];
    let mut previous = "start".to_string();
    let mut edges = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        let id = format!("t{}", i);
        nodes.push(Node::new(id.clone(), ElementKind::Task).with_label(*label));
        edges.push(Edge::sequence(format!("f{}", i), previous.clone(), id.clone()));
        previous = id;
    }
    nodes.push(Node::new("end", ElementKind::EndEvent));
    edges.push(Edge::sequence("f-end", previous, "end"));
    ProcessGraph::new(nodes, edges)
}

/// The order-handling diagram: an XOR split whose branches meet at the end event.
pub fn order_graph() -> ProcessGraph {
    ProcessGraph::new(
        vec![
            Node::new("start", ElementKind::StartEvent),
            Node::new("decide", ElementKind::ExclusiveGateway),
            Node::new("process", ElementKind::Task).with_label("Process Order"),
            Node::new("cancel", ElementKind::Task).with_label("Cancel Order"),
            Node::new("end", ElementKind::EndEvent),
        ],
        vec![
            Edge::sequence("f1", "start", "decide"),
            Edge::sequence("f2", "decide", "process"),
            Edge::sequence("f3", "decide", "cancel"),
            Edge::sequence("f4", "process", "end"),
            Edge::sequence("f5", "cancel", "end"),
        ],
    )
}
