//! Stack diagram model
//!
//! Nodes sit on a hand-authored grid; [`Diagram::place`] scales that grid into
//! whatever area the host has on each frame, and connector endpoints are
//! recomputed from the placed bounds. Drawing the lines themselves is left to
//! a [`ConnectorRenderer`].
//!
//! Coordinates are `f64` with the origin at the top-left and `y` growing
//! downwards.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CoreResult};
use crate::types::TopicKey;

/// Side of a node a connector attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
}

/// Visual kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Processing step, drawn as a plain box
    #[default]
    Process,
    /// Storage component, drawn with a doubled border
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u16,
    pub column: u16,
}

impl GridCell {
    pub const fn new(row: u16, column: u16) -> Self {
        Self { row, column }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub key: TopicKey,
    pub kind: NodeKind,
    pub cell: GridCell,
}

impl DiagramNode {
    pub fn new(key: impl Into<TopicKey>, kind: NodeKind, cell: GridCell) -> Self {
        Self {
            key: key.into(),
            kind,
            cell,
        }
    }
}

/// Directed connector between two node anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: TopicKey,
    pub source_anchor: Anchor,
    pub target: TopicKey,
    pub target_anchor: Anchor,
}

impl Edge {
    pub fn new(
        source: impl Into<TopicKey>,
        source_anchor: Anchor,
        target: impl Into<TopicKey>,
        target_anchor: Anchor,
    ) -> Self {
        Self {
            source: source.into(),
            source_anchor,
            target: target.into(),
            target_anchor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Midpoint of the given side.
    pub fn anchor_point(&self, anchor: Anchor) -> Point {
        let cx = self.x + self.width / 2.0;
        let cy = self.y + self.height / 2.0;
        match anchor {
            Anchor::Top => Point { x: cx, y: self.y },
            Anchor::Bottom => Point {
                x: cx,
                y: self.bottom(),
            },
            Anchor::Left => Point { x: self.x, y: cy },
            Anchor::Right => Point {
                x: self.right(),
                y: cy,
            },
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// A node scaled into a concrete area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedNode<'a> {
    pub node: &'a DiagramNode,
    pub bounds: Bounds,
}

/// A connector with its endpoints resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector<'a> {
    pub edge: &'a Edge,
    pub from: Point,
    pub to: Point,
}

/// Draws one connector line. The host supplies the implementation.
pub trait ConnectorRenderer {
    fn draw_connector(&mut self, from: Point, to: Point);
}

/// Share of a grid cell occupied by its node box.
const BOX_WIDTH_RATIO: f64 = 0.8;
const BOX_HEIGHT_RATIO: f64 = 0.5;

/// Validated node/edge graph laid out on a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagram {
    nodes: Vec<DiagramNode>,
    edges: Vec<Edge>,
    rows: u16,
    columns: u16,
}

impl Diagram {
    /// Build a diagram, rejecting duplicate node keys and edges to unknown nodes.
    pub fn new(nodes: Vec<DiagramNode>, edges: Vec<Edge>) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        for node in &nodes {
            if !seen.insert(node.key.as_str()) {
                return Err(CatalogError::DuplicateKey(node.key.to_string()));
            }
        }
        for edge in &edges {
            for end in [&edge.source, &edge.target] {
                if !seen.contains(end.as_str()) {
                    return Err(CatalogError::UnknownNode(end.to_string()));
                }
            }
        }

        let rows = nodes.iter().map(|n| n.cell.row + 1).max().unwrap_or(0);
        let columns = nodes.iter().map(|n| n.cell.column + 1).max().unwrap_or(0);

        Ok(Self {
            nodes,
            edges,
            rows,
            columns,
        })
    }

    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Scale every node into a `width` x `height` area.
    pub fn place(&self, width: f64, height: f64) -> Vec<PlacedNode<'_>> {
        if self.rows == 0 || self.columns == 0 {
            return Vec::new();
        }
        let cell_w = width / f64::from(self.columns);
        let cell_h = height / f64::from(self.rows);
        let box_w = cell_w * BOX_WIDTH_RATIO;
        let box_h = cell_h * BOX_HEIGHT_RATIO;

        self.nodes
            .iter()
            .map(|node| PlacedNode {
                node,
                bounds: Bounds {
                    x: f64::from(node.cell.column) * cell_w + (cell_w - box_w) / 2.0,
                    y: f64::from(node.cell.row) * cell_h + (cell_h - box_h) / 2.0,
                    width: box_w,
                    height: box_h,
                },
            })
            .collect()
    }

    /// Resolve every edge against placed nodes.
    pub fn connectors<'a>(&'a self, placed: &[PlacedNode<'a>]) -> Vec<Connector<'a>> {
        let by_key: HashMap<&str, &Bounds> = placed
            .iter()
            .map(|p| (p.node.key.as_str(), &p.bounds))
            .collect();

        self.edges
            .iter()
            .filter_map(|edge| {
                let source = by_key.get(edge.source.as_str())?;
                let target = by_key.get(edge.target.as_str())?;
                Some(Connector {
                    edge,
                    from: source.anchor_point(edge.source_anchor),
                    to: target.anchor_point(edge.target_anchor),
                })
            })
            .collect()
    }

    /// Nearest node from `from` in the direction of `toward`, judged on grid cells.
    ///
    /// Distance along the direction counts once, sideways drift twice; ties go
    /// to the earlier node.
    pub fn neighbor(&self, from: usize, toward: Anchor) -> Option<usize> {
        let origin = self.nodes.get(from)?.cell;
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != from)
            .filter_map(|(i, node)| {
                let dr = i32::from(node.cell.row) - i32::from(origin.row);
                let dc = i32::from(node.cell.column) - i32::from(origin.column);
                let (along, across) = match toward {
                    Anchor::Top => (-dr, dc),
                    Anchor::Bottom => (dr, dc),
                    Anchor::Left => (-dc, dr),
                    Anchor::Right => (dc, dr),
                };
                (along > 0).then_some((along + across.abs() * 2, i))
            })
            .min()
            .map(|(_, i)| i)
    }

    /// Place the diagram and hand every connector to `renderer`.
    pub fn render_connectors<R: ConnectorRenderer>(&self, width: f64, height: f64, renderer: &mut R) {
        let placed = self.place(width, height);
        for connector in self.connectors(&placed) {
            renderer.draw_connector(connector.from, connector.to);
        }
    }
}

/// Index of the placed node under `(x, y)`.
pub fn node_at(placed: &[PlacedNode<'_>], x: f64, y: f64) -> Option<usize> {
    placed.iter().position(|p| p.bounds.contains(x, y))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn small() -> Diagram {
        Diagram::new(
            vec![
                DiagramNode::new("a", NodeKind::Process, GridCell::new(0, 0)),
                DiagramNode::new("b", NodeKind::Storage, GridCell::new(0, 1)),
                DiagramNode::new("c", NodeKind::Process, GridCell::new(1, 1)),
            ],
            vec![
                Edge::new("a", Anchor::Right, "b", Anchor::Left),
                Edge::new("b", Anchor::Bottom, "c", Anchor::Top),
            ],
        )
        .unwrap()
    }

    #[derive(Default)]
    struct Recorder(Vec<(Point, Point)>);

    impl ConnectorRenderer for Recorder {
        fn draw_connector(&mut self, from: Point, to: Point) {
            self.0.push((from, to));
        }
    }

    #[test]
    fn edge_to_unknown_node_is_rejected() {
        let result = Diagram::new(
            vec![DiagramNode::new("a", NodeKind::Process, GridCell::new(0, 0))],
            vec![Edge::new("a", Anchor::Right, "ghost", Anchor::Left)],
        );
        assert_eq!(result, Err(CatalogError::UnknownNode("ghost".into())));
    }

    #[test]
    fn duplicate_node_is_rejected() {
        let result = Diagram::new(
            vec![
                DiagramNode::new("a", NodeKind::Process, GridCell::new(0, 0)),
                DiagramNode::new("a", NodeKind::Storage, GridCell::new(1, 0)),
            ],
            vec![],
        );
        assert_eq!(result, Err(CatalogError::DuplicateKey("a".into())));
    }

    #[test]
    fn grid_size_follows_cells() {
        let diagram = small();
        assert_eq!(diagram.rows(), 2);
        assert_eq!(diagram.columns(), 2);
    }

    #[test]
    fn anchors_lie_on_their_side() {
        let b = Bounds {
            x: 10.0,
            y: 4.0,
            width: 20.0,
            height: 6.0,
        };
        assert_eq!(b.anchor_point(Anchor::Top), Point { x: 20.0, y: 4.0 });
        assert_eq!(b.anchor_point(Anchor::Bottom), Point { x: 20.0, y: 10.0 });
        assert_eq!(b.anchor_point(Anchor::Left), Point { x: 10.0, y: 7.0 });
        assert_eq!(b.anchor_point(Anchor::Right), Point { x: 30.0, y: 7.0 });
    }

    #[test]
    fn placement_stays_inside_area_and_cells() {
        let diagram = small();
        let placed = diagram.place(80.0, 20.0);
        assert_eq!(placed.len(), 3);
        for p in &placed {
            assert!(p.bounds.x >= 0.0 && p.bounds.right() <= 80.0);
            assert!(p.bounds.y >= 0.0 && p.bounds.bottom() <= 20.0);
        }
        assert!(placed[0].bounds.right() < placed[1].bounds.x);
        assert!(placed[1].bounds.bottom() < placed[2].bounds.y);
    }

    #[test]
    fn connectors_recompute_on_resize() {
        let diagram = small();
        let mut narrow = Recorder::default();
        let mut wide = Recorder::default();
        diagram.render_connectors(40.0, 20.0, &mut narrow);
        diagram.render_connectors(120.0, 20.0, &mut wide);
        assert_eq!(narrow.0.len(), 2);
        assert_eq!(wide.0.len(), 2);
        assert!(wide.0[0].1.x > narrow.0[0].1.x);
    }

    #[test]
    fn neighbor_follows_direction() {
        let diagram = small();
        assert_eq!(diagram.neighbor(0, Anchor::Right), Some(1));
        assert_eq!(diagram.neighbor(1, Anchor::Bottom), Some(2));
        assert_eq!(diagram.neighbor(2, Anchor::Top), Some(1));
        assert_eq!(diagram.neighbor(0, Anchor::Left), None);
        assert_eq!(diagram.neighbor(9, Anchor::Left), None);
    }

    #[test]
    fn hit_test_finds_node() {
        let diagram = small();
        let placed = diagram.place(80.0, 20.0);
        let center = placed[2].bounds.anchor_point(Anchor::Top);
        assert_eq!(node_at(&placed, center.x, center.y + 0.5), Some(2));
        assert_eq!(node_at(&placed, 0.0, 19.9), None);
    }
}
