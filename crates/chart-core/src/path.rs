// File: crates/chart-core/src/path.rs
// Summary: Renderer-agnostic path model, the connecting polyline, and point markers.

use crate::config::GapPolicy;
use crate::geometry::{Circle, Point, Segment};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

/// Ordered move/line commands, replayable onto any 2D path API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drawn segments, one per `LineTo`.
    pub fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::new();
        let mut cursor: Option<Point> = None;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => cursor = Some(p),
                PathCommand::LineTo(p) => {
                    if let Some(from) = cursor {
                        out.push(Segment::new(from, p));
                    }
                    cursor = Some(p);
                }
            }
        }
        out
    }

    /// Number of `MoveTo` commands, i.e. disconnected runs.
    pub fn subpath_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::MoveTo(_))).count()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let commands = self
            .commands
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(p.offset(dx, dy)),
                PathCommand::LineTo(p) => PathCommand::LineTo(p.offset(dx, dy)),
            })
            .collect();
        Self { commands }
    }
}

/// Polyline through the present points in index order, bridging gaps.
pub fn connecting_path(points: &[Option<Point>]) -> Path {
    connecting_path_with(points, GapPolicy::Bridge)
}

/// Polyline through the present points.
///
/// With `Bridge` only the first present point is a move; with `Break` every point
/// that follows a gap starts a new subpath.
pub fn connecting_path_with(points: &[Option<Point>], policy: GapPolicy) -> Path {
    let mut path = Path::new();
    let mut pen_down = false;
    for point in points {
        match point {
            Some(p) if pen_down => path.line_to(*p),
            Some(p) => {
                path.move_to(*p);
                pen_down = true;
            }
            None if policy == GapPolicy::Break => pen_down = false,
            None => {}
        }
    }
    path
}

/// One fixed-radius circle per present point.
pub fn marker_geometry(points: &[Option<Point>], radius: f64) -> Vec<Circle> {
    points.iter().flatten().map(|&center| Circle { center, radius }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts() -> Vec<Option<Point>> {
        vec![Some(Point::new(20.0, 10.0)), None, Some(Point::new(100.0, 0.0)), Some(Point::new(140.0, 5.0))]
    }

    #[test]
    fn break_policy_splits_runs() {
        let path = connecting_path_with(&pts(), GapPolicy::Break);
        assert_eq!(path.subpath_count(), 2);
        assert_eq!(path.segments().len(), 1);
    }

    #[test]
    fn leading_gaps_do_not_emit_lines() {
        let path = connecting_path(&[None, None, Some(Point::new(1.0, 1.0))]);
        assert_eq!(path.commands(), &[PathCommand::MoveTo(Point::new(1.0, 1.0))]);
    }

    #[test]
    fn translation_moves_every_command() {
        let path = connecting_path(&pts()).translated(0.0, 30.0);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(20.0, 40.0)));
    }
}
