use crate::utils::vector::Vec2;

/// One drawing instruction of a freehand path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    /// Quadratic bezier from the current point, bending toward `control`, ending at `end`.
    QuadTo { control: Vec2, end: Vec2 },
}

/// Ordered list of move/quadratic commands describing a smoothed line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn quad_to(&mut self, control: Vec2, end: Vec2) {
        self.commands.push(PathCommand::QuadTo { control, end });
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of curve segments, not counting move-tos.
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadTo { .. }))
            .count()
    }

    /// Flatten into polylines, one per sub-path, so consecutive points on a curve are at most
    /// `max_step` apart. A sub-path that starts without a move-to begins at the origin.
    pub fn flatten(&self, max_step: f32) -> Vec<Vec<Vec2>> {
        let max_step = max_step.max(0.1);
        let mut out: Vec<Vec<Vec2>> = Vec::new();
        let mut current = Vec2::default();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    out.push(vec![p]);
                    current = p;
                }
                PathCommand::QuadTo { control, end } => {
                    if out.is_empty() {
                        out.push(vec![current]);
                    }
                    // The curve's speed never exceeds twice the control polygon length.
                    let hull = current.distance(control) + control.distance(end);
                    let steps = ((2.0 * hull / max_step).ceil() as usize).clamp(1, 512);
                    if let Some(points) = out.last_mut() {
                        for i in 1..=steps {
                            let t = i as f32 / steps as f32;
                            points.push(quad_point(current, control, end, t));
                        }
                    }
                    current = end;
                }
            }
        }
        out
    }
}

fn quad_point(start: Vec2, control: Vec2, end: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    start * (mt * mt) + control * (2.0 * mt * t) + end * (t * t)
}
