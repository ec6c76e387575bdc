/// Decorative pointer that trails the mouse with exponential easing.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorFollower {
    target: (f32, f32),
    position: (f32, f32),
    smoothing: f32,
    hovering: bool,
    visible: bool,
}

impl CursorFollower {
    pub fn new(smoothing: f32) -> Self {
        Self {
            target: (0.0, 0.0),
            position: (0.0, 0.0),
            smoothing: smoothing.clamp(f32::EPSILON, 1.0),
            hovering: false,
            visible: false,
        }
    }

    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        self.target = (f32::from(column), f32::from(row));
        if !self.visible {
            self.position = self.target;
            self.visible = true;
        }
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Advances one frame. Returns `true` while the cell position changes.
    pub fn step(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        let before = self.cell();
        self.position.0 += (self.target.0 - self.position.0) * self.smoothing;
        self.position.1 += (self.target.1 - self.position.1) * self.smoothing;
        self.cell() != before
    }

    pub fn is_settled(&self) -> bool {
        (self.target.0 - self.position.0).abs() < 0.5 && (self.target.1 - self.position.1).abs() < 0.5
    }

    pub fn cell(&self) -> Option<(u16, u16)> {
        if !self.visible {
            return None;
        }
        Some((to_cell(self.position.0), to_cell(self.position.1)))
    }

    /// Cell under the real pointer, ahead of the eased glyph.
    pub fn pointer(&self) -> Option<(u16, u16)> {
        if !self.visible {
            return None;
        }
        Some((to_cell(self.target.0), to_cell(self.target.1)))
    }

    pub fn glyph(&self) -> &'static str {
        if self.hovering { "◉" } else { "○" }
    }
}

fn to_cell(value: f32) -> u16 {
    value.round().clamp(0.0, f32::from(u16::MAX)) as u16
}
