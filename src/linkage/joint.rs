use glam::Vec2;

/// One link of the chain: a position and the radius it is drawn with.
///
/// The radius never takes part in solving; it is carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    pub position: Vec2,
    pub radius: f32,
}

impl Joint {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }

    pub fn from_triple((x, y, radius): (f32, f32, f32)) -> Self {
        Self::new(Vec2::new(x, y), radius)
    }

    pub fn to_triple(self) -> (f32, f32, f32) {
        (self.position.x, self.position.y, self.radius)
    }

    pub fn with_position(self, position: Vec2) -> Self {
        Self { position, ..self }
    }
}
