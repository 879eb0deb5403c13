/// Things a session announces to whoever is watching it.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    DefinitionsLoaded { count: usize },
    LookupFailed { message: String },
    Won(Celebration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    Star,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Self = Self(0xff, 0x00, 0x00);
    pub const GREEN: Self = Self(0x00, 0xff, 0x00);
    pub const BLUE: Self = Self(0x00, 0x00, 0xff);
}

/// Parameters for the confetti burst played on a win.
///
/// Purely cosmetic: hosts without graphics are free to ignore it.
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    pub particle_count: u32,
    /// Launch direction in degrees, 90 being straight up.
    pub angle: f32,
    /// Degrees of spread around `angle`.
    pub spread: f32,
    /// Launch point as fractions of the width and height.
    pub origin: (f32, f32),
    pub shapes: &'static [ParticleShape],
    pub colors: &'static [Rgb],
    pub gravity: f32,
    pub drift: f32,
    pub scalar: f32,
}

impl Default for Celebration {
    fn default() -> Self {
        Self {
            particle_count: 200,
            angle: 90.0,
            spread: 90.0,
            origin: (0.5, 0.7),
            shapes: &[ParticleShape::Star, ParticleShape::Square],
            colors: &[Rgb::RED, Rgb::GREEN, Rgb::BLUE],
            gravity: 0.5,
            drift: 0.0,
            scalar: 0.8,
        }
    }
}
