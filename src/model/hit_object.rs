use std::{
    cmp::Ordering,
    ops::{Add, Sub},
};

/// A position on the playfield.
///
/// The playfield spans `512x384` with the origin in the top left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

impl Pos {
    /// Create a new position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The length of the vector.
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// The distance to another position.
    pub fn distance(&self, other: Self) -> f32 {
        (*self - other).length()
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Self::Output {
        Pos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, rhs: Pos) -> Self::Output {
        Pos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// All hit object data required for difficulty and performance calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos,
    pub start_time: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Whether the hit object is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(self.kind, HitObjectKind::Circle)
    }

    /// Whether the hit object is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, HitObjectKind::Slider(_))
    }

    /// Whether the hit object is a spinner.
    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, HitObjectKind::Spinner(_))
    }

    /// Whether the hit object is a hold note.
    pub const fn is_hold_note(&self) -> bool {
        matches!(self.kind, HitObjectKind::Hold(_))
    }

    /// The end time of the object.
    pub fn end_time(&self) -> f64 {
        match &self.kind {
            HitObjectKind::Circle => self.start_time,
            HitObjectKind::Slider(Slider { duration, .. })
            | HitObjectKind::Spinner(Spinner { duration })
            | HitObjectKind::Hold(HoldNote { duration }) => self.start_time + *duration,
        }
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// Additional data of a [`HitObject`].
///
/// Note that each mode interprets hit objects differently.
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    Slider(Slider),
    Spinner(Spinner),
    Hold(HoldNote),
}

/// A slider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slider {
    /// The expected length of the path, if specified by the map.
    pub expected_dist: Option<f64>,
    /// The amount of repeat points.
    pub repeats: usize,
    /// The time it takes to traverse all spans in map-clock milliseconds.
    pub duration: f64,
}

impl Slider {
    /// The amount of times the slider's path is traversed.
    pub const fn span_count(&self) -> usize {
        self.repeats + 1
    }

    /// The duration of a single span.
    pub fn span_duration(&self) -> f64 {
        self.duration / self.span_count() as f64
    }
}

/// A spinner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spinner {
    pub duration: f64,
}

/// A hold note.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoldNote {
    pub duration: f64,
}
