//! Axis-aligned bounding-box collision between the avatar and obstacles.
//!
//! A pipe is modeled as two solid boxes: the top segment spans
//! `0..gap_top`, the bottom segment `gap_top + pipe_gap..playfield
//! bottom`. Overlap tests use strict inequalities, so boxes that merely
//! touch do not collide.

use glam::Vec2;

use crate::sim::state::Pipe;
use crate::tuning::GameTuning;

/// Axis-aligned bounding box in playfield space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// True when the interiors of the two boxes overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The avatar's hitbox for a given vertical position.
pub fn crab_aabb(crab_y: f32, tuning: &GameTuning) -> Aabb {
    Aabb::new(
        Vec2::new(tuning.crab_x, crab_y),
        Vec2::new(tuning.crab_x + tuning.crab_size, crab_y + tuning.crab_size),
    )
}

/// The solid segment above a pipe's gap.
pub fn pipe_top_aabb(pipe: &Pipe, tuning: &GameTuning) -> Aabb {
    Aabb::new(
        Vec2::new(pipe.x, 0.0),
        Vec2::new(pipe.x + tuning.pipe_width, pipe.gap_top),
    )
}

/// The solid segment below a pipe's gap.
pub fn pipe_bottom_aabb(pipe: &Pipe, tuning: &GameTuning) -> Aabb {
    Aabb::new(
        Vec2::new(pipe.x, pipe.gap_top + tuning.pipe_gap),
        Vec2::new(pipe.x + tuning.pipe_width, tuning.playfield_height),
    )
}

/// True when the avatar overlaps either solid segment of `pipe`.
///
/// Fully inside the gap is not a collision, nor is a pipe outside the
/// avatar's horizontal span.
pub fn pipe_hits_crab(crab: &Aabb, pipe: &Pipe, tuning: &GameTuning) -> bool {
    crab.intersects(&pipe_top_aabb(pipe, tuning)) || crab.intersects(&pipe_bottom_aabb(pipe, tuning))
}
