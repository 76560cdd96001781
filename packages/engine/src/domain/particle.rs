use serde::Serialize;

use crate::core::Vec2;

use super::config::{PARTICLE_COLOR, PARTICLE_MASS, PARTICLE_RADIUS};

/// A circular body. Radius and mass are fixed at creation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Particle {
    /// Center position (canvas pixels)
    pub pos: Vec2,
    /// Velocity (pixels per frame)
    pub vel: Vec2,
    radius: f64,
    mass: f64,
    color: &'static str,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f64) -> Self {
        Self::with_mass(pos, vel, radius, PARTICLE_MASS)
    }

    pub fn with_mass(pos: Vec2, vel: Vec2, radius: f64, mass: f64) -> Self {
        Self {
            pos,
            vel,
            radius,
            mass,
            color: PARTICLE_COLOR,
        }
    }

    /// Default-sized particle, handy for hosts and tests
    pub fn at(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(vx, vy), PARTICLE_RADIUS)
    }

    pub fn with_color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Center distance minus the sum of radii; negative means overlap
    pub fn gap(&self, other: &Particle) -> f64 {
        self.pos.distance(other.pos) - (self.radius + other.radius)
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }

    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }
}
