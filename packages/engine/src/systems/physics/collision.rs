use crate::core::Vec2;
use crate::domain::particle::Particle;

use super::types::PhysicsResult;

/// 1D elastic collision: velocities after impact along a shared axis
#[inline]
pub fn elastic_1d(u1: f64, u2: f64, m1: f64, m2: f64) -> (f64, f64) {
    if m1 == m2 {
        return (u2, u1);
    }
    let total = m1 + m2;
    let v1 = (u1 * (m1 - m2) + 2.0 * m2 * u2) / total;
    let v2 = (u2 * (m2 - m1) + 2.0 * m1 * u1) / total;
    (v1, v2)
}

/// Elastic response between two overlapping circles.
///
/// Both velocities are rotated into the frame whose x-axis runs from `a`
/// to `b`, the 1D formula is applied on that axis, and the result is rotated
/// back. Tangential components pass through untouched.
///
/// Pairs that are already moving apart are left alone so a late-detected
/// overlap does not get resolved twice and stick. Returns true if velocities
/// changed.
pub fn resolve_collision(a: &mut Particle, b: &mut Particle) -> bool {
    let rel_vel = a.vel - b.vel;
    let rel_pos = b.pos - a.pos;

    if rel_vel.dot(rel_pos) < 0.0 {
        return false;
    }

    let angle = -rel_pos.angle();

    let u1 = a.vel.rotate(angle);
    let u2 = b.vel.rotate(angle);

    let (v1x, v2x) = elastic_1d(u1.x, u2.x, a.mass(), b.mass());

    a.vel = Vec2::new(v1x, u1.y).rotate(-angle);
    b.vel = Vec2::new(v2x, u2.y).rotate(-angle);
    true
}

/// Test particle `i` against every other particle and resolve overlaps in
/// index order.
pub fn collide_with_others(particles: &mut [Particle], i: usize, result: &mut PhysicsResult) {
    for j in 0..particles.len() {
        if j == i {
            continue;
        }
        result.pair_checks += 1;

        if particles[i].gap(&particles[j]) < 0.0 {
            let (a, b) = pair_mut(particles, i, j);
            if resolve_collision(a, b) {
                result.collisions += 1;
            }
        }
    }
}

/// Two distinct mutable borrows out of one slice (`i != j`)
#[inline]
fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = particles.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = particles.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn axes(a: &Particle, b: &Particle) -> (Vec2, Vec2) {
        let d = b.pos - a.pos;
        let n = d * (1.0 / d.length());
        (n, Vec2::new(-n.y, n.x))
    }

    #[test]
    fn equal_masses_swap_exactly() {
        assert_eq!(elastic_1d(3.25, -1.5, 10.0, 10.0), (-1.5, 3.25));
    }

    #[test]
    fn unequal_masses_conserve_momentum_and_energy_1d() {
        let (m1, m2, u1, u2) = (3.0, 7.0, 4.0, -2.0);
        let (v1, v2) = elastic_1d(u1, u2, m1, m2);
        assert!(close(m1 * u1 + m2 * u2, m1 * v1 + m2 * v2));
        assert!(close(m1 * u1 * u1 + m2 * u2 * u2, m1 * v1 * v1 + m2 * v2 * v2));
    }

    #[test]
    fn head_on_equal_masses_swap() {
        let mut a = Particle::at(100.0, 100.0, 2.0, 0.0);
        let mut b = Particle::at(105.0, 100.0, -2.0, 0.0);
        assert!(resolve_collision(&mut a, &mut b));
        assert!(close(a.vel.x, -2.0) && close(a.vel.y, 0.0));
        assert!(close(b.vel.x, 2.0) && close(b.vel.y, 0.0));
    }

    #[test]
    fn oblique_unequal_masses_conserve_momentum_energy_and_tangent() {
        let mut a = Particle::with_mass(Vec2::new(0.0, 0.0), Vec2::new(3.0, 1.0), 10.0, 4.0);
        let mut b = Particle::with_mass(Vec2::new(12.0, 9.0), Vec2::new(-1.0, -2.0), 10.0, 9.0);

        let (n, t) = axes(&a, &b);
        let momentum_before = a.momentum() + b.momentum();
        let energy_before = a.kinetic_energy() + b.kinetic_energy();
        let (ta, tb) = (a.vel.dot(t), b.vel.dot(t));
        let normal_momentum = a.mass() * a.vel.dot(n) + b.mass() * b.vel.dot(n);

        assert!(resolve_collision(&mut a, &mut b));

        let momentum_after = a.momentum() + b.momentum();
        assert!(close(momentum_before.x, momentum_after.x));
        assert!(close(momentum_before.y, momentum_after.y));
        assert!(close(energy_before, a.kinetic_energy() + b.kinetic_energy()));
        assert!(close(normal_momentum, a.mass() * a.vel.dot(n) + b.mass() * b.vel.dot(n)));
        assert!(close(ta, a.vel.dot(t)));
        assert!(close(tb, b.vel.dot(t)));
    }

    #[test]
    fn glancing_equal_masses_swap_normal_keep_tangent() {
        let mut a = Particle::at(0.0, 0.0, 2.0, 1.0);
        let mut b = Particle::at(10.0, 10.0, 0.0, -1.0);
        let (n, t) = axes(&a, &b);
        let (na, nb) = (a.vel.dot(n), b.vel.dot(n));
        let (ta, tb) = (a.vel.dot(t), b.vel.dot(t));

        assert!(resolve_collision(&mut a, &mut b));

        assert!(close(a.vel.dot(n), nb));
        assert!(close(b.vel.dot(n), na));
        assert!(close(a.vel.dot(t), ta));
        assert!(close(b.vel.dot(t), tb));
    }

    #[test]
    fn separating_pair_is_skipped() {
        let mut a = Particle::at(100.0, 100.0, -1.0, 0.0);
        let mut b = Particle::at(105.0, 100.0, 1.0, 0.0);
        assert!(!resolve_collision(&mut a, &mut b));
        assert_eq!(a.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(b.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn self_pair_never_checked_even_when_value_equal() {
        let twin = Particle::at(50.0, 50.0, 1.0, 0.0);
        let mut particles = vec![twin.clone(), twin];
        let mut result = PhysicsResult::default();

        collide_with_others(&mut particles, 0, &mut result);

        // Only (0, 1) is tested; the coincident twin at index 1 is a real partner.
        assert_eq!(result.pair_checks, 1);
        assert_eq!(result.collisions, 1);
    }

    #[test]
    fn distant_particles_do_not_interact() {
        let mut particles = vec![
            Particle::at(10.0, 10.0, 1.0, 0.0),
            Particle::at(200.0, 10.0, -1.0, 0.0),
        ];
        let mut result = PhysicsResult::default();
        collide_with_others(&mut particles, 0, &mut result);
        assert_eq!(result.collisions, 0);
        assert_eq!(particles[0].vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn touching_exactly_is_not_an_overlap() {
        let mut particles = vec![
            Particle::at(0.0, 0.0, 1.0, 0.0),
            Particle::at(20.0, 0.0, -1.0, 0.0),
        ];
        let mut result = PhysicsResult::default();
        collide_with_others(&mut particles, 0, &mut result);
        assert_eq!(result.collisions, 0);
    }
}
