/// Counters gathered during one physics pass.
///
/// `pair_checks` grows as n², so the counters are 64-bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhysicsResult {
    /// Ordered pairs tested for overlap
    pub pair_checks: u64,
    /// Overlapping pairs that passed the approach test and were resolved
    pub collisions: u64,
    /// Velocity components flipped by a wall
    pub wall_bounces: u64,
}
