//! Shared invariant suite run against every [`Topology`] variant.
//!
//! Any new topology must pass every check here: the offset table drives
//! both neighbor sampling and the step algorithm, so a malformed table
//! (a self-offset, a duplicate, an asymmetric pair) would silently skew
//! alive-neighbor counts.

use crate::topology::Topology;

/// Run every compliance check against one topology.
pub(crate) fn run_full_compliance(topology: Topology) {
    check_offsets_nonempty(topology);
    check_no_self_offset(topology);
    check_no_duplicate_offsets(topology);
    check_offsets_closed_under_negation(topology);
    check_offsets_within_unit_box(topology);
}

fn check_offsets_nonempty(topology: Topology) {
    assert!(
        !topology.offsets().is_empty(),
        "{topology}: offset table is empty"
    );
}

fn check_no_self_offset(topology: Topology) {
    assert!(
        !topology.offsets().contains(&(0, 0)),
        "{topology}: a cell must not be its own neighbor"
    );
}

fn check_no_duplicate_offsets(topology: Topology) {
    let offsets = topology.offsets();
    for (i, a) in offsets.iter().enumerate() {
        for b in &offsets[i + 1..] {
            assert_ne!(a, b, "{topology}: duplicate offset {a:?}");
        }
    }
}

/// For every offset `(dx, dy)` the table must contain `(-dx, -dy)`,
/// making neighbor relations symmetric on the unbounded lattice.
fn check_offsets_closed_under_negation(topology: Topology) {
    for &(dx, dy) in topology.offsets() {
        assert!(
            topology.offsets().contains(&(-dx, -dy)),
            "{topology}: offset ({dx},{dy}) has no mirror ({},{})",
            -dx,
            -dy,
        );
    }
}

fn check_offsets_within_unit_box(topology: Topology) {
    for &(dx, dy) in topology.offsets() {
        assert!(
            dx.abs() <= 1 && dy.abs() <= 1,
            "{topology}: offset ({dx},{dy}) reaches beyond adjacent cells"
        );
    }
}
