/// Detection of edge-sharing piece pairs
pub mod adjacency;
/// Dense index bitset backing the exact-cover search
pub mod bitset;
/// Palette shuffling and colour assignment
pub mod coloring;
/// Two-phase merge engine and generation entry points
pub mod executor;
/// Exact-cover encoding of the current partition
pub mod formulation;
/// Pair scoring, random sources and weighted selection
pub mod selection;
/// Bounded Algorithm X exact-cover solver
pub mod solver;
