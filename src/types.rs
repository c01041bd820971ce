/// Identifier for a node in a simulation's growth structure.
///
/// This is an index into `SimulationState::nodes`, and is only meaningful
/// within the lifetime of a given state instance.
pub type NodeId = usize;
