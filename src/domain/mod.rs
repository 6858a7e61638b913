// Domain layer: the check's models and the ports the orchestrator is driven through.

pub mod model;
pub mod ports;
