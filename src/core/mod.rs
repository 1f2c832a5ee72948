pub mod offload;
pub mod pipeline;
