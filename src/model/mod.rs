//! Data model: window configurations and the optimizer wire contract.

mod request;
mod result;
mod window;

pub use request::{CutRequest, MaterialLineItem, OptimizationRequest};
pub use result::{CutPiece, MaterialDetail, MaterialInfo, OptimizationResult};
pub use window::{
    Border, InnerSection, MullionConfig, Orientation, OuterFrame, WindowConfiguration,
};
