//! Game Module
//!
//! Demo-specific pieces that build on top of the engine: the fixed grove
//! layout the binaries walk around in.

pub mod scene;

pub use scene::{SceneLayout, TreeInstance};
