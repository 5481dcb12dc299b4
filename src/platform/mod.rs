//! Platform layer
//!
//! Handles the native host:
//! - Window creation and the event loop (`window`)
//! - Keyboard mapping to the movie's logical inputs (`input`)

pub mod input;
pub mod window;

pub use input::KeyState;
pub use window::run;

use thiserror::Error;

/// Failures of the host surface. The simulation itself cannot fail.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to run event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("graphics surface out of memory")]
    OutOfMemory,
}
