//! Input abstraction layer.

mod mock;

pub use mock::MockInput;

/// Logical actions consumed by the reader app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    TogglePlayback,
    IncreaseFont,
    DecreaseFont,
    IncreaseSpeed,
    DecreaseSpeed,
    ScrollUp,
    ScrollDown,
    /// The hosting surface changed width, in pixels.
    Resize { width: u32 },
    Quit,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
