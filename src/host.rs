use crate::error::Result;
use crate::frame_buffer::FrameBuffer;

/// Input observed by the host since the last poll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Quit,
    KeyDown(u8),
    KeyUp(u8),
}

/// # Host
/// Everything the interpreter needs from the outside world: input, a screen, a clock and
/// optionally a speaker.
///
/// Keys are reported as keypad indices 0..=F; translating physical keys is up to the host.
pub trait Host {
    /// Drains the events that arrived since the previous call
    fn poll_events(&mut self) -> Vec<Event>;

    /// Shows a frame
    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;

    /// Sleeps until ~16.667ms after the previous call returned
    fn wait_until_next_tick(&mut self);

    /// Turns the tone on or off; called every frame
    fn buzz(&mut self, _on: bool) {}
}
