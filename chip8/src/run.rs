use std::thread;
use std::time::Instant;

use log::{debug, warn};
use sdl2::event::Event as SdlEvent;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use c8vm::{
    Error, Event, FrameBuffer, Host, Result, DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAME_DURATION,
};
use display::{Display, Palette};

use crate::keymap::keymap;
use crate::sound::Beeper;

/// Window and audio settings for an `SdlHost`
pub struct HostOptions {
    pub title: String,
    pub scale: u32,
    pub palette: Palette,
    pub mute: bool,
}

/// # SdlHost
/// Drives a Chip-8 session with an SDL2 window, keyboard and speaker.
///
/// Fields are dropped in declaration order: the canvas goes first and the SDL context last.
pub struct SdlHost {
    display: Display,
    beeper: Option<Beeper>,
    events: EventPump,
    last_tick: Instant,
    _sdl: sdl2::Sdl,
}

impl SdlHost {
    pub fn new(options: &HostOptions) -> Result<Self> {
        let sdl = sdl2::init().map_err(Error::Host)?;
        let display = Display::new(&sdl, &options.title, options.scale, options.palette)?;
        let events = sdl.event_pump().map_err(Error::Host)?;

        let beeper = if options.mute {
            None
        } else {
            match Beeper::new(&sdl) {
                Ok(beeper) => Some(beeper),
                Err(e) => {
                    warn!("audio unavailable, continuing without sound: {}", e);
                    None
                }
            }
        };

        debug!(
            "window {}x{}, sound {}",
            DISPLAY_WIDTH as u32 * options.scale,
            DISPLAY_HEIGHT as u32 * options.scale,
            if beeper.is_some() { "on" } else { "off" }
        );
        Ok(SdlHost {
            display,
            beeper,
            events,
            last_tick: Instant::now(),
            _sdl: sdl,
        })
    }
}

/// Translates an SDL event into keypad input, dropping everything the interpreter doesn't use.
fn translate(event: SdlEvent) -> Option<Event> {
    match event {
        SdlEvent::Quit { .. }
        | SdlEvent::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        } => Some(Event::Quit),
        SdlEvent::KeyDown {
            keycode: Some(key),
            repeat: false,
            ..
        } => keymap(key).map(Event::KeyDown),
        SdlEvent::KeyUp {
            keycode: Some(key), ..
        } => keymap(key).map(Event::KeyUp),
        _ => None,
    }
}

impl Host for SdlHost {
    fn poll_events(&mut self) -> Vec<Event> {
        self.events.poll_iter().filter_map(translate).collect()
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.display.render(frame)
    }

    fn wait_until_next_tick(&mut self) {
        let deadline = self.last_tick + FRAME_DURATION;
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
            self.last_tick = deadline;
        } else {
            debug!("frame overran by {:?}", now - deadline);
            self.last_tick = now;
        }
    }

    fn buzz(&mut self, on: bool) {
        if let Some(beeper) = self.beeper.as_mut() {
            beeper.set(on);
        }
    }
}
