/// # Keypad
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
///
/// Mapping physical keys onto this layout is the host's job; the keypad only sees indices 0..F.
/// Indices above 0xF are folded onto their low nibble.
///
/// At most one `Fx0A` can be waiting on the keypad at a time. The wait is resolved by the next
/// key press; releases never resolve it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keypad {
    pressed: [bool; 16],
    wait_register: Option<u8>,
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    /// Marks `key` as pressed.
    ///
    /// Returns the register that was waiting for a key, if any, clearing the wait.
    pub fn press(&mut self, key: u8) -> Option<u8> {
        self.pressed[usize::from(key & 0xF)] = true;
        self.wait_register.take()
    }

    pub fn release(&mut self, key: u8) {
        self.pressed[usize::from(key & 0xF)] = false;
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed[usize::from(key & 0xF)]
    }

    /// Wait for the next press to be stored in register `x`
    pub fn begin_wait(&mut self, x: u8) {
        self.wait_register = Some(x & 0xF);
    }

    pub fn wait_register(&self) -> Option<u8> {
        self.wait_register
    }
}
