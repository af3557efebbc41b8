#![allow(dead_code)]

pub mod mock_prompt;
pub mod mock_storage;

use vi_cjk::{Engine, InputEvent, Outcome};

pub fn key(c: char) -> InputEvent {
    InputEvent::Unit(c as u8)
}

pub fn esc() -> InputEvent {
    InputEvent::Unit(27)
}

pub fn enter() -> InputEvent {
    InputEvent::Unit(b'\n')
}

pub fn backspace() -> InputEvent {
    InputEvent::Unit(127)
}

/// Feeds every UTF-8 byte of `text`, returning the outcome of the last one.
pub fn type_text(eng: &mut Engine, text: &str) -> Outcome {
    let mut last = Outcome::Ignored;
    for unit in text.bytes() {
        last = eng.handle_event(InputEvent::Unit(unit));
    }
    last
}

pub fn lines(eng: &Engine) -> Vec<&str> {
    eng.buffer().lines().iter().map(String::as_str).collect()
}
