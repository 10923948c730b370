use crate::all::*;

use winit::event::VirtualKeyCode;

// Keyboard layout of each demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyMap {
  Camera,
  Point,
  Selection,
}

pub fn key_to_command(key_map: KeyMap, key: VirtualKeyCode) -> Option<Command> {
  use VirtualKeyCode::*;
  if key == Escape { return Some(Command::Quit) }
  match key_map {
    KeyMap::Camera => match key {
      W => Some(Command::Forward),
      S => Some(Command::Back),
      A => Some(Command::Left),
      D => Some(Command::Right),
      Space => Some(Command::Up),
      Back => Some(Command::Down),
      Q => Some(Command::YawLeft),
      E => Some(Command::YawRight),
      _ => None,
    },
    KeyMap::Point => match key {
      W => Some(Command::Up),
      S => Some(Command::Down),
      A => Some(Command::Left),
      D => Some(Command::Right),
      Space => Some(Command::Forward),
      Back => Some(Command::Back),
      _ => None,
    },
    KeyMap::Selection => match key {
      S => Some(Command::Select),
      Q => Some(Command::Quit),
      _ => None,
    },
  }
}
