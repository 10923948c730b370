use crate::all::*;

// Mouse drag that selects a region of the displayed frame.
#[derive(Debug)]
pub struct Selection {
  active: bool,
  cursor: Vector2d,
  anchor: Option<Vector2d>,
}

impl Selection {
  pub fn new() -> Selection {
    Selection {
      active: false,
      cursor: Vector2d::zeros(),
      anchor: None,
    }
  }

  pub fn is_active(&self) -> bool {
    self.active
  }

  pub fn start(&mut self) {
    self.active = true;
    self.anchor = None;
  }

  pub fn cursor_moved(&mut self, position: Vector2d) {
    self.cursor = position;
  }

  pub fn press(&mut self) {
    if self.active {
      self.anchor = Some(self.cursor);
    }
  }

  // Finishes the drag. A click without movement gives a zero-area box.
  pub fn release(&mut self) -> Option<BoundingBox> {
    if !self.active { return None }
    let anchor = self.anchor.take()?;
    self.active = false;
    Some(BoundingBox::from_corners(anchor, self.cursor))
  }

  // Box being dragged, for drawing.
  pub fn current(&self) -> Option<BoundingBox> {
    if !self.active { return None }
    self.anchor.map(|anchor| BoundingBox::from_corners(anchor, self.cursor))
  }
}
