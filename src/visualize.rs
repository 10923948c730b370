use crate::all::*;

// 0RGB colors as expected by softbuffer.
pub const BLUE: u32 = 0x0000ff;
pub const GREEN: u32 = 0x00ff00;
pub const RED: u32 = 0xff0000;

pub const POINT_RADIUS: i32 = 10;
pub const LINE_WIDTH: i32 = 3;

// Window-sized pixel buffer. Drawing outside the buffer is clipped.
pub struct Canvas {
  pub buffer: Vec<u32>,
  pub width: usize,
  pub height: usize,
}

impl Canvas {
  pub fn new(width: usize, height: usize) -> Canvas {
    Canvas {
      buffer: vec![0; width * height],
      width,
      height,
    }
  }

  pub fn clear(&mut self) {
    self.buffer.iter_mut().for_each(|x| *x = 0);
  }

  #[inline(always)]
  pub fn draw_pixel(&mut self, p: &Vector2i, v: u32) {
    if p[0] < 0 || p[0] >= self.width as i32 { return }
    if p[1] < 0 || p[1] >= self.height as i32 { return }
    self.buffer[p[1] as usize * self.width + p[0] as usize] = v;
  }

  pub fn draw_circle(&mut self, center: &Vector2i, r: i32, v: u32) {
    for y in (-r)..(r + 1) {
      for x in (-r)..(r + 1) {
        if x * x + y * y > r * r { continue }
        self.draw_pixel(&(center + Vector2i::new(x, y)), v);
      }
    }
  }

  // Steps along the major axis, visiting only steps whose stroke can touch the canvas.
  pub fn draw_line(&mut self, p0: Vector2i, p1: Vector2i, v: u32, width: i32) {
    let r = (width - 1) / 2;
    let a = (p0[0] as i64, p0[1] as i64);
    let b = (p1[0] as i64, p1[1] as i64);
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    if dx == 0 && dy == 0 {
      self.draw_stroke(&p0, v, r);
    }
    else if dx.abs() < dy.abs() {
      let (a, b) = if a.1 > b.1 { (b, a) } else { (a, b) };
      let k = (b.0 - a.0) as f64 / (b.1 - a.1) as f64;
      for y in visible_steps(a.1, b.1, self.height, r) {
        let x = a.0 as f64 + k * (y - a.1) as f64;
        if let Some(x) = visible_coordinate(x, self.width, r) {
          self.draw_stroke(&Vector2i::new(x, y as i32), v, r);
        }
      }
    }
    else {
      let (a, b) = if a.0 > b.0 { (b, a) } else { (a, b) };
      let k = (b.1 - a.1) as f64 / (b.0 - a.0) as f64;
      for x in visible_steps(a.0, b.0, self.width, r) {
        let y = a.1 as f64 + k * (x - a.0) as f64;
        if let Some(y) = visible_coordinate(y, self.height, r) {
          self.draw_stroke(&Vector2i::new(x as i32, y), v, r);
        }
      }
    }
  }

  fn draw_stroke(&mut self, p: &Vector2i, v: u32, r: i32) {
    if r == 0 {
      self.draw_pixel(p, v);
    }
    else {
      self.draw_circle(p, r, v);
    }
  }

  pub fn draw_rectangle(&mut self, bbox: &BoundingBox, v: u32, width: i32) {
    let (a, b) = match (
      to_pixel(&Vector2d::new(bbox.x, bbox.y)),
      to_pixel(&Vector2d::new(bbox.x + bbox.width, bbox.y + bbox.height)),
    ) {
      (Ok(a), Ok(b)) => (a, b),
      _ => return,
    };
    self.draw_line(a, Vector2i::new(b[0], a[1]), v, width);
    self.draw_line(Vector2i::new(b[0], a[1]), b, v, width);
    self.draw_line(b, Vector2i::new(a[0], b[1]), v, width);
    self.draw_line(Vector2i::new(a[0], b[1]), a, v, width);
  }

  // Copies a gray frame to the top-left corner.
  pub fn draw_gray_frame(&mut self, frame: &VideoFrame) {
    for y in 0..frame.height.min(self.height) {
      for x in 0..frame.width.min(self.width) {
        let gray = frame.data[y * frame.width + x] as u32;
        self.buffer[y * self.width + x] = gray | (gray << 8) | (gray << 16);
      }
    }
  }
}

// Part of `start..=end` within `r` pixels of `0..size`.
fn visible_steps(start: i64, end: i64, size: usize, r: i32) -> std::ops::RangeInclusive<i64> {
  start.max(-(r as i64)) ..= end.min(size as i64 - 1 + r as i64)
}

fn visible_coordinate(c: f64, size: usize, r: i32) -> Option<i32> {
  let c = c.round();
  if c < -(r as f64) || c > (size as i64 - 1 + r as i64) as f64 { return None }
  Some(c as i32)
}
