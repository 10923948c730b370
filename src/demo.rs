use crate::all::*;

// Per-frame scene of one demo. The session pose is already updated when `update` runs.
pub enum Demo {
  Point(PointDemo),
  Shape(ShapeDemo),
  Distance(DistanceDemo),
}

pub struct PointDemo {
  pub intrinsics: Intrinsics,
}

pub struct ShapeDemo {
  pub intrinsics: Intrinsics,
  pub shape: Shape,
}

pub struct DistanceDemo {
  pub intrinsics: Intrinsics,
  pub sensor: SensorDimensions,
  pub footprint: ObjectFootprint,
  pub frames: Box<dyn FrameSource>,
  pub selection: Selection,
  pub last_box: Option<BoundingBox>,
  // Shown again on frames where nothing is read.
  last_frame: Option<VideoFrame>,
  frames_ended: bool,
}

impl Demo {
  pub fn key_map(&self) -> KeyMap {
    match self {
      Demo::Point(_) => KeyMap::Point,
      Demo::Shape(_) => KeyMap::Camera,
      Demo::Distance(_) => KeyMap::Selection,
    }
  }

  pub fn control_mode(&self) -> ControlMode {
    match self {
      Demo::Point(_) => ControlMode::Point,
      Demo::Shape(_) | Demo::Distance(_) => ControlMode::Camera,
    }
  }

  pub fn update(&mut self, session: &Session, command: Option<Command>, canvas: &mut Canvas) {
    match self {
      Demo::Point(demo) => demo.update(session, canvas),
      Demo::Shape(demo) => demo.update(session, canvas),
      Demo::Distance(demo) => demo.update(command, canvas),
    }
  }

  pub fn last_box(&self) -> Option<BoundingBox> {
    match self {
      Demo::Distance(demo) => demo.last_box,
      _ => None,
    }
  }

  pub fn cursor_moved(&mut self, position: Vector2d) {
    if let Demo::Distance(demo) = self {
      demo.selection.cursor_moved(position);
    }
  }

  pub fn mouse_pressed(&mut self) {
    if let Demo::Distance(demo) = self {
      demo.selection.press();
    }
  }

  pub fn mouse_released(&mut self) -> Option<PositionEstimate> {
    match self {
      Demo::Distance(demo) => demo.finish_selection(),
      _ => None,
    }
  }
}

impl PointDemo {
  fn update(&self, session: &Session, canvas: &mut Canvas) {
    canvas.clear();
    match self.intrinsics.project(&session.pose.position).and_then(|pixel| to_pixel(&pixel)) {
      Ok(pixel) => canvas.draw_circle(&pixel, POINT_RADIUS, BLUE),
      Err(err) => debug!("Skipping point: {}", err),
    }
  }
}

impl ShapeDemo {
  fn update(&self, session: &Session, canvas: &mut Canvas) {
    canvas.clear();
    let projector = Projector::new(&self.intrinsics.intrinsic_matrix(), &session.pose.extrinsic());
    let pixels = projector.project_points(&self.shape.points);
    for (i, j) in self.shape.edges() {
      if let (Ok(p0), Ok(p1)) = (&pixels[i], &pixels[j]) {
        canvas.draw_line(*p0, *p1, GREEN, LINE_WIDTH);
      }
    }
    for pixel in &pixels {
      match pixel {
        Ok(p) => canvas.draw_circle(p, POINT_RADIUS / 2, BLUE),
        Err(err) => debug!("Skipping shape point: {}", err),
      }
    }
  }
}

impl DistanceDemo {
  pub fn new(
    intrinsics: Intrinsics,
    sensor: SensorDimensions,
    footprint: ObjectFootprint,
    frames: Box<dyn FrameSource>,
  ) -> DistanceDemo {
    DistanceDemo {
      intrinsics,
      sensor,
      footprint,
      frames,
      selection: Selection::new(),
      last_box: None,
      last_frame: None,
      frames_ended: false,
    }
  }

  fn update(&mut self, command: Option<Command>, canvas: &mut Canvas) {
    if command == Some(Command::Select) {
      info!("Drag a box around the object.");
      self.selection.start();
    }

    // The frame stays frozen while selecting. The first failed read ends the input.
    if !self.selection.is_active() && !self.frames_ended {
      match self.frames.read() {
        Ok(frame) => match &mut self.last_frame {
          Some(last) => {
            last.data.clone_from(&frame.data);
            last.width = frame.width;
            last.height = frame.height;
          },
          None => self.last_frame = Some(frame.clone()),
        },
        Err(err) => {
          warn!("Video input ended, keeping the last frame: {:#}", err);
          self.frames_ended = true;
        },
      }
    }
    match &self.last_frame {
      Some(frame) => canvas.draw_gray_frame(frame),
      None => canvas.clear(),
    }

    if let Some(bbox) = self.selection.current() {
      canvas.draw_rectangle(&bbox, RED, 1);
    }
    else if let Some(bbox) = &self.last_box {
      canvas.draw_rectangle(bbox, GREEN, LINE_WIDTH);
    }
  }

  fn finish_selection(&mut self) -> Option<PositionEstimate> {
    let bbox = self.selection.release()?;
    match estimate_position(&bbox, &self.footprint, &self.intrinsics, &self.sensor) {
      Ok(estimate) => {
        info!("({:.3}, {:.3}, {:.3})", estimate.x, estimate.y, estimate.z);
        self.last_box = Some(bbox);
        Some(estimate)
      },
      Err(err) => {
        warn!("{}", err);
        self.last_box = None;
        None
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;
  use std::rc::Rc;

  fn setup() -> (Intrinsics, SensorDimensions) {
    let fov = FieldOfView::from_degrees(61., 37.).unwrap();
    let sensor = SensorDimensions::new(1280, 720).unwrap();
    (Intrinsics::from_fov(&fov, &sensor).unwrap(), sensor)
  }

  fn distance_demo() -> Demo {
    let (intrinsics, sensor) = setup();
    Demo::Distance(DistanceDemo::new(
      intrinsics,
      sensor,
      ObjectFootprint::new(15., 15.).unwrap(),
      Box::new(BlankFrames::new(&sensor)),
    ))
  }

  // Yields `frames` copies of a constant frame, then fails like a finished stream.
  struct ShortVideo {
    frame: VideoFrame,
    frames: usize,
    reads: Rc<Cell<usize>>,
  }

  impl FrameSource for ShortVideo {
    fn read(&mut self) -> Result<&VideoFrame> {
      self.reads.set(self.reads.get() + 1);
      if self.reads.get() > self.frames {
        return Err(anyhow!("Video stream ended."));
      }
      Ok(&self.frame)
    }
  }

  #[test]
  fn test_point_demo_draws_center() {
    let (intrinsics, sensor) = setup();
    let mut demo = Demo::Point(PointDemo { intrinsics });
    let session = Session::new(Pose::at(Vector3d::new(0., 0., 50.)));
    let mut canvas = Canvas::new(sensor.width, sensor.height);
    demo.update(&session, None, &mut canvas);
    assert_eq!(canvas.buffer[360 * 1280 + 640], BLUE);
  }

  #[test]
  fn test_point_demo_near_camera_plane() {
    let (intrinsics, sensor) = setup();
    let mut demo = Demo::Point(PointDemo { intrinsics });
    let mut canvas = Canvas::new(sensor.width, sensor.height);
    demo.update(&Session::new(Pose::at(Vector3d::new(-1., 0., 1e-9))), None, &mut canvas);
    assert!(canvas.buffer.iter().all(|x| *x == 0));
  }

  #[test]
  fn test_shape_demo_near_camera_plane() {
    let (intrinsics, sensor) = setup();
    let shape = Shape::new(&[Vector3d::new(-1., 0., 1e-9), Vector3d::new(1., 0., 5.)]);
    let mut demo = Demo::Shape(ShapeDemo { intrinsics, shape });
    let mut canvas = Canvas::new(sensor.width, sensor.height);
    demo.update(&Session::new(Pose::default()), None, &mut canvas);
    // Only the far point is drawn, the edge to the near point is dropped.
    assert_eq!(canvas.buffer[360 * 1280 + 857], BLUE);
    assert!(canvas.buffer.iter().all(|x| *x != GREEN));
  }

  #[test]
  fn test_shape_demo_skips_points_behind_camera() {
    let (intrinsics, sensor) = setup();
    let mut demo = Demo::Shape(ShapeDemo { intrinsics, shape: Shape::default_box() });
    let mut canvas = Canvas::new(sensor.width, sensor.height);
    demo.update(&Session::new(Pose::at(Vector3d::new(0., 0., -100.))), None, &mut canvas);
    assert!(canvas.buffer.iter().all(|x| *x == 0));
    demo.update(&Session::new(Pose::default()), None, &mut canvas);
    assert!(canvas.buffer.iter().any(|x| *x == GREEN));
    assert!(canvas.buffer.iter().any(|x| *x == BLUE));
  }

  #[test]
  fn test_distance_demo_keeps_last_frame() {
    let (intrinsics, _) = setup();
    let sensor = SensorDimensions::new(4, 2).unwrap();
    let reads = Rc::new(Cell::new(0));
    let video = ShortVideo {
      frame: VideoFrame { data: vec![7; 8], width: 4, height: 2 },
      frames: 2,
      reads: reads.clone(),
    };
    let footprint = ObjectFootprint::new(15., 15.).unwrap();
    let mut demo = Demo::Distance(DistanceDemo::new(intrinsics, sensor, footprint, Box::new(video)));
    let session = Session::new(Pose::default());
    let mut canvas = Canvas::new(4, 2);
    for _ in 0..10 {
      demo.update(&session, None, &mut canvas);
      assert!(canvas.buffer.iter().all(|x| *x == 0x070707));
    }
    // Two frames and one failed read, then the source is left alone.
    assert_eq!(reads.get(), 3);
  }

  #[test]
  fn test_distance_selection() {
    let (_, sensor) = setup();
    let mut demo = distance_demo();
    let session = Session::new(Pose::default());
    let mut canvas = Canvas::new(sensor.width, sensor.height);
    demo.update(&session, Some(Command::Select), &mut canvas);
    demo.cursor_moved(Vector2d::new(600., 300.));
    demo.mouse_pressed();
    demo.cursor_moved(Vector2d::new(640., 340.));
    let estimate = demo.mouse_released().unwrap();
    match &demo {
      Demo::Distance(d) => {
        let z = (225. / 1600. * d.intrinsics.focal_x * d.intrinsics.focal_y).sqrt();
        assert!((estimate.z - z).abs() < 1e-9);
        assert!(!d.selection.is_active());
        assert_eq!(d.last_box, Some(BoundingBox::new(600., 300., 40., 40.)));
      },
      _ => unreachable!(),
    }
    // Releasing again without a new selection does nothing.
    assert_eq!(demo.mouse_released(), None);

    // A click without dragging is rejected and clears the previous box.
    demo.update(&session, Some(Command::Select), &mut canvas);
    demo.mouse_pressed();
    assert_eq!(demo.mouse_released(), None);
    match &demo {
      Demo::Distance(d) => assert!(d.last_box.is_none()),
      _ => unreachable!(),
    }
  }
}
