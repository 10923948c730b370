mod all;
mod camera;
mod controller;
mod demo;
mod distance;
mod error;
mod event_loop;
mod input;
mod math;
mod parameters;
mod pose;
mod projector;
mod selection;
mod types;
mod util;
mod video;
mod visualize;

use all::*;

use clap::{Parser, Subcommand};

use softbuffer::GraphicsContext;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit::platform::run_return::EventLoopExtRunReturn;

#[derive(Parser)]
struct Args {
  #[clap(subcommand)]
  demo: DemoArgs,
  #[clap(long)]
  verbose: bool,
}

#[derive(Subcommand)]
enum DemoArgs {
  /// Move a single point in camera space.
  Point {
    #[clap(flatten)]
    parameters: ParameterSet,
  },
  /// Fly the camera around a wireframe box.
  Shape {
    #[clap(flatten)]
    parameters: ParameterSet,
  },
  /// Estimate the position of a known-size object from a selected box.
  Distance {
    #[clap(flatten)]
    parameters: ParameterSet,
    /// Video file or capture device, black frames if omitted.
    #[clap(long)]
    video: Option<PathBuf>,
    /// ffmpeg input format, for example `v4l2` for a webcam.
    #[clap(long)]
    video_format: Option<String>,
  },
}

fn handle_error(err: &anyhow::Error) {
  for (i, e) in err.chain().enumerate() {
    println!("  {}: {}", i + 1, e);
  }
}

fn main() {
  if let Err(err) = run() {
    handle_error(&err);
    std::process::exit(1);
  }
}

fn run() -> Result<()> {
  let args = Args::parse();
  let parameters = match &args.demo {
    DemoArgs::Point { parameters } => parameters,
    DemoArgs::Shape { parameters } => parameters,
    DemoArgs::Distance { parameters, .. } => parameters,
  };
  // Fail on bad setup before any window opens.
  let config = parameters.resolve().context("Invalid configuration.")?;
  let intrinsics = Intrinsics::from_fov(&config.fov, &config.sensor)?;

  let mut demo = match &args.demo {
    DemoArgs::Point { .. } => Demo::Point(PointDemo { intrinsics }),
    DemoArgs::Shape { .. } => Demo::Shape(ShapeDemo {
      intrinsics,
      shape: Shape::default_box(),
    }),
    DemoArgs::Distance { video, video_format, .. } => {
      let frames: Box<dyn FrameSource> = match video {
        Some(path) => Box::new(VideoInput::new(path, video_format.as_deref(), &config.sensor)?),
        None => Box::new(BlankFrames::new(&config.sensor)),
      };
      Demo::Distance(DistanceDemo::new(intrinsics, config.sensor, config.footprint, frames))
    },
  };
  let controller = PoseController::new(config.controller, demo.control_mode());
  let mut session = Session::new(controller.initial_pose());

  let width = config.sensor.width;
  let height = config.sensor.height;
  let size = winit::dpi::PhysicalSize::new(width as u32, height as u32);
  let mut event_loop = EventLoop::new();
  let window = WindowBuilder::new()
    .with_title("monocam")
    .with_resizable(false)
    .with_min_inner_size(size)
    .with_max_inner_size(size)
    .build(&event_loop)
    .context("Failed to create window.")?;
  let mut graphics_context = unsafe { GraphicsContext::new(window) }
    .map_err(|_| anyhow!("Failed to create graphics context."))?;

  // Start logging after winit setup to skip a debug print.
  util::init_logging(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info });
  info!("Focal length {:.3} x {:.3} px.", intrinsics.focal_x, intrinsics.focal_y);

  let mut canvas = Canvas::new(width, height);
  let mut args = EventLoopArgs {
    session: &mut session,
    controller: &controller,
    demo: &mut demo,
    canvas: &mut canvas,
    graphics_context: &mut graphics_context,
  };

  event_loop.run_return(move |event, _, control_flow| {
    if let Err(err) = handle_event(event, control_flow, &mut args) {
      handle_error(&err);
      *control_flow = ControlFlow::Exit;
    }
  });
  Ok(())
}
