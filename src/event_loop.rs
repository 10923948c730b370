use crate::all::*;

use softbuffer::GraphicsContext;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, WindowEvent};
use winit::event_loop::ControlFlow;
use winit::window::Window;

pub struct EventLoopArgs<'a> {
  pub session: &'a mut Session,
  pub controller: &'a PoseController,
  pub demo: &'a mut Demo,
  pub canvas: &'a mut Canvas,
  pub graphics_context: &'a mut GraphicsContext<Window>,
}

pub fn handle_event(
  event: Event<()>,
  control_flow: &mut ControlFlow,
  args: &mut EventLoopArgs,
) -> Result<()> {
  let window_id = args.graphics_context.window().id();
  match event {
    Event::RedrawRequested(id) if id == window_id => {
      let canvas = &args.canvas;
      args.graphics_context.set_buffer(&canvas.buffer, canvas.width as u16, canvas.height as u16);
    },
    Event::WindowEvent { event, window_id: id } if id == window_id => {
      match event {
        WindowEvent::CloseRequested => args.session.stop(),
        WindowEvent::KeyboardInput {
          input: KeyboardInput {
            state: ElementState::Pressed,
            virtual_keycode: Some(keycode),
            ..
          },
          ..
        } => {
          if let Some(command) = key_to_command(args.demo.key_map(), keycode) {
            args.session.push(command);
          }
        },
        WindowEvent::CursorMoved { position, .. } => {
          args.demo.cursor_moved(Vector2d::new(position.x, position.y));
        },
        WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
          match state {
            ElementState::Pressed => args.demo.mouse_pressed(),
            ElementState::Released => {
              if let Some(estimate) = args.demo.mouse_released() {
                debug!("Estimate from box {:?}: {:?}", args.demo.last_box(), estimate);
              }
            },
          }
        },
        _ => {}, // Other window events.
      }
    },
    Event::MainEventsCleared => {
      let command = args.session.take();
      if let Some(command) = command {
        args.controller.apply(args.session, command);
      }
      if args.session.running {
        args.demo.update(args.session, command, args.canvas);
        args.graphics_context.window().request_redraw();
      }
    },
    _ => {}, // Other events.
  }
  if !args.session.running {
    info!("Quitting.");
    *control_flow = ControlFlow::Exit;
  }
  Ok(())
}
