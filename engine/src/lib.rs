#[cfg(test)]
#[macro_use]
extern crate parameterized;

pub mod browser;
pub mod error;
pub mod imgui;
pub mod keyvalue;
pub mod languages;
pub mod locator;
pub mod logging;
pub mod notification;
pub mod options;

use itertools::Itertools;
use sdl2::{event::Event, keyboard::Keycode, video::GLProfile};

pub struct Engine {
    // SDL
    _sdl: sdl2::Sdl,
    sdl_video: sdl2::VideoSubsystem,
    sdl_event_pump: sdl2::EventPump,
    _gl_context: sdl2::video::GLContext,

    // Main loop
    window: sdl2::video::Window,
    should_quit: bool,
}

/// Opens a fixed-size window with an OpenGL context, centered on `monitor`.
pub fn init(title: &str, window_width: u32, window_height: u32, monitor: i32) -> Result<Engine, String> {
    // SDL
    let sdl = sdl2::init()?;
    let sdl_video = init_video(&sdl)?;
    let sdl_event_pump = sdl.event_pump()?;
    let window = init_window(&sdl_video, title, window_width, window_height, monitor)?;
    log::info!("SDL initialized");

    // OpenGL
    let _gl_context = init_opengl(&window)?; // closes on drop
    gl::load_with(|s| sdl_video.gl_get_proc_address(s) as _);
    log::info!("Created OpenGL context");

    Ok(Engine {
        _sdl: sdl,
        sdl_video,
        sdl_event_pump,
        _gl_context,
        window,
        should_quit: false,
    })
}

impl Engine {
    pub fn begin_frame(&mut self) -> Vec<Event> {
        self.sdl_event_pump.poll_iter().collect_vec()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_input(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => self.should_quit = true,
                _ => (),
            }
        }
    }

    pub fn clear(&mut self) {
        let (width, height) = self.window.drawable_size();
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
            gl::ClearColor(0.94, 0.94, 0.94, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn end_frame(&mut self) {
        self.window.gl_swap_window();
    }
}

fn init_video(sdl: &sdl2::Sdl) -> Result<sdl2::VideoSubsystem, String> {
    let sdl_video = sdl.video()?;

    // hint that we'll use the "330 core" OpenGL profile
    let gl_attr = sdl_video.gl_attr();
    gl_attr.set_context_version(3, 3);
    gl_attr.set_context_profile(GLProfile::Core);

    Ok(sdl_video)
}

fn init_window(
    sdl_video: &sdl2::VideoSubsystem,
    title: &str,
    width: u32,
    height: u32,
    monitor: i32,
) -> Result<sdl2::video::Window, String> {
    let mut window = sdl_video
        .window(title, width, height)
        .allow_highdpi()
        .opengl()
        .position_centered()
        .hidden()
        .build()
        .map_err(|e| e.to_string())?;

    match sdl_video.display_bounds(monitor) {
        Ok(bounds) => window.set_position(
            sdl2::video::WindowPos::Positioned(bounds.x() + (bounds.width() as i32 - width as i32) / 2),
            sdl2::video::WindowPos::Positioned(bounds.y() + (bounds.height() as i32 - height as i32) / 2),
        ),
        Err(e) => log::warn!("Display {} unavailable, using default: {}", monitor, e),
    }
    window.show();

    Ok(window)
}

fn init_opengl(window: &sdl2::video::Window) -> Result<sdl2::video::GLContext, String> {
    let gl_context = window.gl_create_context()?;
    window.gl_make_current(&gl_context)?;
    window.subsystem().gl_set_swap_interval(1)?;
    Ok(gl_context)
}
