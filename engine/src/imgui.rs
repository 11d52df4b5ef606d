use imgui::{Condition, WindowFlags};

use crate::Engine;

pub struct ImGui {
    imgui: imgui::Context,
    imgui_sdl: imgui_sdl2::ImguiSdl2,
    imgui_renderer: imgui_opengl_renderer::Renderer,
}

pub fn init(engine: &Engine) -> ImGui {
    let mut imgui = imgui::Context::create();
    // layout is fixed, nothing worth persisting next to the user's files
    imgui.set_ini_filename(None::<std::path::PathBuf>);
    let imgui_sdl = imgui_sdl2::ImguiSdl2::new(&mut imgui, &engine.window);
    let get_proc_address = |s| engine.sdl_video.gl_get_proc_address(s) as _;
    let imgui_renderer = imgui_opengl_renderer::Renderer::new(&mut imgui, get_proc_address);
    log::info!("ImGui initialized");

    ImGui {
        imgui,
        imgui_sdl,
        imgui_renderer,
    }
}

impl ImGui {
    pub fn handle_input(&mut self, events: &[sdl2::event::Event]) {
        for event in events {
            self.imgui_sdl.handle_event(&mut self.imgui, event);
        }
    }

    /// Builds one ImGui frame with `draw` and renders it.
    pub fn render<F: FnOnce(&imgui::Ui)>(&mut self, engine: &Engine, draw: F) {
        self.imgui_sdl.prepare_frame(
            self.imgui.io_mut(),
            &engine.window,
            &engine.sdl_event_pump.mouse_state(),
        );
        let ui = self.imgui.new_frame();
        draw(ui);
        self.imgui_sdl.prepare_render(ui, &engine.window);
        self.imgui_renderer.render(&mut self.imgui);
    }
}

/// Begins an undecorated window covering the whole SDL window.
pub fn fullscreen_window<'ui>(ui: &'ui imgui::Ui, name: &str) -> Option<imgui::WindowToken<'ui>> {
    ui.window(name)
        .position([0.0, 0.0], Condition::Always)
        .size(ui.io().display_size, Condition::Always)
        .flags(
            WindowFlags::NO_DECORATION
                | WindowFlags::NO_MOVE
                | WindowFlags::NO_SAVED_SETTINGS
                | WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS,
        )
        .begin()
}

pub fn centered_text(ui: &imgui::Ui, text: &str) {
    center_next_item(ui, ui.calc_text_size(text)[0]);
    ui.text(text);
}

pub fn centered_button(ui: &imgui::Ui, label: &str, width: f32) -> bool {
    center_next_item(ui, width);
    ui.button_with_size(label, [width, 0.0])
}

/// Moves the cursor so an item of `width` ends up horizontally centered.
pub fn center_next_item(ui: &imgui::Ui, width: f32) {
    let available = ui.content_region_avail()[0];
    let [x, y] = ui.cursor_pos();
    ui.set_cursor_pos([x + ((available - width) * 0.5).max(0.0), y]);
}
