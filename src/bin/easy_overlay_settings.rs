use settings_engine::{locator, logging, options::ProgramOptions, options::USAGE};
use settings_tools::overlay::{OverlayTool, WINDOW_TITLE};

const WINDOW_WIDTH: u32 = 400;
const WINDOW_HEIGHT: u32 = 150;

fn init_options() -> ProgramOptions {
    match ProgramOptions::from_env() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{}\n{}", e, USAGE);
            std::process::exit(2);
        }
    }
}

fn run(options: &ProgramOptions) -> Result<(), String> {
    /* Initialize */
    let mut engine = settings_engine::init(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT, options.monitor)?;
    let mut imgui = settings_engine::imgui::init(&engine);
    let mut tool = OverlayTool::open(locator::overlay_config_path(&options.base_dir));
    log::info!("Editing {}", tool.config_path().display());

    /* Main loop */
    while !engine.should_quit() {
        let sdl_events = engine.begin_frame();
        engine.handle_input(&sdl_events);
        imgui.handle_input(&sdl_events);

        engine.clear();
        imgui.render(&engine, |ui| tool.draw(ui));
        engine.end_frame();
    }

    Ok(())
}

fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("failed to initialize logging: {}", e);
    }
    let options = init_options();

    if let Err(e) = run(&options) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
