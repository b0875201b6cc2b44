use std::sync::{Arc, Mutex};

use clap::Parser;
use three_d::{ClearState, FrameOutput, Viewport, Window, WindowSettings, GUI};

use motorbike_universe::cluster::GroupingMode;
use motorbike_universe::gui::{render_gui, GuiState};
use motorbike_universe::object::get_universe_object;
use motorbike_universe::param::{DataParams, InteractionMode, VisParams};
use motorbike_universe::processing::{do_load_and_cluster, rebuild_clusters};
use motorbike_universe::result::Result;
use motorbike_universe::scene::{
    do_auto_orbit, get_background_color, get_camera_and_control, get_lights,
};
use motorbike_universe::state::State;
use motorbike_universe::CONTROL_PANEL_WIDTH;

#[derive(Parser)]
#[command(about = "Interactive 3D motorcycle catalog explorer")]
struct Args {
    /// Path to the catalog database
    #[arg(long, default_value = "catalog.db")]
    db: String,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let window = Window::new(WindowSettings {
        title: "Motorbike Universe".to_string(),
        max_size: Some((1280, 720)),
        ..Default::default()
    })?;
    let context = window.gl();

    let (mut camera, mut control) = get_camera_and_control(&window);
    let mut gui = GUI::new(&context);

    let state = Arc::new(Mutex::new(State::default()));
    let mut gui_state = GuiState {
        search_string: String::new(),
    };
    let mut vis_params = VisParams {
        interaction_mode: InteractionMode::Orbit,
        grouping_mode: GroupingMode::Category,
        dark_mode: args.dark,
    };
    let mut data_params = DataParams {
        db_path: args.db,
        search: String::new(),
    };

    do_load_and_cluster(
        data_params.db_path.clone(),
        data_params.search.clone(),
        vis_params.grouping_mode,
        state.clone(),
    );

    let mut universe = None;
    let mut rendered_generation = 0_u64;
    let mut last_grouping_mode = vis_params.grouping_mode;
    let mut orbit_angle = 0.0_f64;

    window.render_loop(move |mut frame_input| {
        gui.update(
            &mut frame_input.events,
            frame_input.accumulated_time,
            frame_input.viewport,
            frame_input.device_pixel_ratio,
            |gui_context| {
                render_gui(
                    gui_context,
                    &state,
                    &mut gui_state,
                    &mut vis_params,
                    &mut data_params,
                );
            },
        );

        if vis_params.grouping_mode != last_grouping_mode {
            rebuild_clusters(&state, vis_params.grouping_mode);
            last_grouping_mode = vis_params.grouping_mode;
        }

        {
            let state = state.lock().unwrap();
            if state.generation != rendered_generation {
                if let Some(clusters) = &state.clusters {
                    universe = Some(get_universe_object(&context, clusters));
                    rendered_generation = state.generation;
                }
            }
        }

        // The scene viewport starts where the control panel ends
        let panel_width = (CONTROL_PANEL_WIDTH * frame_input.device_pixel_ratio) as u32;
        let viewport = Viewport {
            x: panel_width as i32,
            y: 0,
            width: frame_input.viewport.width.saturating_sub(panel_width),
            height: frame_input.viewport.height,
        };
        camera.set_viewport(viewport);

        match vis_params.interaction_mode {
            InteractionMode::Orbit => do_auto_orbit(&mut orbit_angle, &mut camera),
            InteractionMode::ManualOrbit => {
                control.handle_events(&mut camera, &mut frame_input.events);
            }
        }

        let [red, green, blue] = get_background_color(vis_params.dark_mode);
        let (ambient, sun) = get_lights(&context, vis_params.dark_mode);

        frame_input
            .screen()
            .clear(ClearState::color_and_depth(red, green, blue, 1.0, 1.0))
            .render(&camera, universe.iter(), &[&ambient, &sun])
            .write(|| gui.render())
            .unwrap();

        FrameOutput::default()
    });

    Ok(())
}
