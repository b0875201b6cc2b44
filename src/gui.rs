use crate::cluster::GroupingMode;
use crate::color::RgbColor;
use crate::param::InteractionMode::{ManualOrbit, Orbit};
use crate::param::{DataParams, VisParams};
use crate::processing::do_load_and_cluster;
use crate::state::State;
use crate::CONTROL_PANEL_WIDTH;
use std::sync::{Arc, Mutex};
use three_d::egui::Context;

const LEGEND_LIMIT: usize = 20;

pub struct GuiState {
    pub search_string: String,
}

struct LegendEntry {
    label: String,
    color: RgbColor,
    count: usize,
    average: Option<f64>,
}

pub fn render_gui(
    gui_context: &Context,
    state: &Arc<Mutex<State>>,
    gui_state: &mut GuiState,
    vis_params: &mut VisParams,
    data_params: &mut DataParams,
) {
    use three_d::egui::*;

    // Copy panel data out so the lock is not held across UI layout
    let (processing, total_bikes, legend) = {
        let state = state.lock().unwrap();
        let total = state.records.as_ref().map(|r| r.len()).unwrap_or(0);
        let legend = state
            .clusters
            .as_ref()
            .map(|clusters| {
                clusters
                    .iter()
                    .map(|cluster| LegendEntry {
                        label: cluster.label.clone(),
                        color: cluster.color,
                        count: cluster.members.len(),
                        average: cluster.average_value,
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        (state.processing, total, legend)
    };

    SidePanel::left("side_panel")
        .exact_width(CONTROL_PANEL_WIDTH)
        .resizable(false)
        .show(gui_context, |ui| {
            ui.add_space(10.0);

            ui.heading("Motorbike Universe");

            if processing {
                ui.colored_label(Color32::from_rgb(255, 0, 0), "Loading catalog...");
            }

            ui.add_space(10.0);

            ui.columns(2, |columns| {
                columns[0].label("Search");
                columns[1].text_edit_singleline(&mut gui_state.search_string);
            });

            let search_button = ui.button("Search");
            if search_button.clicked() && !processing {
                data_params.search = gui_state.search_string.clone();
                do_load_and_cluster(
                    data_params.db_path.clone(),
                    data_params.search.clone(),
                    vis_params.grouping_mode,
                    state.clone(),
                );
            }

            ui.add_space(10.0);

            ui.separator();

            ui.add_space(10.0);

            ui.label("Grouping Mode");
            for mode in GroupingMode::ALL {
                ui.radio_value(&mut vis_params.grouping_mode, mode, mode.label());
            }

            ui.add_space(10.0);

            ui.label("Interaction Mode");
            ui.radio_value(&mut vis_params.interaction_mode, Orbit, "Orbit");
            ui.radio_value(&mut vis_params.interaction_mode, ManualOrbit, "Manual");

            ui.add_space(10.0);

            ui.checkbox(&mut vis_params.dark_mode, "Dark mode");

            ui.add_space(10.0);

            ui.separator();

            ui.add_space(10.0);

            ui.label(format!(
                "{} motorcycles in {} groups",
                total_bikes,
                legend.len()
            ));
            ui.small(vis_params.grouping_mode.description());

            ui.add_space(10.0);

            ScrollArea::vertical().show(ui, |ui| {
                for entry in legend.iter().take(LEGEND_LIMIT) {
                    ui.horizontal(|ui| {
                        let (r, g, b) = entry.color;
                        ui.colored_label(Color32::from_rgb(r, g, b), "●");
                        ui.label(format!("{} ({})", entry.label, entry.count));
                        if let Some(average) = entry.average {
                            let formatted = match vis_params.grouping_mode {
                                GroupingMode::Price => format!("€{:.0}", average),
                                GroupingMode::Displacement => format!("{:.0}cc", average),
                                _ => String::new(),
                            };
                            if !formatted.is_empty() {
                                ui.weak(formatted);
                            }
                        }
                    });
                }
                if legend.len() > LEGEND_LIMIT {
                    ui.label(format!("+{} more groups", legend.len() - LEGEND_LIMIT));
                }
            });
        });
}
