//! Table view implementation

use std::collections::HashSet;

use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use sc_core::filter::RowFilter;
use sc_core::sync::TableRow;

use crate::plots::utils::colors::{aqi_color, emergency_row_color};
use crate::{ViewAction, ViewerContext};

/// Configuration for table views
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub show_row_numbers: bool,
    pub striped_rows: bool,
    pub resizable_columns: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            show_row_numbers: true,
            striped_rows: true,
            resizable_columns: true,
        }
    }
}

/// Records table with a delete control per row
#[derive(Default)]
pub struct TableView {
    pub config: TableConfig,
    rows: Vec<TableRow>,
    highlighted: HashSet<usize>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row
    pub fn set_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
    }

    pub fn set_highlighted(&mut self, indices: &[usize]) {
        self.highlighted = indices.iter().copied().collect();
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    /// Rows passing `filter`, in table order
    pub fn visible_rows<'a>(&'a self, filter: &'a RowFilter) -> impl Iterator<Item = &'a TableRow> + 'a {
        self.rows.iter().filter(move |row| filter.matches(row))
    }

    pub fn ui(&mut self, ctx: &mut ViewerContext<'_>, ui: &mut Ui) {
        let visible: Vec<&TableRow> = self.visible_rows(ctx.filter).collect();

        ui.horizontal(|ui| {
            ui.label(format!("Rows: {}", self.rows.len()));
            if ctx.filter.is_active() {
                ui.separator();
                ui.label(format!("Shown: {}", visible.len()));
            }
        });
        ui.add_space(4.0);

        if self.rows.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No records yet");
            });
            return;
        }

        let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.6;
        let faint_bg_color = ui.style().visuals.faint_bg_color;
        let highlight_color = emergency_row_color();

        let mut builder = TableBuilder::new(ui)
            .striped(false)
            .resizable(self.config.resizable_columns)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0)
            .vscroll(true);

        if self.config.show_row_numbers {
            builder = builder.column(Column::initial(40.0).at_least(30.0));
        }
        builder = builder
            .column(Column::initial(180.0).at_least(80.0).clip(true))
            .column(Column::initial(80.0).at_least(60.0))
            .column(Column::initial(110.0).at_least(80.0))
            .column(Column::remainder().at_least(60.0));

        builder
            .header(20.0, |mut header| {
                if self.config.show_row_numbers {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                }
                header.col(|ui| {
                    ui.strong("Location");
                });
                header.col(|ui| {
                    ui.strong("AQI");
                });
                header.col(|ui| {
                    ui.strong("Traffic");
                });
                header.col(|ui| {
                    ui.strong("");
                });
            })
            .body(|mut body| {
                for (stripe, row) in visible.iter().enumerate() {
                    let is_highlighted = self.highlighted.contains(&row.index);

                    let row_color = if is_highlighted {
                        Some(highlight_color)
                    } else if self.config.striped_rows && stripe % 2 == 1 {
                        Some(faint_bg_color)
                    } else {
                        None
                    };

                    body.row(text_height, |mut table_row| {
                        let paint = |ui: &mut Ui| {
                            if let Some(color) = row_color {
                                ui.painter().rect_filled(ui.available_rect_before_wrap(), 0.0, color);
                            }
                        };

                        if self.config.show_row_numbers {
                            table_row.col(|ui| {
                                paint(ui);
                                ui.label(row.index.to_string());
                            });
                        }
                        table_row.col(|ui| {
                            paint(ui);
                            let text = RichText::new(&row.location);
                            ui.label(if is_highlighted { text.strong() } else { text });
                        });
                        table_row.col(|ui| {
                            paint(ui);
                            let color = aqi_color(sc_core::AqiCategory::from_aqi(row.air_quality_index));
                            ui.label(RichText::new(row.air_quality_index.to_string()).color(color).strong());
                        });
                        table_row.col(|ui| {
                            paint(ui);
                            ui.label(row.traffic_level.as_str());
                        });
                        table_row.col(|ui| {
                            paint(ui);
                            if ui
                                .small_button(RichText::new("🗑 Delete").color(Color32::from_rgb(220, 80, 80)))
                                .on_hover_text("Remove this record")
                                .clicked()
                            {
                                ctx.actions.push(ViewAction::DeleteRow(row.index));
                            }
                        });
                    });
                }
            });
    }
}
