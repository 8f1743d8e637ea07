#![windows_subsystem = "windows"]
//! SkillSwap Desktop - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use std::path::PathBuf;
use tracing::info;
use types::*;
use ui::components;
use utils::format_timestamp;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "skillswap.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,skillswap_desktop=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME);

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "SkillSwap starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1200.0, 780.0)))
        .with_min_inner_size([960.0, 640.0])
        .with_title("SkillSwap");

    // Window/taskbar icon rasterized from the SVG logo
    {
        let (rgba, w, h) = utils::rasterize_logo_square(64);
        let icon = egui::IconData {
            rgba,
            width: w,
            height: h,
        };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "SkillSwap",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

/// Flat header nav entry. Returns true if clicked.
fn nav_button(ui: &mut egui::Ui, icon: &str, label: &str, active: bool) -> bool {
    let color = if active {
        theme::TEXT_PRIMARY
    } else {
        theme::TEXT_MUTED
    };
    let fill = if active {
        theme::BG_SURFACE
    } else {
        egui::Color32::TRANSPARENT
    };
    let button = egui::Button::new(
        egui::RichText::new(format!("{}  {}", icon, label))
            .size(theme::FONT_LABEL)
            .color(color),
    )
    .fill(fill)
    .corner_radius(theme::RADIUS_DEFAULT);
    ui.add(button).clicked()
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Kick off the startup fetch on the first frame (session restore path)
        if !self.startup_fetch_started {
            self.startup_fetch_started = true;
            if self.pending_session_user.is_some() {
                self.start_refresh(ctx, false);
            }
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Fold background request results into app state
        self.poll_api_events(ctx);

        // Dialogs
        self.render_swap_modal(ctx);
        self.render_message_modal(ctx);

        let signed_in = self.current_user.is_some();
        if signed_in {
            self.render_header(ctx);
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(24, 16)),
            )
            .show(ctx, |ui| {
                self.central_panel_rect = Some(ui.max_rect());
                if !signed_in {
                    if self.pending_session_user.is_some() {
                        self.render_session_restore(ui, ctx);
                    } else {
                        self.render_login_page(ui, ctx);
                    }
                } else {
                    match self.page {
                        Page::Login | Page::Browse => self.render_browse_page(ui, ctx),
                        Page::MyProfile => self.render_my_profile_page(ui, ctx),
                        Page::UserProfile(user_id) => {
                            self.render_user_profile_page(ui, ctx, user_id)
                        }
                        Page::MySwaps => self.render_my_swaps_page(ui, ctx),
                    }
                }
            });

        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down, saving settings");
        self.save_settings();
    }
}

// ============================================================================
// HEADER
// ============================================================================

impl App {
    fn render_header(&mut self, ctx: &egui::Context) {
        let mut go_to: Option<Page> = None;
        let mut do_logout = false;
        let mut do_refresh = false;

        egui::TopBottomPanel::top("main_header")
            .exact_height(theme::HEADER_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(16, 0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let texture = self.logo_texture.get_or_insert_with(|| {
                        let (pixels, w, h) = utils::rasterize_logo(64);
                        ctx.load_texture(
                            "logo",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [w as usize, h as usize],
                                &pixels,
                            ),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(26.0, 26.0),
                    ));
                    ui.add_space(theme::SPACING_SM);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(APP_NAME).size(theme::FONT_TITLE).strong(),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_XL);

                    let browse_active = matches!(self.page, Page::Browse | Page::UserProfile(_));
                    if nav_button(ui, egui_phosphor::regular::USERS, "Browse", browse_active) {
                        go_to = Some(Page::Browse);
                    }
                    if nav_button(
                        ui,
                        egui_phosphor::regular::ARROWS_LEFT_RIGHT,
                        "My Swaps",
                        self.page == Page::MySwaps,
                    ) {
                        go_to = Some(Page::MySwaps);
                    }
                    if nav_button(
                        ui,
                        egui_phosphor::regular::USER,
                        "My Profile",
                        self.page == Page::MyProfile,
                    ) {
                        go_to = Some(Page::MyProfile);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if nav_button(ui, egui_phosphor::regular::SIGN_OUT, "Sign Out", false) {
                            do_logout = true;
                        }
                        ui.add_space(theme::SPACING_MD);
                        if let Some(user) = &self.current_user {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(&user.username)
                                        .size(theme::FONT_LABEL)
                                        .color(theme::TEXT_SECONDARY),
                                )
                                .selectable(false),
                            );
                            components::avatar_circle(ui, &user.username, 28.0);
                        }
                        ui.add_space(theme::SPACING_MD);
                        if self.sync_in_flight {
                            ui.spinner();
                        } else if nav_button(
                            ui,
                            egui_phosphor::regular::ARROWS_CLOCKWISE,
                            "Refresh",
                            false,
                        ) {
                            do_refresh = true;
                        }
                    });
                });
            });

        if let Some(page) = go_to {
            self.navigate_to(ctx, page);
        }
        if do_logout {
            self.logout();
        }
        if do_refresh {
            self.start_refresh(ctx, true);
        }
    }

    // ========================================================================
    // LOGIN / SIGNUP PAGE
    // ========================================================================

    fn render_login_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut submit_login = false;
        let mut submit_signup = false;

        ui.add_space((ui.available_height() * 0.10).max(24.0));
        ui.vertical_centered(|ui| {
            let texture = self.logo_texture.get_or_insert_with(|| {
                let (pixels, w, h) = utils::rasterize_logo(64);
                ctx.load_texture(
                    "logo",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            });
            ui.image(egui::load::SizedTexture::new(
                texture.id(),
                egui::vec2(64.0, 64.0),
            ));
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new(APP_NAME)
                    .size(26.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new("Trade what you know for what you don't.")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(theme::SPACING_XL);

            ui.set_max_width(theme::FORM_WIDTH);
            theme::section_frame().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    theme::segmented_toggle(ui, "Sign In", "Sign Up", &mut self.login_tab_active);
                });
                ui.add_space(theme::SPACING_LG);

                if self.login_tab_active {
                    components::field_label(ui, "EMAIL");
                    components::text_field(ui, &mut self.login_email, "you@example.com", false);
                    ui.add_space(theme::SPACING_MD);
                    components::field_label(ui, "PASSWORD");
                    let pw = components::text_field(ui, &mut self.login_password, "Password", true);
                    if pw.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit_login = true;
                    }
                    ui.add_space(theme::SPACING_LG);
                    if self.auth_in_flight {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(
                                egui::RichText::new("Signing in...").color(theme::TEXT_MUTED),
                            );
                        });
                    } else {
                        let button = theme::button_accent(format!(
                            "{}  Sign In",
                            egui_phosphor::regular::SIGN_IN
                        ));
                        if ui.add_sized([ui.available_width(), 32.0], button).clicked() {
                            submit_login = true;
                        }
                    }
                } else {
                    components::field_label(ui, "USERNAME");
                    components::text_field(ui, &mut self.signup_username, "Username", false);
                    ui.add_space(theme::SPACING_MD);
                    components::field_label(ui, "EMAIL");
                    components::text_field(ui, &mut self.signup_email, "you@example.com", false);
                    ui.add_space(theme::SPACING_MD);
                    components::field_label(ui, "PASSWORD");
                    components::text_field(ui, &mut self.signup_password, "Password", true);
                    ui.add_space(theme::SPACING_MD);
                    components::field_label(ui, "LOCATION (OPTIONAL)");
                    let loc = components::text_field(ui, &mut self.signup_location, "City", false);
                    if loc.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit_signup = true;
                    }
                    ui.add_space(theme::SPACING_LG);
                    if self.auth_in_flight {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(
                                egui::RichText::new("Creating account...")
                                    .color(theme::TEXT_MUTED),
                            );
                        });
                    } else {
                        let button = theme::button_accent(format!(
                            "{}  Create Account",
                            egui_phosphor::regular::USER_PLUS
                        ));
                        if ui.add_sized([ui.available_width(), 32.0], button).clicked() {
                            submit_signup = true;
                        }
                    }
                }
            });
        });

        if submit_login {
            self.submit_login(ctx);
        }
        if submit_signup {
            self.submit_signup(ctx);
        }
    }

    /// Shown while a remembered session waits for the user list
    fn render_session_restore(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut retry = false;
        let mut sign_in_instead = false;

        ui.add_space(ui.available_height() * 0.3);
        ui.vertical_centered(|ui| {
            if self.sync_in_flight {
                ui.spinner();
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new("Connecting to SkillSwap...").color(theme::TEXT_MUTED),
                );
            } else {
                ui.label(
                    egui::RichText::new(format!(
                        "{}  Could not restore your session",
                        egui_phosphor::regular::WARNING
                    ))
                    .size(theme::FONT_HEADING)
                    .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(theme::SPACING_LG);
                ui.horizontal(|ui| {
                    // Center the pair of buttons
                    let spacing = ui.spacing().item_spacing.x;
                    let width = 110.0 * 2.0 + spacing;
                    ui.add_space((ui.available_width() - width) / 2.0);
                    if ui
                        .add_sized(
                            [110.0, 30.0],
                            theme::button_accent(format!(
                                "{}  Retry",
                                egui_phosphor::regular::ARROWS_CLOCKWISE
                            )),
                        )
                        .clicked()
                    {
                        retry = true;
                    }
                    if ui
                        .add_sized([110.0, 30.0], theme::button("Sign In"))
                        .clicked()
                    {
                        sign_in_instead = true;
                    }
                });
            }
        });

        if retry {
            self.start_refresh(ctx, false);
        }
        if sign_in_instead {
            self.pending_session_user = None;
            self.page = Page::Login;
            self.save_settings();
        }
    }

    // ========================================================================
    // BROWSE PAGE
    // ========================================================================

    fn render_browse_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut view_changed = false;

        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Browse Skills")
                        .size(22.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if theme::segmented_toggle(ui, "Cards", "List", &mut self.browse_cards_view) {
                    view_changed = true;
                }
            });
        });
        ui.add_space(theme::SPACING_MD);

        // Search box
        theme::input_frame().show(ui, |ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                            .size(14.0)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                let clear_width = if self.search_query.is_empty() { 0.0 } else { 22.0 };
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.search_query)
                        .hint_text("Search by skill, name or location...")
                        .frame(false)
                        .desired_width(ui.available_width() - clear_width),
                );
                if self.focus_search {
                    self.focus_search = false;
                    response.request_focus();
                }
                if response.changed() {
                    self.apply_filters();
                }
                if !self.search_query.is_empty() {
                    let clear = ui.add(
                        egui::Label::new(
                            egui::RichText::new(egui_phosphor::regular::X)
                                .size(12.0)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false)
                        .sense(egui::Sense::click()),
                    );
                    if clear.clicked() {
                        self.search_query.clear();
                        self.apply_filters();
                    }
                }
            });
        });
        ui.add_space(theme::SPACING_LG);

        if view_changed {
            self.save_settings();
        }

        if self.filtered_user_indices.is_empty() {
            ui.add_space(theme::SPACING_XL);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("No users found.").color(theme::TEXT_DIM));
            });
            return;
        }

        if self.browse_cards_view {
            self.render_user_cards(ui, ctx);
        } else {
            self.render_user_table(ui, ctx);
        }
    }

    fn render_user_cards(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let indices = self.filtered_user_indices.clone();
        let mut open_profile: Option<i64> = None;

        let spacing = theme::SPACING_LG;
        let columns = (((ui.available_width() + spacing) / (theme::USER_CARD_WIDTH + spacing))
            .floor() as usize)
            .max(1);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
                for row in indices.chunks(columns) {
                    ui.horizontal(|ui| {
                        for &idx in row {
                            let Some(user) = self.users.get(idx).cloned() else {
                                continue;
                            };
                            if self.render_user_card(ui, &user) {
                                open_profile = Some(user.id);
                            }
                        }
                    });
                }
            });

        if let Some(user_id) = open_profile {
            self.navigate_to(ctx, Page::UserProfile(user_id));
        }
    }

    fn render_user_card(&mut self, ui: &mut egui::Ui, user: &User) -> bool {
        let mut clicked = false;
        ui.allocate_ui(
            egui::vec2(theme::USER_CARD_WIDTH, theme::USER_CARD_HEIGHT),
            |ui| {
                theme::card_frame().show(ui, |ui| {
                    let inner = egui::vec2(
                        theme::USER_CARD_WIDTH - 2.0 * theme::SPACING_LG,
                        theme::USER_CARD_HEIGHT - 2.0 * theme::SPACING_LG,
                    );
                    ui.set_min_size(inner);
                    ui.set_max_width(inner.x);

                    ui.horizontal(|ui| {
                        components::avatar_circle(ui, &user.username, 44.0);
                        ui.vertical(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(&user.username)
                                        .size(theme::FONT_HEADING)
                                        .strong(),
                                )
                                .selectable(false)
                                .truncate(),
                            );
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(format!(
                                        "{} {}",
                                        egui_phosphor::regular::MAP_PIN,
                                        user.location_or_unset()
                                    ))
                                    .size(theme::FONT_SECTION)
                                    .color(theme::TEXT_DIM),
                                )
                                .selectable(false)
                                .truncate(),
                            );
                        });
                    });
                    ui.add_space(theme::SPACING_SM);
                    components::field_label(ui, "OFFERS");
                    ui.add_space(theme::SPACING_XS);

                    let offered: Vec<&str> =
                        user.skills_offered.iter().map(|s| s.name.as_str()).collect();
                    if offered.is_empty() {
                        ui.label(
                            egui::RichText::new("No skills offered.")
                                .size(theme::FONT_SECTION)
                                .color(theme::TEXT_DIM),
                        );
                    } else {
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing =
                                egui::vec2(theme::SPACING_SM, theme::SPACING_SM);
                            for name in offered.iter().take(CARD_MAX_SKILL_CHIPS) {
                                components::skill_chip(ui, name);
                            }
                            if offered.len() > CARD_MAX_SKILL_CHIPS {
                                components::skill_chip(
                                    ui,
                                    &format!("+{}", offered.len() - CARD_MAX_SKILL_CHIPS),
                                );
                            }
                        });
                    }

                    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                        let button = theme::button_accent(format!(
                            "{}  View Profile",
                            egui_phosphor::regular::EYE
                        ));
                        if ui.add_sized([ui.available_width(), 28.0], button).clicked() {
                            clicked = true;
                        }
                    });
                });
            },
        );
        clicked
    }

    fn render_user_table(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        use egui_extras::{Column, TableBuilder};

        let indices = self.filtered_user_indices.clone();
        let mut open_profile: Option<i64> = None;
        let mut sort_changed = false;

        let available_width = ui.available_width();
        let header_bg = theme::BG_ELEVATED;
        let header_rect = egui::Rect::from_min_size(
            ui.available_rect_before_wrap().min,
            egui::vec2(available_width, 32.0),
        );
        ui.painter().rect_filled(header_rect, 0.0, header_bg);

        const HEADERS: [(&str, Option<SortColumn>); 5] = [
            ("USER", Some(SortColumn::Username)),
            ("LOCATION", Some(SortColumn::Location)),
            ("OFFERS", Some(SortColumn::Offers)),
            ("SEEKING", Some(SortColumn::Seeking)),
            ("", None),
        ];

        TableBuilder::new(ui)
            .striped(false)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .sense(egui::Sense::click())
            .min_scrolled_height(0.0)
            .column(Column::exact(available_width * 0.24).clip(true))
            .column(Column::exact(available_width * 0.16).clip(true))
            .column(Column::exact(available_width * 0.25).clip(true))
            .column(Column::exact(available_width * 0.25).clip(true))
            .column(Column::remainder())
            .header(32.0, |mut header| {
                for (label, col) in HEADERS {
                    header.col(|ui| {
                        let Some(col) = col else {
                            return;
                        };
                        let is_sorted = self.sort_column == Some(col);
                        let icon = if is_sorted {
                            match self.sort_direction {
                                SortDirection::Ascending => egui_phosphor::regular::CARET_UP,
                                SortDirection::Descending => egui_phosphor::regular::CARET_DOWN,
                            }
                        } else {
                            egui_phosphor::regular::CARET_UP_DOWN
                        };
                        let color = if is_sorted {
                            theme::TEXT_PRIMARY
                        } else {
                            theme::TEXT_MUTED
                        };
                        let response = ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("{} {}", label, icon))
                                    .size(theme::FONT_SECTION)
                                    .strong()
                                    .color(color),
                            )
                            .selectable(false)
                            .sense(egui::Sense::click()),
                        );
                        if response.clicked() {
                            if self.sort_column == Some(col) {
                                match self.sort_direction {
                                    SortDirection::Ascending => {
                                        self.sort_direction = SortDirection::Descending
                                    }
                                    SortDirection::Descending => self.sort_column = None,
                                }
                            } else {
                                self.sort_column = Some(col);
                                self.sort_direction = SortDirection::Ascending;
                            }
                            sort_changed = true;
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(theme::LIST_ROW_HEIGHT, indices.len(), |mut row| {
                    let Some(&user_idx) = indices.get(row.index()) else {
                        return;
                    };
                    let Some(user) = self.users.get(user_idx).cloned() else {
                        return;
                    };

                    row.col(|ui| {
                        components::avatar_circle(ui, &user.username, 24.0);
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&user.username)
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_PRIMARY),
                            )
                            .selectable(false)
                            .truncate(),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(user.location_or_unset())
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_MUTED),
                            )
                            .selectable(false)
                            .truncate(),
                        );
                    });
                    let join = |skills: &[Skill]| {
                        skills
                            .iter()
                            .map(|s| s.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    };
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(join(&user.skills_offered))
                                    .size(theme::FONT_LABEL)
                                    .color(theme::ACCENT_LIGHT),
                            )
                            .selectable(false)
                            .truncate(),
                        );
                    });
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(join(&user.skills_seeking))
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_MUTED),
                            )
                            .selectable(false)
                            .truncate(),
                        );
                    });
                    row.col(|ui| {
                        if ui
                            .add(theme::button(egui_phosphor::regular::EYE.to_string()))
                            .clicked()
                        {
                            open_profile = Some(user.id);
                        }
                    });

                    if row.response().clicked() {
                        open_profile = Some(user.id);
                    }
                });
            });

        if sort_changed {
            self.apply_filters();
        }
        if let Some(user_id) = open_profile {
            self.navigate_to(ctx, Page::UserProfile(user_id));
        }
    }

    // ========================================================================
    // PROFILE PAGES
    // ========================================================================

    fn render_my_profile_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let Some(user) = self.current_user.clone() else {
            return;
        };
        let mut begin_edit = false;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(720.0);

                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("My Profile")
                                    .size(22.0)
                                    .strong()
                                    .color(theme::TEXT_PRIMARY),
                            )
                            .selectable(false),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if !self.profile_editing
                                    && ui
                                        .add(theme::button(format!(
                                            "{}  Edit Profile",
                                            egui_phosphor::regular::PENCIL_SIMPLE
                                        )))
                                        .clicked()
                                {
                                    begin_edit = true;
                                }
                            },
                        );
                    });
                    ui.add_space(theme::SPACING_LG);

                    if self.profile_editing {
                        self.render_profile_form(ui, ctx);
                    } else {
                        self.render_profile_summary(ui, &user);
                    }
                });
            });

        if begin_edit {
            self.begin_profile_edit();
        }
    }

    fn render_profile_summary(&mut self, ui: &mut egui::Ui, user: &User) {
        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                components::avatar_circle(ui, &user.username, 88.0);
                ui.add_space(theme::SPACING_MD);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&user.username)
                            .size(20.0)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::MAP_PIN,
                            user.location_or_unset()
                        ))
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::ENVELOPE_SIMPLE,
                            user.email
                        ))
                        .size(theme::FONT_SECTION)
                        .color(theme::TEXT_DIM),
                    );
                });
            });
        });
        ui.add_space(theme::SPACING_MD);

        theme::section_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            components::field_label(ui, "BIO");
            ui.add_space(theme::SPACING_XS);
            match user.bio.as_deref() {
                Some(bio) if !bio.is_empty() => {
                    ui.label(
                        egui::RichText::new(bio)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_SECONDARY),
                    );
                }
                _ => {
                    ui.label(
                        egui::RichText::new("No bio yet.")
                            .size(theme::FONT_SECTION)
                            .color(theme::TEXT_DIM),
                    );
                }
            }
        });
        ui.add_space(theme::SPACING_MD);

        theme::section_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            components::field_label(ui, "SKILLS I OFFER");
            ui.add_space(theme::SPACING_XS);
            components::skill_chip_list(
                ui,
                user.skills_offered.iter().map(|s| s.name.as_str()),
                "No skills listed.",
            );
        });
        ui.add_space(theme::SPACING_MD);

        theme::section_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            components::field_label(ui, "SKILLS I WANT");
            ui.add_space(theme::SPACING_XS);
            components::skill_chip_list(
                ui,
                user.skills_seeking.iter().map(|s| s.name.as_str()),
                "No skills listed.",
            );
        });
    }

    fn render_profile_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut save = false;
        let mut cancel = false;

        theme::section_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            components::field_label(ui, "USERNAME");
            components::text_field(ui, &mut self.profile_draft.username, "Username", false);
            ui.add_space(theme::SPACING_MD);

            components::field_label(ui, "LOCATION");
            components::text_field(ui, &mut self.profile_draft.location, "City", false);
            ui.add_space(theme::SPACING_MD);

            components::field_label(ui, "BIO");
            components::text_area(
                ui,
                &mut self.profile_draft.bio,
                "A few words about yourself...",
                3,
            );
            ui.add_space(theme::SPACING_MD);

            components::field_label(ui, "SKILLS I OFFER (COMMA-SEPARATED)");
            components::text_field(
                ui,
                &mut self.profile_draft.skills_offered,
                "Guitar, Baking, Spanish",
                false,
            );
            ui.add_space(theme::SPACING_MD);

            components::field_label(ui, "SKILLS I WANT (COMMA-SEPARATED)");
            components::text_field(
                ui,
                &mut self.profile_draft.skills_seeking,
                "Photography, Chess",
                false,
            );
            ui.add_space(theme::SPACING_LG);

            ui.horizontal(|ui| {
                if self.profile_in_flight {
                    ui.spinner();
                    ui.label(egui::RichText::new("Saving...").color(theme::TEXT_MUTED));
                } else {
                    if ui
                        .add(theme::button_accent(format!(
                            "{}  Save Changes",
                            egui_phosphor::regular::CHECK
                        )))
                        .clicked()
                    {
                        save = true;
                    }
                    if ui
                        .add(theme::button(format!(
                            "{}  Cancel",
                            egui_phosphor::regular::X
                        )))
                        .clicked()
                    {
                        cancel = true;
                    }
                }
            });
        });

        if save {
            self.submit_profile_update(ctx);
        }
        if cancel {
            self.cancel_profile_edit();
        }
    }

    fn render_user_profile_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, user_id: i64) {
        let mut back = false;
        let mut request_swap = false;

        if ui
            .add(theme::button(format!(
                "{}  Back to Browse",
                egui_phosphor::regular::ARROW_LEFT
            )))
            .clicked()
        {
            back = true;
        }
        ui.add_space(theme::SPACING_MD);

        match self.user_by_id(user_id).cloned() {
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(theme::SPACING_XL);
                    ui.label(egui::RichText::new("User not found.").color(theme::TEXT_DIM));
                });
            }
            Some(user) => {
                let existing_status = self.existing_swap_with(user_id).map(|s| s.status);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(720.0);

                            theme::card_frame().show(ui, |ui| {
                                ui.set_min_width(ui.available_width());
                                ui.horizontal(|ui| {
                                    components::avatar_circle(ui, &user.username, 88.0);
                                    ui.add_space(theme::SPACING_MD);
                                    ui.vertical(|ui| {
                                        ui.label(
                                            egui::RichText::new(&user.username)
                                                .size(20.0)
                                                .strong()
                                                .color(theme::TEXT_PRIMARY),
                                        );
                                        ui.label(
                                            egui::RichText::new(format!(
                                                "{} {}",
                                                egui_phosphor::regular::MAP_PIN,
                                                user.location_or_unset()
                                            ))
                                            .size(theme::FONT_LABEL)
                                            .color(theme::TEXT_MUTED),
                                        );
                                    });
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| match existing_status {
                                            Some(status) => {
                                                ui.add_enabled(
                                                    false,
                                                    theme::button_disabled(format!(
                                                        "Swap Request {}",
                                                        status.label()
                                                    )),
                                                );
                                            }
                                            None => {
                                                let button = theme::button_accent(format!(
                                                    "{}  Request Swap",
                                                    egui_phosphor::regular::ARROWS_LEFT_RIGHT
                                                ));
                                                if ui.add(button).clicked() {
                                                    request_swap = true;
                                                }
                                            }
                                        },
                                    );
                                });
                            });
                            ui.add_space(theme::SPACING_MD);

                            if let Some(bio) = user.bio.as_deref().filter(|b| !b.is_empty()) {
                                theme::section_frame().show(ui, |ui| {
                                    ui.set_min_width(ui.available_width());
                                    components::field_label(ui, "BIO");
                                    ui.add_space(theme::SPACING_XS);
                                    ui.label(
                                        egui::RichText::new(bio)
                                            .size(theme::FONT_BODY)
                                            .color(theme::TEXT_SECONDARY),
                                    );
                                });
                                ui.add_space(theme::SPACING_MD);
                            }

                            theme::section_frame().show(ui, |ui| {
                                ui.set_min_width(ui.available_width());
                                components::field_label(ui, "SKILLS OFFERED");
                                ui.add_space(theme::SPACING_XS);
                                components::skill_chip_list(
                                    ui,
                                    user.skills_offered.iter().map(|s| s.name.as_str()),
                                    "No skills listed.",
                                );
                            });
                            ui.add_space(theme::SPACING_MD);

                            theme::section_frame().show(ui, |ui| {
                                ui.set_min_width(ui.available_width());
                                components::field_label(ui, "SKILLS WANTED");
                                ui.add_space(theme::SPACING_XS);
                                components::skill_chip_list(
                                    ui,
                                    user.skills_seeking.iter().map(|s| s.name.as_str()),
                                    "No skills listed.",
                                );
                            });
                        });
                    });
            }
        }

        if back {
            self.navigate_to(ctx, Page::Browse);
        }
        if request_swap {
            self.open_swap_dialog(user_id);
        }
    }

    // ========================================================================
    // MY SWAPS PAGE
    // ========================================================================

    fn render_my_swaps_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let incoming = self.incoming_swaps();
        let outgoing = self.outgoing_swaps();
        let mut actions: Vec<(i64, SwapStatus)> = Vec::new();

        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("My Swaps")
                        .size(22.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            if self.sync_in_flight {
                ui.spinner();
            }
        });
        ui.add_space(theme::SPACING_LG);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.columns(2, |columns| {
                    {
                        let ui = &mut columns[0];
                        components::field_label(ui, "INCOMING REQUESTS");
                        ui.add_space(theme::SPACING_SM);
                        if incoming.is_empty() {
                            ui.label(
                                egui::RichText::new("No incoming requests.")
                                    .color(theme::TEXT_DIM),
                            );
                        }
                        for swap in &incoming {
                            if let Some(status) = self.render_swap_entry(ui, swap, true) {
                                actions.push((swap.id, status));
                            }
                        }
                    }
                    {
                        let ui = &mut columns[1];
                        components::field_label(ui, "OUTGOING REQUESTS");
                        ui.add_space(theme::SPACING_SM);
                        if outgoing.is_empty() {
                            ui.label(
                                egui::RichText::new("No outgoing requests.")
                                    .color(theme::TEXT_DIM),
                            );
                        }
                        for swap in &outgoing {
                            self.render_swap_entry(ui, swap, false);
                        }
                    }
                });
            });

        for (swap_id, status) in actions {
            self.respond_to_swap(ctx, swap_id, status);
        }
    }

    /// One swap card. Returns the chosen response for pending incoming swaps.
    fn render_swap_entry(
        &mut self,
        ui: &mut egui::Ui,
        swap: &Swap,
        incoming: bool,
    ) -> Option<SwapStatus> {
        let mut action = None;

        theme::card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            let (other, line) = if incoming {
                (
                    &swap.proposer,
                    format!(
                        "{} offers {} for your {}",
                        swap.proposer.username, swap.offered_skill.name, swap.requested_skill.name
                    ),
                )
            } else {
                (
                    &swap.receiver,
                    format!(
                        "You offered {} to {} for their {}",
                        swap.offered_skill.name, swap.receiver.username, swap.requested_skill.name
                    ),
                )
            };

            ui.horizontal(|ui| {
                components::avatar_circle(ui, &other.username, 28.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(line)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_SECONDARY),
                    )
                    .wrap(),
                );
            });

            if !swap.message.is_empty() {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("\u{201c}{}\u{201d}", swap.message))
                            .italics()
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_MUTED),
                    )
                    .wrap(),
                );
            }
            ui.add_space(theme::SPACING_SM);

            ui.horizontal(|ui| {
                components::status_badge(ui, swap.status);
                ui.label(
                    egui::RichText::new(format_timestamp(swap.timestamp))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                if incoming && swap.status == SwapStatus::Pending {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.responding.contains(&swap.id) {
                            ui.spinner();
                        } else {
                            if ui
                                .add(theme::button_danger(format!(
                                    "{}  Reject",
                                    egui_phosphor::regular::X_CIRCLE
                                )))
                                .clicked()
                            {
                                action = Some(SwapStatus::Rejected);
                            }
                            if ui
                                .add(theme::button_success(format!(
                                    "{}  Accept",
                                    egui_phosphor::regular::CHECK_CIRCLE
                                )))
                                .clicked()
                            {
                                action = Some(SwapStatus::Accepted);
                            }
                        }
                    });
                }
            });
        });
        ui.add_space(theme::SPACING_MD);

        action
    }

    // ========================================================================
    // MODALS & TOAST
    // ========================================================================

    /// Generic title + message dialog; every error and confirmation lands here
    fn render_message_modal(&mut self, ctx: &egui::Context) {
        let Some(state) = self.modal.clone() else {
            return;
        };

        let modal_area = egui::Modal::default_area(egui::Id::new("message_modal"))
            .default_width(360.0 + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("message_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());

        let mut close = false;
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(360.0);
            ui.set_max_width(360.0);
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(&state.title)
                        .size(theme::FONT_TITLE)
                        .strong(),
                );
                ui.add_space(theme::SPACING_MD);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&state.message).color(theme::TEXT_MUTED),
                    )
                    .wrap(),
                );
                ui.add_space(theme::SPACING_XL);
                if ui
                    .add(theme::button_accent(format!(
                        "{}  OK",
                        egui_phosphor::regular::CHECK
                    )))
                    .clicked()
                {
                    close = true;
                }
            });
        });

        if close || modal_response.should_close() {
            self.modal = None;
        }
    }

    /// Swap proposal dialog
    fn render_swap_modal(&mut self, ctx: &egui::Context) {
        if self.swap_draft.is_none() {
            return;
        }

        let modal_area = egui::Modal::default_area(egui::Id::new("swap_modal"))
            .default_width(380.0 + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("swap_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());

        let mut send = false;
        let mut cancel = false;
        let in_flight = self.swap_in_flight;

        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(380.0);
            ui.set_max_width(380.0);

            let Some(draft) = self.swap_draft.as_mut() else {
                return;
            };

            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(format!("Request a Swap with {}", draft.receiver_username))
                        .size(theme::FONT_TITLE)
                        .strong(),
                );
            });
            ui.add_space(theme::SPACING_LG);

            components::field_label(ui, "YOU OFFER");
            let offered_name = draft
                .offer_options
                .iter()
                .find(|(id, _)| *id == draft.offered_skill_id)
                .map(|(_, name)| name.clone())
                .unwrap_or_default();
            egui::ComboBox::from_id_salt("swap_offer_skill")
                .width(ui.available_width())
                .selected_text(offered_name)
                .show_ui(ui, |ui| {
                    for (id, name) in &draft.offer_options {
                        ui.selectable_value(&mut draft.offered_skill_id, *id, name);
                    }
                });
            ui.add_space(theme::SPACING_MD);

            components::field_label(ui, "YOU REQUEST");
            let requested_name = draft
                .request_options
                .iter()
                .find(|(id, _)| *id == draft.requested_skill_id)
                .map(|(_, name)| name.clone())
                .unwrap_or_default();
            egui::ComboBox::from_id_salt("swap_request_skill")
                .width(ui.available_width())
                .selected_text(requested_name)
                .show_ui(ui, |ui| {
                    for (id, name) in &draft.request_options {
                        ui.selectable_value(&mut draft.requested_skill_id, *id, name);
                    }
                });
            ui.add_space(theme::SPACING_MD);

            components::field_label(ui, "MESSAGE (OPTIONAL)");
            components::text_area(ui, &mut draft.message, "Say hello...", 3);
            ui.add_space(theme::SPACING_XL);

            ui.horizontal(|ui| {
                ui.set_min_height(28.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if in_flight {
                        ui.spinner();
                        ui.label(
                            egui::RichText::new("Sending request...").color(theme::TEXT_MUTED),
                        );
                    } else {
                        if ui
                            .add(theme::button_accent(format!(
                                "{}  Send Request",
                                egui_phosphor::regular::PAPER_PLANE_TILT
                            )))
                            .clicked()
                        {
                            send = true;
                        }
                        ui.add_space(theme::SPACING_MD);
                        if ui
                            .add(theme::button(format!(
                                "{}  Cancel",
                                egui_phosphor::regular::X
                            )))
                            .clicked()
                        {
                            cancel = true;
                        }
                    }
                });
            });
        });

        if send {
            self.submit_swap_proposal(ctx);
        }
        if cancel || (modal_response.should_close() && !self.swap_in_flight) {
            self.swap_draft = None;
        }
    }

    /// Toast notification (bottom-right of central panel, 3s visible then fade,
    /// pause on hover)
    fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(message), Some(panel_rect)) =
            (self.toast_message.clone(), self.central_panel_rect)
        else {
            return;
        };

        let visible_duration = 3.0;
        let fade_duration = 0.5;
        let total_duration = visible_duration + fade_duration;
        let margin = 12.0;

        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);

        let response = egui::Area::new(egui::Id::new("refresh_toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                let elapsed = self
                    .toast_start
                    .map(|t| t.elapsed().as_secs_f32())
                    .unwrap_or(0.0);
                let alpha = if elapsed > visible_duration {
                    (total_duration - elapsed) / fade_duration
                } else {
                    1.0
                };

                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(
                        0x1a,
                        0x1a,
                        0x1e,
                        (230.0 * alpha) as u8,
                    ))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_rgba_unmultiplied(
                            theme::ACCENT.r(),
                            theme::ACCENT.g(),
                            theme::ACCENT.b(),
                            (100.0 * alpha) as u8,
                        ),
                    ))
                    .corner_radius(theme::RADIUS_MEDIUM)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&message).color(
                            egui::Color32::from_rgba_unmultiplied(
                                255,
                                255,
                                255,
                                (255.0 * alpha) as u8,
                            ),
                        ));
                    });
            });

        // Pause timer while hovering
        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        let elapsed = self
            .toast_start
            .map(|t| t.elapsed().as_secs_f32())
            .unwrap_or(0.0);
        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }
}
