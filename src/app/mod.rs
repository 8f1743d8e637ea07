//! App module - contains the main application state and logic

mod filters;
mod profile;
mod session;
mod swaps;
mod sync;

use crate::api::ApiClient;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) api: ApiClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) api_events: Arc<Mutex<Vec<ApiEvent>>>,

    // Server data snapshots (reloaded on each fetch)
    pub(crate) current_user: Option<User>,
    pub(crate) users: Vec<User>,
    pub(crate) skills: Vec<Skill>,
    pub(crate) swaps: Vec<Swap>,

    // Navigation
    pub(crate) page: Page,

    // Browse page
    pub(crate) filtered_user_indices: Vec<usize>,
    pub(crate) search_query: String,
    pub(crate) focus_search: bool,
    pub(crate) browse_cards_view: bool,
    pub(crate) sort_column: Option<SortColumn>,
    pub(crate) sort_direction: SortDirection,

    // Login / signup forms
    pub(crate) login_tab_active: bool,
    pub(crate) login_email: String,
    pub(crate) login_password: String,
    pub(crate) signup_username: String,
    pub(crate) signup_email: String,
    pub(crate) signup_password: String,
    pub(crate) signup_location: String,
    pub(crate) auth_in_flight: bool,

    // Profile edit
    pub(crate) profile_editing: bool,
    pub(crate) profile_draft: ProfileDraft,
    pub(crate) profile_in_flight: bool,

    // Swap proposal / responses
    pub(crate) swap_draft: Option<SwapDraft>,
    pub(crate) swap_in_flight: bool,
    pub(crate) responding: HashSet<i64>,

    // Data refresh
    pub(crate) sync_in_flight: bool,
    pub(crate) startup_fetch_started: bool,
    pub(crate) announce_next_sync: bool,
    /// Remembered session user id waiting for the user list to resolve it
    pub(crate) pending_session_user: Option<i64>,

    // Message modal & toast
    pub(crate) modal: Option<MessageModal>,
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,

    // Window management
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let api = ApiClient::new(settings.api_base_url_or_default());
        info!(base_url = %api.base_url(), "API client ready");

        let pending_session_user = settings.session_user_id;
        let page = if pending_session_user.is_some() {
            Page::Browse
        } else {
            Page::Login
        };

        Self {
            api,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            api_events: Arc::new(Mutex::new(Vec::new())),
            current_user: None,
            users: Vec::new(),
            skills: Vec::new(),
            swaps: Vec::new(),
            page,
            filtered_user_indices: Vec::new(),
            search_query: String::new(),
            focus_search: false,
            browse_cards_view: settings.browse_cards_view,
            sort_column: Some(SortColumn::Username),
            sort_direction: SortDirection::Ascending,
            login_tab_active: true,
            login_email: String::new(),
            login_password: String::new(),
            signup_username: String::new(),
            signup_email: String::new(),
            signup_password: String::new(),
            signup_location: String::new(),
            auth_in_flight: false,
            profile_editing: false,
            profile_draft: ProfileDraft::default(),
            profile_in_flight: false,
            swap_draft: None,
            swap_in_flight: false,
            responding: HashSet::new(),
            sync_in_flight: false,
            startup_fetch_started: false,
            announce_next_sync: false,
            pending_session_user,
            modal: None,
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
            logo_texture: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            api_base_url: Some(self.api.base_url().to_string()),
            session_user_id: self
                .current_user
                .as_ref()
                .map(|u| u.id)
                .or(self.pending_session_user),
            browse_cards_view: self.browse_cards_view,
        };
        settings.save(&self.data_dir);
    }

    /// Switch pages, running per-page preparation first
    pub fn navigate_to(&mut self, ctx: &egui::Context, page: Page) {
        match page {
            Page::Browse => {
                self.apply_filters();
                self.focus_search = true;
            }
            Page::MySwaps => self.start_refresh(ctx, false),
            Page::MyProfile => self.profile_editing = false,
            _ => {}
        }
        self.page = page;
    }

    /// Generic modal utility: every error and confirmation goes through here
    pub fn show_message(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.modal = Some(MessageModal {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }

    pub fn signed_in_user_id(&self) -> Option<i64> {
        self.current_user.as_ref().map(|u| u.id)
    }

    pub fn user_by_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}
