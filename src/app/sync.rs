//! Data fetching and background-result polling
//!
//! Handlers spawn requests on the app's runtime; tasks push their outcome
//! onto the shared event queue which `poll_api_events` drains once per frame.

use super::App;
use crate::types::*;
use eframe::egui;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Queue an event for the next frame
pub(crate) fn push_event(events: &Arc<Mutex<Vec<ApiEvent>>>, event: ApiEvent) {
    events.lock().unwrap().push(event);
}

impl App {
    /// Reload users and skills in parallel, then the signed-in user's swaps
    pub fn start_refresh(&mut self, ctx: &egui::Context, announce: bool) {
        if self.sync_in_flight {
            return;
        }
        self.sync_in_flight = true;
        self.announce_next_sync = announce;

        let api = self.api.clone();
        let events = self.api_events.clone();
        let ctx = ctx.clone();
        let user_id = self.signed_in_user_id().or(self.pending_session_user);

        debug!(user_id = ?user_id, "Starting data refresh");

        self.runtime.spawn(async move {
            let (users, skills) = futures::join!(api.users(), api.skills());
            match (users, skills) {
                (Ok(users), Ok(skills)) => {
                    push_event(&events, ApiEvent::DirectoryLoaded { users, skills });
                    if let Some(id) = user_id {
                        match api.user_swaps(id).await {
                            Ok(swaps) => push_event(&events, ApiEvent::SwapsLoaded(swaps)),
                            Err(e) => push_event(
                                &events,
                                ApiEvent::Failed {
                                    kind: RequestKind::Sync,
                                    message: e.to_string(),
                                },
                            ),
                        }
                    }
                }
                (Err(e), _) | (_, Err(e)) => push_event(
                    &events,
                    ApiEvent::Failed {
                        kind: RequestKind::Sync,
                        message: e.to_string(),
                    },
                ),
            }
            ctx.request_repaint();
        });
    }

    /// Drain background results and fold them into app state. Called once at
    /// the top of every frame.
    pub fn poll_api_events(&mut self, ctx: &egui::Context) {
        let events: Vec<ApiEvent> = std::mem::take(&mut *self.api_events.lock().unwrap());
        for event in events {
            match event {
                ApiEvent::DirectoryLoaded { users, skills } => {
                    self.on_directory_loaded(users, skills)
                }
                ApiEvent::SwapsLoaded(swaps) => {
                    debug!(count = swaps.len(), "Swaps loaded");
                    self.swaps = swaps;
                }
                ApiEvent::SignedIn(user) => {
                    info!(user_id = user.id, username = %user.username, "Signed in");
                    self.auth_in_flight = false;
                    self.login_password.clear();
                    self.signup_password.clear();
                    self.current_user = Some(user);
                    self.pending_session_user = None;
                    self.save_settings();
                    self.start_refresh(ctx, false);
                    self.navigate_to(ctx, Page::Browse);
                }
                ApiEvent::ProfileSaved(user) => {
                    info!(user_id = user.id, "Profile updated");
                    self.profile_in_flight = false;
                    self.profile_editing = false;
                    if let Some(entry) = self.users.iter_mut().find(|u| u.id == user.id) {
                        *entry = user.clone();
                    }
                    self.current_user = Some(user);
                    self.save_settings();
                    self.apply_filters();
                    self.show_message("Success", "Your profile has been updated.");
                }
                ApiEvent::SwapProposed(swap) => {
                    info!(swap_id = swap.id, receiver = swap.receiver.id, "Swap proposed");
                    self.swap_in_flight = false;
                    self.swap_draft = None;
                    let receiver_id = swap.receiver.id;
                    self.swaps.insert(0, swap);
                    self.start_refresh(ctx, false);
                    self.show_message("Request Sent!", "Your swap request has been sent.");
                    self.page = Page::UserProfile(receiver_id);
                }
                ApiEvent::SwapResolved(swap) => {
                    info!(swap_id = swap.id, status = swap.status.label(), "Swap resolved");
                    self.responding.remove(&swap.id);
                    self.show_message(
                        "Status Updated",
                        format!("The swap request has been {}.", swap.status.label()),
                    );
                    if let Some(entry) = self.swaps.iter_mut().find(|s| s.id == swap.id) {
                        *entry = swap;
                    }
                    self.start_refresh(ctx, false);
                }
                ApiEvent::Failed { kind, message } => self.on_request_failed(kind, message),
            }
        }
    }

    fn on_directory_loaded(&mut self, users: Vec<User>, skills: Vec<Skill>) {
        debug!(users = users.len(), skills = skills.len(), "Directory loaded");
        self.users = users;
        self.skills = skills;
        self.sync_in_flight = false;

        // Refresh the signed-in snapshot from the fetched list; the remembered
        // copy may be stale
        if let Some(current) = &self.current_user {
            let id = current.id;
            match self.users.iter().find(|u| u.id == id) {
                Some(fresh) => self.current_user = Some(fresh.clone()),
                None => {
                    warn!(user_id = id, "Signed-in user missing from directory, signing out");
                    self.logout();
                    self.show_message("Signed Out", "Your account is no longer available.");
                    return;
                }
            }
        } else if let Some(id) = self.pending_session_user.take() {
            match self.users.iter().find(|u| u.id == id) {
                Some(user) => {
                    info!(user_id = id, "Session restored");
                    self.current_user = Some(user.clone());
                }
                None => {
                    info!(user_id = id, "Remembered session no longer resolves");
                    self.page = Page::Login;
                }
            }
            self.save_settings();
        }

        self.apply_filters();

        if self.announce_next_sync {
            self.announce_next_sync = false;
            self.show_toast(format!(
                "Directory updated: {} users, {} skills",
                self.users.len(),
                self.skills.len()
            ));
        }
    }

    fn on_request_failed(&mut self, kind: RequestKind, message: String) {
        warn!(kind = ?kind, error = %message, "Request failed");
        match kind {
            RequestKind::Sync => {
                self.sync_in_flight = false;
                self.announce_next_sync = false;
                self.show_message("Connection Error", message);
            }
            RequestKind::Login => {
                self.auth_in_flight = false;
                self.show_message("Login Failed", message);
            }
            RequestKind::Signup => {
                self.auth_in_flight = false;
                self.show_message("Signup Failed", message);
            }
            RequestKind::ProfileSave => {
                self.profile_in_flight = false;
                self.show_message("Error", message);
            }
            RequestKind::SwapPropose => {
                self.swap_in_flight = false;
                self.show_message("Error", message);
            }
            RequestKind::SwapRespond(swap_id) => {
                self.responding.remove(&swap_id);
                self.show_message("Error", message);
            }
        }
    }
}
