//! Profile viewing and editing

use super::sync::push_event;
use super::App;
use crate::api::ProfileUpdate;
use crate::types::*;
use eframe::egui;

impl App {
    /// Open the edit form pre-filled from the current user
    pub fn begin_profile_edit(&mut self) {
        if let Some(user) = &self.current_user {
            self.profile_draft = ProfileDraft::from_user(user);
            self.profile_editing = true;
        }
    }

    pub fn cancel_profile_edit(&mut self) {
        self.profile_editing = false;
    }

    pub fn submit_profile_update(&mut self, ctx: &egui::Context) {
        if self.profile_in_flight {
            return;
        }
        let Some(user_id) = self.signed_in_user_id() else {
            return;
        };

        let update = ProfileUpdate {
            username: self.profile_draft.username.trim().to_string(),
            location: self.profile_draft.location.trim().to_string(),
            bio: self.profile_draft.bio.trim().to_string(),
            skills_offered: ProfileDraft::parse_skills(&self.profile_draft.skills_offered),
            skills_seeking: ProfileDraft::parse_skills(&self.profile_draft.skills_seeking),
        };
        if update.username.is_empty() {
            self.show_message("Error", "Username cannot be empty.");
            return;
        }
        self.profile_in_flight = true;

        let api = self.api.clone();
        let events = self.api_events.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            match api.update_profile(user_id, &update).await {
                Ok(user) => push_event(&events, ApiEvent::ProfileSaved(user)),
                Err(e) => push_event(
                    &events,
                    ApiEvent::Failed {
                        kind: RequestKind::ProfileSave,
                        message: e.to_string(),
                    },
                ),
            }
            ctx.request_repaint();
        });
    }
}
