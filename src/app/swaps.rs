//! Swap proposal and response logic

use super::sync::push_event;
use super::App;
use crate::api::SwapProposal;
use crate::types::*;
use eframe::egui;

impl App {
    /// Any swap between the signed-in user and `other_id`, in either
    /// direction. The profile page disables the request button when one exists.
    pub fn existing_swap_with(&self, other_id: i64) -> Option<&Swap> {
        let me = self.signed_in_user_id()?;
        self.swaps.iter().find(|s| {
            (s.proposer.id == me && s.receiver.id == other_id)
                || (s.proposer.id == other_id && s.receiver.id == me)
        })
    }

    pub fn incoming_swaps(&self) -> Vec<Swap> {
        let Some(me) = self.signed_in_user_id() else {
            return Vec::new();
        };
        self.swaps
            .iter()
            .filter(|s| s.receiver.id == me)
            .cloned()
            .collect()
    }

    pub fn outgoing_swaps(&self) -> Vec<Swap> {
        let Some(me) = self.signed_in_user_id() else {
            return Vec::new();
        };
        self.swaps
            .iter()
            .filter(|s| s.proposer.id == me)
            .cloned()
            .collect()
    }

    /// Open the proposal dialog for a receiver; both sides must have at least
    /// one offered skill
    pub fn open_swap_dialog(&mut self, receiver_id: i64) {
        let Some(me) = self.current_user.clone() else {
            return;
        };
        let Some(receiver) = self.user_by_id(receiver_id).cloned() else {
            return;
        };
        if me.skills_offered.is_empty() || receiver.skills_offered.is_empty() {
            self.show_message(
                "Cannot Swap",
                "Either you or the other user must have at least one skill to offer.",
            );
            return;
        }

        let offer_options: Vec<(i64, String)> = me
            .skills_offered
            .iter()
            .map(|s| (s.id, s.name.clone()))
            .collect();
        let request_options: Vec<(i64, String)> = receiver
            .skills_offered
            .iter()
            .map(|s| (s.id, s.name.clone()))
            .collect();
        let offered_skill_id = offer_options[0].0;
        let requested_skill_id = request_options[0].0;

        self.swap_draft = Some(SwapDraft {
            receiver_id,
            receiver_username: receiver.username.clone(),
            offer_options,
            request_options,
            offered_skill_id,
            requested_skill_id,
            message: String::new(),
        });
    }

    pub fn submit_swap_proposal(&mut self, ctx: &egui::Context) {
        if self.swap_in_flight {
            return;
        }
        let Some(me) = self.signed_in_user_id() else {
            return;
        };
        let Some(draft) = &self.swap_draft else {
            return;
        };

        let proposal = SwapProposal {
            proposer_id: me,
            receiver_id: draft.receiver_id,
            offered_skill_id: draft.offered_skill_id,
            requested_skill_id: draft.requested_skill_id,
            message: draft.message.trim().to_string(),
        };
        self.swap_in_flight = true;

        let api = self.api.clone();
        let events = self.api_events.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            match api.propose_swap(&proposal).await {
                Ok(swap) => push_event(&events, ApiEvent::SwapProposed(swap)),
                Err(e) => push_event(
                    &events,
                    ApiEvent::Failed {
                        kind: RequestKind::SwapPropose,
                        message: e.to_string(),
                    },
                ),
            }
            ctx.request_repaint();
        });
    }

    /// Accept or reject a pending incoming swap. Re-entrant calls for a swap
    /// already in flight are dropped.
    pub fn respond_to_swap(&mut self, ctx: &egui::Context, swap_id: i64, status: SwapStatus) {
        if self.responding.contains(&swap_id) {
            return;
        }
        self.responding.insert(swap_id);

        let api = self.api.clone();
        let events = self.api_events.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            match api.respond_to_swap(swap_id, status).await {
                Ok(swap) => push_event(&events, ApiEvent::SwapResolved(swap)),
                Err(e) => push_event(
                    &events,
                    ApiEvent::Failed {
                        kind: RequestKind::SwapRespond(swap_id),
                        message: e.to_string(),
                    },
                ),
            }
            ctx.request_repaint();
        });
    }
}
