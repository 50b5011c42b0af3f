use crate::api::ActivitiesApi;
use crate::config::ClientConfig;
use crate::gui::roster::{ActivitySelect, ListArea};
use crate::models::events::{Event, Mutation};
use crate::models::message::{MessageKind, StatusMessage};
use crate::models::signup::MutationOutcome;
use log::{debug, error, info, warn};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Runtime;

pub const GENERIC_ERROR: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister participant. Please try again.";

pub struct AppState {
    pub list: ListArea,
    pub select: ActivitySelect,
    pub email: String,
    pub message: Option<StatusMessage>,
    pub server_address: String,

    config: ClientConfig,
    api: Arc<dyn ActivitiesApi>,
    runtime: Runtime,
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    repaint: Option<egui::Context>,

    issued_generation: u64,
    applied_generation: u64,
    message_seq: u64,
}

impl AppState {
    pub fn new(config: ClientConfig, api: Arc<dyn ActivitiesApi>) -> Result<Self, anyhow::Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (sender, receiver) = channel();

        Ok(Self {
            list: ListArea::default(),
            select: ActivitySelect::default(),
            email: String::new(),
            message: None,
            server_address: config.base_url.clone(),
            config,
            api,
            runtime,
            sender,
            receiver,
            repaint: None,
            issued_generation: 0,
            applied_generation: 0,
            message_seq: 0,
        })
    }

    /// Attaches the repaint context, if any, and issues the first load.
    pub fn start(&mut self, ctx: Option<&egui::Context>) {
        self.repaint = ctx.cloned();
        self.load_activities();
    }

    /// Points all later requests at a different backend.
    pub fn replace_api(&mut self, api: Arc<dyn ActivitiesApi>) {
        self.api = api;
    }

    pub fn can_submit(&self) -> bool {
        let has_activity = self.select.selected.as_deref().is_some_and(|a| !a.is_empty());
        has_activity && !self.email.trim().is_empty()
    }

    pub fn load_activities(&mut self) {
        self.issued_generation += 1;
        let generation = self.issued_generation;
        let api = self.api.clone();
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();

        debug!("Loading activities (generation {})", generation);
        self.runtime.spawn(async move {
            let result = api.get_activities().await.map_err(|e| format!("{:#}", e));
            post(&sender, repaint.as_ref(), Event::ActivitiesLoaded { generation, result });
        });
    }

    pub fn submit_signup(&mut self) {
        let Some(activity) = self.select.selected.clone() else {
            warn!("Signup ignored: no activity selected");
            return;
        };
        let email = self.email.trim().to_owned();
        if activity.is_empty() || email.is_empty() {
            warn!("Signup ignored: activity and email are both required");
            return;
        }

        let api = self.api.clone();
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();

        info!("Signing up {} for {}", email, activity);
        self.runtime.spawn(async move {
            let result = api.signup(&activity, &email).await.map_err(|e| format!("{:#}", e));
            let event = Event::MutationFinished {
                kind: Mutation::Signup,
                result,
            };
            post(&sender, repaint.as_ref(), event);
        });
    }

    pub fn unregister_participant(&mut self, activity: &str, email: &str) {
        if activity.is_empty() || email.is_empty() {
            warn!("Unregister ignored: activity and email are both required");
            return;
        }

        let api = self.api.clone();
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();
        let activity = activity.to_owned();
        let email = email.to_owned();

        info!("Unregistering {} from {}", email, activity);
        self.runtime.spawn(async move {
            let result = api
                .unregister(&activity, &email)
                .await
                .map_err(|e| format!("{:#}", e));
            let event = Event::MutationFinished {
                kind: Mutation::Unregister,
                result,
            };
            post(&sender, repaint.as_ref(), event);
        });
    }

    /// Applies every event that has arrived since the last frame.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::ActivitiesLoaded { generation, result } => {
                if generation < self.applied_generation {
                    debug!("Dropping stale activities response (generation {})", generation);
                    return;
                }
                self.applied_generation = generation;
                match result {
                    Ok(collection) => {
                        self.list = ListArea::from_collection(&collection);
                        self.select.replace_options(&collection);
                    }
                    Err(e) => {
                        error!("Error fetching activities: {}", e);
                        self.list = ListArea::Failed;
                    }
                }
            }
            Event::MutationFinished { kind, result } => match result {
                Ok(MutationOutcome::Accepted { message }) => {
                    self.show_message(message, MessageKind::Success);
                    if kind == Mutation::Signup {
                        self.email.clear();
                        self.select.reset();
                    }
                    self.load_activities();
                }
                Ok(MutationOutcome::Rejected { status, detail }) => {
                    warn!("{:?} rejected ({}): {:?}", kind, status, detail);
                    let text = detail.unwrap_or_else(|| GENERIC_ERROR.to_owned());
                    self.show_message(text, MessageKind::Error);
                }
                Err(e) => {
                    let fallback = match kind {
                        Mutation::Signup => {
                            error!("Error signing up: {}", e);
                            SIGNUP_FAILED
                        }
                        Mutation::Unregister => {
                            error!("Error unregistering: {}", e);
                            UNREGISTER_FAILED
                        }
                    };
                    self.show_message(fallback.to_owned(), MessageKind::Error);
                }
            },
            Event::HideMessage { seq } => {
                // A newer message owns its own timer.
                if self.message.as_ref().is_some_and(|m| m.seq == seq) {
                    self.message = None;
                }
            }
        }
    }

    pub(crate) fn show_error(&mut self, text: String) {
        self.show_message(text, MessageKind::Error);
    }

    fn show_message(&mut self, text: String, kind: MessageKind) {
        self.message_seq += 1;
        let seq = self.message_seq;
        self.message = Some(StatusMessage { text, kind, seq });

        let timeout = self.config.message_timeout;
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(timeout).await;
            post(&sender, repaint.as_ref(), Event::HideMessage { seq });
        });
    }

    /// Blocks until one event arrives and applies it.
    #[cfg(test)]
    fn wait_for_event(&mut self, timeout: std::time::Duration) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.apply(event);
                true
            }
            Err(_) => false,
        }
    }
}

fn post(sender: &Sender<Event>, repaint: Option<&egui::Context>, event: Event) {
    if let Err(e) = sender.send(event) {
        // The window is gone; nothing left to update.
        debug!("Dropping event: {}", e);
        return;
    }
    if let Some(ctx) = repaint {
        ctx.request_repaint();
    }
}
