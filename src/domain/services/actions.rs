#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::ResponderBox;
use crate::domain::models::ResponderPrompt;

/// Resolves a single request. Exactly one event is posted back, a failed
/// reply becomes `ResponderFailed` rather than an error.
async fn reply_worker(
    responder: Arc<ResponderBox>,
    prompt: ResponderPrompt,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    match responder.get_reply(prompt).await {
        Ok(message) => {
            tx.send(Event::ResponderMessage(message))?;
        }
        Err(err) => {
            tracing::error!(
                responder = responder.name().to_string(),
                error = ?err,
                "Responder failed to produce a reply"
            );
            tx.send(Event::ResponderFailed())?;
        }
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        responder: ResponderBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let responder = Arc::new(responder);

        while let Some(action) = rx.recv().await {
            match action {
                Action::ResponderRequest(prompt) => {
                    let worker_tx = tx.clone();
                    let worker_responder = responder.clone();
                    tokio::spawn(async move {
                        return reply_worker(worker_responder, prompt, worker_tx).await;
                    });
                }
            }
        }

        return Ok(());
    }
}
