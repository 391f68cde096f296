//! App actor - single owner of the console state

use anyhow::{bail, Context};
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::app::state::ConsoleState;
use crate::messages::{Intent, RenderState};

/// App actor that applies panel intents and publishes render snapshots
pub struct AppActor {
    state: ConsoleState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(state: ConsoleState, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor { state, render_tx }
    }

    /// Run the actor message loop until Quit or the UI hangs up
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<Intent>) {
        info!(
            cameras = self.state.cameras().len(),
            alerts = self.state.alerts().len(),
            "console session started"
        );

        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        while let Some(intent) = ui_rx.recv().await {
            if matches!(intent, Intent::Quit) {
                break;
            }
            self.state.apply(intent);
            if self.render_tx.send(self.state.to_render_state()).is_err() {
                break;
            }
        }

        info!("console session ended");
    }
}

/// UI-side end of a running actor: the intent sender, the snapshot
/// receiver and the task itself. Any of them failing means the state
/// owner is gone.
pub struct ActorHandle {
    ui_tx: mpsc::UnboundedSender<Intent>,
    render_rx: mpsc::UnboundedReceiver<RenderState>,
    task: JoinHandle<()>,
}

impl ActorHandle {
    /// Spawn an actor owning `state` on the current runtime
    pub fn spawn(state: ConsoleState) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(AppActor::new(state, render_tx).run(ui_rx));
        ActorHandle {
            ui_tx,
            render_rx,
            task,
        }
    }

    pub fn send(&self, intent: Intent) -> anyhow::Result<()> {
        if self.ui_tx.send(intent).is_err() {
            error!("app actor is no longer receiving intents");
            bail!("app actor stopped");
        }
        Ok(())
    }

    /// Newest snapshot published since the last call, if any
    pub fn latest(&mut self) -> anyhow::Result<Option<RenderState>> {
        let mut latest = None;
        loop {
            match self.render_rx.try_recv() {
                Ok(state) => latest = Some(state),
                Err(TryRecvError::Empty) => return Ok(latest),
                Err(TryRecvError::Disconnected) => {
                    error!("app actor stopped publishing snapshots");
                    bail!("app actor stopped");
                }
            }
        }
    }

    /// Hang up and wait for the actor, surfacing a panic as an error
    pub async fn join(self) -> anyhow::Result<()> {
        drop(self.ui_tx);
        self.task.await.context("app actor failed")
    }
}
