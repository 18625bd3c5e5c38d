use super::session::Session;
use super::types::{FrameUpdate, StopReason};
use crate::domain::ports::{Clock, CollisionResolver, Hostile};
use crate::domain::state::InputFlags;
use crate::domain::systems::combat::CombatEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc, watch};
use tracing::{debug, info};

/// Where the session loop gets the input for each tick.
pub trait InputSource {
    /// Input for the tick about to run. `tick` counts completed ticks and `held` is the
    /// input used on the previous one.
    fn poll(&mut self, tick: u64, held: InputFlags) -> InputFlags;
}

/// Drains the channel and keeps the latest input; an empty channel keeps `held`.
impl InputSource for mpsc::Receiver<InputFlags> {
    fn poll(&mut self, _tick: u64, held: InputFlags) -> InputFlags {
        let mut input = held;
        while let Ok(next) = self.try_recv() {
            input = next;
        }
        input
    }
}

/// Drives a session at a fixed tick rate until shutdown, a tick limit, or avatar death.
pub async fn session_task<H, T, C, I>(
    mut session: Session<H, T, C>,
    mut inputs: I,
    frame_tx: watch::Sender<FrameUpdate>,
    tick_interval: Duration,
    shutdown: Arc<Notify>,
    tick_limit: Option<u64>,
) -> (Session<H, T, C>, StopReason)
where
    H: Hostile,
    T: CollisionResolver,
    C: Clock,
    I: InputSource,
{
    let mut interval = tokio::time::interval(tick_interval);
    let mut input = InputFlags::default();

    let reason = loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break StopReason::Shutdown;
            }
            _ = interval.tick() => {}
        }

        input = inputs.poll(session.tick(), input);

        let report = session.step(input);
        for event in &report.combat {
            if let CombatEvent::AvatarStruck { applied: false, .. } = event {
                continue;
            }
            debug!(tick = report.tick, ?event, "combat");
        }
        for sound in &report.sounds {
            debug!(tick = report.tick, sound = %sound.0, "sound cue");
        }

        // Store the frame even when nobody is subscribed yet.
        frame_tx.send_replace(session.frame());

        if session.avatar().is_dead() {
            break StopReason::AvatarDied;
        }
        if tick_limit.is_some_and(|limit| report.tick >= limit) {
            break StopReason::TickLimit;
        }
    };

    info!(ticks = session.tick(), ?reason, "session stopped");
    (session, reason)
}
