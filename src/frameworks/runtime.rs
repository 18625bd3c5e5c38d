// Framework bootstrap for the headless simulation driver.

use crate::domain::entities::Avatar;
use crate::domain::state::{Rect, Vec2};
use crate::domain::tuning::avatar::AvatarTuning;
use crate::domain::tuning::projectile::ProjectileTuning;
use crate::frameworks::config;
use crate::frameworks::demo::DemoScript;
use crate::interface_adapters::assets::AssetManifest;
use crate::interface_adapters::clock::SteppedClock;
use crate::interface_adapters::hostiles::TrainingDummy;
use crate::interface_adapters::protocol::FrameDto;
use crate::interface_adapters::terrain::ArenaTerrain;
use crate::use_cases::{FrameUpdate, Session, StopReason, session_task};

use std::io::{Error, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Everything the driver needs, resolved before the first tick.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub tick_interval: Duration,
    pub tick_limit: Option<u64>,
    pub manifest: AssetManifest,
    pub script: DemoScript,
}

impl RunSettings {
    pub fn from_env() -> Result<Self> {
        let manifest = match config::asset_manifest_path() {
            Some(path) => {
                let source = std::fs::read_to_string(&path).inspect_err(|e| {
                    tracing::error!(
                        path = %path.display(),
                        error = %e,
                        "failed to read asset manifest"
                    );
                })?;
                AssetManifest::from_toml_str(&source).map_err(Error::other)?
            }
            None => AssetManifest::builtin(),
        };

        let script = match config::demo_script_path() {
            Some(path) => {
                let source = std::fs::read_to_string(&path).inspect_err(|e| {
                    tracing::error!(
                        path = %path.display(),
                        error = %e,
                        "failed to read demo script"
                    );
                })?;
                DemoScript::from_json(&source).map_err(Error::other)?
            }
            None => DemoScript::builtin(),
        };

        Ok(Self {
            tick_interval: config::tick_interval(),
            tick_limit: config::demo_ticks(),
            manifest,
            script,
        })
    }
}

pub async fn run(settings: RunSettings) -> Result<StopReason> {
    let tick_interval = settings.tick_interval;

    // Construction fails fast on any missing sprite or sound.
    let avatar = Avatar::new(
        Vec2::new(40.0, 220.0),
        AvatarTuning::default(),
        ProjectileTuning::default(),
        &settings.manifest,
        tick_interval,
    )
    .map_err(|e| {
        tracing::error!(error = %e, "failed to load avatar assets");
        Error::other(e)
    })?;

    let terrain = ArenaTerrain {
        left: 0.0,
        right: 320.0,
        ceiling: 0.0,
        floor: 240.0,
    };
    let hostiles = vec![
        TrainingDummy::new(Rect::new(200.0, 210.0, 20.0, 30.0), 1, 20),
        TrainingDummy::new(Rect::new(280.0, 210.0, 20.0, 30.0), 1, 20),
    ];
    let session = Session::new(
        avatar,
        hostiles,
        terrain,
        SteppedClock::default(),
        tick_interval,
    );

    // frame_tx/rx: latest frame for observers.
    let initial = session.frame();
    let (frame_tx, frame_rx) = watch::channel::<FrameUpdate>(initial);
    let shutdown = Arc::new(Notify::new());

    tokio::spawn(stop_on_ctrl_c(shutdown.clone()));
    tokio::spawn(log_frames(frame_rx));

    let handle = tokio::spawn(session_task(
        session,
        settings.script,
        frame_tx,
        tick_interval,
        shutdown,
        settings.tick_limit,
    ));
    let (session, reason) = handle.await.map_err(Error::other)?;

    let avatar = session.avatar();
    tracing::info!(
        ?reason,
        ticks = session.tick(),
        health = avatar.health(),
        fuel = avatar.fuel(),
        dummies_left = session
            .hostiles()
            .iter()
            .filter(|d| !d.is_destroyed())
            .count(),
        "demo finished"
    );
    Ok(reason)
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();
    let settings = RunSettings::from_env()?;
    tracing::debug!(
        tick_interval_ms = settings.tick_interval.as_millis(),
        tick_limit = ?settings.tick_limit,
        "runtime configured"
    );
    run(settings).await.map(|_| ())
}

async fn stop_on_ctrl_c(shutdown: Arc<Notify>) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("ctrl-c received, stopping");
        shutdown.notify_one();
    }
}

async fn log_frames(mut frame_rx: watch::Receiver<FrameUpdate>) {
    while frame_rx.changed().await.is_ok() {
        let dto = {
            let frame = frame_rx.borrow_and_update();
            if frame.tick % config::FRAME_LOG_EVERY != 0 {
                continue;
            }
            FrameDto::from(&*frame)
        };
        match serde_json::to_string(&dto) {
            Ok(json) => tracing::info!(tick = dto.tick, frame = %json, "frame"),
            Err(e) => tracing::warn!(error = %e, "failed to serialize frame"),
        }
    }
}
