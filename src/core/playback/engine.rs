//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink (per loaded track)
//! - command loop + periodic position ticks
//!
//! Emits PlayerEvent back via a channel.
//! No Iced imports.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::{debug, warn};

use super::{LoadId, PlayerCommand, PlayerEvent};
use crate::core::error::EngineError;

pub struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,

    // Current track
    sink: Option<Sink>,
    current_load: Option<LoadId>,

    // Applied to every new sink, not just the current one.
    volume: f32,
    tick: Duration,

    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<PlayerEvent>, tick: Duration) -> Result<Self, EngineError> {
        // rodio 0.21.x: build/open the default output stream via OutputStreamBuilder
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::OutputUnavailable(e.to_string()))?;
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            current_load: None,
            volume: 1.0,
            tick,
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        loop {
            match command_rx.recv_timeout(self.tick) {
                Ok(cmd) => {
                    self.handle_command(cmd);
                    while let Ok(cmd) = command_rx.try_recv() {
                        self.handle_command(cmd);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        debug!("playback thread exiting");
        self.stop_internal();
    }

    fn handle_command(&mut self, cmd: PlayerCommand) {
        debug!(?cmd, "engine command");

        match cmd {
            PlayerCommand::Load { id, path } => {
                if let Err(error) = self.load(id, path) {
                    warn!(load_id = id, %error, "load failed");
                    self.emit(PlayerEvent::Failed {
                        load_id: Some(id),
                        error,
                    });
                }
            }
            PlayerCommand::Play => {
                if let Some(sink) = &self.sink {
                    sink.play();
                }
            }
            PlayerCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                }
            }
            PlayerCommand::Stop => self.stop_internal(),
            PlayerCommand::SetVolume(v) => {
                self.volume = v.clamp(0.0, 1.0);
                if let Some(sink) = &self.sink {
                    sink.set_volume(self.volume);
                }
            }
        }
    }

    fn tick(&mut self) {
        let (Some(sink), Some(load_id)) = (&self.sink, self.current_load) else {
            return;
        };

        if sink.empty() {
            self.emit(PlayerEvent::TrackEnded { load_id });
            self.stop_internal();
            return;
        }

        if !sink.is_paused() {
            let position_ms = sink.get_pos().as_millis() as u64;
            self.emit(PlayerEvent::Position {
                load_id,
                position_ms,
            });
        }
    }

    /// Replace the current track with `path`, paused. `Play` starts it.
    fn load(&mut self, load_id: LoadId, path: PathBuf) -> Result<(), EngineError> {
        self.stop_internal();

        let file = File::open(&path).map_err(|e| EngineError::Open {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let decoder = Decoder::new(BufReader::new(file)).map_err(|e| EngineError::Decode {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let duration_ms = decoder.total_duration().map(|d| d.as_millis() as u64);

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.set_volume(self.volume);
        sink.append(decoder);

        self.current_load = Some(load_id);
        self.sink = Some(sink);

        self.emit(PlayerEvent::Started {
            load_id,
            path,
            duration_ms,
        });
        Ok(())
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.current_load = None;
    }

    fn emit(&self, event: PlayerEvent) {
        // GUI gone means we're shutting down anyway.
        let _ = self.event_tx.send(event);
    }
}
