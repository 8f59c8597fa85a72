use std::path::PathBuf;
use std::time::Duration;

use tokio::time::sleep;

use super::{AppConfig, AppConfigExt, SessionError};
use crate::animation::AnimationController;
use crate::game_log::{LogReader, ReadSummary};
use crate::lamps::LampSink;

/// A running integration: one log, one controller, one lamp sink.
///
/// Each cycle reads the log and dispatches its actions, advances the
/// animation by one frame, then sends the resulting commands to the sink.
pub struct Session<S: LampSink> {
    reader: LogReader,
    controller: AnimationController,
    sink: S,
    tick_interval: Duration,
}

impl<S: LampSink> Session<S> {
    /// Build the controller from the lamps the sink knows about and send the
    /// initial presets. Fails if any of those commands could not be applied.
    pub async fn start(config: &AppConfig, sink: S) -> Result<Self, SessionError> {
        let reader = LogReader::new(PathBuf::from(&config.log_path), config.reader_options());
        Self::with_reader(
            reader,
            &config.color_lamps,
            sink,
            Duration::from_millis(config.tick_interval_ms),
        )
        .await
    }

    pub async fn with_reader(
        reader: LogReader,
        color_lamps: &[String],
        mut sink: S,
        tick_interval: Duration,
    ) -> Result<Self, SessionError> {
        let lamps = sink.lamps();
        for name in color_lamps {
            if !lamps.iter().any(|l| &l.name == name) {
                tracing::warn!(lamp = %name, "configured color lamp not found");
            }
        }

        let mut controller = AnimationController::new(&lamps, color_lamps);
        let initial = controller.drain_commands();
        let failed = sink.apply_all(&initial).await;
        if failed > 0 {
            return Err(SessionError::StartupFlush {
                failed,
                total: initial.len(),
            });
        }

        tracing::info!(
            log = %reader.path().display(),
            lamps = lamps.len(),
            color_lamps = controller.color_lamps().len(),
            "session started"
        );

        Ok(Self {
            reader,
            controller,
            sink,
            tick_interval,
        })
    }

    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// One loop iteration: read and dispatch, tick, flush commands.
    pub async fn run_cycle(&mut self) -> Result<ReadSummary, SessionError> {
        let before = self.controller.game_state();
        let summary = self.reader.read_and_dispatch(&mut self.controller).await?;
        self.controller.tick();

        let after = self.controller.game_state();
        if before != after {
            tracing::info!(from = ?before, to = ?after, "game state changed");
        }

        let commands = self.controller.drain_commands();
        if !commands.is_empty() {
            let failed = self.sink.apply_all(&commands).await;
            tracing::trace!(sent = commands.len(), failed, "lamp commands flushed");
        }
        Ok(summary)
    }

    /// Run until a cycle fails. There is no other way out.
    pub async fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.run_cycle().await?;
            sleep(self.tick_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{GameState, palette};
    use crate::game_log::{LogParser, ReaderOptions};
    use crate::lamps::{LampCommand, LampError, LampInfo, MemoryLamps};
    use chrono::FixedOffset;
    use std::io::Write;

    fn reader_for(path: PathBuf) -> LogReader {
        LogReader::with_parser(
            path,
            LogParser::new(FixedOffset::east_opt(0).unwrap()),
            ReaderOptions::default(),
        )
    }

    async fn session(path: PathBuf) -> Session<MemoryLamps> {
        let sink = MemoryLamps::with_names(&["light1", "light2", "Hallway"]);
        Session::with_reader(
            reader_for(path),
            &["light1".to_string(), "light2".to_string()],
            sink,
            Duration::from_millis(1),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_start_applies_initial_presets() {
        let dir = tempfile::tempdir().unwrap();
        let session = session(dir.path().join("ktane.log")).await;

        let light1 = session.sink().state_by_name("light1").unwrap();
        assert!(light1.on);
        assert_eq!(light1.brightness, palette::MENU.brightness);
        assert_eq!(session.sink().state_by_name("Hallway").unwrap().brightness, 40);
        assert_eq!(session.sink().applied().len(), 3);
    }

    #[tokio::test]
    async fn test_cycles_follow_the_log() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "DEBUG 2015-12-24 18:57:49,884 [State] Enter GameplayState").unwrap();
        file.flush().unwrap();

        let mut session = session(file.path().to_path_buf()).await;
        let summary = session.run_cycle().await.unwrap();
        assert_eq!(summary.dispatched, 1);
        assert_eq!(session.controller().game_state(), GameState::RoundActive);

        let light1 = session.sink().state_by_name("light1").unwrap();
        assert_eq!(
            (light1.hue, light1.saturation),
            (palette::MILD_ORANGE.hue, palette::MILD_ORANGE.saturation)
        );

        writeln!(file, "DEBUG 2015-12-24 18:58:10,000 [Bomb] Boom").unwrap();
        file.flush().unwrap();
        for _ in 0..50 {
            session.run_cycle().await.unwrap();
        }
        assert_eq!(session.controller().game_state(), GameState::PostMortem);
        let light2 = session.sink().state_by_name("light2").unwrap();
        assert_eq!(light2.hue, palette::COOL_WHITE.hue);
        assert_eq!(light2.brightness, 200);
    }

    #[tokio::test]
    async fn test_malformed_line_ends_run() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "nonsense [Bomb] Boom").unwrap();
        file.flush().unwrap();

        let mut session = session(file.path().to_path_buf()).await;
        let err = session.run().await.unwrap_err();
        assert!(matches!(err, SessionError::Reader(_)));
    }

    #[tokio::test]
    async fn test_start_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::with_log_path(dir.path().join("ktane.log").display().to_string());
        config.color_lamps = vec!["Desk".to_string()];

        let session = Session::start(&config, MemoryLamps::with_names(&["Desk", "Ceiling"]))
            .await
            .unwrap();
        assert_eq!(session.controller().color_lamps().len(), 1);
        assert_eq!(session.controller().game_state(), GameState::Menu);
    }

    /// Lists lamps but rejects every state change.
    struct RejectingLamps;

    impl LampSink for RejectingLamps {
        fn lamps(&self) -> Vec<LampInfo> {
            vec![LampInfo::new("1", "light1"), LampInfo::new("2", "Hallway")]
        }

        async fn apply(&mut self, command: &LampCommand) -> Result<(), LampError> {
            Err(LampError::UnknownLamp {
                id: command.lamp.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_failed_initial_presets_abort_start() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::with_log_path(dir.path().join("ktane.log").display().to_string());

        let err = match Session::start(&config, RejectingLamps).await {
            Ok(_) => panic!("session started with rejected lamp commands"),
            Err(e) => e,
        };
        assert!(matches!(
            err,
            SessionError::StartupFlush { failed: 2, total: 2 }
        ));
    }
}
