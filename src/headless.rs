//! Headless runner - display commands as JSON lines
//!
//! Every command the console issues is serialized as one JSON object per
//! line. Ticks are driven by a tokio interval until Ctrl-C or the optional
//! tick limit.

use crate::config::Config;
use crate::console::Console;
use crate::error::{ConsoleError, Result};
use crate::indicator::{ChannelId, IndicatorVisual, RandomSource, RecoloredIcon};
use crate::layout::{FeedId, SplitId};
use crate::surface::{DisplaySurface, SurfaceCommand};
use std::io::{self, Write};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Surface writing each command as a JSON line.
///
/// `DisplaySurface` methods cannot fail, so the first write error is kept
/// and reported by `check`. Later commands are dropped once an error is held.
pub struct JsonLinesSurface<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesSurface<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flush and report the first failed write, if any
    pub fn check(&mut self) -> Result<()> {
        if let Some(source) = self.error.take() {
            return Err(ConsoleError::Output { source });
        }
        self.writer
            .flush()
            .map_err(|source| ConsoleError::Output { source })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, command: SurfaceCommand) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.writer, &command)
            .map_err(io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"));
        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}

impl<W: Write> DisplaySurface for JsonLinesSurface<W> {
    fn set_indicator_visual(
        &mut self,
        channel: ChannelId,
        visual: &IndicatorVisual,
        icon: Option<&RecoloredIcon>,
    ) {
        self.emit(SurfaceCommand::IndicatorVisual {
            channel,
            visual: *visual,
            icon: icon.cloned(),
        });
    }

    fn set_feed_visible(&mut self, feed: FeedId, visible: bool) {
        self.emit(SurfaceCommand::FeedVisible { feed, visible });
    }

    fn set_stack_visible(&mut self, visible: bool) {
        self.emit(SurfaceCommand::StackVisible { visible });
    }

    fn set_split_shares(&mut self, split: SplitId, shares: &[u32]) {
        self.emit(SurfaceCommand::SplitShares {
            split,
            shares: shares.to_vec(),
        });
    }
}

/// Run headless against stdout
pub async fn run(config: Config, random: Box<dyn RandomSource>, ticks: Option<u64>) -> Result<()> {
    run_with(&config, random, ticks, io::stdout()).await?;
    Ok(())
}

/// Run headless against any writer. Returns the writer and the tick count.
pub async fn run_with<W: Write>(
    config: &Config,
    random: Box<dyn RandomSource>,
    ticks: Option<u64>,
    writer: W,
) -> Result<(W, u64)> {
    let mut surface = JsonLinesSurface::new(writer);
    let mut console = Console::initialize(
        config.channels(),
        config.feeds(),
        config.theme,
        random,
        &mut surface,
    )?;
    surface.check()?;

    let mut interval = tokio::time::interval(config.tick_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // First tick completes immediately
    interval.tick().await;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    info!(
        "Headless runner started ({} ms interval)",
        config.indicators.tick_interval_ms
    );

    let mut count = 0u64;
    loop {
        if ticks.is_some_and(|limit| count >= limit) {
            info!("Tick limit reached ({})", count);
            break;
        }

        tokio::select! {
            _ = interval.tick() => {
                let flipped = console.tick(&mut surface)?;
                surface.check()?;
                count += 1;
                debug!("Tick {}: {} indicator(s) flipped", count, flipped.len());
            }
            _ = &mut ctrl_c => {
                info!("Interrupted, stopping after {} tick(s)", count);
                break;
            }
        }
    }

    Ok((surface.into_inner(), count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::ScriptedRandom;
    use serde_json::Value;

    fn lines(bytes: &[u8]) -> Vec<Value> {
        std::str::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_surface_writes_one_line_per_command() {
        let mut surface = JsonLinesSurface::new(Vec::new());
        surface.set_stack_visible(false);
        surface.set_split_shares(SplitId::Horizontal, &[1, 0]);
        surface.check().unwrap();

        let out = lines(&surface.into_inner());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0]["command"], "stack_visible");
        assert_eq!(out[1]["split"], "horizontal");
        assert_eq!(out[1]["shares"], serde_json::json!([1, 0]));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_surfaces_on_check() {
        let mut surface = JsonLinesSurface::new(FailingWriter);
        surface.set_stack_visible(true);
        assert!(matches!(
            surface.check(),
            Err(ConsoleError::Output { .. })
        ));
        // Error is reported once
        assert!(surface.check().is_ok());
    }

    #[tokio::test]
    async fn test_run_stops_after_tick_limit() {
        let mut config = Config::default();
        config.indicators.tick_interval_ms = 1;

        let random = Box::new(ScriptedRandom::new([false]));
        let (out, count) = run_with(&config, random, Some(2), Vec::new())
            .await
            .unwrap();
        assert_eq!(count, 2);

        let out = lines(&out);
        // Initialization: 3 indicators, 3 feeds, stack, 2 splits
        let init = 3 + 3 + 1 + 2;
        // Each tick re-commits every indicator
        assert_eq!(out.len(), init + 2 * 3);
        assert!(out[init..]
            .iter()
            .all(|c| c["command"] == "indicator_visual" && c["visual"]["is_on"] == false));
    }

    #[tokio::test]
    async fn test_zero_ticks_only_initializes() {
        let config = Config::default();
        let random = Box::new(ScriptedRandom::default());
        let (out, count) = run_with(&config, random, Some(0), Vec::new())
            .await
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(lines(&out).len(), 9);
    }
}
