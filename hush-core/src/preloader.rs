//! Two-stage splash timer: hold the overlay opaque, fade it, then report
//! completion exactly once.

use std::time::Duration;

/// Minimum time the overlay stays opaque.
pub const MIN_DISPLAY: Duration = Duration::from_millis(100);
/// Length of the opacity transition.
pub const FADE: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloaderConfig {
    pub min_display: Duration,
    pub fade: Duration,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            min_display: MIN_DISPLAY,
            fade: FADE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderPhase {
    Opaque,
    Fading,
    Hidden,
}

impl PreloaderPhase {
    pub fn is_visible(self) -> bool {
        !matches!(self, PreloaderPhase::Hidden)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderEvent {
    MinDisplayElapsed,
    VideoEnded,
    VideoFailed,
    FadeElapsed,
}

/// Work the host must perform after feeding an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderCommand {
    StartMinDisplay(Duration),
    CancelMinDisplay,
    StartFade(Duration),
    CancelFade,
    /// Invoke the completion callback.
    Complete,
}

#[derive(Clone, Debug)]
pub struct PreloaderMachine {
    config: PreloaderConfig,
    phase: PreloaderPhase,
    started: bool,
    torn_down: bool,
}

impl PreloaderMachine {
    pub fn new(config: PreloaderConfig) -> Self {
        Self {
            config,
            phase: PreloaderPhase::Opaque,
            started: false,
            torn_down: false,
        }
    }

    pub fn phase(&self) -> PreloaderPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == PreloaderPhase::Hidden
    }

    pub fn start(&mut self) -> Vec<PreloaderCommand> {
        if self.started || self.torn_down {
            return Vec::new();
        }
        self.started = true;
        vec![PreloaderCommand::StartMinDisplay(self.config.min_display)]
    }

    pub fn handle(&mut self, event: PreloaderEvent) -> Vec<PreloaderCommand> {
        if self.torn_down {
            return Vec::new();
        }
        match (self.phase, event) {
            (PreloaderPhase::Opaque, PreloaderEvent::MinDisplayElapsed) => {
                self.phase = PreloaderPhase::Fading;
                vec![PreloaderCommand::StartFade(self.config.fade)]
            }
            (PreloaderPhase::Opaque, PreloaderEvent::VideoEnded | PreloaderEvent::VideoFailed) => {
                self.phase = PreloaderPhase::Fading;
                vec![
                    PreloaderCommand::CancelMinDisplay,
                    PreloaderCommand::StartFade(self.config.fade),
                ]
            }
            (PreloaderPhase::Fading, PreloaderEvent::FadeElapsed) => {
                self.phase = PreloaderPhase::Hidden;
                vec![PreloaderCommand::Complete]
            }
            (phase, event) => {
                tracing::trace!(?phase, ?event, "preloader event ignored");
                Vec::new()
            }
        }
    }

    /// Owner is going away: cancel whatever is pending and ignore every
    /// later event.
    pub fn teardown(&mut self) -> Vec<PreloaderCommand> {
        if self.torn_down {
            return Vec::new();
        }
        self.torn_down = true;
        match self.phase {
            PreloaderPhase::Opaque if self.started => vec![PreloaderCommand::CancelMinDisplay],
            PreloaderPhase::Fading => vec![PreloaderCommand::CancelFade],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(commands: &[PreloaderCommand]) -> usize {
        commands.iter().filter(|c| **c == PreloaderCommand::Complete).count()
    }

    fn run(events: &[PreloaderEvent]) -> (PreloaderMachine, usize) {
        let mut machine = PreloaderMachine::new(PreloaderConfig::default());
        let mut done = completions(&machine.start());
        for event in events {
            done += completions(&machine.handle(*event));
        }
        (machine, done)
    }

    #[test]
    fn start_arms_min_display_timer_once() {
        let mut machine = PreloaderMachine::new(PreloaderConfig::default());
        assert_eq!(machine.start(), vec![PreloaderCommand::StartMinDisplay(MIN_DISPLAY)]);
        assert!(machine.start().is_empty());
    }

    #[test]
    fn timeout_path_fades_then_completes_once() {
        let mut machine = PreloaderMachine::new(PreloaderConfig::default());
        machine.start();
        assert_eq!(
            machine.handle(PreloaderEvent::MinDisplayElapsed),
            vec![PreloaderCommand::StartFade(FADE)]
        );
        assert_eq!(machine.phase(), PreloaderPhase::Fading);
        assert_eq!(machine.handle(PreloaderEvent::FadeElapsed), vec![PreloaderCommand::Complete]);
        assert!(machine.is_complete());
        assert!(!machine.phase().is_visible());
    }

    #[test]
    fn video_end_cancels_min_display() {
        let mut machine = PreloaderMachine::new(PreloaderConfig::default());
        machine.start();
        assert_eq!(
            machine.handle(PreloaderEvent::VideoEnded),
            vec![PreloaderCommand::CancelMinDisplay, PreloaderCommand::StartFade(FADE)]
        );
    }

    #[test]
    fn every_trigger_path_completes_exactly_once() {
        use PreloaderEvent::*;
        let paths: [&[PreloaderEvent]; 5] = [
            &[MinDisplayElapsed, FadeElapsed],
            &[VideoEnded, FadeElapsed],
            &[VideoFailed, FadeElapsed],
            &[MinDisplayElapsed, VideoEnded, FadeElapsed, FadeElapsed],
            &[VideoFailed, MinDisplayElapsed, VideoEnded, FadeElapsed, MinDisplayElapsed],
        ];
        for path in paths {
            let (machine, done) = run(path);
            assert_eq!(done, 1, "{path:?}");
            assert!(machine.is_complete());
        }
    }

    #[test]
    fn fade_elapsed_before_fading_is_ignored() {
        let (machine, done) = run(&[PreloaderEvent::FadeElapsed]);
        assert_eq!(done, 0);
        assert_eq!(machine.phase(), PreloaderPhase::Opaque);
    }

    #[test]
    fn teardown_while_fading_cancels_and_never_completes() {
        let mut machine = PreloaderMachine::new(PreloaderConfig::default());
        machine.start();
        machine.handle(PreloaderEvent::MinDisplayElapsed);
        assert_eq!(machine.teardown(), vec![PreloaderCommand::CancelFade]);
        assert!(machine.handle(PreloaderEvent::FadeElapsed).is_empty());
        assert!(!machine.is_complete());
        assert!(machine.teardown().is_empty());
    }

    #[test]
    fn teardown_before_first_timer_cancels_it() {
        let mut machine = PreloaderMachine::new(PreloaderConfig::default());
        machine.start();
        assert_eq!(machine.teardown(), vec![PreloaderCommand::CancelMinDisplay]);
        assert!(machine.handle(PreloaderEvent::MinDisplayElapsed).is_empty());
        assert!(machine.start().is_empty());
    }

    #[test]
    fn teardown_after_completion_is_a_no_op() {
        let (mut machine, _) = run(&[PreloaderEvent::MinDisplayElapsed, PreloaderEvent::FadeElapsed]);
        assert!(machine.teardown().is_empty());
    }
}
