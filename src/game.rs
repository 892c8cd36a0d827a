//! Frame driver
//!
//! `Game` owns the simulation state plus the host collaborators and runs
//! one update and one draw per frame. Input is applied as soon as it is
//! received, which is always between two updates.

use crate::audio::AudioManager;
use crate::highscores::HighScores;
use crate::persistence::PersistentStore;
use crate::platform::{FrameScheduler, InputEvent, InputSource};
use crate::renderer::{self, Renderer};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GamePhase, GameState, TickInput};

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
    pub high_scores: HighScores,
    store: Box<dyn PersistentStore>,
    audio: AudioManager,
    /// Demo mode - the autopilot plays
    autopilot: bool,
    /// Finished rounds since the game was created
    rounds_played: u32,
    /// Score of the most recent finished round
    last_score: Option<u32>,
    /// Highest round score seen by this instance
    session_best: u32,
    frames: u64,
}

impl Game {
    pub fn new(
        seed: u64,
        settings: Settings,
        store: Box<dyn PersistentStore>,
        mut audio: AudioManager,
    ) -> Self {
        let high_scores = HighScores::load(store.as_ref());
        let mut state = GameState::new(seed, &settings);
        state.best_score = high_scores.best;

        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);

        log::info!(
            "Game ready: seed {}, difficulty {}, best {}",
            seed,
            settings.difficulty.as_str(),
            high_scores.best
        );

        Self {
            state,
            settings,
            high_scores,
            store,
            audio,
            autopilot: false,
            rounds_played: 0,
            last_score: None,
            session_best: 0,
            frames: 0,
        }
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.autopilot = on;
    }

    pub fn store(&self) -> &dyn PersistentStore {
        self.store.as_ref()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn last_score(&self) -> Option<u32> {
        self.last_score
    }

    pub fn session_best(&self) -> u32 {
        self.session_best
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Player pressed the flap button
    pub fn flap(&mut self) {
        sim::flap(&mut self.state, &self.settings);
        self.dispatch_events();
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        if event.is_flap() {
            self.flap();
        }
    }

    /// Run one simulation tick
    pub fn update(&mut self) {
        let input = TickInput {
            flap: false,
            autopilot: self.autopilot,
        };
        sim::tick(&mut self.state, &input, &self.settings);
        self.frames += 1;
        self.dispatch_events();
    }

    /// Render the current frame
    pub fn draw(&self, r: &mut dyn Renderer) {
        renderer::draw(&self.state, &self.settings, r);
    }

    /// Input, update and draw for one frame
    pub fn frame(&mut self, input: &mut dyn InputSource, r: &mut dyn Renderer) {
        for event in input.poll() {
            self.handle_input(&event);
        }
        self.update();
        self.draw(r);
    }

    /// Drive frames until the scheduler stops. Returns the number of frames run.
    pub fn run(
        &mut self,
        scheduler: &mut dyn FrameScheduler,
        input: &mut dyn InputSource,
        r: &mut dyn Renderer,
    ) -> u64 {
        let start = self.frames;
        while scheduler.next_frame() {
            self.frame(input, r);
        }
        self.frames - start
    }

    /// Route simulation events to audio and persistence
    fn dispatch_events(&mut self) {
        let events = self.state.drain_events();
        if events.is_empty() {
            return;
        }
        self.audio.play_events(&events);

        for event in &events {
            if let GameEvent::RoundEnded { score, .. } = *event {
                self.rounds_played += 1;
                self.last_score = Some(score);
                self.session_best = self.session_best.max(score);
                self.high_scores.record(score, self.store.as_mut());
                self.state.best_score = self.high_scores.best;
            }
        }
    }
}
