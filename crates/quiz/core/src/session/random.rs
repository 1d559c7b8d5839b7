//! Multiple-choice mode: identify the highlighted country from a short list.
use crate::config::QuizConfig;
use crate::geo::Atlas;
use crate::rng::{PcgRng, RngOracle, shuffle};

use super::{Feedback, Phase, QuizMachine, SessionError, Target, names_match};

/// One multiple-choice round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    /// 1-based round counter.
    pub number: u32,
    /// Name of the highlighted country.
    pub correct: String,
    /// Candidate names, in shuffled order. Always contains `correct`.
    pub options: Vec<String>,
}

impl Round {
    pub fn is_correct(&self, option: &str) -> bool {
        names_match(&self.correct, option)
    }
}

/// Result of a well-formed answer.
#[derive(Clone, Debug, PartialEq)]
pub enum AnswerOutcome {
    /// The answer was right. `exhausted` is set when no further round could
    /// be generated.
    Correct { answered: String, exhausted: bool },
    Incorrect,
}

#[derive(Clone, Debug)]
pub struct RandomSession<R = PcgRng> {
    machine: QuizMachine,
    rng: R,
    round: Option<Round>,
    rounds_played: u32,
    max_options: usize,
}

impl RandomSession<PcgRng> {
    pub fn seeded(atlas: &Atlas, config: &QuizConfig, seed: u64) -> Self {
        Self::with_rng(atlas, config, PcgRng::new(seed))
    }
}

impl<R: RngOracle> RandomSession<R> {
    pub fn with_rng(atlas: &Atlas, config: &QuizConfig, rng: R) -> Self {
        Self {
            machine: QuizMachine::new(atlas),
            rng,
            round: None,
            rounds_played: 0,
            max_options: config.max_options.max(1),
        }
    }

    pub fn machine(&self) -> &QuizMachine {
        &self.machine
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Activates the session and deals the first round.
    pub fn start(&mut self) -> Result<&Round, SessionError> {
        self.machine.start();
        self.next_round()
    }

    /// Deals a new round from the unselected countries.
    ///
    /// The pool is shuffled and the first `min(max_options, available)`
    /// entries become the options. One of them is chosen as the answer,
    /// marked used and pointed at. An unanswered current round is discarded
    /// and its highlighted country stays used.
    pub fn next_round(&mut self) -> Result<&Round, SessionError> {
        self.machine.ensure_active()?;

        let mut pool = self.machine.arena().available_ids();
        if pool.is_empty() {
            self.round = None;
            self.machine.finish(Phase::Exhausted, Feedback::PoolExhausted);
            return Err(SessionError::ExhaustedPool);
        }

        shuffle(&mut pool, &mut self.rng);
        pool.truncate(self.max_options.min(pool.len()));
        let answer = pool[self.rng.below(pool.len())];

        let options: Vec<String> = pool
            .iter()
            .filter_map(|&id| self.machine.arena().get(id))
            .map(|region| region.name.clone())
            .collect();
        let Target { name, .. } = self.machine.offer_as_target(answer)?.clone();

        self.rounds_played += 1;
        Ok(self.round.insert(Round {
            number: self.rounds_played,
            correct: name,
            options,
        }))
    }

    /// Checks `option` against the current round.
    ///
    /// A correct answer scores and immediately deals the next round. An
    /// incorrect one only sets feedback.
    pub fn answer(&mut self, option: &str) -> Result<AnswerOutcome, SessionError> {
        let option = option.trim();
        if option.is_empty() {
            return Err(SessionError::InvalidGuess);
        }
        self.machine.ensure_active()?;

        let round = self.round.as_ref().ok_or(SessionError::NoActiveRound)?;
        if !round.is_correct(option) {
            self.machine.reject(Feedback::TryAgain);
            return Ok(AnswerOutcome::Incorrect);
        }

        let answered = round.correct.clone();
        self.machine.confirm_answer()?;

        let exhausted = match self.next_round() {
            Ok(_) => false,
            Err(SessionError::ExhaustedPool) => true,
            Err(err) => return Err(err),
        };

        Ok(AnswerOutcome::Correct {
            answered,
            exhausted,
        })
    }

    /// Picks the option at `index` of the current round.
    pub fn choose(&mut self, index: usize) -> Result<AnswerOutcome, SessionError> {
        let option = self
            .round
            .as_ref()
            .ok_or(SessionError::NoActiveRound)?
            .options
            .get(index)
            .cloned()
            .ok_or(SessionError::InvalidGuess)?;
        self.answer(&option)
    }
}
