//! Deterministic quiz logic and data types shared across clients.
//!
//! `quiz-core` defines the canonical rules of the geography quiz and exposes
//! pure APIs that the runtime and offline tools reuse:
//!
//! - [`geo`] resolves a representative coordinate for a country outline
//! - [`animator`] steps the globe orientation toward a target
//! - [`session`] owns the selection and scoring state machine
//! - [`controls`] applies directional and zoom adjustments to the view
//!
//! All session mutation flows through [`session::QuizMachine`], and supporting
//! crates depend on the types re-exported here.
pub mod animator;
pub mod config;
pub mod controls;
pub mod error;
pub mod geo;
pub mod rng;
pub mod session;

pub use animator::{OrientationAnimator, Step};
pub use config::QuizConfig;
pub use controls::{Control, ViewState};
pub use error::{ErrorSeverity, QuizError};
pub use geo::{
    ArcIndices, ArcPoint, ArcTable, Atlas, Coordinate, CountryRegion, GeometryError, ShapeKind,
    clamp_latitude, resolve_centroid, wrap_longitude,
};
pub use rng::{PcgRng, RngOracle, shuffle};
pub use session::{
    AnswerOutcome, ExhaustiveSession, Feedback, GuessOutcome, Phase, QuizMachine, QuizMode,
    QuizSession, QuizSnapshot, RandomSession, RegionArena, RegionId, Round, SessionError,
    SubmitOutcome, Target,
};
