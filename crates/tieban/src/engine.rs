//! The full calculation: every stage chained over one request.

use tracing::{debug, debug_span};

use crate::config::EngineConfig;
use crate::core::gender::Gender;
use crate::core::pillar::FourPillars;
use crate::error::Result;
use crate::hexagram::HexagramPair;
use crate::stage::{
    self, BodyLife, CornerEntry, EightHexagramRoll, FourGate, SecretResult, SecretRule, TimeSlice,
    YearStep,
};

/// What a reading is calculated from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    /// Year, month, day and hour pillars.
    pub pillars: FourPillars,
    /// Querent's gender.
    #[cfg_attr(feature = "serde", serde(default))]
    pub gender: Gender,
}

impl Request {
    /// Creates a request.
    #[must_use]
    pub const fn new(pillars: FourPillars, gender: Gender) -> Self {
        Self { pillars, gender }
    }
}

/// Everything one calculation produces.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reading {
    /// The request this reading answers.
    pub request: Request,
    /// Time slice and its arithmetic.
    pub time_slice: TimeSlice,
    /// Body-life pair and its arithmetic.
    pub body_life: BodyLife,
    /// Base number of the body-life pair.
    pub base_number: u32,
    /// The eight-hexagram roll.
    pub roll: EightHexagramRoll,
    /// The eight-corner roll.
    pub corners: [CornerEntry; 8],
    /// Secret numbers of the rolled pairs, in roll order.
    pub secrets: [SecretResult; 4],
}

impl Reading {
    /// The body-life pair every roll starts from.
    #[must_use]
    pub const fn base_pair(&self) -> HexagramPair {
        self.body_life.pair
    }
}

/// Runs calculations with fixed settings.
///
/// # Example
///
/// ```
/// use tieban::{Engine, FourPillars, Gender, Request};
///
/// let pillars = FourPillars::parse("壬子", "丙午", "庚午", "壬午").unwrap();
/// let reading = Engine::default().calculate(&Request::new(pillars, Gender::Male)).unwrap();
/// assert_eq!(reading.time_slice.ke, 8);
/// assert_eq!(reading.base_number, 2790);
/// assert_eq!(reading.secrets[0].m, 3980);
/// ```
#[derive(Clone, Debug)]
pub struct Engine<R = FourGate> {
    year_step: YearStep,
    rule: R,
}

impl Engine {
    /// Creates an engine from `config`.
    #[must_use]
    pub const fn new(config: &EngineConfig) -> Self {
        Self {
            year_step: config.year_step(),
            rule: config.secret_rule(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl<R: SecretRule> Engine<R> {
    /// Creates an engine with a custom secret-number rule.
    #[must_use]
    pub const fn with_rule(year_step: YearStep, rule: R) -> Self {
        Self { year_step, rule }
    }

    /// The secret-number rule in use.
    #[must_use]
    pub const fn rule(&self) -> &R {
        &self.rule
    }

    /// Calculates a full reading.
    ///
    /// # Errors
    ///
    /// Returns the first stage error; no partial reading is produced.
    pub fn calculate(&self, request: &Request) -> Result<Reading> {
        let pillars = &request.pillars;
        let span = debug_span!(
            "calculate",
            %pillars,
            gender = ?request.gender,
            rule = self.rule.name()
        );
        let _entered = span.enter();

        let time_slice = stage::time_slice(pillars)?;
        debug!(
            sum = time_slice.sum,
            divisor = time_slice.divisor,
            ke = time_slice.ke,
            "time slice"
        );

        let body_life = stage::body_life(pillars)?;
        let base_number = stage::base_number(body_life.pair);
        debug!(
            pair = %body_life.pair,
            odd_sum = body_life.odd_sum,
            odd_count = body_life.odd_count,
            even_sum = body_life.even_sum,
            base_number,
            "body-life pair"
        );

        let roll = stage::eight_hexagram(
            body_life.pair,
            pillars.year(),
            base_number,
            request.gender,
            self.year_step,
        )?;
        debug!(
            v = roll.step_value,
            m = roll.moving.residue(),
            changed = %roll.entries[1].pair,
            "eight-hexagram roll"
        );

        let corners = stage::eight_corner(body_life.pair);
        debug!(count = corners.len(), "eight-corner roll");

        let secrets = stage::four_gate(&self.rule, &roll.entries, pillars.is_yang_day())?;
        for secret in &secrets {
            debug!(pair = %secret.pair, h = secret.h, y = secret.y, m = secret.m, "secret number");
        }

        Ok(Reading {
            request: *request,
            time_slice,
            body_life,
            base_number,
            roll,
            corners,
            secrets,
        })
    }
}
