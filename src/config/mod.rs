// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver configuration snapshot.
//!
//! Options are a fixed enumerated set ([`Spot`]) plus one switch per search
//! level and per law. They are read from a [`Locker`] once, when the snapshot
//! is built; keys the solver does not recognize are never read.
//!
//! # Pause table
//!
//! Whether the worker suspends after a notification depends on the event,
//! the mark it concerns, and whether the operator asked to stop at the next
//! pause point:
//!
//! ```text
//! Started         message present && (next || all)
//! Stopped         never
//! LevelChanged    next || all || level
//! SolutionFound   next || all || solution
//! MarkAdded       next || all || mark || (trigger && kind == Rule) || (guess && level == MAX_LEVELS)
//! MarkRemoved     next || all || mark || (placers && mark has placers)
//! MarkValidated   next || all || mark
//! Contradiction,
//! *Violation      next || all || violation
//! PlacersUpdated  next || all || placers
//! ```

pub mod locker;

pub use locker::{Locker, MemoryLocker};

use crate::catalog::{MAX_LAWS, MAX_LEVELS};
use crate::engine::SolverEvent;
use crate::ledger::{Mark, MarkKind};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

/// Named boolean options. The static string is the locker key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, IntoStaticStr)]
pub enum Spot {
    #[strum(serialize = "okPauseAll")]
    PauseAll,
    #[strum(serialize = "okPauseLevel")]
    PauseLevel,
    #[strum(serialize = "okPauseSolution")]
    PauseSolution,
    #[strum(serialize = "okPauseViolation")]
    PauseViolation,
    #[strum(serialize = "okPauseMark")]
    PauseMark,
    #[strum(serialize = "okPauseTrigger")]
    PauseTrigger,
    #[strum(serialize = "okPauseGuess")]
    PauseGuess,
    #[strum(serialize = "okPausePlacers")]
    PausePlacers,
    /// Run rule checks while validating.
    #[strum(serialize = "okRules")]
    Rules,
    /// Let rules enter the marks they force.
    #[strum(serialize = "okTriggers")]
    Triggers,
}

impl Spot {
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn default_value(self) -> bool {
        matches!(self, Spot::PauseSolution | Spot::Rules | Spot::Triggers)
    }

    pub fn is_pause(self) -> bool {
        !matches!(self, Spot::Rules | Spot::Triggers)
    }
}

/// Locker key for a level switch; level 0 switches all levels.
pub fn level_key(level: usize) -> String {
    format!("okLevel{level}")
}

/// Locker key for a law switch; law 0 switches all laws.
pub fn law_key(law: usize) -> String {
    format!("okLaw{law}")
}

/// Immutable snapshot of the solver options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    spots: [bool; Spot::COUNT],
    levels: [bool; MAX_LEVELS + 1],
    laws: [bool; MAX_LAWS + 1],
}

impl SolverConfig {
    /// Read every recognized key once.
    pub fn load(locker: &dyn Locker) -> Self {
        let mut config = Self::default();
        for spot in Spot::iter() {
            config.spots[spot as usize] = locker.get_bool(spot.key(), spot.default_value());
        }
        for (i, on) in config.levels.iter_mut().enumerate() {
            *on = locker.get_bool(&level_key(i), true);
        }
        for (i, on) in config.laws.iter_mut().enumerate() {
            *on = locker.get_bool(&law_key(i), true);
        }
        config
    }

    /// Defaults with every pause disabled, for callers that drive the solver synchronously.
    pub fn quiet() -> Self {
        let mut config = Self::default();
        for spot in Spot::iter().filter(|s| s.is_pause()) {
            config.spots[spot as usize] = false;
        }
        config
    }

    /// Write the snapshot back to a locker.
    pub fn save(&self, locker: &mut dyn Locker) {
        for spot in Spot::iter() {
            locker.set_bool(spot.key(), self.is_on(spot));
        }
        for (i, on) in self.levels.iter().enumerate() {
            locker.set_bool(&level_key(i), *on);
        }
        for (i, on) in self.laws.iter().enumerate() {
            locker.set_bool(&law_key(i), *on);
        }
    }

    pub fn is_on(&self, spot: Spot) -> bool {
        self.spots[spot as usize]
    }

    pub fn with(mut self, spot: Spot, on: bool) -> Self {
        self.spots[spot as usize] = on;
        self
    }

    pub fn with_level(mut self, level: usize, on: bool) -> Self {
        self.levels[level] = on;
        self
    }

    pub fn with_law(mut self, law: usize, on: bool) -> Self {
        self.laws[law] = on;
        self
    }

    pub fn rules_enabled(&self) -> bool {
        self.is_on(Spot::Rules)
    }

    pub fn triggers_enabled(&self) -> bool {
        self.is_on(Spot::Triggers)
    }

    /// Whether level `level` (1-based) may run. Switch 0 overrides all levels.
    pub fn level_enabled(&self, level: usize) -> bool {
        self.levels[0] && self.levels.get(level).copied().unwrap_or(false)
    }

    /// Whether law `law` (1-based) may run. Switch 0 overrides all laws.
    pub fn law_enabled(&self, law: usize) -> bool {
        self.laws[0] && self.laws.get(law).copied().unwrap_or(false)
    }

    /// Whether the worker should suspend after announcing `event`.
    ///
    /// `mark` is the ledger slot the event refers to, if any. `next` is the
    /// operator's request to stop at the next pause point.
    pub fn pauses_on(&self, event: &SolverEvent, mark: Option<&Mark>, next: bool) -> bool {
        let any = next || self.is_on(Spot::PauseAll);
        match event {
            SolverEvent::Started { message } => message.is_some() && any,
            SolverEvent::Stopped { .. } => false,
            SolverEvent::LevelChanged { .. } => any || self.is_on(Spot::PauseLevel),
            SolverEvent::SolutionFound { .. } => any || self.is_on(Spot::PauseSolution),
            SolverEvent::MarkAdded { .. } => {
                any || self.is_on(Spot::PauseMark)
                    || mark.is_some_and(|m| {
                        (self.is_on(Spot::PauseTrigger) && m.kind == MarkKind::Rule)
                            || (self.is_on(Spot::PauseGuess) && m.level == MAX_LEVELS)
                    })
            }
            SolverEvent::MarkRemoved { .. } => {
                any || self.is_on(Spot::PauseMark)
                    || (self.is_on(Spot::PausePlacers) && mark.is_some_and(Mark::has_placers))
            }
            SolverEvent::MarkValidated { .. } => any || self.is_on(Spot::PauseMark),
            SolverEvent::Contradiction { .. }
            | SolverEvent::FactViolation { .. }
            | SolverEvent::RuleViolation { .. }
            | SolverEvent::LawViolation { .. } => any || self.is_on(Spot::PauseViolation),
            SolverEvent::PlacersUpdated { .. } => any || self.is_on(Spot::PausePlacers),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        let mut spots = [false; Spot::COUNT];
        for spot in Spot::iter() {
            spots[spot as usize] = spot.default_value();
        }
        Self {
            spots,
            levels: [true; MAX_LEVELS + 1],
            laws: [true; MAX_LAWS + 1],
        }
    }
}
