// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use logic_grid::agents::test::RecordingViewer;
use logic_grid::catalog::{Catalog, FactNum, NounId, RuleNum, Verb};
use logic_grid::config::SolverConfig;
use logic_grid::context::{MarkError, SolverContext};
use logic_grid::engine::Lawyer;
use logic_grid::ledger::{MarkId, MarkKind};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Two colors, two pets: a puzzle with exactly two solutions.
pub fn pets() -> Arc<Catalog> {
    Arc::new(
        Catalog::builder()
            .noun_type("Color", &["Red", "Blue"])
            .noun_type("Pet", &["Cat", "Dog"])
            .fact("The cat is not blue.")
            .rule("Each color has one pet.")
            .build()
            .unwrap(),
    )
}

/// Three types of three nouns: 36 solutions without any facts applied.
pub fn zebra() -> Arc<Catalog> {
    Arc::new(
        Catalog::builder()
            .noun_type("Color", &["Red", "Blue", "Green"])
            .noun_type("Pet", &["Cat", "Dog", "Fish"])
            .noun_type("Drink", &["Tea", "Milk", "Water"])
            .fact("The dog drinks milk.")
            .fact("The red house has no fish.")
            .rule("Each color has one pet.")
            .rule("Neighbors differ.")
            .build()
            .unwrap(),
    )
}

/// A context over `catalog` with a recording viewer and every pause disabled.
pub struct Fixture {
    pub ctx: SolverContext,
    pub viewer: Arc<RecordingViewer>,
    pub catalog: Arc<Catalog>,
}

impl Fixture {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, SolverConfig::quiet())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: SolverConfig) -> Self {
        let viewer = Arc::new(RecordingViewer::new());
        let ctx = SolverContext::new(Arc::clone(&catalog), config, viewer.clone());
        Self { ctx, viewer, catalog }
    }

    pub fn n(&self, name: &str) -> NounId {
        self.catalog.find_noun(name).unwrap()
    }
}

/// Poll until `cond` holds, failing the test after a few seconds.
pub fn wait_until(cond: impl Fn() -> bool) {
    for _ in 0..2500 {
        if cond() {
            return;
        }
        thread::sleep(Duration::from_millis(2));
    }
    panic!("condition not reached in time");
}

/// Lawyer that rejects one positive pair as a fact violation and confirms everything else.
pub struct FactLawyer {
    pub noun1: NounId,
    pub noun2: NounId,
    pub fact: FactNum,
}

impl Lawyer for FactLawyer {
    fn validate(&mut self, ctx: &mut SolverContext, mark: MarkId) -> Result<(), MarkError> {
        let m = ctx.mark(mark);
        let pair = (m.noun1, m.noun2);
        if m.verb == Verb::Is && (pair == (self.noun1, self.noun2) || pair == (self.noun2, self.noun1)) {
            return Err(ctx.report_fact_violation(mark, self.fact));
        }
        ctx.confirm_mark(mark);
        Ok(())
    }
}

/// Lawyer that runs one rule on every positive non-rule mark.
///
/// The rule excludes the other nouns of noun2's type from noun1, places
/// noun1, and disables the fact it was given.
pub struct TriggerLawyer {
    pub rule: RuleNum,
    pub fact: Option<FactNum>,
}

impl Lawyer for TriggerLawyer {
    fn validate(&mut self, ctx: &mut SolverContext, mark: MarkId) -> Result<(), MarkError> {
        let (kind, noun1, verb, noun2) = {
            let m = ctx.mark(mark);
            (m.kind, m.noun1, m.verb, m.noun2)
        };
        if kind != MarkKind::Rule && verb == Verb::Is {
            if let Some(fact) = self.fact {
                ctx.disable_fact(mark, fact);
            }
            let type2 = ctx.catalog().noun(noun2).type_num;
            let others: Vec<NounId> = ctx
                .catalog()
                .nouns_of(type2)
                .iter()
                .copied()
                .filter(|&x| x != noun2)
                .collect();
            let rule = self.rule;
            for other in others {
                ctx.add_mark_by_rule(self, mark, rule, 'a', noun1, Verb::IsNot, other, "one pet each.")?;
            }
            let text = format!("{} placed", ctx.catalog().noun(noun1));
            ctx.add_placer(mark, rule, noun1, text);
            ctx.announce_placers(mark, rule);
        }
        ctx.confirm_mark(mark);
        Ok(())
    }
}
