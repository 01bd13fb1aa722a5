// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for insertion and rollback.
//!
//! These tests validate that the context correctly:
//! - Stores every mark in canonical order, in both grid directions
//! - Treats repeated marks as no-ops and rejects contradictions
//! - Restores ledger, grid, pairing index and statistics on undo
//! - Counts statistics by level and provenance

mod common;

use common::{pets, zebra, Fixture, TriggerLawyer};
use logic_grid::agents::test::{ExclusionLawyer, ScriptedFinder};
use logic_grid::agents::ConfirmingLawyer;
use logic_grid::catalog::{Verb, MAX_LEVELS};
use logic_grid::context::{MarkError, MarkStatus};
use logic_grid::engine::{run_job, Job, SolverEvent};
use logic_grid::ledger::{MarkKind, MarkRequest};
use logic_grid::state::LevelCounter;

#[test]
fn test_canonical_order() {
    let mut f = Fixture::new(zebra());
    let (milk, dog, red) = (f.n("Milk"), f.n("Dog"), f.n("Red"));

    // Higher type first in both requests
    f.ctx.add_mark_by_user(milk, Verb::Is, dog).unwrap();
    f.ctx.add_mark_by_user(dog, Verb::IsNot, red).unwrap();

    for mark in f.ctx.ledger().iter() {
        let t1 = f.catalog.noun(mark.noun1).type_num;
        let t2 = f.catalog.noun(mark.noun2).type_num;
        assert!(t1 < t2, "mark {} stored as ({}, {})", mark.num, t1, t2);
    }
    assert_eq!(f.ctx.mark(0).noun1, dog);
    assert_eq!(f.ctx.mark(0).noun2, milk);
    assert_eq!(f.ctx.grid_verb(dog, milk), Verb::Is);
    assert_eq!(f.ctx.grid_verb(milk, dog), Verb::Is);
    assert_eq!(f.ctx.grid_verb(red, dog), Verb::IsNot);
}

#[test]
fn test_mark_names() {
    let mut f = Fixture::new(pets());
    let (red, cat, dog) = (f.n("Red"), f.n("Cat"), f.n("Dog"));
    let mut lawyer = ConfirmingLawyer;

    f.ctx.add_mark_by_user(cat, Verb::Is, red).unwrap();
    assert_eq!(f.ctx.mark(0).name, "You entered 'O' for Red and Cat.");

    let guess = MarkRequest::new(MarkKind::Level, MAX_LEVELS, red, Verb::IsNot, dog).reason("Only one pet.");
    f.ctx.add_mark(&mut lawyer, guess).unwrap();
    assert_eq!(f.ctx.mark(1).name, "I assumed 'X' for Red and Dog.\nOnly one pet.");
    assert!(f.ctx.mark(1).guess);
    assert_eq!(f.ctx.ledger().num_guesses(), 1);
}

#[test]
fn test_idempotent_insert() {
    let mut f = Fixture::new(pets());
    let (red, cat) = (f.n("Red"), f.n("Cat"));

    let first = f.ctx.add_mark_by_user(red, Verb::Is, cat).unwrap();
    let second = f.ctx.add_mark_by_user(cat, Verb::Is, red).unwrap();
    assert_eq!(first, MarkStatus::Entered(0));
    assert_eq!(second, MarkStatus::AlreadyPresent(0));
    assert_eq!(f.ctx.ledger().len(), 1);
    assert_eq!(f.viewer.count("MarkAdded"), 1);
}

#[test]
fn test_contradiction_rejected() {
    let mut f = Fixture::new(pets());
    let (red, cat) = (f.n("Red"), f.n("Cat"));
    let mut lawyer = ConfirmingLawyer;
    f.ctx.add_mark_by_user(red, Verb::Is, cat).unwrap();
    let stats_before = f.ctx.stats().total_marks().clone();

    let request = MarkRequest::new(MarkKind::Level, 1, red, Verb::IsNot, cat).reason("Because.");
    let err = f.ctx.add_mark(&mut lawyer, request).unwrap_err();
    assert_eq!(err, MarkError::Contradiction { existing: 0 });
    assert_eq!(f.ctx.ledger().len(), 1);
    assert_eq!(f.ctx.grid_verb(red, cat), Verb::Is);
    assert_eq!(f.ctx.stats().total_marks(), &stats_before);

    let last = f.viewer.events().pop().unwrap();
    assert_eq!(
        last.event,
        SolverEvent::Contradiction {
            message: "Level 1 requests a mark that would contradict mark 0!\nBecause.".into(),
            existing: 0
        }
    );

    let err = f.ctx.add_mark_by_user(cat, Verb::IsNot, red).unwrap_err();
    assert_eq!(err, MarkError::Contradiction { existing: 0 });
    let last = f.viewer.events().pop().unwrap();
    assert_eq!(last.event.message(), Some("The User requests a mark that would contradict mark 0!"));
}

#[test]
fn test_rule_conflict_is_silent() {
    let mut f = Fixture::new(pets());
    let (red, cat) = (f.n("Red"), f.n("Cat"));
    let mut lawyer = ConfirmingLawyer;
    f.ctx.add_mark_by_user(red, Verb::Is, cat).unwrap();
    f.viewer.clear();

    let request = MarkRequest::new(MarkKind::Rule, 1, red, Verb::IsNot, cat).reference(1, ' ');
    let err = f.ctx.add_mark(&mut lawyer, request).unwrap_err();
    assert_eq!(err, MarkError::RuleConflict { existing: 0 });
    assert_eq!(f.ctx.ledger().len(), 1);
    assert_eq!(f.ctx.grid_verb(red, cat), Verb::Is);
    assert!(f.viewer.events().is_empty());
}

#[test]
#[should_panic(expected = "Same-type nouns")]
fn test_same_type_is_fatal() {
    let mut f = Fixture::new(pets());
    let (red, blue) = (f.n("Red"), f.n("Blue"));
    let _ = f.ctx.add_mark_by_user(red, Verb::Is, blue);
}

#[test]
fn test_round_trip() {
    let mut f = Fixture::new(zebra());
    let mut lawyer = ConfirmingLawyer;
    let (red, cat, tea, dog) = (f.n("Red"), f.n("Cat"), f.n("Tea"), f.n("Dog"));

    f.ctx.add_mark_by_user(red, Verb::IsNot, dog).unwrap();
    let before_marks = f.ctx.stats().total_marks().clone();
    let before_pairs = f.ctx.stats().total_pairs().clone();
    let before_cells = f.ctx.grid().occupied();
    let before_slots = f.ctx.pairing().filled();

    let level = MarkRequest::new(MarkKind::Level, 2, red, Verb::Is, cat);
    let law = MarkRequest::new(MarkKind::Law, 2, cat, Verb::Is, tea).reference(3, ' ');
    let rule = MarkRequest::new(MarkKind::Rule, 2, red, Verb::IsNot, tea).reference(1, ' ');
    f.ctx.add_mark(&mut lawyer, level).unwrap();
    f.ctx.add_mark(&mut lawyer, law).unwrap();
    assert_eq!(f.ctx.add_mark(&mut lawyer, rule), Ok(MarkStatus::Entered(3)));
    assert_eq!(f.ctx.ledger().len(), 4);
    assert_eq!(f.ctx.pairing().filled(), 4);

    f.ctx.undo_to_last_level_mark();

    assert_eq!(f.ctx.ledger().len(), 1);
    assert_eq!(f.ctx.grid().occupied(), before_cells);
    assert_eq!(f.ctx.pairing().filled(), before_slots);
    assert_eq!(f.ctx.partner(red, 2), None);
    assert_eq!(f.ctx.stats().total_marks(), &before_marks);
    assert_eq!(f.ctx.stats().total_pairs(), &before_pairs);
    assert_eq!(f.ctx.ledger().num_pairs(), 0);
    assert!(f.ctx.num_valid() <= f.ctx.ledger().len());
    assert_eq!(f.viewer.count("MarkRemoved"), 3);
}

#[test]
fn test_repeated_validation_counts_once() {
    let mut f = Fixture::new(zebra());
    let (red, cat) = (f.n("Red"), f.n("Cat"));
    let mut finder = ScriptedFinder::new(Vec::new());
    let mut lawyer = ExclusionLawyer::new();
    f.ctx.add_mark_by_user(red, Verb::Is, cat).unwrap();

    let first = run_job(Job::ValidateLast, &mut f.ctx, &mut finder, &mut lawyer).unwrap();
    assert_eq!(first.marks, 5);
    assert_eq!(first.num_valid, 5);
    let validated = f.viewer.count("MarkValidated");

    for _ in 0..30 {
        run_job(Job::ValidateLast, &mut f.ctx, &mut finder, &mut lawyer).unwrap();
        assert!(f.ctx.num_valid() <= f.ctx.ledger().len());
    }
    assert_eq!(f.ctx.num_valid(), 5);
    assert_eq!(f.ctx.num_solutions(), 0);
    assert!(!f.ctx.is_solved());
    assert_eq!(f.viewer.count("MarkValidated"), validated);
}

#[test]
fn test_undo_stops_at_user_mark() {
    let mut f = Fixture::new(zebra());
    let mut lawyer = ConfirmingLawyer;
    let (red, cat, dog, tea) = (f.n("Red"), f.n("Cat"), f.n("Dog"), f.n("Tea"));

    f.ctx.add_mark_by_user(red, Verb::Is, cat).unwrap();
    f.ctx.add_mark_by_user(dog, Verb::Is, tea).unwrap();
    f.ctx
        .add_mark(&mut lawyer, MarkRequest::new(MarkKind::Law, 1, red, Verb::IsNot, tea).reference(1, ' '))
        .unwrap();

    f.ctx.undo_to_last_user_mark();
    assert_eq!(f.ctx.ledger().len(), 1);
    assert_eq!(f.ctx.grid_verb(dog, tea), Verb::Maybe);
    assert_eq!(f.ctx.grid_verb(red, cat), Verb::Is);

    f.ctx.undo_to_last_user_mark();
    assert!(f.ctx.ledger().is_empty());

    // Undoing an empty ledger is a no-op
    f.ctx.undo_to_last_user_mark();
    f.ctx.undo_to_last_level_mark();
    assert!(f.ctx.ledger().is_empty());
    assert_eq!(f.ctx.num_valid(), 0);
    assert_eq!(f.viewer.count("MarkRemoved"), 3);
}

#[test]
fn test_rule_statistics() {
    let mut f = Fixture::new(zebra());
    let mut lawyer = ConfirmingLawyer;
    let (red, blue) = (f.n("Red"), f.n("Blue"));
    let pets = [f.n("Cat"), f.n("Dog"), f.n("Fish")];
    let level = 2;

    f.ctx
        .add_mark(&mut lawyer, MarkRequest::new(MarkKind::Rule, level, red, Verb::Is, pets[0]).reference(2, ' '))
        .unwrap();
    for &pet in &pets[1..] {
        f.ctx
            .add_mark(&mut lawyer, MarkRequest::new(MarkKind::Rule, level, red, Verb::IsNot, pet).reference(2, ' '))
            .unwrap();
    }
    f.ctx
        .add_mark(&mut lawyer, MarkRequest::new(MarkKind::Rule, level, blue, Verb::IsNot, pets[0]).reference(1, ' '))
        .unwrap();

    let k = 4;
    let marks = f.ctx.stats().marks(level);
    assert_eq!(marks.marks_by_rule, k);
    assert_eq!(marks.sum, k);
    assert_eq!(marks.marks_by_level, 0);
    let pairs = f.ctx.stats().pairs(level);
    assert_eq!(pairs.marks_by_rule, 1);
    assert_eq!(pairs.sum, 1);
    assert_eq!(f.ctx.stats().total_marks().sum, k);
    assert_eq!(f.ctx.stats().marks(1), &LevelCounter::default());

    assert_eq!(f.ctx.hits().rule_hits(2), 3);
    assert_eq!(f.ctx.hits().rules_touched(), 2);
    assert_eq!(f.ctx.hits().rule_hits_total(), 4);
}

#[test]
fn test_fact_hits_on_record() {
    let mut f = Fixture::new(zebra());
    let mut lawyer = ConfirmingLawyer;
    let (dog, milk, red, fish) = (f.n("Dog"), f.n("Milk"), f.n("Red"), f.n("Fish"));

    let request = MarkRequest::new(MarkKind::Level, 1, dog, Verb::Is, milk).facts(vec![1]);
    f.ctx.add_mark(&mut lawyer, request).unwrap();
    let request = MarkRequest::new(MarkKind::Level, 1, red, Verb::IsNot, fish).facts(vec![1, 2]);
    f.ctx.add_mark(&mut lawyer, request).unwrap();

    assert_eq!(f.ctx.hits().fact_hits(1), 2);
    assert_eq!(f.ctx.hits().facts_touched(), 2);
    assert_eq!(f.ctx.hits().fact_hits_total(), 3);

    // Hits survive undo
    f.ctx.undo_to_last_level_mark();
    assert_eq!(f.ctx.hits().fact_hits_total(), 3);
}

#[test]
fn test_rule_triggers_placers_and_facts() {
    let mut f = Fixture::new(zebra());
    let mut lawyer = TriggerLawyer { rule: 1, fact: Some(2) };
    let (red, cat, dog, fish) = (f.n("Red"), f.n("Cat"), f.n("Dog"), f.n("Fish"));

    let request = MarkRequest::new(MarkKind::Level, 1, red, Verb::Is, cat);
    assert_eq!(f.ctx.add_mark(&mut lawyer, request), Ok(MarkStatus::Entered(0)));

    // Two rule marks, triggered by mark 0 at its level
    assert_eq!(f.ctx.ledger().len(), 3);
    for id in 1..3 {
        let mark = f.ctx.mark(id);
        assert_eq!(mark.kind, MarkKind::Rule);
        assert_eq!(mark.level, 1);
        assert_eq!(mark.triggered_by, Some(0));
        assert_eq!(mark.reference_label(), "1a");
    }
    assert!(f.ctx.mark(1).name.ends_with("Rule 1a on mark 0, one pet each."));
    assert_eq!(f.ctx.grid_verb(red, dog), Verb::IsNot);
    assert_eq!(f.ctx.grid_verb(red, fish), Verb::IsNot);
    assert_eq!(f.ctx.num_valid(), 3);
    assert!(!f.ctx.is_fact_enabled(2));
    assert_eq!(f.viewer.count("PlacersUpdated"), 1);

    // Removing the trigger reports and then clears its placers
    f.ctx.undo_to_last_level_mark();
    assert!(f.ctx.ledger().is_empty());
    assert!(f.ctx.is_fact_enabled(2));
    assert!(!f.ctx.mark(0).has_placers());
    let removed = f.viewer.events().pop().unwrap();
    assert_eq!(removed.event.name(), "MarkRemoved");
    assert_eq!(removed.event.message(), Some("I removed mark 0.\nReset placers Red placed."));
    assert_eq!(f.ctx.num_valid(), 0);
}

#[test]
fn test_rule_triggers_disabled() {
    use logic_grid::config::{SolverConfig, Spot};

    let mut f = Fixture::with_config(zebra(), SolverConfig::quiet().with(Spot::Triggers, false));
    let mut lawyer = TriggerLawyer { rule: 1, fact: None };
    let (red, cat) = (f.n("Red"), f.n("Cat"));

    f.ctx.add_mark(&mut lawyer, MarkRequest::new(MarkKind::Level, 1, red, Verb::Is, cat)).unwrap();
    assert_eq!(f.ctx.ledger().len(), 1);
}

/// Red is Cat; Red is Dog is then impossible; retracting restores an empty grid.
#[test]
fn test_color_pet_scenario() {
    let mut f = Fixture::new(pets());
    let (red, cat, dog, blue) = (f.n("Red"), f.n("Cat"), f.n("Dog"), f.n("Blue"));

    assert_eq!(f.ctx.add_mark_by_user(red, Verb::Is, cat), Ok(MarkStatus::Entered(0)));
    assert_eq!(f.ctx.grid_verb(red, cat), Verb::Is);
    assert_eq!(f.ctx.partner(red, 2), Some(cat));
    assert_eq!(f.ctx.partner(cat, 1), Some(red));
    assert_eq!(f.ctx.partner(dog, 1), None);

    assert!(!f.ctx.nouns_compatible_with(red, dog));
    assert!(!f.ctx.nouns_compatible_with(blue, cat));
    assert!(f.ctx.nouns_compatible_with(blue, dog));

    // Once the lawyer has run, the conflict is a recorded contradiction
    let mut finder = ScriptedFinder::new(Vec::new());
    let mut lawyer = ExclusionLawyer::new();
    let report = run_job(Job::ValidateLast, &mut f.ctx, &mut finder, &mut lawyer).unwrap();
    assert_eq!(report.marks, 4);
    assert_eq!(report.solutions, 1);
    assert!(!report.stopped);
    assert_eq!(f.ctx.add_mark_by_user(red, Verb::Is, dog), Err(MarkError::Contradiction { existing: 1 }));

    run_job(Job::Retract, &mut f.ctx, &mut finder, &mut lawyer).unwrap();
    assert!(f.ctx.ledger().is_empty());
    assert_eq!(f.ctx.grid().occupied(), 0);
    assert_eq!(f.ctx.pairing().filled(), 0);
    assert_eq!(f.ctx.grid_verb(red, cat), Verb::Maybe);
}
