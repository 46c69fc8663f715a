use quantum_vault_core::{
    Command, InMemoryInventory, InventoryStore, ObjectId, ObjectKind, QuantumObject,
    RandomSource, Session, SessionError, SessionState, StdRandomSource,
};
use std::collections::VecDeque;

/// Replays fixed draws; falls back to the lower bound once exhausted.
struct ScriptedRandom {
    draws: VecDeque<u32>,
}

impl ScriptedRandom {
    fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let value = self.draws.pop_front().unwrap_or(low);
        assert!((low..=high).contains(&value), "scripted draw out of range");
        value
    }
}

fn session_with(objects: &[(ObjectKind, f64)]) -> Session<ScriptedRandom> {
    let mut inventory = InMemoryInventory::new();
    for (index, (kind, stability)) in objects.iter().enumerate() {
        inventory.add(QuantumObject::new(
            ObjectId::from_sequence(index as u32 + 1),
            *kind,
            *stability,
        ));
    }
    Session::with_inventory(ScriptedRandom::new(&[]), inventory)
}

#[test]
fn first_added_object_gets_first_id() {
    let mut session = Session::new(ScriptedRandom::new(&[1, 88]));
    let outcome = session.execute(Command::AddObject).unwrap();

    assert_eq!(outcome.state, SessionState::Running);
    assert_eq!(session.inventory().len(), 1);
    let object = &session.inventory().objects()[0];
    assert_eq!(object.id().as_str(), "QN-0001");
    assert_eq!(object.kind(), ObjectKind::DataPacket);
    assert_eq!(object.stability(), 88.0);
}

#[test]
fn seeded_session_adds_objects_within_ranges() {
    let mut session = Session::new(StdRandomSource::seeded(2026));
    for _ in 0..50 {
        session.execute(Command::AddObject).unwrap();
    }
    let objects = session.inventory().objects();
    assert_eq!(objects.len(), 50);
    assert_eq!(objects[49].id().as_str(), "QN-0050");
    for object in objects {
        assert!((50.0..=100.0).contains(&object.stability()));
    }
}

#[test]
fn list_on_empty_inventory_reports_empty() {
    let mut session = Session::new(ScriptedRandom::new(&[]));
    let outcome = session.execute(Command::ListInventory).unwrap();
    assert_eq!(
        outcome.lines,
        vec!["Inventory is empty. No objects added yet.".to_string()]
    );
}

#[test]
fn list_is_idempotent_without_mutation() {
    let mut session = session_with(&[
        (ObjectKind::DataPacket, 70.0),
        (ObjectKind::AntiMatter, 95.0),
    ]);
    let first = session.execute(Command::ListInventory).unwrap();
    let second = session.execute(Command::ListInventory).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.lines.len(), 3);
    assert_eq!(
        first.lines[2],
        "[QN-0002] Stability: %95.0 | Danger: 10/10 [AntiMatter - VERY DANGEROUS]"
    );
}

#[test]
fn analyze_reports_new_stability() {
    let mut session = session_with(&[(ObjectKind::DarkMatter, 50.0)]);
    let outcome = session
        .execute(Command::AnalyzeObject("QN-0001".to_string()))
        .unwrap();
    assert_eq!(
        outcome.lines,
        vec![
            "Analyzing QN-0001...".to_string(),
            "Analyzing dark matter... Be careful!".to_string(),
            "Analysis complete. New stability: %35.0".to_string(),
        ]
    );
    assert_eq!(outcome.state, SessionState::Running);
}

#[test]
fn analyze_collapse_ends_session_with_report() {
    let mut session = session_with(&[
        (ObjectKind::DataPacket, 80.0),
        (ObjectKind::AntiMatter, 20.0),
    ]);
    let outcome = session
        .execute(Command::AnalyzeObject("QN-0002".to_string()))
        .unwrap();

    assert_eq!(outcome.state, SessionState::TerminatedCollapse);
    assert!(session.is_terminated());
    assert!(outcome
        .lines
        .iter()
        .any(|line| line == "QUANTUM COLLAPSE! Object ID: QN-0002 has exploded!"));
    assert_eq!(outcome.lines.last().unwrap(), "[GAME OVER]");

    for command in [Command::AddObject, Command::Exit] {
        let err = session.execute(command).unwrap_err();
        assert_eq!(err, SessionError::Terminated(SessionState::TerminatedCollapse));
    }
    assert_eq!(session.inventory().len(), 2);
}

#[test]
fn lookup_ignores_id_case() {
    let mut session = session_with(&[(ObjectKind::DarkMatter, 40.0)]);
    let outcome = session
        .execute(Command::EmergencyCooldown("qn-0001".to_string()))
        .unwrap();
    assert_eq!(
        outcome.lines,
        vec!["[QN-0001] Emergency cooldown applied! New stability: %90.0".to_string()]
    );
}

#[test]
fn unknown_id_reports_not_found_and_changes_nothing() {
    let mut session = session_with(&[(ObjectKind::AntiMatter, 30.0)]);
    let before = session.inventory().list();

    for command in [
        Command::AnalyzeObject("QN-0099".to_string()),
        Command::EmergencyCooldown("QN-0099".to_string()),
    ] {
        let outcome = session.execute(command).unwrap();
        assert_eq!(
            outcome.lines,
            vec!["Object with ID 'QN-0099' not found!".to_string()]
        );
        assert_eq!(outcome.state, SessionState::Running);
    }
    assert_eq!(session.inventory().list(), before);
}

#[test]
fn cooldown_on_data_packet_reports_capability_missing() {
    let mut session = session_with(&[(ObjectKind::DataPacket, 30.0)]);
    let outcome = session
        .execute(Command::EmergencyCooldown("QN-0001".to_string()))
        .unwrap();
    assert_eq!(outcome.lines.len(), 1);
    assert!(outcome.lines[0].contains("not a critical object"));
    assert_eq!(session.inventory().objects()[0].stability(), 30.0);
}

#[test]
fn exit_terminates_normally() {
    let mut session = Session::new(ScriptedRandom::new(&[]));
    let outcome = session.execute(Command::Exit).unwrap();
    assert_eq!(outcome.state, SessionState::TerminatedNormal);
    assert_eq!(outcome.lines, vec!["Shift is over. Goodbye!".to_string()]);
    assert_eq!(
        session.execute(Command::ListInventory).unwrap_err(),
        SessionError::Terminated(SessionState::TerminatedNormal)
    );
}

#[test]
fn invalid_menu_token_keeps_running() {
    let mut session = Session::new(ScriptedRandom::new(&[]));
    let outcome = session.handle_menu_input("9", |_| None).unwrap();
    assert_eq!(
        outcome.lines,
        vec!["Invalid choice! Please enter a number between 1 and 5.".to_string()]
    );
    assert_eq!(outcome.state, SessionState::Running);
}

#[test]
fn menu_input_prompts_for_target_and_trims_it() {
    let mut session = session_with(&[(ObjectKind::DataPacket, 60.0)]);
    let mut prompted = None;
    let outcome = session
        .handle_menu_input(" 3 ", |prompt| {
            prompted = Some(prompt.to_string());
            Some("  qn-0001 \n".to_string())
        })
        .unwrap();

    assert_eq!(
        prompted.as_deref(),
        Some("Enter the ID of the object to analyze: ")
    );
    assert_eq!(
        outcome.lines.last().unwrap(),
        "Analysis complete. New stability: %55.0"
    );
}

#[test]
fn menu_cooldown_on_empty_inventory_short_circuits() {
    let mut session = Session::new(ScriptedRandom::new(&[]));
    let outcome = session
        .handle_menu_input("4", |_| panic!("empty inventory must not prompt"))
        .unwrap();
    assert_eq!(
        outcome.lines,
        vec!["Inventory is empty. Nothing to cool.".to_string()]
    );
}

#[test]
fn menu_add_then_exit_walks_full_lifecycle() {
    let mut session = Session::new(ScriptedRandom::new(&[3, 50]));
    let added = session.handle_menu_input("1", |_| None).unwrap();
    assert_eq!(
        added.lines,
        vec!["New AntiMatter added: QN-0001 (Stability: %50)".to_string()]
    );
    let exit = session.handle_menu_input("5", |_| None).unwrap();
    assert_eq!(exit.state, SessionState::TerminatedNormal);
    assert!(session.handle_menu_input("2", |_| None).is_err());
}
