use super::*;

#[test]
fn guard_starts_ready() {
    assert_eq!(SubmitGuard::default().phase, SubmitPhase::Ready);
}

#[test]
fn first_submit_proceeds() {
    let mut guard = SubmitGuard::default();
    assert_eq!(guard.begin(Some("Guardar".to_owned())), SubmitDecision::Proceed);
    assert_eq!(guard.phase, SubmitPhase::Processing);
}

#[test]
fn repeated_submits_are_suppressed() {
    let mut guard = SubmitGuard::default();
    let decisions: Vec<_> = (0..5).map(|_| guard.begin(Some("Guardar".to_owned()))).collect();
    let proceeded = decisions.iter().filter(|d| **d == SubmitDecision::Proceed).count();
    assert_eq!(proceeded, 1);
    assert_eq!(decisions[0], SubmitDecision::Proceed);
}

#[test]
fn reset_restores_original_label_and_starts_new_cycle() {
    let mut guard = SubmitGuard::default();
    guard.begin(Some("Guardar".to_owned()));
    guard.begin(Some("Procesando...".to_owned()));
    assert_eq!(guard.reset(), Some("Guardar".to_owned()));
    assert_eq!(guard.phase, SubmitPhase::Ready);
    assert_eq!(guard.begin(None), SubmitDecision::Proceed);
}

#[test]
fn reset_when_ready_is_noop() {
    let mut guard = SubmitGuard::default();
    assert_eq!(guard.reset(), None);
}

#[test]
fn reset_without_captured_label_restores_empty() {
    let mut guard = SubmitGuard::default();
    guard.begin(None);
    assert_eq!(guard.reset(), Some(String::new()));
}
