use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::host::InMemoryPage;

#[test]
fn test_effects_run_in_registration_order() {
    let log = Arc::new(std::sync::Mutex::new(Vec::new()));
    let mut effects = ScriptEffectSet::new();
    for label in ["first", "second", "third"] {
        let log = log.clone();
        effects.register(Box::new(move || {
            log.lock().unwrap().push(label);
            Ok(())
        }));
    }
    effects.run_all();
    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    assert!(effects.is_empty());
}

#[test]
fn test_failed_cleanup_does_not_stop_the_drain() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut effects = ScriptEffectSet::new();
    effects.register(Box::new(|| Err(ScriptError::new("element already gone"))));
    let counter_clone = counter.clone();
    effects.register(Box::new(move || {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }));
    effects.run_all();
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert!(effects.is_empty());
}

#[test]
fn test_run_all_on_empty_set_is_a_noop() {
    let mut effects = ScriptEffectSet::new();
    effects.run_all();
    assert!(effects.is_empty());
}

#[test]
fn test_api_append_to_body_reaches_the_host() {
    let mut page = InMemoryPage::new();
    let mut effects = ScriptEffectSet::new();
    let mut api = ScriptApi::new(&mut page, &mut effects);
    api.append_to_body(DetachedElement::new("span", "<span>hi</span>"));
    assert_eq!(page.body().len(), 1);
}

#[test]
fn test_api_on_cleanup_registers_into_the_effect_set() {
    let mut page = InMemoryPage::new();
    let mut effects = ScriptEffectSet::new();
    let mut api = ScriptApi::new(&mut page, &mut effects);
    api.on_cleanup(|| Ok(()));
    assert_eq!(effects.len(), 1);
}

#[test]
fn test_disabled_engine_rejects_script() {
    let mut page = InMemoryPage::new();
    let mut effects = ScriptEffectSet::new();
    let mut api = ScriptApi::new(&mut page, &mut effects);
    let mut engine = DisabledScriptEngine;
    let result = engine.execute("console.log('hi')", &mut api);
    assert!(result.is_err());
}
