// Host-side tests for install guards.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod guard {
    include!("../src/guard.rs");
}

use constants::*;
use guard::install_blocker;
use std::collections::HashSet;

/// Mimics a page: `install` adds `id` unless a guard id is already there.
fn install(page: &mut HashSet<&'static str>, id: &'static str, guards: &[&'static str]) -> bool {
    if install_blocker(guards, |g| page.contains(g)).is_some() {
        return false;
    }
    page.insert(id);
    true
}

#[test]
fn empty_page_has_no_blocker() {
    assert_eq!(install_blocker(&FALLBACK_GUARD_IDS, |_| false), None);
}

#[test]
fn blocker_names_the_present_canvas() {
    let found = install_blocker(&FALLBACK_GUARD_IDS, |id| id == MODEL_CANVAS_ID);
    assert_eq!(found, Some(MODEL_CANVAS_ID));
}

#[test]
fn second_install_is_a_no_op() {
    let mut page = HashSet::new();
    assert!(install(&mut page, SPHERE_CANVAS_ID, &SPHERE_GUARD_IDS));
    assert!(!install(&mut page, SPHERE_CANVAS_ID, &SPHERE_GUARD_IDS));
    assert_eq!(page.len(), 1);
}

#[test]
fn fallback_yields_to_model_backdrop() {
    let mut page = HashSet::new();
    assert!(install(&mut page, MODEL_CANVAS_ID, &MODEL_GUARD_IDS));
    assert!(!install(&mut page, FALLBACK_CANVAS_ID, &FALLBACK_GUARD_IDS));
    assert!(!page.contains(FALLBACK_CANVAS_ID));
}

#[test]
fn sphere_field_coexists_with_backdrops() {
    let mut page = HashSet::new();
    assert!(install(&mut page, FALLBACK_CANVAS_ID, &FALLBACK_GUARD_IDS));
    assert!(install(&mut page, SPHERE_CANVAS_ID, &SPHERE_GUARD_IDS));
    assert!(install(&mut page, MODEL_CANVAS_ID, &MODEL_GUARD_IDS));
    assert_eq!(page.len(), 3);
}

#[test]
fn every_module_guards_its_own_canvas() {
    assert!(MODEL_GUARD_IDS.contains(&MODEL_CANVAS_ID));
    assert!(FALLBACK_GUARD_IDS.contains(&FALLBACK_CANVAS_ID));
    assert!(SPHERE_GUARD_IDS.contains(&SPHERE_CANVAS_ID));
}

#[test]
fn fallback_guard_includes_model_backdrop() {
    assert!(FALLBACK_GUARD_IDS.contains(&MODEL_CANVAS_ID));
    // The model backdrop never yields to the fallback
    assert!(!MODEL_GUARD_IDS.contains(&FALLBACK_CANVAS_ID));
}

#[test]
fn fallback_installed_first_does_not_block_model() {
    let mut page = HashSet::new();
    assert!(install(&mut page, FALLBACK_CANVAS_ID, &FALLBACK_GUARD_IDS));
    assert!(install(&mut page, MODEL_CANVAS_ID, &MODEL_GUARD_IDS));
    assert!(!install(&mut page, MODEL_CANVAS_ID, &MODEL_GUARD_IDS));
}
