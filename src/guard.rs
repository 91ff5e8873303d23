/// First id in `guard_ids` that is already present on the page.
///
/// A module installs only when this returns `None`; each module lists its
/// own canvas id plus any canvas it must not coexist with.
pub fn install_blocker<'a>(guard_ids: &[&'a str], exists: impl Fn(&str) -> bool) -> Option<&'a str> {
    guard_ids.iter().copied().find(|id| exists(id))
}
