#![allow(dead_code)]

/// Initialize test logging once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Byte range of the first occurrence of `needle` in `source`.
///
/// Panics if the needle is absent, which in a test means the fixture source
/// was edited without updating the query.
pub fn offsets_of(source: &str, needle: &str) -> (usize, usize) {
    let start = source
        .find(needle)
        .unwrap_or_else(|| panic!("needle {needle:?} not found in fixture source"));
    (start, start + needle.len())
}
