//! Greeting line generation

/// Generate greeting lines for `name`, repeated `max(1, times)` times.
pub fn greet(name: &str, times: u64) -> Vec<String> {
    let times = times.max(1);
    (0..times).map(|_| format!("Hej {name}!")).collect()
}
