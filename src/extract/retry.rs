//! Bounded retry for late-hydrated markup

/// Calls `attempt` up to `max_attempts` times, stopping at the first value
///
/// The closure receives the 1-based attempt number. Exhausting the budget is
/// not an error: the result is simply absent. Attempts run back to back with
/// no delay.
///
/// # Example
///
/// ```
/// use gocomics::extract::retry;
///
/// let value = retry(5, |attempt| (attempt == 3).then_some("ready"));
/// assert_eq!(value, Some("ready"));
/// ```
pub fn retry<T, F>(max_attempts: u32, mut attempt: F) -> Option<T>
where
    F: FnMut(u32) -> Option<T>,
{
    for number in 1..=max_attempts {
        if let Some(value) = attempt(number) {
            return Some(value);
        }
        tracing::trace!("Attempt {}/{} came back empty", number, max_attempts);
    }
    None
}
