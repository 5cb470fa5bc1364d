//! Macros for ergonomic configuration construction.

/// Build a [`Config`](crate::core::Config) from a literal description.
///
/// States keep the order in which they are written.
///
/// # Example
///
/// ```
/// use pocket_fsm::fsm_config;
///
/// let config = fsm_config! {
///     initial: "idle",
///     "idle" => { "start" => "running" },
///     "running" => { "stop" => "idle", "pause" => "paused" },
///     "paused" => { "resume" => "running" },
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        $(
            $state:literal => {
                $( $event:literal => $target:literal ),* $(,)?
            }
        ),* $(,)?
    ) => {{
        let config = $crate::core::Config::new($initial);
        $(
            let config = config.with_state(
                $state,
                $crate::core::TransitionTable::new() $( .with($event, $target) )*,
            );
        )*
        config
    }};
}
