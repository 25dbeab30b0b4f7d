pub mod dashboard;
pub mod idea_ops;
pub mod notify_ops;
pub mod registry;
pub mod sop_ops;
pub mod task_ops;

/// Next free ID of the form `<prefix><n>`: one past the highest numeric
/// suffix among `ids` carrying the prefix.
pub(crate) fn next_id<'a>(prefix: &str, ids: impl Iterator<Item = &'a str>) -> String {
    let max = ids
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|rest| rest.parse::<usize>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{}", prefix, max + 1)
}
