//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` patch DTO (all `Option` fields) with an explicit
//!   per-field merge

pub mod card;
pub mod deck;
pub mod playlist;
pub mod review;

/// Overwrite `target` when `incoming` carries a non-empty value.
pub(crate) fn merge_text(target: &mut String, incoming: Option<String>) {
    if let Some(value) = incoming.filter(|v| !v.is_empty()) {
        *target = value;
    }
}

/// Overwrite `target` when `incoming` carries a non-empty list.
pub(crate) fn merge_list<T>(target: &mut Vec<T>, incoming: Option<Vec<T>>) {
    if let Some(value) = incoming.filter(|v| !v.is_empty()) {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_text_ignores_missing_and_empty() {
        let mut target = "kept".to_string();
        merge_text(&mut target, None);
        assert_eq!(target, "kept");
        merge_text(&mut target, Some(String::new()));
        assert_eq!(target, "kept");
        merge_text(&mut target, Some("new".into()));
        assert_eq!(target, "new");
    }

    #[test]
    fn merge_list_ignores_missing_and_empty() {
        let mut target = vec![1, 2];
        merge_list(&mut target, None);
        merge_list(&mut target, Some(vec![]));
        assert_eq!(target, vec![1, 2]);
        merge_list(&mut target, Some(vec![3]));
        assert_eq!(target, vec![3]);
    }
}
