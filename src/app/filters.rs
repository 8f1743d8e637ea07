//! Browse filtering and sorting logic

use super::App;
use crate::types::*;

/// Match priority for a user against the search query: lower sorts first,
/// None filters the user out. A linear scan over the in-memory snapshot.
pub(crate) fn score_user(user: &User, query_lower: &str) -> Option<u8> {
    if query_lower.is_empty() {
        return Some(3);
    }
    if user.username.to_lowercase().contains(query_lower) {
        return Some(0);
    }
    if user
        .skills_offered
        .iter()
        .any(|s| s.name.to_lowercase().contains(query_lower))
    {
        return Some(1);
    }
    if user
        .location
        .as_deref()
        .is_some_and(|loc| loc.to_lowercase().contains(query_lower))
    {
        return Some(2);
    }
    None
}

/// Filter the user list down to indices matching the query, best match first.
/// The signed-in user is always excluded.
pub(crate) fn filter_users(users: &[User], current_id: Option<i64>, query: &str) -> Vec<usize> {
    let query_lower = query.trim().to_lowercase();
    let mut scored: Vec<(usize, u8)> = users
        .iter()
        .enumerate()
        .filter(|(_, u)| Some(u.id) != current_id)
        .filter_map(|(i, u)| score_user(u, &query_lower).map(|p| (i, p)))
        .collect();
    scored.sort_by_key(|(_, priority)| *priority);
    scored.into_iter().map(|(i, _)| i).collect()
}

pub(crate) fn compare_users(a: &User, b: &User, col: SortColumn) -> std::cmp::Ordering {
    match col {
        SortColumn::Username => a
            .username
            .to_lowercase()
            .cmp(&b.username.to_lowercase()),
        SortColumn::Location => a
            .location
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .cmp(&b.location.as_deref().unwrap_or("").to_lowercase()),
        SortColumn::Offers => a.skills_offered.len().cmp(&b.skills_offered.len()),
        SortColumn::Seeking => a.skills_seeking.len().cmp(&b.skills_seeking.len()),
    }
}

impl App {
    pub fn apply_filters(&mut self) {
        self.filtered_user_indices =
            filter_users(&self.users, self.signed_in_user_id(), &self.search_query);

        // Apply column sorting (list view)
        if let Some(col) = self.sort_column {
            let users = &self.users;
            let dir = self.sort_direction;
            self.filtered_user_indices.sort_by(|&a, &b| {
                let cmp = compare_users(&users[a], &users[b], col);
                if dir == SortDirection::Descending {
                    cmp.reverse()
                } else {
                    cmp
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: i64, name: &str) -> Skill {
        Skill {
            id,
            name: name.to_string(),
            category: String::new(),
        }
    }

    fn user(id: i64, username: &str, location: Option<&str>, offered: &[&str]) -> User {
        User {
            id,
            username: username.to_string(),
            email: format!("{}@example.com", username),
            location: location.map(str::to_string),
            bio: None,
            skills_offered: offered
                .iter()
                .enumerate()
                .map(|(i, n)| skill(i as i64 + 1, n))
                .collect(),
            skills_seeking: Vec::new(),
        }
    }

    #[test]
    fn empty_query_keeps_everyone_but_me() {
        let users = vec![
            user(1, "ada", None, &[]),
            user(2, "grace", None, &[]),
            user(3, "linus", None, &[]),
        ];
        let indices = filter_users(&users, Some(2), "");
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn matches_offered_skill_names_case_insensitively() {
        let users = vec![
            user(1, "ada", None, &["Woodworking"]),
            user(2, "grace", None, &["Baking", "guitar"]),
        ];
        let indices = filter_users(&users, None, "GUI");
        assert_eq!(indices, vec![1]);
    }

    #[test]
    fn username_matches_rank_above_skill_matches() {
        let users = vec![
            user(1, "baker-bob", None, &["Carpentry"]),
            user(2, "ada", None, &["Baking"]),
        ];
        let indices = filter_users(&users, None, "bak");
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn location_is_the_weakest_match() {
        let users = vec![
            user(1, "ada", Some("Porto"), &[]),
            user(2, "porter", None, &[]),
        ];
        let indices = filter_users(&users, None, "port");
        assert_eq!(indices, vec![1, 0]);
    }

    #[test]
    fn no_match_filters_out() {
        let users = vec![user(1, "ada", Some("Lisbon"), &["Chess"])];
        assert!(filter_users(&users, None, "juggling").is_empty());
    }

    #[test]
    fn sorts_by_offer_count() {
        let a = user(1, "ada", None, &["x"]);
        let b = user(2, "bo", None, &["x", "y"]);
        assert_eq!(
            compare_users(&a, &b, SortColumn::Offers),
            std::cmp::Ordering::Less
        );
        assert_eq!(
            compare_users(&a, &b, SortColumn::Username),
            std::cmp::Ordering::Less
        );
    }

    #[test]
    fn missing_location_sorts_before_named_ones() {
        let a = user(1, "ada", None, &[]);
        let b = user(2, "bo", Some("Berlin"), &[]);
        assert_eq!(
            compare_users(&a, &b, SortColumn::Location),
            std::cmp::Ordering::Less
        );
    }
}
