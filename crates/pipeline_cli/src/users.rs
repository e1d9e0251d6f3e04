use composer::compose3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub active: bool,
}

impl User {
    pub fn new(name: &str, active: bool) -> Self {
        User {
            name: name.to_owned(),
            active,
        }
    }
}

/// The trimmed-down view of a [`User`] that reports are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub name: String,
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new("test", false),
        User::new("test3", false),
        User::new("test2", true),
        User::new("test4", true),
    ]
}

fn filter_active(users: Vec<User>) -> Vec<User> {
    users.into_iter().filter(|user| user.active).collect()
}

fn sort_by_name(mut users: Vec<User>) -> Vec<User> {
    users.sort_by(|a, b| a.name.cmp(&b.name));
    users
}

fn summarize(users: Vec<User>) -> Vec<UserSummary> {
    users
        .into_iter()
        .map(|user| UserSummary { name: user.name })
        .collect()
}

/// Filters to active users, sorts them by name, then strips them down to
/// summaries. Stages are listed outermost first, so the rightmost runs first.
pub fn summarize_active(users: Vec<User>) -> Vec<UserSummary> {
    compose3(summarize, sort_by_name, filter_active)(users)
}
