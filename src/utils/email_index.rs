use std::collections::HashSet;

/// Case-insensitive email uniqueness index. Rebuilt from the snapshot on
/// load and on reset, kept in step with every registration.
#[derive(Debug, Default)]
pub struct EmailIndex {
    taken: HashSet<String>,
}

#[inline]
fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

impl EmailIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything and index the given emails.
    pub fn rebuild<'a>(&mut self, emails: impl IntoIterator<Item = &'a str>) {
        self.taken = emails.into_iter().map(normalize).collect();
    }

    pub fn is_taken(&self, email: &str) -> bool {
        self.taken.contains(&normalize(email))
    }

    pub fn insert(&mut self, email: &str) {
        self.taken.insert(normalize(email));
    }
}
