//! Behavioral Pattern: Iterator
//! Example: walking a user collection without exposing its storage
//!
//! Run with: cargo run --bin iterator

use std::fmt;

use crate::error::CatalogError;
use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: u32,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        User {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{name:{} age:{}}}", self.name, self.age)
    }
}

pub trait Collection {
    type Iter<'a>: Iterator
    where
        Self: 'a;

    fn create_iterator(&self) -> Self::Iter<'_>;
}

#[derive(Debug, Clone, Default)]
pub struct UserCollection {
    users: Vec<User>,
}

impl UserCollection {
    pub fn new(users: Vec<User>) -> Self {
        UserCollection { users }
    }

    pub fn add(&mut self, user: User) {
        self.users.push(user);
    }
}

impl Collection for UserCollection {
    type Iter<'a> = UserIterator<'a>;

    fn create_iterator(&self) -> UserIterator<'_> {
        UserIterator {
            index: 0,
            users: &self.users,
        }
    }
}

/// Cursor over a borrowed slice of users.
#[derive(Debug, Clone)]
pub struct UserIterator<'a> {
    index: usize,
    users: &'a [User],
}

impl<'a> UserIterator<'a> {
    pub fn has_next(&self) -> bool {
        self.index < self.users.len()
    }

    pub fn next_user(&mut self) -> Option<&'a User> {
        let user = self.users.get(self.index)?;
        self.index += 1;
        Some(user)
    }
}

impl<'a> Iterator for UserIterator<'a> {
    type Item = &'a User;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_user()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.users.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for UserIterator<'_> {}

pub fn demo(out: &Transcript) -> Result<(), CatalogError> {
    let collection = UserCollection::new(vec![User::new("a", 30), User::new("b", 20)]);

    let mut iterator = collection.create_iterator();
    while iterator.has_next() {
        if let Some(user) = iterator.next_user() {
            out.line(format!("User is {user}"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_visits_in_insertion_order() {
        let mut collection = UserCollection::default();
        collection.add(User::new("a", 30));
        collection.add(User::new("b", 20));

        let mut iterator = collection.create_iterator();
        assert!(iterator.has_next());
        assert_eq!(iterator.next_user().unwrap().name, "a");
        assert_eq!(iterator.next_user().unwrap().name, "b");
        assert!(!iterator.has_next());
        assert!(iterator.next_user().is_none());
    }

    #[test]
    fn test_std_iterator_adapters() {
        let collection = UserCollection::new(vec![
            User::new("a", 30),
            User::new("b", 20),
            User::new("c", 41),
        ]);

        let iterator = collection.create_iterator();
        assert_eq!(iterator.len(), 3);

        let older: Vec<&str> = collection
            .create_iterator()
            .filter(|user| user.age > 25)
            .map(|user| user.name.as_str())
            .collect();
        assert_eq!(older, vec!["a", "c"]);
    }

    #[test]
    fn test_independent_iterators() {
        let collection = UserCollection::new(vec![User::new("a", 30)]);
        let mut first = collection.create_iterator();
        let second = collection.create_iterator();

        first.next();
        assert!(!first.has_next());
        assert!(second.has_next());
    }

    #[test]
    fn test_empty_collection() {
        let collection = UserCollection::default();
        assert!(!collection.create_iterator().has_next());
        assert_eq!(collection.create_iterator().count(), 0);
    }

    #[test]
    fn test_demo_lines() {
        let out = Transcript::new();
        demo(&out).unwrap();
        assert_eq!(
            out.lines(),
            vec!["User is {name:a age:30}", "User is {name:b age:20}"]
        );
    }
}
