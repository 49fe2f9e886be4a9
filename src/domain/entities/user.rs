//! User entity, the single resource exposed by the service.

/// A persisted user record.
///
/// The `id` is always assigned by the store on insert and never taken from a
/// client payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, name: String, email: String, age: i64) -> Self {
        Self {
            id,
            name,
            email,
            age,
        }
    }
}

/// Input data for inserting a user. Carries no id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl NewUser {
    /// Attaches a store-assigned id, producing the persisted entity.
    pub fn with_id(self, id: i64) -> User {
        User::new(id, self.name, self.email, self.age)
    }
}
