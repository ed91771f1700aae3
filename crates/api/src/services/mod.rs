//! Business services sitting between the handlers and the repositories.
//!
//! Services own the partial-update merge, password hashing and response
//! shaping. They only reach the database through a [`Repository`] trait
//! object, so tests can swap in an in-memory store.
//!
//! [`Repository`]: typewriter_db::repositories::Repository

pub mod activity;
pub mod score;
pub mod text;
pub mod user;

pub use activity::ActivityService;
pub use score::ScoreService;
pub use text::TextService;
pub use user::UserService;

#[cfg(test)]
pub(crate) mod testing {
    use typewriter_core::error::CoreError;
    use typewriter_core::password::PasswordHasher;

    /// Reversible stand-in for Argon2 so service tests stay fast.
    #[derive(Debug)]
    pub struct PlainHasher;

    impl PasswordHasher for PlainHasher {
        fn hash(&self, password: &str) -> Result<String, CoreError> {
            Ok(format!("hashed:{password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> bool {
            hash == format!("hashed:{password}")
        }
    }

    #[derive(Debug)]
    pub struct BrokenHasher;

    impl PasswordHasher for BrokenHasher {
        fn hash(&self, _password: &str) -> Result<String, CoreError> {
            Err(CoreError::Hashing("memory cost too high".into()))
        }

        fn verify(&self, _password: &str, _hash: &str) -> bool {
            false
        }
    }
}
