//! Compiles the accessor file the generator wrote for `fixtures/models/user.rs`.

mod common {
    pub mod ids {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct UserId(pub u64);
    }
}

#[path = "../fixtures/models/user.rs"]
mod user;

fn main() {
    let mut user = user::User::new(7, "ada");
    assert_eq!(*user.id(), common::ids::UserId(7));
    assert_eq!(user.name(), "ada");
    assert!(!user.has_password());

    user.set_name("grace".to_string());
    user.extend(std::time::Duration::from_secs(60));
    assert_eq!(user.name(), "grace");
    assert_eq!(user.ttl().as_secs(), 60);
}
