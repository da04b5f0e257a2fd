//! End-to-end railway workflow: changing a user's password.
//!
//! Run with: cargo run --example change_password

use railway::prelude::*;

value_object! {
    /// A user's password.
    pub struct Password(String);
}

#[derive(Debug, Clone)]
struct User {
    name: String,
}

impl User {
    fn is_correct_password(&self, old_password: &Password) -> bool {
        // Stand-in for a real credential check.
        !old_password.value().is_empty()
    }

    fn change_password(self, _new_password: &Password) -> Outcome<User, String> {
        Outcome::with_value(self)
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User({})", self.name)
    }
}

struct UserRepo;

impl UserRepo {
    fn find(&self, username: &str) -> Outcome<User, String> {
        Outcome::with_value(User {
            name: username.to_string(),
        })
    }

    fn update(&self, user: User) -> Outcome<User, String> {
        Outcome::with_value(user)
    }
}

fn change_password(
    repo: &UserRepo,
    username: Option<String>,
    old_password: Option<Password>,
    new_password: Option<Password>,
) -> Outcome<User, String> {
    username
        .outcome_or("Username cannot be empty".to_string())
        .flat_map(|name| {
            old_password
                .outcome_or("Old password cannot be empty".to_string())
                .flat_map(|old| {
                    new_password
                        .outcome_or("New password cannot be empty".to_string())
                        .flat_map(|new| {
                            repo.find(&name)
                                .ensure(
                                    |user| user.is_correct_password(&old),
                                    "Invalid password".to_string(),
                                )
                                .flat_map(|user| user.change_password(&new))
                                .flat_map(|user| repo.update(user))
                        })
                })
        })
        .on_failure_with(|error| println!("Password could not be changed: {error}"))
}

fn main() {
    let repo = UserRepo;

    let changed = change_password(
        &repo,
        Some("alice".to_string()),
        Some(Password::new("old-secret")),
        Some(Password::new("new-secret")),
    );
    println!("{changed}");

    // A missing input derails the whole chain; nothing after the first
    // failure runs.
    let derailed = change_password(&repo, Some("alice".to_string()), None, None);
    println!("{derailed}");
}
