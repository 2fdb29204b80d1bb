use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use event_reminder_domain::{User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        if !find_by(&self.users, |u| u.email == user.email).is_empty() {
            return Err(anyhow::Error::msg(format!(
                "A user with email {} already exists",
                user.email
            )));
        }
        insert(user, &self.users);
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        save(user, &self.users);
        Ok(())
    }

    async fn delete(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        Ok(delete(user_id, &self.users))
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        Ok(find(user_id, &self.users))
    }

    async fn find_many(&self, user_ids: &[ID]) -> anyhow::Result<Vec<User>> {
        Ok(find_by(&self.users, |u| user_ids.contains(&u.id)))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(find_by(&self.users, |u| u.email == email).into_iter().next())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let mut users = find_by(&self.users, |_| true);
        users.sort_by(|u1, u2| u2.created.cmp(&u1.created));
        Ok(users)
    }
}
