mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use event_reminder_domain::{Event, ID};
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &Event) -> anyhow::Result<()>;
    async fn save(&self, e: &Event) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<Event>>;
    async fn find_many(&self, event_ids: &[ID]) -> anyhow::Result<Vec<Event>>;
    /// All events, soonest first
    async fn find_all(&self) -> anyhow::Result<Vec<Event>>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Event>>;
    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<Event>>;
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use crate::repos::Repos;
    use chrono::{NaiveDate, TimeZone, Utc};
    use event_reminder_domain::{Event, ID};

    fn event(user_id: &ID, name: &str, date: (i32, u32, u32)) -> Event {
        Event {
            id: Default::default(),
            user_id: user_id.clone(),
            name: name.into(),
            description: None,
            event_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            created: Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn lists_events_by_date() {
        let repos = Repos::create_inmemory();
        let user_id = ID::default();
        let later = event(&user_id, "later", (2026, 12, 24));
        let sooner = event(&user_id, "sooner", (2026, 10, 20));
        repos.events.insert(&later).await.unwrap();
        repos.events.insert(&sooner).await.unwrap();

        let all = repos.events.find_all().await.unwrap();
        assert_eq!(
            all.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["sooner", "later"]
        );
    }

    #[tokio::test]
    async fn deletes_events_of_a_user() {
        let repos = Repos::create_inmemory();
        let user_id = ID::default();
        let other_user_id = ID::default();
        repos.events.insert(&event(&user_id, "a", (2026, 11, 1))).await.unwrap();
        repos.events.insert(&event(&user_id, "b", (2026, 11, 2))).await.unwrap();
        let kept = event(&other_user_id, "c", (2026, 11, 3));
        repos.events.insert(&kept).await.unwrap();

        assert_eq!(repos.events.find_by_user(&user_id).await.unwrap().len(), 2);
        let res = repos.events.delete_by_user(&user_id).await.unwrap();
        assert_eq!(res.deleted_count, 2);
        assert!(repos.events.find_by_user(&user_id).await.unwrap().is_empty());
        assert_eq!(repos.events.find(&kept.id).await.unwrap(), Some(kept));
    }
}
