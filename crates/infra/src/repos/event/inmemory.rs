use super::IEventRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use event_reminder_domain::{Event, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        insert(e, &self.events);
        Ok(())
    }

    async fn save(&self, e: &Event) -> anyhow::Result<()> {
        save(e, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<Event>> {
        Ok(find(event_id, &self.events))
    }

    async fn find_many(&self, event_ids: &[ID]) -> anyhow::Result<Vec<Event>> {
        Ok(find_by(&self.events, |e| event_ids.contains(&e.id)))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Event>> {
        let mut events = find_by(&self.events, |_| true);
        events.sort_by_key(|e| e.event_date);
        Ok(events)
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Event>> {
        Ok(find_by(&self.events, |e| e.user_id == *user_id))
    }

    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<Event>> {
        Ok(delete(event_id, &self.events))
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.events, |e| e.user_id == *user_id))
    }
}
