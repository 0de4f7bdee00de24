use std::sync::Arc;

use crate::core::error::Result;
use crate::features::contacts::dtos::CreateContactDto;
use crate::features::contacts::models::ContactSubmission;
use crate::features::contacts::services::ContactService;
use crate::modules::query_cache::{Entity, QueryClient, QueryKey};

pub struct ContactViewModel {
    service: Arc<ContactService>,
    cache: QueryClient,
}

impl ContactViewModel {
    pub fn new(service: Arc<ContactService>, cache: QueryClient) -> Self {
        Self { service, cache }
    }

    pub async fn contacts(&self, unread_only: bool) -> Result<Arc<Vec<ContactSubmission>>> {
        let service = self.service.clone();
        self.cache
            .fetch(
                QueryKey::new(Entity::Contacts, format!("list:unread={}", unread_only)),
                move || async move { service.get_contacts(unread_only).await },
            )
            .await
    }

    pub async fn contact(&self, id: &str) -> Result<Arc<Option<ContactSubmission>>> {
        let service = self.service.clone();
        let id = id.to_string();
        self.cache
            .fetch(
                QueryKey::new(Entity::Contacts, format!("id={}", id)),
                move || async move { service.get_contact(&id).await },
            )
            .await
    }

    pub async fn submit(&self, dto: CreateContactDto) -> Result<String> {
        let id = self.service.create_contact(dto).await?;
        self.invalidate();
        Ok(id)
    }

    pub async fn mark_read(&self, id: &str) -> Result<()> {
        self.service.mark_contact_read(id).await?;
        self.invalidate();
        Ok(())
    }

    pub async fn reply(&self, id: &str, note: &str) -> Result<()> {
        self.service.reply_to_contact(id, note).await?;
        self.invalidate();
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.service.delete_contact(id).await?;
        self.invalidate();
        Ok(())
    }

    fn invalidate(&self) {
        self.cache.invalidate(&[Entity::Contacts, Entity::Dashboard]);
    }
}
