use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::error::Result;
use crate::features::contacts::dtos::CreateContactDto;
use crate::features::contacts::models::ContactSubmission;
use crate::modules::document_store::{Collection, Repository};
use crate::shared::constants::DEFAULT_CONTACT_SUBJECT;
use crate::shared::timestamp;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewContact<'a> {
    #[serde(flatten)]
    fields: &'a CreateContactDto,
    is_read: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadFlag {
    is_read: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Reply<'a> {
    is_read: bool,
    replied_at: DateTime<Utc>,
    reply_note: &'a str,
}

pub struct ContactService {
    repository: Repository,
}

impl ContactService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Submissions newest first, optionally only unread ones
    pub async fn get_contacts(&self, unread_only: bool) -> Result<Vec<ContactSubmission>> {
        let mut contacts: Vec<ContactSubmission> =
            self.repository.get_all(Collection::Contacts).await?;

        if unread_only {
            contacts.retain(|c| !c.is_read);
        }
        contacts.sort_by_key(|c| Reverse(timestamp::or_epoch(c.created_at)));

        Ok(contacts)
    }

    pub async fn get_unread_contacts(&self) -> Result<Vec<ContactSubmission>> {
        self.get_contacts(true).await
    }

    pub async fn get_contact(&self, id: &str) -> Result<Option<ContactSubmission>> {
        Ok(self.repository.get_by_id(Collection::Contacts, id).await?)
    }

    /// Store a submission as unread
    pub async fn create_contact(&self, mut dto: CreateContactDto) -> Result<String> {
        if dto.subject.as_deref().is_none_or(|s| s.trim().is_empty()) {
            dto.subject = Some(DEFAULT_CONTACT_SUBJECT.to_string());
        }

        let id = self
            .repository
            .create(
                Collection::Contacts,
                &NewContact {
                    fields: &dto,
                    is_read: false,
                },
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to store contact submission: {:?}", e);
                e
            })?;

        tracing::info!("Contact submission received: id={}", id);
        Ok(id)
    }

    pub async fn mark_contact_read(&self, id: &str) -> Result<()> {
        self.repository
            .update(Collection::Contacts, id, &ReadFlag { is_read: true })
            .await
            .map_err(|e| {
                tracing::error!("Failed to mark contact {} read: {:?}", id, e);
                e
            })?;
        Ok(())
    }

    /// Record that a reply was sent outside the system; also marks it read
    pub async fn reply_to_contact(&self, id: &str, note: &str) -> Result<()> {
        let reply = Reply {
            is_read: true,
            replied_at: Utc::now(),
            reply_note: note,
        };

        self.repository
            .update(Collection::Contacts, id, &reply)
            .await
            .map_err(|e| {
                tracing::error!("Failed to record reply to contact {}: {:?}", id, e);
                e
            })?;

        tracing::info!("Reply recorded for contact {}", id);
        Ok(())
    }

    pub async fn delete_contact(&self, id: &str) -> Result<()> {
        self.repository
            .remove(Collection::Contacts, id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete contact {}: {:?}", id, e);
                e
            })?;

        tracing::info!("Contact deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::document_store::{DocumentStore, InMemoryDocumentStore};
    use crate::shared::test_helpers::memory_repository;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use std::sync::Arc;

    fn dto() -> CreateContactDto {
        CreateContactDto {
            name: Name().fake(),
            email: FreeEmail().fake(),
            phone: None,
            company: Some("Acme Foods".to_string()),
            country: None,
            subject: None,
            message: "Please send a quote for 20 tons.".to_string(),
            product_name: Some("Jasmine Rice".to_string()),
        }
    }

    #[tokio::test]
    async fn test_submission_stored_unread_with_default_subject() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let service = ContactService::new(Repository::new(store.clone()));

        let id = service.create_contact(dto()).await.unwrap();

        let raw = store.get(Collection::Contacts, &id).await.unwrap().unwrap();
        assert_eq!(raw.data["isRead"], false);
        assert_eq!(raw.data["subject"], DEFAULT_CONTACT_SUBJECT);
        assert!(!raw.data.contains_key("phone"));

        let unread = service.get_unread_contacts().await.unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].product_name.as_deref(), Some("Jasmine Rice"));
    }

    #[tokio::test]
    async fn test_mark_read_and_reply() {
        let service = ContactService::new(memory_repository());
        let first = service.create_contact(dto()).await.unwrap();
        let second = service.create_contact(dto()).await.unwrap();

        service.mark_contact_read(&first).await.unwrap();
        let unread = service.get_unread_contacts().await.unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].id, second);

        service
            .reply_to_contact(&second, "Quote sent by email")
            .await
            .unwrap();
        let replied = service.get_contact(&second).await.unwrap().unwrap();
        assert!(replied.is_read);
        assert!(replied.is_replied());
        assert_eq!(replied.reply_note.as_deref(), Some("Quote sent by email"));
        assert!(service.get_unread_contacts().await.unwrap().is_empty());
        assert_eq!(service.get_contacts(false).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_document_without_read_flag_counts_as_unread() {
        let store = Arc::new(InMemoryDocumentStore::new());
        store
            .insert(
                Collection::Contacts,
                serde_json::json!({"name": "Legacy", "email": "old@example.com", "message": "Hello there"})
                    .as_object()
                    .cloned()
                    .unwrap(),
            )
            .await
            .unwrap();
        let service = ContactService::new(Repository::new(store));

        let unread = service.get_unread_contacts().await.unwrap();
        assert_eq!(unread.len(), 1);
        assert!(!unread[0].is_read);
        assert!(!unread[0].is_replied());
    }

    #[tokio::test]
    async fn test_mark_read_missing_contact_fails() {
        let service = ContactService::new(memory_repository());
        assert!(service.mark_contact_read("ghost").await.is_err());
    }
}
