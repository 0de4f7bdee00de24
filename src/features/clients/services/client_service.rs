use crate::core::error::Result;
use crate::features::clients::dtos::{CreateClientDto, UpdateClientDto};
use crate::features::clients::models::Client;
use crate::modules::document_store::{Collection, Repository};

pub struct ClientService {
    repository: Repository,
}

impl ClientService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Clients ordered by `order` ascending; ties keep store order
    pub async fn get_clients(&self, active_only: bool) -> Result<Vec<Client>> {
        let mut clients: Vec<Client> = self.repository.get_all(Collection::Clients).await?;

        if active_only {
            clients.retain(|c| c.is_active);
        }
        clients.sort_by_key(|c| c.order);

        Ok(clients)
    }

    pub async fn get_client(&self, id: &str) -> Result<Option<Client>> {
        Ok(self.repository.get_by_id(Collection::Clients, id).await?)
    }

    pub async fn create_client(&self, dto: CreateClientDto) -> Result<String> {
        let id = self
            .repository
            .create(Collection::Clients, &dto)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create client: {:?}", e);
                e
            })?;

        tracing::info!("Client created: id={}, name={}", id, dto.name);
        Ok(id)
    }

    pub async fn update_client(&self, id: &str, dto: UpdateClientDto) -> Result<()> {
        self.repository
            .update(Collection::Clients, id, &dto)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update client {}: {:?}", id, e);
                e
            })?;

        tracing::info!("Client updated: id={}", id);
        Ok(())
    }

    pub async fn delete_client(&self, id: &str) -> Result<()> {
        self.repository
            .remove(Collection::Clients, id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete client {}: {:?}", id, e);
                e
            })?;

        tracing::info!("Client deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::memory_repository;
    use fake::faker::company::en::CompanyName;
    use fake::Fake;

    fn dto(order: i64, is_active: bool) -> CreateClientDto {
        CreateClientDto {
            name: CompanyName().fake(),
            country: "Philippines".to_string(),
            logo: None,
            website: None,
            order,
            is_active,
        }
    }

    #[tokio::test]
    async fn test_clients_ordered_and_filtered() {
        let service = ClientService::new(memory_repository());
        let third = service.create_client(dto(3, true)).await.unwrap();
        let first = service.create_client(dto(1, true)).await.unwrap();
        let hidden = service.create_client(dto(2, false)).await.unwrap();

        let active: Vec<String> = service
            .get_clients(true)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(active, vec![first.clone(), third.clone()]);

        let all: Vec<String> = service
            .get_clients(false)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(all, vec![first, hidden, third]);
    }

    #[tokio::test]
    async fn test_update_and_delete_client() {
        let service = ClientService::new(memory_repository());
        let id = service.create_client(dto(0, true)).await.unwrap();

        service
            .update_client(
                &id,
                UpdateClientDto {
                    website: Some("https://client.example".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let client = service.get_client(&id).await.unwrap().unwrap();
        assert_eq!(client.website.as_deref(), Some("https://client.example"));
        assert_eq!(client.country, "Philippines");

        service.delete_client(&id).await.unwrap();
        assert!(service.get_client(&id).await.unwrap().is_none());
    }
}
