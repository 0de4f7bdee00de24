use std::sync::Arc;

use crate::core::error::Result;
use crate::features::clients::dtos::{CreateClientDto, UpdateClientDto};
use crate::features::clients::models::Client;
use crate::features::clients::services::ClientService;
use crate::modules::query_cache::{Entity, QueryClient, QueryKey};

pub struct ClientViewModel {
    service: Arc<ClientService>,
    cache: QueryClient,
}

impl ClientViewModel {
    pub fn new(service: Arc<ClientService>, cache: QueryClient) -> Self {
        Self { service, cache }
    }

    pub async fn clients(&self, active_only: bool) -> Result<Arc<Vec<Client>>> {
        let service = self.service.clone();
        self.cache
            .fetch(
                QueryKey::new(Entity::Clients, format!("list:active={}", active_only)),
                move || async move { service.get_clients(active_only).await },
            )
            .await
    }

    pub async fn client(&self, id: &str) -> Result<Arc<Option<Client>>> {
        let service = self.service.clone();
        let id = id.to_string();
        self.cache
            .fetch(
                QueryKey::new(Entity::Clients, format!("id={}", id)),
                move || async move { service.get_client(&id).await },
            )
            .await
    }

    pub async fn create(&self, dto: CreateClientDto) -> Result<String> {
        let id = self.service.create_client(dto).await?;
        self.cache.invalidate(&[Entity::Clients, Entity::Dashboard]);
        Ok(id)
    }

    pub async fn update(&self, id: &str, dto: UpdateClientDto) -> Result<()> {
        self.service.update_client(id, dto).await?;
        self.cache.invalidate(&[Entity::Clients, Entity::Dashboard]);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.service.delete_client(id).await?;
        self.cache.invalidate(&[Entity::Clients, Entity::Dashboard]);
        Ok(())
    }
}
