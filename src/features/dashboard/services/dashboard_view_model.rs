use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::dashboard::services::DashboardService;
use crate::modules::query_cache::{Entity, QueryClient, QueryKey};

/// Dashboard summary cached under the standard staleness window.
///
/// Every entity write invalidates it.
pub struct DashboardViewModel {
    service: Arc<DashboardService>,
    cache: QueryClient,
}

impl DashboardViewModel {
    pub fn new(service: Arc<DashboardService>, cache: QueryClient) -> Self {
        Self { service, cache }
    }

    pub async fn summary(&self) -> Result<Arc<DashboardSummaryDto>> {
        let service = self.service.clone();
        self.cache
            .fetch(QueryKey::new(Entity::Dashboard, "summary"), move || async move {
                service.get_summary().await
            })
            .await
    }
}
