//! 製程路線工期計算

use std::sync::Arc;

use erp_core::ResourceId;
use mrp_core::{MrpError, PPRoutingId, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::repository::RoutingRepository;

/// 依製程路線計算生產天數
pub trait RoutingService: Send + Sync {
    fn calculate_duration_days(
        &self,
        routing_id: PPRoutingId,
        plant_id: Option<ResourceId>,
        qty: Decimal,
    ) -> Result<u32>;
}

/// 以工序時間加總並按工廠每日工時換算天數
///
/// 未指定工廠時無法換算，回傳 0 天。
pub struct RoutingDurationCalculator {
    routings: Arc<dyn RoutingRepository>,
}

impl RoutingDurationCalculator {
    pub fn new(routings: Arc<dyn RoutingRepository>) -> Self {
        Self { routings }
    }
}

impl RoutingService for RoutingDurationCalculator {
    fn calculate_duration_days(
        &self,
        routing_id: PPRoutingId,
        plant_id: Option<ResourceId>,
        qty: Decimal,
    ) -> Result<u32> {
        let Some(plant_id) = plant_id else {
            tracing::debug!("製程路線 {} 未指定工廠，工期以 0 天計", routing_id);
            return Ok(0);
        };

        let routing = self.routings.get_routing(routing_id)?;
        let plant = self.routings.get_plant(plant_id)?;

        if plant.available_hours_per_day <= Decimal::ZERO {
            return Err(MrpError::CalculationError(format!(
                "工廠 {} 的每日可用工時必須大於 0: {}",
                plant.name, plant.available_hours_per_day
            )));
        }

        let total_hours = routing.total_hours(qty)?;
        let days = total_hours
            .checked_div(plant.available_hours_per_day)
            .ok_or_else(|| {
                MrpError::CalculationError(format!(
                    "製程路線 {} 工時 {} 無法以工廠 {} 每日工時換算",
                    routing.name, total_hours, plant.name
                ))
            })?
            .ceil();

        tracing::debug!(
            "製程路線 {} 數量 {}: 共 {} 小時，工廠 {} 每日 {} 小時 → {} 天",
            routing.name,
            qty,
            total_hours,
            plant.name,
            plant.available_hours_per_day,
            days
        );

        days.to_u32().ok_or_else(|| {
            MrpError::CalculationError(format!("製程路線 {} 工期超出範圍: {}", routing.name, days))
        })
    }
}
