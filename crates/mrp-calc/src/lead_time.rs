//! 提前期與工期計算

use chrono::NaiveDate;
use mrp_core::{MrpError, ProductPlanning, Result, WorkCalendar};
use rust_decimal::Decimal;

use crate::routing::RoutingService;

/// 規劃規則：由提前期推導總工期
pub trait PlanningRules: Send + Sync {
    fn calculate_duration_days(&self, leadtime_days: u32, planning: &ProductPlanning) -> Result<u32>;
}

/// 預設規劃規則：總工期 = 提前期 + 移轉時間
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPlanningRules;

impl PlanningRules for DefaultPlanningRules {
    fn calculate_duration_days(&self, leadtime_days: u32, planning: &ProductPlanning) -> Result<u32> {
        let transfer_days = planning.transfer_time_days()?;
        let transfer_days = u32::try_from(transfer_days).map_err(|_| {
            MrpError::InvalidLeadTime(format!(
                "產品規劃 {} 的移轉時間不可為負: {}",
                planning.id, transfer_days
            ))
        })?;

        leadtime_days.checked_add(transfer_days).ok_or_else(|| {
            MrpError::InvalidLeadTime(format!("工期超出範圍: {} + {}", leadtime_days, transfer_days))
        })
    }
}

/// 交期計算器
pub struct LeadTimeCalculator<'a> {
    planning_rules: &'a dyn PlanningRules,
    routing_service: &'a dyn RoutingService,
}

impl<'a> LeadTimeCalculator<'a> {
    pub fn new(planning_rules: &'a dyn PlanningRules, routing_service: &'a dyn RoutingService) -> Self {
        Self {
            planning_rules,
            routing_service,
        }
    }

    /// 計算提前期（天）
    ///
    /// 產品規劃的承諾交期大於 0 時直接採用，否則依製程路線計算。
    pub fn calculate_leadtime_days(&self, planning: &ProductPlanning, qty: Decimal) -> Result<u32> {
        let promised_days = planning.delivery_time_promised_days()?;
        if promised_days > 0 {
            tracing::debug!("產品規劃 {} 使用承諾交期 {} 天", planning.id, promised_days);
            return u32::try_from(promised_days).map_err(|_| {
                MrpError::InvalidLeadTime(format!("承諾交期超出範圍: {}", promised_days))
            });
        }

        let routing_id = planning.workflow_id.ok_or_else(|| {
            MrpError::InvalidLeadTime(format!("產品規劃 {} 未設定製程路線", planning.id))
        })?;

        let days = self
            .routing_service
            .calculate_duration_days(routing_id, planning.plant_id, qty)?;
        tracing::debug!("產品規劃 {} 依製程路線 {} 計算提前期 {} 天", planning.id, routing_id, days);

        Ok(days)
    }

    /// 計算總工期（天）
    pub fn calculate_duration_days(&self, planning: &ProductPlanning, qty: Decimal) -> Result<u32> {
        let leadtime_days = self.calculate_leadtime_days(planning, qty)?;
        self.planning_rules.calculate_duration_days(leadtime_days, planning)
    }

    /// 由完工日往前推算開工日
    pub fn calculate_start_date(
        finish_date: NaiveDate,
        duration_days: u32,
        calendar: &WorkCalendar,
    ) -> Result<NaiveDate> {
        calendar.subtract_working_days(finish_date, duration_days)
    }
}
