//! 製程路線與工廠模型

use erp_core::ResourceId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::PPRoutingId;
use crate::{MrpError, Result};

fn overflow(what: &str) -> MrpError {
    MrpError::CalculationError(format!("{} 數值溢出", what))
}

/// 製程時間單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl DurationUnit {
    /// 換算為小時
    pub fn to_hours(&self, value: Decimal) -> Result<Decimal> {
        let hours = match self {
            DurationUnit::Second => value.checked_div(Decimal::from(3600)),
            DurationUnit::Minute => value.checked_div(Decimal::from(60)),
            DurationUnit::Hour => Some(value),
            DurationUnit::Day => value.checked_mul(Decimal::from(24)),
        };
        hours.ok_or_else(|| overflow("工時換算"))
    }
}

/// 製程作業（工序）
///
/// 時間欄位的單位由所屬製程路線的 [`DurationUnit`] 決定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingActivity {
    /// 工序代碼
    pub code: String,

    /// 準備時間
    #[serde(default)]
    pub setup_time: Decimal,

    /// 排隊時間
    #[serde(default)]
    pub queuing_time: Decimal,

    /// 等待時間
    #[serde(default)]
    pub waiting_time: Decimal,

    /// 搬運時間
    #[serde(default)]
    pub moving_time: Decimal,

    /// 每個週期的加工時間
    #[serde(default)]
    pub duration: Decimal,

    /// 每個週期可加工的數量
    #[serde(default = "default_units_per_cycle")]
    pub units_per_cycle: Decimal,
}

fn default_units_per_cycle() -> Decimal {
    Decimal::ONE
}

impl RoutingActivity {
    /// 創建新的工序
    pub fn new(code: impl Into<String>, duration: Decimal) -> Self {
        Self {
            code: code.into(),
            setup_time: Decimal::ZERO,
            queuing_time: Decimal::ZERO,
            waiting_time: Decimal::ZERO,
            moving_time: Decimal::ZERO,
            duration,
            units_per_cycle: Decimal::ONE,
        }
    }

    /// 建構器模式：設置準備時間
    pub fn with_setup_time(mut self, setup_time: Decimal) -> Self {
        self.setup_time = setup_time;
        self
    }

    /// 建構器模式：設置排隊、等待、搬運時間
    pub fn with_queue_wait_move(mut self, queuing: Decimal, waiting: Decimal, moving: Decimal) -> Self {
        self.queuing_time = queuing;
        self.waiting_time = waiting;
        self.moving_time = moving;
        self
    }

    /// 建構器模式：設置每週期數量
    pub fn with_units_per_cycle(mut self, units_per_cycle: Decimal) -> Self {
        self.units_per_cycle = units_per_cycle;
        self
    }

    /// 加工指定數量所需的總時間（製程路線單位）
    pub fn total_duration(&self, qty: Decimal) -> Result<Decimal> {
        let units_per_cycle = if self.units_per_cycle > Decimal::ZERO {
            self.units_per_cycle
        } else {
            Decimal::ONE
        };
        let cycles = qty
            .checked_div(units_per_cycle)
            .ok_or_else(|| overflow(&self.code))?
            .ceil();
        let processing = self
            .duration
            .checked_mul(cycles)
            .ok_or_else(|| overflow(&self.code))?;

        [self.queuing_time, self.waiting_time, self.moving_time, processing]
            .into_iter()
            .try_fold(self.setup_time, |total, t| total.checked_add(t))
            .ok_or_else(|| overflow(&self.code))
    }
}

/// 製程路線
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routing {
    pub id: PPRoutingId,
    pub name: String,
    pub duration_unit: DurationUnit,
    /// 依序執行的工序
    pub activities: Vec<RoutingActivity>,
}

impl Routing {
    /// 創建新的製程路線
    pub fn new(id: PPRoutingId, name: impl Into<String>, duration_unit: DurationUnit) -> Self {
        Self {
            id,
            name: name.into(),
            duration_unit,
            activities: Vec::new(),
        }
    }

    /// 建構器模式：添加工序
    pub fn with_activity(mut self, activity: RoutingActivity) -> Self {
        self.activities.push(activity);
        self
    }

    /// 加工指定數量所需的總時數
    pub fn total_hours(&self, qty: Decimal) -> Result<Decimal> {
        let mut total = Decimal::ZERO;
        for activity in &self.activities {
            total = total
                .checked_add(activity.total_duration(qty)?)
                .ok_or_else(|| overflow(&self.name))?;
        }
        self.duration_unit.to_hours(total)
    }
}

/// 工廠（生產資源）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: ResourceId,
    pub name: String,
    /// 每日可用工時
    pub available_hours_per_day: Decimal,
}

impl Plant {
    pub fn new(id: ResourceId, name: impl Into<String>, available_hours_per_day: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            available_hours_per_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_total_duration() {
        let activity = RoutingActivity::new("WELD", Decimal::from(2))
            .with_setup_time(Decimal::from(3))
            .with_units_per_cycle(Decimal::from(10));

        // 25 件 → 3 個週期
        assert_eq!(activity.total_duration(Decimal::from(25)).unwrap(), Decimal::from(9));
    }

    #[test]
    fn test_non_positive_units_per_cycle() {
        let activity =
            RoutingActivity::new("PAINT", Decimal::ONE).with_units_per_cycle(Decimal::ZERO);

        assert_eq!(activity.total_duration(Decimal::from(4)).unwrap(), Decimal::from(4));
    }

    #[test]
    fn test_routing_total_hours() {
        let routing = Routing::new(
            PPRoutingId::of_repo_id(1).unwrap(),
            "BIKE",
            DurationUnit::Minute,
        )
        .with_activity(RoutingActivity::new("CUT", Decimal::from(6)))
        .with_activity(
            RoutingActivity::new("ASSEMBLE", Decimal::from(12))
                .with_queue_wait_move(Decimal::from(30), Decimal::ZERO, Decimal::from(30)),
        );

        // (6 * 10) + (12 * 10 + 60) = 240 分鐘 = 4 小時
        assert_eq!(routing.total_hours(Decimal::from(10)).unwrap(), Decimal::from(4));
    }

    #[test]
    fn test_activity_overflow_is_error() {
        let activity = RoutingActivity::new("CUT", Decimal::from(1000))
            .with_units_per_cycle(Decimal::new(1, 6));

        let result = activity.total_duration(Decimal::from_i128_with_scale(10_i128.pow(22), 0));
        assert!(matches!(result, Err(MrpError::CalculationError(_))));
    }

    #[test]
    fn test_routing_sum_overflow_is_error() {
        let huge = RoutingActivity::new("CURE", Decimal::ZERO).with_setup_time(Decimal::MAX);
        let routing = Routing::new(PPRoutingId::of_repo_id(1).unwrap(), "OVEN", DurationUnit::Hour)
            .with_activity(huge.clone())
            .with_activity(huge);

        assert!(matches!(
            routing.total_hours(Decimal::ONE),
            Err(MrpError::CalculationError(_))
        ));
    }

    #[test]
    fn test_day_unit_overflow_is_error() {
        assert!(DurationUnit::Day.to_hours(Decimal::MAX).is_err());
        assert_eq!(DurationUnit::Minute.to_hours(Decimal::from(90)).unwrap(), Decimal::new(15, 1));
    }
}
