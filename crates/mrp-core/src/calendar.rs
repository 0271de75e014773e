//! 工作日曆模型
//!
//! 工單排程以日曆往回推算開工日。預設使用 24/7 日曆，
//! 此時「工作日」等同於日曆日，結果與直接減去天數相同。

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{MrpError, Result};

/// 工作日曆
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkCalendar {
    /// 日曆ID
    pub calendar_id: String,

    /// 工作日（索引 0 = 週一, ..., 6 = 週日）
    pub working_days: [bool; 7],

    /// 節假日列表（保持排序）
    pub holidays: Vec<NaiveDate>,
}

impl WorkCalendar {
    /// 創建新的工作日曆（週一到週五為工作日）
    pub fn new(calendar_id: impl Into<String>) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            working_days: [true, true, true, true, true, false, false],
            holidays: Vec::new(),
        }
    }

    /// 創建 24/7 日曆（每天都是工作日）
    pub fn calendar_days() -> Self {
        Self {
            calendar_id: "CALENDAR-DAYS".to_string(),
            working_days: [true; 7],
            holidays: Vec::new(),
        }
    }

    /// 由排班資料建立（工作日向量超過 7 筆的部分忽略，不足的視為休息日）
    pub fn from_shift_data(
        calendar_id: impl Into<String>,
        working_days: &[bool],
        holidays: Vec<NaiveDate>,
    ) -> Self {
        let mut days = [false; 7];
        for (slot, &is_working) in days.iter_mut().zip(working_days) {
            *slot = is_working;
        }

        Self::new(calendar_id)
            .with_working_days(days)
            .with_holidays(holidays)
    }

    /// 建構器模式：設置工作日
    pub fn with_working_days(mut self, working_days: [bool; 7]) -> Self {
        self.working_days = working_days;
        self
    }

    /// 建構器模式：設置節假日
    pub fn with_holidays(mut self, mut holidays: Vec<NaiveDate>) -> Self {
        holidays.sort();
        holidays.dedup();
        self.holidays = holidays;
        self
    }

    /// 檢查是否為工作日
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        if self.holidays.binary_search(&date).is_ok() {
            return false;
        }

        let weekday_index = date.weekday().num_days_from_monday() as usize;
        self.working_days[weekday_index]
    }

    /// 往前推算工作日
    pub fn subtract_working_days(&self, start_date: NaiveDate, days: u32) -> Result<NaiveDate> {
        if days > 0 && !self.working_days.iter().any(|&d| d) {
            return Err(MrpError::InvalidDate(format!(
                "日曆 {} 沒有任何工作日",
                self.calendar_id
            )));
        }

        let mut current = start_date;
        let mut remaining = days;

        while remaining > 0 {
            current = current.checked_sub_days(Days::new(1)).ok_or_else(|| {
                MrpError::InvalidDate(format!("日期溢出: {} - {} 個工作日", start_date, days))
            })?;
            if self.is_working_day(current) {
                remaining -= 1;
            }
        }

        Ok(current)
    }
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::calendar_days()
    }
}
